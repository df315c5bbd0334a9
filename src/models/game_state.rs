use serde::{Deserialize, Serialize};

/// Progresso do jogador. `score` é o highscore acumulado.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameState {
    pub games_played: u32,
    pub score: u64,
}

impl GameState {
    pub fn new(games_played: u32, score: u64) -> Self {
        Self { games_played, score }
    }

    /// True when moving from `self` to `next` would decrease either field.
    pub fn regresses_to(&self, next: &GameState) -> bool {
        next.games_played < self.games_played || next.score < self.score
    }
}
