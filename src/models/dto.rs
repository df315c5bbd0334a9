// ==================== TRANSPORT OBJECTS ====================
// Formato JSON exposto pela camada HTTP. Conversões são funções puras (`From`)
// a partir dos registros internos, sem estado compartilhado.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{FriendScore, GameState, User, UserId};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UserDto {
    pub id: UserId,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GameStateDto {
    #[serde(rename = "gamesPlayed")]
    pub games_played: u32,
    pub score: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FriendsDto {
    pub friends: HashSet<UserId>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FriendScoreDto {
    pub id: UserId,
    pub name: String,
    #[serde(rename = "highscore")]
    pub score: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FriendScoresDto {
    pub friends: Vec<FriendScoreDto>,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
        }
    }
}

impl From<GameState> for GameStateDto {
    fn from(state: GameState) -> Self {
        Self {
            games_played: state.games_played,
            score: state.score,
        }
    }
}

impl From<HashSet<UserId>> for FriendsDto {
    fn from(friends: HashSet<UserId>) -> Self {
        Self { friends }
    }
}

impl From<&FriendScore> for FriendScoreDto {
    fn from(friend: &FriendScore) -> Self {
        Self {
            id: friend.friend_id,
            name: friend.name.clone(),
            score: friend.score,
        }
    }
}

impl From<&[FriendScore]> for FriendScoresDto {
    fn from(friends: &[FriendScore]) -> Self {
        Self {
            friends: friends.iter().map(FriendScoreDto::from).collect(),
        }
    }
}
