// ==================== PROGRESS STORE ====================

use crate::{
    database::{Storage, Versioned},
    models::{GameState, UserId},
    utils::{StoreError, StoreResult},
};

/// Insere `{0, 0}` para um usuário novo (chamado uma única vez na criação)
pub fn initialize(db: &Storage, user_id: UserId) -> StoreResult<()> {
    db.game_states().insert_if_absent(user_id, GameState::default())
}

/// Atualiza o progresso do jogador (compare-and-swap, sem retry)
pub fn update_game_state(
    db: &Storage,
    user_id: &UserId,
    games_played: u32,
    score: u64,
) -> StoreResult<GameState> {
    let snapshot = read_snapshot(db, user_id)?;
    commit(db, user_id, &snapshot, GameState::new(games_played, score))
}

fn read_snapshot(db: &Storage, user_id: &UserId) -> StoreResult<Versioned<GameState>> {
    db.game_states().get(user_id).ok_or(StoreError::NotFound)
}

// Fails with ExpectedStateMismatch on regression or when the slot moved past `snapshot`.
fn commit(
    db: &Storage,
    user_id: &UserId,
    snapshot: &Versioned<GameState>,
    proposed: GameState,
) -> StoreResult<GameState> {
    if snapshot.value.regresses_to(&proposed) {
        log::warn!(
            "⚠️  Rejected regressing game state for {}: {:?} -> {:?}",
            user_id,
            snapshot.value,
            proposed
        );
        return Err(StoreError::ExpectedStateMismatch);
    }

    match db
        .game_states()
        .compare_and_swap(user_id, snapshot.version, proposed)
    {
        Ok(stored) => {
            log::debug!("🎮 Game state for {} updated to {:?}", user_id, stored.value);
            Ok(stored.value)
        }
        Err(e) => {
            log::warn!("⚠️  Concurrent game state update for {} lost the race", user_id);
            Err(e)
        }
    }
}

pub fn get_game_state(db: &Storage, user_id: &UserId) -> StoreResult<GameState> {
    db.game_states()
        .get(user_id)
        .map(|slot| slot.value)
        .ok_or(StoreError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::user_service;
    use uuid::Uuid;

    #[test]
    fn test_initialize_twice() {
        let db = Storage::default();
        let id = Uuid::new_v4();

        assert!(initialize(&db, id).is_ok());
        assert_eq!(initialize(&db, id), Err(StoreError::AlreadyExists));
    }

    #[test]
    fn test_update_accepts_equal_and_increasing_values() {
        let db = Storage::default();
        let user = user_service::create_user(&db, "Alice").unwrap();

        assert_eq!(update_game_state(&db, &user.id, 10, 300), Ok(GameState::new(10, 300)));
        assert_eq!(update_game_state(&db, &user.id, 10, 300), Ok(GameState::new(10, 300)));
        assert_eq!(update_game_state(&db, &user.id, 11, 350), Ok(GameState::new(11, 350)));
    }

    #[test]
    fn test_update_rejects_regression_of_either_field() {
        let db = Storage::default();
        let user = user_service::create_user(&db, "Alice").unwrap();
        update_game_state(&db, &user.id, 10, 300).unwrap();

        assert_eq!(
            update_game_state(&db, &user.id, 9, 300),
            Err(StoreError::ExpectedStateMismatch)
        );
        assert_eq!(
            update_game_state(&db, &user.id, 12, 299),
            Err(StoreError::ExpectedStateMismatch)
        );
        assert_eq!(get_game_state(&db, &user.id), Ok(GameState::new(10, 300)));
    }

    #[test]
    fn test_second_commit_from_same_snapshot_loses() {
        let db = Storage::default();
        let user = user_service::create_user(&db, "Alice").unwrap();

        let first = read_snapshot(&db, &user.id).unwrap();
        let second = read_snapshot(&db, &user.id).unwrap();

        assert_eq!(
            commit(&db, &user.id, &first, GameState::new(1, 50)),
            Ok(GameState::new(1, 50))
        );
        assert_eq!(
            commit(&db, &user.id, &second, GameState::new(2, 80)),
            Err(StoreError::ExpectedStateMismatch)
        );
        assert_eq!(get_game_state(&db, &user.id), Ok(GameState::new(1, 50)));
    }

    #[test]
    fn test_update_unknown_user() {
        let db = Storage::default();
        assert_eq!(
            update_game_state(&db, &Uuid::new_v4(), 1, 1),
            Err(StoreError::NotFound)
        );
        assert_eq!(get_game_state(&db, &Uuid::new_v4()), Err(StoreError::NotFound));
    }
}
