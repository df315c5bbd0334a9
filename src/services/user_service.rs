// ==================== IDENTITY REGISTRY ====================
// Fonte única de verdade para "este id existe?"

use uuid::Uuid;

use crate::{
    database::Storage,
    models::{User, UserId},
    services::game_state_service,
    utils::{StoreError, StoreResult},
};

/// Cria um usuário com id novo e progresso inicial `{0, 0}`
pub fn create_user(db: &Storage, name: &str) -> StoreResult<User> {
    register_user(db, Uuid::new_v4(), name)
}

// Id collisions surface as AlreadyExists, no retry.
pub(crate) fn register_user(db: &Storage, user_id: UserId, name: &str) -> StoreResult<User> {
    db.users().insert_if_absent(user_id, name.to_string())?;

    // No rollback of the registry entry if this fails.
    if let Err(e) = game_state_service::initialize(db, user_id) {
        log::error!(
            "❌ User {} registered but game state initialization failed: {}",
            user_id,
            e
        );
        return Err(e);
    }

    log::info!("👤 Created user {} ({})", user_id, name);
    Ok(User::new(user_id, name))
}

pub fn user_exists(db: &Storage, user_id: &UserId) -> bool {
    db.users().contains(user_id)
}

pub fn get_user_name(db: &Storage, user_id: &UserId) -> StoreResult<String> {
    db.users()
        .get(user_id)
        .map(|slot| slot.value)
        .ok_or(StoreError::NotFound)
}

/// Diagnostic listing of every registered user. Order is unspecified.
pub fn debug_get_all_users(db: &Storage) -> Vec<User> {
    db.users()
        .entries()
        .into_iter()
        .map(|(id, name)| User::new(id, name))
        .collect()
}
