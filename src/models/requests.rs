// ==================== REQUEST MODELS ====================

use serde::Deserialize;

use super::UserId;
use crate::utils::ValidationError;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SaveGameStateRequest {
    #[serde(rename = "gamesPlayed")]
    pub games_played: u32,
    pub score: u64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateFriendsRequest {
    pub friends: Vec<UserId>,
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)
    }
}

/// Nome não pode ser vazio (nem só espaços)
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}
