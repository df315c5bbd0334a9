use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identificador único do usuário (gerado na criação, nunca muda)
pub type UserId = Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,  // PRIMARY IDENTIFIER - key of every collection
    pub name: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}
