mod collection;

pub(crate) use collection::{Collection, Versioned};

use std::collections::HashSet;

use crate::config::Config;
use crate::models::{GameState, UserId};

/// Volatile storage. Each collection plays the role of a table keyed by user id;
/// nothing survives the process.
#[derive(Debug)]
pub struct Storage {
    users: Collection<String>,
    game_states: Collection<GameState>,
    friends: Collection<HashSet<UserId>>,
}

impl Storage {
    pub fn new(config: &Config) -> Self {
        log::info!(
            "🔧 Creating in-memory collections (shards: {})",
            config
                .store_shards
                .map_or_else(|| "default".to_string(), |n| n.to_string())
        );

        Self {
            users: Collection::new(config.store_shards),
            game_states: Collection::new(config.store_shards),
            friends: Collection::new(config.store_shards),
        }
    }

    /// user id -> display name
    pub(crate) fn users(&self) -> &Collection<String> {
        &self.users
    }

    pub(crate) fn game_states(&self) -> &Collection<GameState> {
        &self.game_states
    }

    pub(crate) fn friends(&self) -> &Collection<HashSet<UserId>> {
        &self.friends
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
