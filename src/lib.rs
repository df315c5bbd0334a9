//! In-memory player progress and friends store for a multiplayer game backend.
//!
//! Request handling lives outside this crate: callers validate the request
//! (see [`models::requests`]), check [`services::user_exists`], then call exactly
//! one service function against a shared [`database::Storage`].

pub mod config;
pub mod database;
pub mod models;
pub mod services;
pub mod utils;

pub use config::{Config, ConfigError};
pub use database::Storage;
pub use utils::{StoreError, StoreResult};
