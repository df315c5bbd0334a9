pub mod friend_scores_service;
pub mod friends_service;
pub mod game_state_service;
pub mod user_service;

pub use friend_scores_service::*;
pub use friends_service::*;
pub use game_state_service::*;
pub use user_service::*;
