pub mod dto;
pub mod friend_score;
pub mod game_state;
pub mod requests;
pub mod user;

pub use dto::*;
pub use friend_score::*;
pub use game_state::*;
pub use requests::*;
pub use user::*;
