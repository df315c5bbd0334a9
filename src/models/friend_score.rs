use serde::{Deserialize, Serialize};

use super::UserId;

/// Friend resolved with its current highscore (read-side join result)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FriendScore {
    pub friend_id: UserId,
    pub name: String,
    pub score: u64,
}
