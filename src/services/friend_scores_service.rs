// ==================== FRIEND SCORE AGGREGATOR ====================

use crate::{
    database::Storage,
    models::{FriendScore, UserId},
    services::{friends_service, game_state_service, user_service},
};

/// Busca nome e highscore de cada amigo (amigos não resolvidos são ignorados)
pub fn get_friend_scores(db: &Storage, user_id: &UserId) -> Vec<FriendScore> {
    // Assumes small friend lists; no pagination.
    friends_service::get_friends(db, user_id)
        .into_iter()
        .filter_map(|friend_id| resolve_friend(db, friend_id))
        .collect()
}

fn resolve_friend(db: &Storage, friend_id: UserId) -> Option<FriendScore> {
    let name = match user_service::get_user_name(db, &friend_id) {
        Ok(name) => name,
        Err(_) => {
            log::warn!("⚠️  Username could not be found for friend with id {}", friend_id);
            return None;
        }
    };

    let state = match game_state_service::get_game_state(db, &friend_id) {
        Ok(state) => state,
        Err(_) => {
            log::warn!("⚠️  GameState could not be found for friend with id {}", friend_id);
            return None;
        }
    };

    Some(FriendScore {
        friend_id,
        name,
        score: state.score,
    })
}
