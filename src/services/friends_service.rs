// ==================== SOCIAL GRAPH STORE ====================

use std::collections::HashSet;

use crate::{
    database::Storage,
    models::UserId,
    services::user_service,
};

/// Candidates that are unknown or equal to `user_id` are dropped and duplicates
/// collapse. The previous set is overwritten, never merged.
pub fn update_friends(db: &Storage, user_id: &UserId, candidates: &[UserId]) -> HashSet<UserId> {
    let friends: HashSet<UserId> = candidates
        .iter()
        .copied()
        .filter(|friend_id| friend_id != user_id && user_service::user_exists(db, friend_id))
        .collect();

    if friends.len() != candidates.len() {
        log::debug!(
            "👥 Filtered {} of {} friend candidates for {}",
            candidates.len() - friends.len(),
            candidates.len(),
            user_id
        );
    }

    db.friends().replace(*user_id, friends).value
}

/// Empty when the user never saved a friend list.
pub fn get_friends(db: &Storage, user_id: &UserId) -> HashSet<UserId> {
    db.friends()
        .get(user_id)
        .map(|slot| slot.value)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn create(db: &Storage, name: &str) -> UserId {
        user_service::create_user(db, name).unwrap().id
    }

    #[test]
    fn test_duplicates_collapse() {
        let db = Storage::default();
        let (u, f) = (create(&db, "Alice"), create(&db, "Bob"));

        let friends = update_friends(&db, &u, &[f, f]);

        assert_eq!(friends, HashSet::from([f]));
    }

    #[test]
    fn test_self_is_excluded() {
        let db = Storage::default();
        let u = create(&db, "Alice");

        assert!(update_friends(&db, &u, &[u]).is_empty());
    }

    #[test]
    fn test_unknown_ids_are_dropped() {
        let db = Storage::default();
        let u = create(&db, "Alice");

        assert!(update_friends(&db, &u, &[Uuid::new_v4()]).is_empty());
        assert!(get_friends(&db, &u).is_empty());
    }

    #[test]
    fn test_update_overwrites_previous_set() {
        let db = Storage::default();
        let u = create(&db, "Alice");
        let (a, b, c) = (create(&db, "A"), create(&db, "B"), create(&db, "C"));

        update_friends(&db, &u, &[a, b]);
        let friends = update_friends(&db, &u, &[c]);

        assert_eq!(friends, HashSet::from([c]));
        assert_eq!(get_friends(&db, &u), HashSet::from([c]));
    }

    #[test]
    fn test_empty_update_clears_friends() {
        let db = Storage::default();
        let (u, f) = (create(&db, "Alice"), create(&db, "Bob"));
        update_friends(&db, &u, &[f]);

        assert!(update_friends(&db, &u, &[]).is_empty());
        assert!(get_friends(&db, &u).is_empty());
    }

    #[test]
    fn test_get_friends_never_written() {
        let db = Storage::default();
        assert!(get_friends(&db, &Uuid::new_v4()).is_empty());
    }
}
