use chrono::{NaiveDateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::types::id::{marker::UserMarker, Id};

const TOKEN_CHARSET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const TOKEN_LENGTH: usize = 24;

#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub created_at: NaiveDateTime,
}

/// Process-local record of which users are logged in. At most one
/// active session per user id; a second login is rejected until the
/// first one logs out. Sessions do not survive a restart.
#[derive(Debug, Clone, Default)]
pub struct Sessions {
    inner: Arc<Mutex<HashMap<Id<UserMarker>, Session>>>,
}

impl Sessions {
    fn lock(&self) -> MutexGuard<'_, HashMap<Id<UserMarker>, Session>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records an active session for the user. Returns `None` when one
    /// already exists; callers turn that into a rejected login.
    pub fn track(&self, user_id: Id<UserMarker>) -> Option<Session> {
        let mut sessions = self.lock();
        if sessions.contains_key(&user_id) {
            return None;
        }

        let session = Session {
            token: random_string::generate(TOKEN_LENGTH, TOKEN_CHARSET),
            created_at: Utc::now().naive_utc(),
        };
        sessions.insert(user_id, session.clone());
        Some(session)
    }

    /// Removes the user's session, if any. Logging out twice is fine.
    pub fn logout(&self, user_id: Id<UserMarker>) -> bool {
        self.lock().remove(&user_id).is_some()
    }

    #[must_use]
    pub fn is_active(&self, user_id: Id<UserMarker>) -> bool {
        self.lock().contains_key(&user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_login_is_rejected_until_logout() {
        let sessions = Sessions::default();
        let user = Id::new(7);

        assert!(sessions.track(user).is_some());
        assert!(sessions.is_active(user));
        assert!(sessions.track(user).is_none());

        assert!(sessions.logout(user));
        assert!(!sessions.is_active(user));
        assert!(sessions.track(user).is_some());
    }

    #[test]
    fn logout_is_idempotent() {
        let sessions = Sessions::default();
        let user = Id::new(9);

        assert!(!sessions.logout(user));
        assert!(sessions.track(user).is_some());
        assert!(sessions.logout(user));
        assert!(!sessions.logout(user));
    }

    #[test]
    fn tokens_are_distinct_per_session() {
        let sessions = Sessions::default();
        let first = sessions.track(Id::new(1)).unwrap();
        let second = sessions.track(Id::new(2)).unwrap();

        assert_eq!(first.token.len(), TOKEN_LENGTH);
        assert_ne!(first.token, second.token);
    }
}
