use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::types::id::{marker::UserMarker, Id};

/// A registered vendor account. `email` is stored in its normalized
/// form (lower-cased, denylist-stripped) and is unique across the
/// document; `id` is the only key other operations look records up by.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Id<UserMarker>,
    pub email: String,
    pub real_name: String,
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

/// The persisted shape of `users.json`.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UserDocument {
    pub users: Vec<User>,
}

impl UserDocument {
    pub fn by_id(&self, id: Id<UserMarker>) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|user| user.email == email)
    }

    /// Exact string match; callers are expected to pass the already
    /// normalized form.
    #[must_use]
    pub fn email_taken(&self, email: &str) -> bool {
        self.users.iter().any(|user| user.email == email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn account(id: u64, email: &str) -> User {
        User {
            id: Id::new(id),
            email: email.into(),
            real_name: "Jane Doe".into(),
            password_hash: "$2b$12$abcdefghijklmnopqrstuv".into(),
            created_at: NaiveDate::from_ymd_opt(2026, 1, 10)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
        }
    }

    #[test]
    fn lookups() {
        let document = UserDocument {
            users: vec![account(1, "a@b.com"), account(2, "c@d.com")],
        };

        assert_eq!(document.by_id(Id::new(2)).map(|u| u.email.as_str()), Some("c@d.com"));
        assert!(document.by_id(Id::new(3)).is_none());
        assert!(document.email_taken("a@b.com"));
        // the duplicate check is exact, not case-folding
        assert!(!document.email_taken("A@B.com"));
    }

    #[test]
    fn document_round_trips_through_json() {
        let document = UserDocument {
            users: vec![account(1, "a@b.com")],
        };

        let encoded = serde_json::to_string_pretty(&document).unwrap();
        assert!(encoded.contains("\"realName\""));
        assert!(encoded.contains("\"passwordHash\""));

        let decoded: UserDocument = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.users, document.users);
    }
}
