use serde::{Deserialize, Serialize};

use crate::{
    types::id::{marker::UserMarker, Id},
    util::Sensitive,
};

/// Fields default to empty strings so a missing field flows through
/// the sanitizer and fails as "invalid email format" rather than as a
/// deserialization error, matching what clients already rely on.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(default)]
    pub email: Sensitive<String>,
    #[serde(default)]
    pub password: Sensitive<String>,
    #[serde(default)]
    pub real_name: String,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub user_id: Id<UserMarker>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_empty() {
        let request: Request = serde_json::from_str("{}").unwrap();
        assert_eq!(request.email.as_str(), "");
        assert_eq!(request.password.as_str(), "");
        assert_eq!(request.real_name, "");
    }

    #[test]
    fn response_uses_camel_case() {
        let response = Response {
            user_id: Id::new(42),
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({ "userId": "42" })
        );
    }
}
