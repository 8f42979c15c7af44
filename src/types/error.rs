use serde::Serialize;
use std::fmt::Display;

/// The error taxonomy every API response draws from. The serialized
/// form is what clients see; anything richer stays in the carried
/// report on the server side.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Error {
    AccountExists,
    Internal,
    InvalidFormBody(validator::ValidateError),
    NotFound,
    SessionRejected,
    Unauthorized,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::AccountExists => f.write_str("Account already exists"),
            Error::Internal => f.write_str("Failed to perform request"),
            Error::InvalidFormBody(..) => f.write_str("Request body failed validation"),
            Error::NotFound => f.write_str("Resource not found"),
            Error::SessionRejected => f.write_str("Session rejected"),
            Error::Unauthorized => f.write_str("Unauthorized"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::Token;

    #[track_caller]
    fn assert_unit_variant(value: Error, variant: &'static str) {
        serde_test::assert_ser_tokens(
            &value,
            &[
                Token::Struct {
                    name: "Error",
                    len: 1,
                },
                Token::Str("type"),
                Token::Str(variant),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn test_serde_impl() {
        assert_unit_variant(Error::AccountExists, "account_exists");
        assert_unit_variant(Error::Internal, "internal");
        assert_unit_variant(Error::NotFound, "not_found");
        assert_unit_variant(Error::SessionRejected, "session_rejected");
        assert_unit_variant(Error::Unauthorized, "unauthorized");
    }

    #[test]
    fn test_messages_follow_wire_contract() {
        assert_eq!(Error::AccountExists.to_string(), "Account already exists");
        assert_eq!(Error::SessionRejected.to_string(), "Session rejected");
        assert_eq!(Error::Unauthorized.to_string(), "Unauthorized");
    }
}
