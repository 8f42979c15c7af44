use indexmap::IndexMap;
use serde::{ser::SerializeMap, Serialize};
use std::borrow::Cow;

/// Collects messages for a single field.
pub struct MessageBuilder(Vec<Cow<'static, str>>);

impl MessageBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn insert(&mut self, message: impl Into<Cow<'static, str>>) {
        self.0.push(message.into());
    }

    #[must_use]
    pub fn build(self) -> ValidateError {
        ValidateError::Messages(self.0)
    }
}

/// Collects per-field errors; fields with no messages are dropped
/// so an error built from untouched builders stays empty.
pub struct FieldBuilder(IndexMap<Cow<'static, str>, ValidateError>);

#[allow(clippy::new_without_default)]
impl FieldBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::default())
    }

    pub fn insert(&mut self, key: impl Into<Cow<'static, str>>, value: ValidateError) {
        if !value.is_empty() {
            self.0.insert(key.into(), value);
        }
    }

    #[must_use]
    pub fn build(self) -> ValidateError {
        ValidateError::Fields(self.0)
    }
}

// ---------------------------------------------------- //

#[derive(PartialEq, Eq)]
pub enum ValidateError {
    Fields(IndexMap<Cow<'static, str>, ValidateError>),
    Messages(Vec<Cow<'static, str>>),
}

impl std::fmt::Display for ValidateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Invalid data occurred")
    }
}

impl std::error::Error for ValidateError {}

impl std::fmt::Debug for ValidateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidateError::Fields(n) => n.fmt(f),
            ValidateError::Messages(n) => f.debug_map().entry(&"_errors", &n).finish(),
        }
    }
}

impl ValidateError {
    #[must_use]
    pub fn field_builder() -> FieldBuilder {
        FieldBuilder::new()
    }

    #[must_use]
    pub fn msg_builder() -> MessageBuilder {
        MessageBuilder::new()
    }

    /// Shorthand for a single-field, single-message error.
    #[must_use]
    pub fn message(
        field: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        let mut msg = Self::msg_builder();
        msg.insert(message);

        let mut fields = Self::field_builder();
        fields.insert(field, msg.build());
        fields.build()
    }
}

impl ValidateError {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            ValidateError::Fields(n) => n.is_empty(),
            ValidateError::Messages(n) => n.is_empty(),
        }
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl<'de> serde::Deserialize<'de> for ValidateError {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;

        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = ValidateError;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("ValidateError type")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut fields = IndexMap::new();
                let mut messages = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "_errors" => {
                            if messages.is_some() {
                                return Err(serde::de::Error::duplicate_field("_errors"));
                            }
                            messages = Some(map.next_value::<Vec<Cow<'static, str>>>()?);
                        }
                        _ => {
                            fields.insert(Cow::Owned(key), map.next_value()?);
                        }
                    }
                }

                if let Some(data) = messages {
                    Ok(ValidateError::Messages(data))
                } else if !fields.is_empty() {
                    Ok(ValidateError::Fields(fields))
                } else {
                    Err(serde::de::Error::custom("error fields must not be empty"))
                }
            }
        }

        deserializer.deserialize_any(Visitor)
    }
}

impl Serialize for ValidateError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            ValidateError::Fields(n) => {
                let mut map = serializer.serialize_map(Some(n.len()))?;
                for (key, value) in n {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            ValidateError::Messages(n) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("_errors", &n)?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Validate;
    use serde_test::Token;

    #[derive(Debug)]
    struct Applicant {
        email: &'static str,
        age: u32,
    }

    impl Validate for Applicant {
        fn validate(&self) -> Result<(), ValidateError> {
            let mut fields = ValidateError::field_builder();
            {
                let mut msg = ValidateError::msg_builder();
                if !self.email.contains('@') {
                    msg.insert("Invalid e-mail address");
                }
                fields.insert("email", msg.build());
            }
            {
                let mut msg = ValidateError::msg_builder();
                if self.age < 18 {
                    msg.insert("Too young to apply");
                }
                fields.insert("age", msg.build());
            }
            fields.build().into_result()
        }
    }

    #[test]
    fn test_debug_fmt() {
        const EXPECTED_FMT_MSG: &str =
            r#"{"email": {"_errors": ["Invalid e-mail address"]}, "age": {"_errors": ["Too young to apply"]}}"#;

        let error = Applicant { email: "nope", age: 12 }.validate().unwrap_err();
        assert_eq!(EXPECTED_FMT_MSG, format!("{error:?}"));
    }

    #[test]
    fn test_serde_impl() {
        let error = Applicant { email: "nope", age: 30 }.validate().unwrap_err();
        serde_test::assert_tokens(
            &error,
            &[
                Token::Map { len: Some(1) },
                Token::Str("email"),
                Token::Map { len: Some(1) },
                Token::Str("_errors"),
                Token::Seq { len: Some(1) },
                Token::Str("Invalid e-mail address"),
                Token::SeqEnd,
                Token::MapEnd,
                Token::MapEnd,
            ],
        );
    }

    #[test]
    fn test_message_shorthand() {
        let error = ValidateError::message("id", "ID is required");
        assert!(!error.is_empty());
        assert_eq!(
            format!("{error:?}"),
            r#"{"id": {"_errors": ["ID is required"]}}"#
        );
    }

    #[test]
    fn validate_error_is_empty() {
        assert!(MessageBuilder::new().build().is_empty());
        assert!(FieldBuilder::new().build().is_empty());

        let mut msg = MessageBuilder::new();
        msg.insert("Hello world!");
        assert!(!msg.build().is_empty());

        {
            let mut msg = MessageBuilder::new();
            msg.insert("Hello world!");

            let mut err = FieldBuilder::new();
            err.insert("vendor", msg.build());
            assert!(!err.build().is_empty());
        }
    }
}
