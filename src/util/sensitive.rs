use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};

/// Keeps the raw sensitive data in memory but it cannot be
/// accidentally leaked through the console or logs.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Debug for Sensitive<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("<hidden>").finish()
    }
}

impl<T> Display for Sensitive<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("<hidden>").finish()
    }
}

impl<T> AsRef<T> for Sensitive<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T: AsRef<str>> Sensitive<T> {
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0.as_ref().to_string()
    }
}

impl<T> From<T> for Sensitive<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Sensitive;

    #[test]
    fn test_fmt() {
        let value = Sensitive::new("hello");
        assert_eq!(value.to_string(), "<hidden>");
        assert_eq!(format!("{value:?}"), "<hidden>");
    }

    #[test]
    fn test_serde_is_transparent() {
        let value: Sensitive<String> = serde_json::from_str("\"hunter2\"").unwrap();
        assert_eq!(value.as_str(), "hunter2");
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"hunter2\"");
    }
}
