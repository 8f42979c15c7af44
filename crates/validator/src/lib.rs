#![cfg_attr(test, allow(clippy::unwrap_used))]

mod error;

pub use error::*;

/// Types that can check their own contents before the rest of
/// the application is allowed to act on them.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidateError>;
}
