use error_stack::Report;
use thiserror::Error;

/// Document store related errors
#[derive(Debug, Error)]
pub enum Error {
    /// The backing file exists but does not contain valid JSON.
    /// The parse error is propagated, never repaired in place.
    #[error("store file is not valid JSON")]
    Corrupted,
    /// A document could not be serialized before writing it out.
    #[error("failed to encode store document")]
    Encode,
    /// An error surfaced by the filesystem.
    #[error("store I/O failed: {0}")]
    Io(std::io::Error),
}

/// Converts from a raw I/O result into a [store compatible error](Error).
pub trait ErrorExt<T> {
    fn into_store_error(self) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn into_store_error(self) -> Result<T> {
        self.map_err(|e| Report::new(Error::Io(e)))
    }
}

/// Lazily typed [`std::result::Result`] but the error generic
/// is filled up with [a store error](Error).
pub type Result<T> = error_stack::Result<T, Error>;

/// Convenience checks against `error_stack::Report<Error>` so callers
/// do not have to spell out the downcast dance.
pub trait ErrorExt2 {
    fn is_corrupted(&self) -> bool;
}

impl ErrorExt2 for error_stack::Report<Error> {
    fn is_corrupted(&self) -> bool {
        self.downcast_ref::<Error>()
            .map(|v| matches!(v, Error::Corrupted))
            .unwrap_or_default()
    }
}
