use error_stack::Context;
use std::result::Result as StdResult;

use super::{Error, Result};
use crate::types;

/// Turns lower-layer `error_stack` results into HTTP results with an
/// explicit taxonomy variant.
pub trait ErrorStackExt<T> {
    fn with_error_type(self, error_type: types::Error) -> Result<T>;
    fn into_http_result(self) -> Result<T>;
}

impl<T, C: Context> ErrorStackExt<T> for error_stack::Result<T, C> {
    fn with_error_type(self, error_type: types::Error) -> Result<T> {
        self.map_err(|e| Error::from_report(error_type, e))
    }

    fn into_http_result(self) -> Result<T> {
        self.with_error_type(types::Error::Internal)
    }
}

/// Same, for plain error types that have not been wrapped into a
/// report yet (`std::io::Error`, `tokio::task::JoinError`, ...).
pub trait StdErrorExt<T> {
    fn with_error_type(self, error_type: types::Error) -> Result<T>;
    fn into_http_result(self) -> Result<T>;
}

impl<T, C: Context> StdErrorExt<T> for StdResult<T, C> {
    fn with_error_type(self, error_type: types::Error) -> Result<T> {
        self.map_err(|e| Error::from_context(error_type, e))
    }

    fn into_http_result(self) -> Result<T> {
        self.with_error_type(types::Error::Internal)
    }
}
