use serde::Deserialize;
use std::path::PathBuf;
use validator::{Validate, ValidateError};

/// Where the service keeps its persisted JSON documents and
/// vendor-uploaded files.
#[derive(Debug, Deserialize)]
pub struct Data {
    /// Directory holding `users.json`, `compliance.json` and
    /// `alerts.json`.
    ///
    /// **Environment variables**:
    /// - `MITRA_DATA_DIR`
    #[serde(default = "Data::default_dir")]
    pub dir: PathBuf,
    /// Directory holding per-user upload subdirectories.
    ///
    /// **Environment variables**:
    /// - `MITRA_DATA_UPLOADS`
    #[serde(default = "Data::default_uploads")]
    pub uploads: PathBuf,
}

impl Default for Data {
    fn default() -> Self {
        Self {
            dir: Self::default_dir(),
            uploads: Self::default_uploads(),
        }
    }
}

impl Data {
    // Required by serde
    fn default_dir() -> PathBuf {
        PathBuf::from("data")
    }

    fn default_uploads() -> PathBuf {
        PathBuf::from("uploads")
    }
}

impl Validate for Data {
    fn validate(&self) -> Result<(), ValidateError> {
        let mut fields = ValidateError::field_builder();
        fields.insert("dir", {
            let mut msg = ValidateError::msg_builder();
            if self.dir.as_os_str().is_empty() {
                msg.insert("Data directory must not be empty");
            }
            msg.build()
        });
        fields.insert("uploads", {
            let mut msg = ValidateError::msg_builder();
            if self.uploads.as_os_str().is_empty() {
                msg.insert("Uploads directory must not be empty");
            }
            msg.build()
        });
        fields.build().into_result()
    }
}
