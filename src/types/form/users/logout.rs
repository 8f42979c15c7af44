use serde::Deserialize;

use crate::types::id::{marker::UserMarker, Id};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub user_id: Id<UserMarker>,
}
