use serde::{Deserialize, Serialize};

use crate::{
    types::id::{marker::UserMarker, Id},
    util::Sensitive,
};

#[derive(Debug, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub email: Sensitive<String>,
    #[serde(default)]
    pub password: Sensitive<String>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub user_id: Id<UserMarker>,
}
