use actix_web::{web, HttpResponse};
use serde_json::json;
use thiserror::Error;

use crate::{http::Error, types, App};

#[tracing::instrument]
pub async fn delete(app: web::Data<App>, path: web::Path<u32>) -> Result<HttpResponse, Error> {
    let id = path.into_inner();

    let mut tx = app.compliance.begin().await?;
    let Some(removed) = tx.remove(id) else {
        #[derive(Debug, Error)]
        #[error("Checklist item not found")]
        struct ItemNotFound;
        return Err(Error::from_context(types::Error::NotFound, ItemNotFound));
    };
    tx.commit().await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Checklist item deleted",
        "deletedItem": removed,
    })))
}
