use actix_web::{
    web::{self, Json},
    HttpResponse,
};
use serde_json::json;
use thiserror::Error;
use validator::ValidateError;

use crate::{http::Error, types, types::form::compliance::MarkCompleted, App};

#[tracing::instrument]
pub async fn mark_completed(
    app: web::Data<App>,
    form: Json<MarkCompleted>,
) -> Result<HttpResponse, Error> {
    let Some(id) = form.id else {
        return Err(ValidateError::message("id", "ID is required").into());
    };

    let mut tx = app.compliance.begin().await?;
    let Some(item) = tx.toggle(id) else {
        #[derive(Debug, Error)]
        #[error("Checklist item not found")]
        struct ItemNotFound;
        return Err(Error::from_context(types::Error::NotFound, ItemNotFound));
    };

    let item = item.clone();
    let (score, completed, total) = (tx.score(), tx.completed(), tx.checklist.len());
    tx.commit().await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Checklist item updated",
        "score": score,
        "completed": completed,
        "total": total,
        "item": item,
    })))
}
