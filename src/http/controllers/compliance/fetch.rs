use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::{http::Error, App};

#[tracing::instrument]
pub async fn fetch(app: web::Data<App>) -> Result<HttpResponse, Error> {
    let document = app.compliance.read().await?;

    // score/completed/total are computed live; `summary` is whatever
    // the last mutation persisted
    Ok(HttpResponse::Ok().json(json!({
        "score": document.score(),
        "completed": document.completed(),
        "total": document.checklist.len(),
        "checklist": document.checklist,
        "summary": document.summary,
    })))
}
