use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::{http::Error, App};

#[tracing::instrument]
pub async fn fetch(app: web::Data<App>) -> Result<HttpResponse, Error> {
    let document = app.alerts.read().await?;

    Ok(HttpResponse::Ok().json(json!({
        "alerts": document.alerts,
        "unreadCount": document.unread_count(),
    })))
}
