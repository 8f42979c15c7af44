use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::{http::Error, App};

#[tracing::instrument]
pub async fn mark_all_read(app: web::Data<App>) -> Result<HttpResponse, Error> {
    let mut tx = app.alerts.begin().await?;
    for alert in &mut tx.alerts {
        alert.is_read = true;
    }
    tx.commit().await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "All alerts marked as read",
        "unreadCount": 0,
    })))
}
