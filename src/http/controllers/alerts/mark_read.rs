use actix_web::{
    web::{self, Json},
    HttpResponse,
};
use serde_json::json;
use thiserror::Error;
use validator::ValidateError;

use crate::{http::Error, types, types::form::alerts::MarkRead, App};

#[tracing::instrument]
pub async fn mark_read(app: web::Data<App>, form: Json<MarkRead>) -> Result<HttpResponse, Error> {
    let Some(id) = form.id else {
        return Err(ValidateError::message("id", "ID is required").into());
    };

    let mut tx = app.alerts.begin().await?;
    let Some(alert) = tx.find_mut(id) else {
        #[derive(Debug, Error)]
        #[error("Alert not found")]
        struct AlertNotFound;
        return Err(Error::from_context(types::Error::NotFound, AlertNotFound));
    };

    alert.is_read = true;
    let alert = alert.clone();
    let unread_count = tx.unread_count();
    tx.commit().await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Alert marked as read",
        "alert": alert,
        "unreadCount": unread_count,
    })))
}
