use actix_web::{
    web::{self, Json},
    HttpResponse,
};
use chrono::Utc;
use serde_json::json;
use validator::ValidateError;

use crate::{http::Error, schema::Alert, types::form::alerts::Create, App};

#[tracing::instrument]
pub async fn create(app: web::Data<App>, form: Json<Create>) -> Result<HttpResponse, Error> {
    let form = form.into_inner();
    let (Some(message), Some(kind)) = (form.message, form.kind) else {
        let mut msg = ValidateError::msg_builder();
        msg.insert("Message and type are required");
        return Err(msg.build().into());
    };

    let mut tx = app.alerts.begin().await?;
    let alert = Alert {
        id: tx.next_id(),
        message,
        kind,
        date: form.date.unwrap_or_else(|| Utc::now().date_naive()),
        is_read: false,
    };

    tx.alerts.push(alert.clone());
    tx.commit().await?;

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "Alert created",
        "alert": alert,
    })))
}
