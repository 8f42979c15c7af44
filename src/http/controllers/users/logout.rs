use actix_web::{
    web::{self, Json},
    HttpResponse,
};

use crate::{http::Error, services::users, types::form::users::logout, App};

#[tracing::instrument]
pub async fn logout(
    app: web::Data<App>,
    form: Json<logout::Request>,
) -> Result<HttpResponse, Error> {
    app.sessions.logout(form.user_id);

    // uploaded files only live for the duration of a login
    users::remove_uploads(&app, form.user_id).await?;

    Ok(HttpResponse::Ok().body("Logged out"))
}
