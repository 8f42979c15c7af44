use actix_web::{
    web::{self, Json},
    HttpResponse,
};
use thiserror::Error;

use crate::{
    http::Error,
    services::users::Authenticate,
    types::{self, form::users::login},
    util::{sanitize, Sensitive},
    App,
};

#[tracing::instrument]
pub async fn login(app: web::Data<App>, form: Json<login::Request>) -> Result<HttpResponse, Error> {
    let email = sanitize::clean_email(form.email.as_str())?;
    let password = sanitize::clean_string(form.password.as_str());

    let user = Authenticate {
        email: &email,
        password: Sensitive::new(password.as_str()),
    }
    .perform(&app)
    .await?;

    let Some(user) = user else {
        #[derive(Debug, Error)]
        #[error("unknown email or wrong password")]
        struct InvalidCredentials;
        return Err(Error::from_context(
            types::Error::Unauthorized,
            InvalidCredentials,
        ));
    };

    if app.sessions.track(user.id).is_none() {
        #[derive(Debug, Error)]
        #[error("user already has an active session")]
        struct AlreadyLoggedIn;
        return Err(Error::from_context(
            types::Error::SessionRejected,
            AlreadyLoggedIn,
        ));
    }

    Ok(HttpResponse::Ok().json(login::Response { user_id: user.id }))
}
