use actix_web::{
    web::{self, Json},
    HttpResponse,
};

use crate::{
    http::Error,
    services::users::CreateAccount,
    types::form::users::register,
    util::{sanitize, Sensitive},
    App,
};

#[tracing::instrument]
pub async fn register(
    app: web::Data<App>,
    form: Json<register::Request>,
) -> Result<HttpResponse, Error> {
    let email = sanitize::clean_email(form.email.as_str())?;
    let password = sanitize::clean_string(form.password.as_str());
    let real_name = sanitize::clean_string(&form.real_name);

    let user = CreateAccount {
        email: &email,
        password: Sensitive::new(password.as_str()),
        real_name: &real_name,
    }
    .perform(&app)
    .await?;

    // the stored record carries the hash; only the id leaves here
    Ok(HttpResponse::Ok().json(register::Response { user_id: user.id }))
}
