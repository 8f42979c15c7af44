use chrono::Utc;
use thiserror::Error;
use tokio::task::spawn_blocking;

use crate::{
    auth::password,
    http::error::{Error, ErrorStackExt, Result, StdErrorExt},
    schema::User,
    types::{
        self,
        id::{marker::UserMarker, Id},
    },
    util::Sensitive,
    App,
};

/// Creates one account inside a single store transaction, so the
/// duplicate check and the append cannot interleave with another
/// registration.
///
/// `email` must already be normalized through
/// [`clean_email`](crate::util::sanitize::clean_email); the duplicate
/// check compares exact strings.
#[derive(Debug)]
pub struct CreateAccount<'a> {
    pub email: &'a str,
    pub password: Sensitive<&'a str>,
    pub real_name: &'a str,
}

impl CreateAccount<'_> {
    #[tracing::instrument(skip(app), name = "services.users.create_account")]
    pub async fn perform(self, app: &App) -> Result<User> {
        #[derive(Debug, Error)]
        #[error("email is already registered")]
        struct DuplicateEmail;

        // Hash before taking the store lock. On a duplicate email the
        // work is wasted, but holding the lock across a bcrypt round
        // would stall every other writer.
        let password = self.password.into_string();
        let password_hash = spawn_blocking(move || password::hash(&password))
            .await
            .into_http_result()?
            .into_http_result()?;

        let mut tx = app.users.begin().await?;
        if tx.email_taken(self.email) {
            return Err(Error::from_context(
                types::Error::AccountExists,
                DuplicateEmail,
            ));
        }

        let user = User {
            id: app.snowflake.next_id().cast(),
            email: self.email.to_owned(),
            real_name: self.real_name.to_owned(),
            password_hash,
            created_at: Utc::now().naive_utc(),
        };

        tx.users.push(user.clone());
        tx.commit().await?;

        Ok(user)
    }
}

/// Removes an account, its uploads and any active session. Unknown
/// ids are a no-op.
#[derive(Debug)]
pub struct DeleteAccount {
    pub user_id: Id<UserMarker>,
}

impl DeleteAccount {
    #[tracing::instrument(skip(app), name = "services.users.delete_account")]
    pub async fn perform(self, app: &App) -> Result<()> {
        let mut tx = app.users.begin().await?;
        tx.users.retain(|user| user.id != self.user_id);
        tx.commit().await?;

        remove_uploads(app, self.user_id).await?;
        app.sessions.logout(self.user_id);

        Ok(())
    }
}

/// Looks a user up by normalized email and verifies the password.
/// Unknown email and wrong password both come back as `None`.
#[derive(Debug)]
pub struct Authenticate<'a> {
    pub email: &'a str,
    pub password: Sensitive<&'a str>,
}

impl Authenticate<'_> {
    #[tracing::instrument(skip(app), name = "services.users.authenticate")]
    pub async fn perform(self, app: &App) -> Result<Option<User>> {
        let document = app.users.read().await?;
        let Some(user) = document.by_email(self.email).cloned() else {
            return Ok(None);
        };

        let password = self.password.into_string();
        let hash = user.password_hash.clone();
        let matched = spawn_blocking(move || password::verify(&password, &hash))
            .await
            .into_http_result()?
            .into_http_result()?;

        Ok(matched.then_some(user))
    }
}

/// Deletes everything the user has uploaded. Missing directories are
/// fine; uploads are optional.
pub(crate) async fn remove_uploads(app: &App, user_id: Id<UserMarker>) -> Result<()> {
    let dir = app.config.data.uploads.join(user_id.to_string());
    match tokio::fs::remove_dir_all(&dir).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::from_context(types::Error::Internal, e)),
    }
}
