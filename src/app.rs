use error_stack::{Result, ResultExt};
use std::sync::Arc;
use thiserror::Error;

use crate::{
    auth::Sessions,
    config,
    schema::{AlertDocument, ComplianceDocument, UserDocument},
    store::{ErrorExt, JsonStore},
    util::Snowflake,
};

/// Shared application state, constructed once at startup and
/// injected into every handler through `web::Data<App>`.
#[derive(Debug, Clone)]
pub struct App {
    pub config: Arc<config::Server>,
    pub users: JsonStore<UserDocument>,
    pub compliance: JsonStore<ComplianceDocument>,
    pub alerts: JsonStore<AlertDocument>,
    pub sessions: Sessions,
    pub snowflake: Arc<Snowflake>,
}

#[derive(Debug, Error)]
#[error("Failed to initialize application state")]
pub struct AppError;

impl App {
    #[tracing::instrument]
    pub async fn new(cfg: config::Server) -> Result<Self, AppError> {
        tokio::fs::create_dir_all(&cfg.data.dir)
            .await
            .into_store_error()
            .change_context(AppError)
            .attach_printable("could not create the data directory")?;

        tokio::fs::create_dir_all(&cfg.data.uploads)
            .await
            .into_store_error()
            .change_context(AppError)
            .attach_printable("could not create the uploads directory")?;

        let users = JsonStore::open(cfg.data.dir.join("users.json"));
        let compliance = JsonStore::open(cfg.data.dir.join("compliance.json"));
        let alerts = JsonStore::open(cfg.data.dir.join("alerts.json"));

        let app = Self {
            config: Arc::new(cfg),
            users,
            compliance,
            alerts,
            sessions: Sessions::default(),
            snowflake: Arc::new(Snowflake::new()),
        };

        Ok(app)
    }
}
