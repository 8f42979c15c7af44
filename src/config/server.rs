use error_stack::{Report, Result, ResultExt};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::num::NonZeroUsize;
use validator::{Validate, ValidateError};

use super::ParseError;
use crate::util::{figment::FigmentErrorAttachable, validator::IntoValidatorReport};

#[derive(Debug, Deserialize)]
pub struct Server {
    /// Address the HTTP server binds to.
    ///
    /// **Environment variables**:
    /// - `MITRA_IP`
    #[serde(default = "Server::default_ip")]
    pub ip: IpAddr,
    /// Port the HTTP server listens on.
    ///
    /// **Environment variables**:
    /// - `MITRA_PORT` or `PORT`
    #[serde(default = "Server::default_port")]
    pub port: u16,
    /// How many actix worker threads to spawn.
    ///
    /// **Environment variables**:
    /// - `MITRA_WORKERS`
    #[serde(default = "Server::default_workers")]
    pub workers: NonZeroUsize,
    #[serde(default)]
    pub data: super::Data,
}

impl Server {
    pub fn load() -> Result<Self, ParseError> {
        dotenvy::dotenv().ok();

        let config = Self::figment()
            .extract::<Self>()
            .map_err(|e| Report::new(ParseError).attach_figment_error(e))?;

        config
            .validate()
            .into_validator_report()
            .change_context(ParseError)?;

        Ok(config)
    }
}

impl Server {
    const DEFAULT_CONFIG_FILE: &str = "mitra.toml";

    /// Creates a default [`figment::Figment`] object to load server
    /// configuration. Split out so tests can extract from it directly.
    pub(crate) fn figment() -> figment::Figment {
        use figment::{
            providers::{Env, Format, Toml},
            Figment,
        };

        Figment::new()
            .merge(Toml::file(Self::DEFAULT_CONFIG_FILE))
            // The env provider splits on every underscore, which is
            // the wrong thing for multi-word keys.
            .merge(Env::prefixed("MITRA_").map(|v| match v.as_str() {
                "DATA_DIR" => "data.dir".into(),
                "DATA_UPLOADS" => "data.uploads".into(),
                _ => v.as_str().replace('_', ".").into(),
            }))
            // Environment variable aliases
            .merge(Env::raw().map(|v| match v.as_str() {
                "PORT" => "port".into(),
                _ => v.into(),
            }))
    }

    const fn default_ip() -> IpAddr {
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    }

    const fn default_port() -> u16 {
        3000
    }

    // Required by serde
    const fn default_workers() -> NonZeroUsize {
        match NonZeroUsize::new(1) {
            Some(n) => n,
            None => panic!("default worker count is accidentally set to 0"),
        }
    }
}

impl Validate for Server {
    fn validate(&self) -> std::result::Result<(), ValidateError> {
        let mut fields = ValidateError::field_builder();
        if let Err(error) = self.data.validate() {
            fields.insert("data", error);
        }
        fields.build().into_result()
    }
}
