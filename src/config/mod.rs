use thiserror::Error;

mod data;
mod server;

pub use data::Data;
pub use server::Server;

#[derive(Debug, Error)]
#[error("Failed to load configuration")]
pub struct ParseError;
