pub mod figment;
pub mod sanitize;
pub mod snowflake;
pub mod validator;

mod sensitive;

pub use sensitive::Sensitive;
pub use snowflake::Snowflake;
