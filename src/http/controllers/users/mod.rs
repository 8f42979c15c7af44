mod login;
mod logout;
mod register;

pub use login::login;
pub use logout::logout;
pub use register::register;
