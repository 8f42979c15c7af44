mod create;
mod delete;
mod fetch;
mod mark_all_read;
mod mark_read;

pub use create::create;
pub use delete::delete;
pub use fetch::fetch;
pub use mark_all_read::mark_all_read;
pub use mark_read::mark_read;
