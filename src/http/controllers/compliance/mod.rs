mod delete;
mod fetch;
mod mark_completed;
mod update;

pub use delete::delete;
pub use fetch::fetch;
pub use mark_completed::mark_completed;
pub use update::update;
