pub mod alerts;
pub mod compliance;
pub mod users;
