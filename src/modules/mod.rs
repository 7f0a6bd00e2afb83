pub mod auth;
pub mod care;
pub mod dashboard;
pub mod goals;
pub mod store;
