pub mod health_info;
pub mod patient;
