pub mod ports;
pub mod records;
pub mod rest;

pub use ports::StoreError;
pub use rest::RestStore;
