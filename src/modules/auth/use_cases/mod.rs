pub mod list_providers;
pub mod login;
pub mod logout;
pub mod register;
pub mod update_profile;
