pub mod file_session;
