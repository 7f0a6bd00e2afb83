use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Base URL of the backing REST store.
    pub api_url: String,
    /// Directory holding the two persisted session keys.
    pub session_dir: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
}

impl PortalConfig {
    /// Reads configuration from the environment. `PORTAL_API_URL` is
    /// required; the session directory defaults next to the current
    /// working directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url =
            env::var("PORTAL_API_URL").map_err(|_| ConfigError::Missing("PORTAL_API_URL"))?;

        let session_dir = env::var("PORTAL_SESSION_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".portal-session"));

        Ok(Self {
            api_url,
            session_dir,
        })
    }
}
