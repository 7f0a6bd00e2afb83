//! Console views, one per routed screen. Each view renders, collects
//! form input, calls its use cases, and names where the user goes next.

pub mod goal_tracker;
pub mod health_info;
pub mod login;
pub mod patient_dashboard;
pub mod profile;
pub mod provider_dashboard;
pub mod register;

use crate::modules::auth::domain::Session;
use crate::routing::{View, LOGIN_PATH};
use crate::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nav {
    Goto(String),
    Quit,
}

impl Nav {
    pub fn goto(path: &str) -> Self {
        Nav::Goto(path.to_string())
    }
}

pub async fn render(
    view: View,
    state: &AppState,
    session: &mut Option<Session>,
) -> anyhow::Result<Nav> {
    match view {
        View::Login => login::render(state, session).await,
        View::Register => register::render(state).await,
        View::HealthInfo => health_info::render(state, session.as_ref()).await,
        View::PatientDashboard => patient_dashboard::render(state, session).await,
        View::GoalTracker => goal_tracker::render(state, session).await,
        View::Profile => profile::render(state, session).await,
        View::ProviderDashboard => provider_dashboard::render(state, session).await,
    }
}

/// Clears the session on the way out. A storage failure is reported but
/// still drops the in-memory identity; the next guard check then
/// redirects regardless.
pub(crate) fn do_logout(state: &AppState, session: &mut Option<Session>) -> Nav {
    if let Err(e) = state.logout.execute() {
        tracing::error!(error = %e, "logout failed to clear storage");
        crate::console::transport_banner();
    }
    *session = None;
    Nav::goto(LOGIN_PATH)
}

/// Parses a 1-based list pick into an index.
pub(crate) fn parse_pick(input: &str, len: usize) -> Option<usize> {
    let n: usize = input.trim().parse().ok()?;
    (1..=len).contains(&n).then(|| n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pick_is_one_based_and_bounded() {
        assert_eq!(parse_pick("1", 3), Some(0));
        assert_eq!(parse_pick("3", 3), Some(2));
        assert_eq!(parse_pick("0", 3), None);
        assert_eq!(parse_pick("4", 3), None);
        assert_eq!(parse_pick("x", 3), None);
    }
}
