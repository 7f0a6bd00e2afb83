pub mod config;
pub mod console;
pub mod modules;
pub mod routing;
pub mod shared;
pub mod views;

pub use modules::auth;
pub use modules::store;

use std::env;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::auth::adapter::file_session::FileSessionStore;
use crate::auth::ports::SessionStore;
use crate::auth::use_cases::{
    list_providers::{IListProvidersUseCase, ListProvidersUseCase},
    login::{ILoginUseCase, LoginUseCase},
    logout::{ILogoutUseCase, LogoutUseCase},
    register::{IRegisterUseCase, RegisterUseCase},
    update_profile::{IUpdateProfileUseCase, UpdateProfileUseCase},
};
use crate::config::PortalConfig;
use crate::modules::care::use_cases::{
    complete_reminder::{CompleteReminderUseCase, ICompleteReminderUseCase},
    fetch_roster::{FetchRosterUseCase, IFetchRosterUseCase},
    leave_comment::{ILeaveCommentUseCase, LeaveCommentUseCase},
    mark_comment_read::{IMarkCommentReadUseCase, MarkCommentReadUseCase},
    review_patient::{IReviewPatientUseCase, ReviewPatientUseCase},
};
use crate::modules::dashboard::{
    health_info::{FetchHealthTipsUseCase, IFetchHealthTipsUseCase},
    patient::{ILoadPatientDashboardUseCase, LoadPatientDashboardUseCase},
};
use crate::modules::goals::use_cases::{
    delete_goal::{DeleteGoalUseCase, IDeleteGoalUseCase},
    edit_goal::{EditGoalUseCase, IEditGoalUseCase},
    fetch_goals::{FetchGoalsUseCase, IFetchGoalsUseCase},
    log_goal::{ILogGoalUseCase, LogGoalUseCase},
};
use crate::routing::{Resolution, LOGIN_PATH};
use crate::store::RestStore;
use crate::views::Nav;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub login: Arc<dyn ILoginUseCase + Send + Sync>,
    pub register: Arc<dyn IRegisterUseCase + Send + Sync>,
    pub logout: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub update_profile: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
    pub list_providers: Arc<dyn IListProvidersUseCase + Send + Sync>,
    pub fetch_goals: Arc<dyn IFetchGoalsUseCase + Send + Sync>,
    pub log_goal: Arc<dyn ILogGoalUseCase + Send + Sync>,
    pub edit_goal: Arc<dyn IEditGoalUseCase + Send + Sync>,
    pub delete_goal: Arc<dyn IDeleteGoalUseCase + Send + Sync>,
    pub load_patient_dashboard: Arc<dyn ILoadPatientDashboardUseCase + Send + Sync>,
    pub fetch_health_tips: Arc<dyn IFetchHealthTipsUseCase + Send + Sync>,
    pub fetch_roster: Arc<dyn IFetchRosterUseCase + Send + Sync>,
    pub review_patient: Arc<dyn IReviewPatientUseCase + Send + Sync>,
    pub leave_comment: Arc<dyn ILeaveCommentUseCase + Send + Sync>,
    pub mark_comment_read: Arc<dyn IMarkCommentReadUseCase + Send + Sync>,
    pub complete_reminder: Arc<dyn ICompleteReminderUseCase + Send + Sync>,
}

impl AppState {
    pub fn new(store: RestStore, sessions: FileSessionStore) -> Self {
        Self {
            login: Arc::new(LoginUseCase::new(store.clone(), sessions.clone())),
            register: Arc::new(RegisterUseCase::new(store.clone(), store.clone())),
            logout: Arc::new(LogoutUseCase::new(sessions.clone())),
            update_profile: Arc::new(UpdateProfileUseCase::new(store.clone(), sessions)),
            list_providers: Arc::new(ListProvidersUseCase::new(store.clone())),
            fetch_goals: Arc::new(FetchGoalsUseCase::new(store.clone())),
            log_goal: Arc::new(LogGoalUseCase::new(store.clone())),
            edit_goal: Arc::new(EditGoalUseCase::new(store.clone())),
            delete_goal: Arc::new(DeleteGoalUseCase::new(store.clone())),
            load_patient_dashboard: Arc::new(LoadPatientDashboardUseCase::new(
                store.clone(),
                store.clone(),
                store.clone(),
                store.clone(),
            )),
            fetch_health_tips: Arc::new(FetchHealthTipsUseCase::new(store.clone())),
            fetch_roster: Arc::new(FetchRosterUseCase::new(store.clone())),
            review_patient: Arc::new(ReviewPatientUseCase::new(store.clone(), store.clone())),
            leave_comment: Arc::new(LeaveCommentUseCase::new(store.clone())),
            mark_comment_read: Arc::new(MarkCommentReadUseCase::new(store.clone())),
            complete_reminder: Arc::new(CompleteReminderUseCase::new(store)),
        }
    }
}

#[tokio::main]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Try .env.{environment} first, then fall back to .env
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = PortalConfig::from_env()?;
    info!(api_url = %config.api_url, "starting portal client");

    let store = RestStore::new(&config.api_url);
    let session_store = FileSessionStore::new(&config.session_dir);
    let state = AppState::new(store, session_store.clone());

    // Synchronous restore: whatever survives in the session directory
    // decides who is signed in before the first screen renders.
    let mut session = match session_store.load() {
        Ok(session) => session,
        Err(e) => {
            warn!(error = %e, "could not restore session, starting anonymous");
            None
        }
    };
    if let Some(restored) = &session {
        info!(user_id = %restored.user.id, "session restored");
    }

    let mut path = session
        .as_ref()
        .map(|s| routing::home_path(s.user.role))
        .unwrap_or(LOGIN_PATH)
        .to_string();

    loop {
        match routing::resolve(&path, session.as_ref().map(|s| &s.user)) {
            Resolution::Render(view) => match views::render(view, &state, &mut session).await? {
                Nav::Goto(next) => path = next,
                Nav::Quit => break,
            },
            Resolution::Redirect(to) => path = to.to_string(),
            Resolution::NotFound => {
                console::banner("Page not found");
                path = LOGIN_PATH.to_string();
            }
        }
    }

    println!("Goodbye.");
    Ok(())
}

fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
