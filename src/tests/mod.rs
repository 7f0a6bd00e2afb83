//! Cross-module flows: sign-in persistence, restore, and the route
//! guard, wired through the real file-backed session store.

use async_trait::async_trait;

use crate::modules::auth::adapter::file_session::FileSessionStore;
use crate::modules::auth::ports::SessionStore;
use crate::modules::auth::use_cases::login::{
    ILoginUseCase, LoginError, LoginRequest, LoginUseCase,
};
use crate::modules::auth::use_cases::logout::{ILogoutUseCase, LogoutUseCase};
use crate::modules::store::ports::{StoreError, UserDirectory, UserFilter};
use crate::modules::store::records::{Role, User, UserPatch};
use crate::routing::{home_path, resolve, Resolution, View, LOGIN_PATH};

struct FixedDirectory {
    users: Vec<User>,
}

#[async_trait]
impl UserDirectory for FixedDirectory {
    async fn find_users(&self, filter: UserFilter) -> Result<Vec<User>, StoreError> {
        Ok(self
            .users
            .iter()
            .filter(|u| {
                filter.email.as_deref().map_or(true, |e| u.email == e)
                    && filter.password.as_deref().map_or(true, |p| u.password == p)
                    && filter.role.map_or(true, |r| u.role == r)
            })
            .cloned()
            .collect())
    }

    async fn create_user(&self, user: &User) -> Result<User, StoreError> {
        Ok(user.clone())
    }

    async fn patch_user(&self, _id: &str, _patch: &UserPatch) -> Result<User, StoreError> {
        unimplemented!("not used by these flows")
    }
}

fn patient() -> User {
    User {
        id: "u-1".to_string(),
        role: Role::Patient,
        name: "Ana Silva".to_string(),
        email: "ana@example.com".to_string(),
        password: "Passw0rd".to_string(),
        age: Some(34),
        phone: None,
        allergies: None,
        medications: None,
        specialty: None,
    }
}

#[tokio::test]
async fn test_login_persists_session_and_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let sessions = FileSessionStore::new(dir.path());
    let directory = FixedDirectory {
        users: vec![patient()],
    };

    let login = LoginUseCase::new(directory, sessions.clone());
    let request = LoginRequest::new("ana@example.com", "Passw0rd").unwrap();
    let session = login.execute(request).await.unwrap();

    // A fresh store over the same directory sees the same identity.
    let restored = FileSessionStore::new(dir.path()).load().unwrap().unwrap();
    assert_eq!(restored.token, session.token);
    assert_eq!(restored.user.id, "u-1");

    // The guard now renders patient screens and the home path matches.
    assert_eq!(home_path(restored.user.role), "/patient/dashboard");
    assert_eq!(
        resolve("/patient/dashboard", Some(&restored.user)),
        Resolution::Render(View::PatientDashboard)
    );
}

#[tokio::test]
async fn test_wrong_password_leaves_no_session_behind() {
    let dir = tempfile::tempdir().unwrap();
    let sessions = FileSessionStore::new(dir.path());
    let directory = FixedDirectory {
        users: vec![patient()],
    };

    let login = LoginUseCase::new(directory, sessions.clone());
    let request = LoginRequest::new("ana@example.com", "wrong-pass").unwrap();

    let result = login.execute(request).await;
    assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    assert_eq!(sessions.load().unwrap(), None);
}

#[tokio::test]
async fn test_logout_then_guarded_access_redirects() {
    let dir = tempfile::tempdir().unwrap();
    let sessions = FileSessionStore::new(dir.path());
    let directory = FixedDirectory {
        users: vec![patient()],
    };

    let login = LoginUseCase::new(directory, sessions.clone());
    let request = LoginRequest::new("ana@example.com", "Passw0rd").unwrap();
    login.execute(request).await.unwrap();

    LogoutUseCase::new(sessions.clone()).execute().unwrap();
    assert_eq!(sessions.load().unwrap(), None);

    // Anonymous again: guarded paths bounce back to the login screen.
    assert_eq!(
        resolve("/patient/goals", None),
        Resolution::Redirect(LOGIN_PATH)
    );
}
