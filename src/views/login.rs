use tracing::error;

use super::Nav;
use crate::console;
use crate::modules::auth::domain::Session;
use crate::modules::auth::use_cases::login::{LoginError, LoginRequest};
use crate::routing::home_path;
use crate::AppState;

pub async fn render(state: &AppState, session: &mut Option<Session>) -> anyhow::Result<Nav> {
    console::heading("Healthcare Portal - Login");
    println!("[1] Sign in  [2] Register  [3] Health info  [q] Quit");

    match console::prompt("Choose")?.as_str() {
        "1" => {}
        "2" => return Ok(Nav::goto("/register")),
        "3" => return Ok(Nav::goto("/health-info")),
        "q" => return Ok(Nav::Quit),
        _ => return Ok(Nav::goto("/login")),
    }

    let email = console::prompt("Email")?;
    let password = console::prompt("Password")?;

    let request = match LoginRequest::new(&email, &password) {
        Ok(request) => request,
        Err(errors) => {
            console::show_field_errors(&errors);
            return Ok(Nav::goto("/login"));
        }
    };

    match state.login.execute(request).await {
        Ok(new_session) => {
            println!("Welcome, {}", new_session.user.name);
            let home = home_path(new_session.user.role);
            *session = Some(new_session);
            Ok(Nav::goto(home))
        }
        Err(LoginError::InvalidCredentials) => {
            console::banner("Invalid credentials");
            Ok(Nav::goto("/login"))
        }
        Err(LoginError::Validation(errors)) => {
            console::show_field_errors(&errors);
            Ok(Nav::goto("/login"))
        }
        Err(e) => {
            error!(error = %e, "login failed");
            console::transport_banner();
            Ok(Nav::goto("/login"))
        }
    }
}
