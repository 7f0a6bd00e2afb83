use tracing::error;

use super::Nav;
use crate::console;
use crate::modules::auth::domain::Session;
use crate::modules::dashboard::health_info::INFO_SECTIONS;
use crate::routing::{home_path, LOGIN_PATH};
use crate::AppState;

/// Public page: reachable both before and after signing in.
pub async fn render(state: &AppState, session: Option<&Session>) -> anyhow::Result<Nav> {
    console::heading("Health Information");

    for (title, body) in INFO_SECTIONS {
        println!();
        println!("{title}");
        println!("  {body}");
    }

    match state.fetch_health_tips.execute().await {
        Ok(tips) if !tips.is_empty() => {
            println!();
            println!("Recent tips:");
            for tip in &tips {
                println!("  {} - {}", tip.date, tip.tip);
            }
        }
        Ok(_) => {}
        Err(e) => {
            error!(error = %e, "health tips fetch failed");
            console::transport_banner();
        }
    }

    let back = session.map_or(LOGIN_PATH, |s| home_path(s.user.role));

    println!();
    println!("[b] Back  [q] Quit");
    match console::prompt("Choose")?.as_str() {
        "q" => Ok(Nav::Quit),
        _ => Ok(Nav::goto(back)),
    }
}
