use tracing::error;

use super::{do_logout, parse_pick, Nav};
use crate::console;
use crate::modules::auth::domain::Session;
use crate::modules::dashboard::patient::{
    PatientDashboard, SLEEP_TARGET, STEPS_TARGET, WATER_TARGET,
};
use crate::routing::LOGIN_PATH;
use crate::AppState;

pub async fn render(state: &AppState, session: &mut Option<Session>) -> anyhow::Result<Nav> {
    let Some(user) = session.as_ref().map(|s| s.user.clone()) else {
        return Ok(Nav::goto(LOGIN_PATH));
    };

    console::heading(&format!("Dashboard - {}", user.name));

    let dashboard = match state.load_patient_dashboard.execute(&user.id).await {
        Ok(dashboard) => Some(dashboard),
        Err(e) => {
            error!(error = %e, user_id = %user.id, "dashboard load failed");
            console::transport_banner();
            None
        }
    };

    if let Some(dashboard) = &dashboard {
        show(dashboard);
    }

    println!();
    println!("[g] Goal tracker  [p] Profile  [h] Health info  [r] Mark comment read  [l] Log out  [q] Quit");

    match console::prompt("Choose")?.as_str() {
        "g" => Ok(Nav::goto("/patient/goals")),
        "p" => Ok(Nav::goto("/patient/profile")),
        "h" => Ok(Nav::goto("/health-info")),
        "r" => {
            if let Some(dashboard) = &dashboard {
                mark_read(state, dashboard).await?;
            }
            Ok(Nav::goto("/patient/dashboard"))
        }
        "l" => Ok(do_logout(state, session)),
        "q" => Ok(Nav::Quit),
        _ => Ok(Nav::goto("/patient/dashboard")),
    }
}

fn show(dashboard: &PatientDashboard) {
    match &dashboard.latest {
        Some(latest) => {
            println!("Today's progress ({}):", latest.goal.date);
            println!(
                "  Steps: {}/{STEPS_TARGET} ({}%)",
                latest.goal.steps, latest.steps_pct
            );
            println!(
                "  Water: {}/{WATER_TARGET} glasses ({}%)",
                latest.goal.water_intake, latest.water_pct
            );
            println!(
                "  Sleep: {}/{SLEEP_TARGET} hours ({}%)",
                latest.goal.sleep_hours, latest.sleep_pct
            );
        }
        None => println!("No goals logged yet. Head to the goal tracker to start."),
    }

    println!();
    println!("Tip of the day: {}", dashboard.tip_of_the_day);

    if !dashboard.pending_reminders.is_empty() {
        println!();
        println!("Upcoming reminders:");
        for reminder in &dashboard.pending_reminders {
            println!("  {} - {} ({})", reminder.date, reminder.title, reminder.kind);
        }
    }

    println!();
    if dashboard.comments.is_empty() {
        println!("No feedback from your provider yet.");
    } else {
        println!("Provider feedback:");
        for (i, comment) in dashboard.comments.iter().enumerate() {
            let marker = if comment.read { " " } else { "*" };
            println!(
                "  [{}]{marker} {} on your {} entry: {}",
                i + 1,
                comment.provider_name,
                comment.goal_date,
                comment.comment
            );
        }
        println!("  (* unread)");
    }
}

async fn mark_read(state: &AppState, dashboard: &PatientDashboard) -> anyhow::Result<()> {
    if dashboard.comments.is_empty() {
        console::banner("No comments to mark");
        return Ok(());
    }

    let pick = console::prompt("Comment number")?;
    let Some(index) = parse_pick(&pick, dashboard.comments.len()) else {
        console::banner("No such comment");
        return Ok(());
    };

    if let Err(e) = state.mark_comment_read.execute(&dashboard.comments[index]).await {
        error!(error = %e, "could not mark comment read");
        console::transport_banner();
    }
    Ok(())
}
