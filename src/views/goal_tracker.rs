use chrono::{Local, NaiveDate};
use tracing::error;

use super::{do_logout, parse_pick, Nav};
use crate::console;
use crate::modules::auth::domain::Session;
use crate::modules::goals::domain::{Goal, GoalDraft};
use crate::modules::goals::use_cases::GoalTrackerError;
use crate::routing::LOGIN_PATH;
use crate::AppState;

const HERE: &str = "/patient/goals";

pub async fn render(state: &AppState, session: &mut Option<Session>) -> anyhow::Result<Nav> {
    let Some(user) = session.as_ref().map(|s| s.user.clone()) else {
        return Ok(Nav::goto(LOGIN_PATH));
    };

    console::heading("Goal Tracker");

    let goals = match state.fetch_goals.execute(&user.id).await {
        Ok(goals) => goals,
        Err(e) => {
            error!(error = %e, user_id = %user.id, "could not fetch goals");
            console::transport_banner();
            vec![]
        }
    };

    if goals.is_empty() {
        println!("No entries yet.");
    } else {
        for (i, goal) in goals.iter().enumerate() {
            println!(
                "  [{}] {} - {} steps, {} glasses, {} h sleep",
                i + 1,
                goal.date,
                goal.steps,
                goal.water_intake,
                goal.sleep_hours
            );
        }
    }

    println!();
    println!("[n] New entry  [e] Edit  [d] Delete  [b] Dashboard  [l] Log out  [q] Quit");

    match console::prompt("Choose")?.as_str() {
        "n" => log_new(state, &user.id).await,
        "e" => edit(state, &user.id, &goals).await,
        "d" => delete(state, &user.id, &goals).await,
        "b" => Ok(Nav::goto("/patient/dashboard")),
        "l" => Ok(do_logout(state, session)),
        "q" => Ok(Nav::Quit),
        _ => Ok(Nav::goto(HERE)),
    }
}

async fn log_new(state: &AppState, user_id: &str) -> anyhow::Result<Nav> {
    let Some(date) = read_date()? else {
        return Ok(Nav::goto(HERE));
    };
    let Some(steps) = read_i64("Steps")? else {
        return Ok(Nav::goto(HERE));
    };
    let Some(water_intake) = read_i64("Water (glasses)")? else {
        return Ok(Nav::goto(HERE));
    };
    let Some(sleep_hours) = read_f64("Sleep (hours)")? else {
        return Ok(Nav::goto(HERE));
    };

    let draft = GoalDraft {
        date,
        steps,
        water_intake,
        sleep_hours,
    };

    match state.log_goal.execute(user_id, draft).await {
        Ok(output) => println!("Logged entry for {}.", output.created.date),
        Err(e) => report(e),
    }
    Ok(Nav::goto(HERE))
}

/// Blank answers keep the entry's current value.
async fn edit(state: &AppState, user_id: &str, goals: &[Goal]) -> anyhow::Result<Nav> {
    let Some(current) = pick_entry(goals)? else {
        return Ok(Nav::goto(HERE));
    };

    println!("Editing entry for {} (blank keeps the current value)", current.date);

    let mut draft = GoalDraft {
        date: current.date,
        steps: current.steps as i64,
        water_intake: current.water_intake as i64,
        sleep_hours: current.sleep_hours,
    };

    match console::prompt_optional("Date (YYYY-MM-DD)")? {
        None => {}
        Some(raw) => match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            Ok(date) => draft.date = date,
            Err(_) => {
                console::banner("Invalid date, use YYYY-MM-DD");
                return Ok(Nav::goto(HERE));
            }
        },
    }
    if let Some(raw) = console::prompt_optional("Steps")? {
        match raw.parse() {
            Ok(steps) => draft.steps = steps,
            Err(_) => {
                console::banner("Steps must be a whole number");
                return Ok(Nav::goto(HERE));
            }
        }
    }
    if let Some(raw) = console::prompt_optional("Water (glasses)")? {
        match raw.parse() {
            Ok(water) => draft.water_intake = water,
            Err(_) => {
                console::banner("Water intake must be a whole number");
                return Ok(Nav::goto(HERE));
            }
        }
    }
    if let Some(raw) = console::prompt_optional("Sleep (hours)")? {
        match raw.parse() {
            Ok(sleep) => draft.sleep_hours = sleep,
            Err(_) => {
                console::banner("Sleep hours must be a number");
                return Ok(Nav::goto(HERE));
            }
        }
    }

    match state.edit_goal.execute(user_id, &current.id, draft).await {
        Ok(_) => println!("Entry updated."),
        Err(e) => report(e),
    }
    Ok(Nav::goto(HERE))
}

async fn delete(state: &AppState, user_id: &str, goals: &[Goal]) -> anyhow::Result<Nav> {
    let Some(goal) = pick_entry(goals)? else {
        return Ok(Nav::goto(HERE));
    };

    if !console::confirm(&format!("Delete the entry for {}?", goal.date))? {
        return Ok(Nav::goto(HERE));
    }

    match state.delete_goal.execute(user_id, &goal.id).await {
        Ok(_) => println!("Entry deleted."),
        Err(e) => report(e),
    }
    Ok(Nav::goto(HERE))
}

fn pick_entry(goals: &[Goal]) -> anyhow::Result<Option<&Goal>> {
    if goals.is_empty() {
        console::banner("No entries to pick from");
        return Ok(None);
    }
    let pick = console::prompt("Entry number")?;
    match parse_pick(&pick, goals.len()) {
        Some(index) => Ok(Some(&goals[index])),
        None => {
            console::banner("No such entry");
            Ok(None)
        }
    }
}

fn read_date() -> anyhow::Result<Option<NaiveDate>> {
    match console::prompt_optional("Date (YYYY-MM-DD, blank = today)")? {
        None => Ok(Some(Local::now().date_naive())),
        Some(raw) => match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            Ok(date) => Ok(Some(date)),
            Err(_) => {
                console::banner("Invalid date, use YYYY-MM-DD");
                Ok(None)
            }
        },
    }
}

fn read_i64(label: &str) -> anyhow::Result<Option<i64>> {
    match console::prompt(label)?.parse() {
        Ok(n) => Ok(Some(n)),
        Err(_) => {
            console::banner(&format!("{label} must be a whole number"));
            Ok(None)
        }
    }
}

fn read_f64(label: &str) -> anyhow::Result<Option<f64>> {
    match console::prompt(label)?.parse() {
        Ok(n) => Ok(Some(n)),
        Err(_) => {
            console::banner(&format!("{label} must be a number"));
            Ok(None)
        }
    }
}

fn report(error: GoalTrackerError) {
    match error {
        GoalTrackerError::Validation(errors) => console::show_field_errors(&errors),
        GoalTrackerError::Store(e) => {
            error!(error = %e, "goal tracker store call failed");
            console::transport_banner();
        }
    }
}
