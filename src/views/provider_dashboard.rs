use tracing::error;

use super::{do_logout, parse_pick, Nav};
use crate::console;
use crate::modules::auth::domain::Session;
use crate::modules::care::use_cases::leave_comment::LeaveCommentError;
use crate::modules::store::records::{PatientRecord, ReminderStatus, User};
use crate::routing::LOGIN_PATH;
use crate::AppState;

const HERE: &str = "/provider/dashboard";

pub async fn render(state: &AppState, session: &mut Option<Session>) -> anyhow::Result<Nav> {
    let Some(user) = session.as_ref().map(|s| s.user.clone()) else {
        return Ok(Nav::goto(LOGIN_PATH));
    };

    console::heading(&format!("Patients of {}", user.name));

    let roster = match state.fetch_roster.execute(&user.id).await {
        Ok(roster) => roster,
        Err(e) => {
            error!(error = %e, provider_id = %user.id, "roster load failed");
            console::transport_banner();
            vec![]
        }
    };

    if roster.is_empty() {
        println!("No patients registered under you yet.");
    } else {
        for (i, record) in roster.iter().enumerate() {
            println!(
                "  [{}] {} - compliance {}, last checkup {}, {} missed appointment(s)",
                i + 1,
                record.name,
                record.compliance,
                record.last_checkup,
                record.missed_appointments
            );
        }
    }

    println!();
    println!("[number] Review patient  [l] Log out  [q] Quit");

    let choice = console::prompt("Choose")?;
    match choice.as_str() {
        "l" => Ok(do_logout(state, session)),
        "q" => Ok(Nav::Quit),
        _ => match parse_pick(&choice, roster.len()) {
            Some(index) => review(state, &user, &roster[index]).await,
            None => Ok(Nav::goto(HERE)),
        },
    }
}

async fn review(state: &AppState, provider: &User, record: &PatientRecord) -> anyhow::Result<Nav> {
    console::heading(&format!("Reviewing {}", record.name));

    let review = match state.review_patient.execute(&record.patient_id).await {
        Ok(review) => review,
        Err(e) => {
            error!(error = %e, patient_id = %record.patient_id, "patient review failed");
            console::transport_banner();
            return Ok(Nav::goto(HERE));
        }
    };

    if review.goals.is_empty() {
        println!("No goals logged.");
    } else {
        println!("Goals (newest first):");
        for (i, goal) in review.goals.iter().enumerate() {
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
    if review.reminders.is_empty() {
        println!("No reminders on file.");
    } else {
        println!("Reminders:");
        for (i, reminder) in review.reminders.iter().enumerate() {
            let status = match reminder.status {
                ReminderStatus::Pending => "pending",
                ReminderStatus::Completed => "completed",
            };
            println!(
                "  [{}] {} - {} ({status})",
                i + 1,
                reminder.date,
                reminder.title
            );
        }
    }

    println!();
    println!("[c] Comment on a goal  [m] Mark reminder completed  [b] Back");

    match console::prompt("Choose")?.as_str() {
        "c" => {
            if review.goals.is_empty() {
                console::banner("No goals to comment on");
                return Ok(Nav::goto(HERE));
            }
            let pick = console::prompt("Goal number")?;
            let Some(index) = parse_pick(&pick, review.goals.len()) else {
                console::banner("No such goal");
                return Ok(Nav::goto(HERE));
            };
            let text = console::prompt("Comment")?;

            match state
                .leave_comment
                .execute(provider, &record.patient_id, &review.goals[index], &text)
                .await
            {
                Ok(_) => println!("Comment sent to {}.", record.name),
                Err(LeaveCommentError::Validation(errors)) => console::show_field_errors(&errors),
                Err(LeaveCommentError::Store(e)) => {
                    error!(error = %e, "could not leave comment");
                    console::transport_banner();
                }
            }
            Ok(Nav::goto(HERE))
        }
        "m" => {
            if review.reminders.is_empty() {
                console::banner("No reminders to complete");
                return Ok(Nav::goto(HERE));
            }
            let pick = console::prompt("Reminder number")?;
            let Some(index) = parse_pick(&pick, review.reminders.len()) else {
                console::banner("No such reminder");
                return Ok(Nav::goto(HERE));
            };

            match state.complete_reminder.execute(&review.reminders[index].id).await {
                Ok(updated) => println!("Marked \"{}\" completed.", updated.title),
                Err(e) => {
                    error!(error = %e, "could not complete reminder");
                    console::transport_banner();
                }
            }
            Ok(Nav::goto(HERE))
        }
        _ => Ok(Nav::goto(HERE)),
    }
}
