use tracing::error;

use super::{do_logout, Nav};
use crate::console;
use crate::modules::auth::domain::Session;
use crate::modules::auth::use_cases::update_profile::{ProfileUpdate, UpdateProfileError};
use crate::modules::store::records::Role;
use crate::routing::LOGIN_PATH;
use crate::AppState;

pub async fn render(state: &AppState, session: &mut Option<Session>) -> anyhow::Result<Nav> {
    let Some(user) = session.as_ref().map(|s| s.user.clone()) else {
        return Ok(Nav::goto(LOGIN_PATH));
    };

    console::heading("Profile");
    println!("  Name:  {}", user.name);
    println!("  Email: {}", user.email);
    println!("  Role:  {}", user.role);
    if user.role == Role::Patient {
        println!("  Age:         {}", text_or_dash(user.age.map(|a| a.to_string())));
        println!("  Phone:       {}", text_or_dash(user.phone.clone()));
        println!("  Allergies:   {}", text_or_dash(user.allergies.clone()));
        println!("  Medications: {}", text_or_dash(user.medications.clone()));
    } else {
        println!("  Specialty:   {}", text_or_dash(user.specialty.clone()));
    }

    println!();
    println!("[e] Edit  [b] Dashboard  [l] Log out  [q] Quit");

    match console::prompt("Choose")?.as_str() {
        "e" => edit(state, session, user.role).await,
        "b" => Ok(Nav::goto("/patient/dashboard")),
        "l" => Ok(do_logout(state, session)),
        "q" => Ok(Nav::Quit),
        _ => Ok(Nav::goto("/patient/profile")),
    }
}

/// Blank answers leave the field unchanged; the wire PATCH only carries
/// what was actually typed.
async fn edit(
    state: &AppState,
    session: &mut Option<Session>,
    role: Role,
) -> anyhow::Result<Nav> {
    println!("Blank keeps the current value.");

    let mut update = ProfileUpdate {
        name: console::prompt_optional("Full name")?,
        ..ProfileUpdate::default()
    };

    match role {
        Role::Patient => {
            if let Some(raw) = console::prompt_optional("Age")? {
                match raw.parse() {
                    Ok(age) => update.age = Some(age),
                    Err(_) => {
                        console::banner("Age must be a whole number");
                        return Ok(Nav::goto("/patient/profile"));
                    }
                }
            }
            update.phone = console::prompt_optional("Phone")?;
            update.allergies = console::prompt_optional("Allergies")?;
            update.medications = console::prompt_optional("Current medications")?;
        }
        Role::Provider => {
            update.specialty = console::prompt_optional("Specialty")?;
        }
    }

    let Some(current) = session.as_ref() else {
        return Ok(Nav::goto(LOGIN_PATH));
    };

    match state.update_profile.execute(current, update).await {
        Ok(updated) => {
            if let Some(s) = session.as_mut() {
                s.user = updated;
            }
            println!("Profile updated.");
        }
        Err(UpdateProfileError::Validation(errors)) => console::show_field_errors(&errors),
        Err(e) => {
            error!(error = %e, "profile update failed");
            console::transport_banner();
        }
    }

    Ok(Nav::goto("/patient/profile"))
}

fn text_or_dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}
