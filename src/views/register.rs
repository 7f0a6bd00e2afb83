use tracing::error;

use super::{parse_pick, Nav};
use crate::console;
use crate::modules::auth::use_cases::register::{RegisterError, RegisterInput};
use crate::modules::store::records::Role;
use crate::AppState;

pub async fn render(state: &AppState) -> anyhow::Result<Nav> {
    console::heading("Healthcare Portal - Create your account");

    let role = match console::prompt("Role (patient/provider)")?.as_str() {
        "provider" => Role::Provider,
        _ => Role::Patient,
    };

    let name = console::prompt("Full name")?;
    let email = console::prompt("Email")?;
    let password = console::prompt("Password (min 6 characters)")?;

    let mut input = RegisterInput {
        role,
        name,
        email,
        password,
        age: None,
        phone: None,
        allergies: None,
        medications: None,
        specialty: None,
        provider_id: None,
        consent: false,
    };

    match role {
        Role::Patient => {
            input.age = match console::prompt_optional("Age")? {
                None => None,
                Some(raw) => match raw.parse() {
                    Ok(age) => Some(age),
                    Err(_) => {
                        console::banner("Age must be a whole number");
                        return Ok(Nav::goto("/register"));
                    }
                },
            };
            input.phone = console::prompt_optional("Phone")?;
            input.allergies = console::prompt_optional("Allergies (optional)")?;
            input.medications = console::prompt_optional("Current medications (optional)")?;

            // Patients must pick the provider they sign up under.
            let providers = match state.list_providers.execute().await {
                Ok(providers) => providers,
                Err(e) => {
                    error!(error = %e, "could not list providers");
                    console::transport_banner();
                    return Ok(Nav::goto("/login"));
                }
            };

            if providers.is_empty() {
                console::banner("No providers are available yet. Please try again later.");
                return Ok(Nav::goto("/login"));
            }

            println!("Choose your provider:");
            for (i, provider) in providers.iter().enumerate() {
                let specialty = provider.specialty.as_deref().unwrap_or("general");
                println!("  [{}] {} ({specialty})", i + 1, provider.name);
            }
            let pick = console::prompt("Provider")?;
            input.provider_id = parse_pick(&pick, providers.len()).map(|i| providers[i].id.clone());
        }
        Role::Provider => {
            input.specialty = console::prompt_optional("Specialty")?;
        }
    }

    input.consent =
        console::confirm("I consent to the collection and use of my health data")?;

    match state.register.execute(input).await {
        Ok(user) => {
            println!("Account created for {}. Please log in.", user.email);
            Ok(Nav::goto("/login"))
        }
        Err(RegisterError::Validation(errors)) => {
            console::show_field_errors(&errors);
            Ok(Nav::goto("/register"))
        }
        Err(RegisterError::Store(e)) => {
            error!(error = %e, "registration failed");
            console::transport_banner();
            Ok(Nav::goto("/register"))
        }
    }
}
