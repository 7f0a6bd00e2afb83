//! Small line-oriented input/output helpers shared by every view.

use std::io::{self, BufRead, Write};

use crate::shared::validation::ValidationErrors;

/// Prints `label: ` and reads one trimmed line.
pub fn prompt(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Like [`prompt`], but an empty answer becomes `None`.
pub fn prompt_optional(label: &str) -> io::Result<Option<String>> {
    let answer = prompt(label)?;
    Ok(if answer.is_empty() { None } else { Some(answer) })
}

/// Yes/no question; only an explicit `y`/`yes` counts as yes.
pub fn confirm(question: &str) -> io::Result<bool> {
    let answer = prompt(&format!("{question} [y/N]"))?;
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}

pub fn heading(title: &str) {
    println!();
    println!("== {title} ==");
}

/// Form-level banner, used for credential failures and transport
/// failures alike.
pub fn banner(message: &str) {
    println!("!! {message}");
}

/// One line per failed field, mirroring inline per-input display.
pub fn show_field_errors(errors: &ValidationErrors) {
    for error in &errors.0 {
        println!("  - {}: {}", error.field, error.message);
    }
}

/// The generic failure banner: the cause is deliberately not
/// distinguished for the user.
pub fn transport_banner() {
    banner("Something went wrong talking to the server. Please try again.");
}
