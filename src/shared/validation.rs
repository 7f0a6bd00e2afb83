//! One generic form validator. Every form in the portal declares its
//! fields as rule records and runs them through [`Form::validate`];
//! no form re-implements range or pattern checks by hand.

use chrono::{Local, NaiveDate};
use email_address::EmailAddress;
use regex::Regex;

/// A single failed check, keyed by field so callers can show it next to
/// the offending input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First message recorded against the given field, if any.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Form input as collected, before any domain type gets built from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Text(&'a str),
    Number(f64),
    Date(NaiveDate),
    Flag(bool),
    /// Field left blank. Fails `Required`; every other rule skips it.
    Missing,
}

#[derive(Debug, Clone)]
pub enum Rule {
    Required,
    Min(f64, &'static str),
    Max(f64, &'static str),
    MinLen(usize, &'static str),
    Pattern(&'static str, &'static str),
    Email,
    NotFutureDate(&'static str),
    Checked(&'static str),
}

struct Field<'a> {
    name: &'static str,
    label: &'static str,
    value: Value<'a>,
    rules: Vec<Rule>,
}

/// Declarative field collection. Build, then `validate` once.
#[derive(Default)]
pub struct Form<'a> {
    fields: Vec<Field<'a>>,
}

impl<'a> Form<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(
        mut self,
        name: &'static str,
        label: &'static str,
        value: Value<'a>,
        rules: Vec<Rule>,
    ) -> Self {
        self.fields.push(Field {
            name,
            label,
            value,
            rules,
        });
        self
    }

    pub fn validate(self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let today = Local::now().date_naive();

        for field in &self.fields {
            if let Some(message) = check_field(field, today) {
                errors.0.push(FieldError {
                    field: field.name.to_string(),
                    message,
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn check_field(field: &Field<'_>, today: NaiveDate) -> Option<String> {
    let blank = matches!(field.value, Value::Missing)
        || matches!(field.value, Value::Text(t) if t.trim().is_empty());

    for rule in &field.rules {
        match rule {
            Rule::Required => {
                if blank {
                    return Some(format!("{} is required", field.label));
                }
            }
            // An optional field that was left blank passes everything else.
            _ if blank => continue,
            // NaN compares false against every bound, so non-finite
            // values are rejected outright instead of slipping through.
            Rule::Min(min, message) => {
                if let Value::Number(n) = field.value {
                    if !n.is_finite() || n < *min {
                        return Some((*message).to_string());
                    }
                }
            }
            Rule::Max(max, message) => {
                if let Value::Number(n) = field.value {
                    if !n.is_finite() || n > *max {
                        return Some((*message).to_string());
                    }
                }
            }
            Rule::MinLen(len, message) => {
                if let Value::Text(t) = field.value {
                    if t.trim().chars().count() < *len {
                        return Some((*message).to_string());
                    }
                }
            }
            Rule::Pattern(pattern, message) => {
                if let Value::Text(t) = field.value {
                    match Regex::new(pattern) {
                        Ok(re) if re.is_match(t.trim()) => {}
                        // A broken pattern is a programming error in the
                        // rule table; fail the field rather than let bad
                        // input through.
                        _ => return Some((*message).to_string()),
                    }
                }
            }
            Rule::Email => {
                if let Value::Text(t) = field.value {
                    if !EmailAddress::is_valid(t.trim()) {
                        return Some("Invalid email address".to_string());
                    }
                }
            }
            Rule::NotFutureDate(message) => {
                if let Value::Date(d) = field.value {
                    if d > today {
                        return Some((*message).to_string());
                    }
                }
            }
            Rule::Checked(message) => {
                if !matches!(field.value, Value::Flag(true)) {
                    return Some((*message).to_string());
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_required_text_rejects_blank() {
        let result = Form::new()
            .field("name", "Full name", Value::Text("   "), vec![Rule::Required])
            .validate();

        let errors = result.unwrap_err();
        assert_eq!(errors.message_for("name"), Some("Full name is required"));
    }

    #[test]
    fn test_optional_blank_field_skips_other_rules() {
        let result = Form::new()
            .field(
                "phone",
                "Phone",
                Value::Missing,
                vec![Rule::MinLen(10, "Phone must be at least 10 digits")],
            )
            .validate();

        assert!(result.is_ok());
    }

    #[test]
    fn test_number_range_rules() {
        let result = Form::new()
            .field(
                "steps",
                "Steps",
                Value::Number(150_000.0),
                vec![
                    Rule::Required,
                    Rule::Min(0.0, "Steps cannot be negative"),
                    Rule::Max(100_000.0, "Steps must be less than 100,000"),
                ],
            )
            .field(
                "waterIntake",
                "Water intake",
                Value::Number(-1.0),
                vec![Rule::Min(0.0, "Water intake cannot be negative")],
            )
            .validate();

        let errors = result.unwrap_err();
        assert_eq!(
            errors.message_for("steps"),
            Some("Steps must be less than 100,000")
        );
        assert_eq!(
            errors.message_for("waterIntake"),
            Some("Water intake cannot be negative")
        );
    }

    #[test]
    fn test_non_finite_numbers_fail_range_rules() {
        let run = |n: f64| {
            Form::new()
                .field(
                    "sleepHours",
                    "Sleep hours",
                    Value::Number(n),
                    vec![
                        Rule::Min(0.0, "Sleep hours cannot be negative"),
                        Rule::Max(24.0, "Sleep hours cannot exceed 24"),
                    ],
                )
                .validate()
        };

        assert!(run(f64::NAN).is_err());
        assert!(run(f64::INFINITY).is_err());
        assert!(run(f64::NEG_INFINITY).is_err());

        // A rule set with only one bound still catches NaN.
        let result = Form::new()
            .field(
                "steps",
                "Steps",
                Value::Number(f64::NAN),
                vec![Rule::Min(0.0, "Steps cannot be negative")],
            )
            .validate();
        assert!(result.is_err());
    }

    #[test]
    fn test_pattern_rule() {
        let rules = || {
            vec![Rule::Pattern(
                r"^[a-zA-Z\s]+$",
                "Name can only contain letters and spaces",
            )]
        };

        assert!(Form::new()
            .field("name", "Full name", Value::Text("Ana Silva"), rules())
            .validate()
            .is_ok());

        assert!(Form::new()
            .field("name", "Full name", Value::Text("Ana 2"), rules())
            .validate()
            .is_err());
    }

    #[test]
    fn test_email_rule() {
        let result = Form::new()
            .field("email", "Email", Value::Text("not-an-email"), vec![Rule::Email])
            .validate();

        assert_eq!(
            result.unwrap_err().message_for("email"),
            Some("Invalid email address")
        );
    }

    #[test]
    fn test_future_date_rejected_today_allowed() {
        let today = Local::now().date_naive();
        let tomorrow = today + Duration::days(1);
        let rule = || vec![Rule::NotFutureDate("Cannot log goals for future dates")];

        assert!(Form::new()
            .field("date", "Date", Value::Date(today), rule())
            .validate()
            .is_ok());

        assert!(Form::new()
            .field("date", "Date", Value::Date(tomorrow), rule())
            .validate()
            .is_err());
    }

    #[test]
    fn test_checked_rule() {
        let result = Form::new()
            .field(
                "consent",
                "Consent",
                Value::Flag(false),
                vec![Rule::Checked("You must consent to continue")],
            )
            .validate();

        assert_eq!(
            result.unwrap_err().message_for("consent"),
            Some("You must consent to continue")
        );
    }

    #[test]
    fn test_errors_accumulate_across_fields() {
        let result = Form::new()
            .field("a", "A", Value::Missing, vec![Rule::Required])
            .field("b", "B", Value::Missing, vec![Rule::Required])
            .validate();

        assert_eq!(result.unwrap_err().0.len(), 2);
    }
}
