use async_trait::async_trait;
use chrono::Local;
use tracing::info;
use uuid::Uuid;

use crate::modules::store::ports::{PatientRoster, StoreError, UserDirectory};
use crate::modules::store::records::{Compliance, PatientRecord, Role, User};
use crate::shared::validation::{Form, Rule, ValidationErrors, Value};

// ======================= Register Input ==========================

/// Raw registration form, one field per input on the screen.
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub role: Role,
    pub name: String,
    pub email: String,
    pub password: String,
    pub age: Option<u32>,
    pub phone: Option<String>,
    pub allergies: Option<String>,
    pub medications: Option<String>,
    pub specialty: Option<String>,
    /// The provider a patient signs up under. Required for patients,
    /// ignored for providers.
    pub provider_id: Option<String>,
    pub consent: bool,
}

impl RegisterInput {
    /// All client-side checks. Runs before any network call; a patient
    /// without a chosen provider never reaches the store.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let age = self.age.map(|a| a as f64);
        let phone = self.phone.as_deref().unwrap_or("");
        let provider = self.provider_id.as_deref().unwrap_or("");

        let mut form = Form::new()
            .field(
                "name",
                "Full name",
                Value::Text(&self.name),
                vec![
                    Rule::Required,
                    Rule::MinLen(2, "Name must be at least 2 characters"),
                    Rule::Pattern(
                        r"^[a-zA-Z\s]+$",
                        "Name can only contain letters and spaces",
                    ),
                ],
            )
            .field(
                "email",
                "Email",
                Value::Text(&self.email),
                vec![Rule::Required, Rule::Email],
            )
            .field(
                "password",
                "Password",
                Value::Text(&self.password),
                vec![
                    Rule::Required,
                    Rule::MinLen(6, "Password must be at least 6 characters"),
                    // The regex crate has no lookahead; one pattern per
                    // required character class.
                    Rule::Pattern(r"[a-z]", "Password must contain uppercase, lowercase, and number"),
                    Rule::Pattern(r"[A-Z]", "Password must contain uppercase, lowercase, and number"),
                    Rule::Pattern(r"[0-9]", "Password must contain uppercase, lowercase, and number"),
                ],
            )
            .field(
                "consent",
                "Consent",
                Value::Flag(self.consent),
                vec![Rule::Checked("You must consent to data usage")],
            );

        if self.role == Role::Patient {
            form = form
                .field(
                    "age",
                    "Age",
                    age.map_or(Value::Missing, Value::Number),
                    vec![
                        Rule::Min(1.0, "Age must be at least 1"),
                        Rule::Max(120.0, "Age must be less than 120"),
                    ],
                )
                .field(
                    "phone",
                    "Phone",
                    if phone.is_empty() {
                        Value::Missing
                    } else {
                        Value::Text(phone)
                    },
                    vec![
                        Rule::Pattern(r"^[0-9\-\+\(\)\s]+$", "Invalid phone number"),
                        Rule::MinLen(10, "Phone must be at least 10 digits"),
                    ],
                )
                .field(
                    "providerId",
                    "Provider",
                    if provider.is_empty() {
                        Value::Missing
                    } else {
                        Value::Text(provider)
                    },
                    vec![Rule::Required],
                );
        }

        form.validate()
    }
}

// ======================= Register Error ==========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Store(#[from] StoreError),
}

// ====================== Register Use Case ========================

#[async_trait]
pub trait IRegisterUseCase: Send + Sync {
    async fn execute(&self, input: RegisterInput) -> Result<User, RegisterError>;
}

#[derive(Debug, Clone)]
pub struct RegisterUseCase<D, P>
where
    D: UserDirectory,
    P: PatientRoster,
{
    directory: D,
    roster: P,
}

impl<D, P> RegisterUseCase<D, P>
where
    D: UserDirectory,
    P: PatientRoster,
{
    pub fn new(directory: D, roster: P) -> Self {
        Self { directory, roster }
    }
}

#[async_trait]
impl<D, P> IRegisterUseCase for RegisterUseCase<D, P>
where
    D: UserDirectory,
    P: PatientRoster,
{
    async fn execute(&self, input: RegisterInput) -> Result<User, RegisterError> {
        input.validate()?;

        let user = User {
            id: Uuid::new_v4().to_string(),
            role: input.role,
            name: input.name.trim().to_string(),
            email: input.email.trim().to_string(),
            password: input.password.trim().to_string(),
            age: input.age,
            phone: input.phone.clone(),
            allergies: input.allergies.clone(),
            medications: input.medications.clone(),
            specialty: input.specialty.clone(),
        };

        let created = self.directory.create_user(&user).await?;
        info!(user_id = %created.id, role = %created.role, "registered new account");

        // Patients additionally get linked to their chosen provider.
        // Two independent round trips: if this one fails the user record
        // already exists, and the caller sees a plain store failure.
        if created.role == Role::Patient {
            let provider_id = input.provider_id.clone().unwrap_or_default();
            let record = PatientRecord {
                id: Uuid::new_v4().to_string(),
                provider_id,
                patient_id: created.id.clone(),
                name: created.name.clone(),
                compliance: Compliance::Good,
                last_checkup: Local::now().date_naive(),
                missed_appointments: 0,
            };
            self.roster.create_patient_record(&record).await?;
        }

        Ok(created)
    }
}
