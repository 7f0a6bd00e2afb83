//! Wire records for the backing REST store.
//!
//! The store is a dumb JSON collection server, so these records are the
//! domain model as well: what goes over the wire is what the rest of the
//! crate works with. Everything serializes camelCase to match the
//! collection schema.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Provider,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Patient => write!(f, "patient"),
            Role::Provider => write!(f, "provider"),
        }
    }
}

/// A portal account. The password is stored in the clear: the backing
/// store offers no authentication of its own and this client does not
/// pretend otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub role: Role,
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medications: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
}

/// Partial user update, PATCHed field-by-field. Absent fields are left
/// untouched by the store.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medications: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
}

/// One logged wellness entry, owned by a single patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub steps: u32,
    pub water_intake: u32,
    pub sleep_hours: f64,
}

/// Full-field goal replacement used for edits. Id and owner never change.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPatch {
    pub date: NaiveDate,
    pub steps: u32,
    pub water_intake: u32,
    pub sleep_hours: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderStatus {
    Pending,
    Completed,
}

/// Preventive-care reminder. Status is managed outside the patient flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub date: NaiveDate,
    pub status: ReminderStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Compliance {
    Excellent,
    Good,
    NeedsAttention,
}

impl std::fmt::Display for Compliance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Compliance::Excellent => write!(f, "excellent"),
            Compliance::Good => write!(f, "good"),
            Compliance::NeedsAttention => write!(f, "needs-attention"),
        }
    }
}

/// Links exactly one patient to exactly one provider; created when a
/// patient registers with a chosen provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    pub id: String,
    pub provider_id: String,
    pub patient_id: String,
    pub name: String,
    pub compliance: Compliance,
    pub last_checkup: NaiveDate,
    pub missed_appointments: u32,
}

/// Provider feedback attached to a specific goal entry. `read` moves
/// false to true once and never back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderComment {
    pub id: String,
    pub patient_id: String,
    pub provider_id: String,
    pub provider_name: String,
    pub goal_id: String,
    pub goal_date: NaiveDate,
    pub comment: String,
    pub date: DateTime<Utc>,
    pub read: bool,
}

/// Seed content, read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthTip {
    pub date: NaiveDate,
    pub tip: String,
}
