//! Participant records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Participant lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantStatus {
    Active,
    Winner,
}

impl Default for ParticipantStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl ParticipantStatus {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Winner => "Winner",
        }
    }
}

/// Registration form data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewParticipant {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    /// Optional purchase receipt reference
    #[serde(default)]
    pub receipt_number: Option<String>,
}

/// A registered participant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    /// Stable unique id
    pub id: String,
    /// Unique ticket number (prefix + year + 6 digits)
    pub ticket_number: String,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    /// Optional purchase receipt reference
    #[serde(default)]
    pub receipt_number: Option<String>,
    /// Set once at registration
    pub registered_at: DateTime<Utc>,
    #[serde(default)]
    pub status: ParticipantStatus,
}

impl Participant {
    /// Build a participant from form data and an assigned ticket
    pub fn from_registration(form: NewParticipant, ticket_number: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            ticket_number,
            full_name: form.full_name,
            phone: form.phone,
            email: form.email,
            receipt_number: form.receipt_number,
            registered_at: Utc::now(),
            status: ParticipantStatus::Active,
        }
    }

    /// Case-insensitive email comparison, with Unicode case folding
    pub fn email_matches(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }
}
