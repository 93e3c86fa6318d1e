//! Winner records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Participant;

/// An awarded prize, snapshotted at draw time
///
/// Fields are copied from the winning participant rather than referenced,
/// so later edits or removals never rewrite draw history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WinnerRecord {
    /// Stable unique id
    pub id: String,
    pub ticket_number: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Composed prize label, e.g. "Diamond Ring ($5,000)"
    pub prize: String,
    /// Prize category key
    pub category: String,
    pub drawn_at: DateTime<Utc>,
}

impl WinnerRecord {
    /// Snapshot a winning participant
    pub fn from_participant(
        participant: &Participant,
        prize: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            ticket_number: participant.ticket_number.clone(),
            name: participant.full_name.clone(),
            phone: participant.phone.clone(),
            email: participant.email.clone(),
            prize: prize.into(),
            category: category.into(),
            drawn_at: Utc::now(),
        }
    }
}
