//! Winner Ledger
//!
//! Append-only record of awarded prizes. Records are snapshots and are
//! never mutated after creation; appends happen through staged writes so
//! the draw engine can commit them together with the participant status.

use lj_core::{LjError, LjResult, WinnerRecord};

use crate::backend::{KEY_WINNERS, SharedBackend, StagedWrite};

/// Authoritative winner collection
pub struct WinnerLedger {
    backend: SharedBackend,
}

impl WinnerLedger {
    pub fn new(backend: SharedBackend) -> Self {
        Self { backend }
    }

    /// All winners in draw order
    pub fn all(&self) -> Vec<WinnerRecord> {
        self.decode()
    }

    /// Number of winners drawn in a category
    pub fn count_for(&self, category_key: &str) -> u32 {
        self.decode()
            .iter()
            .filter(|w| w.category == category_key)
            .count() as u32
    }

    /// Whether a ticket has already won
    pub fn contains_ticket(&self, ticket_number: &str) -> bool {
        self.decode()
            .iter()
            .any(|w| w.ticket_number == ticket_number)
    }

    /// The winning record for a ticket, if any
    pub fn find_by_ticket(&self, ticket_number: &str) -> Option<WinnerRecord> {
        self.decode()
            .into_iter()
            .find(|w| w.ticket_number == ticket_number)
    }

    /// Stage an append for an atomic commit
    pub fn staged_append(&self, record: &WinnerRecord) -> LjResult<StagedWrite> {
        let mut winners = self.decode();
        winners.push(record.clone());
        let json = serde_json::to_string_pretty(&winners)
            .map_err(|e| LjError::Serialization(e.to_string()))?;
        Ok(StagedWrite {
            key: KEY_WINNERS.to_string(),
            value: json,
        })
    }

    /// Drop all winners
    pub fn clear(&self) -> LjResult<()> {
        self.backend.set(KEY_WINNERS, "[]")
    }

    /// Stage an empty collection write for an atomic reset
    pub fn staged_clear(&self) -> StagedWrite {
        StagedWrite {
            key: KEY_WINNERS.to_string(),
            value: "[]".to_string(),
        }
    }

    fn decode(&self) -> Vec<WinnerRecord> {
        match self.backend.get(KEY_WINNERS) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("Discarding corrupt winner data: {}", e);
                Vec::new()
            }),
            None => Vec::new(),
        }
    }
}
