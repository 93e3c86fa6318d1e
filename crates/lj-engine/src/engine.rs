//! Draw Engine — registration, tiered draws, and promotion state

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use lj_core::{LjError, LjResult, NewParticipant, Participant, ParticipantStatus, WinnerRecord};
use lj_state::{AdminSession, ParticipantStore, SharedBackend, WinnerLedger};

use crate::catalog::PrizeCatalog;
use crate::eligibility;
use crate::export::{ExportRow, csv_export};
use crate::stats::DrawStatistics;
use crate::timing::{DrawSchedule, RevealTiming};

/// Lucky Jewels draw engine
///
/// Owns the prize catalog and the RNG, and coordinates the participant
/// store and winner ledger over one shared backend so every draw commits
/// as a single unit.
pub struct DrawEngine {
    /// Category policy
    catalog: PrizeCatalog,
    /// Participant collection
    participants: ParticipantStore,
    /// Winner ledger
    winners: WinnerLedger,
    /// Admin session flag
    session: AdminSession,
    /// Shared backend handle, used for atomic multi-store commits
    backend: SharedBackend,
    /// Random number generator
    rng: StdRng,
    /// Presentation timing
    timing: RevealTiming,
}

/// Lookup result for a participant checking their entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryStatus {
    pub participant: Participant,
    /// The winning record when the ticket has already won
    pub winning: Option<WinnerRecord>,
}

impl DrawEngine {
    /// Create an engine with the standard catalog
    pub fn new(backend: SharedBackend) -> Self {
        Self::with_catalog(backend, PrizeCatalog::standard())
    }

    /// Create with a specific catalog
    pub fn with_catalog(backend: SharedBackend, catalog: PrizeCatalog) -> Self {
        Self {
            participants: ParticipantStore::new(backend.clone()),
            winners: WinnerLedger::new(backend.clone()),
            session: AdminSession::new(backend.clone()),
            backend,
            catalog,
            rng: StdRng::from_os_rng(),
            timing: RevealTiming::normal(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIGURATION
    // ═══════════════════════════════════════════════════════════════════════════

    /// Get the current catalog
    pub fn catalog(&self) -> &PrizeCatalog {
        &self.catalog
    }

    /// Get the current reveal timing
    pub fn timing(&self) -> &RevealTiming {
        &self.timing
    }

    /// Set the reveal timing
    pub fn set_timing(&mut self, timing: RevealTiming) {
        self.timing = timing;
    }

    /// Seed RNG for reproducible results
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Export catalog as JSON
    pub fn export_catalog(&self) -> String {
        serde_json::to_string_pretty(&self.catalog).unwrap_or_default()
    }

    /// Import catalog from JSON
    pub fn import_catalog(&mut self, json: &str) -> LjResult<()> {
        let catalog: PrizeCatalog = serde_json::from_str(json)
            .map_err(|e| LjError::Serialization(format!("Invalid catalog: {}", e)))?;
        self.catalog = catalog;
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // REGISTRATION
    // ═══════════════════════════════════════════════════════════════════════════

    /// Register a new participant
    pub fn register_participant(&mut self, form: NewParticipant) -> LjResult<Participant> {
        self.participants.register(form, &mut self.rng)
    }

    /// All participants in registration order
    pub fn participants(&self) -> Vec<Participant> {
        self.participants.all()
    }

    /// Case-insensitive substring search over name, email, phone, and ticket
    pub fn search_participants(&self, term: &str) -> Vec<Participant> {
        self.participants.search(term)
    }

    /// Remove a participant by id
    pub fn remove_participant(&self, id: &str) -> LjResult<()> {
        self.participants.remove(id)
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // DRAW EXECUTION
    // ═══════════════════════════════════════════════════════════════════════════

    /// Draw one winner in a category
    ///
    /// Gate order: the category must exist, must have capacity left, and the
    /// eligible pool must be non-empty. The capacity gate fires even when the
    /// pool is also empty. On success the winner snapshot and the status flip
    /// commit together; any rejection leaves all state untouched.
    pub fn conduct_draw(&mut self, category_key: &str) -> LjResult<WinnerRecord> {
        let category = self
            .catalog
            .category(category_key)
            .ok_or_else(|| LjError::UnknownCategory(category_key.to_string()))?
            .clone();

        if self.winners.count_for(&category.key) >= category.max_winners {
            log::info!("Draw rejected: category {} exhausted", category.key);
            return Err(LjError::CategoryExhausted(category.key));
        }

        let pool = self.eligible_pool();
        if pool.is_empty() {
            log::info!("Draw rejected: no eligible participants");
            return Err(LjError::NoEligibleParticipants);
        }

        let index = self.rng.random_range(0..pool.len());
        let record = WinnerRecord::from_participant(
            &pool[index],
            category.prize_label(),
            category.key.clone(),
        );

        let writes = [
            self.winners.staged_append(&record)?,
            self.participants
                .staged_status_update(&record.ticket_number, ParticipantStatus::Winner)?,
        ];
        self.backend.apply(&writes)?;

        log::info!(
            "Drew {} winner: ticket {} ({})",
            record.category,
            record.ticket_number,
            record.prize
        );
        Ok(record)
    }

    /// Presentation timeline for one draw
    pub fn draw_schedule(&self) -> DrawSchedule {
        self.timing.schedule()
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // QUERIES
    // ═══════════════════════════════════════════════════════════════════════════

    /// All winners in draw order
    pub fn winners(&self) -> Vec<WinnerRecord> {
        self.winners.all()
    }

    /// Participants still eligible to win, from fresh reads
    pub fn eligible_pool(&self) -> Vec<Participant> {
        eligibility::eligible_pool(&self.participants.all(), &self.winners.all())
    }

    /// Unfilled winner slots in a category
    pub fn remaining_capacity(&self, category_key: &str) -> LjResult<u32> {
        let category = self
            .catalog
            .category(category_key)
            .ok_or_else(|| LjError::UnknownCategory(category_key.to_string()))?;
        Ok(category
            .max_winners
            .saturating_sub(self.winners.count_for(category_key)))
    }

    /// Whether a category can still award a prize
    pub fn has_capacity(&self, category_key: &str) -> LjResult<bool> {
        Ok(self.remaining_capacity(category_key)? > 0)
    }

    /// Dashboard counts
    pub fn statistics(&self) -> DrawStatistics {
        let remaining_prizes = self
            .catalog
            .categories
            .iter()
            .map(|c| c.max_winners.saturating_sub(self.winners.count_for(&c.key)))
            .sum();

        DrawStatistics {
            total_participants: self.participants.all().len() as u32,
            total_winners: self.winners.all().len() as u32,
            remaining_prizes,
        }
    }

    /// Entry lookup by email (case-insensitive) or exact phone
    pub fn entry_status(&self, query: &str) -> Option<EntryStatus> {
        let participant = self.participants.find_by_contact(query)?;
        let winning = self.winners.find_by_ticket(&participant.ticket_number);
        Some(EntryStatus {
            participant,
            winning,
        })
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // EXPORT & RESET
    // ═══════════════════════════════════════════════════════════════════════════

    /// Export rows joining every participant with any winning record
    pub fn export_rows(&self) -> Vec<ExportRow> {
        let winners = self.winners.all();
        self.participants
            .all()
            .iter()
            .map(|p| ExportRow::from_participant(p, &winners))
            .collect()
    }

    /// Render the participant CSV document
    pub fn export_csv(&self) -> String {
        csv_export(&self.export_rows())
    }

    /// Clear participants and winners together
    ///
    /// The two collections land as one commit. The admin session flag
    /// survives a reset. Confirmation prompts are the caller's concern.
    pub fn reset_all(&self) -> LjResult<()> {
        let writes = [
            self.participants.staged_clear(),
            self.winners.staged_clear(),
        ];
        self.backend.apply(&writes)?;
        log::info!("Promotion state reset");
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // SESSION
    // ═══════════════════════════════════════════════════════════════════════════

    /// Admin session flag accessor
    pub fn admin_session(&self) -> &AdminSession {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lj_state::MemoryBackend;

    fn form(name: &str, phone: &str, email: &str) -> NewParticipant {
        NewParticipant {
            full_name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            receipt_number: None,
        }
    }

    fn engine() -> DrawEngine {
        let mut engine = DrawEngine::new(MemoryBackend::shared());
        engine.seed(12345);
        engine
    }

    #[test]
    fn test_engine_creation() {
        let engine = engine();
        let stats = engine.statistics();

        assert_eq!(stats.total_participants, 0);
        assert_eq!(stats.total_winners, 0);
        assert_eq!(stats.remaining_prizes, 13);
    }

    #[test]
    fn test_draw_commits_winner_and_status() {
        let mut engine = engine();
        for i in 0..3 {
            engine
                .register_participant(form(
                    &format!("P{}", i),
                    &format!("555-01{:02}", i),
                    &format!("p{}@example.com", i),
                ))
                .unwrap();
        }

        let record = engine.conduct_draw("grand").unwrap();

        assert_eq!(record.category, "grand");
        assert_eq!(record.prize, "Diamond Ring ($5,000)");
        assert_eq!(engine.winners().len(), 1);

        let winner = engine
            .participants()
            .into_iter()
            .find(|p| p.ticket_number == record.ticket_number)
            .unwrap();
        assert_eq!(winner.status, ParticipantStatus::Winner);
        assert_eq!(engine.eligible_pool().len(), 2);
    }

    #[test]
    fn test_unknown_category() {
        let mut engine = engine();
        engine
            .register_participant(form("Ana", "555-0100", "ana@example.com"))
            .unwrap();

        let err = engine.conduct_draw("platinum").unwrap_err();
        assert!(matches!(err, LjError::UnknownCategory(_)));
        assert!(!err.is_rejection());
    }

    #[test]
    fn test_capacity_gate_fires_before_pool_gate() {
        let mut engine = engine();
        engine
            .register_participant(form("Ana", "555-0100", "ana@example.com"))
            .unwrap();
        engine.conduct_draw("grand").unwrap();

        // Pool is now empty too, but the exhausted category wins
        let err = engine.conduct_draw("grand").unwrap_err();
        assert!(matches!(err, LjError::CategoryExhausted(_)));
        assert!(err.is_rejection());
    }

    #[test]
    fn test_empty_pool_rejection() {
        let mut engine = engine();

        let err = engine.conduct_draw("grand").unwrap_err();
        assert!(matches!(err, LjError::NoEligibleParticipants));
        assert!(err.is_rejection());
    }

    #[test]
    fn test_seeded_draws_are_reproducible() {
        let run = || {
            let mut engine = DrawEngine::new(MemoryBackend::shared());
            engine.seed(777);
            for i in 0..5 {
                engine
                    .register_participant(form(
                        &format!("P{}", i),
                        &format!("555-02{:02}", i),
                        &format!("q{}@example.com", i),
                    ))
                    .unwrap();
            }
            engine.conduct_draw("grand").unwrap().ticket_number
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn test_catalog_roundtrip_through_engine() {
        let mut engine = engine();
        let json = engine.export_catalog();

        engine.import_catalog(&json).unwrap();
        assert_eq!(engine.catalog().total_prizes(), 13);

        let err = engine.import_catalog("{ broken").unwrap_err();
        assert!(matches!(err, LjError::Serialization(_)));
    }
}
