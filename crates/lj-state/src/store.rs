//! Participant Store
//!
//! Owns the persisted participant collection. Registration screens for
//! duplicate identities, assigns unique ticket numbers with bounded retries,
//! and appends in registration order. Reads decode fresh from storage on
//! every call; a corrupt payload decodes to the empty collection with a
//! warning instead of failing.

use rand::rngs::StdRng;

use lj_core::{
    DuplicateField, LjError, LjResult, NewParticipant, Participant, ParticipantStatus,
    generate_ticket,
};

use crate::backend::{KEY_PARTICIPANTS, SharedBackend, StagedWrite};

/// Ticket collision retries before registration gives up
pub const MAX_TICKET_ATTEMPTS: u32 = 5;

/// Authoritative participant collection
pub struct ParticipantStore {
    backend: SharedBackend,
}

impl ParticipantStore {
    pub fn new(backend: SharedBackend) -> Self {
        Self { backend }
    }

    // ============ Registration ============

    /// Register a new participant
    ///
    /// Rejects a duplicate email (case-insensitive) before a duplicate
    /// phone, then assigns a ticket that collides with no existing one.
    pub fn register(&self, form: NewParticipant, rng: &mut StdRng) -> LjResult<Participant> {
        let mut participants = self.decode();

        if participants.iter().any(|p| p.email_matches(&form.email)) {
            return Err(LjError::Duplicate(DuplicateField::Email));
        }
        if participants.iter().any(|p| p.phone == form.phone) {
            return Err(LjError::Duplicate(DuplicateField::Phone));
        }

        let ticket_number = unique_ticket(&participants, rng)?;
        let participant = Participant::from_registration(form, ticket_number);
        participants.push(participant.clone());
        self.write(&participants)?;

        log::info!(
            "Registered {} with ticket {}",
            participant.full_name,
            participant.ticket_number
        );
        Ok(participant)
    }

    // ============ Queries ============

    /// All participants in registration order
    pub fn all(&self) -> Vec<Participant> {
        self.decode()
    }

    /// Find by ticket number
    pub fn find_by_ticket(&self, ticket_number: &str) -> Option<Participant> {
        self.decode()
            .into_iter()
            .find(|p| p.ticket_number == ticket_number)
    }

    /// Find by case-insensitive email or exact phone
    pub fn find_by_contact(&self, query: &str) -> Option<Participant> {
        self.decode()
            .into_iter()
            .find(|p| p.email_matches(query) || p.phone == query)
    }

    /// Case-insensitive substring search over name, email, phone, and ticket
    pub fn search(&self, term: &str) -> Vec<Participant> {
        let needle = term.to_lowercase();
        self.decode()
            .into_iter()
            .filter(|p| {
                p.full_name.to_lowercase().contains(&needle)
                    || p.email.to_lowercase().contains(&needle)
                    || p.phone.contains(&needle)
                    || p.ticket_number.to_lowercase().contains(&needle)
            })
            .collect()
    }

    // ============ Mutation ============

    /// Set the status of the participant holding a ticket
    pub fn update_status(&self, ticket_number: &str, status: ParticipantStatus) -> LjResult<()> {
        let participants = self.with_status(ticket_number, status)?;
        self.write(&participants)
    }

    /// Stage a status change for an atomic multi-store commit
    pub fn staged_status_update(
        &self,
        ticket_number: &str,
        status: ParticipantStatus,
    ) -> LjResult<StagedWrite> {
        let participants = self.with_status(ticket_number, status)?;
        Ok(StagedWrite {
            key: KEY_PARTICIPANTS.to_string(),
            value: encode(&participants)?,
        })
    }

    /// Remove a participant by id
    pub fn remove(&self, id: &str) -> LjResult<()> {
        let mut participants = self.decode();
        let before = participants.len();
        participants.retain(|p| p.id != id);
        if participants.len() == before {
            return Err(LjError::NotFound(format!("participant {}", id)));
        }
        self.write(&participants)
    }

    /// Drop all participants
    pub fn clear(&self) -> LjResult<()> {
        self.backend.set(KEY_PARTICIPANTS, "[]")
    }

    /// Stage an empty collection write for an atomic reset
    pub fn staged_clear(&self) -> StagedWrite {
        StagedWrite {
            key: KEY_PARTICIPANTS.to_string(),
            value: "[]".to_string(),
        }
    }

    // ============ Internals ============

    fn with_status(
        &self,
        ticket_number: &str,
        status: ParticipantStatus,
    ) -> LjResult<Vec<Participant>> {
        let mut participants = self.decode();
        let participant = participants
            .iter_mut()
            .find(|p| p.ticket_number == ticket_number)
            .ok_or_else(|| LjError::NotFound(format!("ticket {}", ticket_number)))?;
        participant.status = status;
        Ok(participants)
    }

    fn decode(&self) -> Vec<Participant> {
        match self.backend.get(KEY_PARTICIPANTS) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("Discarding corrupt participant data: {}", e);
                Vec::new()
            }),
            None => Vec::new(),
        }
    }

    fn write(&self, participants: &[Participant]) -> LjResult<()> {
        self.backend.set(KEY_PARTICIPANTS, &encode(participants)?)
    }
}

fn encode(participants: &[Participant]) -> LjResult<String> {
    serde_json::to_string_pretty(participants).map_err(|e| LjError::Serialization(e.to_string()))
}

fn unique_ticket(participants: &[Participant], rng: &mut StdRng) -> LjResult<String> {
    for _ in 0..MAX_TICKET_ATTEMPTS {
        let candidate = generate_ticket(rng);
        if !participants.iter().any(|p| p.ticket_number == candidate) {
            return Ok(candidate);
        }
    }
    Err(LjError::TicketGeneration(MAX_TICKET_ATTEMPTS))
}
