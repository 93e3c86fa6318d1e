//! Eligibility resolution

use std::collections::HashSet;

use lj_core::{Participant, WinnerRecord};

/// Participants who have not yet won anything
///
/// Winning removes a ticket from every later draw regardless of category,
/// so the pool is the participant list minus all ledger tickets. Callers
/// recompute from fresh reads; nothing is cached.
pub fn eligible_pool(participants: &[Participant], winners: &[WinnerRecord]) -> Vec<Participant> {
    let won: HashSet<&str> = winners.iter().map(|w| w.ticket_number.as_str()).collect();
    participants
        .iter()
        .filter(|p| !won.contains(p.ticket_number.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lj_core::NewParticipant;

    fn participant(ticket: &str) -> Participant {
        Participant::from_registration(
            NewParticipant {
                full_name: format!("Holder of {}", ticket),
                phone: format!("555-{}", &ticket[4..8]),
                email: format!("{}@example.com", ticket),
                receipt_number: None,
            },
            ticket.to_string(),
        )
    }

    #[test]
    fn test_everyone_eligible_with_empty_ledger() {
        let participants = vec![participant("LJ26111111"), participant("LJ26222222")];

        let pool = eligible_pool(&participants, &[]);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_winners_are_excluded() {
        let participants = vec![
            participant("LJ26111111"),
            participant("LJ26222222"),
            participant("LJ26333333"),
        ];
        let winners = vec![WinnerRecord::from_participant(
            &participants[1],
            "Diamond Ring ($5,000)",
            "grand",
        )];

        let pool = eligible_pool(&participants, &winners);
        assert_eq!(pool.len(), 2);
        assert!(pool.iter().all(|p| p.ticket_number != "LJ26222222"));
    }

    #[test]
    fn test_fully_drawn_population_is_empty() {
        let participants = vec![participant("LJ26111111")];
        let winners = vec![WinnerRecord::from_participant(
            &participants[0],
            "Gold Necklace ($3,000)",
            "second",
        )];

        assert!(eligible_pool(&participants, &winners).is_empty());
    }

    #[test]
    fn test_empty_population_is_empty() {
        assert!(eligible_pool(&[], &[]).is_empty());
    }
}
