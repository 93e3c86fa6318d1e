//! Ticket number format and generation

use chrono::{Datelike, Utc};
use rand::Rng;
use rand::rngs::StdRng;

/// Ticket prefix for the Lucky Jewels promotion
pub const TICKET_PREFIX: &str = "LJ";

/// Generate a candidate ticket number
///
/// Format: prefix, two-digit year, six uniformly random digits. Uniqueness
/// against existing participants is the caller's responsibility.
pub fn generate_ticket(rng: &mut StdRng) -> String {
    let year = Utc::now().year() % 100;
    let digits: u32 = rng.random_range(100_000..=999_999);
    format!("{}{:02}{}", TICKET_PREFIX, year, digits)
}

/// Check that a string has the ticket shape: prefix followed by 8 digits
pub fn is_valid_ticket(ticket: &str) -> bool {
    ticket
        .strip_prefix(TICKET_PREFIX)
        .is_some_and(|rest| rest.len() == 8 && rest.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_ticket_format() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let ticket = generate_ticket(&mut rng);
            assert_eq!(ticket.len(), 10);
            assert!(is_valid_ticket(&ticket), "bad ticket: {}", ticket);

            let digits: u32 = ticket[4..].parse().unwrap();
            assert!((100_000..=999_999).contains(&digits));
        }
    }

    #[test]
    fn test_ticket_validation() {
        assert!(is_valid_ticket("LJ26123456"));
        assert!(!is_valid_ticket("XX26123456"));
        assert!(!is_valid_ticket("LJ2612345"));
        assert!(!is_valid_ticket("LJ26123456X"));
        assert!(!is_valid_ticket("LJ26abc456"));
        assert!(!is_valid_ticket(""));
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);

        for _ in 0..10 {
            assert_eq!(generate_ticket(&mut a), generate_ticket(&mut b));
        }
    }
}
