//! Reveal timing profiles
//!
//! A draw commits its winner instantly; the wheel spin a host plays is pure
//! presentation. These profiles describe when the already-committed winner
//! should be shown. No draw logic reads these values.

use serde::{Deserialize, Serialize};

/// Reveal pacing profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevealProfile {
    /// Stage-show pacing
    Normal,
    /// Fast rehearsal pacing
    Turbo,
    /// No delays (testing)
    Instant,
}

impl Default for RevealProfile {
    fn default() -> Self {
        Self::Normal
    }
}

/// Reveal timing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealTiming {
    /// Profile type
    pub profile: RevealProfile,

    /// Wheel spin animation length (ms)
    pub spin_duration_ms: u64,

    /// Pause between the wheel stopping and the winner card (ms)
    pub reveal_delay_ms: u64,
}

impl RevealTiming {
    /// Stage-show pacing
    pub fn normal() -> Self {
        Self {
            profile: RevealProfile::Normal,
            spin_duration_ms: 5000,
            reveal_delay_ms: 500,
        }
    }

    /// Fast rehearsal pacing
    pub fn turbo() -> Self {
        Self {
            profile: RevealProfile::Turbo,
            spin_duration_ms: 1000,
            reveal_delay_ms: 100,
        }
    }

    /// No delays (testing)
    pub fn instant() -> Self {
        Self {
            profile: RevealProfile::Instant,
            spin_duration_ms: 0,
            reveal_delay_ms: 0,
        }
    }

    /// Get config for a profile
    pub fn from_profile(profile: RevealProfile) -> Self {
        match profile {
            RevealProfile::Normal => Self::normal(),
            RevealProfile::Turbo => Self::turbo(),
            RevealProfile::Instant => Self::instant(),
        }
    }

    /// Build the presentation timeline for one draw
    pub fn schedule(&self) -> DrawSchedule {
        DrawSchedule {
            spin_duration_ms: self.spin_duration_ms,
            reveal_delay_ms: self.reveal_delay_ms,
            reveal_at_ms: self.spin_duration_ms + self.reveal_delay_ms,
        }
    }
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self::normal()
    }
}

/// Host-facing timeline for presenting a committed draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawSchedule {
    pub spin_duration_ms: u64,
    pub reveal_delay_ms: u64,
    /// Offset from draw start at which the winner card appears
    pub reveal_at_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_schedule() {
        let schedule = RevealTiming::normal().schedule();

        assert_eq!(schedule.spin_duration_ms, 5000);
        assert_eq!(schedule.reveal_delay_ms, 500);
        assert_eq!(schedule.reveal_at_ms, 5500);
    }

    #[test]
    fn test_instant_has_no_delays() {
        let schedule = RevealTiming::instant().schedule();
        assert_eq!(schedule.reveal_at_ms, 0);
    }

    #[test]
    fn test_from_profile() {
        assert_eq!(
            RevealTiming::from_profile(RevealProfile::Turbo).spin_duration_ms,
            RevealTiming::turbo().spin_duration_ms
        );
    }
}
