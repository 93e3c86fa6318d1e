//! Draw statistics

use serde::{Deserialize, Serialize};

/// Counts shown on the promotion dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawStatistics {
    pub total_participants: u32,
    pub total_winners: u32,
    /// Unfilled winner slots summed across all categories
    pub remaining_prizes: u32,
}
