//! Participant export

use serde::{Deserialize, Serialize};

use lj_core::{Participant, WinnerRecord};

/// CSV header row for participant exports
pub const EXPORT_HEADER: &str =
    "Ticket Number,Full Name,Phone,Email,Receipt Number,Status,Prize Won,Registered At";

/// One export line: a participant joined with any winning record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRow {
    pub ticket_number: String,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    /// "N/A" when no receipt was captured
    pub receipt_number: String,
    /// "Winner" or "Active", from ledger membership
    pub status: String,
    /// Prize label, or "N/A" for non-winners
    pub prize_won: String,
    /// Registration timestamp, full ISO 8601 with millisecond precision
    pub registered_at: String,
}

impl ExportRow {
    /// Project a participant against the winner ledger
    pub fn from_participant(participant: &Participant, winners: &[WinnerRecord]) -> Self {
        let win = winners
            .iter()
            .find(|w| w.ticket_number == participant.ticket_number);

        Self {
            ticket_number: participant.ticket_number.clone(),
            full_name: participant.full_name.clone(),
            phone: participant.phone.clone(),
            email: participant.email.clone(),
            receipt_number: participant
                .receipt_number
                .clone()
                .unwrap_or_else(|| "N/A".to_string()),
            status: if win.is_some() { "Winner" } else { "Active" }.to_string(),
            prize_won: win
                .map(|w| w.prize.clone())
                .unwrap_or_else(|| "N/A".to_string()),
            registered_at: participant
                .registered_at
                .format("%Y-%m-%dT%H:%M:%S%.3fZ")
                .to_string(),
        }
    }

    /// Render as a CSV line
    pub fn to_csv_line(&self) -> String {
        format!(
            "{},{},{},{},{},{},\"{}\",{}",
            self.ticket_number,
            self.full_name,
            self.phone,
            self.email,
            self.receipt_number,
            self.status,
            self.prize_won,
            self.registered_at
        )
    }
}

/// Render the full CSV document
///
/// Only the prize column is quoted (labels contain parentheses and spaces);
/// commas inside other fields are not escaped. Every row, the header
/// included, ends with a newline.
pub fn csv_export(rows: &[ExportRow]) -> String {
    let mut out = String::from(EXPORT_HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(&row.to_csv_line());
        out.push('\n');
    }
    out
}
