use owo_colors::OwoColorize;

pub mod cards;
pub mod tables;

pub use cards::{RecordCard, cards_for};
pub use tables::render_table;

/// Broad category of a server-assigned status string, for styling only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Positive,
    Pending,
    Negative,
    Neutral,
}

/// Classify a status string. Unknown values are neutral; the text itself is
/// always displayed verbatim.
pub fn status_tone(status: &str) -> StatusTone {
    match status.to_ascii_lowercase().as_str() {
        "approved" | "success" | "completed" | "paid" | "settled" => StatusTone::Positive,
        "pending" | "processing" | "in_review" | "submitted" => StatusTone::Pending,
        "rejected" | "denied" | "failed" | "declined" | "cancelled" => StatusTone::Negative,
        _ => StatusTone::Neutral,
    }
}

pub fn format_status_colored(status: &str) -> String {
    match status_tone(status) {
        StatusTone::Positive => status.green().to_string(),
        StatusTone::Pending => status.yellow().to_string(),
        StatusTone::Negative => status.red().to_string(),
        StatusTone::Neutral => status.dimmed().to_string(),
    }
}
