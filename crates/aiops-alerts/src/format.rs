//! Rendering of alert payloads into LLM prompt text.

use std::fmt::Write;

use crate::types::AlertPayload;

/// Literal returned when a payload carries no alerts.
pub const NO_ALERT_DATA: &str = "No alert data provided";

/// Separator line placed between consecutive alert blocks.
const BLOCK_SEPARATOR: &str = "\n---\n";

/// Renders a payload into a human-readable text block for prompting.
///
/// Each alert becomes a fixed-template block sourcing its fields from the
/// alert's labels and annotations. Substitution is structural: an absent
/// label renders as `Unknown` and an absent annotation as `N/A`, while a
/// present-but-empty value is preserved verbatim. Blocks appear in input
/// order, separated by a `---` line.
///
/// Pure and deterministic; always returns a string.
#[must_use]
pub fn format_alerts(payload: &AlertPayload) -> String {
    if payload.alerts.is_empty() {
        return NO_ALERT_DATA.to_string();
    }

    let blocks: Vec<String> = payload
        .alerts
        .iter()
        .map(|alert| {
            let mut block = String::new();
            // Write into a String is infallible.
            let _ = write!(
                block,
                "\nAlert: {}\nSeverity: {}\nStatus: {}\nInstance: {}\nJob: {}\nSummary: {}\nDescription: {}\nStarted: {}\n",
                alert.label("alertname").unwrap_or("Unknown"),
                alert.label("severity").unwrap_or("Unknown"),
                alert.status.as_deref().unwrap_or("Unknown"),
                alert.label("instance").unwrap_or("Unknown"),
                alert.label("job").unwrap_or("Unknown"),
                alert.annotation("summary").unwrap_or("N/A"),
                alert.annotation("description").unwrap_or("N/A"),
                alert.starts_at.as_deref().unwrap_or("Unknown"),
            );
            block
        })
        .collect();

    blocks.join(BLOCK_SEPARATOR)
}
