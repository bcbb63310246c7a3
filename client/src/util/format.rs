//! Display formatting for durations and upload dates.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Render whole seconds as `H:MM:SS` when at least an hour long, else `M:SS`.
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Render an RFC 3339 timestamp as a US short date (`M/D/YYYY`).
pub fn format_upload_date(timestamp: &str) -> String {
    match OffsetDateTime::parse(timestamp.trim(), &Rfc3339) {
        Ok(dt) => format!("{}/{}/{}", u8::from(dt.month()), dt.day(), dt.year()),
        Err(_) => "Unknown date".to_owned(),
    }
}
