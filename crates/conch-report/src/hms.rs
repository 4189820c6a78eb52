//! Duration cells are rendered as `H:M:S` with weeks and days folded into
//! the hour count, so long remediations stay sortable in a spreadsheet.

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// Format a nanosecond duration as `H:MM:SS`.
pub fn format_hms(nanos: i64) -> String {
    let (sign, nanos) = if nanos < 0 { ("-", -nanos) } else { ("", nanos) };
    let total_secs = nanos / NANOS_PER_SEC;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{}{}:{:02}:{:02}", sign, hours, minutes, seconds)
}
