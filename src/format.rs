//! Display helpers for project cards.

use chrono::{DateTime, Datelike, Local, TimeZone};

const MONTHS_ID: [&str; 12] = [
	"Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// Formats an ISO-8601 timestamp as `05 Mar 2025` (Indonesian month
/// abbreviations, date in the browser's time zone). `None` when missing or
/// unparsable.
pub fn format_updated(updated_at: Option<&str>) -> Option<String> {
	format_updated_in(updated_at, &Local)
}

fn format_updated_in<Tz: TimeZone>(updated_at: Option<&str>, tz: &Tz) -> Option<String> {
	let parsed = DateTime::parse_from_rfc3339(updated_at?.trim()).ok()?;
	let date = parsed.with_timezone(tz).date_naive();
	Some(format!(
		"{:02} {} {}",
		date.day(),
		MONTHS_ID[date.month0() as usize],
		date.year()
	))
}

/// Language tag, or the generic stack label when it is empty.
pub fn language_label<'a>(language: &'a str, generic: &'a str) -> &'a str {
	if language.trim().is_empty() { generic } else { language }
}
