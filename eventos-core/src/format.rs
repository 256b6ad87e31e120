//! Card date labels, e.g. `Jueves, 16/10/25, - 12:00`.
//!
//! The zone is pinned to [`REFERENCE_TZ`], so the same instant renders the
//! same on every host regardless of its locale or `TZ` setting.

use chrono::{DateTime, Datelike, Locale, Timelike, Utc};

use crate::constants::REFERENCE_TZ;
use crate::instant;

/// Weekday names indexed by days since Sunday.
const WEEKDAYS: [&str; 7] = [
    "Domingo",
    "Lunes",
    "Martes",
    "Miércoles",
    "Jueves",
    "Viernes",
    "Sábado",
];

/// Shown in place of a date label when the stored text is not a valid instant.
pub const INVALID_DATE: &str = "Fecha inválida";

/// Render `instant` (or now) as `<Weekday>, DD/MM/YY, - HH:MM`.
pub fn format_event_date(instant: Option<DateTime<Utc>>) -> String {
    let instant = instant.unwrap_or_else(Utc::now);
    format_with_table(instant).unwrap_or_else(|| format_localized(instant))
}

/// Parse a stored `dateTime` and render it.
pub fn format_event_date_text(text: &str) -> String {
    match instant::parse_utc(text) {
        Ok(instant) => format_event_date(Some(instant)),
        Err(_) => INVALID_DATE.to_string(),
    }
}

fn format_with_table(instant: DateTime<Utc>) -> Option<String> {
    let local = instant.with_timezone(&REFERENCE_TZ);
    let weekday = WEEKDAYS.get(local.weekday().num_days_from_sunday() as usize)?;

    Some(format!(
        "{}, {:02}/{:02}/{:02}, - {:02}:{:02}",
        weekday,
        local.day(),
        local.month(),
        local.year().rem_euclid(100),
        local.hour(),
        local.minute()
    ))
}

/// Locale-aware rendering with the same zone and fields.
pub fn format_localized(instant: DateTime<Utc>) -> String {
    let local = instant.with_timezone(&REFERENCE_TZ);
    let text = local
        .format_localized("%A, %d/%m/%y, - %H:%M", Locale::es_ES)
        .to_string();
    capitalize(&text)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
