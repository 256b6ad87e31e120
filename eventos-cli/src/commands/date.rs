use anyhow::Result;
use chrono::Utc;
use eventos_core::format::{format_event_date, format_event_date_text};

pub fn run(date_time: Option<&str>) -> Result<()> {
    let text = match date_time {
        Some(text) => format_event_date_text(text),
        None => format_event_date(Some(Utc::now())),
    };
    println!("{text}");
    Ok(())
}
