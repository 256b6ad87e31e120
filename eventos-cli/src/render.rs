//! TUI rendering traits for eventos types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to eventos-core types using owo_colors.

use eventos_core::EventRecord;
use eventos_core::countdown::CountdownState;
use eventos_core::format::format_event_date_text;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventRecord {
    fn render(&self) -> String {
        let mut lines = vec![format!(
            "{} {} {}",
            format!("#{}", self.id).dimmed(),
            self.title.bold(),
            format!("[{}]", self.category).cyan()
        )];

        lines.push(format!("   {}", format_event_date_text(&self.date_time)));

        if !self.description.is_empty() {
            lines.push(format!("   {}", self.description.dimmed()));
        }
        if !self.img_url.is_empty() {
            lines.push(format!("   {}", self.img_url.dimmed()));
        }

        lines.join("\n")
    }
}

impl Render for CountdownState {
    fn render(&self) -> String {
        let d = self.display();
        let units = format!("{}d {}h {}m {}s", d.days, d.hours, d.minutes, d.seconds);

        if let Some(error) = &self.error {
            format!("{} {}", units.dimmed(), error.red())
        } else if self.expired {
            format!("{} {}", units.red(), "(terminado)".red())
        } else {
            units.green().bold().to_string()
        }
    }
}

/// An event with its countdown underneath
pub fn render_card(event: &EventRecord, countdown: &CountdownState) -> String {
    format!("{}\n   {}", event.render(), countdown.render())
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record() -> EventRecord {
        EventRecord {
            id: 3,
            title: "Concierto".to_string(),
            category: "music".to_string(),
            description: String::new(),
            img_url: String::new(),
            date_time: "2025-10-16T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_event_lines() {
        let text = record().render();
        assert!(text.contains("#3"));
        assert!(text.contains("Concierto"));
        assert!(text.contains("Jueves, 16/10/25, - 12:00"));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_running_countdown() {
        let now = Utc.with_ymd_and_hms(2025, 10, 14, 8, 57, 55).unwrap();
        let state = CountdownState::snapshot("2025-10-16T10:00:00Z", now);
        assert!(state.render().contains("2d 01h 02m 05s"));
    }

    #[test]
    fn test_expired_and_failed_countdowns() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let expired = CountdownState::snapshot("2025-10-16T10:00:00Z", now);
        assert!(expired.render().contains("terminado"));

        let failed = CountdownState::snapshot("nope", now);
        let text = failed.render();
        assert!(text.contains("--d --h --m --s"));
        assert!(text.contains("nope"));
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("event", 1), "event");
        assert_eq!(pluralize("event", 0), "events");
    }
}
