//! Card page: one card per event with a countdown snapshot.
//!
//! Each card follows the markup contract client scripts rely on: a
//! `.countdown-area` carrying the target in `data-datetime`, four
//! `.countdown-num` slots tagged with `data-unit`, and the `terminado` class
//! on both the countdown and the card once the target has passed.
//!
//! While any countdown is still running the page reloads itself once per
//! tick period; once every card has expired or failed it stays put.

use std::fmt::Write;

use axum::{Router, extract::State, response::Html, routing::get};
use chrono::{DateTime, Utc};

use eventos_core::EventRecord;
use eventos_core::constants::TICK_PERIOD;
use eventos_core::countdown::{Clock, CountdownState};
use eventos_core::format::format_event_date_text;

use crate::state::AppState;

const EXPIRED_CLASS: &str = "terminado";

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// GET / - Render every event as a card
async fn index(State(state): State<AppState>) -> Html<String> {
    let now = state.clock.now();
    let store = state.store.read().await;
    Html(render_page(store.list(), now))
}

pub fn render_page(events: &[EventRecord], now: DateTime<Utc>) -> String {
    let mut cards = String::new();
    let mut ticking = false;
    for event in events {
        let state = CountdownState::snapshot(&event.date_time, now);
        ticking |= !state.expired && !state.is_failed();
        render_card(&mut cards, event, &state);
    }

    let refresh = if ticking {
        format!(
            "<meta http-equiv=\"refresh\" content=\"{}\" />\n",
            TICK_PERIOD.as_secs()
        )
    } else {
        String::new()
    };

    format!(
        "<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n<meta charset=\"utf-8\" />\n\
         {refresh}<title>Eventos</title>\n</head>\n<body>\n\
         <div id=\"cards-container\">\n{cards}</div>\n</body>\n</html>\n"
    )
}

fn render_card(out: &mut String, event: &EventRecord, state: &CountdownState) {
    let terminal = if state.expired {
        format!(" {EXPIRED_CLASS}")
    } else {
        String::new()
    };
    let title_attr = match &state.error {
        Some(message) => format!(" title=\"{}\"", escape(message)),
        None => String::new(),
    };

    let _ = write!(
        out,
        "<div class=\"card{terminal}\">\n\
         <img class=\"card-img\" src=\"{img}\" alt=\"{title}\" />\n\
         <div class=\"card-content\">\n\
         <span class=\"category\">{category}</span>\n\
         <h2 class=\"card-title\">{title}</h2>\n\
         <p class=\"card-description\">{description}</p>\n\
         <div class=\"event-date\"><span>{date}</span></div>\n\
         <div class=\"countdown-area{terminal}\" data-datetime=\"{datetime}\"{title_attr}>\n",
        img = escape(&event.img_url),
        title = escape(&event.title),
        category = escape(&event.category),
        description = escape(&event.description),
        date = escape(&format_event_date_text(&event.date_time)),
        datetime = escape(&event.date_time),
    );

    let display = state.display();
    for (unit, value) in display.slots() {
        let _ = writeln!(
            out,
            "<div class=\"countdown-item\"><span class=\"countdown-num\" data-unit=\"{unit}\">{value}</span></div>"
        );
    }

    out.push_str("</div>\n</div>\n</div>\n");
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
