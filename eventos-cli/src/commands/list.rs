use anyhow::Result;
use chrono::Utc;
use eventos_core::countdown::CountdownState;
use owo_colors::OwoColorize;

use super::create_spinner;
use crate::client::Client;
use crate::render::{pluralize, render_card};

pub async fn run(client: &Client) -> Result<()> {
    let spinner = create_spinner("Loading events".to_string());
    let result = client.list_events().await;
    spinner.finish_and_clear();

    let events = result?;
    if events.is_empty() {
        println!("{}", "No events yet. Create one with: eventos new".dimmed());
        return Ok(());
    }

    let now = Utc::now();
    for (i, event) in events.iter().enumerate() {
        let state = CountdownState::snapshot(&event.date_time, now);
        println!("{}", render_card(event, &state));

        if i < events.len() - 1 {
            println!();
        }
    }

    println!();
    println!(
        "{}",
        format!("{} {}", events.len(), pluralize("event", events.len())).dimmed()
    );

    Ok(())
}
