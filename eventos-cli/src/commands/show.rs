use anyhow::Result;
use chrono::Utc;
use eventos_core::countdown::CountdownState;

use crate::client::Client;
use crate::render::render_card;

pub async fn run(client: &Client, id: u64) -> Result<()> {
    let event = client.get_event(id).await?;
    let state = CountdownState::snapshot(&event.date_time, Utc::now());
    println!("{}", render_card(&event, &state));
    Ok(())
}
