use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use crate::client::Client;

pub async fn run(client: &Client, id: u64, yes: bool) -> Result<()> {
    if !yes {
        let event = client.get_event(id).await?;
        let confirmed = Confirm::new()
            .with_prompt(format!("  Delete #{} \"{}\"?", event.id, event.title))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "  Cancelled".dimmed());
            return Ok(());
        }
    }

    let response = client.delete_event(id).await?;
    println!(
        "{}",
        format!("  {}: {}", response.mensaje, response.evento.title).green()
    );

    Ok(())
}
