use anyhow::Result;
use eventos_core::EventPatch;
use owo_colors::OwoColorize;

use crate::client::Client;
use crate::render::Render;

pub fn patch_from_args(
    title: Option<String>,
    category: Option<String>,
    date_time: Option<String>,
    description: Option<String>,
    img_url: Option<String>,
) -> EventPatch {
    EventPatch {
        title,
        category,
        description,
        img_url,
        date_time,
    }
}

pub async fn run(client: &Client, id: u64, patch: EventPatch) -> Result<()> {
    if patch.is_empty() {
        anyhow::bail!(
            "Nothing to update.\n\n\
            Pass at least one field, for example:\n  \
            eventos update {id} --title \"New title\""
        );
    }

    patch.validate()?;

    let event = client.update_event(id, &patch).await?;
    println!("{}", format!("  Updated #{}", event.id).green());
    println!("{}", event.render());

    Ok(())
}
