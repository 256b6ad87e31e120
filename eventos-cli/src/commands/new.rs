use anyhow::Result;
use dialoguer::Input;
use eventos_core::NewEvent;
use eventos_core::format::format_event_date_text;
use eventos_core::instant::parse_utc;
use owo_colors::OwoColorize;

use crate::client::Client;

pub struct NewArgs {
    pub title: Option<String>,
    pub category: Option<String>,
    pub date_time: Option<String>,
    pub description: Option<String>,
    pub img_url: Option<String>,
}

pub async fn run(client: &Client, args: NewArgs) -> Result<()> {
    let interactive = args.title.is_none() || args.category.is_none() || args.date_time.is_none();

    let title = match args.title {
        Some(t) => t,
        None => prompt_required("  Title")?,
    };

    let category = match args.category {
        Some(c) => c,
        None => prompt_required("  Category")?,
    };

    let date_time = match args.date_time {
        Some(d) => d,
        None => prompt_date_time()?,
    };

    let description = match args.description {
        Some(d) => Some(d),
        None if interactive => prompt_optional("  Description (skip)")?,
        None => None,
    };

    let img_url = match args.img_url {
        Some(u) => Some(u),
        None if interactive => prompt_optional("  Image URL (skip)")?,
        None => None,
    };

    let fields = NewEvent {
        title: Some(title),
        category: Some(category),
        description,
        img_url,
        date_time: Some(date_time),
    };

    // Fail locally with the same message the server would give
    fields.validate()?;

    let event = client.create_event(&fields).await?;

    if interactive {
        println!();
    }
    println!(
        "{}",
        format!(
            "  Created #{}: {} ({})",
            event.id,
            event.title,
            format_event_date_text(&event.date_time)
        )
        .green()
    );

    Ok(())
}

fn prompt_required(prompt: &str) -> Result<String> {
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        let input = input.trim().to_string();
        if !input.is_empty() {
            return Ok(input);
        }
        eprintln!("  {}", "This field is required".red());
    }
}

fn prompt_optional(prompt: &str) -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(String::new())
        .show_default(false)
        .interact_text()?;
    Ok(non_empty(input))
}

/// Prompt until the answer is a valid UTC instant.
fn prompt_date_time() -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt("  When? (YYYY-MM-DDTHH:MM:SSZ)")
            .interact_text()?;
        let input = input.trim().to_string();
        match parse_utc(&input) {
            Ok(_) => return Ok(input),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}

fn non_empty(input: String) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
