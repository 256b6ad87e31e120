use std::sync::Arc;

use anyhow::Result;
use eventos_core::countdown::{Clock, CountdownSlot, CountdownState, SystemClock};
use indicatif::MultiProgress;
use owo_colors::OwoColorize;

use crate::client::Client;
use crate::render::Render;
use crate::utils::tui::countdown_line;

/// A labelled countdown target
pub struct WatchTarget {
    pub label: String,
    pub date_time: String,
}

pub async fn run(client: &Client, id: Option<u64>) -> Result<()> {
    let events = match id {
        Some(id) => vec![client.get_event(id).await?],
        None => client.list_events().await?,
    };

    if events.is_empty() {
        println!("{}", "No events to watch".dimmed());
        return Ok(());
    }

    let targets = events
        .into_iter()
        .map(|event| WatchTarget {
            label: format!("{} {}", format!("#{}", event.id).dimmed(), event.title.bold()),
            date_time: event.date_time,
        })
        .collect();

    watch_targets(targets).await
}

/// Tick one line per target until they have all expired or Ctrl-C is hit.
pub async fn watch_targets(targets: Vec<WatchTarget>) -> Result<()> {
    let multi = MultiProgress::new();
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let mut slots = Vec::with_capacity(targets.len());

    for target in targets {
        let line = countdown_line(&multi, target.label);
        let tick_line = line.clone();

        let mut slot = CountdownSlot::new();
        slot.start(
            Some(&target.date_time),
            clock.clone(),
            move |state: &CountdownState| {
                if state.expired {
                    tick_line.finish_with_message(state.render());
                } else {
                    tick_line.set_message(state.render());
                }
            },
            |err| line.abandon_with_message(CountdownState::failed(err).render()),
        );
        slots.push(slot);
    }

    {
        let all_done = async {
            for slot in slots.iter_mut() {
                slot.finished().await;
            }
        };

        tokio::select! {
            _ = all_done => {}
            result = tokio::signal::ctrl_c() => {
                result?;
                tracing::debug!("interrupted, stopping countdowns");
            }
        }
    }

    for slot in &mut slots {
        slot.stop();
    }

    Ok(())
}
