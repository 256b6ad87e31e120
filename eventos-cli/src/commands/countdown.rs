use anyhow::Result;
use eventos_core::format::format_event_date_text;
use eventos_core::instant::parse_utc;

use super::watch::{WatchTarget, watch_targets};

pub async fn run(date_time: &str) -> Result<()> {
    // Reject bad input up front instead of showing a dead placeholder line
    parse_utc(date_time)?;

    watch_targets(vec![WatchTarget {
        label: format_event_date_text(date_time),
        date_time: date_time.to_string(),
    }])
    .await
}
