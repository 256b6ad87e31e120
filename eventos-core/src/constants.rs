use std::time::Duration;

use chrono_tz::Tz;

/// Zone used for all calendar arithmetic and date display.
pub const REFERENCE_TZ: Tz = chrono_tz::Europe::Madrid;

/// How often a running countdown is re-evaluated.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Shown in every countdown slot when the target is missing or invalid.
pub const PLACEHOLDER: &str = "--";

/// Key of the record array in the persisted JSON document.
pub const CARDS_KEY: &str = "cards";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
