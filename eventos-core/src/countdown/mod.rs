//! Per-card countdowns.
//!
//! [`Countdown`] is the synchronous core: feed it instants and it reports the
//! time left, split into civil days and clock units in the reference zone.
//! [`start_countdown`] drives one on the tokio runtime, once per second, and
//! returns a [`CountdownHandle`] that cancels the ticker when it goes away.

mod clock;
mod engine;
mod remaining;
mod ticker;

pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{Countdown, CountdownState};
pub use remaining::{CountdownDisplay, Remaining};
pub use ticker::{CountdownHandle, CountdownSlot, start_countdown};
