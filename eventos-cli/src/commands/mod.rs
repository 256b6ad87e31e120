pub mod config;
pub mod countdown;
pub mod date;
pub mod delete;
pub mod list;
pub mod new;
pub mod show;
pub mod update;
pub mod watch;

pub use crate::utils::tui::create_spinner;
