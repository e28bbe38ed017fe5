// Commands module - handles CLI command execution

pub mod config;
pub mod replay;

pub use config::{effective_config, handle_config};
pub use replay::{ReplaySummary, handle_replay, replay_events};
