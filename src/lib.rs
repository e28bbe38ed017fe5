pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod state;
pub mod time;
pub mod utils;

pub use error::{ReporterError, Result};
pub use report::{JunitReporter, Reporter};
