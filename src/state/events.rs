// Host lifecycle events

use crate::state::{Browser, SpecResult};
use serde::{Deserialize, Serialize};

/// One lifecycle notification from the test-runner host, as recorded in an
/// event log (one JSON object per line).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum RunEvent {
    RunStart { browsers: Vec<Browser> },
    BrowserStart { browser: Browser },
    BrowserLog { browser: Browser, message: String },
    SpecResult { browser: Browser, result: SpecResult },
    BrowserComplete { browser: Browser },
    Exit,
}

impl RunEvent {
    /// Event name as it appears in the log
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RunStart { .. } => "runStart",
            Self::BrowserStart { .. } => "browserStart",
            Self::BrowserLog { .. } => "browserLog",
            Self::SpecResult { .. } => "specResult",
            Self::BrowserComplete { .. } => "browserComplete",
            Self::Exit => "exit",
        }
    }
}
