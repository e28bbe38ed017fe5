// Failure message formatting

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::path::PathBuf;

/// Served-file URL inside a stack trace:
/// `http://host:port/base/src/app.js?sha:12:5` or `/absolute/tmp/x.js`
static SERVED_FILE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(SERVED_FILE_PATTERN).expect("invalid served file regex")
});

const SERVED_FILE_PATTERN: &str =
    r"(?:https?://[^/\s]+)?/(base/|absolute)((?:[A-Za-z]:)?[^?\s:()]*)(?:\?\w*)?(?::(\d+))?(?::(\d+))?";

/// Turns one entry of a failed spec's log into the text of a `<failure>`
pub trait ErrorFormatter: Send + Sync {
    fn format(&self, entry: &str) -> String;
}

/// Default formatter: maps served-file URLs back to paths on disk, drops
/// cache-busting query strings and terminates the message with a newline.
#[derive(Debug, Clone)]
pub struct StackTraceFormatter {
    base_path: PathBuf,
}

impl StackTraceFormatter {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn rewrite_location(&self, caps: &Captures<'_>) -> String {
        let path = &caps[2];
        let mut location = if &caps[1] == "base/" {
            format!("{}/{}", self.base_path.display(), path)
        } else {
            path.to_string()
        };

        if let Some(line) = caps.get(3) {
            location.push(':');
            location.push_str(line.as_str());
            if let Some(column) = caps.get(4) {
                location.push(':');
                location.push_str(column.as_str());
            }
        }
        location
    }
}

impl ErrorFormatter for StackTraceFormatter {
    fn format(&self, entry: &str) -> String {
        let mut message = SERVED_FILE_REGEX
            .replace_all(entry, |caps: &Captures<'_>| self.rewrite_location(caps))
            .into_owned();
        message.push('\n');
        message
    }
}

/// Formatter that keeps messages as reported
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

impl ErrorFormatter for PlainFormatter {
    fn format(&self, entry: &str) -> String {
        format!("{}\n", entry)
    }
}
