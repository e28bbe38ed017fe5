// Utility helpers

pub mod file;

pub use file::{FileUtils, ReportFs, TokioFs};

/// Name of the machine the reports are produced on
pub fn local_hostname() -> String {
    hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "localhost".to_string())
}
