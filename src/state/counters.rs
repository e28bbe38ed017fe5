// Per-suite counters

use crate::state::BrowserResult;

/// Running totals merged from every browser-complete event of one browser
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuiteCounters {
    pub tests: u64,
    pub errors: u64,
    pub failures: u64,
    /// Seconds
    pub time: f64,
}

impl SuiteCounters {
    /// Merge one result batch. A disconnected or errored batch counts as a
    /// single suite-level error no matter how many errors it saw.
    pub fn merge(&mut self, result: &BrowserResult) {
        self.tests += result.total;
        if result.disconnected || result.error {
            self.errors += 1;
        }
        self.failures += result.failed;
        self.time += result.net_time.unwrap_or(0.0) / 1000.0;
    }
}
