// Report module - lifecycle hooks and the JUnit XML reporter

pub mod builder;
pub mod formatter;
pub mod junit;
pub mod pending;
pub mod writer;
pub mod xml;

use crate::state::{Browser, RunEvent, SpecResult};
pub use builder::build_suite;
pub use formatter::{ErrorFormatter, PlainFormatter, StackTraceFormatter};
pub use junit::JunitReporter;
pub use pending::{Completion, PendingWrites};
pub use writer::{OutputTarget, ReportWriter};
pub use xml::Element;

/// Lifecycle notifications from the test-runner host
pub trait Reporter: Send {
    /// A run starts with the given browsers
    fn on_run_start(&mut self, browsers: &[Browser]);

    /// A browser registered
    fn on_browser_start(&mut self, browser: &Browser);

    /// A browser printed something
    fn on_browser_log(&mut self, _browser: &Browser, _message: &str) {}

    /// A spec finished: passed, failed or skipped
    fn on_spec_result(&mut self, browser: &Browser, result: &SpecResult);

    /// A browser finished a batch; its `last_result` holds the totals
    fn on_browser_complete(&mut self, browser: &Browser);

    /// The run is over. `done` runs once all output is flushed.
    fn on_exit(&mut self, done: Completion);
}

/// Route one recorded event to a reporter. Exit events are left to the
/// caller, which owns the completion signal; returns false for them.
pub fn dispatch(reporter: &mut dyn Reporter, event: &RunEvent) -> bool {
    match event {
        RunEvent::RunStart { browsers } => reporter.on_run_start(browsers),
        RunEvent::BrowserStart { browser } => reporter.on_browser_start(browser),
        RunEvent::BrowserLog { browser, message } => reporter.on_browser_log(browser, message),
        RunEvent::SpecResult { browser, result } => reporter.on_spec_result(browser, result),
        RunEvent::BrowserComplete { browser } => reporter.on_browser_complete(browser),
        RunEvent::Exit => return false,
    }
    true
}
