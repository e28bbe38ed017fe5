// JUnit reporter - one <testsuite> file per browser

use super::Reporter;
use super::builder::build_suite;
use super::formatter::{ErrorFormatter, StackTraceFormatter};
use super::pending::Completion;
use super::writer::{OutputTarget, ReportWriter};
use super::xml::Element;
use crate::config::ReporterConfig;
use crate::state::{Browser, OutputCapture, SpecResult, SuiteRecord, SuiteRegistry, TestCase};
use crate::utils::{FileUtils, ReportFs, TokioFs};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Collects results per browser during a run and writes one JUnit XML
/// report per browser on exit.
pub struct JunitReporter {
    package: String,
    hostname: String,
    suites: Option<SuiteRegistry>,
    current_browsers: Vec<Browser>,
    capture: OutputCapture,
    formatter: Arc<dyn ErrorFormatter>,
    writer: ReportWriter,
}

impl JunitReporter {
    /// Create a reporter from its collaborators
    pub fn new(
        config: &ReporterConfig,
        base_path: &Path,
        fs: Arc<dyn ReportFs>,
        formatter: Arc<dyn ErrorFormatter>,
    ) -> Self {
        Self {
            package: config.suite.clone(),
            hostname: crate::utils::local_hostname(),
            suites: None,
            current_browsers: Vec::new(),
            capture: OutputCapture::new(),
            formatter,
            writer: ReportWriter::new(OutputTarget::from_config(config, base_path), fs),
        }
    }

    /// Reporter writing through `tokio::fs` and formatting stack traces
    /// relative to `base_path`
    pub fn with_defaults(config: &ReporterConfig, base_path: &Path) -> Self {
        Self::new(
            config,
            base_path,
            Arc::new(TokioFs),
            Arc::new(StackTraceFormatter::new(base_path)),
        )
    }

    /// Override the host name stamped on suites created from now on
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }

    /// Record browser output for the next spec result
    pub fn capture(&mut self, message: impl Into<String>) {
        self.capture.push(message);
    }

    pub fn suite(&self, browser_id: &str) -> Option<&SuiteRecord> {
        self.suites.as_ref()?.get(browser_id)
    }

    /// Render the report of one browser without writing it
    pub fn render(&self, browser: &Browser) -> Option<Element> {
        build_suite(self.suite(&browser.id))
    }

    /// Where the report of a browser is written
    pub fn destination(&self, browser: &Browser) -> PathBuf {
        self.writer.target().destination(&browser.name)
    }

    /// Writes still in flight
    pub fn pending_writes(&self) -> usize {
        self.writer.pending().in_flight()
    }

    /// Run the exit sequence and wait until every report has settled
    pub async fn exit(&mut self) {
        let (tx, rx) = tokio::sync::oneshot::channel();
        self.on_exit(Box::new(move || {
            let _ = tx.send(());
        }));
        let _ = rx.await;
    }

    fn registry(&mut self) -> &mut SuiteRegistry {
        self.suites
            .get_or_insert_with(|| SuiteRegistry::with_hostname(&self.package, &self.hostname))
    }
}

/// `<browser>.<package>.<top-level suite>`, package omitted when empty
pub fn classname(browser_name: &str, package: &str, suite: &str) -> String {
    let browser = FileUtils::classname_browser_name(browser_name);
    if package.is_empty() {
        format!("{}.{}", browser, suite)
    } else {
        format!("{}.{}.{}", browser, package, suite)
    }
}

impl Reporter for JunitReporter {
    fn on_run_start(&mut self, browsers: &[Browser]) {
        let registry = self.registry();
        for browser in browsers {
            registry.ensure(browser);
        }
        self.current_browsers = browsers.to_vec();
    }

    fn on_browser_start(&mut self, browser: &Browser) {
        self.registry().ensure(browser);
    }

    fn on_browser_log(&mut self, _browser: &Browser, message: &str) {
        self.capture(message);
    }

    fn on_spec_result(&mut self, browser: &Browser, result: &SpecResult) {
        let failures = if result.success {
            Vec::new()
        } else {
            result
                .log
                .iter()
                .map(|entry| self.formatter.format(entry))
                .collect()
        };

        let testcase = TestCase {
            name: result.description.clone(),
            classname: classname(&browser.name, &self.package, result.top_level_suite()),
            time: result.seconds(),
            skipped: result.skipped,
            failures,
            system_out: self.capture.drain(),
        };

        self.registry().ensure(browser).testcases.push(testcase);
    }

    fn on_browser_complete(&mut self, browser: &Browser) {
        let Some(result) = browser.last_result.as_ref() else {
            return;
        };
        // Browsers that never started have no record
        let Some(record) = self.suites.as_mut().and_then(|s| s.get_mut(&browser.id)) else {
            return;
        };
        record.counters.merge(result);
    }

    fn on_exit(&mut self, done: Completion) {
        let pending = self.writer.pending().clone();
        pending.arm(done);

        // Hold the count above zero until every write is scheduled
        pending.begin();
        let mut scheduled = 0;
        for browser in &self.current_browsers {
            let document = build_suite(self.suites.as_ref().and_then(|s| s.get(&browser.id)));
            if self.writer.schedule(browser, document) {
                scheduled += 1;
            }
        }
        debug!("Scheduled {} JUnit report(s)", scheduled);
        pending.settle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::formatter::PlainFormatter;
    use crate::state::BrowserResult;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn reporter(suite: &str) -> JunitReporter {
        let config = ReporterConfig {
            suite: suite.to_string(),
            ..Default::default()
        };
        JunitReporter::new(
            &config,
            Path::new("/project"),
            Arc::new(TokioFs),
            Arc::new(PlainFormatter),
        )
        .with_hostname("ci-host")
    }

    fn chrome() -> Browser {
        Browser::new("1", "Chrome 90", "Mozilla/5.0 Chrome/90.0")
    }

    #[test]
    fn test_classname_with_and_without_package() {
        assert_eq!(
            classname("Chrome 90.0", "pkg", "MathTests"),
            "Chrome_90_0.pkg.MathTests"
        );
        assert_eq!(classname("Firefox", "", "MathTests"), "Firefox.MathTests");
    }

    #[test]
    fn test_spec_results_keep_arrival_order() {
        let mut reporter = reporter("pkg");
        reporter.on_run_start(&[chrome()]);

        for name in ["one", "two", "three"] {
            reporter.on_spec_result(&chrome(), &SpecResult::pass(name, &["Suite"], 1));
        }

        let names: Vec<&str> = reporter
            .suite("1")
            .unwrap()
            .testcases
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_captured_output_goes_to_next_spec() {
        let mut reporter = reporter("");
        reporter.on_browser_start(&chrome());

        reporter.on_browser_log(&chrome(), "LOG: 'a'");
        reporter.on_browser_log(&chrome(), "LOG: 'b'");
        reporter.on_spec_result(&chrome(), &SpecResult::pass("first", &["S"], 1));
        reporter.on_spec_result(&chrome(), &SpecResult::pass("second", &["S"], 1));

        let cases = &reporter.suite("1").unwrap().testcases;
        assert_eq!(cases[0].system_out, "LOG: 'a'LOG: 'b'\n");
        assert_eq!(cases[1].system_out, "\n");
    }

    #[test]
    fn test_failure_messages_only_for_unsuccessful_specs() {
        let mut reporter = reporter("");
        reporter.on_browser_start(&chrome());

        let mut passing = SpecResult::pass("passes", &["S"], 1);
        passing.log = vec!["ignored".to_string()];
        reporter.on_spec_result(&chrome(), &passing);
        reporter.on_spec_result(
            &chrome(),
            &SpecResult::fail("fails", &["S"], 1, vec!["a".into(), "b".into()]),
        );

        let cases = &reporter.suite("1").unwrap().testcases;
        assert!(cases[0].failures.is_empty());
        assert_eq!(cases[1].failures, vec!["a\n".to_string(), "b\n".to_string()]);
    }

    #[test]
    fn test_browser_complete_merges_counters() {
        let mut reporter = reporter("");
        reporter.on_run_start(&[chrome()]);

        let batch = BrowserResult {
            total: 3,
            failed: 1,
            disconnected: true,
            net_time: Some(120.0),
            ..Default::default()
        };
        reporter.on_browser_complete(&chrome().with_result(batch.clone()));
        reporter.on_browser_complete(&chrome().with_result(batch));

        let counters = &reporter.suite("1").unwrap().counters;
        assert_eq!(counters.tests, 6);
        assert_eq!(counters.failures, 2);
        assert_eq!(counters.errors, 2);
        assert_eq!(counters.time, 0.24);
    }

    #[test]
    fn test_browser_complete_for_unknown_browser() {
        let mut reporter = reporter("");
        reporter.on_browser_complete(&chrome().with_result(BrowserResult::default()));
        assert!(reporter.suite("1").is_none());
    }

    #[test]
    fn test_repeated_start_keeps_results() {
        let mut reporter = reporter("");
        reporter.on_run_start(&[chrome()]);
        reporter.on_spec_result(&chrome(), &SpecResult::pass("kept", &["S"], 1));
        reporter.on_browser_complete(&chrome().with_result(BrowserResult {
            total: 1,
            ..Default::default()
        }));

        reporter.on_browser_start(&chrome());
        reporter.on_run_start(&[chrome()]);

        let record = reporter.suite("1").unwrap();
        assert_eq!(record.testcases.len(), 1);
        assert_eq!(record.counters.tests, 1);
    }

    #[test]
    fn test_exit_without_writes_completes_synchronously() {
        let mut reporter = reporter("");
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        reporter.on_exit(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(reporter.pending_writes(), 0);
    }

    #[test]
    fn test_render_unknown_browser() {
        let reporter = reporter("");
        assert!(reporter.render(&chrome()).is_none());
        assert_eq!(
            reporter.destination(&chrome()),
            PathBuf::from("/project/TESTS-Chrome_90.xml")
        );
    }
}
