// State module - per-browser suite aggregation
// One record per browser id, created on first sight and kept for the run

pub mod capture;
pub mod counters;
pub mod events;
pub mod result;

pub use capture::OutputCapture;
pub use counters::SuiteCounters;
pub use events::RunEvent;
pub use result::{Browser, BrowserResult, SpecResult, TestCase};

use std::collections::HashMap;
use tracing::debug;

/// Name/value pair rendered under `<properties>`
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    pub value: String,
}

/// Accumulated results of one browser
#[derive(Debug, Clone)]
pub struct SuiteRecord {
    pub name: String,
    pub package: String,
    pub timestamp: String,
    pub id: u32,
    pub hostname: String,
    pub properties: Vec<Property>,
    pub testcases: Vec<TestCase>,
    pub counters: SuiteCounters,
}

impl SuiteRecord {
    /// Start an empty record for a browser
    pub fn new(browser: &Browser, package: &str, hostname: &str) -> Self {
        Self {
            name: browser.name.clone(),
            package: package.to_string(),
            timestamp: crate::time::suite_timestamp(),
            id: 0,
            hostname: hostname.to_string(),
            properties: vec![Property {
                name: "browser.fullName".to_string(),
                value: browser.full_name.clone(),
            }],
            testcases: Vec::new(),
            counters: SuiteCounters::default(),
        }
    }
}

/// Records keyed by browser id
#[derive(Debug, Clone)]
pub struct SuiteRegistry {
    package: String,
    hostname: String,
    records: HashMap<String, SuiteRecord>,
}

impl SuiteRegistry {
    pub fn with_hostname(package: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            hostname: hostname.into(),
            records: HashMap::new(),
        }
    }

    /// Return the record for a browser, creating it on first sight.
    /// An existing record is returned untouched.
    pub fn ensure(&mut self, browser: &Browser) -> &mut SuiteRecord {
        self.records.entry(browser.id.clone()).or_insert_with(|| {
            debug!("Starting suite for {} ({})", browser.name, browser.id);
            SuiteRecord::new(browser, &self.package, &self.hostname)
        })
    }

    pub fn get(&self, browser_id: &str) -> Option<&SuiteRecord> {
        self.records.get(browser_id)
    }

    pub fn get_mut(&mut self, browser_id: &str) -> Option<&mut SuiteRecord> {
        self.records.get_mut(browser_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
