// Browser, spec and testcase structures

use serde::{Deserialize, Serialize};

/// A browser session as announced by the test-runner host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Browser {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_result: Option<BrowserResult>,
}

impl Browser {
    /// Create a browser session without a result yet
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        full_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            full_name: full_name.into(),
            last_result: None,
        }
    }

    /// Attach the result batch reported when the browser completes
    pub fn with_result(mut self, result: BrowserResult) -> Self {
        self.last_result = Some(result);
        self
    }
}

/// Summary of one result batch reported by a browser
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserResult {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub disconnected: bool,
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub failed: u64,
    /// Milliseconds spent running specs
    #[serde(default)]
    pub net_time: Option<f64>,
}

/// Outcome of a single spec
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecResult {
    pub description: String,
    /// Milliseconds
    #[serde(default)]
    pub time: Option<f64>,
    #[serde(default)]
    pub skipped: bool,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub log: Vec<String>,
    /// Suite path, outermost first
    #[serde(default)]
    pub suite: Vec<String>,
}

impl SpecResult {
    /// Create a passing spec result
    pub fn pass(description: impl Into<String>, suite: &[&str], time_ms: u64) -> Self {
        Self {
            description: description.into(),
            time: Some(time_ms as f64),
            skipped: false,
            success: true,
            log: Vec::new(),
            suite: suite.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Create a failing spec result with its error log
    pub fn fail(
        description: impl Into<String>,
        suite: &[&str],
        time_ms: u64,
        log: Vec<String>,
    ) -> Self {
        Self {
            description: description.into(),
            time: Some(time_ms as f64),
            skipped: false,
            success: false,
            log,
            suite: suite.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Create a skipped spec result
    pub fn skip(description: impl Into<String>, suite: &[&str]) -> Self {
        Self {
            description: description.into(),
            time: None,
            skipped: true,
            success: true,
            log: Vec::new(),
            suite: suite.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Name of the outermost suite, or "" when the spec has none
    pub fn top_level_suite(&self) -> &str {
        self.suite.first().map(String::as_str).unwrap_or("")
    }

    /// Duration in seconds
    pub fn seconds(&self) -> f64 {
        self.time.unwrap_or(0.0) / 1000.0
    }
}

/// One recorded testcase inside a suite
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    pub name: String,
    pub classname: String,
    pub time: f64,
    pub skipped: bool,
    pub failures: Vec<String>,
    pub system_out: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_result_pass() {
        let result = SpecResult::pass("adds numbers", &["MathTests"], 12);
        assert!(result.success);
        assert!(!result.skipped);
        assert_eq!(result.top_level_suite(), "MathTests");
        assert_eq!(result.seconds(), 0.012);
    }

    #[test]
    fn test_spec_result_without_time() {
        let result = SpecResult::skip("later", &[]);
        assert!(result.skipped);
        assert_eq!(result.seconds(), 0.0);
        assert_eq!(result.top_level_suite(), "");
    }

    #[test]
    fn test_browser_deserialize_camel_case() {
        let json = r#"{
            "id": "42",
            "name": "Chrome 90",
            "fullName": "Mozilla/5.0 Chrome/90.0",
            "lastResult": {"total": 3, "failed": 1, "netTime": 250, "disconnected": false, "error": true}
        }"#;

        let browser: Browser = serde_json::from_str(json).expect("valid browser json");
        assert_eq!(browser.full_name, "Mozilla/5.0 Chrome/90.0");
        let result = browser.last_result.expect("last result");
        assert_eq!(result.total, 3);
        assert_eq!(result.net_time, Some(250.0));
        assert!(result.error);
    }

    #[test]
    fn test_spec_result_defaults() {
        let result: SpecResult =
            serde_json::from_str(r#"{"description": "bare"}"#).expect("valid spec json");
        assert!(!result.success);
        assert!(result.log.is_empty());
        assert!(result.time.is_none());
    }

    #[test]
    fn test_fractional_milliseconds() {
        let result: SpecResult =
            serde_json::from_str(r#"{"description": "fast", "time": 12.5, "success": true}"#)
                .expect("valid spec json");
        assert_eq!(result.time, Some(12.5));
        assert_eq!(result.seconds(), 0.0125);

        let batch: BrowserResult =
            serde_json::from_str(r#"{"total": 1, "netTime": 16.25}"#).expect("valid result json");
        assert_eq!(batch.net_time, Some(16.25));
    }
}
