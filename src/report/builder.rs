// Suite record -> JUnit <testsuite> document

use super::xml::Element;
use crate::state::{SuiteRecord, TestCase};

static TESTSUITE_TAG: &str = "testsuite";
static TESTCASE_TAG: &str = "testcase";
static PROPERTIES_TAG: &str = "properties";
static PROPERTY_TAG: &str = "property";
static FAILURE_TAG: &str = "failure";
static SKIPPED_TAG: &str = "skipped";
static SYSTEM_OUT_TAG: &str = "system-out";
static SYSTEM_ERR_TAG: &str = "system-err";

/// Render a browser's record. `None` means the browser never started and
/// there is nothing to emit.
pub fn build_suite(record: Option<&SuiteRecord>) -> Option<Element> {
    let record = record?;

    // Use the destructuring syntax to ensure that all fields are handled.
    let SuiteRecord {
        name,
        package,
        timestamp,
        id,
        hostname,
        properties,
        testcases,
        counters,
    } = record;

    let mut properties_tag = Element::new(PROPERTIES_TAG);
    for property in properties {
        properties_tag = properties_tag.child(
            Element::new(PROPERTY_TAG)
                .attr("name", &property.name)
                .attr("value", &property.value),
        );
    }

    let mut suite = Element::new(TESTSUITE_TAG)
        .attr("name", name)
        .attr("package", package)
        .attr("timestamp", timestamp)
        .attr("id", id)
        .attr("hostname", hostname)
        .attr("tests", counters.tests)
        .attr("errors", counters.errors)
        .attr("failures", counters.failures)
        .attr("time", format_seconds(counters.time))
        .child(properties_tag);

    for testcase in testcases {
        suite = suite.child(build_testcase(testcase));
    }

    Some(
        suite
            .child(Element::new(SYSTEM_OUT_TAG))
            .child(Element::new(SYSTEM_ERR_TAG)),
    )
}

fn build_testcase(testcase: &TestCase) -> Element {
    let TestCase {
        name,
        classname,
        time,
        skipped,
        failures,
        system_out,
    } = testcase;

    let mut tag = Element::new(TESTCASE_TAG)
        .attr("name", name)
        .attr("time", format_seconds(*time))
        .attr("classname", classname);

    if *skipped {
        tag = tag.child(Element::new(SKIPPED_TAG));
    }

    for message in failures {
        tag = tag.child(Element::new(FAILURE_TAG).attr("type", "").text(message));
    }

    tag.child(Element::new(SYSTEM_OUT_TAG).cdata(system_out))
        .child(Element::new(SYSTEM_ERR_TAG))
}

/// Seconds in the shortest form that reads back to the same value:
/// `0`, `0.012`, `1.5`.
pub fn format_seconds(seconds: f64) -> String {
    seconds.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Browser, BrowserResult, SuiteRegistry};

    fn record_with_cases(cases: Vec<TestCase>) -> SuiteRecord {
        let mut registry = SuiteRegistry::with_hostname("pkg", "ci-host");
        let record = registry.ensure(&Browser::new("1", "Chrome 90", "Chrome/90.0"));
        record.testcases = cases;
        record.clone()
    }

    fn case(name: &str) -> TestCase {
        TestCase {
            name: name.to_string(),
            classname: "Chrome_90.pkg.MathTests".to_string(),
            time: 0.012,
            skipped: false,
            failures: Vec::new(),
            system_out: "\n".to_string(),
        }
    }

    #[test]
    fn test_missing_record_emits_nothing() {
        assert!(build_suite(None).is_none());
    }

    #[test]
    fn test_suite_attributes_in_order() {
        let mut record = record_with_cases(Vec::new());
        record.counters.merge(&BrowserResult {
            total: 2,
            failed: 1,
            error: true,
            net_time: Some(1500.0),
            ..Default::default()
        });

        let suite = build_suite(Some(&record)).unwrap();

        let names: Vec<&str> = suite.attributes.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "name", "package", "timestamp", "id", "hostname", "tests", "errors", "failures",
                "time"
            ]
        );
        assert_eq!(suite.attribute("tests"), Some("2"));
        assert_eq!(suite.attribute("errors"), Some("1"));
        assert_eq!(suite.attribute("failures"), Some("1"));
        assert_eq!(suite.attribute("time"), Some("1.5"));
        assert_eq!(suite.attribute("id"), Some("0"));
    }

    #[test]
    fn test_children_order() {
        let record = record_with_cases(vec![case("first"), case("second")]);

        let suite = build_suite(Some(&record)).unwrap();

        let names: Vec<&str> = suite.elements().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["properties", "testcase", "testcase", "system-out", "system-err"]
        );
        let cases: Vec<&str> = suite
            .elements_named("testcase")
            .filter_map(|e| e.attribute("name"))
            .collect();
        assert_eq!(cases, vec!["first", "second"]);
    }

    #[test]
    fn test_skipped_and_failed_testcase() {
        let mut failing = case("breaks");
        failing.failures = vec!["Expected 1 to be 2\n".to_string(), "boom\n".to_string()];
        let mut skipped = case("later");
        skipped.skipped = true;
        let record = record_with_cases(vec![failing, skipped]);

        let suite = build_suite(Some(&record)).unwrap();
        let cases: Vec<&Element> = suite.elements_named("testcase").collect();

        let failures: Vec<&Element> = cases[0].elements_named("failure").collect();
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].attribute("type"), Some(""));
        assert_eq!(cases[0].elements_named("skipped").count(), 0);
        assert_eq!(cases[1].elements_named("skipped").count(), 1);

        let inner: Vec<&str> = cases[1].elements().map(|e| e.name.as_str()).collect();
        assert_eq!(inner, vec!["skipped", "system-out", "system-err"]);
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(0.0), "0");
        assert_eq!(format_seconds(12.0 / 1000.0), "0.012");
        assert_eq!(format_seconds(1.5), "1.5");
    }
}
