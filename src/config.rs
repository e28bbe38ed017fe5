// Configuration file handling

use crate::error::{ReporterError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the working and home directories
pub const CONFIG_FILE_NAME: &str = ".browser-junit.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Directory relative output paths are resolved against
    #[serde(default, alias = "basePath", skip_serializing_if = "Option::is_none")]
    pub base_path: Option<PathBuf>,

    #[serde(default, alias = "junitReporter")]
    pub junit_reporter: ReporterConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReporterConfig {
    /// Package name written to every suite and classname
    #[serde(default)]
    pub suite: String,

    /// Directory the reports are written to
    #[serde(default = "default_output_dir", alias = "outputDir")]
    pub output_dir: PathBuf,

    /// Fixed report file name, one subdirectory per browser
    #[serde(default, alias = "outputFile", skip_serializing_if = "Option::is_none")]
    pub output_file: Option<String>,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            suite: String::new(),
            output_dir: default_output_dir(),
            output_file: None,
        }
    }
}

pub fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Config {
    /// Load configuration from default locations
    pub fn load() -> Result<Option<Self>> {
        // Check locations in order:
        // 1. .browser-junit.toml (current directory)
        // 2. ~/.browser-junit.toml (home directory)
        let mut paths = Vec::new();
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(CONFIG_FILE_NAME));
        }
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(CONFIG_FILE_NAME));
        }

        for path in &paths {
            if path.exists() {
                return Self::load_from_file(path).map(Some);
            }
        }

        Ok(None)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ReporterError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Render configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Configured base path, or the working directory
    pub fn resolved_base_path(&self) -> PathBuf {
        self.base_path
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
base_path = "/home/ci/project"

[junit_reporter]
suite = "pkg"
output_dir = "reports"
output_file = "results.xml"
"#;

        let config = Config::parse(toml).expect("Failed to parse config");
        assert_eq!(config.base_path, Some(PathBuf::from("/home/ci/project")));
        assert_eq!(config.junit_reporter.suite, "pkg");
        assert_eq!(config.junit_reporter.output_dir, PathBuf::from("reports"));
        assert_eq!(
            config.junit_reporter.output_file,
            Some("results.xml".to_string())
        );
    }

    #[test]
    fn test_parse_camel_case_aliases() {
        let toml = r#"
[junitReporter]
outputDir = "out"
outputFile = "junit.xml"
"#;

        let config = Config::parse(toml).expect("Failed to parse config");
        assert_eq!(config.junit_reporter.output_dir, PathBuf::from("out"));
        assert_eq!(
            config.junit_reporter.output_file,
            Some("junit.xml".to_string())
        );
        assert_eq!(config.junit_reporter.suite, "");
    }

    #[test]
    fn test_parse_invalid_config() {
        let result = Config::parse("[junit_reporter]\nsuite = 3\n");
        assert!(matches!(result, Err(ReporterError::ConfigParse(_))));
    }

    #[test]
    fn test_to_toml_sections() {
        let config = Config {
            base_path: Some(PathBuf::from("/srv")),
            junit_reporter: ReporterConfig {
                suite: "pkg".to_string(),
                ..Default::default()
            },
        };

        let rendered = config.to_toml().expect("render");
        assert!(rendered.contains("base_path = \"/srv\""));
        assert!(rendered.contains("[junit_reporter]"));
        assert!(!rendered.contains("output_file"));
    }
}
