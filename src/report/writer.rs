// Report destinations and asynchronous file writes

use super::pending::PendingWrites;
use super::xml::Element;
use crate::config::ReporterConfig;
use crate::state::Browser;
use crate::utils::{FileUtils, ReportFs};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Where reports for each browser end up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub output_dir: PathBuf,
    pub output_file: Option<String>,
}

impl OutputTarget {
    pub fn new(output_dir: impl Into<PathBuf>, output_file: Option<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            output_file,
        }
    }

    /// Resolve the configured output directory against the base path
    pub fn from_config(config: &ReporterConfig, base_path: &Path) -> Self {
        Self::new(
            FileUtils::resolve_relative_path(base_path, &config.output_dir),
            config.output_file.clone(),
        )
    }

    /// `<dir>/<browser>/<file>` with a fixed file name,
    /// `<dir>/TESTS-<browser>.xml` otherwise. An absolute file name still
    /// lands under the browser directory.
    pub fn destination(&self, browser_name: &str) -> PathBuf {
        let safe_name = FileUtils::safe_browser_name(browser_name);
        match &self.output_file {
            Some(file) => self
                .output_dir
                .join(safe_name)
                .join(FileUtils::nested_path(Path::new(file))),
            None => self.output_dir.join(format!("TESTS-{}.xml", safe_name)),
        }
    }
}

/// Writes rendered suites to disk and tracks writes in flight
pub struct ReportWriter {
    target: OutputTarget,
    fs: Arc<dyn ReportFs>,
    pending: PendingWrites,
}

impl ReportWriter {
    pub fn new(target: OutputTarget, fs: Arc<dyn ReportFs>) -> Self {
        Self {
            target,
            fs,
            pending: PendingWrites::new(),
        }
    }

    pub fn target(&self) -> &OutputTarget {
        &self.target
    }

    pub fn pending(&self) -> &PendingWrites {
        &self.pending
    }

    /// Schedule the write of one browser's report on the current tokio
    /// runtime. Returns false when nothing was scheduled: no document, or
    /// the document could not be serialized.
    pub fn schedule(&self, browser: &Browser, document: Option<Element>) -> bool {
        let Some(document) = document else {
            debug!("No results recorded for {}, skipping report", browser.name);
            return false;
        };

        let path = self.target.destination(&browser.name);
        let contents = match document.to_pretty_string() {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Cannot write JUnit xml\n\t{}", e);
                return false;
            }
        };

        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                warn!(
                    "Cannot write JUnit xml to \"{}\"\n\t{}",
                    path.display(),
                    e
                );
                return false;
            }
        };

        self.pending.begin();
        let fs = Arc::clone(&self.fs);
        let pending = self.pending.clone();
        runtime.spawn(async move {
            match write_report(fs.as_ref(), &path, contents.as_bytes()).await {
                Ok(()) => debug!("JUnit results written to \"{}\".", path.display()),
                Err(e) => warn!("Cannot write JUnit xml\n\t{}", e),
            }
            pending.settle();
        });
        true
    }
}

/// Create the parent directory if needed, then replace the file
pub async fn write_report(fs: &dyn ReportFs, path: &Path, contents: &[u8]) -> io::Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs.ensure_dir(dir).await?;
    }
    fs.write_file(path, contents).await
}
