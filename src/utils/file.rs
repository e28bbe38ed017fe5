// Filesystem access and path helpers for report output

use async_trait::async_trait;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Filesystem operations the report writer depends on
#[async_trait]
pub trait ReportFs: Send + Sync {
    /// Create a directory and any missing parents
    async fn ensure_dir(&self, path: &Path) -> io::Result<()>;

    /// Write a whole file, replacing any previous content
    async fn write_file(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// `ReportFs` backed by `tokio::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFs;

#[async_trait]
impl ReportFs for TokioFs {
    async fn ensure_dir(&self, path: &Path) -> io::Result<()> {
        tokio::fs::create_dir_all(path).await
    }

    async fn write_file(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        tokio::fs::write(path, contents).await
    }
}

/// Path and naming helpers
pub struct FileUtils;

impl FileUtils {
    /// Browser name as used in file and directory names: spaces become
    /// underscores, everything else is kept.
    pub fn safe_browser_name(name: &str) -> String {
        name.replace(' ', "_")
    }

    /// Browser name as used in a testcase classname. Dots would read as
    /// package separators, so they are replaced as well.
    pub fn classname_browser_name(name: &str) -> String {
        name.replace([' ', '.'], "_")
    }

    /// Resolve `path` against `base` unless it is already absolute.
    /// `.` components are dropped.
    pub fn resolve_relative_path(base: &Path, path: &Path) -> PathBuf {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            base.join(path)
        };
        Self::strip_cur_dir(&joined)
    }

    /// Keep only the relative part of a path: root, drive prefix and `.`
    /// components are dropped so the result always nests under a directory.
    pub fn nested_path(path: &Path) -> PathBuf {
        path.components()
            .filter(|c| {
                !matches!(
                    c,
                    Component::RootDir | Component::Prefix(_) | Component::CurDir
                )
            })
            .collect()
    }

    fn strip_cur_dir(path: &Path) -> PathBuf {
        let stripped: PathBuf = path
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect();
        if stripped.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            stripped
        }
    }
}
