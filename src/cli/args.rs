// CLI argument definitions using Clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// JUnit XML reports for browser test runs
#[derive(Parser, Debug)]
#[command(name = "browser-junit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Write per-browser JUnit XML reports from test-runner events", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose debug output
    #[arg(short = 'v', long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Configuration file (default: .browser-junit.toml in the working or home directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a recorded event log and write the reports
    Replay(ReplayArgs),

    /// Print the effective configuration
    Config(ReporterArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    /// Newline-delimited JSON event log, or "-" for stdin
    #[arg(required = true)]
    pub events: PathBuf,

    #[command(flatten)]
    pub reporter: ReporterArgs,
}

/// Overrides for the reporter configuration
#[derive(Args, Debug, Clone, Default)]
pub struct ReporterArgs {
    /// Package name written to suites and classnames
    #[arg(long)]
    pub suite: Option<String>,

    /// Directory reports are written to
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Fixed report file name, placed in one directory per browser
    #[arg(long)]
    pub output_file: Option<String>,

    /// Directory relative paths are resolved against
    #[arg(long)]
    pub base_path: Option<PathBuf>,
}

impl ReplayArgs {
    /// Whether events are read from stdin
    pub fn reads_stdin(&self) -> bool {
        self.events.as_os_str() == "-"
    }
}
