// Replay command - feed a recorded event log through the JUnit reporter

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::cli::ReplayArgs;
use crate::config::Config;
use crate::error::ReporterError;
use crate::report::{self, JunitReporter};
use crate::state::RunEvent;

/// What a replay went through
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub events: usize,
    /// The log ended with an explicit exit event
    pub explicit_exit: bool,
}

/// Feed every event of a newline-delimited JSON log into the reporter, then
/// run the exit sequence and wait for the reports to be written. Reading
/// stops at the first exit event.
pub async fn replay_events<R>(
    reader: R,
    reporter: &mut JunitReporter,
) -> crate::error::Result<ReplaySummary>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut summary = ReplaySummary::default();
    let mut line_number = 0;

    while let Some(line) = lines.next_line().await? {
        line_number += 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let event: RunEvent =
            serde_json::from_str(line).map_err(|source| ReporterError::Event {
                line: line_number,
                source,
            })?;
        summary.events += 1;
        debug!("Replaying {} (line {})", event.kind(), line_number);

        if !report::dispatch(reporter, &event) {
            summary.explicit_exit = true;
            break;
        }
    }

    if !summary.explicit_exit {
        debug!("Event log ended without exit");
    }
    reporter.exit().await;

    Ok(summary)
}

pub async fn handle_replay(args: &ReplayArgs, config: &Config) -> Result<ReplaySummary> {
    let base_path = config.resolved_base_path();
    let mut reporter = JunitReporter::with_defaults(&config.junit_reporter, &base_path);

    let summary = if args.reads_stdin() {
        replay_events(BufReader::new(tokio::io::stdin()), &mut reporter).await
    } else {
        let file = tokio::fs::File::open(&args.events)
            .await
            .with_context(|| format!("Failed to open event log: {}", args.events.display()))?;
        replay_events(BufReader::new(file), &mut reporter).await
    }
    .with_context(|| format!("Failed to replay events from {}", args.events.display()))?;

    info!(
        "Replayed {} events{}",
        summary.events,
        if summary.explicit_exit {
            ""
        } else {
            " (no exit event)"
        }
    );
    Ok(summary)
}
