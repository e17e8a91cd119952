//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `events.csv`
//! - `agent_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSummaryRow, EventRow, OutputResult};

pub const EVENT_HEADERS: [&str; 8] =
    ["at", "agent", "kind", "from", "to", "cost", "expansions", "detail"];

pub const SUMMARY_HEADERS: [&str; 9] = [
    "agent",
    "strategy",
    "status",
    "path_cost",
    "world_time",
    "expansions",
    "turns",
    "targets_reached",
    "people_saved",
];

/// Writes run output to two CSV files.
pub struct CsvWriter {
    events:    Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(EVENT_HEADERS)?;

        let mut summaries = Writer::from_path(dir.join("agent_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADERS)?;

        Ok(Self { events, summaries, finished: false })
    }
}

fn opt<T: ToString>(v: Option<T>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record(&[
                row.at.to_string(),
                row.agent.to_string(),
                row.kind.to_string(),
                opt(row.from),
                opt(row.to),
                opt(row.cost),
                opt(row.expansions),
                row.detail.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_summaries(&mut self, rows: &[AgentSummaryRow]) -> OutputResult<()> {
        for row in rows {
            self.summaries.write_record(&[
                row.agent.to_string(),
                row.strategy.clone(),
                row.status.clone(),
                row.path_cost.to_string(),
                row.world_time.to_string(),
                row.expansions.to_string(),
                row.turns.to_string(),
                row.targets_reached.to_string(),
                row.people_saved.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
