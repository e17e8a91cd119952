//! `rescue-output` — run output writers for the flood-rescue simulator.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend | Files created                               |
//! |-----------|---------|---------------------------------------------|
//! | *(none)*  | CSV     | `events.csv`, `agent_summaries.csv`         |
//! | `sqlite`  | SQLite  | `output.db`                                 |
//!
//! Both implement [`OutputWriter`] and are driven by [`SimOutputObserver`],
//! which implements `rescue_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rescue_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSummaryRow, EventRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
