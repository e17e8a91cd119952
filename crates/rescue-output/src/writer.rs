//! The `OutputWriter` trait implemented by all backend writers.

use crate::{AgentSummaryRow, EventRow, OutputResult};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors are stored by the observer and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of events, in order.
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()>;

    /// Write the per-agent totals at the end of a run.
    fn write_summaries(&mut self, rows: &[AgentSummaryRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.  Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
