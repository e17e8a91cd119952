//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use rescue_core::{AgentId, SimTime};
use rescue_sim::{Outcome, SimEvent, SimObserver};

use crate::row::{AgentSummaryRow, EventRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes every event and the final per-agent totals
/// to any [`OutputWriter`] backend.
///
/// Events are buffered for one turn and written when the next turn starts.
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    pending:    Vec<EventRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, pending: Vec::new(), last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn flush_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let result = self.writer.write_events(&self.pending);
        self.pending.clear();
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            tracing::warn!(error = %e, "output write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_turn_start(&mut self, _agent: AgentId, _at: SimTime) {
        self.flush_pending();
    }

    fn on_event(&mut self, at: SimTime, event: &SimEvent) {
        self.pending.push(EventRow::from_event(at, event));
    }

    fn on_sim_end(&mut self, outcome: &Outcome) {
        self.flush_pending();
        let rows: Vec<AgentSummaryRow> = outcome.agents.iter().map(AgentSummaryRow::from).collect();
        let result = self.writer.write_summaries(&rows);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
