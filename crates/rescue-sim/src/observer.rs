//! Simulation observer trait for event collection and reporting.

use rescue_core::{AgentId, SimTime};

use crate::{Outcome, SimEvent};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — event printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_event(&mut self, at: SimTime, event: &SimEvent) {
///         println!("{at} {event:?}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before `agent` takes a turn at world time `at`.
    fn on_turn_start(&mut self, _agent: AgentId, _at: SimTime) {}

    /// Called for every event, in order.  `at` is the acting agent's world
    /// time after the event.
    fn on_event(&mut self, _at: SimTime, _event: &SimEvent) {}

    /// Called once after every agent is finished or stuck.
    fn on_sim_end(&mut self, _outcome: &Outcome) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// A [`SimObserver`] that keeps every event in memory.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    pub events: Vec<(SimTime, SimEvent)>,
    pub turns:  u64,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events of one agent, in order.
    pub fn for_agent(&self, agent: AgentId) -> impl Iterator<Item = &(SimTime, SimEvent)> + '_ {
        self.events.iter().filter(move |(_, e)| e.agent() == agent)
    }
}

impl SimObserver for EventLog {
    fn on_turn_start(&mut self, _agent: AgentId, _at: SimTime) {
        self.turns += 1;
    }

    fn on_event(&mut self, at: SimTime, event: &SimEvent) {
        self.events.push((at, event.clone()));
    }
}
