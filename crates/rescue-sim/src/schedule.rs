//! `TurnQueue` — which agent moves next.
//!
//! Every live agent sits in the queue exactly once, keyed by its world time.
//! The agent with the smallest time goes next; equal times go to the lower
//! `AgentId`.  A `BTreeSet` of `(SimTime, AgentId)` gives both orderings at
//! once in O(log N).

use std::collections::BTreeSet;

use rescue_core::{AgentId, SimTime};

#[derive(Debug, Default, Clone)]
pub struct TurnQueue {
    inner: BTreeSet<(SimTime, AgentId)>,
}

impl TurnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `agent` to act at `at`.
    pub fn push(&mut self, at: SimTime, agent: AgentId) {
        self.inner.insert((at, agent));
    }

    /// Remove and return the next `(time, agent)` pair.
    pub fn pop_next(&mut self) -> Option<(SimTime, AgentId)> {
        self.inner.pop_first()
    }

    /// Time of the next turn, if any agent is queued.
    pub fn next_time(&self) -> Option<SimTime> {
        self.inner.first().map(|&(t, _)| t)
    }

    pub fn contains(&self, agent: AgentId) -> bool {
        self.inner.iter().any(|&(_, a)| a == agent)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
