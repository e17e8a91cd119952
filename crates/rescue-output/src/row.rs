//! Plain data row types written by output backends.

use rescue_core::SimTime;
use rescue_sim::{AgentOutcome, SimEvent};

/// One [`SimEvent`] flattened into columns.
///
/// Node ids are raw `NodeId` values.  Columns that do not apply to an event
/// kind are `None` (an empty CSV cell, SQL `NULL`).
#[derive(Debug, Clone, PartialEq)]
pub struct EventRow {
    /// World time of the acting agent after the event.
    pub at:         f64,
    pub agent:      u32,
    pub kind:       &'static str,
    /// `Moved`: origin.  Otherwise `None`.
    pub from:       Option<u32>,
    /// `Moved`: destination.  `TargetReached`: the target.
    pub to:         Option<u32>,
    /// `Moved`: step cost.  `AgentFinished`: total path cost.
    pub cost:       Option<f64>,
    /// `PlanCommitted` and `AgentStuck` only.
    pub expansions: Option<u64>,
    /// Free text: stuck reason, rejection reason, committed action count,
    /// people at a reached target.
    pub detail:     String,
}

impl EventRow {
    pub fn from_event(at: SimTime, event: &SimEvent) -> Self {
        let mut row = EventRow {
            at:         at.0,
            agent:      event.agent().0,
            kind:       event.kind(),
            from:       None,
            to:         None,
            cost:       None,
            expansions: None,
            detail:     String::new(),
        };
        match event {
            SimEvent::Moved { from, to, cost, .. } => {
                row.from = Some(from.0);
                row.to = Some(to.0);
                row.cost = Some(*cost);
            }
            SimEvent::TargetReached { target, people, .. } => {
                row.to = Some(target.0);
                row.detail = format!("people={people}");
            }
            SimEvent::PlanCommitted { expansions, actions, .. } => {
                row.expansions = Some(*expansions);
                row.detail = format!("actions={actions}");
            }
            SimEvent::AgentFinished { total_cost, .. } => row.cost = Some(*total_cost),
            SimEvent::AgentStuck { reason, expansions, .. } => {
                row.expansions = Some(*expansions);
                row.detail = reason.to_string();
            }
            SimEvent::ActionRejected { reason, .. } => row.detail = reason.to_string(),
            SimEvent::Equipped { .. } | SimEvent::Unequipped { .. } => {}
        }
        row
    }
}

/// Final totals of one agent.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentSummaryRow {
    pub agent:           u32,
    pub strategy:        String,
    pub status:          String,
    pub path_cost:       f64,
    pub world_time:      f64,
    pub expansions:      u64,
    pub turns:           u64,
    pub targets_reached: u32,
    pub people_saved:    u32,
}

impl From<&AgentOutcome> for AgentSummaryRow {
    fn from(a: &AgentOutcome) -> Self {
        AgentSummaryRow {
            agent:           a.agent.0,
            strategy:        a.strategy.to_string(),
            status:          a.status.to_string(),
            path_cost:       a.path_cost,
            world_time:      a.world_time.0,
            expansions:      a.expansions,
            turns:           a.turns,
            targets_reached: a.targets_reached.len() as u32,
            people_saved:    a.people_saved,
        }
    }
}
