//! `rescue-sim` — turn loop orchestrator for the flood-rescue simulator.
//!
//! # Turn loop
//!
//! ```text
//! start:  agents standing on a target claim it (ascending AgentId);
//!         every agent is queued at world time 0.
//!
//! loop:   pop the agent with the smallest (world_time, AgentId)
//!   ①  Terminal checks — cooperative pool empty → Finished;
//!                        turn cap reached        → Stuck(TurnLimit).
//!   ②  Plan            — if no committed actions remain (or the thief sees
//!                        a stolen target): refresh the agent's view from the
//!                        pool, call Strategy::plan, charge E × T.
//!   ③  Apply           — pop one action, check legality, pay its cost,
//!                        claim the target on arrival.
//!   ④  Requeue         — at the agent's new world time.
//! ```
//!
//! Turns are strictly sequential, so the target pool needs no locking: a
//! claim made in one turn is visible to every later turn.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rescue_search::StrategyKind;
//! use rescue_sim::{AgentSpec, NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(graph, config)
//!     .targets([c])
//!     .agent(AgentSpec::new(StrategyKind::AStar { limit: 10_000 }, a))
//!     .build()?;
//! let outcome = sim.run(&mut NoopObserver)?;
//! ```

pub mod agent;
pub mod builder;
pub mod error;
pub mod event;
pub mod observer;
pub mod outcome;
pub mod pool;
pub mod schedule;
pub mod sim;

#[cfg(test)]
mod tests;

pub use agent::{AgentSpec, AgentState, AgentStatus, StuckReason};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use event::SimEvent;
pub use observer::{EventLog, NoopObserver, SimObserver};
pub use outcome::{AgentOutcome, Outcome};
pub use pool::TargetPool;
pub use schedule::TurnQueue;
pub use sim::Sim;
