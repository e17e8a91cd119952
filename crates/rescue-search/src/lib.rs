//! `rescue-search` — what an agent may do, and how it decides.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                       |
//! |---------------|----------------------------------------------------------------|
//! | [`action`]    | `Action`, `Transition`, `IllegalAction`                        |
//! | [`state`]     | `TargetSet`, `SearchNode`, `successors`                        |
//! | [`heuristic`] | `HeuristicEngine` — nearest-target distance + target MST       |
//! | [`frontier`]  | best-first search shared by A*, greedy search and the thief    |
//! | [`greedy`]    | one-step `stupid_greedy`                                       |
//! | [`rta`]       | `RtaPlanner` — bounded lookahead with learned values           |
//! | [`source`]    | `ActionSource` trait for externally chosen actions, `Scripted` |
//! | [`strategy`]  | `Strategy` sum type, `StrategyKind`, `Plan`, `AgentView`       |
//! | [`error`]     | `PlanError`, `PlanResult<T>`                                   |
//!
//! # Design notes
//!
//! Every planner searches the full `(node, equipped, remaining targets)`
//! state, so putting the kit on or taking it off is a branch of the search
//! rather than a decision fixed in advance.  Planners only ever generate
//! legal actions; legality of externally supplied actions is checked by
//! [`Action::apply`], the same function the successor generator uses.
//!
//! Each planning call reports how many search nodes it expanded.  The
//! simulation charges that count back into the agent's world clock.

pub mod action;
pub mod error;
pub mod frontier;
pub mod greedy;
pub mod heuristic;
pub mod rta;
pub mod source;
pub mod state;
pub mod strategy;


pub use action::{Action, IllegalAction, Transition};
pub use error::{PlanError, PlanResult};
pub use frontier::{best_first, Priority};
pub use greedy::stupid_greedy_step;
pub use heuristic::HeuristicEngine;
pub use rta::RtaPlanner;
pub use source::{ActionSource, Scripted};
pub use state::{successors, SearchNode, Successor, TargetSet};
pub use strategy::{AgentView, Plan, Strategy, StrategyKind};
