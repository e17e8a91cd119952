//! `rescue-core` — foundational types for the flood-rescue simulator.
//!
//! This crate is a dependency of every other `rescue-*` crate.  It has no
//! `rescue-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `NodeId`, `EdgeId`                         |
//! | [`time`]        | `SimTime`, `OrderedCost`                              |
//! | [`cost`]        | `CostModel` — Q / U / P and the edge cost function    |
//! | [`config`]      | `SimConfig`, `TargetMode`                             |
//! | [`error`]       | `RescueError`, `RescueResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod cost;
pub mod error;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{SimConfig, TargetMode};
pub use cost::CostModel;
pub use error::{RescueError, RescueResult};
pub use ids::{AgentId, EdgeId, NodeId};
pub use time::{OrderedCost, SimTime};
