//! `rescue-graph` — the flood-region graph and the search primitives shared by
//! every planner.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`network`] | `FloodGraph` (CSR arcs + flood flags), `FloodGraphBuilder`   |
//! | [`paths`]   | `shortest_paths` (Dijkstra over equip layers), `Capability`, `Route` |
//! | [`mst`]     | `mst_weight` — deterministic Kruskal over a complete graph   |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public value types.     |

pub mod error;
pub mod mst;
pub mod network;
pub mod paths;


pub use error::{GraphError, GraphResult};
pub use mst::mst_weight;
pub use network::{FloodGraph, FloodGraphBuilder};
pub use paths::{shortest_paths, Capability, Leg, Route, ShortestPaths};
