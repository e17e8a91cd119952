//! `rescue-scenario` — loading flood maps and agent rosters.
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`map`]    | ASCII map format → `FloodGraph`, Q/U/P, targets       |
//! | [`roster`] | CSV agent roster → `Vec<AgentSpec>`                   |
//! | [`error`]  | `ScenarioError`, `ScenarioResult<T>`                  |

pub mod error;
pub mod map;
pub mod roster;


pub use error::{ScenarioError, ScenarioResult};
pub use map::{load_map_file, load_map_reader, parse_map, MapData, MAX_VERTICES};
pub use roster::{load_roster_csv, load_roster_reader, resolve_vertex};
