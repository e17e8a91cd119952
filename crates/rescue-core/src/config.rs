//! Top-level simulation configuration.
//!
//! Typically built by the application (or deserialised from JSON with the
//! `serde` feature) and handed to the simulation builder together with the
//! graph and the agent roster.

use crate::{CostModel, RescueError, RescueResult};

/// How the shared target pool is viewed by the agents.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TargetMode {
    /// One team, one pool.  Once the pool is empty every agent is done, even
    /// in the middle of a committed plan.
    #[default]
    Cooperative,
    /// Every agent plans against its own snapshot of the pool.  Claims are
    /// still global, so stale plans simply earn nothing on arrival.
    Competitive,
}

/// Global simulation constants.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// `Q`, `U` and `P`.
    pub costs: CostModel,

    /// `T` — world time charged per search-node expansion.
    pub expansion_time: f64,

    /// Hard cap on the number of turns any single agent may take.  An agent
    /// that reaches it is reported as stuck.
    pub max_turns_per_agent: u64,

    /// Cooperative or competitive target semantics.
    pub target_mode: TargetMode,
}

impl SimConfig {
    /// World time charged for `expansions` search-node expansions.
    #[inline]
    pub fn planning_time(&self, expansions: u64) -> f64 {
        expansions as f64 * self.expansion_time
    }

    /// Reject negative or non-finite constants and a zero turn cap.
    pub fn validate(&self) -> RescueResult<()> {
        if !self.costs.is_valid() {
            return Err(RescueError::Config(format!(
                "cost constants must be finite and non-negative: {:?}",
                self.costs
            )));
        }
        if !self.expansion_time.is_finite() || self.expansion_time < 0.0 {
            return Err(RescueError::Config(format!(
                "expansion time must be finite and non-negative, got {}",
                self.expansion_time
            )));
        }
        if self.max_turns_per_agent == 0 {
            return Err(RescueError::Config("max_turns_per_agent must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            costs:               CostModel::default(),
            expansion_time:      0.0,
            max_turns_per_agent: 10_000,
            target_mode:         TargetMode::Cooperative,
        }
    }
}
