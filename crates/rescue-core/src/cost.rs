//! The capability-dependent cost function.
//!
//! An agent either carries the amphibious kit (`equipped == true`) or not.
//!
//! | Action   | Legal when                      | Cost              |
//! |----------|---------------------------------|-------------------|
//! | Move     | edge dry, or agent equipped     | `base × P` if equipped, else `base` |
//! | Equip    | agent not equipped              | `Q`               |
//! | Unequip  | agent equipped                  | `U`               |
//!
//! `P ≥ 1` is the intended domain but nothing here assumes it; the penalty is
//! only ever multiplied in.

/// Scenario-wide cost constants `Q`, `U` and `P`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostModel {
    /// `Q` — time to put the kit on.
    pub equip_cost:    f64,
    /// `U` — time to take the kit off.
    pub unequip_cost:  f64,
    /// `P` — multiplier on every traversal made while equipped.
    pub flood_penalty: f64,
}

impl CostModel {
    pub fn new(equip_cost: f64, unequip_cost: f64, flood_penalty: f64) -> Self {
        Self { equip_cost, unequip_cost, flood_penalty }
    }

    /// Effective cost of traversing an edge with base cost `base`.
    ///
    /// Returns `None` when the traversal is illegal: the edge is flooded and
    /// the agent is not equipped.
    #[inline]
    pub fn edge_cost(&self, base: f64, flooded: bool, equipped: bool) -> Option<f64> {
        if equipped {
            Some(base * self.flood_penalty)
        } else if flooded {
            None
        } else {
            Some(base)
        }
    }

    /// Cost of switching *away from* the given equip state.
    #[inline]
    pub fn toggle_cost(&self, equipped: bool) -> f64 {
        if equipped { self.unequip_cost } else { self.equip_cost }
    }

    /// `true` when every constant is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.equip_cost, self.unequip_cost, self.flood_penalty]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self { equip_cost: 0.0, unequip_cost: 0.0, flood_penalty: 1.0 }
    }
}
