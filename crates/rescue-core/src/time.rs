//! World-time model.
//!
//! # Design
//!
//! Unlike a tick-driven simulator, every agent here owns its own clock: the
//! sum of the action costs it has committed plus the time it spent thinking
//! (`expansions × T`).  Times and costs are therefore real numbers, and the
//! scheduler needs a *total* order over them to pick the next agent.
//!
//! [`SimTime`] and [`OrderedCost`] wrap `f64` and order with
//! [`f64::total_cmp`], so they can live in `BTreeSet`s and `BinaryHeap`s.
//! `+∞` sorts after every finite value, which is exactly what the planners
//! want for unreachable states.

use std::cmp::Ordering;
use std::fmt;

// ── SimTime ──────────────────────────────────────────────────────────────────

/// An agent's accumulated world time.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    #[inline]
    pub fn secs(self) -> f64 {
        self.0
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.3}", self.0)
    }
}

// ── OrderedCost ───────────────────────────────────────────────────────────────

/// A path cost or f-value usable as a priority-queue key.
#[derive(Copy, Clone, Debug, Default)]
pub struct OrderedCost(pub f64);

impl OrderedCost {
    pub const INFINITE: OrderedCost = OrderedCost(f64::INFINITY);

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl PartialEq for OrderedCost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OrderedCost {}

impl PartialOrd for OrderedCost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedCost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for OrderedCost {
    fn from(v: f64) -> Self {
        OrderedCost(v)
    }
}
