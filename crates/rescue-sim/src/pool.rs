//! The shared target pool.

use std::collections::BTreeMap;

use rescue_core::{AgentId, NodeId};
use rescue_search::TargetSet;

/// Targets nobody has reached yet, plus a record of who reached what.
///
/// Each target carries the number of people waiting there; a claim saves
/// all of them at once.
///
/// The simulation owns the only pool.  A target can be claimed once; every
/// later claim of the same node fails, which is what keeps two agents from
/// both being credited.
#[derive(Debug, Clone, Default)]
pub struct TargetPool {
    open:   TargetSet,
    people: BTreeMap<NodeId, u32>,
    claims: Vec<(NodeId, AgentId)>,
}

impl TargetPool {
    /// One person per target.
    pub fn new(targets: impl IntoIterator<Item = NodeId>) -> Self {
        Self::with_people(targets.into_iter().map(|t| (t, 1)))
    }

    /// Targets with their person counts.  Counts for a repeated node add
    /// up; nodes with nobody waiting are not targets.
    pub fn with_people(targets: impl IntoIterator<Item = (NodeId, u32)>) -> Self {
        let mut people: BTreeMap<NodeId, u32> = BTreeMap::new();
        for (node, count) in targets {
            *people.entry(node).or_default() += count;
        }
        people.retain(|_, &mut count| count > 0);
        Self { open: people.keys().copied().collect(), people, claims: Vec::new() }
    }

    /// People waiting at `node` when the run started.  Zero if it never was
    /// a target.
    pub fn people_at(&self, node: NodeId) -> u32 {
        self.people.get(&node).copied().unwrap_or(0)
    }

    /// People over all targets, claimed or not.
    pub fn total_people(&self) -> u32 {
        self.people.values().sum()
    }

    /// Remove `node` from the pool on behalf of `agent`.  Returns `false` if
    /// the node is not (or no longer) a target.
    pub fn claim(&mut self, node: NodeId, agent: AgentId) -> bool {
        if self.open.remove(node) {
            self.claims.push((node, agent));
            true
        } else {
            false
        }
    }

    /// The targets still open.
    pub fn snapshot(&self) -> &TargetSet {
        &self.open
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.open.contains(node)
    }

    /// Who claimed `node`, if anyone.
    pub fn claimant(&self, node: NodeId) -> Option<AgentId> {
        self.claims.iter().find(|&&(n, _)| n == node).map(|&(_, a)| a)
    }

    /// Claims in the order they happened.
    pub fn claims(&self) -> &[(NodeId, AgentId)] {
        &self.claims
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}
