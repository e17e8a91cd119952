//! Fluent builder for constructing a [`Sim`].

use std::collections::BTreeMap;

use rescue_core::{AgentId, NodeId, SimConfig};
use rescue_graph::FloodGraph;
use rescue_search::{ActionSource, HeuristicEngine, Strategy, StrategyKind};

use crate::{AgentSpec, AgentState, Sim, SimError, SimResult, TargetPool, TurnQueue};

enum Pending {
    Automated(AgentSpec),
    External(NodeId, Box<dyn ActionSource>),
}

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`FloodGraph`] — already validated by its own builder
/// - [`SimConfig`] — Q / U / P, T, turn cap, target mode
///
/// # Optional inputs
///
/// | Method              | Default          |
/// |---------------------|------------------|
/// | `.targets(nodes)`   | no targets       |
/// | `.people(counts)`   | one per target   |
/// | `.agent(spec)`      | —                |
/// | `.human(start, src)`| —                |
///
/// Agents get `AgentId`s in the order they are added.  At least one agent is
/// required.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(graph, SimConfig::default())
///     .targets([c])
///     .agent(AgentSpec::new(StrategyKind::GreedySearch, a))
///     .human(d, Scripted::new(moves))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    graph:   FloodGraph,
    config:  SimConfig,
    targets: BTreeMap<NodeId, u32>,
    agents:  Vec<Pending>,
}

impl SimBuilder {
    pub fn new(graph: FloodGraph, config: SimConfig) -> Self {
        Self { graph, config, targets: BTreeMap::new(), agents: Vec::new() }
    }

    /// Add target nodes holding one person each.  Duplicates are merged.
    pub fn targets(mut self, targets: impl IntoIterator<Item = NodeId>) -> Self {
        for t in targets {
            self.targets.entry(t).or_insert(1);
        }
        self
    }

    /// Add targets with explicit person counts, replacing any count set
    /// earlier for the same node.  A count of zero removes the target.
    pub fn people(mut self, counts: impl IntoIterator<Item = (NodeId, u32)>) -> Self {
        for (t, count) in counts {
            if count == 0 {
                self.targets.remove(&t);
            } else {
                self.targets.insert(t, count);
            }
        }
        self
    }

    /// Add one automated agent.
    pub fn agent(mut self, spec: AgentSpec) -> Self {
        self.agents.push(Pending::Automated(spec));
        self
    }

    /// Add several automated agents, in order.
    pub fn agents(mut self, specs: impl IntoIterator<Item = AgentSpec>) -> Self {
        self.agents.extend(specs.into_iter().map(Pending::Automated));
        self
    }

    /// Add an agent whose actions come from `source`.
    pub fn human(mut self, start: NodeId, source: impl ActionSource + 'static) -> Self {
        self.agents.push(Pending::External(start, Box::new(source)));
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        if self.agents.is_empty() {
            return Err(SimError::InvalidScenario("no agents".into()));
        }
        for &t in self.targets.keys() {
            if !self.graph.contains_node(t) {
                return Err(SimError::InvalidScenario(format!("target {t} is not in the graph")));
            }
        }

        let mut agents = Vec::with_capacity(self.agents.len());
        for (i, pending) in self.agents.into_iter().enumerate() {
            let id = AgentId(i as u32);
            let (start, strategy) = match pending {
                Pending::Automated(spec) => {
                    let strategy = Strategy::from_kind(spec.strategy).ok_or_else(|| {
                        SimError::InvalidScenario(format!(
                            "{id}: {} agents need an action source",
                            StrategyKind::Human.name()
                        ))
                    })?;
                    (spec.start, strategy)
                }
                Pending::External(start, source) => (start, Strategy::Human(source)),
            };
            if !self.graph.contains_node(start) {
                return Err(SimError::InvalidScenario(format!(
                    "{id}: start node {start} is not in the graph"
                )));
            }
            agents.push(AgentState::new(id, strategy, start));
        }

        tracing::debug!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            agents = agents.len(),
            targets = self.targets.len(),
            "simulation built"
        );

        Ok(Sim {
            engine:  HeuristicEngine::new(self.config.costs),
            pool:    TargetPool::with_people(self.targets),
            queue:   TurnQueue::new(),
            started: false,
            turns:   0,
            config:  self.config,
            graph:   self.graph,
            agents,
        })
    }
}
