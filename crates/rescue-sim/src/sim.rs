//! The `Sim` struct and its turn loop.

use rescue_core::{AgentId, RescueError, SimConfig, SimTime, TargetMode};
use rescue_graph::FloodGraph;
use rescue_search::{Action, AgentView, HeuristicEngine};

use crate::{
    AgentOutcome, AgentState, AgentStatus, Outcome, SimEvent, SimObserver, SimResult,
    StuckReason, TargetPool, TurnQueue,
};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Holds the graph, the agents, the shared target pool and the turn queue.
/// One call to [`step`](Self::step) runs exactly one agent turn:
///
/// 1. **Terminal checks**: cooperative pool exhausted → `Finished`; turn cap
///    reached → `Stuck(TurnLimit)`.
/// 2. **Planning** (only when the agent has no committed actions, or the
///    thief sees a stolen target): the agent's target view is refreshed from
///    the pool and its strategy is asked for a plan.  Expansions are charged
///    whether or not planning succeeds.
/// 3. **Apply**: one committed action is checked with
///    [`Action::apply`] and applied; arrival at an open target claims it.
///    An illegal action is rejected without charge.
/// 4. **Requeue** at the agent's new world time.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Cost constants, T, turn cap and target mode.
    pub config: SimConfig,

    /// The flooded road network.  Immutable for the whole run.
    pub graph: FloodGraph,

    /// Per-agent runtime state, indexed by `AgentId`.
    pub agents: Vec<AgentState>,

    /// Targets not yet reached by anybody.
    pub pool: TargetPool,

    pub(crate) queue:   TurnQueue,
    pub(crate) engine:  HeuristicEngine,
    pub(crate) started: bool,
    pub(crate) turns:   u64,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every agent is finished or stuck.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Outcome> {
        while self.step(observer)?.is_some() {}

        let outcome = self.outcome();
        tracing::info!(
            turns = outcome.turns,
            finished = outcome.agents.iter().filter(|a| a.status == AgentStatus::Finished).count(),
            unclaimed = outcome.unclaimed.len(),
            "simulation ended"
        );
        observer.on_sim_end(&outcome);
        Ok(outcome)
    }

    /// Run one agent turn.  Returns the agent that acted, or `None` once no
    /// agent is left to act.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Option<AgentId>> {
        if !self.started {
            self.start(observer);
        }
        let Some((at, id)) = self.queue.pop_next() else {
            return Ok(None);
        };
        self.turns += 1;
        observer.on_turn_start(id, at);
        self.take_turn(id, observer)?;
        Ok(Some(id))
    }

    pub fn agent(&self, id: AgentId) -> SimResult<&AgentState> {
        Ok(self.agents.get(id.index()).ok_or(RescueError::AgentNotFound(id))?)
    }

    /// `path_cost + T × expansions` for `id`.
    pub fn world_time(&self, id: AgentId) -> SimResult<SimTime> {
        Ok(self.agent(id)?.world_time(self.config.expansion_time))
    }

    /// `true` once the run has started and no agent is left to act.
    pub fn is_done(&self) -> bool {
        self.started && self.queue.is_empty()
    }

    /// Turns taken so far, by all agents together.
    pub fn turns(&self) -> u64 {
        self.turns
    }

    /// Snapshot of the current results.
    pub fn outcome(&self) -> Outcome {
        let t = self.config.expansion_time;
        Outcome {
            agents: self
                .agents
                .iter()
                .map(|a| AgentOutcome {
                    agent:           a.id,
                    strategy:        a.strategy.kind(),
                    status:          a.status,
                    path_cost:       a.path_cost,
                    world_time:      a.world_time(t),
                    expansions:      a.expansions,
                    turns:           a.turns,
                    targets_reached: a.targets_reached.clone(),
                    people_saved:    a.people_saved,
                })
                .collect(),
            unclaimed: self.pool.snapshot().iter().collect(),
            turns:     self.turns,
        }
    }

    // ── Turn processing ───────────────────────────────────────────────────

    /// Initial pickup, then queue every agent at time zero.
    fn start<O: SimObserver>(&mut self, observer: &mut O) {
        self.started = true;
        for agent in &mut self.agents {
            if self.pool.claim(agent.position, agent.id) {
                let people = self.pool.people_at(agent.position);
                agent.targets_reached.push(agent.position);
                agent.people_saved += people;
                observer.on_event(
                    SimTime::ZERO,
                    &SimEvent::TargetReached { agent: agent.id, target: agent.position, people },
                );
            }
            self.queue.push(SimTime::ZERO, agent.id);
        }
        tracing::info!(
            agents = self.agents.len(),
            targets = self.pool.len(),
            mode = ?self.config.target_mode,
            "simulation started"
        );
    }

    fn take_turn<O: SimObserver>(&mut self, id: AgentId, observer: &mut O) -> SimResult<()> {
        let Sim { config, graph, agents, pool, queue, engine, .. } = self;
        let agent = agents.get_mut(id.index()).ok_or(RescueError::AgentNotFound(id))?;
        let t = config.expansion_time;

        if !agent.status.is_active() {
            return Ok(());
        }
        if config.target_mode == TargetMode::Cooperative && pool.is_empty() {
            finish(agent, t, observer);
            return Ok(());
        }
        if agent.turns >= config.max_turns_per_agent {
            stick(agent, StuckReason::TurnLimit, 0, t, observer);
            return Ok(());
        }
        agent.turns += 1;
        tracing::debug!(agent = %id, at = %agent.world_time(t), turn = agent.turns, "turn");

        // ── Plan ──────────────────────────────────────────────────────────
        if agent.plan.is_empty() || agent.strategy.wants_replan(&agent.remaining, pool.snapshot()) {
            agent.plan.clear();
            agent.remaining = pool.snapshot().clone();
            if agent.remaining.is_empty() {
                finish(agent, t, observer);
                return Ok(());
            }

            let state = agent.search_node();
            let view = AgentView {
                agent:      id,
                graph,
                costs:      &config.costs,
                state:      &state,
                world_time: agent.world_time(t),
            };
            match agent.strategy.plan(&view, engine) {
                Ok(plan) => {
                    agent.expansions += plan.expansions;
                    if !agent.strategy.is_external() {
                        observer.on_event(
                            agent.world_time(t),
                            &SimEvent::PlanCommitted {
                                agent:      id,
                                expansions: plan.expansions,
                                actions:    plan.actions.len(),
                            },
                        );
                    }
                    agent.plan.extend(plan.actions);
                }
                Err(e) => {
                    agent.expansions += e.expansions();
                    stick(agent, StuckReason::from(&e), e.expansions(), t, observer);
                    return Ok(());
                }
            }
        }

        // ── Apply one action ──────────────────────────────────────────────
        if let Some(action) = agent.plan.pop_front() {
            match action.apply(graph, &config.costs, agent.position, agent.equipped) {
                Ok(tr) => {
                    let from = agent.position;
                    agent.path_cost += tr.cost;
                    agent.position = tr.to;
                    agent.equipped = tr.equipped;
                    let at = agent.world_time(t);

                    let event = match action {
                        Action::Move { .. } => {
                            SimEvent::Moved { agent: id, from, to: tr.to, cost: tr.cost }
                        }
                        Action::Equip => SimEvent::Equipped { agent: id },
                        Action::Unequip => SimEvent::Unequipped { agent: id },
                    };
                    observer.on_event(at, &event);

                    if action.is_move() {
                        agent.remaining.remove(tr.to);
                        if pool.claim(tr.to, id) {
                            let people = pool.people_at(tr.to);
                            agent.targets_reached.push(tr.to);
                            agent.people_saved += people;
                            tracing::debug!(agent = %id, target = %tr.to, people, left = pool.len(), "target reached");
                            observer.on_event(at, &SimEvent::TargetReached { agent: id, target: tr.to, people });
                        }
                    }
                }
                Err(reason) => {
                    tracing::warn!(agent = %id, ?action, %reason, "action rejected");
                    agent.plan.clear();
                    agent.strategy.on_rejected(&action, &reason);
                    observer.on_event(agent.world_time(t), &SimEvent::ActionRejected { agent: id, reason });
                }
            }
        }

        queue.push(agent.world_time(t), id);
        Ok(())
    }
}

// ── Terminal transitions ──────────────────────────────────────────────────────

fn finish<O: SimObserver>(agent: &mut AgentState, t: f64, observer: &mut O) {
    agent.status = AgentStatus::Finished;
    agent.plan.clear();
    let at = agent.world_time(t);
    tracing::info!(
        agent = %agent.id,
        cost = agent.path_cost,
        time = at.secs(),
        targets = agent.targets_reached.len(),
        saved = agent.people_saved,
        "agent finished"
    );
    observer.on_event(
        at,
        &SimEvent::AgentFinished { agent: agent.id, total_cost: agent.path_cost, total_time: at.secs() },
    );
}

fn stick<O: SimObserver>(
    agent:      &mut AgentState,
    reason:     StuckReason,
    expansions: u64,
    t:          f64,
    observer:   &mut O,
) {
    agent.status = AgentStatus::Stuck(reason);
    agent.plan.clear();
    let at = agent.world_time(t);
    tracing::info!(agent = %agent.id, %reason, time = at.secs(), "agent stuck");
    observer.on_event(at, &SimEvent::AgentStuck { agent: agent.id, reason, expansions });
}
