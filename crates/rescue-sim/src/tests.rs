//! Integration tests for rescue-sim.

use rescue_core::{CostModel, NodeId, SimConfig, TargetMode};
use rescue_graph::{FloodGraph, FloodGraphBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(expansion_time: f64) -> SimConfig {
    SimConfig {
        costs: CostModel::new(2.0, 1.0, 3.0),
        expansion_time,
        ..SimConfig::default()
    }
}

/// `D ──5── A ──1── B ~~1~~ C`.
fn flood_example() -> (FloodGraph, [NodeId; 4]) {
    let mut b = FloodGraphBuilder::new();
    let a = b.add_node("A");
    let bb = b.add_node("B");
    let c = b.add_node("C");
    let d = b.add_node("D");
    b.add_road(a, bb, 1.0, false);
    b.add_road(bb, c, 1.0, true);
    b.add_road(a, d, 5.0, false);
    (b.build().unwrap(), [a, bb, c, d])
}

/// Six-node ring with chords; three flooded segments.
fn ring() -> (FloodGraph, Vec<NodeId>) {
    let mut b = FloodGraphBuilder::new();
    let n: Vec<NodeId> = (0..6).map(|i| b.add_node(format!("N{i}"))).collect();
    b.add_road(n[0], n[1], 2.0, false);
    b.add_road(n[1], n[2], 1.0, true);
    b.add_road(n[2], n[3], 2.0, false);
    b.add_road(n[3], n[4], 1.0, true);
    b.add_road(n[4], n[5], 3.0, false);
    b.add_road(n[5], n[0], 1.0, true);
    b.add_road(n[1], n[4], 4.0, false);
    b.add_road(n[0], n[3], 6.0, false);
    (b.build().unwrap(), n)
}

/// `S ─1─ M ─1─ T1 ─1─ T2`, plus a rival start `R ─3─ T1`.
fn race_track() -> (FloodGraph, [NodeId; 5]) {
    let mut b = FloodGraphBuilder::new();
    let s = b.add_node("S");
    let m = b.add_node("M");
    let t1 = b.add_node("T1");
    let t2 = b.add_node("T2");
    let r = b.add_node("R");
    b.add_road(s, m, 1.0, false);
    b.add_road(m, t1, 1.0, false);
    b.add_road(t1, t2, 1.0, false);
    b.add_road(r, t1, 3.0, false);
    (b.build().unwrap(), [s, m, t1, t2, r])
}

// ── TurnQueue & TargetPool ────────────────────────────────────────────────────

#[cfg(test)]
mod queue_tests {
    use rescue_core::{AgentId, NodeId, SimTime};

    use crate::{TargetPool, TurnQueue};

    #[test]
    fn pops_by_time_then_id() {
        let mut q = TurnQueue::new();
        q.push(SimTime(2.0), AgentId(0));
        q.push(SimTime(1.0), AgentId(3));
        q.push(SimTime(1.0), AgentId(1));
        assert_eq!(q.len(), 3);
        assert_eq!(q.next_time(), Some(SimTime(1.0)));
        assert!(q.contains(AgentId(3)));
        assert_eq!(q.pop_next(), Some((SimTime(1.0), AgentId(1))));
        assert_eq!(q.pop_next(), Some((SimTime(1.0), AgentId(3))));
        assert_eq!(q.pop_next(), Some((SimTime(2.0), AgentId(0))));
        assert!(q.pop_next().is_none());
        assert!(q.is_empty());
    }

    #[test]
    fn pool_claims_once() {
        let mut pool = TargetPool::new([NodeId(4), NodeId(2), NodeId(4)]);
        assert_eq!(pool.len(), 2);
        assert!(pool.claim(NodeId(4), AgentId(1)));
        assert!(!pool.claim(NodeId(4), AgentId(0)));
        assert!(!pool.claim(NodeId(9), AgentId(0)));
        assert_eq!(pool.claimant(NodeId(4)), Some(AgentId(1)));
        assert_eq!(pool.claimant(NodeId(2)), None);
        assert!(pool.contains(NodeId(2)));
        assert_eq!(pool.claims(), &[(NodeId(4), AgentId(1))]);
        assert_eq!(pool.people_at(NodeId(4)), 1);
    }

    #[test]
    fn pool_weights_targets_by_people() {
        let mut pool = TargetPool::with_people([(NodeId(1), 3), (NodeId(5), 0), (NodeId(1), 2), (NodeId(7), 1)]);
        assert_eq!(pool.len(), 2);
        assert!(!pool.contains(NodeId(5)));
        assert_eq!(pool.people_at(NodeId(1)), 5);
        assert_eq!(pool.people_at(NodeId(5)), 0);
        assert_eq!(pool.total_people(), 6);
        assert!(pool.claim(NodeId(1), AgentId(0)));
        assert_eq!(pool.people_at(NodeId(1)), 5);
        assert_eq!(pool.total_people(), 6);
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use rescue_core::{NodeId, SimConfig};
    use rescue_graph::FloodGraphBuilder;
    use rescue_search::{Scripted, StrategyKind};

    use super::*;
    use crate::{AgentSpec, Sim, SimBuilder, SimError, SimResult};

    #[test]
    fn builds_with_one_agent() {
        let (g, [a, _, c, _]) = flood_example();
        let sim = SimBuilder::new(g, test_config(0.0))
            .targets([c])
            .agent(AgentSpec::new(StrategyKind::GreedySearch, a))
            .build()
            .unwrap();
        assert_eq!(sim.agents.len(), 1);
        assert_eq!(sim.pool.len(), 1);
        assert!(!sim.is_done());
    }

    #[test]
    fn no_agents_rejected() {
        let (g, [_, _, c, _]) = flood_example();
        let result = SimBuilder::new(g, test_config(0.0)).targets([c]).build();
        assert!(matches!(result, Err(SimError::InvalidScenario(_))));
    }

    #[test]
    fn unknown_target_rejected() {
        let (g, [a, ..]) = flood_example();
        let result = SimBuilder::new(g, test_config(0.0))
            .targets([NodeId(42)])
            .agent(AgentSpec::new(StrategyKind::Thief, a))
            .build();
        assert!(matches!(result, Err(SimError::InvalidScenario(_))));
    }

    #[test]
    fn unknown_start_rejected() {
        let (g, [_, _, c, _]) = flood_example();
        let result = SimBuilder::new(g, test_config(0.0))
            .targets([c])
            .agent(AgentSpec::new(StrategyKind::StupidGreedy, NodeId(42)))
            .build();
        assert!(matches!(result, Err(SimError::InvalidScenario(_))));
    }

    #[test]
    fn human_spec_without_source_rejected() {
        let (g, [a, _, c, _]) = flood_example();
        let result = SimBuilder::new(g, test_config(0.0))
            .targets([c])
            .agent(AgentSpec::new(StrategyKind::Human, a))
            .build();
        assert!(matches!(result, Err(SimError::InvalidScenario(_))));
    }

    #[test]
    fn bad_config_rejected() {
        let (g, [a, _, c, _]) = flood_example();
        let config = SimConfig { expansion_time: -1.0, ..test_config(0.0) };
        let result = SimBuilder::new(g, config)
            .targets([c])
            .agent(AgentSpec::new(StrategyKind::GreedySearch, a))
            .build();
        assert!(matches!(result, Err(SimError::Core(_))));
    }

    #[test]
    fn graph_errors_propagate() {
        fn build() -> SimResult<Sim> {
            let mut b = FloodGraphBuilder::new();
            let a = b.add_node("A");
            b.add_road(a, NodeId(7), 1.0, false);
            let g = b.build()?;
            SimBuilder::new(g, SimConfig::default())
                .agent(AgentSpec::new(StrategyKind::GreedySearch, a))
                .build()
        }
        assert!(matches!(build(), Err(SimError::Graph(_))));
    }

    #[test]
    fn agent_ids_follow_insertion_order() {
        let (g, [a, b, c, d]) = flood_example();
        let sim = SimBuilder::new(g, test_config(0.0))
            .targets([c])
            .agent(AgentSpec::new(StrategyKind::GreedySearch, a))
            .human(b, Scripted::default())
            .agents([AgentSpec::new(StrategyKind::Rta { lookahead: 2 }, d)])
            .build()
            .unwrap();
        let kinds: Vec<_> = sim.agents.iter().map(|s| s.strategy.kind()).collect();
        assert_eq!(
            kinds,
            vec![StrategyKind::GreedySearch, StrategyKind::Human, StrategyKind::Rta { lookahead: 2 }]
        );
        assert_eq!(sim.agents[1].position, b);
    }
}

// ── Single-agent runs ─────────────────────────────────────────────────────────

#[cfg(test)]
mod single_agent_tests {
    use rescue_core::AgentId;
    use rescue_search::StrategyKind;

    use super::*;
    use crate::{AgentSpec, AgentStatus, EventLog, NoopObserver, SimBuilder, SimEvent, StuckReason};

    fn run_one(kind: StrategyKind, t: f64) -> (crate::Outcome, EventLog) {
        let (g, [a, _, c, _]) = flood_example();
        let mut sim = SimBuilder::new(g, test_config(t))
            .targets([c])
            .agent(AgentSpec::new(kind, a))
            .build()
            .unwrap();
        let mut log = EventLog::new();
        let outcome = sim.run(&mut log).unwrap();
        (outcome, log)
    }

    #[test]
    fn astar_takes_the_optimal_route() {
        let (outcome, log) = run_one(StrategyKind::AStar { limit: 1_000 }, 0.01);
        let a = &outcome.agents[0];
        assert_eq!(a.status, AgentStatus::Finished);
        assert_eq!(a.path_cost, 6.0);
        assert_eq!(a.world_time.secs(), 6.0 + 0.01 * a.expansions as f64);
        assert_eq!(a.targets_reached, vec![NodeId(2)]);
        assert!(outcome.unclaimed.is_empty());

        let kinds: Vec<_> = log.events.iter().map(|(_, e)| e.kind()).collect();
        assert_eq!(
            kinds,
            vec!["plan_committed", "moved", "equipped", "moved", "target_reached", "agent_finished"]
        );
        // One planning call for the whole route.
        assert!(matches!(log.events[0].1, SimEvent::PlanCommitted { actions: 3, .. }));
    }

    #[test]
    fn every_automated_strategy_finishes_the_example() {
        for kind in [
            StrategyKind::StupidGreedy,
            StrategyKind::GreedySearch,
            StrategyKind::AStar { limit: 1_000 },
            StrategyKind::Rta { lookahead: 1 },
            StrategyKind::Rta { lookahead: 8 },
            StrategyKind::Thief,
        ] {
            let (outcome, _) = run_one(kind, 0.01);
            let a = &outcome.agents[0];
            assert_eq!(a.status, AgentStatus::Finished, "{kind}");
            assert!(a.path_cost >= 6.0, "{kind}");
            assert_eq!(a.strategy, kind);
        }
    }

    #[test]
    fn one_step_strategies_plan_every_turn() {
        let (_, log) = run_one(StrategyKind::StupidGreedy, 0.0);
        let plans = log.events.iter().filter(|(_, e)| e.kind() == "plan_committed").count();
        assert_eq!(plans, 3);
    }

    #[test]
    fn world_time_is_cost_plus_thinking() {
        for kind in [
            StrategyKind::StupidGreedy,
            StrategyKind::AStar { limit: 1_000 },
            StrategyKind::Rta { lookahead: 3 },
        ] {
            let (outcome, log) = run_one(kind, 0.25);
            let a = &outcome.agents[0];
            let mut cost = 0.0;
            let mut expansions = 0u64;
            for (_, e) in &log.events {
                match e {
                    SimEvent::Moved { cost: c, .. } => cost += c,
                    SimEvent::Equipped { .. } => cost += 2.0,
                    SimEvent::Unequipped { .. } => cost += 1.0,
                    SimEvent::PlanCommitted { expansions: x, .. } => expansions += x,
                    SimEvent::AgentStuck { expansions: x, .. } => expansions += x,
                    _ => {}
                }
            }
            assert_eq!(a.path_cost, cost, "{kind}");
            assert_eq!(a.expansions, expansions, "{kind}");
            assert_eq!(a.world_time.secs(), cost + 0.25 * expansions as f64, "{kind}");

            let Some((at, SimEvent::AgentFinished { total_time, .. })) = log.events.last() else {
                panic!("last event should be AgentFinished");
            };
            assert_eq!(at.secs(), *total_time);
            assert_eq!(*total_time, a.world_time.secs());
        }
    }

    #[test]
    fn starting_on_the_target_claims_it() {
        let (g, [_, _, c, _]) = flood_example();
        let mut sim = SimBuilder::new(g, test_config(0.0))
            .targets([c])
            .agent(AgentSpec::new(StrategyKind::GreedySearch, c))
            .build()
            .unwrap();
        let mut log = EventLog::new();
        let outcome = sim.run(&mut log).unwrap();
        assert_eq!(
            log.events.iter().map(|(_, e)| e.clone()).collect::<Vec<_>>(),
            vec![
                SimEvent::TargetReached { agent: AgentId(0), target: c, people: 1 },
                SimEvent::AgentFinished { agent: AgentId(0), total_cost: 0.0, total_time: 0.0 },
            ]
        );
        assert_eq!(outcome.agents[0].targets_reached, vec![c]);
    }

    #[test]
    fn astar_limit_leaves_agent_stuck() {
        let (outcome, log) = run_one(StrategyKind::AStar { limit: 1 }, 0.5);
        let a = &outcome.agents[0];
        assert_eq!(a.status, AgentStatus::Stuck(StuckReason::PlanningExhausted));
        assert_eq!(a.expansions, 1);
        assert_eq!(a.world_time.secs(), 0.5);
        assert_eq!(
            log.events.last().map(|(_, e)| e.clone()),
            Some(SimEvent::AgentStuck {
                agent:      AgentId(0),
                reason:     StuckReason::PlanningExhausted,
                expansions: 1,
            })
        );
        assert_eq!(outcome.unclaimed, vec![NodeId(2)]);
    }

    #[test]
    fn unreachable_target_leaves_agent_stuck() {
        let mut b = FloodGraphBuilder::new();
        let a = b.add_node("A");
        let x = b.add_node("X");
        let island = b.add_node("I");
        b.add_road(a, x, 1.0, true);
        let g = b.build().unwrap();
        for kind in [StrategyKind::StupidGreedy, StrategyKind::AStar { limit: 50 }, StrategyKind::Rta { lookahead: 4 }] {
            let mut sim = SimBuilder::new(g.clone(), test_config(0.0))
                .targets([island])
                .agent(AgentSpec::new(kind, a))
                .build()
                .unwrap();
            let outcome = sim.run(&mut NoopObserver).unwrap();
            assert_eq!(
                outcome.agents[0].status,
                AgentStatus::Stuck(StuckReason::TargetUnreachable),
                "{kind}"
            );
        }
    }

    #[test]
    fn turn_cap_stops_the_agent() {
        let (g, [a, _, c, _]) = flood_example();
        let config = SimConfig { max_turns_per_agent: 2, ..test_config(0.0) };
        let mut sim = SimBuilder::new(g, config)
            .targets([c])
            .agent(AgentSpec::new(StrategyKind::StupidGreedy, a))
            .build()
            .unwrap();
        let outcome = sim.run(&mut NoopObserver).unwrap();
        let agent = &outcome.agents[0];
        assert_eq!(agent.status, AgentStatus::Stuck(StuckReason::TurnLimit));
        assert_eq!(agent.turns, 2);
        assert!(agent.targets_reached.is_empty());
    }

    #[test]
    fn stepping_matches_running() {
        let (g, [a, _, c, _]) = flood_example();
        let mut sim = SimBuilder::new(g, test_config(0.0))
            .targets([c])
            .agent(AgentSpec::new(StrategyKind::AStar { limit: 100 }, a))
            .build()
            .unwrap();
        let mut steps = 0;
        while let Some(id) = sim.step(&mut NoopObserver).unwrap() {
            assert_eq!(id, AgentId(0));
            steps += 1;
        }
        // Three actions, then the turn that notices the pool is empty.
        assert_eq!(steps, 4);
        assert!(sim.is_done());
        assert_eq!(sim.turns(), 4);
        assert_eq!(sim.world_time(AgentId(0)).unwrap().secs(), 6.0);
        assert!(sim.agent(AgentId(5)).is_err());
    }
}

// ── External action sources ───────────────────────────────────────────────────

#[cfg(test)]
mod human_tests {
    use rescue_core::AgentId;
    use rescue_search::{Action, IllegalAction, Scripted};

    use super::*;
    use crate::{AgentStatus, EventLog, SimBuilder, SimEvent, StuckReason};

    #[test]
    fn illegal_action_rejected_without_charge() {
        let (g, [_, b, c, _]) = flood_example();
        let cross = Action::move_to(&g, b, c).unwrap();
        let script = Scripted::new([cross, Action::Equip, cross]);
        let mut sim = SimBuilder::new(g, test_config(0.0))
            .targets([c])
            .human(b, script)
            .build()
            .unwrap();
        let mut log = EventLog::new();
        let outcome = sim.run(&mut log).unwrap();

        let (at, first) = &log.events[0];
        assert_eq!(at.secs(), 0.0);
        assert!(matches!(
            first,
            SimEvent::ActionRejected { agent: AgentId(0), reason: IllegalAction::Flooded { .. } }
        ));
        let kinds: Vec<_> = log.events.iter().map(|(_, e)| e.kind()).collect();
        assert_eq!(
            kinds,
            vec!["action_rejected", "equipped", "moved", "target_reached", "agent_finished"]
        );

        let agent = &outcome.agents[0];
        assert_eq!(agent.status, AgentStatus::Finished);
        assert_eq!(agent.path_cost, 5.0);
        assert_eq!(agent.expansions, 0);
        assert_eq!(agent.turns, 3);
    }

    #[test]
    fn empty_source_resigns() {
        let (g, [a, _, c, _]) = flood_example();
        let mut sim = SimBuilder::new(g, test_config(0.0))
            .targets([c])
            .human(a, Scripted::default())
            .build()
            .unwrap();
        let outcome = sim.run(&mut EventLog::new()).unwrap();
        assert_eq!(outcome.agents[0].status, AgentStatus::Stuck(StuckReason::Resigned));
    }
}

// ── Multi-agent runs ──────────────────────────────────────────────────────────

#[cfg(test)]
mod shared_pool_tests {
    use std::collections::BTreeSet;

    use rescue_core::AgentId;
    use rescue_search::StrategyKind;

    use super::*;
    use crate::{AgentSpec, AgentStatus, EventLog, Sim, SimBuilder, SimEvent};

    fn ring_sim(mode: TargetMode) -> Sim {
        let (g, n) = ring();
        let config = SimConfig {
            costs: CostModel::new(1.5, 0.5, 2.0),
            expansion_time: 0.05,
            target_mode: mode,
            ..SimConfig::default()
        };
        SimBuilder::new(g, config)
            .targets([n[2], n[4], n[5]])
            .agent(AgentSpec::new(StrategyKind::Thief, n[0]))
            .agent(AgentSpec::new(StrategyKind::AStar { limit: 10_000 }, n[3]))
            .agent(AgentSpec::new(StrategyKind::GreedySearch, n[1]))
            .agent(AgentSpec::new(StrategyKind::Rta { lookahead: 3 }, n[5]))
            .build()
            .unwrap()
    }

    #[test]
    fn cooperative_finishes_everyone_once_the_pool_is_empty() {
        let (g, [a, _, c, d]) = flood_example();
        let mut sim = SimBuilder::new(g, test_config(0.01))
            .targets([c])
            .agent(AgentSpec::new(StrategyKind::AStar { limit: 1_000 }, a))
            .agent(AgentSpec::new(StrategyKind::GreedySearch, d))
            .build()
            .unwrap();
        let outcome = sim.run(&mut EventLog::new()).unwrap();
        assert!(outcome.all_finished());
        assert_eq!(outcome.agents[0].targets_reached, vec![c]);
        assert!(outcome.agents[1].targets_reached.is_empty());
        assert_eq!(outcome.winner().map(|w| w.agent), Some(AgentId(0)));
    }

    #[test]
    fn no_target_is_credited_twice() {
        for mode in [TargetMode::Cooperative, TargetMode::Competitive] {
            let mut sim = ring_sim(mode);
            let mut log = EventLog::new();
            let outcome = sim.run(&mut log).unwrap();

            let reached: Vec<NodeId> = log
                .events
                .iter()
                .filter_map(|(_, e)| match e {
                    SimEvent::TargetReached { target, .. } => Some(*target),
                    _ => None,
                })
                .collect();
            let unique: BTreeSet<_> = reached.iter().copied().collect();
            assert_eq!(reached.len(), unique.len(), "{mode:?}");
            assert_eq!(unique.len(), 3, "{mode:?}");
            assert!(outcome.unclaimed.is_empty());

            let credited: usize = outcome.agents.iter().map(|a| a.targets_reached.len()).sum();
            assert_eq!(credited, 3);
            for (node, agent) in sim.pool.claims() {
                assert!(outcome.agents[agent.index()].targets_reached.contains(node));
            }
            assert!(outcome.agents.iter().all(|a| a.status.is_terminal()));
        }
    }

    #[test]
    fn thief_abandons_plan_when_target_is_taken() {
        for (kind, expected_plans) in [(StrategyKind::Thief, 2), (StrategyKind::GreedySearch, 1)] {
            let (g, [s, _, t1, t2, r]) = race_track();
            let config = SimConfig {
                costs: CostModel::new(1.0, 1.0, 2.0),
                target_mode: TargetMode::Competitive,
                ..SimConfig::default()
            };
            let mut sim = SimBuilder::new(g, config)
                .targets([t1, t2])
                .agent(AgentSpec::new(kind, s))
                .agent(AgentSpec::new(StrategyKind::AStar { limit: 1_000 }, r))
                .build()
                .unwrap();
            let mut log = EventLog::new();
            let outcome = sim.run(&mut log).unwrap();

            let plans = log
                .for_agent(AgentId(0))
                .filter(|(_, e)| matches!(e, SimEvent::PlanCommitted { .. }))
                .count();
            assert_eq!(plans, expected_plans, "{kind}");
            assert_eq!(outcome.agents[0].targets_reached, vec![t2], "{kind}");
            assert_eq!(outcome.agents[1].targets_reached, vec![t1], "{kind}");
            assert_eq!(outcome.agents[0].status, AgentStatus::Finished);
            assert_eq!(outcome.agents[1].status, AgentStatus::Finished);
        }
    }

    #[test]
    fn runs_are_reproducible() {
        let mut first = EventLog::new();
        let mut second = EventLog::new();
        let o1 = ring_sim(TargetMode::Competitive).run(&mut first).unwrap();
        let o2 = ring_sim(TargetMode::Competitive).run(&mut second).unwrap();
        assert_eq!(first.events, second.events);
        assert_eq!(o1, o2);
    }

    #[test]
    fn winner_ranks_people_then_world_time() {
        let mut sim = ring_sim(TargetMode::Cooperative);
        let outcome = sim.run(&mut EventLog::new()).unwrap();
        let w = outcome.winner().unwrap();
        assert!(w.people_saved > 0);
        for other in &outcome.agents {
            assert!(w.people_saved >= other.people_saved);
            if other.people_saved == w.people_saved {
                assert!(w.world_time <= other.world_time);
            }
        }
        assert_eq!(outcome.people_saved(), 3);
    }

    /// `X ─1─ A ─10─ Y ─3─ B`: one person at X, five at Y.
    #[test]
    fn more_people_beats_a_faster_rescue() {
        let mut b = FloodGraphBuilder::new();
        let x = b.add_node("X");
        let a = b.add_node("A");
        let y = b.add_node("Y");
        let start_b = b.add_node("B");
        b.add_road(x, a, 1.0, false);
        b.add_road(a, y, 10.0, false);
        b.add_road(y, start_b, 3.0, false);
        let g = b.build().unwrap();

        let mut sim = SimBuilder::new(g, test_config(0.0))
            .people([(x, 1), (y, 5)])
            .agent(AgentSpec::new(StrategyKind::AStar { limit: 1_000 }, a))
            .agent(AgentSpec::new(StrategyKind::AStar { limit: 1_000 }, start_b))
            .build()
            .unwrap();
        let mut log = EventLog::new();
        let outcome = sim.run(&mut log).unwrap();

        let fast = &outcome.agents[0];
        let slow = &outcome.agents[1];
        assert_eq!(fast.targets_reached, vec![x]);
        assert_eq!(fast.people_saved, 1);
        assert_eq!(fast.world_time.secs(), 1.0);
        assert_eq!(slow.targets_reached, vec![y]);
        assert_eq!(slow.people_saved, 5);
        assert_eq!(slow.world_time.secs(), 3.0);
        assert!(fast.world_time < slow.world_time);

        assert_eq!(fast.score(), 999.0);
        assert_eq!(slow.score(), 4997.0);
        assert_eq!(outcome.winner().map(|w| w.agent), Some(AgentId(1)));
        assert!(log.events.iter().any(|(_, e)| {
            *e == SimEvent::TargetReached { agent: AgentId(1), target: y, people: 5 }
        }));
    }

    #[test]
    fn nobody_wins_without_saving_anyone() {
        let (g, [a, _, c, _]) = flood_example();
        let mut sim = SimBuilder::new(g, test_config(0.0))
            .targets([c])
            .people([(c, 0)])
            .agent(AgentSpec::new(StrategyKind::GreedySearch, a))
            .build()
            .unwrap();
        let outcome = sim.run(&mut EventLog::new()).unwrap();
        assert_eq!(outcome.agents[0].status, AgentStatus::Finished);
        assert_eq!(outcome.people_saved(), 0);
        assert!(outcome.winner().is_none());
    }
}
