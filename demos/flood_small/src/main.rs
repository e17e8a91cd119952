//! flood_small — six rescuers on an eight-vertex flooded district.
//!
//! Five automated agents (one per planner) and one externally driven agent
//! race to the stranded people.  The external agent is a [`NearestRunner`]
//! standing in for a human at a terminal.
//!
//! Usage: `flood_small [OUTPUT_DIR]` (default `output/flood_small`).
//! Set `RUST_LOG=debug` to see every planning call.

use std::io::Cursor;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use rescue_core::{NodeId, SimConfig};
use rescue_graph::{shortest_paths, Capability, Leg};
use rescue_output::{CsvWriter, SimOutputObserver};
use rescue_scenario::{load_roster_reader, parse_map, resolve_vertex};
use rescue_search::{Action, ActionSource, AgentView, IllegalAction};
use rescue_sim::SimBuilder;

// ── Scenario ──────────────────────────────────────────────────────────────────

const MAP: &str = "\
; flood_small: river district after the levee break
#N 8
#Q 2
#U 1
#P 2
#V3 P2          ; school roof
#V6 P1          ; farmhouse
#V8 P3 K        ; clinic
#E1 1 2 W2
#E2 2 3 W3 F
#E3 1 4 W1
#E4 4 5 W2
#E5 5 3 W4
#E6 5 6 W2 F
#E7 6 7 W1
#E8 7 8 W2
#E9 4 7 W6
#E10 2 8 W4 F
";

const ROSTER_CSV: &str = "\
agent,strategy,start,limit,lookahead\n\
0,astar,V1,10000,\n\
1,greedy_search,V1,,\n\
2,rta,V5,,4\n\
3,thief,V7,,\n\
4,stupid_greedy,V2,,\n\
";

/// Everything except Q / U / P, which come from the map.
const CONFIG_JSON: &str = r#"{
    "expansion_time": 0.05,
    "max_turns_per_agent": 500,
    "target_mode": "cooperative"
}"#;

const HUMAN_START: &str = "V4";

// ── External agent ────────────────────────────────────────────────────────────

/// Walks the cheapest route to the nearest remaining target, one action per
/// turn, recomputing every time it is asked.
struct NearestRunner;

impl ActionSource for NearestRunner {
    fn next_action(&mut self, view: &AgentView<'_>) -> Option<Action> {
        let here = view.state.node;
        let paths = shortest_paths(view.graph, view.costs, here, Capability::Toggling(view.state.equipped));
        let target = view
            .state
            .remaining
            .iter()
            .filter(|&t| paths.is_reachable(t))
            .min_by(|&a, &b| paths.dist(a).total_cmp(&paths.dist(b)).then(a.cmp(&b)))?;
        let route = paths.route_to(target)?;
        match route.legs.first()? {
            Leg::Traverse(edge) => Some(Action::Move { edge: *edge, to: view.graph.edge_to[edge.index()] }),
            Leg::Equip => Some(Action::Equip),
            Leg::Unequip => Some(Action::Unequip),
        }
    }

    fn on_rejected(&mut self, action: &Action, reason: &IllegalAction) {
        tracing::warn!(?action, %reason, "runner action rejected");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== flood_small — flood-rescue simulator ===");

    // 1. Map, roster and config.
    let map = parse_map(MAP).context("parsing map")?;
    let specs = load_roster_reader(Cursor::new(ROSTER_CSV), &map.graph).context("loading roster")?;
    let base: SimConfig = serde_json::from_str(CONFIG_JSON).context("parsing config")?;
    let config = map.sim_config(base);
    let human_start = resolve_vertex(&map.graph, HUMAN_START)
        .with_context(|| format!("unknown start vertex {HUMAN_START}"))?;

    println!(
        "Map: {} vertices, {} arcs, {} people at {} targets",
        map.graph.node_count(),
        map.graph.edge_count(),
        map.total_people(),
        map.targets.len()
    );
    println!(
        "Costs: Q={} U={} P={}  |  T={} per expansion",
        config.costs.equip_cost,
        config.costs.unequip_cost,
        config.costs.flood_penalty,
        config.expansion_time
    );
    println!();

    // 2. Build sim.
    let graph = map.graph.clone();
    let map_people = map.total_people();
    let mut sim = SimBuilder::new(map.graph, config)
        .people(map.people.clone())
        .agents(specs)
        .human(human_start, NearestRunner)
        .build()?;

    // 3. Output.
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("output/flood_small"));
    std::fs::create_dir_all(&out_dir)?;
    let mut obs = SimOutputObserver::new(CsvWriter::new(&out_dir)?);

    // 4. Run.
    let t0 = Instant::now();
    let outcome = sim.run(&mut obs)?;
    let elapsed = t0.elapsed();
    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }
    std::fs::write(out_dir.join("outcome.json"), serde_json::to_string_pretty(&outcome)?)?;

    println!("Simulation complete in {:.3} s ({} turns)", elapsed.as_secs_f64(), outcome.turns);
    println!("  output written to {}", out_dir.display());
    println!();

    // 5. Results table.
    println!(
        "{:<6} {:<18} {:<26} {:>8} {:>9} {:>6} {:>6} {:>9} {:<12}",
        "Agent", "Strategy", "Status", "Cost", "Time", "Exp", "Saved", "Score", "Rescued"
    );
    println!("{}", "-".repeat(109));
    for a in &outcome.agents {
        let rescued: Vec<&str> = a.targets_reached.iter().map(|&t| graph.label(t)).collect();
        println!(
            "{:<6} {:<18} {:<26} {:>8.2} {:>9.2} {:>6} {:>6} {:>9.2} {:<12}",
            a.agent.0,
            a.strategy.to_string(),
            a.status.to_string(),
            a.path_cost,
            a.world_time.secs(),
            a.expansions,
            a.people_saved,
            a.score(),
            rescued.join(","),
        );
    }
    println!();

    if !outcome.unclaimed.is_empty() {
        let left: Vec<&str> = outcome.unclaimed.iter().map(|&t: &NodeId| graph.label(t)).collect();
        println!("Nobody reached: {}", left.join(", "));
    }
    match outcome.winner() {
        Some(w) => println!(
            "Winner: agent {} ({}) saved {} of {} at t={:.2}",
            w.agent.0,
            w.strategy,
            w.people_saved,
            map_people,
            w.world_time.secs()
        ),
        None => println!("Nobody was saved."),
    }

    Ok(())
}
