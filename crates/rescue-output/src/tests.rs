//! Integration tests for rescue-output.

#[cfg(test)]
mod helpers {
    use rescue_core::{CostModel, NodeId, SimConfig};
    use rescue_graph::FloodGraphBuilder;
    use rescue_search::StrategyKind;
    use rescue_sim::{AgentSpec, AgentStatus, Sim, SimBuilder, StuckReason};

    use crate::{AgentSummaryRow, EventRow};

    pub fn moved_row() -> EventRow {
        EventRow {
            at:         1.0,
            agent:      0,
            kind:       "moved",
            from:       Some(0),
            to:         Some(1),
            cost:       Some(1.0),
            expansions: None,
            detail:     String::new(),
        }
    }

    pub fn summary_row(agent: u32) -> AgentSummaryRow {
        AgentSummaryRow {
            agent,
            strategy:        "thief".to_owned(),
            status:          AgentStatus::Stuck(StuckReason::TurnLimit).to_string(),
            path_cost:       4.5,
            world_time:      4.5,
            expansions:      12,
            turns:           3,
            targets_reached: 1,
            people_saved:    4,
        }
    }

    /// `A ──1── B ~~1~~ C` with one A* agent at A and a target at C.
    pub fn small_sim() -> Sim {
        let mut b = FloodGraphBuilder::new();
        let a = b.add_node("A");
        let bb = b.add_node("B");
        let c = b.add_node("C");
        b.add_road(a, bb, 1.0, false);
        b.add_road(bb, c, 1.0, true);
        let config = SimConfig { costs: CostModel::new(2.0, 1.0, 3.0), ..SimConfig::default() };
        SimBuilder::new(b.build().unwrap(), config)
            .targets([c])
            .agent(AgentSpec::new(StrategyKind::AStar { limit: 1000 }, NodeId(0)))
            .build()
            .unwrap()
    }
}

#[cfg(test)]
mod row_tests {
    use rescue_core::{AgentId, NodeId, SimTime};
    use rescue_search::IllegalAction;
    use rescue_sim::{SimEvent, StuckReason};

    use crate::EventRow;

    #[test]
    fn moved_fills_endpoints_and_cost() {
        let event = SimEvent::Moved { agent: AgentId(2), from: NodeId(0), to: NodeId(3), cost: 1.5 };
        let row = EventRow::from_event(SimTime(4.0), &event);
        assert_eq!(row.agent, 2);
        assert_eq!(row.kind, "moved");
        assert_eq!((row.from, row.to, row.cost), (Some(0), Some(3), Some(1.5)));
        assert_eq!(row.expansions, None);
        assert!(row.detail.is_empty());
    }

    #[test]
    fn stuck_carries_reason() {
        let event = SimEvent::AgentStuck {
            agent:      AgentId(0),
            reason:     StuckReason::PlanningExhausted,
            expansions: 50,
        };
        let row = EventRow::from_event(SimTime(5.0), &event);
        assert_eq!(row.kind, "agent_stuck");
        assert_eq!(row.expansions, Some(50));
        assert_eq!(row.detail, "planning_exhausted");
    }

    #[test]
    fn rejection_detail_is_readable() {
        let event = SimEvent::ActionRejected { agent: AgentId(1), reason: IllegalAction::NotEquipped };
        let row = EventRow::from_event(SimTime::ZERO, &event);
        assert_eq!(row.kind, "action_rejected");
        assert!(!row.detail.is_empty());
        assert_eq!(row.cost, None);
    }

    #[test]
    fn target_reached_records_people() {
        let event = SimEvent::TargetReached { agent: AgentId(1), target: NodeId(6), people: 3 };
        let row = EventRow::from_event(SimTime(2.0), &event);
        assert_eq!(row.kind, "target_reached");
        assert_eq!(row.to, Some(6));
        assert_eq!(row.detail, "people=3");
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::helpers::{moved_row, small_sim, summary_row};
    use crate::csv::{CsvWriter, EVENT_HEADERS, SUMMARY_HEADERS};
    use crate::observer::SimOutputObserver;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("events.csv").exists());
        assert!(dir.path().join("agent_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("events.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, EVENT_HEADERS);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("agent_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, SUMMARY_HEADERS);
    }

    #[test]
    fn csv_event_columns() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_events(&[moved_row()]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("events.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][2], "moved");
        assert_eq!(&rows[0][3], "0"); // from
        assert_eq!(&rows[0][4], "1"); // to
        assert_eq!(&rows[0][6], "");  // expansions n/a
    }

    #[test]
    fn csv_summary_columns() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_summaries(&[summary_row(3)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "thief");
        assert_eq!(&rows[0][2], "stuck:turn_limit");
        assert_eq!(&rows[0][7], "1");
        assert_eq!(&rows[0][8], "4");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn integration_csv() {
        let mut sim = small_sim();
        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        let outcome = sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // plan, move, equip, move, target, finished
        let mut rdr = csv::Reader::from_path(dir.path().join("events.csv")).unwrap();
        let kinds: Vec<String> = rdr.records().map(|r| r.unwrap()[2].to_owned()).collect();
        assert_eq!(
            kinds,
            ["plan_committed", "moved", "equipped", "moved", "target_reached", "agent_finished"]
        );

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), outcome.agents.len());
        assert_eq!(&rows[0][2], "finished");
        assert_eq!(rows[0][3].parse::<f64>().unwrap(), 6.0);
        assert_eq!(&rows[0][8], "1");
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use super::helpers::{moved_row, small_sim, summary_row};
    use crate::observer::SimOutputObserver;
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_missing_columns_are_null() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_events(&[moved_row()]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (to, expansions): (i64, Option<i64>) = conn
            .query_row("SELECT to_node, expansions FROM events", [], |r| Ok((r.get(0)?, r.get(1)?)))
            .unwrap();
        assert_eq!(to, 1);
        assert_eq!(expansions, None);
    }

    #[test]
    fn sqlite_summary() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_summaries(&[summary_row(7)]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (status, expansions, saved): (String, i64, i64) = conn
            .query_row(
                "SELECT status, expansions, people_saved FROM agent_summaries WHERE agent = 7",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )
            .unwrap();
        assert_eq!(status, "stuck:turn_limit");
        assert_eq!(expansions, 12);
        assert_eq!(saved, 4);
    }

    #[test]
    fn integration_sqlite() {
        let mut sim = small_sim();
        let dir = tmp();
        let writer = SqliteWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM events", [], |r| r.get(0)).unwrap();
        assert_eq!(count, 6);
        let kind: String = conn
            .query_row("SELECT kind FROM events ORDER BY seq DESC LIMIT 1", [], |r| r.get(0))
            .unwrap();
        assert_eq!(kind, "agent_finished");
        let finished: i64 = conn
            .query_row("SELECT COUNT(*) FROM agent_summaries WHERE agent = 0", [], |r| r.get(0))
            .unwrap();
        assert_eq!(finished, 1);
    }
}
