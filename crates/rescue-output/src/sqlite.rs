//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `events` and `agent_summaries`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{AgentSummaryRow, EventRow, OutputResult};

/// Writes run output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS events (
                 seq        INTEGER PRIMARY KEY AUTOINCREMENT,
                 at         REAL    NOT NULL,
                 agent      INTEGER NOT NULL,
                 kind       TEXT    NOT NULL,
                 from_node  INTEGER,
                 to_node    INTEGER,
                 cost       REAL,
                 expansions INTEGER,
                 detail     TEXT    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS agent_summaries (
                 agent           INTEGER PRIMARY KEY,
                 strategy        TEXT    NOT NULL,
                 status          TEXT    NOT NULL,
                 path_cost       REAL    NOT NULL,
                 world_time      REAL    NOT NULL,
                 expansions      INTEGER NOT NULL,
                 turns           INTEGER NOT NULL,
                 targets_reached INTEGER NOT NULL,
                 people_saved    INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO events \
                 (at, agent, kind, from_node, to_node, cost, expansions, detail) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.at,
                    row.agent,
                    row.kind,
                    row.from,
                    row.to,
                    row.cost,
                    row.expansions.map(|e| e as i64),
                    row.detail,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_summaries(&mut self, rows: &[AgentSummaryRow]) -> OutputResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO agent_summaries \
                 (agent, strategy, status, path_cost, world_time, expansions, turns, targets_reached, people_saved) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.agent,
                    row.strategy,
                    row.status,
                    row.path_cost,
                    row.world_time,
                    row.expansions as i64,
                    row.turns as i64,
                    row.targets_reached,
                    row.people_saved,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
