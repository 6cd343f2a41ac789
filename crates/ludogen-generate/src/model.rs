use serde::{Deserialize, Serialize};

/// Row count for one generated table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableReport {
    pub table: String,
    pub rows: u64,
}

/// Summary of a generation run. Carries counts only, never PII.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub tables: Vec<TableReport>,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String) -> Self {
        Self {
            run_id,
            tables: Vec::new(),
            duration_ms: 0,
        }
    }

    pub fn record_table(&mut self, table: &str, rows: usize) {
        self.tables.push(TableReport {
            table: table.to_string(),
            rows: rows as u64,
        });
    }

    pub fn rows_for(&self, table: &str) -> u64 {
        self.tables
            .iter()
            .find(|t| t.table == table)
            .map(|t| t.rows)
            .unwrap_or(0)
    }

    /// One-line audit summary of the run.
    pub fn summary(&self) -> String {
        format!(
            "Generated {} users, {} games, {} contributors",
            self.rows_for("users"),
            self.rows_for("videogames"),
            self.rows_for("contributors"),
        )
    }
}
