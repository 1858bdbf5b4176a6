//! Seed database for test environments.
//!
//! Opens the suite's SQLite database and executes a seed script against
//! it. The database file may be provisioned by an external process, so
//! connection establishment retries on a fixed interval up to a fixed
//! timeout before giving up. The script's schema content is owned by the
//! suite; this module only executes it.

use crate::result::{AprobarError, AprobarResult};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Fixed-interval retry policy for connection establishment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total time to keep retrying
    pub timeout: Duration,
    /// Pause between attempts
    pub interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            interval: Duration::from_secs(5),
        }
    }
}

/// Connection to the suite's seed database
#[derive(Debug)]
pub struct SeedDatabase {
    conn: Connection,
}

impl SeedDatabase {
    /// Open the database at `path` with a single attempt.
    ///
    /// # Errors
    ///
    /// Returns a database error when the file cannot be opened or the
    /// connection does not answer a probe query.
    pub fn connect(path: &Path) -> AprobarResult<Self> {
        let conn = Connection::open(path)?;
        // Probe the connection so an unusable database fails here, not
        // in the middle of the seed script.
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
        debug!("Connected to database at {}", path.display());
        Ok(Self { conn })
    }

    /// Open the database, retrying on a fixed interval until `policy`'s
    /// timeout elapses.
    ///
    /// # Errors
    ///
    /// Returns [`AprobarError::DatabaseTimeout`] when no attempt succeeds
    /// within the timeout.
    pub fn connect_with_retry(path: &Path, policy: RetryPolicy) -> AprobarResult<Self> {
        let start = Instant::now();
        loop {
            match Self::connect(path) {
                Ok(db) => {
                    info!("Connected to database at {}", path.display());
                    return Ok(db);
                }
                Err(e) => {
                    if start.elapsed() >= policy.timeout {
                        return Err(AprobarError::DatabaseTimeout {
                            seconds: policy.timeout.as_secs(),
                        });
                    }
                    warn!(
                        "Could not connect to {}: {e}; retrying in {}s",
                        path.display(),
                        policy.interval.as_secs()
                    );
                    std::thread::sleep(policy.interval);
                }
            }
        }
    }

    /// Open an in-memory database (for testing)
    ///
    /// # Errors
    ///
    /// Returns a database error when SQLite cannot allocate the
    /// connection.
    pub fn open_in_memory() -> AprobarResult<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Execute a SQL seed script file as a single batch.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the script cannot be read and a database
    /// error when a statement fails.
    pub fn run_script(&self, script: &Path) -> AprobarResult<()> {
        let sql = std::fs::read_to_string(script)?;
        self.execute_batch(&sql)?;
        info!("Executed seed script {}", script.display());
        Ok(())
    }

    /// Execute a batch of SQL statements.
    ///
    /// # Errors
    ///
    /// Returns a database error when a statement fails.
    pub fn execute_batch(&self, sql: &str) -> AprobarResult<()> {
        self.conn.execute_batch(sql)?;
        Ok(())
    }

    /// Check whether a table exists.
    ///
    /// # Errors
    ///
    /// Returns a database error when the catalog query fails.
    pub fn table_exists(&self, name: &str) -> AprobarResult<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [name],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}
