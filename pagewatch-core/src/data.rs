use pagewatch_checker::CheckResult;
use rusqlite::{Connection, OptionalExtension, Result, params};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

pub struct Database {
    conn: Connection,
}

/// A registered page. `name` is the canonical `scheme://authority` form
/// and is unique across the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecord {
    pub id: i64,
    pub name: String,
    pub created_at: i64,
}

/// One stored check of a registered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRecord {
    pub id: i64,
    pub url_id: i64,
    pub status_code: u16,
    pub h1: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub created_at: i64,
}

/// Listing row: a page plus its newest check, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlSummary {
    pub id: i64,
    pub name: String,
    pub created_at: i64,
    pub last_check_at: Option<i64>,
    pub last_status_code: Option<u16>,
}

fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

impl Database {
    pub fn drop(path: &Path) {
        fs::remove_file(path).unwrap();
    }

    pub fn exists(path: &Path) -> bool {
        path.exists()
    }

    pub fn new(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA temp_store = MEMORY;
            PRAGMA foreign_keys = ON;
            ",
        )?;

        let db = Database { conn };
        db.init_schema()?;
        Ok(db)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "
            -- Registered pages, keyed by canonical URL
            CREATE TABLE IF NOT EXISTS urls (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                created_at INTEGER NOT NULL
            );

            -- One row per executed check
            CREATE TABLE IF NOT EXISTS url_checks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                url_id INTEGER NOT NULL,
                status_code INTEGER NOT NULL,
                h1 TEXT,
                title TEXT,
                description TEXT,
                created_at INTEGER NOT NULL,
                FOREIGN KEY(url_id) REFERENCES urls(id) ON DELETE CASCADE
            );

            CREATE INDEX IF NOT EXISTS idx_url_checks_url ON url_checks(url_id);
            CREATE INDEX IF NOT EXISTS idx_url_checks_created
                ON url_checks(url_id, created_at);
            ",
        )?;
        Ok(())
    }

    // Url operations

    pub fn insert_url(&self, name: &str) -> Result<i64> {
        let timestamp = current_timestamp();

        self.conn.execute(
            "INSERT INTO urls (name, created_at) VALUES (?1, ?2)",
            params![name, timestamp],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_url_by_name(&self, name: &str) -> Result<Option<UrlRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, created_at FROM urls WHERE name = ?1")?;

        stmt.query_row(params![name], |row| {
            Ok(UrlRecord {
                id: row.get(0)?,
                name: row.get(1)?,
                created_at: row.get(2)?,
            })
        })
        .optional()
    }

    pub fn get_url_by_id(&self, url_id: i64) -> Result<Option<UrlRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, created_at FROM urls WHERE id = ?1")?;

        stmt.query_row(params![url_id], |row| {
            Ok(UrlRecord {
                id: row.get(0)?,
                name: row.get(1)?,
                created_at: row.get(2)?,
            })
        })
        .optional()
    }

    /// All registered pages, newest first, each joined with its latest
    /// check.
    pub fn list_urls(&self) -> Result<Vec<UrlSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT u.id, u.name, u.created_at, c.created_at, c.status_code
             FROM urls u
             LEFT JOIN url_checks c ON c.id = (
                 SELECT id FROM url_checks
                 WHERE url_id = u.id
                 ORDER BY created_at DESC, id DESC
                 LIMIT 1
             )
             ORDER BY u.created_at DESC, u.id DESC",
        )?;

        let summaries = stmt
            .query_map([], |row| {
                Ok(UrlSummary {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    created_at: row.get(2)?,
                    last_check_at: row.get(3)?,
                    last_status_code: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>>>()?;

        Ok(summaries)
    }

    // Check operations

    pub fn insert_check(&self, url_id: i64, result: &CheckResult) -> Result<i64> {
        let timestamp = current_timestamp();

        self.conn.execute(
            "INSERT INTO url_checks
             (url_id, status_code, h1, title, description, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                url_id,
                result.status_code,
                &result.h1,
                &result.title,
                &result.description,
                timestamp,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_check(&self, check_id: i64) -> Result<Option<CheckRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, url_id, status_code, h1, title, description, created_at
             FROM url_checks WHERE id = ?1",
        )?;

        stmt.query_row(params![check_id], |row| {
            Ok(CheckRecord {
                id: row.get(0)?,
                url_id: row.get(1)?,
                status_code: row.get(2)?,
                h1: row.get(3)?,
                title: row.get(4)?,
                description: row.get(5)?,
                created_at: row.get(6)?,
            })
        })
        .optional()
    }

    /// Check history for one page, newest first.
    pub fn get_checks_by_url(&self, url_id: i64) -> Result<Vec<CheckRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, url_id, status_code, h1, title, description, created_at
             FROM url_checks
             WHERE url_id = ?1
             ORDER BY created_at DESC, id DESC",
        )?;

        let checks = stmt
            .query_map(params![url_id], |row| {
                Ok(CheckRecord {
                    id: row.get(0)?,
                    url_id: row.get(1)?,
                    status_code: row.get(2)?,
                    h1: row.get(3)?,
                    title: row.get(4)?,
                    description: row.get(5)?,
                    created_at: row.get(6)?,
                })
            })?
            .collect::<Result<Vec<_>>>()?;

        Ok(checks)
    }

    pub fn get_connection(&self) -> &Connection {
        &self.conn
    }
}
