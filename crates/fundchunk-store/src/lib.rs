//! # Fundchunk Store
//!
//! Read-only lookups against the fund mapping store, a SQLite database
//! with one `fund_mapping` table. The pipeline treats this store as an
//! external collaborator: any failure here is absorbed by the caller into
//! a [`FundLookup::Unavailable`] marker and never affects chunking.
//!
//! Lookup semantics follow the mapping-table conventions: a numeric map id
//! takes priority over a free-text identifier, free text matches with
//! `LIKE` across fund name, short name and management company, and when
//! several rows match the first (lowest map id) wins with a logged
//! warning.

use fundchunk_core::{FundLookup, FundRecord, FundchunkError, Result};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

/// Schema of the mapping table, used by tooling and tests to seed a store.
pub const FUND_MAPPING_SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS fund_mapping (
    map_id INTEGER PRIMARY KEY,
    management_company TEXT NOT NULL,
    fund_name TEXT NOT NULL,
    fund_short_name TEXT NOT NULL,
    asset_class TEXT NOT NULL,
    currency TEXT NOT NULL
);
";

const SELECT_COLUMNS: &str =
    "SELECT map_id, management_company, fund_name, fund_short_name, asset_class, currency \
     FROM fund_mapping";

/// A fund lookup query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FundQuery {
    /// Exact mapping key
    MapId(i64),
    /// Free-text identifier matched against names and manager
    Name(String),
}

/// Read-only handle on the fund mapping store.
pub struct FundStore {
    conn: Connection,
}

impl FundStore {
    /// Open an existing store read-only.
    ///
    /// # Errors
    /// Returns [`FundchunkError::Store`] when the file cannot be opened as
    /// a SQLite database.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|e| FundchunkError::Store(format!("cannot open {}: {e}", path.display())))?;
        Ok(Self { conn })
    }

    /// Create a store at `path` with the mapping schema, for seeding.
    ///
    /// # Errors
    /// Returns [`FundchunkError::Store`] when creation fails.
    pub fn create(path: &Path) -> Result<Connection> {
        let conn = Connection::open(path)
            .map_err(|e| FundchunkError::Store(format!("cannot create {}: {e}", path.display())))?;
        conn.execute_batch(FUND_MAPPING_SCHEMA)
            .map_err(|e| FundchunkError::Store(e.to_string()))?;
        Ok(conn)
    }

    /// Look up the best-matching fund record.
    ///
    /// Returns `Ok(None)` when nothing matches. Multiple matches resolve
    /// to the first row in map-id order, with a warning.
    ///
    /// # Errors
    /// Returns [`FundchunkError::Store`] on query failure.
    pub fn lookup(&self, query: &FundQuery) -> Result<Option<FundRecord>> {
        let (sql, pattern) = match query {
            FundQuery::MapId(_) => (
                format!("{SELECT_COLUMNS} WHERE map_id = ?1 ORDER BY map_id"),
                String::new(),
            ),
            FundQuery::Name(name) => (
                format!(
                    "{SELECT_COLUMNS} WHERE fund_name LIKE ?1 OR fund_short_name LIKE ?1 \
                     OR management_company LIKE ?1 ORDER BY map_id"
                ),
                format!("%{name}%"),
            ),
        };

        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|e| FundchunkError::Store(e.to_string()))?;

        let map_row = |row: &rusqlite::Row<'_>| -> rusqlite::Result<FundRecord> {
            Ok(FundRecord {
                map_id: row.get(0)?,
                management_company: row.get(1)?,
                fund_name: row.get(2)?,
                fund_short_name: row.get(3)?,
                asset_class: row.get(4)?,
                currency: row.get(5)?,
            })
        };

        let rows = match query {
            FundQuery::MapId(id) => stmt.query_map([id], map_row),
            FundQuery::Name(_) => stmt.query_map([&pattern], map_row),
        }
        .map_err(|e| FundchunkError::Store(e.to_string()))?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row.map_err(|e| FundchunkError::Store(e.to_string()))?);
        }

        if records.len() > 1 {
            log::warn!(
                "{} fund records match {:?}; taking map_id {}",
                records.len(),
                query,
                records[0].map_id
            );
        }

        Ok(records.into_iter().next())
    }

    /// Lookup variant that absorbs every failure into a
    /// [`FundLookup::Unavailable`] marker.
    #[must_use = "the lookup outcome is returned but not used"]
    pub fn lookup_or_unavailable(&self, query: &FundQuery) -> FundLookup {
        match self.lookup(query) {
            Ok(Some(record)) => FundLookup::Found { record },
            Ok(None) => FundLookup::unavailable("no data found in fund store"),
            Err(e) => {
                log::warn!("fund lookup failed: {e}");
                FundLookup::unavailable(e.to_string())
            }
        }
    }
}
