//! Store Module
//!
//! Durable backing collection of items, held in SQLite.
//!
//! Every operation runs the blocking SQLite call on tokio's blocking pool, so
//! a slow store never stalls the async workers or the cache lock.

pub mod schema;

use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use crate::error::{ItemError, Result};
use crate::models::Item;

// == Item Store ==
/// Handle to the items table. Cloning shares the underlying connection.
#[derive(Clone)]
pub struct ItemStore {
    conn: Arc<Mutex<Connection>>,
}

impl std::fmt::Debug for ItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemStore").finish_non_exhaustive()
    }
}

impl ItemStore {
    // == Constructors ==
    /// Opens (or creates) the database at `path`, checks it answers queries
    /// and ensures the items table exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|e| {
            ItemError::Store(format!("failed to open database at {}: {}", path.display(), e))
        })?;
        Self::from_connection(conn)
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
        conn.execute_batch(schema::SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    // == Blocking Bridge ==
    async fn run<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn
                .lock()
                .map_err(|_| ItemError::Store("connection lock poisoned".to_string()))?;
            op(&guard)
        })
        .await
        .map_err(|e| ItemError::Store(format!("store task failed: {}", e)))?
    }

    // == Insert ==
    /// Persists a new row and returns its generated id.
    pub async fn insert(&self, title: String) -> Result<i64> {
        self.run(move |conn| {
            conn.execute("INSERT INTO items (title) VALUES (?1)", params![title])?;
            let id = conn.last_insert_rowid();
            debug!(id, "inserted item row");
            Ok(id)
        })
        .await
    }

    // == Get By Id ==
    /// Looks up a single row; `NotFound` when no row matches.
    pub async fn get_by_id(&self, id: i64) -> Result<Item> {
        self.run(move |conn| {
            conn.query_row(
                "SELECT id, title FROM items WHERE id = ?1",
                params![id],
                |row| Ok(Item::new(row.get(0)?, row.get::<_, String>(1)?)),
            )
            .optional()?
            .ok_or(ItemError::NotFound(id))
        })
        .await
    }

    // == Get All ==
    /// Returns every row ordered by id.
    ///
    /// A row that fails to decode aborts the whole scan.
    pub async fn get_all(&self) -> Result<Vec<Item>> {
        self.run(|conn| {
            let mut stmt = conn.prepare("SELECT id, title FROM items ORDER BY id")?;
            let items = stmt
                .query_map([], |row| Ok(Item::new(row.get(0)?, row.get::<_, String>(1)?)))?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(items)
        })
        .await
    }

    // == Update By Id ==
    /// Sets the title of row `id` and returns the number of rows affected.
    ///
    /// Zero matched rows is not an error.
    pub async fn update_by_id(&self, id: i64, title: String) -> Result<usize> {
        self.run(move |conn| {
            let affected =
                conn.execute("UPDATE items SET title = ?1 WHERE id = ?2", params![title, id])?;
            Ok(affected)
        })
        .await
    }

    // == Delete By Id ==
    /// Removes row `id` and returns the number of rows affected.
    ///
    /// Zero matched rows is not an error.
    pub async fn delete_by_id(&self, id: i64) -> Result<usize> {
        self.run(move |conn| Ok(conn.execute("DELETE FROM items WHERE id = ?1", params![id])?))
            .await
    }

    /// Drops the items table so every later query fails.
    #[cfg(test)]
    pub(crate) async fn drop_table(&self) {
        self.run(|conn| Ok(conn.execute_batch("DROP TABLE items")?))
            .await
            .unwrap();
    }
}
