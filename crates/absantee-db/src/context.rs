//! Persistence context and its unit-of-work scopes.
//!
//! A [`DataContext`] wraps the connection pool shared with the rest of the
//! application. Work happens in a [`DataScope`]: adds and removals are queued,
//! reads through the scope first flush the queue into the scope's open
//! transaction (so the scope observes its own writes), and
//! [`DataScope::save_changes`] commits everything as one transaction.
//!
//! If any statement fails while flushing or committing, the transaction is
//! rolled back and every pending change is discarded. Dropping a scope with an
//! uncommitted transaction rolls it back as well.

use std::mem;

use absantee_core::{ColumnValue, EntityConfig, PersistenceError};
use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};
use tracing::{debug, warn};

use crate::entity::{Entity, Insertable, bind_values};
use crate::error::map_sqlx;
use crate::schema::{delete_all_sql, insert_sql, select_all_sql};

/// Handle to the backing store.
///
/// Cheap to clone; every clone shares the same pool.
#[derive(Clone)]
pub struct DataContext {
    pool: SqlitePool,
}

impl DataContext {
    /// Create a context over an initialized pool (see [`crate::setup_database`]).
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a new unit-of-work scope.
    pub fn open_scope(&self) -> DataScope {
        DataScope {
            pool: self.pool.clone(),
            tx: None,
            pending: Vec::new(),
            flushed: 0,
        }
    }

    /// The underlying pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

enum PendingChange {
    Insert {
        config: &'static EntityConfig,
        values: Vec<ColumnValue>,
    },
    RemoveAll {
        config: &'static EntityConfig,
    },
}

impl PendingChange {
    const fn table(&self) -> &'static str {
        match self {
            Self::Insert { config, .. } | Self::RemoveAll { config } => config.table,
        }
    }

    async fn apply(&self, conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
        match self {
            Self::Insert { config, values } => {
                let sql = insert_sql(config);
                bind_values(sqlx::query(&sql), values.clone())
                    .execute(conn)
                    .await?;
            }
            Self::RemoveAll { config } => {
                let sql = delete_all_sql(config);
                sqlx::query(&sql).execute(conn).await?;
            }
        }
        Ok(())
    }
}

/// A bounded unit of work over a [`DataContext`].
pub struct DataScope {
    pool: SqlitePool,
    tx: Option<Transaction<'static, Sqlite>>,
    pending: Vec<PendingChange>,
    /// Changes applied to `tx` but not yet committed.
    flushed: usize,
}

impl DataScope {
    /// Queue a new row for insertion.
    ///
    /// The row is checked against the entity configuration immediately;
    /// storage-level failures surface from [`Self::save_changes`].
    pub fn add<N: Insertable>(&mut self, new: &N) -> Result<(), PersistenceError> {
        let config = N::Entity::config();
        let values = new.values();
        config.validate(&values)?;
        self.pending.push(PendingChange::Insert { config, values });
        Ok(())
    }

    /// Queue removal of every row of `T`.
    pub fn remove_all<T: Entity>(&mut self) {
        self.pending.push(PendingChange::RemoveAll {
            config: T::config(),
        });
    }

    /// Whether the scope holds queued or uncommitted changes.
    pub fn has_pending_changes(&self) -> bool {
        !self.pending.is_empty() || self.flushed > 0
    }

    /// All rows of `T` in insertion order, including this scope's own
    /// uncommitted changes.
    pub async fn entities<T: Entity>(&mut self) -> Result<Vec<T>, PersistenceError> {
        self.flush().await?;

        let sql = select_all_sql(T::config());
        let rows = match self.tx.as_mut() {
            Some(tx) => sqlx::query(&sql).fetch_all(&mut **tx).await,
            None => sqlx::query(&sql).fetch_all(&self.pool).await,
        }
        .map_err(map_sqlx)?;

        rows.iter().map(T::from_row).collect()
    }

    /// Commit every pending change atomically.
    ///
    /// Returns the number of changes committed. On error nothing is applied.
    pub async fn save_changes(&mut self) -> Result<usize, PersistenceError> {
        self.flush().await?;

        let Some(tx) = self.tx.take() else {
            return Ok(0);
        };
        let applied = mem::take(&mut self.flushed);

        if let Err(e) = tx.commit().await {
            warn!(error = %e, applied, "Commit failed, changes discarded");
            return Err(map_sqlx(e));
        }

        debug!(applied, "Scope changes committed");
        Ok(applied)
    }

    /// Drop queued changes and roll back anything already flushed.
    pub async fn discard_changes(&mut self) -> Result<(), PersistenceError> {
        self.pending.clear();
        self.flushed = 0;
        if let Some(tx) = self.tx.take() {
            tx.rollback().await.map_err(map_sqlx)?;
        }
        Ok(())
    }

    /// Apply queued changes to the scope's transaction, opening it if needed.
    async fn flush(&mut self) -> Result<(), PersistenceError> {
        if self.pending.is_empty() {
            return Ok(());
        }

        let pending = mem::take(&mut self.pending);
        let tx = match self.tx.take() {
            Some(tx) => tx,
            None => self.pool.begin().await.map_err(map_sqlx)?,
        };
        let tx = self.tx.insert(tx);

        for change in &pending {
            if let Err(e) = change.apply(&mut **tx).await {
                warn!(table = change.table(), error = %e, "Change rejected, rolling back scope");
                self.flushed = 0;
                if let Some(tx) = self.tx.take() {
                    if let Err(rollback) = tx.rollback().await {
                        warn!(error = %rollback, "Rollback failed");
                    }
                }
                return Err(map_sqlx(e));
            }
        }

        self.flushed += pending.len();
        Ok(())
    }
}

impl Drop for DataScope {
    fn drop(&mut self) {
        if self.has_pending_changes() {
            debug!(
                queued = self.pending.len(),
                flushed = self.flushed,
                "Scope dropped with uncommitted changes, rolling back"
            );
        }
    }
}
