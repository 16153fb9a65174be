// src/store.rs

use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};
use sqlx::PgPool;

use crate::error::AppError;

/// The collections the store knows about.
/// A closed enum keeps table names static (no dynamic SQL identifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Assessments,
    ContactRequests,
}

impl Collection {
    fn table(self) -> &'static str {
        match self {
            Collection::Assessments => "assessments",
            Collection::ContactRequests => "contact_requests",
        }
    }
}

/// Append-only persistence facade over the collection tables.
///
/// Records are persisted as JSONB documents; the store interprets no field
/// semantics beyond the sort key, which is duplicated into a native
/// TIMESTAMPTZ column at insert time. There is no update or delete path.
#[derive(Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Writes one immutable record. Exactly one statement; no retry logic,
    /// a storage failure propagates directly to the caller.
    pub async fn insert<T: Serialize>(
        &self,
        collection: Collection,
        timestamp: DateTime<Utc>,
        record: &T,
    ) -> Result<(), AppError> {
        let doc = serde_json::to_value(record)?;
        let sql = format!("INSERT INTO {} (ts, doc) VALUES ($1, $2)", collection.table());

        sqlx::query(&sql)
            .bind(timestamp)
            .bind(doc)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Returns all records in the collection ordered newest-first, bounded
    /// by `limit`.
    pub async fn list_all<T: DeserializeOwned>(
        &self,
        collection: Collection,
        limit: i64,
    ) -> Result<Vec<T>, AppError> {
        let sql = format!(
            "SELECT doc FROM {} ORDER BY ts DESC LIMIT $1",
            collection.table()
        );

        let rows: Vec<(serde_json::Value,)> = sqlx::query_as(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|(doc,)| serde_json::from_value(doc).map_err(AppError::from))
            .collect()
    }

    /// Releases the underlying pool. Called once at shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
