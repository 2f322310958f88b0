//! Generic CRUD execution against SQLite.

use crate::error::AppError;
use crate::models::{Resource, Writable};
use crate::sql::{delete, insert, select_by_id, select_exists, select_list, update, QueryBuf};
use crate::tables::Table;
use sqlx::SqlitePool;

pub struct CrudService;

impl CrudService {
    /// All rows in primary key order.
    pub async fn list<R: Resource>(pool: &SqlitePool) -> Result<Vec<R>, AppError> {
        let q = select_list(R::table());
        Self::fetch_all(pool, &q).await
    }

    /// Fetch one row by primary key.
    pub async fn read<R: Resource>(pool: &SqlitePool, id: i64) -> Result<Option<R>, AppError> {
        let q = select_by_id(R::table(), id);
        Self::fetch_optional(pool, &q).await
    }

    /// Insert one row; the store assigns the id. Returns the created row.
    pub async fn create<R: Resource>(pool: &SqlitePool, input: &R::Input) -> Result<R, AppError> {
        let q = insert(R::table(), &input.values());
        Self::fetch_optional(pool, &q)
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }

    /// Replace the writable fields of one row. `None` when no row has that id.
    pub async fn update<R: Resource>(
        pool: &SqlitePool,
        id: i64,
        input: &R::Input,
    ) -> Result<Option<R>, AppError> {
        let q = update(R::table(), id, &input.values());
        Self::fetch_optional(pool, &q).await
    }

    /// Delete one row by id. Returns the affected-row count.
    pub async fn delete(pool: &SqlitePool, table: &Table, id: i64) -> Result<u64, AppError> {
        let q = delete(table, id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "execute");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        let result = query.execute(pool).await?;
        Ok(result.rows_affected())
    }

    /// Whether a row with this id currently exists in `table`.
    pub async fn exists(pool: &SqlitePool, table: &Table, id: i64) -> Result<bool, AppError> {
        let q = select_exists(table, id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.fetch_optional(pool).await?.is_some())
    }

    async fn fetch_all<R: Resource>(pool: &SqlitePool, q: &QueryBuf) -> Result<Vec<R>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, R>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.fetch_all(pool).await?)
    }

    async fn fetch_optional<R: Resource>(
        pool: &SqlitePool,
        q: &QueryBuf,
    ) -> Result<Option<R>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, R>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.fetch_optional(pool).await?)
    }
}
