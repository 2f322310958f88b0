//! Row and input shapes for users, products and orders.

mod order;
mod product;
mod user;

pub use order::{Order, OrderIn, DEFAULT_ORDER_DATE};
pub use product::{Product, ProductIn};
pub use user::{User, UserIn};

use crate::sql::SqlValue;
use crate::tables::Table;
use serde::Serialize;
use sqlx::sqlite::SqliteRow;

/// Input shape of a resource: its writable fields, no id.
pub trait Writable {
    const TABLE: &'static Table;

    /// Column/value pairs in table column order.
    fn values(&self) -> Vec<(&'static str, SqlValue)>;
}

/// A stored row that can be listed, read and written through `CrudService`.
pub trait Resource: for<'r> sqlx::FromRow<'r, SqliteRow> + Serialize + Send + Unpin + 'static {
    type Input: Writable + Sync;

    fn table() -> &'static Table {
        <Self::Input as Writable>::TABLE
    }
}
