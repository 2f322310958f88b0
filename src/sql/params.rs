//! Bind values for SQLite statements.

use sqlx::encode::{Encode, IsNull};
use sqlx::sqlite::{Sqlite, SqliteTypeInfo};
use sqlx::Database;

/// A value that can be bound to a SQLite query.
#[derive(Clone, Debug, PartialEq)]
pub enum SqlValue {
    Integer(i64),
    Real(f64),
    Text(String),
}

impl SqlValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SqlValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Integer(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::Real(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<&String> for SqlValue {
    fn from(v: &String) -> Self {
        SqlValue::Text(v.clone())
    }
}

impl<'q> Encode<'q, Sqlite> for SqlValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Sqlite as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        match self {
            SqlValue::Integer(n) => <i64 as Encode<Sqlite>>::encode_by_ref(n, buf),
            SqlValue::Real(n) => <f64 as Encode<Sqlite>>::encode_by_ref(n, buf),
            SqlValue::Text(s) => <String as Encode<Sqlite>>::encode_by_ref(s, buf),
        }
    }
}

impl sqlx::Type<Sqlite> for SqlValue {
    fn type_info() -> SqliteTypeInfo {
        <String as sqlx::Type<Sqlite>>::type_info()
    }
}
