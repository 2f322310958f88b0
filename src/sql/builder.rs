//! Builds parameterized CREATE, SELECT, INSERT, UPDATE, DELETE from table definitions.

use crate::sql::params::SqlValue;
use crate::tables::Table;

/// Quote identifier for SQLite (safe: only from static table definitions).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: SqlValue) {
        self.params.push(v);
    }
}

fn select_column_list(table: &Table) -> String {
    table
        .columns
        .iter()
        .map(|c| quoted(c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// CREATE TABLE IF NOT EXISTS with widths, defaults and REFERENCES clauses.
/// The integer primary key is the rowid alias, so the store assigns it on insert.
pub fn create_table(table: &Table) -> String {
    let col_defs: Vec<String> = table
        .columns
        .iter()
        .map(|c| {
            let mut def = format!("{} {}", quoted(c.name), c.type_.sql_name());
            if c.primary_key {
                def.push_str(" PRIMARY KEY");
            }
            if let Some(d) = c.default {
                def.push_str(" DEFAULT ");
                def.push_str(d);
            }
            if let Some(fk) = c.references {
                def.push_str(&format!(" REFERENCES {} ({})", quoted(fk.table), quoted(fk.column)));
            }
            def
        })
        .collect();
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n  {}\n)",
        quoted(table.name),
        col_defs.join(",\n  ")
    )
}

/// SELECT every row ordered by primary key (insertion order).
pub fn select_list(table: &Table) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(table),
        quoted(table.name),
        quoted(table.pk())
    );
    q
}

pub fn select_by_id(table: &Table, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.push_param(SqlValue::Integer(id));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ?",
        select_column_list(table),
        quoted(table.name),
        quoted(table.pk())
    );
    q
}

/// Existence probe used before dependent writes.
pub fn select_exists(table: &Table, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.push_param(SqlValue::Integer(id));
    q.sql = format!(
        "SELECT 1 FROM {} WHERE {} = ?",
        quoted(table.name),
        quoted(table.pk())
    );
    q
}

/// INSERT the given columns; values not naming a column of `table` are skipped.
pub fn insert(table: &Table, values: &[(&str, SqlValue)]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::new();
    let mut placeholders = Vec::new();
    for (name, v) in values {
        let Some(c) = table.column(name) else { continue };
        if c.primary_key {
            continue;
        }
        q.push_param(v.clone());
        cols.push(quoted(name));
        placeholders.push("?");
    }
    let returning = select_column_list(table);
    q.sql = if cols.is_empty() {
        format!("INSERT INTO {} DEFAULT VALUES RETURNING {}", quoted(table.name), returning)
    } else {
        format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            quoted(table.name),
            cols.join(", "),
            placeholders.join(", "),
            returning
        )
    };
    q
}

/// UPDATE by id: SET every given column (full replace of the writable fields).
pub fn update(table: &Table, id: i64, values: &[(&str, SqlValue)]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    for (name, v) in values {
        let Some(c) = table.column(name) else { continue };
        if c.primary_key {
            continue;
        }
        q.push_param(v.clone());
        sets.push(format!("{} = ?", quoted(name)));
    }
    let returning = select_column_list(table);
    if sets.is_empty() {
        return select_by_id(table, id);
    }
    q.push_param(SqlValue::Integer(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ? RETURNING {}",
        quoted(table.name),
        sets.join(", "),
        quoted(table.pk()),
        returning
    );
    q
}

/// DELETE by id. Caller inspects the affected-row count.
pub fn delete(table: &Table, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.push_param(SqlValue::Integer(id));
    q.sql = format!("DELETE FROM {} WHERE {} = ?", quoted(table.name), quoted(table.pk()));
    q
}
