//! Static relation definitions: users, products, orders.
//! Column widths declared here drive both the DDL and request validation.

/// Storage class of a column as declared in DDL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    /// Text bounded to the given number of characters.
    Varchar(u32),
    Text,
    Real,
}

impl ColumnType {
    pub fn sql_name(&self) -> String {
        match self {
            ColumnType::Integer => "INTEGER".into(),
            ColumnType::Varchar(n) => format!("VARCHAR({})", n),
            ColumnType::Text => "TEXT".into(),
            ColumnType::Real => "REAL".into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForeignKey {
    pub table: &'static str,
    pub column: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub type_: ColumnType,
    pub primary_key: bool,
    /// SQL literal used as column DEFAULT.
    pub default: Option<&'static str>,
    pub references: Option<ForeignKey>,
}

impl Column {
    const fn new(name: &'static str, type_: ColumnType) -> Self {
        Column {
            name,
            type_,
            primary_key: false,
            default: None,
            references: None,
        }
    }

    const fn id() -> Self {
        Column {
            name: "id",
            type_: ColumnType::Integer,
            primary_key: true,
            default: None,
            references: None,
        }
    }

    const fn with_default(mut self, literal: &'static str) -> Self {
        self.default = Some(literal);
        self
    }

    const fn references(mut self, table: &'static str, column: &'static str) -> Self {
        self.references = Some(ForeignKey { table, column });
        self
    }

    pub fn max_length(&self) -> Option<u32> {
        match self.type_ {
            ColumnType::Varchar(n) => Some(n),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Table {
    pub name: &'static str,
    pub columns: &'static [Column],
}

impl Table {
    /// Primary key column name. Every table here has a single generated integer key.
    pub fn pk(&self) -> &'static str {
        self.columns
            .iter()
            .find(|c| c.primary_key)
            .map(|c| c.name)
            .unwrap_or("id")
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}

pub const USERS: Table = Table {
    name: "users",
    columns: &[
        Column::id(),
        Column::new("name", ColumnType::Varchar(32)),
        Column::new("second_name", ColumnType::Varchar(60)),
        Column::new("email", ColumnType::Varchar(128)),
        Column::new("password", ColumnType::Varchar(50)),
    ],
};

pub const PRODUCTS: Table = Table {
    name: "products",
    columns: &[
        Column::id(),
        Column::new("name", ColumnType::Varchar(128)),
        Column::new("description", ColumnType::Text).with_default("''"),
    ],
};

pub const ORDERS: Table = Table {
    name: "orders",
    columns: &[
        Column::id(),
        Column::new("user_id", ColumnType::Integer).references("users", "id"),
        Column::new("product_id", ColumnType::Integer).references("products", "id"),
        Column::new("date", ColumnType::Varchar(10)).with_default("'2020-01-01'"),
        Column::new("description", ColumnType::Text),
        Column::new("price", ColumnType::Real),
    ],
};

/// Creation order: referenced tables first.
pub const ALL_TABLES: &[&Table] = &[&USERS, &PRODUCTS, &ORDERS];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_keys_on_id() {
        for t in ALL_TABLES {
            assert_eq!(t.pk(), "id");
        }
    }

    #[test]
    fn widths_follow_varchar_declarations() {
        assert_eq!(USERS.column("name").and_then(Column::max_length), Some(32));
        assert_eq!(USERS.column("password").and_then(Column::max_length), Some(50));
        assert_eq!(ORDERS.column("date").and_then(Column::max_length), Some(10));
        assert_eq!(PRODUCTS.column("description").and_then(Column::max_length), None);
    }

    #[test]
    fn orders_reference_users_and_products() {
        let refs: Vec<_> = ORDERS.columns.iter().filter_map(|c| c.references).collect();
        assert_eq!(
            refs,
            vec![
                ForeignKey { table: "users", column: "id" },
                ForeignKey { table: "products", column: "id" },
            ]
        );
    }
}
