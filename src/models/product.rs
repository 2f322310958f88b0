use crate::models::{Resource, Writable};
use crate::sql::SqlValue;
use crate::tables::{Table, PRODUCTS};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Product {
    pub id: i64,
    #[schema(max_length = 128)]
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductIn {
    #[schema(max_length = 128)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Writable for ProductIn {
    const TABLE: &'static Table = &PRODUCTS;

    fn values(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("name", (&self.name).into()),
            ("description", (&self.description).into()),
        ]
    }
}

impl Resource for Product {
    type Input = ProductIn;
}
