use crate::models::{Resource, Writable};
use crate::sql::SqlValue;
use crate::tables::{Table, ORDERS};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Date stored when an order input omits one. Not checked to be a calendar date.
pub const DEFAULT_ORDER_DATE: &str = "2020-01-01";

fn default_order_date() -> String {
    DEFAULT_ORDER_DATE.to_string()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub date: String,
    pub description: String,
    pub price: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderIn {
    pub user_id: i64,
    pub product_id: i64,
    #[serde(default = "default_order_date")]
    #[schema(max_length = 10, default = "2020-01-01")]
    pub date: String,
    pub description: String,
    pub price: f64,
}

impl Writable for OrderIn {
    const TABLE: &'static Table = &ORDERS;

    fn values(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("user_id", self.user_id.into()),
            ("product_id", self.product_id.into()),
            ("date", (&self.date).into()),
            ("description", (&self.description).into()),
            ("price", self.price.into()),
        ]
    }
}

impl Resource for Order {
    type Input = OrderIn;
}
