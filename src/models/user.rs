use crate::models::{Resource, Writable};
use crate::sql::SqlValue;
use crate::tables::{Table, USERS};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct User {
    pub id: i64,
    #[schema(max_length = 32)]
    pub name: String,
    #[schema(max_length = 60)]
    pub second_name: String,
    #[schema(max_length = 128)]
    pub email: String,
    /// Stored as given.
    #[schema(max_length = 50)]
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserIn {
    #[schema(max_length = 32)]
    pub name: String,
    #[schema(max_length = 60)]
    pub second_name: String,
    #[schema(max_length = 128)]
    pub email: String,
    #[schema(max_length = 50)]
    pub password: String,
}

impl Writable for UserIn {
    const TABLE: &'static Table = &USERS;

    fn values(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("name", (&self.name).into()),
            ("second_name", (&self.second_name).into()),
            ("email", (&self.email).into()),
            ("password", (&self.password).into()),
        ]
    }
}

impl Resource for User {
    type Input = UserIn;
}
