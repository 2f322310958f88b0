//! OpenAPI document for the resource routes.

use crate::handlers::{orders, products, users};
use crate::models::{Order, OrderIn, Product, ProductIn, User, UserIn};
use crate::response::MessageBody;
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        users::list_users,
        users::create_user,
        users::read_user,
        users::update_user,
        users::delete_user,
        products::list_products,
        products::create_product,
        products::read_product,
        products::update_product,
        products::delete_product,
        orders::list_orders,
        orders::create_order,
        orders::read_order,
        orders::update_order,
        orders::delete_order,
    ),
    components(schemas(User, UserIn, Product, ProductIn, Order, OrderIn, MessageBody)),
    tags(
        (name = "users", description = "User accounts"),
        (name = "products", description = "Product catalogue"),
        (name = "orders", description = "Orders referencing a user and a product")
    )
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /openapi.json
pub fn docs_routes() -> Router {
    Router::new().route("/openapi.json", get(openapi))
}
