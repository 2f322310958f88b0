//! Fixed route table for users, products and orders.

use crate::handlers::{
    create_order, create_product, create_user, delete_order, delete_product, delete_user,
    list_orders, list_products, list_users, read_order, read_product, read_user, update_order,
    update_product, update_user,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn resource_routes(state: AppState) -> Router {
    Router::new()
        .route("/users/", get(list_users).post(create_user))
        .route("/users/:id", get(read_user).put(update_user).delete(delete_user))
        .route("/products/", get(list_products).post(create_product))
        .route(
            "/products/:id",
            get(read_product).put(update_product).delete(delete_product),
        )
        .route("/orders/", get(list_orders).post(create_order))
        .route("/orders/:id", get(read_order).put(update_order).delete(delete_order))
        .with_state(state)
}
