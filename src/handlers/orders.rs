//! /orders handlers. Writes first confirm that the referenced user, then product, exist.

use crate::error::AppError;
use crate::extractors::{ResourceId, ValidJson};
use crate::models::{Order, OrderIn};
use crate::response::{message, MessageBody};
use crate::service::CrudService;
use crate::state::AppState;
use crate::tables::{ORDERS, PRODUCTS, USERS};
use axum::{extract::State, Json};
use sqlx::SqlitePool;

/// Existence pre-check: user first, then product. Not atomic with the following write.
async fn ensure_references(pool: &SqlitePool, input: &OrderIn) -> Result<(), AppError> {
    if !CrudService::exists(pool, &USERS, input.user_id).await? {
        tracing::debug!(user_id = input.user_id, "order references missing user");
        return Err(AppError::NotFound);
    }
    if !CrudService::exists(pool, &PRODUCTS, input.product_id).await? {
        tracing::debug!(product_id = input.product_id, "order references missing product");
        return Err(AppError::NotFound);
    }
    Ok(())
}

#[utoipa::path(
    get,
    path = "/orders/",
    tag = "orders",
    responses((status = 200, description = "All orders in insertion order", body = [Order]))
)]
pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, AppError> {
    let orders = CrudService::list::<Order>(&state.pool).await?;
    Ok(Json(orders))
}

#[utoipa::path(
    post,
    path = "/orders/",
    tag = "orders",
    request_body = OrderIn,
    responses(
        (status = 200, description = "Created order", body = Order),
        (status = 404, description = "Referenced user or product missing", body = MessageBody),
        (status = 422, description = "Invalid body")
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<OrderIn>,
) -> Result<Json<Order>, AppError> {
    ensure_references(&state.pool, &input).await?;
    let order = CrudService::create::<Order>(&state.pool, &input).await?;
    tracing::info!(order_id = order.id, "order created");
    Ok(Json(order))
}

#[utoipa::path(
    get,
    path = "/orders/{id}",
    tag = "orders",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 200, description = "The order", body = Order),
        (status = 404, description = "No such order", body = MessageBody)
    )
)]
pub async fn read_order(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<Order>, AppError> {
    let order = CrudService::read::<Order>(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(order))
}

#[utoipa::path(
    put,
    path = "/orders/{id}",
    tag = "orders",
    params(("id" = i64, Path, description = "Order id")),
    request_body = OrderIn,
    responses(
        (status = 200, description = "Replaced order", body = Order),
        (status = 404, description = "No such order, or referenced user or product missing", body = MessageBody),
        (status = 422, description = "Invalid body")
    )
)]
pub async fn update_order(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    ValidJson(input): ValidJson<OrderIn>,
) -> Result<Json<Order>, AppError> {
    ensure_references(&state.pool, &input).await?;
    let order = CrudService::update::<Order>(&state.pool, id, &input)
        .await?
        .ok_or(AppError::NotFound)?;
    tracing::info!(order_id = id, "order replaced");
    Ok(Json(order))
}

#[utoipa::path(
    delete,
    path = "/orders/{id}",
    tag = "orders",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 200, description = "Deleted", body = MessageBody),
        (status = 404, description = "No such order", body = MessageBody)
    )
)]
pub async fn delete_order(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<MessageBody>, AppError> {
    if CrudService::delete(&state.pool, &ORDERS, id).await? == 0 {
        return Err(AppError::NotFound);
    }
    tracing::info!(order_id = id, "order deleted");
    Ok(message("order deleted"))
}
