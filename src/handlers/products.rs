//! /products handlers.

use crate::error::AppError;
use crate::extractors::{ResourceId, ValidJson};
use crate::models::{Product, ProductIn};
use crate::response::{message, MessageBody};
use crate::service::CrudService;
use crate::state::AppState;
use crate::tables::PRODUCTS;
use axum::{extract::State, Json};

#[utoipa::path(
    get,
    path = "/products/",
    tag = "products",
    responses((status = 200, description = "All products in insertion order", body = [Product]))
)]
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    let products = CrudService::list::<Product>(&state.pool).await?;
    Ok(Json(products))
}

#[utoipa::path(
    post,
    path = "/products/",
    tag = "products",
    request_body = ProductIn,
    responses(
        (status = 200, description = "Created product", body = Product),
        (status = 422, description = "Invalid body")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<ProductIn>,
) -> Result<Json<Product>, AppError> {
    let product = CrudService::create::<Product>(&state.pool, &input).await?;
    tracing::info!(product_id = product.id, "product created");
    Ok(Json(product))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 404, description = "No such product", body = MessageBody)
    )
)]
pub async fn read_product(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<Product>, AppError> {
    let product = CrudService::read::<Product>(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(product))
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    request_body = ProductIn,
    responses(
        (status = 200, description = "Replaced product", body = Product),
        (status = 404, description = "No such product", body = MessageBody),
        (status = 422, description = "Invalid body")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    ValidJson(input): ValidJson<ProductIn>,
) -> Result<Json<Product>, AppError> {
    let product = CrudService::update::<Product>(&state.pool, id, &input)
        .await?
        .ok_or(AppError::NotFound)?;
    tracing::info!(product_id = id, "product replaced");
    Ok(Json(product))
}

/// Reports success whether or not the product existed.
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses((status = 200, description = "Deleted (or already absent)", body = MessageBody))
)]
pub async fn delete_product(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<MessageBody>, AppError> {
    let affected = CrudService::delete(&state.pool, &PRODUCTS, id).await?;
    tracing::info!(product_id = id, affected, "product delete");
    Ok(message("product deleted"))
}
