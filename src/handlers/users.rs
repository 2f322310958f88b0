//! /users handlers.

use crate::error::AppError;
use crate::extractors::{ResourceId, ValidJson};
use crate::models::{User, UserIn};
use crate::response::{message, MessageBody};
use crate::service::CrudService;
use crate::state::AppState;
use crate::tables::USERS;
use axum::{extract::State, Json};

#[utoipa::path(
    get,
    path = "/users/",
    tag = "users",
    responses((status = 200, description = "All users in insertion order", body = [User]))
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = CrudService::list::<User>(&state.pool).await?;
    Ok(Json(users))
}

#[utoipa::path(
    post,
    path = "/users/",
    tag = "users",
    request_body = UserIn,
    responses(
        (status = 200, description = "Created user", body = User),
        (status = 422, description = "Invalid body")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<UserIn>,
) -> Result<Json<User>, AppError> {
    let user = CrudService::create::<User>(&state.pool, &input).await?;
    tracing::info!(user_id = user.id, "user created");
    Ok(Json(user))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 404, description = "No such user", body = MessageBody)
    )
)]
pub async fn read_user(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<User>, AppError> {
    let user = CrudService::read::<User>(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(user))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    request_body = UserIn,
    responses(
        (status = 200, description = "Replaced user", body = User),
        (status = 404, description = "No such user", body = MessageBody),
        (status = 422, description = "Invalid body")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    ValidJson(input): ValidJson<UserIn>,
) -> Result<Json<User>, AppError> {
    let user = CrudService::update::<User>(&state.pool, id, &input)
        .await?
        .ok_or(AppError::NotFound)?;
    tracing::info!(user_id = id, "user replaced");
    Ok(Json(user))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "Deleted", body = MessageBody),
        (status = 404, description = "No such user", body = MessageBody)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<MessageBody>, AppError> {
    if CrudService::delete(&state.pool, &USERS, id).await? == 0 {
        return Err(AppError::NotFound);
    }
    tracing::info!(user_id = id, "user deleted");
    Ok(message(format!("user with user_id:{} was deleted", id)))
}
