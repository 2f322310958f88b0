//! Operational routes: liveness, SQLite store reachability, build version.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use sqlx::SqlitePool;

#[derive(Serialize)]
struct Liveness {
    status: &'static str,
}

/// Reachability of the SQLite store backing users, products and orders.
#[derive(Serialize)]
struct StoreReadiness {
    status: &'static str,
    store: &'static str,
    reachable: bool,
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

/// True when the store answers a trivial statement on a pooled connection.
async fn store_reachable(pool: &SqlitePool) -> bool {
    match sqlx::query_scalar::<_, i64>("SELECT 1").fetch_one(pool).await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = %e, "sqlite store unreachable");
            false
        }
    }
}

async fn health() -> Json<Liveness> {
    Json(Liveness { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<StoreReadiness>) {
    let reachable = store_reachable(&state.pool).await;
    let (code, status) = if reachable {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };
    (
        code,
        Json(StoreReadiness {
            status,
            store: "sqlite",
            reachable,
        }),
    )
}

async fn version() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health, GET /ready, GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
