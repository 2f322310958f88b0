//! Storefront API: CRUD REST backend for users, products and orders over SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;
pub mod tables;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use response::{not_found, NOT_FOUND_MESSAGE};
pub use routes::{app, common_routes, docs_routes, resource_routes};
pub use service::CrudService;
pub use state::AppState;
pub use store::{connect, ensure_tables};
