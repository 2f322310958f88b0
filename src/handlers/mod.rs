//! HTTP handlers, one per (resource, verb).

pub mod orders;
pub mod products;
pub mod users;
pub use orders::*;
pub use products::*;
pub use users::*;
