//! Request extractors that reject with `AppError` (422 for shape and width violations).

pub mod id;
pub mod json;

pub use id::ResourceId;
pub use json::ValidJson;
