//! CrudService: typed CRUD over the safe SQL builder.

mod crud;
mod validation;
pub use crud::CrudService;
pub use validation::RequestValidator;
