//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "load and check a model" or "list types".

pub mod catalog_service;
pub mod model_service;

pub use catalog_service::{CatalogService, TypeInfo};
pub use model_service::{CheckReport, ModelService};
