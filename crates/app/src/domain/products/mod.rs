//! Products

pub mod data;
pub mod errors;
pub mod patch;
pub mod records;
mod repository;
pub mod service;

pub use errors::ProductsServiceError;
pub use sqlx::Error as StorageError;
pub use service::*;

pub(crate) use repository::PgProductsRepository;
