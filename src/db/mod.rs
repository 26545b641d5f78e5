pub mod memory;
pub mod postgres;
pub mod repository;

pub use memory::InMemoryModelRepository;
pub use postgres::{create_pool, PgModelRepository};
pub use repository::ModelRepository;

#[cfg(test)]
pub use repository::MockModelRepository;
