pub mod models;
pub mod repository;

#[cfg(feature = "memory")]
pub mod memory;

pub use models::*;
