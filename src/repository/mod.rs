//! Database repository layer

pub mod account_repo;
pub mod product_repo;

pub use account_repo::*;
pub use product_repo::*;
