pub mod app_config;
pub mod cart_repo;

pub use cart_repo::SqliteCart;
