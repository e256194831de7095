//! Application services sitting between the HTTP handlers and the repository

pub mod manager;
pub mod search;

pub use manager::StoreManager;
pub use search::StoreSearch;
