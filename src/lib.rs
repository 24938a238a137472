pub mod config;
pub mod error;
pub mod routes;
pub mod storage;
pub mod types;
pub mod upstream;
pub mod utils;
