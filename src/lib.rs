// sportshub-service/src/lib.rs
pub mod models;
pub mod routes;
pub mod sheets;
pub mod state;
pub mod storage;
pub mod utils;

#[cfg(test)]
mod tests;
