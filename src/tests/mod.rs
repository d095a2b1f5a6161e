// sportshub-service/src/tests/mod.rs
mod api_tests;
