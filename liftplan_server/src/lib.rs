#![forbid(unsafe_code)]

//! HTTP surface of the Liftplan workout recommender.

pub mod routes;

pub use routes::{router, serve, AppState};
