//! HTTP surface of the recommendation service: one POST route plus CORS
//! preflight, generic over the completion backend so tests can inject a
//! scripted one.

pub mod config;
pub mod handlers;

pub use handlers::{router, AppState};
