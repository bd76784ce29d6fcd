//! Outbound client for the hosted completion service.
//!
//! One request per invocation, no retries: retry policy, if any, belongs to
//! the caller. The client speaks the OpenAI-compatible `chat/completions`
//! wire format and translates the two operationally meaningful upstream
//! failures (429 rate limit, 402 payment required) into dedicated error
//! variants before they reach the endpoint.

pub mod api;
mod client;
pub mod error;
mod provider_impl;

pub use client::GatewayClient;
