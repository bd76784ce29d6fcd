//! Shared building blocks for the budtender recommendation service.
//!
//! The crate is deliberately transport-free: it defines the chat message
//! primitives, the domain data model, the [`provider::CompletionBackend`]
//! trait that concrete gateway clients implement, and the interpreter that
//! turns a raw completion reply into the response envelope. The HTTP pieces
//! live in `budtender-gateway` (outbound) and `budtender-server` (inbound).

pub mod chat;
pub mod error;
pub mod interpret;
pub mod provider;
pub mod recommend;
pub mod schema_util;
