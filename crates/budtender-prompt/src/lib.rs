//! Prompt construction for the recommendation service.
//!
//! [`builder::PromptBuilder`] assembles line-oriented instruction text;
//! [`composer`] turns a validated [`budtender_core::recommend::RequestKind`]
//! into the system instruction sent to the completion service.

pub mod builder;
pub mod composer;
