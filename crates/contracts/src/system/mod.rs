//! Cross-cutting system contracts.

pub mod auth;
