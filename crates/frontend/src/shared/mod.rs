//! Cross-cutting client infrastructure: the request pipeline, the generic
//! CRUD gateway, the option cache and the hooks on top of it.

pub mod components;
pub mod crud;
pub mod http;
pub mod options;
pub mod query_cache;
