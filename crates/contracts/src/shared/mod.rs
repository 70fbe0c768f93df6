//! Envelope types shared by every list endpoint.

pub mod paged;

pub use paged::Paged;
