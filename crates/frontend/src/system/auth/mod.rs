//! Session lifecycle: durable credential storage, the session store, the
//! auth endpoints, route guarding and the login redirect codec.

pub mod api;
pub mod context;
pub mod guard;
pub mod redirect;
pub mod storage;

pub use context::{use_session, Session};
pub use guard::{RequireAdmin, RequireAuth};
