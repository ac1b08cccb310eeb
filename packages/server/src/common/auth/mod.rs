//! Session registry and credential digests.
//!
//! The session registry is the only holder of session state in the process:
//! it is created empty at startup, owned by the application state, and lost
//! on exit. Restarting the server logs every user out — an accepted
//! operational characteristic of the single-process deployment.

mod password;
mod session;

pub use password::digest_password;
pub use session::{Session, SessionStore, SESSION_TTL_HOURS};
