// Common test utilities

pub mod fixtures;
pub mod harness;
pub mod router;

pub use fixtures::*;
pub use harness::*;
pub use router::*;
