//! Testing utilities and fixtures
//!
//! Mocks for the team change boundary and ready-made retreat inputs shared
//! by unit tests, integration tests and benchmarks.

pub mod fixtures;
pub mod mocks;

pub use fixtures::{reference_retreat, RetreatBuilder, REFERENCE_RETREAT_JSON};
pub use mocks::{RecordingListener, TeamChange};
