/// Shared test support for integration tests
pub mod mocks;
