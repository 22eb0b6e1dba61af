//! Test utilities for narrative tests.

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockBehavior, MockDriver, MockResponse};
