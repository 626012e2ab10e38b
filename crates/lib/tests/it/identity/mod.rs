//! Identity resolution integration tests

mod details_tests;
mod lifecycle_tests;
