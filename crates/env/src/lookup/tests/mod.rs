//! Tests for the environment lookup chain.
//!
//! Responsibilities:
//! - Test the plain quoted-line parser, including multi-line values.
//! - Test the structured YAML/JSON parser and its type rejections.
//! - Test chaining, precedence, and fallback across lookup links.
//!
//! Invariants:
//! - Tests that touch the process environment use `serial_test` and
//!   `temp-env` to prevent cross-test contamination.
//! - On-disk fixtures live in `tempfile` directories and are cleaned up
//!   automatically.

pub mod structured_tests;
