//! Fixtures for creating in-memory test data.
//!
//! Fixtures build entity models without touching the database. They are useful for
//! unit tests of conversion logic and for seeding test doubles.

pub mod student;
