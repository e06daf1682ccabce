//! realmseed CLI library.
//!
//! Exposes the seeding modules for integration testing. The binary entry
//! point is in main.rs.

pub mod error;
pub mod models;
pub mod seed;
