//! Keycloak Admin REST API client.
//!
//! Provides an [`AdminClient`] that authenticates via the password grant and
//! exposes the narrow slice of the Admin API needed to seed a realm: user
//! search/create/update, password resets, group lookup by path, and realm
//! role mappings.

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

pub use client::AdminClient;
pub use error::{AdminError, AdminResult};
