//! Wire types for the Admin API.

mod group;
mod role;
mod user;

pub use group::GroupRepresentation;
pub use role::RoleRepresentation;
pub use user::{CredentialRepresentation, UserRepresentation};
