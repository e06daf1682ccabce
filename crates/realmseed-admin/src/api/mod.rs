//! Admin API operations, grouped by resource.

mod groups;
mod roles;
mod users;

pub use groups::normalize_group_path;
