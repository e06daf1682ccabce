//! CLI error types.
//!
//! Every fatal condition converges here: the single top-level handler in
//! main prints an `ERROR:` line to stderr and exits 1. Library code never
//! terminates the process.

use realmseed_admin::AdminError;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Input(String),

    #[error("Failed to read JSON file: {0}")]
    SeedFile(String),

    #[error("Group not found by path: {0}")]
    GroupNotFound(String),

    #[error("Realm role '{role}' not found in realm '{realm}'")]
    UnknownRole { role: String, realm: String },

    #[error(transparent)]
    Admin(#[from] AdminError),
}

impl CliError {
    /// Print the diagnostic to stderr.
    pub fn print(&self) {
        eprintln!("ERROR: {self}");
    }
}
