//! realmseed - seed Keycloak realm users from a JSON document.
//!
//! Necessary because seeding users directly from a realm export is not
//! reliable; this tool converges the desired users onto a running server
//! through the Admin REST API instead.

use clap::Parser;
use realmseed_cli::seed::{self, SeedArgs};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = SeedArgs::parse();
    init_tracing(args.verbose);

    if let Err(e) = seed::execute(&args).await {
        e.print();
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr so progress output on stdout stays clean.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "realmseed_cli=debug,realmseed_admin=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
