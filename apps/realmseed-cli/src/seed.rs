//! Seed a realm's users from a JSON document.
//!
//! For each desired user, in input order: resolve by username, create or
//! full-replace the profile, force-set the password, add group memberships,
//! and batch-assign missing realm roles. Convergence is additive: nothing
//! absent from the document is ever removed. Any fatal condition aborts the
//! whole run; mutations already applied stay in place.

use crate::error::{CliError, CliResult};
use crate::models::{SeedDocument, SeedUser};
use clap::Parser;
use realmseed_admin::client::DEFAULT_TIMEOUT;
use realmseed_admin::models::RoleRepresentation;
use realmseed_admin::{auth, AdminClient, AdminError};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Placeholder id used in dry-run so steps after a would-be create can still
/// print their planned actions.
const DRY_RUN_USER_ID: &str = "DRY_RUN_USER_ID";

/// Seed Keycloak users from JSON
#[derive(Parser, Debug)]
#[command(name = "realmseed", version, about)]
pub struct SeedArgs {
    /// Base Keycloak URL, e.g. http://localhost:8080
    #[arg(long)]
    pub base_url: String,

    /// Admin realm (usually master)
    #[arg(long, default_value = "master")]
    pub admin_realm: String,

    /// Admin client id (usually admin-cli)
    #[arg(long, default_value = "admin-cli")]
    pub admin_client_id: String,

    /// Admin username
    #[arg(long)]
    pub admin_user: String,

    /// Admin password
    #[arg(long)]
    pub admin_pass: String,

    /// Path to the seed JSON file
    #[arg(short = 'f', long)]
    pub file: PathBuf,

    /// Print actions without mutating the server
    #[arg(long)]
    pub dry_run: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the full reconciliation described by the arguments.
pub async fn execute(args: &SeedArgs) -> CliResult<()> {
    let document = load_seed_file(&args.file)?;
    validate_document(&document)?;
    debug!(
        "Seeding {} user(s) into realm '{}'",
        document.users.len(),
        document.realm
    );

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(args.timeout_secs))
        .build()
        .map_err(|e| AdminError::InvalidConfig(format!("Failed to build HTTP client: {e}")))?;

    let token = auth::acquire_token(
        &http,
        &args.base_url,
        &args.admin_realm,
        &args.admin_client_id,
        &args.admin_user,
        &args.admin_pass,
    )
    .await?;
    let client = AdminClient::with_http_client(&args.base_url, token, http);

    // One catalog fetch per run, reused for every user.
    let realm = document.realm.as_str();
    let catalog = client.list_realm_roles(realm).await?;

    for user in &document.users {
        seed_user(&client, realm, &catalog, user, args.dry_run).await?;
    }

    println!("Done.");
    Ok(())
}

/// Load and parse the seed JSON file.
pub fn load_seed_file(path: &PathBuf) -> CliResult<SeedDocument> {
    let content = fs::read_to_string(path).map_err(|e| CliError::SeedFile(e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| CliError::SeedFile(e.to_string()))
}

/// Reject malformed documents before any network call is made.
pub fn validate_document(document: &SeedDocument) -> CliResult<()> {
    if document.realm.is_empty() {
        return Err(CliError::Input(
            "JSON must include top-level field: realm".to_string(),
        ));
    }
    for user in &document.users {
        if user.username.is_empty() {
            return Err(CliError::Input(
                "Each user must have a username".to_string(),
            ));
        }
    }
    Ok(())
}

/// Converge one user: resolve, create or update, password, groups, roles.
///
/// Progress is printed before each operation is attempted, so on a fatal
/// abort the last line names the operation that failed.
async fn seed_user(
    client: &AdminClient,
    realm: &str,
    catalog: &HashMap<String, RoleRepresentation>,
    user: &SeedUser,
    dry_run: bool,
) -> CliResult<()> {
    let repr = user.profile_repr();

    let user_id = match client.find_user_id(realm, &user.username).await? {
        Some(id) => {
            println!("[user] {}: exists -> updating basic fields", user.username);
            if !dry_run {
                client.update_user(realm, &id, &repr).await?;
            }
            id
        }
        None => {
            println!("[user] {}: creating", user.username);
            if dry_run {
                DRY_RUN_USER_ID.to_string()
            } else {
                client.create_user(realm, &repr).await?
            }
        }
    };

    if let Some(password) = &user.password {
        if !password.value.is_empty() {
            println!("  - set password (temporary={})", password.temporary);
            if !dry_run {
                client
                    .reset_password(realm, &user_id, &password.value, password.temporary)
                    .await?;
            }
        }
    }

    for path in &user.groups {
        println!("  - add to group {path}");
        if !dry_run {
            let group = client
                .group_by_path(realm, path)
                .await?
                .ok_or_else(|| CliError::GroupNotFound(path.clone()))?;
            // Duplicate adds are a server-side no-op; membership is never
            // pre-checked.
            client.add_user_to_group(realm, &user_id, &group.id).await?;
        }
    }

    if !user.realm_roles.is_empty() {
        // In dry-run the current-mapping read is skipped, so the diff runs
        // against an empty set and every desired role is reported as "to
        // add" even when already assigned.
        let current = if dry_run {
            HashMap::new()
        } else {
            client.user_realm_role_mappings(realm, &user_id).await?
        };

        let to_add = roles_to_add(&user.realm_roles, &current, catalog, realm)?;
        if to_add.is_empty() {
            println!("  - realm roles already satisfied");
        } else {
            let names: Vec<&str> = to_add.iter().filter_map(|r| r.name.as_deref()).collect();
            println!("  - add realm roles: {}", names.join(", "));
            if !dry_run {
                client.add_realm_roles(realm, &user_id, &to_add).await?;
            }
        }
    }

    Ok(())
}

/// The additive role diff: desired names not currently assigned, resolved
/// against the realm's catalog. An unknown name is fatal.
fn roles_to_add(
    desired: &[String],
    current: &HashMap<String, RoleRepresentation>,
    catalog: &HashMap<String, RoleRepresentation>,
    realm: &str,
) -> CliResult<Vec<RoleRepresentation>> {
    let mut to_add = Vec::new();
    for name in desired {
        if current.contains_key(name) {
            continue;
        }
        let role = catalog.get(name).ok_or_else(|| CliError::UnknownRole {
            role: name.clone(),
            realm: realm.to_string(),
        })?;
        to_add.push(role.clone());
    }
    Ok(to_add)
}
