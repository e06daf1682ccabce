//! Realm role operations: catalog listing and user role mappings.

use crate::client::AdminClient;
use crate::error::AdminResult;
use crate::models::RoleRepresentation;
use std::collections::HashMap;

impl AdminClient {
    /// Fetch the realm's role catalog, keyed by role name.
    ///
    /// Fetched once per run and reused for every user; valid because the run
    /// assumes no concurrent external mutation of the catalog. Entries
    /// without a name are dropped.
    pub async fn list_realm_roles(
        &self,
        realm: &str,
    ) -> AdminResult<HashMap<String, RoleRepresentation>> {
        let url = format!("{}/roles", self.realm_url(realm));
        let roles: Vec<RoleRepresentation> = self.get_json(&url).await?;
        Ok(by_name(roles))
    }

    /// The realm roles currently assigned to a user, keyed by role name.
    pub async fn user_realm_role_mappings(
        &self,
        realm: &str,
        user_id: &str,
    ) -> AdminResult<HashMap<String, RoleRepresentation>> {
        let url = format!(
            "{}/users/{}/role-mappings/realm",
            self.realm_url(realm),
            user_id
        );
        let roles: Vec<RoleRepresentation> = self.get_json(&url).await?;
        Ok(by_name(roles))
    }

    /// Batch-assign realm roles to a user. The endpoint expects an array of
    /// `{id, name}` objects.
    pub async fn add_realm_roles(
        &self,
        realm: &str,
        user_id: &str,
        roles: &[RoleRepresentation],
    ) -> AdminResult<()> {
        let url = format!(
            "{}/users/{}/role-mappings/realm",
            self.realm_url(realm),
            user_id
        );
        self.post_json(&url, &roles).await?;
        Ok(())
    }
}

fn by_name(roles: Vec<RoleRepresentation>) -> HashMap<String, RoleRepresentation> {
    roles
        .into_iter()
        .filter_map(|r| r.name.clone().map(|name| (name, r)))
        .collect()
}
