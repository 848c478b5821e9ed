// Ordergate
// Copyright (C) 2025 Ordergate Contributors

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Role registry and the host persistent role store
//!
//! Host stores persist capabilities at registration time, so a capability
//! set changed in code would otherwise never reach an already-provisioned
//! deployment. The registry's answer is the convergence protocol: remove the
//! persisted entry, then reinstall the current definition, on every
//! initialization cycle.

use crate::error::GateResult;
use crate::role::RoleDefinition;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

/// A role as the host store persists it: loose string keys, the wire form
/// [`crate::capability::CapabilitySet`] converts to and from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRole {
    pub slug: String,
    pub name: String,
    pub capabilities: BTreeMap<String, bool>,
}

/// Host-owned persistent role store.
///
/// `upsert_role` fully replaces any capability set already persisted for the
/// slug (never merges); `remove_role` is idempotent and an absent slug is
/// not an error.
pub trait RoleStore: Send + Sync {
    fn upsert_role(&self, slug: &str, name: &str, capabilities: &BTreeMap<String, bool>) -> GateResult<()>;

    fn remove_role(&self, slug: &str) -> GateResult<()>;

    fn get_role(&self, slug: &str) -> GateResult<Option<StoredRole>>;
}

/// In-memory role store: the reference implementation and test fixture.
#[derive(Debug, Default)]
pub struct MemoryRoleStore {
    roles: RwLock<BTreeMap<String, StoredRole>>,
}

impl MemoryRoleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of roles currently persisted.
    pub fn len(&self) -> usize {
        self.roles.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.read().is_empty()
    }
}

impl RoleStore for MemoryRoleStore {
    fn upsert_role(&self, slug: &str, name: &str, capabilities: &BTreeMap<String, bool>) -> GateResult<()> {
        let mut roles = self.roles.write();
        roles.insert(
            slug.to_string(),
            StoredRole {
                slug: slug.to_string(),
                name: name.to_string(),
                capabilities: capabilities.clone(),
            },
        );
        Ok(())
    }

    fn remove_role(&self, slug: &str) -> GateResult<()> {
        self.roles.write().remove(slug);
        Ok(())
    }

    fn get_role(&self, slug: &str) -> GateResult<Option<StoredRole>> {
        Ok(self.roles.read().get(slug).cloned())
    }
}

/// Registry binding one role definition to a host store.
pub struct RoleRegistry {
    definition: RoleDefinition,
    store: Arc<dyn RoleStore>,
}

impl RoleRegistry {
    /// Create a registry for the given definition.
    pub fn new(definition: RoleDefinition, store: Arc<dyn RoleStore>) -> Self {
        Self { definition, store }
    }

    /// The definition this registry installs.
    pub fn definition(&self) -> &RoleDefinition {
        &self.definition
    }

    /// The startup protocol: remove any persisted entry for the slug, then
    /// install the current definition. Run on every initialization cycle so
    /// the persisted capability set always matches the in-code definition,
    /// even when the definition changed between runs. Idempotent: running
    /// twice leaves the store in the same final state as running once.
    pub fn sync(&self) -> GateResult<()> {
        let slug = &self.definition.role.slug;

        self.store.remove_role(slug)?;
        debug!(slug = %slug, "removed stale role entry before reinstall");

        self.store
            .upsert_role(slug, &self.definition.role.name, &self.definition.capabilities.to_store_map())?;
        info!(slug = %slug, name = %self.definition.role.name, "role definition synced to store");

        Ok(())
    }

    /// Permanent removal, for the uninstall path. Idempotent; no error if
    /// the role is already absent.
    pub fn unregister(&self) -> GateResult<()> {
        let slug = &self.definition.role.slug;
        self.store.remove_role(slug)?;
        info!(slug = %slug, "role unregistered from store");
        Ok(())
    }

    /// Check whether the persisted entry matches the in-code definition.
    pub fn is_converged(&self) -> GateResult<bool> {
        let slug = &self.definition.role.slug;
        match self.store.get_role(slug)? {
            Some(stored) => Ok(stored.name == self.definition.role.name
                && stored.capabilities == self.definition.capabilities.to_store_map()),
            None => Ok(false),
        }
    }
}

impl std::fmt::Debug for RoleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleRegistry").field("definition", &self.definition).finish_non_exhaustive()
    }
}
