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

//! Role identity and the deployer override points
//!
//! The role definition is constructed exactly once, at configuration time.
//! Deployers may override the role identity and/or the whole capability set
//! before initialization; overriding replaces wholesale, never merges.

use crate::capability::CapabilitySet;
use serde::{Deserialize, Serialize};

/// Built-in slug of the restricted role.
pub const DEFAULT_ROLE_SLUG: &str = "order_viewer";

/// Built-in display name of the restricted role.
pub const DEFAULT_ROLE_NAME: &str = "Order viewer (read-only)";

/// Role identity. The slug is the identity and is immutable once chosen;
/// the name is a display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub slug: String,
    pub name: String,
}

impl Role {
    /// Create a role identity.
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::new(DEFAULT_ROLE_SLUG, DEFAULT_ROLE_NAME)
    }
}

/// Deployer overrides, evaluated exactly once when the gate is constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleOverrides {
    /// Replacement slug for the restricted role.
    pub slug: Option<String>,

    /// Replacement display name.
    pub name: Option<String>,

    /// Wholesale replacement of the capability set.
    pub capabilities: Option<CapabilitySet>,
}

impl RoleOverrides {
    /// No overrides; built-in defaults apply.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the role slug.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Override the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace the whole capability set.
    pub fn with_capabilities(mut self, capabilities: CapabilitySet) -> Self {
        self.capabilities = Some(capabilities);
        self
    }
}

/// The atomic unit the registry installs: a role identity bound to its
/// capability set. The store must never hold the slug mapped to any other
/// capability set than this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDefinition {
    pub role: Role,
    pub capabilities: CapabilitySet,
}

impl RoleDefinition {
    /// Build the effective definition from built-in defaults plus overrides.
    pub fn resolve(overrides: &RoleOverrides) -> Self {
        let mut role = Role::default();
        if let Some(slug) = &overrides.slug {
            role.slug = slug.clone();
        }
        if let Some(name) = &overrides.name {
            role.name = name.clone();
        }

        let capabilities = overrides.capabilities.clone().unwrap_or_default();

        Self { role, capabilities }
    }
}

impl Default for RoleDefinition {
    fn default() -> Self {
        Self::resolve(&RoleOverrides::default())
    }
}
