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

//! Configuration for the gate
//!
//! Overrides configured here feed the same resolution path as programmatic
//! [`crate::role::RoleOverrides`] and are evaluated exactly once, when the
//! gate is constructed.

use crate::capability::CapabilitySet;
use crate::role::RoleOverrides;
use std::env;

/// Default number of audit events retained in memory.
pub const DEFAULT_AUDIT_CAPACITY: usize = 1024;

/// Configuration for a [`crate::gate::Gate`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Override for the restricted role slug.
    pub role_slug: Option<String>,

    /// Override for the restricted role display name.
    pub role_name: Option<String>,

    /// Wholesale replacement of the capability set.
    pub capabilities: Option<CapabilitySet>,

    /// Audit log capacity; `None` keeps the default.
    pub audit_capacity: Option<usize>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `ORDERGATE_CAPABILITIES` takes the full capability set as a JSON
    /// object; a partial or unparsable value is ignored and the built-in
    /// defaults apply, since capability overrides replace wholesale.
    pub fn from_env() -> Self {
        Self {
            role_slug: env::var("ORDERGATE_ROLE_SLUG").ok(),

            role_name: env::var("ORDERGATE_ROLE_NAME").ok(),

            capabilities: env::var("ORDERGATE_CAPABILITIES").ok().and_then(|v| serde_json::from_str(&v).ok()),

            audit_capacity: env::var("ORDERGATE_AUDIT_CAPACITY").ok().and_then(|v| v.parse().ok()),
        }
    }

    /// The override set this configuration resolves to.
    pub fn overrides(&self) -> RoleOverrides {
        RoleOverrides {
            slug: self.role_slug.clone(),
            name: self.role_name.clone(),
            capabilities: self.capabilities.clone(),
        }
    }

    /// Effective audit capacity.
    pub fn audit_capacity(&self) -> usize {
        self.audit_capacity.unwrap_or(DEFAULT_AUDIT_CAPACITY)
    }
}
