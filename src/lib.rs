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

//! # Ordergate
//!
//! A read-only order-viewer role for commerce-admin hosts, packaged as an
//! embeddable authorization component:
//! - A closed, typed capability set bound atomically to a role identity
//! - A registry that keeps the host's persisted role convergent with the
//!   in-code definition (remove-then-upsert on every initialization cycle)
//! - A pure classifier deciding restricted-role membership for the current
//!   actor
//! - Three independent enforcement points: view suppression, navigation
//!   suppression, and authoritative write-path rejection
//!
//! The host's identity store, persistent role store, and admin-view context
//! are consumed through traits; the crate never renders UI itself. View and
//! navigation suppression produce directive values the host applies to its
//! rendering layer, while the write gate is the security boundary.
//!
//! One [`Gate`] owns exactly one restricted role. Running several
//! differently configured restricted roles in one deployment is unsupported.

pub mod actor;
pub mod audit;
pub mod capability;
pub mod config;
pub mod enforcement;
pub mod error;
pub mod gate;
pub mod registry;
pub mod role;

pub use actor::{Actor, ActorClassifier, IdentityProvider};
pub use audit::{AuditEvent, AuditEventType, AuditLogger};
pub use capability::{Capability, CapabilitySet};
pub use config::Config;
pub use enforcement::AdminView;
pub use enforcement::nav::{MenuSection, NavGate, NavSuppression, RowAction};
pub use enforcement::view::{OrderControl, ViewGate, ViewSuppression};
pub use enforcement::write::{WriteGuard, WriteRequest};
pub use error::{GateError, GateResult, WRITE_REJECTED_STATUS};
pub use gate::{Gate, RenderDirectives};
pub use registry::{MemoryRoleStore, RoleRegistry, RoleStore, StoredRole};
pub use role::{Role, RoleDefinition, RoleOverrides};
