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

//! Enforcement points gated on the restricted-role verdict
//!
//! Three independent, stateless gates. None depends on another, and each
//! re-checks membership through the classifier on every invocation; there is
//! no caching across requests. View and navigation suppression are usability
//! conveniences; the write gate is the security boundary.

pub mod nav;
pub mod view;
pub mod write;

pub use nav::{MenuSection, NavGate, NavSuppression, RowAction};
pub use view::{OrderControl, ViewGate, ViewSuppression};
pub use write::{WriteGuard, WriteRequest};

use serde::{Deserialize, Serialize};

/// Logical admin screen currently rendering, exposed by the host's view
/// context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdminView {
    /// The single-order detail view.
    OrderDetail,

    /// The order list view.
    OrderList,

    /// Any other admin screen, identified by the host's screen id.
    Other(String),
}
