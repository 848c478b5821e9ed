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

//! Write-path rejection, the authoritative enforcement point
//!
//! View and navigation suppression only keep honest actors out of trouble;
//! a restricted actor could still reach the write path through another UI
//! route or a direct request. This gate runs before any content update is
//! persisted and terminates the request for restricted actors.

use crate::actor::ActorClassifier;
use crate::error::{GateError, GateResult};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// User-visible refusal shown when a restricted actor attempts a write.
pub const REFUSAL_MESSAGE: &str = "You are not allowed to edit content with this role.";

/// A pending content update, described just enough to refuse it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteRequest {
    /// Identifier of the content item being updated.
    pub content_id: String,

    /// Host content type, e.g. `shop_order` or `post`.
    pub content_type: String,
}

impl WriteRequest {
    pub fn new(content_id: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            content_id: content_id.into(),
            content_type: content_type.into(),
        }
    }
}

/// Write-path gate.
pub struct WriteGuard<'a> {
    classifier: &'a ActorClassifier,
}

impl<'a> WriteGuard<'a> {
    pub fn new(classifier: &'a ActorClassifier) -> Self {
        Self { classifier }
    }

    /// Check a pending update. For restricted actors this returns
    /// [`GateError::WriteRejected`] with the refusal message and status
    /// [`crate::error::WRITE_REJECTED_STATUS`]; the host must surface the
    /// message, halt the request, and leave the content unchanged. Writes by
    /// any other actor pass through untouched.
    pub fn check(&self, request: &WriteRequest) -> GateResult<()> {
        if !self.classifier.is_restricted() {
            return Ok(());
        }

        warn!(
            content_id = %request.content_id,
            content_type = %request.content_type,
            slug = %self.classifier.restricted_slug(),
            "write rejected for restricted actor"
        );

        Err(GateError::WriteRejected {
            message: REFUSAL_MESSAGE.to_string(),
        })
    }
}
