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

//! Audit trail for registry operations and enforcement denials

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use tracing::{info, warn};

/// Audit event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuditEventType {
    /// Role definition synced into the host store.
    RoleRegistered,
    /// Role removed from the host store.
    RoleUnregistered,
    /// Write attempt rejected at the write gate.
    WriteRejected,
    /// View or navigation directives issued for a restricted actor.
    ViewSuppressed,
}

/// Audit event entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Unique event ID.
    pub id: String,

    /// Event type.
    pub event_type: AuditEventType,

    /// Event timestamp.
    pub timestamp: DateTime<Utc>,

    /// Who triggered the event; `system` for lifecycle operations.
    pub actor: String,

    /// Additional event details.
    pub details: HashMap<String, String>,
}

impl AuditEvent {
    /// Create a new audit event.
    pub fn new(event_type: AuditEventType, actor: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            event_type,
            timestamp: Utc::now(),
            actor: actor.into(),
            details: HashMap::new(),
        }
    }

    /// Add a detail.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

/// Bounded in-memory audit log. Denials additionally emit `tracing`
/// warnings; lifecycle operations emit info events.
#[derive(Debug)]
pub struct AuditLogger {
    events: RwLock<VecDeque<AuditEvent>>,
    capacity: usize,
}

impl AuditLogger {
    /// Create a logger keeping at most `capacity` events.
    pub fn new(capacity: usize) -> Self {
        Self {
            events: RwLock::new(VecDeque::new()),
            capacity: capacity.max(1),
        }
    }

    /// Record an event, evicting the oldest entry when full.
    pub fn record(&self, event: AuditEvent) {
        match event.event_type {
            AuditEventType::WriteRejected => {
                warn!(actor = %event.actor, event_id = %event.id, "audit: write rejected");
            }
            _ => {
                info!(actor = %event.actor, event_type = ?event.event_type, event_id = %event.id, "audit event");
            }
        }

        let mut events = self.events.write();
        if events.len() == self.capacity {
            events.pop_front();
        }
        events.push_back(event);
    }

    /// Snapshot of all retained events, oldest first.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.read().iter().cloned().collect()
    }

    /// Retained events of one type.
    pub fn events_of_type(&self, event_type: AuditEventType) -> Vec<AuditEvent> {
        self.events.read().iter().filter(|event| event.event_type == event_type).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }
}

impl Default for AuditLogger {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_AUDIT_CAPACITY)
    }
}
