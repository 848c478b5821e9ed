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

//! The gate: dependency wiring and the explicit lifecycle interface
//!
//! The host calls these methods directly at the matching points of its
//! request lifecycle instead of registering callbacks against named events:
//! [`Gate::on_activate`] at first activation, [`Gate::on_init`] on every
//! initialization cycle, [`Gate::on_view_render`] before rendering an admin
//! view, [`Gate::on_before_write`] before persisting any content update,
//! and [`Gate::on_uninstall`] at permanent removal.

use crate::actor::{ActorClassifier, IdentityProvider};
use crate::audit::{AuditEvent, AuditEventType, AuditLogger};
use crate::config::Config;
use crate::enforcement::nav::{NavGate, NavSuppression};
use crate::enforcement::view::{ViewGate, ViewSuppression};
use crate::enforcement::write::{WriteGuard, WriteRequest};
use crate::enforcement::AdminView;
use crate::error::GateResult;
use crate::registry::{RoleRegistry, RoleStore};
use crate::role::RoleDefinition;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Combined per-render directives from the view and navigation gates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderDirectives {
    pub view: ViewSuppression,
    pub nav: NavSuppression,
}

impl RenderDirectives {
    /// No directives; everything renders unmodified.
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether rendering is unaffected.
    pub fn is_none(&self) -> bool {
        self.view.is_none() && self.nav.is_none()
    }
}

/// One configured restricted role plus its host collaborators.
///
/// Explicitly constructed and passed to whichever request-handling context
/// needs it; there is no process-wide singleton. One gate per deployment:
/// a gate owns exactly one restricted role, and running several
/// differently configured restricted roles concurrently is unsupported.
pub struct Gate {
    classifier: ActorClassifier,
    registry: RoleRegistry,
    audit: Arc<AuditLogger>,
}

impl Gate {
    /// Resolve overrides once and wire the host collaborators.
    pub fn new(config: Config, identity: Arc<dyn IdentityProvider>, store: Arc<dyn RoleStore>) -> Self {
        let definition = RoleDefinition::resolve(&config.overrides());
        let audit = Arc::new(AuditLogger::new(config.audit_capacity()));
        let classifier = ActorClassifier::new(definition.role.slug.clone(), identity);
        let registry = RoleRegistry::new(definition, store);

        Self {
            classifier,
            registry,
            audit,
        }
    }

    /// The effective role definition, with overrides applied.
    pub fn definition(&self) -> &RoleDefinition {
        self.registry.definition()
    }

    /// The membership classifier.
    pub fn classifier(&self) -> &ActorClassifier {
        &self.classifier
    }

    /// The audit log.
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// First-activation hook. Arms the permanent teardown: after this the
    /// host is expected to call [`Gate::on_uninstall`] at uninstall time.
    /// Plain deactivation performs no store write.
    pub fn on_activate(&self) {
        info!(slug = %self.definition().role.slug, "gate activated; uninstall teardown armed");
    }

    /// Initialization-cycle hook: runs the unregister-then-register
    /// protocol so the persisted role converges to the current definition.
    pub fn on_init(&self) -> GateResult<()> {
        self.registry.sync()?;
        self.audit.record(
            AuditEvent::new(AuditEventType::RoleRegistered, "system")
                .with_detail("slug", self.definition().role.slug.clone()),
        );
        Ok(())
    }

    /// Per-view-render hook: evaluates the view and navigation gates for
    /// the given admin view. Both gates re-check membership independently.
    pub fn on_view_render(&self, view: &AdminView) -> RenderDirectives {
        let directives = RenderDirectives {
            view: ViewGate::new(&self.classifier).evaluate(view),
            nav: NavGate::new(&self.classifier).evaluate(),
        };

        if !directives.is_none() {
            let actor = self.classifier.actor_id().unwrap_or_else(|| "anonymous".to_string());
            self.audit.record(AuditEvent::new(AuditEventType::ViewSuppressed, actor));
        }

        directives
    }

    /// Pre-write hook: the authoritative enforcement point. Must run before
    /// any content update is persisted.
    pub fn on_before_write(&self, request: &WriteRequest) -> GateResult<()> {
        match WriteGuard::new(&self.classifier).check(request) {
            Ok(()) => Ok(()),
            Err(err) => {
                let actor = self.classifier.actor_id().unwrap_or_else(|| "anonymous".to_string());
                self.audit.record(
                    AuditEvent::new(AuditEventType::WriteRejected, actor)
                        .with_detail("content_id", request.content_id.clone())
                        .with_detail("content_type", request.content_type.clone()),
                );
                Err(err)
            }
        }
    }

    /// Uninstall hook: removes the role from the host store permanently.
    pub fn on_uninstall(&self) -> GateResult<()> {
        self.registry.unregister()?;
        self.audit.record(
            AuditEvent::new(AuditEventType::RoleUnregistered, "system")
                .with_detail("slug", self.definition().role.slug.clone()),
        );
        Ok(())
    }
}

impl std::fmt::Debug for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gate").field("definition", self.definition()).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::{Actor, MockIdentityProvider};
    use crate::registry::MemoryRoleStore;

    fn gate_for(actor: Option<Actor>) -> (Gate, Arc<MemoryRoleStore>) {
        let mut identity = MockIdentityProvider::new();
        identity.expect_current_actor().return_const(actor);
        let store = Arc::new(MemoryRoleStore::new());
        (Gate::new(Config::default(), Arc::new(identity), store.clone()), store)
    }

    #[test]
    fn test_on_init_syncs_registry() {
        let (gate, store) = gate_for(None);

        gate.on_init().unwrap();

        assert!(store.get_role("order_viewer").unwrap().is_some());
        assert_eq!(gate.audit().events_of_type(AuditEventType::RoleRegistered).len(), 1);
    }

    #[test]
    fn test_on_uninstall_removes_role() {
        let (gate, store) = gate_for(None);

        gate.on_init().unwrap();
        gate.on_uninstall().unwrap();

        assert!(store.get_role("order_viewer").unwrap().is_none());
        assert_eq!(gate.audit().events_of_type(AuditEventType::RoleUnregistered).len(), 1);
    }

    #[test]
    fn test_on_view_render_combines_gates() {
        let (gate, _) = gate_for(Some(Actor::new("u1").with_role("order_viewer")));

        let detail = gate.on_view_render(&AdminView::OrderDetail);
        assert!(!detail.view.is_none());
        assert!(!detail.nav.is_none());

        // Navigation stays suppressed on other views; the view gate does not fire.
        let list = gate.on_view_render(&AdminView::OrderList);
        assert!(list.view.is_none());
        assert!(!list.nav.is_none());
    }

    #[test]
    fn test_on_before_write_records_denial() {
        let (gate, _) = gate_for(Some(Actor::new("u1").with_role("order_viewer")));

        let err = gate.on_before_write(&WriteRequest::new("42", "shop_order")).unwrap_err();
        assert_eq!(err.status(), crate::error::WRITE_REJECTED_STATUS);

        let denials = gate.audit().events_of_type(AuditEventType::WriteRejected);
        assert_eq!(denials.len(), 1);
        assert_eq!(denials[0].actor, "u1");
        assert_eq!(denials[0].details.get("content_id").map(String::as_str), Some("42"));
    }

    #[test]
    fn test_unrestricted_actor_unaffected_everywhere() {
        let (gate, _) = gate_for(Some(Actor::new("u1").with_role("shop_manager")));

        assert!(gate.on_view_render(&AdminView::OrderDetail).is_none());
        assert!(gate.on_before_write(&WriteRequest::new("42", "shop_order")).is_ok());
        assert!(gate.audit().is_empty());
    }
}
