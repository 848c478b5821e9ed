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

//! End-to-end scenarios: a host session driving the full gate lifecycle.

use ordergate::{
    Actor, AdminView, Capability, CapabilitySet, Config, Gate, IdentityProvider, MemoryRoleStore, OrderControl,
    RoleStore, WriteRequest, WRITE_REJECTED_STATUS,
};
use parking_lot::RwLock;
use std::sync::Arc;

/// Host session fixture: whoever is signed in for the current request.
#[derive(Default)]
struct Session {
    actor: RwLock<Option<Actor>>,
}

impl Session {
    fn sign_in(&self, actor: Actor) {
        *self.actor.write() = Some(actor);
    }
}

impl IdentityProvider for Session {
    fn current_actor(&self) -> Option<Actor> {
        self.actor.read().clone()
    }
}

fn deployment(config: Config) -> (Gate, Arc<Session>, Arc<MemoryRoleStore>) {
    let session = Arc::new(Session::default());
    let store = Arc::new(MemoryRoleStore::new());
    let gate = Gate::new(config, session.clone(), store.clone());
    gate.on_activate();
    gate.on_init().unwrap();
    (gate, session, store)
}

#[test]
fn scenario_actor_without_roles_sees_unmodified_views() {
    let (gate, session, _) = deployment(Config::default());
    session.sign_in(Actor::new("u1"));

    assert!(!gate.classifier().is_restricted());
    let directives = gate.on_view_render(&AdminView::OrderDetail);
    assert!(directives.is_none());
    assert!(gate.on_before_write(&WriteRequest::new("42", "shop_order")).is_ok());
}

#[test]
fn scenario_restricted_actor_order_detail_is_stripped() {
    let (gate, session, _) = deployment(Config::default());
    session.sign_in(Actor::new("u1").with_role("order_viewer"));

    let directives = gate.on_view_render(&AdminView::OrderDetail);

    for control in [
        OrderControl::AddressEditLink,
        OrderControl::OrderNoteAdd,
        OrderControl::CustomFieldsPanel,
        OrderControl::DownloadsPanel,
        OrderControl::OrderActionsPanel,
    ] {
        assert!(directives.view.removed_controls.contains(&control), "{control:?} should be removed");
    }
    assert!(directives.view.disable_inputs);
    assert!(directives.view.suppress_enhanced_selects);
}

#[test]
fn scenario_restricted_actor_write_is_terminal() {
    let (gate, session, store) = deployment(Config::default());
    session.sign_in(Actor::new("u1").with_role("order_viewer"));

    let err = gate.on_before_write(&WriteRequest::new("42", "shop_order")).unwrap_err();

    assert_eq!(err.status(), WRITE_REJECTED_STATUS);
    assert!(!err.to_string().is_empty());
    // The role entry itself is untouched by the rejected request.
    assert!(store.get_role("order_viewer").unwrap().is_some());
}

#[test]
fn scenario_restricted_actor_other_screens_lose_navigation() {
    let (gate, session, _) = deployment(Config::default());
    session.sign_in(Actor::new("u1").with_role("order_viewer"));

    let directives = gate.on_view_render(&AdminView::Other("dashboard".to_string()));

    assert!(directives.view.is_none());
    assert!(directives.nav.hide_add_new);
    assert!(!directives.nav.hidden_menus.is_empty());
}

#[test]
fn scenario_capability_override_converges_on_second_cycle() {
    let store = Arc::new(MemoryRoleStore::new());
    let session = Arc::new(Session::default());

    // First cycle with the built-in defaults.
    let first = Gate::new(Config::default(), session.clone(), store.clone());
    first.on_init().unwrap();
    let persisted = store.get_role("order_viewer").unwrap().unwrap();
    assert_eq!(persisted.capabilities.get("edit_posts"), Some(&true));

    // Deployer tightens the grant between runs; the second cycle wins.
    let mut caps = CapabilitySet::deny_all();
    caps.set(Capability::Read, true);
    caps.set(Capability::ReadShopOrder, true);
    let config = Config {
        capabilities: Some(caps.clone()),
        ..Config::default()
    };

    let second = Gate::new(config, session, store.clone());
    second.on_init().unwrap();

    let persisted = store.get_role("order_viewer").unwrap().unwrap();
    assert_eq!(persisted.capabilities, caps.to_store_map());
    assert_eq!(persisted.capabilities.get("edit_posts"), Some(&false));
}

#[test]
fn scenario_identity_override_controls_membership() {
    let config = Config {
        role_slug: Some("auditor".to_string()),
        role_name: Some("Auditor".to_string()),
        ..Config::default()
    };
    let (gate, session, store) = deployment(config);

    assert!(store.get_role("auditor").unwrap().is_some());
    assert!(store.get_role("order_viewer").unwrap().is_none());

    // Membership follows the overridden slug, not the default.
    session.sign_in(Actor::new("u1").with_role("order_viewer"));
    assert!(!gate.classifier().is_restricted());

    session.sign_in(Actor::new("u1").with_role("auditor"));
    assert!(gate.classifier().is_restricted());
    assert!(gate.on_before_write(&WriteRequest::new("42", "shop_order")).is_err());
}

#[test]
fn scenario_uninstall_removes_role_permanently() {
    let (gate, _, store) = deployment(Config::default());

    gate.on_uninstall().unwrap();

    assert!(store.get_role("order_viewer").unwrap().is_none());
    assert!(store.is_empty());
}
