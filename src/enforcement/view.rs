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

//! View suppression for the single-order detail view

use crate::actor::ActorClassifier;
use crate::enforcement::AdminView;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Interactive controls on the order detail view that are removed for
/// restricted actors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderControl {
    /// Billing/shipping address edit links.
    AddressEditLink,
    /// Control for adding an order note.
    OrderNoteAdd,
    /// Control for deleting an existing order note.
    OrderNoteDelete,
    /// Custom-field panel.
    CustomFieldsPanel,
    /// Downloadable-product permissions panel.
    DownloadsPanel,
    /// Order-actions panel.
    OrderActionsPanel,
    /// Refund controls in the line-items panel.
    RefundControls,
}

impl OrderControl {
    /// Every control the gate suppresses.
    pub const ALL: [OrderControl; 7] = [
        OrderControl::AddressEditLink,
        OrderControl::OrderNoteAdd,
        OrderControl::OrderNoteDelete,
        OrderControl::CustomFieldsPanel,
        OrderControl::DownloadsPanel,
        OrderControl::OrderActionsPanel,
        OrderControl::RefundControls,
    ];
}

/// Directives the host applies to the order detail view before rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSuppression {
    /// Controls to remove from the rendered view.
    pub removed_controls: Vec<OrderControl>,

    /// Mark the remaining form inputs non-interactive and visually dimmed.
    pub disable_inputs: bool,

    /// Exclude enhanced select widgets from enhancement entirely. A native
    /// disabled attribute does not suppress interaction on enhanced
    /// widgets, so they must not be enhanced at all on this view.
    pub suppress_enhanced_selects: bool,
}

impl ViewSuppression {
    /// No directives; the view renders unmodified.
    pub fn none() -> Self {
        Self::default()
    }

    /// The full set of directives for a restricted actor on the order
    /// detail view.
    pub fn full() -> Self {
        Self {
            removed_controls: OrderControl::ALL.to_vec(),
            disable_inputs: true,
            suppress_enhanced_selects: true,
        }
    }

    /// Whether these directives change the view at all.
    pub fn is_none(&self) -> bool {
        self.removed_controls.is_empty() && !self.disable_inputs && !self.suppress_enhanced_selects
    }
}

/// View-suppression gate; fires only on the single-order detail view.
pub struct ViewGate<'a> {
    classifier: &'a ActorClassifier,
}

impl<'a> ViewGate<'a> {
    pub fn new(classifier: &'a ActorClassifier) -> Self {
        Self { classifier }
    }

    /// Evaluate directives for the given view. Non-restricted actors and
    /// views other than the order detail view get no directives.
    pub fn evaluate(&self, view: &AdminView) -> ViewSuppression {
        if !self.classifier.is_restricted() {
            return ViewSuppression::none();
        }

        match view {
            AdminView::OrderDetail => {
                debug!(slug = %self.classifier.restricted_slug(), "suppressing order detail controls");
                ViewSuppression::full()
            }
            _ => ViewSuppression::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::{Actor, MockIdentityProvider};
    use std::sync::Arc;

    fn classifier_for(actor: Option<Actor>) -> ActorClassifier {
        let mut identity = MockIdentityProvider::new();
        identity.expect_current_actor().return_const(actor);
        ActorClassifier::new("order_viewer", Arc::new(identity))
    }

    #[test]
    fn test_restricted_actor_on_order_detail() {
        let classifier = classifier_for(Some(Actor::new("u1").with_role("order_viewer")));
        let suppression = ViewGate::new(&classifier).evaluate(&AdminView::OrderDetail);

        assert_eq!(suppression, ViewSuppression::full());
        assert!(suppression.removed_controls.contains(&OrderControl::AddressEditLink));
        assert!(suppression.removed_controls.contains(&OrderControl::RefundControls));
        assert!(suppression.disable_inputs);
        assert!(suppression.suppress_enhanced_selects);
    }

    #[test]
    fn test_restricted_actor_on_other_views() {
        let classifier = classifier_for(Some(Actor::new("u1").with_role("order_viewer")));
        let gate = ViewGate::new(&classifier);

        assert!(gate.evaluate(&AdminView::OrderList).is_none());
        assert!(gate.evaluate(&AdminView::Other("dashboard".to_string())).is_none());
    }

    #[test]
    fn test_unrestricted_actor_renders_unmodified() {
        let classifier = classifier_for(Some(Actor::new("u1").with_role("shop_manager")));
        let suppression = ViewGate::new(&classifier).evaluate(&AdminView::OrderDetail);

        assert!(suppression.is_none());
    }

    #[test]
    fn test_unauthenticated_renders_unmodified() {
        let classifier = classifier_for(None);
        assert!(ViewGate::new(&classifier).evaluate(&AdminView::OrderDetail).is_none());
    }
}
