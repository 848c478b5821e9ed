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

//! Navigation suppression on every admin view

use crate::actor::ActorClassifier;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Menu sections hidden from restricted actors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuSection {
    /// Generic post management.
    Posts,
    /// Comment management.
    Comments,
    /// The submenu under the orders section.
    OrderSubmenu,
}

impl MenuSection {
    pub const ALL: [MenuSection; 3] = [MenuSection::Posts, MenuSection::Comments, MenuSection::OrderSubmenu];
}

/// Row-level quick actions hidden from restricted actors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowAction {
    /// The "complete order" quick action on order list rows.
    CompleteOrder,
}

/// Directives the host applies to admin navigation before rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSuppression {
    /// Hide every "add new" entry point (title-bar buttons and links to the
    /// new-content screen).
    pub hide_add_new: bool,

    /// Menu sections to hide entirely.
    pub hidden_menus: Vec<MenuSection>,

    /// Row-level quick actions to hide.
    pub hidden_row_actions: Vec<RowAction>,
}

impl NavSuppression {
    /// No directives; navigation renders unmodified.
    pub fn none() -> Self {
        Self::default()
    }

    /// The full set of directives for a restricted actor.
    pub fn full() -> Self {
        Self {
            hide_add_new: true,
            hidden_menus: MenuSection::ALL.to_vec(),
            hidden_row_actions: vec![RowAction::CompleteOrder],
        }
    }

    /// Whether these directives change navigation at all.
    pub fn is_none(&self) -> bool {
        !self.hide_add_new && self.hidden_menus.is_empty() && self.hidden_row_actions.is_empty()
    }
}

/// Navigation-suppression gate; fires on every admin view.
pub struct NavGate<'a> {
    classifier: &'a ActorClassifier,
}

impl<'a> NavGate<'a> {
    pub fn new(classifier: &'a ActorClassifier) -> Self {
        Self { classifier }
    }

    /// Evaluate directives for the current actor.
    pub fn evaluate(&self) -> NavSuppression {
        if !self.classifier.is_restricted() {
            return NavSuppression::none();
        }

        debug!(slug = %self.classifier.restricted_slug(), "suppressing admin navigation");
        NavSuppression::full()
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
    fn test_restricted_actor_navigation_hidden() {
        let classifier = classifier_for(Some(Actor::new("u1").with_role("order_viewer")));
        let suppression = NavGate::new(&classifier).evaluate();

        assert!(suppression.hide_add_new);
        assert!(suppression.hidden_menus.contains(&MenuSection::Posts));
        assert!(suppression.hidden_menus.contains(&MenuSection::Comments));
        assert!(suppression.hidden_menus.contains(&MenuSection::OrderSubmenu));
        assert_eq!(suppression.hidden_row_actions, vec![RowAction::CompleteOrder]);
    }

    #[test]
    fn test_unrestricted_actor_navigation_unmodified() {
        let classifier = classifier_for(Some(Actor::new("u1").with_role("administrator")));
        assert!(NavGate::new(&classifier).evaluate().is_none());
    }

    #[test]
    fn test_unauthenticated_navigation_unmodified() {
        let classifier = classifier_for(None);
        assert!(NavGate::new(&classifier).evaluate().is_none());
    }
}
