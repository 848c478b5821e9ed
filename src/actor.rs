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

//! Actor identity and restricted-role classification

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The authenticated principal making a request. Owned by the host identity
/// store; this crate only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Host user identifier.
    pub id: String,

    /// Slugs of every role assigned to the actor.
    pub roles: Vec<String>,
}

impl Actor {
    /// Create an actor with no roles.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            roles: Vec::new(),
        }
    }

    /// Add a role slug.
    pub fn with_role(mut self, slug: impl Into<String>) -> Self {
        self.roles.push(slug.into());
        self
    }

    /// Whether the actor holds the given role.
    pub fn has_role(&self, slug: &str) -> bool {
        self.roles.iter().any(|role| role == slug)
    }
}

/// Host identity/session store.
#[cfg_attr(test, mockall::automock)]
pub trait IdentityProvider: Send + Sync {
    /// The currently authenticated actor, if any.
    fn current_actor(&self) -> Option<Actor>;
}

/// Decides restricted-role membership for the current actor.
///
/// A pure read with no side effects and no caching across requests; every
/// enforcement point calls it fresh, any number of times per request.
pub struct ActorClassifier {
    restricted_slug: String,
    identity: Arc<dyn IdentityProvider>,
}

impl ActorClassifier {
    /// Create a classifier for the given restricted slug.
    pub fn new(restricted_slug: impl Into<String>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            restricted_slug: restricted_slug.into(),
            identity,
        }
    }

    /// The slug this classifier checks membership against.
    pub fn restricted_slug(&self) -> &str {
        &self.restricted_slug
    }

    /// `false` when no actor is authenticated; otherwise true iff the
    /// restricted slug appears among the actor's roles, regardless of any
    /// other roles held.
    pub fn is_restricted(&self) -> bool {
        match self.identity.current_actor() {
            Some(actor) => actor.has_role(&self.restricted_slug),
            None => false,
        }
    }

    /// Identifier of the current actor, for audit records.
    pub fn actor_id(&self) -> Option<String> {
        self.identity.current_actor().map(|actor| actor.id)
    }
}

impl std::fmt::Debug for ActorClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActorClassifier").field("restricted_slug", &self.restricted_slug).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier_for(actor: Option<Actor>) -> ActorClassifier {
        let mut identity = MockIdentityProvider::new();
        identity.expect_current_actor().return_const(actor);
        ActorClassifier::new("order_viewer", Arc::new(identity))
    }

    #[test]
    fn test_unauthenticated_is_not_restricted() {
        let classifier = classifier_for(None);
        assert!(!classifier.is_restricted());
        assert_eq!(classifier.actor_id(), None);
    }

    #[test]
    fn test_actor_without_role_is_not_restricted() {
        let actor = Actor::new("u1").with_role("editor");
        let classifier = classifier_for(Some(actor));
        assert!(!classifier.is_restricted());
    }

    #[test]
    fn test_actor_with_role_is_restricted() {
        let actor = Actor::new("u1").with_role("order_viewer");
        let classifier = classifier_for(Some(actor));
        assert!(classifier.is_restricted());
    }

    #[test]
    fn test_other_roles_do_not_mask_membership() {
        let actor = Actor::new("u1").with_role("editor").with_role("order_viewer").with_role("subscriber");
        let classifier = classifier_for(Some(actor));
        assert!(classifier.is_restricted());
    }

    #[test]
    fn test_classifier_tracks_overridden_slug() {
        let actor = Actor::new("u1").with_role("auditor");

        let mut identity = MockIdentityProvider::new();
        identity.expect_current_actor().return_const(Some(actor));
        let classifier = ActorClassifier::new("auditor", Arc::new(identity));

        assert!(classifier.is_restricted());
    }
}
