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

//! Capability definitions for the restricted role
//!
//! Capabilities are a closed set of named boolean grants. Host stores
//! persist them as loose `name -> bool` maps; [`CapabilitySet`] converts to
//! and from that wire form so a misspelled capability name can only exist on
//! the host side, never in this crate.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Closed set of capability names used by the restricted role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Baseline admin-area access.
    Read,
    /// Open the content editor. Without this the host redirects the actor
    /// out of the admin area entirely.
    EditPosts,
    /// Finalize/publish edited content.
    PublishPosts,
    /// View a single order.
    ReadShopOrder,
    /// List orders; makes the orders menu visible.
    EditShopOrders,
    /// View orders owned by other actors.
    EditOthersShopOrders,
}

impl Capability {
    /// Every capability, in store-key order.
    pub const ALL: [Capability; 6] = [
        Capability::Read,
        Capability::EditPosts,
        Capability::PublishPosts,
        Capability::ReadShopOrder,
        Capability::EditShopOrders,
        Capability::EditOthersShopOrders,
    ];

    /// Key under which host stores persist this capability.
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Read => "read",
            Capability::EditPosts => "edit_posts",
            Capability::PublishPosts => "publish_posts",
            Capability::ReadShopOrder => "read_shop_order",
            Capability::EditShopOrders => "edit_shop_orders",
            Capability::EditOthersShopOrders => "edit_others_shop_orders",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named boolean grants for the restricted role, one flag per
/// [`Capability`].
///
/// The default is the read-only grant: everything needed to open and view
/// orders, without the ability to finalize anything. Granting `edit_posts`
/// while denying `publish_posts` is the intentional "can open editor, cannot
/// finalize" partial grant, not an oversight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitySet {
    pub read: bool,
    pub edit_posts: bool,
    pub publish_posts: bool,
    pub read_shop_order: bool,
    pub edit_shop_orders: bool,
    pub edit_others_shop_orders: bool,
}

impl Default for CapabilitySet {
    fn default() -> Self {
        Self {
            read: true,
            edit_posts: true,
            publish_posts: false,
            read_shop_order: true,
            edit_shop_orders: true,
            edit_others_shop_orders: true,
        }
    }
}

impl CapabilitySet {
    /// A set denying everything.
    pub fn deny_all() -> Self {
        Self {
            read: false,
            edit_posts: false,
            publish_posts: false,
            read_shop_order: false,
            edit_shop_orders: false,
            edit_others_shop_orders: false,
        }
    }

    /// Whether the given capability is granted.
    pub fn grants(&self, capability: Capability) -> bool {
        match capability {
            Capability::Read => self.read,
            Capability::EditPosts => self.edit_posts,
            Capability::PublishPosts => self.publish_posts,
            Capability::ReadShopOrder => self.read_shop_order,
            Capability::EditShopOrders => self.edit_shop_orders,
            Capability::EditOthersShopOrders => self.edit_others_shop_orders,
        }
    }

    /// Grant or deny a capability.
    pub fn set(&mut self, capability: Capability, granted: bool) {
        match capability {
            Capability::Read => self.read = granted,
            Capability::EditPosts => self.edit_posts = granted,
            Capability::PublishPosts => self.publish_posts = granted,
            Capability::ReadShopOrder => self.read_shop_order = granted,
            Capability::EditShopOrders => self.edit_shop_orders = granted,
            Capability::EditOthersShopOrders => self.edit_others_shop_orders = granted,
        }
    }

    /// Wire form for host stores: loose `name -> bool` map.
    pub fn to_store_map(&self) -> BTreeMap<String, bool> {
        Capability::ALL
            .iter()
            .map(|cap| (cap.as_str().to_string(), self.grants(*cap)))
            .collect()
    }

    /// Rebuild from a host store map. Missing keys are denied; keys this
    /// crate does not know are ignored (an incomplete grant degrades
    /// functionality silently rather than failing loudly).
    pub fn from_store_map(map: &BTreeMap<String, bool>) -> Self {
        let mut set = Self::deny_all();
        for cap in Capability::ALL {
            if let Some(granted) = map.get(cap.as_str()) {
                set.set(cap, *granted);
            }
        }
        set
    }
}
