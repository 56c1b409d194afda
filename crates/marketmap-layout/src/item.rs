//! Treemap input and output records.

use marketmap_core::Rect;
use serde::{Deserialize, Serialize};

/// A weighted, group-tagged entry to lay out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreemapItem {
    /// Opaque identifier, echoed back on the placed tile
    pub id: String,
    /// Non-negative share of area; values at or below zero are lifted to
    /// [`MIN_WEIGHT`](crate::MIN_WEIGHT) at layout time
    pub weight: f64,
    /// Clustering key (e.g. a market sector); items sharing a group tile together
    pub group: String,
    /// Caller payload carried through untouched (e.g. signed change % driving
    /// tile color); never consulted by the layout algorithm
    pub value: f64,
}

impl TreemapItem {
    /// Create a new item with an empty group and zero payload value.
    #[must_use]
    pub fn new(id: impl Into<String>, weight: f64) -> Self {
        Self {
            id: id.into(),
            weight,
            group: String::new(),
            value: 0.0,
        }
    }

    /// Set the clustering group.
    #[must_use]
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Set the carried payload value.
    #[must_use]
    pub const fn value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }
}

/// One laid-out tile: the item's identity plus its assigned rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedTile {
    /// Identifier of the item this tile belongs to
    pub id: String,
    /// The item's group, echoed back for re-association
    pub group: String,
    /// Assigned rectangle within the layout bounds
    pub frame: Rect,
    /// The item's payload value, echoed back for re-association
    pub value: f64,
}

/// The rectangle allocated to one group's cluster of tiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupFrame {
    /// Group key
    pub group: String,
    /// Cluster rectangle; the union of the group's tiles
    pub frame: Rect,
    /// Aggregate clamped weight of the group's members
    pub weight: f64,
}

/// A complete treemap layout: cluster frames plus individual tiles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupedTreemap {
    /// One frame per distinct group, heaviest first
    pub groups: Vec<GroupFrame>,
    /// One tile per input item
    pub tiles: Vec<PlacedTile>,
}
