//! Squarified treemap layout engine for market heatmaps.
//!
//! Given weighted, group-tagged items and a target rectangle, the engine
//! partitions the rectangle into one tile per item:
//!
//! - tiles cluster by group (e.g. market sector) into contiguous
//!   sub-rectangles,
//! - cluster area is proportional to the group's aggregate weight,
//! - tile area within a cluster is proportional to the item's own weight,
//! - the squarified heuristic keeps tiles near-square instead of slicing
//!   long thin slivers.
//!
//! The engine is a pure function over immutable input: no state between
//! calls, no I/O, deterministic output, safe to invoke from multiple
//! threads with different inputs.
//!
//! ```
//! use marketmap_layout::{compute_treemap, Rect, TreemapItem};
//!
//! let items = vec![
//!     TreemapItem::new("AAPL", 100.0).group("Tech"),
//!     TreemapItem::new("MSFT", 50.0).group("Tech"),
//!     TreemapItem::new("XOM", 50.0).group("Energy"),
//! ];
//! let tiles = compute_treemap(&items, Rect::new(0.0, 0.0, 200.0, 100.0));
//! assert_eq!(tiles.len(), 3);
//! ```

mod item;
mod squarify;
mod treemap;

pub use item::{GroupFrame, GroupedTreemap, PlacedTile, TreemapItem};
pub use squarify::squarify;
pub use treemap::{compute_treemap, compute_treemap_grouped, MIN_WEIGHT};

pub use marketmap_core::{Point, Rect, Size};
