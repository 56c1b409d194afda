//! Two-level squarified treemap: groups cluster into sub-rectangles sized by
//! their aggregate weight, then each group's members tile its cluster.

use std::cmp::Ordering;

use marketmap_core::Rect;

use crate::item::{GroupFrame, GroupedTreemap, PlacedTile, TreemapItem};
use crate::squarify::squarify;

/// Floor applied to item weights before areas are computed.
///
/// Weights at or below zero are lifted here so every item keeps a non-zero
/// share of the layout instead of vanishing.
pub const MIN_WEIGHT: f64 = 0.001;

/// Lay out `items` inside `bounds`, one tile per item.
///
/// Tiles cluster by group, cluster area is proportional to the group's
/// aggregate weight, and tile area within a cluster is proportional to the
/// item's own weight. Output order is unspecified (re-associate by `id`)
/// but deterministic for identical input. Empty input or degenerate bounds
/// yield an empty vec.
#[must_use]
pub fn compute_treemap(items: &[TreemapItem], bounds: Rect) -> Vec<PlacedTile> {
    compute_treemap_grouped(items, bounds).tiles
}

/// Lay out `items` inside `bounds` and also report each group's cluster
/// rectangle, for callers that draw sector borders or labels.
#[must_use]
pub fn compute_treemap_grouped(items: &[TreemapItem], bounds: Rect) -> GroupedTreemap {
    let mut layout = GroupedTreemap::default();
    if items.is_empty() || bounds.is_empty() {
        return layout;
    }

    // Bucket by group key; groups and their members keep first-seen order
    // so equal weights tie-break deterministically.
    let mut groups: Vec<Bucket<'_>> = Vec::new();
    for item in items {
        let clamped = clamp_weight(item.weight);
        match groups.iter_mut().find(|bucket| bucket.key == item.group) {
            Some(bucket) => {
                bucket.members.push(item);
                bucket.weight += clamped;
            }
            None => groups.push(Bucket {
                key: item.group.as_str(),
                members: vec![item],
                weight: clamped,
            }),
        }
    }

    let grand_total: f64 = groups.iter().map(|bucket| bucket.weight).sum();
    if grand_total <= 0.0 {
        return layout;
    }

    // Heavier groups first: squarify builds cleaner rows when the large
    // areas come early.
    groups.sort_by(|a, b| descending(a.weight, b.weight));

    let group_areas: Vec<f64> = groups
        .iter()
        .map(|bucket| bucket.weight / grand_total * bounds.area())
        .collect();
    let frames = squarify(&group_areas, bounds);
    debug_assert_eq!(frames.len(), groups.len());

    for (mut bucket, frame) in groups.into_iter().zip(frames) {
        bucket
            .members
            .sort_by(|a, b| descending(clamp_weight(a.weight), clamp_weight(b.weight)));

        let tile_areas: Vec<f64> = bucket
            .members
            .iter()
            .map(|item| clamp_weight(item.weight) / bucket.weight * frame.area())
            .collect();
        let tiles = squarify(&tile_areas, frame);
        debug_assert_eq!(tiles.len(), bucket.members.len());

        layout.groups.push(GroupFrame {
            group: bucket.key.to_string(),
            frame,
            weight: bucket.weight,
        });
        for (item, tile) in bucket.members.into_iter().zip(tiles) {
            layout.tiles.push(PlacedTile {
                id: item.id.clone(),
                group: item.group.clone(),
                frame: tile,
                value: item.value,
            });
        }
    }

    layout
}

/// One group's members accumulated during bucketing.
struct Bucket<'a> {
    key: &'a str,
    members: Vec<&'a TreemapItem>,
    weight: f64,
}

fn clamp_weight(weight: f64) -> f64 {
    weight.max(MIN_WEIGHT)
}

/// Descending order; ties (and non-finite weights) compare equal so the
/// stable sort preserves first-seen order.
fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
