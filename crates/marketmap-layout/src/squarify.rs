//! Squarified row placement (Bruls, Huizing, van Wijk).
//!
//! [`squarify`] fills a rectangle with one tile per requested area, building
//! greedy rows that keep each tile's aspect ratio as close to 1 as the
//! area sequence allows. Callers pass areas in the order tiles should be
//! consumed; placing larger areas first produces markedly fewer slivers.

use marketmap_core::Rect;

/// Partition `bounds` into one rectangle per entry of `areas`.
///
/// Tiles are returned in input order and jointly cover `bounds` when the
/// areas sum to `bounds.area()`. Empty `areas` or degenerate `bounds`
/// produce an empty vec; otherwise the output always has the same length
/// as the input.
#[must_use]
pub fn squarify(areas: &[f64], bounds: Rect) -> Vec<Rect> {
    let mut tiles = Vec::with_capacity(areas.len());
    if areas.is_empty() || bounds.is_empty() {
        return tiles;
    }

    let mut remaining = bounds;
    let mut next = 0;

    while next < areas.len() {
        // New rows stack as columns while the remaining space is wide,
        // as rows while it is tall. `side` is the fixed dimension.
        let vertical = remaining.width >= remaining.height;
        let side = if vertical {
            remaining.height
        } else {
            remaining.width
        };
        if side <= 0.0 {
            break;
        }

        // Grow the row while the worst member stays at least as square.
        let mut end = next + 1;
        let mut row_area = areas[next];
        let mut worst = worst_aspect(&areas[next..end], row_area, side);
        while end < areas.len() {
            let grown_area = row_area + areas[end];
            let grown = worst_aspect(&areas[next..=end], grown_area, side);
            if grown > worst {
                break;
            }
            row_area = grown_area;
            worst = grown;
            end += 1;
        }

        remaining = place_row(&areas[next..end], row_area, vertical, remaining, &mut tiles);
        next = end;
    }

    // Normalized areas cannot exhaust the space early; if floating-point
    // drift ever does, every leftover area still gets a (degenerate) tile
    // so the one-tile-per-area contract holds.
    while tiles.len() < areas.len() {
        tiles.push(Rect::new(remaining.x, remaining.y, 0.0, 0.0));
    }

    tiles
}

/// Worst (largest) long-side/short-side ratio among a candidate row's
/// members, for a row of `row_area` laid against a fixed side of `side`.
fn worst_aspect(areas: &[f64], row_area: f64, side: f64) -> f64 {
    if row_area <= 0.0 || side <= 0.0 {
        return f64::INFINITY;
    }
    let thickness = row_area / side;
    let mut worst = 1.0f64;
    for &area in areas {
        if area <= 0.0 {
            continue;
        }
        let length = area / thickness;
        worst = worst.max((thickness / length).max(length / thickness));
    }
    worst
}

/// Lay one row of tiles along the fixed axis of `remaining` and return the
/// rectangle left over for subsequent rows.
fn place_row(
    areas: &[f64],
    row_area: f64,
    vertical: bool,
    remaining: Rect,
    tiles: &mut Vec<Rect>,
) -> Rect {
    let side = if vertical {
        remaining.height
    } else {
        remaining.width
    };
    let raw_thickness = if side > 0.0 { row_area / side } else { 0.0 };

    if vertical {
        // Column consuming width; members stack top to bottom.
        let thickness = raw_thickness.clamp(0.0, remaining.width);
        let mut cursor = remaining.y;
        for &area in areas {
            let length = if thickness > 0.0 { area / thickness } else { 0.0 };
            let length = length.clamp(0.0, remaining.max_y() - cursor);
            tiles.push(Rect::new(remaining.x, cursor, thickness, length));
            cursor += length;
        }
        Rect::new(
            remaining.x + thickness,
            remaining.y,
            remaining.width - thickness,
            remaining.height,
        )
    } else {
        // Row consuming height; members run left to right.
        let thickness = raw_thickness.clamp(0.0, remaining.height);
        let mut cursor = remaining.x;
        for &area in areas {
            let length = if thickness > 0.0 { area / thickness } else { 0.0 };
            let length = length.clamp(0.0, remaining.max_x() - cursor);
            tiles.push(Rect::new(cursor, remaining.y, length, thickness));
            cursor += length;
        }
        Rect::new(
            remaining.x,
            remaining.y + thickness,
            remaining.width,
            remaining.height - thickness,
        )
    }
}
