//! Radial partition layout.
//!
//! Angular extents are distributed top-down: each slice splits its own span
//! among its children in proportion to their aggregated totals, so every
//! ring conserves its parent's angle exactly. Radial extents come in equal
//! squared-radius rings, which keeps ring areas comparable across depths.

use std::f64::consts::TAU;

use crate::log::debug;
use crate::slice::{SliceId, SunburstData};

/// Assign polar geometry to every slice in the arena.
///
/// `outer_radius` is the radius of the outermost ring edge in pixels. The
/// root takes the full circle with a degenerate radial span, so only real
/// categories occupy drawable rings.
pub fn partition(data: &mut SunburstData, outer_radius: f64) {
    if data.is_empty() {
        return;
    }
    let rings = data.levels();
    let ring_unit = outer_radius.max(0.0).powi(2) / rings as f64;

    let root = data.get_mut(SunburstData::ROOT);
    root.x = 0.0;
    root.dx = TAU;
    root.y = 0.0;
    root.dy = 0.0;

    subdivide(data, SunburstData::ROOT, ring_unit);
    debug!("partitioned {} slices into {} rings", data.len(), rings);
}

/// Lay out the children of `id`, then recurse into each.
fn subdivide(data: &mut SunburstData, id: SliceId, ring_unit: f64) {
    let parent = data.get(id);
    let start = parent.x;
    let span = parent.dx;
    let child_depth = parent.depth + 1;
    let child_count = parent.children.len();
    let weight_sum: f64 = parent
        .children
        .iter()
        .map(|child| data.get(*child).total)
        .sum();

    let mut cursor = start;
    for i in 0..child_count {
        let child_id = data.get(id).children[i];
        let weight = data.get(child_id).total;
        // Zero-weight sibling groups collapse onto the parent's start angle.
        let width = if weight_sum > 0.0 {
            span * (weight / weight_sum)
        } else {
            0.0
        };

        let child = data.get_mut(child_id);
        child.x = cursor;
        child.dx = width;
        child.y = child_depth as f64 * ring_unit;
        child.dy = ring_unit;
        cursor += width;

        subdivide(data, child_id, ring_unit);
    }
}
