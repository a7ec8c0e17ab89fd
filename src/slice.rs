//! The laid-out slice tree.
//!
//! Slices live in a flat arena in pre-order (root first, then each branch
//! depth-first), mirroring the paint order of the rings. Parent/child links
//! are arena indices, so the whole tree is `Clone` and walkable without
//! reference cycles.

use std::fmt;

/// Index of a slice inside its [`SunburstData`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SliceId(pub(crate) usize);

impl SliceId {
    /// Id for the slice at `index` in arena (paint) order.
    ///
    /// Hosts use this to map a clicked path element back to its slice:
    /// elements come out of [`crate::render::Scene`] in arena order.
    #[inline]
    pub fn from_index(index: usize) -> SliceId {
        SliceId(index)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Stable selection key for a slice, derived from its identity path.
///
/// Hosts treat this as an opaque handle when wiring selection back into
/// their own data model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SelectorKey(String);

impl SelectorKey {
    pub fn from_segments<'a, I>(segments: I) -> SelectorKey
    where
        I: IntoIterator<Item = &'a str>,
    {
        SelectorKey(segments.into_iter().collect::<Vec<_>>().join("|"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for slices without any identity path, i.e. the synthetic root.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SelectorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of a slice's tooltip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TooltipItem {
    pub display_name: String,
    pub value: String,
}

/// A single ring segment with its aggregated value and polar geometry.
///
/// Angular extent (`x`, `dx`) is in radians. Radial extent (`y`, `dy`) is in
/// squared pixels; take the square root to get drawable radii. All geometry
/// is zero until [`layout::partition`](crate::layout::partition) runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slice {
    /// Category label, absent on the synthetic root.
    pub name: Option<String>,
    /// Own measure value clamped to zero or above.
    pub value: f64,
    /// Own value plus the totals of all children.
    pub total: f64,
    /// Inherited branch color; `None` while an ancestor chain has no color.
    pub color: Option<String>,
    /// Selection key, empty on the root.
    pub selector: SelectorKey,
    pub children: Vec<SliceId>,
    pub parent: Option<SliceId>,
    /// Rows shown when this slice is hovered.
    pub tooltip_info: Vec<TooltipItem>,
    /// Start angle in radians, measured clockwise from 12 o'clock.
    pub x: f64,
    /// Angular width in radians.
    pub dx: f64,
    /// Inner radial position, squared.
    pub y: f64,
    /// Radial thickness, squared.
    pub dy: f64,
    /// Distance from the root: 0 for the root, 1 for top-level categories.
    pub depth: usize,
}

impl Slice {
    /// The label as shown, empty for the root.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    #[inline]
    pub fn end_angle(&self) -> f64 {
        self.x + self.dx
    }

    /// Inner edge radius in pixels.
    #[inline]
    pub fn inner_radius(&self) -> f64 {
        self.y.max(0.0).sqrt()
    }

    /// Outer edge radius in pixels.
    #[inline]
    pub fn outer_radius(&self) -> f64 {
        (self.y + self.dy).max(0.0).sqrt()
    }
}

/// The full laid-out tree plus its grand total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SunburstData {
    pub(crate) total: f64,
    pub(crate) slices: Vec<Slice>,
}

impl SunburstData {
    /// The synthetic root always sits at arena index 0.
    pub const ROOT: SliceId = SliceId(0);

    /// Sum of the clamped values of every slice in the tree.
    #[inline]
    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    #[inline]
    pub fn get(&self, id: SliceId) -> &Slice {
        &self.slices[id.0]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: SliceId) -> &mut Slice {
        &mut self.slices[id.0]
    }

    pub fn root(&self) -> &Slice {
        &self.slices[Self::ROOT.0]
    }

    /// All slice ids in pre-order.
    pub fn ids(&self) -> impl Iterator<Item = SliceId> + '_ {
        (0..self.slices.len()).map(SliceId)
    }

    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// Ids of the top-level categories (the root's direct children).
    pub fn top_level(&self) -> &[SliceId] {
        match self.slices.first() {
            Some(root) => &root.children,
            None => &[],
        }
    }

    /// Number of rings including the degenerate root ring.
    ///
    /// This is the divisor for the squared-radius ring unit, so a tree with
    /// only top-level categories yields 2.
    pub fn levels(&self) -> usize {
        1 + self
            .slices
            .iter()
            .map(|slice| slice.depth)
            .max()
            .unwrap_or(0)
    }

    /// Ancestor chain of `id` from just below the root down to and including
    /// `id` itself. Empty for the root.
    pub fn tree_path(&self, id: SliceId) -> Vec<SliceId> {
        let mut path = Vec::new();
        let mut current = id;
        while let Some(parent) = self.get(current).parent {
            path.push(current);
            current = parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// root -> a, b; b -> b1.
    fn demo() -> SunburstData {
        let root = Slice {
            children: vec![SliceId(1), SliceId(2)],
            total: 20.0,
            ..Slice::default()
        };
        let a = Slice {
            name: Some("a".into()),
            parent: Some(SliceId(0)),
            depth: 1,
            value: 10.0,
            total: 10.0,
            ..Slice::default()
        };
        let b = Slice {
            name: Some("b".into()),
            parent: Some(SliceId(0)),
            children: vec![SliceId(3)],
            depth: 1,
            total: 10.0,
            ..Slice::default()
        };
        let b1 = Slice {
            name: Some("b1".into()),
            parent: Some(SliceId(2)),
            depth: 2,
            value: 10.0,
            total: 10.0,
            ..Slice::default()
        };
        SunburstData {
            total: 20.0,
            slices: vec![root, a, b, b1],
        }
    }

    #[test]
    fn tree_path_excludes_root_and_orders_outward() {
        let data = demo();
        assert_eq!(data.tree_path(SliceId(3)), vec![SliceId(2), SliceId(3)]);
        assert_eq!(data.tree_path(SliceId(1)), vec![SliceId(1)]);
        assert!(data.tree_path(SunburstData::ROOT).is_empty());
    }

    #[test]
    fn levels_counts_root_ring() {
        let data = demo();
        assert_eq!(data.levels(), 3);
    }

    #[test]
    fn top_level_lists_root_children() {
        let data = demo();
        assert_eq!(data.top_level(), &[SliceId(1), SliceId(2)]);
        assert_eq!(data.get(SliceId(2)).display_name(), "b");
    }

    #[test]
    fn selector_key_segments() {
        let key = SelectorKey::from_segments(["europe", "france"]);
        assert_eq!(key.as_str(), "europe|france");
        assert!(!key.is_empty());
        assert!(SelectorKey::default().is_empty());
    }
}
