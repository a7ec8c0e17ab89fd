//! Click handling: selection, ancestor highlighting and the center labels.
//!
//! Clicking a slice lights up its whole branch (the slice plus every
//! ancestor below the root) and fills the hub labels with the slice's share
//! of the grand total. Clicking the background reverts to the resting state
//! but keeps the last label text around, hidden, the way a highlight fades
//! without being erased.

use std::collections::HashSet;

use crate::format::ValueFormatter;
use crate::slice::{SelectorKey, SliceId, SunburstData};

/// Where hosts report selection changes.
///
/// The chart core never talks to a host directly; it hands the stable
/// selector key to this seam and lets the embedding propagate it.
pub trait SelectionManager {
    fn select(&mut self, key: &SelectorKey);
    fn clear(&mut self);
}

/// Built-in [`SelectionManager`] that just remembers the active key.
#[derive(Debug, Clone, Default)]
pub struct InMemorySelectionManager {
    current: Option<SelectorKey>,
}

impl InMemorySelectionManager {
    pub fn new() -> InMemorySelectionManager {
        InMemorySelectionManager::default()
    }

    pub fn current(&self) -> Option<&SelectorKey> {
        self.current.as_ref()
    }
}

impl SelectionManager for InMemorySelectionManager {
    fn select(&mut self, key: &SelectorKey) {
        self.current = Some(key.clone());
    }

    fn clear(&mut self) {
        self.current = None;
    }
}

/// What the pointer landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Slice(SliceId),
    Background,
}

/// Text content of the two hub labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CenterText {
    pub category: String,
    pub percentage: String,
    /// Labels take the clicked slice's branch color.
    pub color: Option<String>,
}

/// Mutable interaction state, kept apart from the immutable slice tree.
#[derive(Debug, Clone)]
pub struct SelectionState {
    selected: Option<SliceId>,
    highlighted: HashSet<SliceId>,
    labels_hidden: bool,
    interactive: bool,
    center: Option<CenterText>,
}

impl Default for SelectionState {
    fn default() -> SelectionState {
        SelectionState {
            selected: None,
            highlighted: HashSet::new(),
            labels_hidden: true,
            interactive: false,
            center: None,
        }
    }
}

impl SelectionState {
    pub fn new() -> SelectionState {
        SelectionState::default()
    }

    pub fn selected(&self) -> Option<SliceId> {
        self.selected
    }

    pub fn labels_hidden(&self) -> bool {
        self.labels_hidden
    }

    /// Whether the chart has entered interactive (clicked) mode.
    pub fn interactive(&self) -> bool {
        self.interactive
    }

    pub fn center(&self) -> Option<&CenterText> {
        self.center.as_ref()
    }

    pub fn is_highlighted(&self, id: SliceId) -> bool {
        self.highlighted.contains(&id)
    }

    /// True while some branch is highlighted and the rest should dim.
    pub fn has_highlight(&self) -> bool {
        !self.highlighted.is_empty()
    }

    /// Apply a pointer click to the state.
    pub fn click(
        &mut self,
        data: &SunburstData,
        target: ClickTarget,
        manager: &mut dyn SelectionManager,
        percent: &ValueFormatter,
    ) {
        match target {
            ClickTarget::Slice(id) => self.click_slice(data, id, manager, percent),
            ClickTarget::Background => self.click_background(manager),
        }
    }

    fn click_slice(
        &mut self,
        data: &SunburstData,
        id: SliceId,
        manager: &mut dyn SelectionManager,
        percent: &ValueFormatter,
    ) {
        let slice = data.get(id);
        if !slice.selector.is_empty() {
            manager.select(&slice.selector);
        }

        let total = data.total();
        let ratio = if total > 0.0 { slice.total / total } else { 0.0 };
        self.center = Some(CenterText {
            category: slice.display_name().to_string(),
            // display(): a share below zero never reaches the label.
            percentage: percent.display(ratio),
            color: slice.color.clone(),
        });
        self.labels_hidden = false;
        self.interactive = true;
        self.selected = Some(id);
        // Replace, never extend: only one branch glows at a time.
        self.highlighted = data.tree_path(id).into_iter().collect();
    }

    /// Revert to the resting state. Works with or without a slice tree.
    pub fn click_background(&mut self, manager: &mut dyn SelectionManager) {
        manager.clear();
        self.selected = None;
        self.highlighted.clear();
        self.labels_hidden = true;
        self.interactive = false;
        // The center text stays in place, merely hidden.
    }

    /// Forget everything tied to slice ids; called when the tree is rebuilt.
    ///
    /// Label visibility, interactivity and the last center text survive
    /// rebuilds, matching how the chart surface persists across updates.
    pub fn invalidate(&mut self) {
        self.selected = None;
        self.highlighted.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::WheelPalette;
    use crate::convert::convert;
    use crate::data::{CategoryNode, Dataset, MeasureColumn};
    use crate::layout::partition;

    fn demo() -> SunburstData {
        let dataset = Dataset::new(
            CategoryNode::root(vec![
                CategoryNode::leaf("A", 10.0),
                CategoryNode::branch(
                    "B",
                    vec![CategoryNode::leaf("B1", 5.0), CategoryNode::leaf("B2", 5.0)],
                ),
            ]),
            MeasureColumn::new("Sales"),
        );
        let mut palette = WheelPalette::default();
        let mut data = convert(&dataset, &mut palette).unwrap();
        partition(&mut data, 250.0);
        data
    }

    #[test]
    fn clicking_a_leaf_highlights_its_branch() {
        let data = demo();
        let mut state = SelectionState::new();
        let mut manager = InMemorySelectionManager::new();
        let percent = ValueFormatter::percentage();

        let b1 = SliceId(3);
        state.click(&data, ClickTarget::Slice(b1), &mut manager, &percent);

        assert_eq!(state.selected(), Some(b1));
        assert!(state.is_highlighted(SliceId(2)));
        assert!(state.is_highlighted(b1));
        assert!(!state.is_highlighted(SliceId(1)));
        assert!(!state.is_highlighted(SunburstData::ROOT));
        assert!(state.interactive());
        assert!(!state.labels_hidden());
        assert_eq!(manager.current(), Some(&data.get(b1).selector));

        let center = state.center().unwrap();
        assert_eq!(center.category, "B1");
        assert_eq!(center.percentage, "25.00%");
        assert_eq!(center.color, data.get(b1).color);
    }

    #[test]
    fn a_second_click_replaces_the_highlight() {
        let data = demo();
        let mut state = SelectionState::new();
        let mut manager = InMemorySelectionManager::new();
        let percent = ValueFormatter::percentage();

        state.click(&data, ClickTarget::Slice(SliceId(3)), &mut manager, &percent);
        state.click(&data, ClickTarget::Slice(SliceId(1)), &mut manager, &percent);

        assert!(state.is_highlighted(SliceId(1)));
        assert!(!state.is_highlighted(SliceId(2)));
        assert!(!state.is_highlighted(SliceId(3)));
        assert_eq!(state.center().unwrap().percentage, "50.00%");
        assert_eq!(state.center().unwrap().category, "A");
    }

    #[test]
    fn background_click_clears_but_keeps_label_text() {
        let data = demo();
        let mut state = SelectionState::new();
        let mut manager = InMemorySelectionManager::new();
        let percent = ValueFormatter::percentage();

        state.click(&data, ClickTarget::Slice(SliceId(3)), &mut manager, &percent);
        state.click(&data, ClickTarget::Background, &mut manager, &percent);

        assert_eq!(state.selected(), None);
        assert!(!state.has_highlight());
        assert!(state.labels_hidden());
        assert!(!state.interactive());
        assert_eq!(manager.current(), None);
        // Stale but retained, exactly until the next slice click.
        assert_eq!(state.center().unwrap().category, "B1");
    }

    #[test]
    fn rebuilds_drop_ids_but_not_label_state() {
        let data = demo();
        let mut state = SelectionState::new();
        let mut manager = InMemorySelectionManager::new();
        let percent = ValueFormatter::percentage();

        state.click(&data, ClickTarget::Slice(SliceId(4)), &mut manager, &percent);
        state.invalidate();

        assert_eq!(state.selected(), None);
        assert!(!state.has_highlight());
        assert!(!state.labels_hidden());
        assert!(state.interactive());
        assert_eq!(state.center().unwrap().category, "B2");
    }

    #[test]
    fn labels_start_hidden() {
        let state = SelectionState::new();
        assert!(state.labels_hidden());
        assert!(state.center().is_none());
        assert!(!state.interactive());
    }
}
