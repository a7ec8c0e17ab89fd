//! SVG rendering for sunburst charts
//!
//! This module is organized into submodules:
//! - `defaults`: canvas constants shared by layout and labels
//! - `arc`: annular sector and outer edge path data
//! - `svg`: scene nodes and document serialization
//!
//! [`build_scene`] ties them together: it walks the slice arena and the
//! interaction state and produces a [`Scene`] ready for [`Scene::to_svg`].

pub mod arc;
pub mod defaults;
pub mod svg;

// Re-export commonly used items
pub use svg::{Draw, Scene, SceneNode};

use crate::label::{TextMeasurer, center_label_layout, center_label_width, truncate_to_fit};
use crate::log::debug;
use crate::select::SelectionState;
use crate::settings::Settings;
use crate::slice::SunburstData;
use defaults::{DATA_LABEL_PADDING, SLICE_LABEL_DY};
use svg::{CenterLabel, CenterLabelKind, LabelRail, SliceLabel, SlicePath};

/// Assemble the scene for the current data and interaction state.
///
/// `data` is `None` when the last update carried nothing drawable; the
/// scene then holds only the center labels, which keep whatever text the
/// last click left behind.
pub fn build_scene(
    data: Option<&SunburstData>,
    state: &SelectionState,
    settings: &Settings,
    measurer: &dyn TextMeasurer,
) -> Scene {
    let mut body = Vec::new();

    if let Some(data) = data {
        for id in data.ids() {
            let slice = data.get(id);
            body.push(SceneNode::from(SlicePath {
                d: arc::annular_path(slice.x, slice.dx, slice.y, slice.dy),
                fill: slice.color.clone(),
                selected: state.is_highlighted(id),
                // The synthetic root covers the hub; it never shows.
                hidden: slice.depth == 0,
            }));
        }

        if settings.group.show_data_labels {
            // Rails first, then the text that rides them; ids tie the pairs.
            for id in data.ids() {
                let slice = data.get(id);
                if slice.depth == 0 {
                    continue;
                }
                body.push(SceneNode::from(LabelRail {
                    id: rail_id(id.index()),
                    d: arc::outer_edge_path(slice.x, slice.dx, slice.y, slice.dy),
                }));
            }
            for id in data.ids() {
                let slice = data.get(id);
                if slice.depth == 0 {
                    continue;
                }
                let room = arc::outer_arc_length(slice.dx, slice.y, slice.dy);
                body.push(SceneNode::from(SliceLabel {
                    rail_id: rail_id(id.index()),
                    text: truncate_to_fit(
                        slice.display_name(),
                        room,
                        DATA_LABEL_PADDING,
                        settings.group.font_size,
                        measurer,
                    ),
                    dy: SLICE_LABEL_DY,
                }));
            }
        }
    }

    let layout = center_label_layout(&settings.group);
    let (category, percentage, color) = match state.center() {
        Some(center) => (
            center.category.clone(),
            center.percentage.clone(),
            center.color.clone(),
        ),
        None => (String::new(), String::new(), None),
    };
    // Without geometry there is no hub to fit into, so the text passes
    // through unclipped.
    let (category, percentage) = match data {
        Some(data) => {
            let room = center_label_width(data);
            (
                truncate_to_fit(
                    &category,
                    room,
                    DATA_LABEL_PADDING,
                    layout.category_font_size,
                    measurer,
                ),
                truncate_to_fit(
                    &percentage,
                    room,
                    DATA_LABEL_PADDING,
                    layout.percentage_font_size,
                    measurer,
                ),
            )
        }
        None => (category, percentage),
    };
    let overlay = vec![
        SceneNode::from(CenterLabel {
            kind: CenterLabelKind::Category,
            text: category,
            visible: !state.labels_hidden() && settings.group.show_selected,
            fill: color.clone(),
            offset_y: layout.category_offset_y,
            font_size: layout.category_font_size,
        }),
        SceneNode::from(CenterLabel {
            kind: CenterLabelKind::Percentage,
            text: percentage,
            visible: !state.labels_hidden(),
            fill: color,
            offset_y: layout.percentage_offset_y,
            font_size: layout.percentage_font_size,
        }),
    ];

    debug!(
        "scene assembled: {} body nodes, {} overlay nodes",
        body.len(),
        overlay.len()
    );
    Scene {
        font_size: settings.group.font_size,
        interactive: state.interactive(),
        body,
        overlay,
    }
}

fn rail_id(index: usize) -> String {
    format!("sliceLabel_{index}")
}
