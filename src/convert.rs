//! Conversion from the host's category tree to the flat slice arena.
//!
//! This is where all per-node bookkeeping happens: value clamping, total
//! aggregation, branch color assignment, selector derivation and tooltip
//! rows. Geometry stays zeroed; [`crate::layout`] fills it in afterwards.

use crate::color::ColorPalette;
use crate::data::{CategoryNode, Dataset};
use crate::format::ValueFormatter;
use crate::log::debug;
use crate::slice::{SelectorKey, Slice, SliceId, SunburstData, TooltipItem};

/// Build the slice arena for a dataset, or `None` when there is nothing to
/// draw (no measure column or an empty tree).
///
/// The arena comes out in pre-order with the synthetic root at
/// [`SunburstData::ROOT`]. Negative and non-finite measures clamp to zero
/// for values and totals; branch colors are assigned at the first labelled
/// node of each branch and inherited below it.
pub fn convert(dataset: &Dataset, palette: &mut dyn ColorPalette) -> Option<SunburstData> {
    let measure = dataset.measure.as_ref()?;
    if dataset.root.children.is_empty() {
        return None;
    }

    let mut converter = Converter {
        palette,
        formatter: ValueFormatter::from_column(measure),
        slices: Vec::new(),
        total: 0.0,
    };
    let mut path = Vec::new();
    converter.add_node(&dataset.root, None, 0, &mut path, None);

    debug!(
        "converted {} slices, grand total {}",
        converter.slices.len(),
        converter.total
    );
    Some(SunburstData {
        total: converter.total,
        slices: converter.slices,
    })
}

struct Converter<'a> {
    palette: &'a mut dyn ColorPalette,
    formatter: ValueFormatter,
    slices: Vec<Slice>,
    total: f64,
}

impl Converter<'_> {
    /// Append `node` and its whole subtree to the arena, returning the new
    /// slice's id and its aggregated total.
    ///
    /// `path` carries the selector segments accumulated from the root;
    /// `branch_color` is the color decided higher up the branch, if any.
    fn add_node(
        &mut self,
        node: &CategoryNode,
        parent: Option<SliceId>,
        depth: usize,
        path: &mut Vec<String>,
        branch_color: Option<String>,
    ) -> (SliceId, f64) {
        let segment = node
            .identity
            .as_ref()
            .map(|identity| identity.key().to_string())
            .or_else(|| node.label.clone());
        if let Some(segment) = &segment {
            path.push(segment.clone());
        }

        let value = node
            .measure
            .filter(|measure| measure.is_finite())
            .unwrap_or(0.0)
            .max(0.0);
        self.total += value;

        // The color chain: labelled nodes surface the branch color (deciding
        // it on first sight), unlabelled ones stay blank but pass it on.
        let color = if node.label.is_some() {
            Some(match branch_color.clone() {
                Some(inherited) => inherited,
                None => match &node.color {
                    Some(explicit) => explicit.clone(),
                    None => {
                        let key = segment.as_deref().unwrap_or("");
                        self.palette.color_for(key)
                    }
                },
            })
        } else {
            None
        };
        let child_branch_color = color.clone().or(branch_color);

        let id = SliceId(self.slices.len());
        self.slices.push(Slice {
            name: node.label.clone(),
            value,
            total: value,
            color,
            selector: SelectorKey::from_segments(path.iter().map(String::as_str)),
            parent,
            depth,
            ..Slice::default()
        });

        let mut subtotal = value;
        let mut children = Vec::with_capacity(node.children.len());
        for child in &node.children {
            let (child_id, child_total) =
                self.add_node(child, Some(id), depth + 1, path, child_branch_color.clone());
            children.push(child_id);
            subtotal += child_total;
        }

        let slice = &mut self.slices[id.0];
        slice.children = children;
        slice.total = subtotal;
        slice.tooltip_info = vec![TooltipItem {
            display_name: node.label.clone().unwrap_or_default(),
            value: self.formatter.display(subtotal),
        }];

        if segment.is_some() {
            path.pop();
        }
        (id, subtotal)
    }
}
