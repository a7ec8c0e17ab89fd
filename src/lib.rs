//! A sunburst chart engine: hierarchical data in, interactive SVG out.
//!
//! The pipeline runs in four stages:
//! - [`convert`]: a host [`Dataset`] becomes the flat slice arena
//! - [`layout`]: every slice gets its angular span and ring band
//! - [`select`]: clicks and hovers mutate the interaction state
//! - [`mod@render`]: arena plus state serialize to an SVG document
//!
//! [`Sunburst`] wraps the whole pipeline behind a handful of calls and is
//! where most hosts start; the stage modules stay public for embeddings
//! that need finer control. [`render()`] is the one-shot variant for
//! static output.

pub mod color;
pub mod convert;
pub mod data;
pub mod errors;
pub mod format;
pub mod label;
pub mod layout;
pub mod legend;
mod log;
pub mod render;
pub mod select;
pub mod settings;
pub mod slice;
pub mod types;
pub mod visual;

// Re-export commonly used items
pub use color::{ColorPalette, WheelPalette};
pub use data::{CategoryNode, Dataset, Identity, MeasureColumn};
pub use errors::{FormatError, SettingsError};
pub use format::ValueFormatter;
pub use legend::{LegendData, LegendPosition, LegendView};
pub use select::{ClickTarget, SelectionManager, SelectionState};
pub use settings::{Properties, PropertyValue, RenderDelta, Settings};
pub use slice::{SelectorKey, Slice, SliceId, SunburstData};
pub use types::{Margins, Viewport};
pub use visual::{BranchColor, Collaborators, Sunburst, TooltipSink, UpdateOptions};

/// Render a dataset straight to a standalone SVG document.
///
/// One-call wrapper around [`Sunburst`] for hosts that only want static
/// output: default collaborators, default settings, one serialization.
///
/// ```
/// use sunburst::{CategoryNode, Dataset, MeasureColumn, Viewport, render};
///
/// let dataset = Dataset::new(
///     CategoryNode::root(vec![
///         CategoryNode::leaf("North", 120.0),
///         CategoryNode::leaf("South", 80.0),
///     ]),
///     MeasureColumn::new("Sales"),
/// );
/// let svg = render(&dataset, Viewport::new(640.0, 480.0));
/// assert!(svg.starts_with("<svg"));
/// ```
pub fn render(dataset: &Dataset, viewport: Viewport) -> String {
    let mut chart = Sunburst::new();
    chart.update(UpdateOptions {
        dataset: Some(dataset),
        viewport,
        properties: None,
    });
    chart.render_svg()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_wraps_the_whole_pipeline() {
        let dataset = Dataset::new(
            CategoryNode::root(vec![
                CategoryNode::leaf("North", 120.0),
                CategoryNode::leaf("South", 80.0),
            ]),
            MeasureColumn::new("Sales"),
        );
        let svg = render(&dataset, Viewport::new(640.0, 480.0));
        assert!(svg.starts_with(r#"<svg class="sunburst""#));
        // Root plus the two leaves.
        assert_eq!(svg.matches("<path").count(), 3);
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn render_without_rows_yields_an_empty_frame() {
        let dataset = Dataset::new(CategoryNode::root(vec![]), MeasureColumn::new("Sales"));
        let svg = render(&dataset, Viewport::new(640.0, 480.0));
        assert!(svg.contains("</svg>"));
        assert!(!svg.contains("<path"));
    }
}
