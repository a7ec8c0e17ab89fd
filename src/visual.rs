//! The chart component itself.
//!
//! [`Sunburst`] owns the slice tree, the resolved settings and the
//! interaction state, and talks to the embedding host exclusively through
//! the [`Collaborators`] seams. A host drives it with three calls: feed
//! data through [`Sunburst::update`], route pointer events through
//! [`Sunburst::handle_click`] and [`Sunburst::hover`], and pull markup out
//! of [`Sunburst::render_svg`] whenever anything changed.

use crate::color::{ColorPalette, WheelPalette};
use crate::convert::convert;
use crate::data::Dataset;
use crate::format::ValueFormatter;
use crate::label::{AdvanceWidthMeasurer, TextMeasurer};
use crate::layout::partition;
use crate::legend::{LegendData, LegendView, NoopLegend, build_legend, shrink_for_legend};
use crate::log::debug;
use crate::render::defaults::OUTER_RADIUS;
use crate::render::{Scene, build_scene};
use crate::select::{ClickTarget, InMemorySelectionManager, SelectionManager, SelectionState};
use crate::settings::{Properties, RenderDelta, Settings};
use crate::slice::{SelectorKey, SliceId, SunburstData, TooltipItem};
use crate::types::Viewport;

// =============================================================================
// Host seams
// =============================================================================

/// Where hover tooltips go.
///
/// Items arrive fully formatted; they were precomputed at conversion time.
pub trait TooltipSink {
    fn show(&mut self, items: &[TooltipItem]);
    fn hide(&mut self);
}

/// [`TooltipSink`] that swallows everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTooltips;

impl TooltipSink for NoopTooltips {
    fn show(&mut self, _items: &[TooltipItem]) {}

    fn hide(&mut self) {}
}

/// Everything the chart delegates to its embedding.
///
/// The defaults are all self-contained, so a [`Sunburst`] works out of the
/// box; hosts swap in their own implementations where they integrate.
pub struct Collaborators {
    pub palette: Box<dyn ColorPalette>,
    pub selection: Box<dyn SelectionManager>,
    pub measurer: Box<dyn TextMeasurer>,
    pub legend: Box<dyn LegendView>,
    pub tooltips: Box<dyn TooltipSink>,
}

impl Default for Collaborators {
    fn default() -> Collaborators {
        Collaborators {
            palette: Box::new(WheelPalette::default()),
            selection: Box::new(InMemorySelectionManager::new()),
            measurer: Box::new(AdvanceWidthMeasurer),
            legend: Box::new(NoopLegend),
            tooltips: Box::new(NoopTooltips),
        }
    }
}

/// One call's worth of input to [`Sunburst::update`].
#[derive(Clone, Copy, Default)]
pub struct UpdateOptions<'a> {
    pub dataset: Option<&'a Dataset>,
    pub viewport: Viewport,
    /// Absent properties keep whatever settings are already in force.
    pub properties: Option<&'a Properties>,
}

/// A top-level branch and its assigned color, for host color pickers.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchColor {
    pub display_name: String,
    pub selector: SelectorKey,
    pub color: String,
}

// =============================================================================
// The component
// =============================================================================

/// A sunburst chart: hierarchical rings around an interactive hub.
pub struct Sunburst {
    collaborators: Collaborators,
    settings: Settings,
    viewport: Viewport,
    data: Option<SunburstData>,
    legend_data: Option<LegendData>,
    state: SelectionState,
    percent: ValueFormatter,
}

impl Default for Sunburst {
    fn default() -> Sunburst {
        Sunburst::new()
    }
}

impl Sunburst {
    pub fn new() -> Sunburst {
        Sunburst::with_collaborators(Collaborators::default())
    }

    pub fn with_collaborators(collaborators: Collaborators) -> Sunburst {
        Sunburst {
            collaborators,
            settings: Settings::default(),
            viewport: Viewport::ZERO,
            data: None,
            legend_data: None,
            state: SelectionState::new(),
            percent: ValueFormatter::percentage(),
        }
    }

    /// Rebuild the chart from fresh data, viewport and properties.
    ///
    /// An update without usable rows tears the rings down and stops there:
    /// viewport, settings and the legend all keep their previous contents.
    pub fn update(&mut self, options: UpdateOptions<'_>) {
        let Some(dataset) = options.dataset else {
            self.clear();
            return;
        };
        if !dataset.has_data() {
            self.clear();
            return;
        }

        self.viewport = options.viewport;
        if let Some(properties) = options.properties {
            self.apply_settings(Settings::from_properties(properties));
        }

        // Slice ids are reassigned below; highlights from the old tree must
        // not land on unrelated slices.
        self.state.invalidate();
        let Some(mut data) = convert(dataset, self.collaborators.palette.as_mut()) else {
            self.clear();
            return;
        };
        partition(&mut data, OUTER_RADIUS);

        let measure_name = dataset
            .measure
            .as_ref()
            .map(|measure| measure.display_name.as_str())
            .unwrap_or_default();
        let legend_data = build_legend(&data, measure_name, &self.settings.legend);
        let margins = self.collaborators.legend.draw(&legend_data, self.viewport);
        self.viewport = shrink_for_legend(self.viewport, legend_data.position, margins);

        debug!(
            "update complete: {} slices, viewport {}",
            data.len(),
            self.viewport
        );
        self.legend_data = Some(legend_data);
        self.data = Some(data);
    }

    /// Swap in new settings, reporting which parts of the chart they touch.
    pub fn apply_settings(&mut self, next: Settings) -> RenderDelta {
        let delta = self.settings.diff(&next);
        if delta.any() {
            debug!("settings changed: {delta:?}");
        }
        self.settings = next;
        delta
    }

    /// Route a pointer click into the selection state.
    ///
    /// Slice clicks need a live tree; ids from a tree that has since been
    /// rebuilt are ignored. Background clicks always land, so retained
    /// labels stay dismissable after the data is gone.
    pub fn handle_click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::Slice(id) => {
                let Some(data) = &self.data else { return };
                if id.index() >= data.len() {
                    return;
                }
                self.state.click(
                    data,
                    target,
                    self.collaborators.selection.as_mut(),
                    &self.percent,
                );
            }
            ClickTarget::Background => self
                .state
                .click_background(self.collaborators.selection.as_mut()),
        }
    }

    /// Report the pointer entering (`Some`) or leaving (`None`) a slice.
    ///
    /// Like dismissal, leaving hides the tooltip whether or not a tree is
    /// still around.
    pub fn hover(&mut self, target: Option<SliceId>) {
        match target {
            Some(id) => {
                let Some(data) = &self.data else { return };
                let Some(slice) = data.slices().get(id.index()) else {
                    return;
                };
                self.collaborators.tooltips.show(&slice.tooltip_info);
            }
            None => self.collaborators.tooltips.hide(),
        }
    }

    /// Assemble the current scene.
    pub fn scene(&self) -> Scene {
        build_scene(
            self.data.as_ref(),
            &self.state,
            &self.settings,
            self.collaborators.measurer.as_ref(),
        )
    }

    /// Serialize the current scene as a standalone SVG document.
    pub fn render_svg(&self) -> String {
        self.scene().to_svg()
    }

    /// The top-level branches and the colors they were dealt.
    pub fn branch_colors(&self) -> Vec<BranchColor> {
        let Some(data) = &self.data else {
            return Vec::new();
        };
        data.top_level()
            .iter()
            .filter_map(|id| {
                let slice = data.get(*id);
                slice.color.as_ref().map(|color| BranchColor {
                    display_name: slice.display_name().to_string(),
                    selector: slice.selector.clone(),
                    color: color.clone(),
                })
            })
            .collect()
    }

    pub fn data(&self) -> Option<&SunburstData> {
        self.data.as_ref()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Drawing area left after the legend took its share.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn legend_data(&self) -> Option<&LegendData> {
        self.legend_data.as_ref()
    }

    /// Drop the slice tree, keeping label text and legend contents around.
    pub fn clear(&mut self) {
        self.data = None;
        self.state.invalidate();
    }
}
