//! Legend data and viewport bookkeeping.
//!
//! The chart core does not draw the legend itself; it assembles one entry
//! per top-level branch and hands them to a [`LegendView`], which reports
//! back how much space it took. The chart then shrinks its own drawing area
//! on the docked side.

use std::fmt;
use std::str::FromStr;

use crate::errors::SettingsError;
use crate::settings::LegendSettings;
use crate::slice::{SelectorKey, SunburstData};
use crate::types::{Margins, Viewport};

/// Docking position of the legend, `None` meaning no legend at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendPosition {
    #[default]
    Top,
    TopCenter,
    Bottom,
    BottomCenter,
    Left,
    LeftCenter,
    Right,
    RightCenter,
    None,
}

impl LegendPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            LegendPosition::Top => "Top",
            LegendPosition::TopCenter => "TopCenter",
            LegendPosition::Bottom => "Bottom",
            LegendPosition::BottomCenter => "BottomCenter",
            LegendPosition::Left => "Left",
            LegendPosition::LeftCenter => "LeftCenter",
            LegendPosition::Right => "Right",
            LegendPosition::RightCenter => "RightCenter",
            LegendPosition::None => "None",
        }
    }

    /// Docked along the top or bottom edge, consuming viewport height.
    pub fn is_horizontal(self) -> bool {
        matches!(
            self,
            LegendPosition::Top
                | LegendPosition::TopCenter
                | LegendPosition::Bottom
                | LegendPosition::BottomCenter
        )
    }

    /// Docked along the left or right edge, consuming viewport width.
    pub fn is_vertical(self) -> bool {
        matches!(
            self,
            LegendPosition::Left
                | LegendPosition::LeftCenter
                | LegendPosition::Right
                | LegendPosition::RightCenter
        )
    }

    pub fn is_none(self) -> bool {
        self == LegendPosition::None
    }
}

impl FromStr for LegendPosition {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<LegendPosition, SettingsError> {
        Ok(match s {
            "Top" => LegendPosition::Top,
            "TopCenter" => LegendPosition::TopCenter,
            "Bottom" => LegendPosition::Bottom,
            "BottomCenter" => LegendPosition::BottomCenter,
            "Left" => LegendPosition::Left,
            "LeftCenter" => LegendPosition::LeftCenter,
            "Right" => LegendPosition::Right,
            "RightCenter" => LegendPosition::RightCenter,
            "None" => LegendPosition::None,
            other => {
                return Err(SettingsError::UnknownLegendPosition {
                    value: other.to_string(),
                });
            }
        })
    }
}

impl fmt::Display for LegendPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marker glyph shown next to a legend entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendIcon {
    Box,
    Circle,
    Line,
}

/// One legend entry, mirroring one top-level branch.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendItem {
    pub label: String,
    pub color: String,
    pub icon: LegendIcon,
    pub selected: bool,
    /// Selector of the branch, so legend clicks can select it.
    pub identity: SelectorKey,
}

/// Everything a legend renderer needs for one draw.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendData {
    /// Effective docking position, [`LegendPosition::None`] while hidden.
    pub position: LegendPosition,
    pub font_size: f64,
    pub items: Vec<LegendItem>,
    pub title: Option<String>,
    pub label_color: String,
}

/// Assemble legend entries from the top-level branches.
///
/// `measure_name` fills in as the title when titles are on but no explicit
/// text is configured.
pub fn build_legend(
    data: &SunburstData,
    measure_name: &str,
    legend: &LegendSettings,
) -> LegendData {
    let items = data
        .top_level()
        .iter()
        .map(|id| {
            let slice = data.get(*id);
            LegendItem {
                label: slice.display_name().to_string(),
                color: slice.color.clone().unwrap_or_default(),
                icon: LegendIcon::Circle,
                selected: false,
                identity: slice.selector.clone(),
            }
        })
        .collect();
    let title = if legend.show_title {
        Some(if legend.title_text.is_empty() {
            measure_name.to_string()
        } else {
            legend.title_text.clone()
        })
    } else {
        None
    };
    LegendData {
        position: effective_position(legend),
        font_size: legend.font_size,
        items,
        title,
        label_color: legend.label_color.clone(),
    }
}

/// Where the legend actually goes once the show toggle is applied.
pub fn effective_position(legend: &LegendSettings) -> LegendPosition {
    if legend.show {
        legend.position
    } else {
        LegendPosition::None
    }
}

/// Renders legends and reports the space they occupy.
pub trait LegendView {
    fn draw(&mut self, data: &LegendData, viewport: Viewport) -> Margins;
}

/// [`LegendView`] that draws nothing and takes no space.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLegend;

impl LegendView for NoopLegend {
    fn draw(&mut self, _data: &LegendData, _viewport: Viewport) -> Margins {
        Margins::ZERO
    }
}

/// Subtract the legend's reported margins from the viewport, on the axis
/// its position docks against.
pub fn shrink_for_legend(
    viewport: Viewport,
    position: LegendPosition,
    margins: Margins,
) -> Viewport {
    if position.is_horizontal() {
        viewport.shrink(Margins {
            width: 0.0,
            height: margins.height,
        })
    } else if position.is_vertical() {
        viewport.shrink(Margins {
            width: margins.width,
            height: 0.0,
        })
    } else {
        viewport
    }
}
