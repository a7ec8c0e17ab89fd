//! Host-facing settings: the untyped property bag and its typed form.
//!
//! Hosts hand over loosely-typed key/value pairs; [`Settings::from_properties`]
//! resolves them against defaults, repairing anything invalid instead of
//! failing the whole update. Changes between two typed settings are described
//! by an explicit [`RenderDelta`] so callers decide what to rebuild, rather
//! than the settings object mutating the chart behind their back.

use std::collections::HashMap;

use crate::errors::SettingsError;
use crate::legend::LegendPosition;
use crate::log::warn;

/// Default font size for the center labels, in pixels.
pub const DEFAULT_FONT_SIZE: f64 = 14.0;
/// Default font size for legend entries, in pixels.
pub const DEFAULT_LEGEND_FONT_SIZE: f64 = 8.0;
/// Default legend label color.
pub const DEFAULT_LABEL_COLOR: &str = "#666666";

/// One loosely-typed settings value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> PropertyValue {
        PropertyValue::Bool(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> PropertyValue {
        PropertyValue::Number(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> PropertyValue {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> PropertyValue {
        PropertyValue::Text(value)
    }
}

/// Untyped settings bag keyed by `pane.property` names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
    values: HashMap<String, PropertyValue>,
}

impl Properties {
    pub fn new() -> Properties {
        Properties::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Builder-style [`set`](Properties::set) for chained construction.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Properties {
        self.set(key, value);
        self
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.values.get(key) {
            Some(PropertyValue::Bool(value)) => *value,
            _ => default,
        }
    }

    pub fn get_number(&self, key: &str, default: f64) -> f64 {
        match self.values.get(key) {
            Some(PropertyValue::Number(value)) if value.is_finite() => *value,
            _ => default,
        }
    }

    pub fn get_text(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(PropertyValue::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }
}

/// Center-label group of settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupSettings {
    /// Font size of the center category label; the percentage label scales
    /// from this.
    pub font_size: f64,
    /// Whether the selected category's name shows under the percentage.
    pub show_selected: bool,
    /// Whether slices carry curved labels along their outer edge.
    pub show_data_labels: bool,
}

impl Default for GroupSettings {
    fn default() -> GroupSettings {
        GroupSettings {
            font_size: DEFAULT_FONT_SIZE,
            show_selected: true,
            show_data_labels: false,
        }
    }
}

/// Legend pane of settings.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendSettings {
    pub show: bool,
    pub position: LegendPosition,
    pub font_size: f64,
    pub show_title: bool,
    pub title_text: String,
    pub label_color: String,
}

impl Default for LegendSettings {
    fn default() -> LegendSettings {
        LegendSettings {
            show: false,
            position: LegendPosition::Top,
            font_size: DEFAULT_LEGEND_FONT_SIZE,
            show_title: true,
            title_text: String::new(),
            label_color: DEFAULT_LABEL_COLOR.to_string(),
        }
    }
}

/// Fully resolved chart settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub group: GroupSettings,
    pub legend: LegendSettings,
}

impl Settings {
    /// Resolve a property bag against the defaults.
    ///
    /// Unknown keys are ignored; invalid values fall back to their default
    /// with a warning, so one bad property never takes the chart down.
    pub fn from_properties(properties: &Properties) -> Settings {
        let defaults = Settings::default();

        let font_size = resolve_font_size(
            properties.get_number("group.fontSize", defaults.group.font_size),
            defaults.group.font_size,
        );
        let legend_font_size = resolve_font_size(
            properties.get_number("legend.fontSize", defaults.legend.font_size),
            defaults.legend.font_size,
        );
        let position: LegendPosition = match properties.get_text("legend.position") {
            Some(raw) => raw.parse().unwrap_or_else(|_err: SettingsError| {
                warn!("ignoring legend position {raw:?}: {_err}");
                defaults.legend.position
            }),
            None => defaults.legend.position,
        };

        Settings {
            group: GroupSettings {
                font_size,
                show_selected: properties
                    .get_bool("group.showSelected", defaults.group.show_selected),
                show_data_labels: properties
                    .get_bool("group.showDataLabels", defaults.group.show_data_labels),
            },
            legend: LegendSettings {
                show: properties.get_bool("legend.show", defaults.legend.show),
                position,
                font_size: legend_font_size,
                show_title: properties.get_bool("legend.showTitle", defaults.legend.show_title),
                title_text: properties
                    .get_text("legend.titleText")
                    .unwrap_or(&defaults.legend.title_text)
                    .to_string(),
                label_color: properties
                    .get_text("legend.labelColor")
                    .unwrap_or(&defaults.legend.label_color)
                    .to_string(),
            },
        }
    }

    /// Describe what changes when moving from `self` to `next`.
    pub fn diff(&self, next: &Settings) -> RenderDelta {
        RenderDelta {
            font_size: self.group.font_size != next.group.font_size,
            selected_label: self.group.show_selected != next.group.show_selected,
            data_labels: self.group.show_data_labels != next.group.show_data_labels,
            legend: self.legend != next.legend,
        }
    }
}

/// Validate a font size for use in layout math.
pub fn validate_font_size(value: f64) -> Result<f64, SettingsError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SettingsError::InvalidFontSize { value })
    }
}

fn resolve_font_size(value: f64, default: f64) -> f64 {
    validate_font_size(value).unwrap_or_else(|_err| {
        warn!("ignoring font size: {_err}");
        default
    })
}

/// Which parts of the chart a settings change invalidates.
///
/// Returned by [`Settings::diff`]; the caller applies the new settings and
/// reacts to exactly the flags set here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderDelta {
    pub font_size: bool,
    pub selected_label: bool,
    pub data_labels: bool,
    pub legend: bool,
}

impl RenderDelta {
    pub fn any(&self) -> bool {
        self.font_size || self.selected_label || self.data_labels || self.legend
    }

    /// True when the center labels need to be measured and placed again.
    pub fn relayouts_labels(&self) -> bool {
        self.font_size || self.selected_label
    }
}
