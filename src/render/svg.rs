//! SVG scene nodes and document serialization.
//!
//! The scene is a flat list of typed nodes dispatched through [`Draw`].
//! Markup mirrors the chart's CSS contract: state lives in class names
//! (`sunburst--interactive`, `sunburst__slice--selected`, ...) so hosts can
//! restyle highlighting and label visibility without touching geometry.

use std::fmt::{self, Write};

use enum_dispatch::enum_dispatch;

use crate::render::defaults::{CENTRAL_POINT, VIEW_BOX_SIZE};

/// Class names shared with the chart stylesheet.
pub mod css {
    pub const MAIN: &str = "sunburst";
    pub const MAIN_INTERACTIVE: &str = "sunburst--interactive";
    pub const SLICE: &str = "sunburst__slice";
    pub const SLICE_SELECTED: &str = "sunburst__slice--selected";
    pub const SLICE_HIDDEN: &str = "sunburst__slice--hidden";
    pub const LABEL: &str = "sunburst__label";
    pub const LABEL_VISIBLE: &str = "sunburst__label--visible";
    pub const CATEGORY_LABEL: &str = "sunburst__category-label";
    pub const PERCENTAGE_LABEL: &str = "sunburst__percentage-label";
    pub const SLICE_LABEL: &str = "sunburst__slice-label";
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(text: &str) -> String {
    escape_text(text).replace('"', "&quot;")
}

/// Serialize one scene node as SVG markup.
#[enum_dispatch]
pub trait Draw {
    fn write_svg(&self, svg: &mut String) -> fmt::Result;
}

/// One ring segment.
#[derive(Debug, Clone, PartialEq)]
pub struct SlicePath {
    pub d: String,
    pub fill: Option<String>,
    /// Part of the currently highlighted branch.
    pub selected: bool,
    /// The synthetic root renders but stays invisible.
    pub hidden: bool,
}

impl Draw for SlicePath {
    fn write_svg(&self, svg: &mut String) -> fmt::Result {
        write!(svg, r#"    <path class="{}"#, css::SLICE)?;
        if self.selected {
            write!(svg, " {}", css::SLICE_SELECTED)?;
        }
        write!(svg, r#"""#)?;
        if let Some(fill) = &self.fill {
            write!(svg, r#" fill="{}""#, escape_attr(fill))?;
        }
        if self.hidden {
            write!(svg, r#" style="display: none;""#)?;
        }
        writeln!(svg, r#" d="{}"/>"#, self.d)
    }
}

/// Invisible path along a slice's outer edge; curved labels ride on it.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelRail {
    pub id: String,
    pub d: String,
}

impl Draw for LabelRail {
    fn write_svg(&self, svg: &mut String) -> fmt::Result {
        writeln!(
            svg,
            r#"    <path class="{}" id="{}" d="{}"/>"#,
            css::SLICE_HIDDEN,
            escape_attr(&self.id),
            self.d,
        )
    }
}

/// Curved category label anchored to the middle of its rail.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceLabel {
    /// Rail element id, without the `#`.
    pub rail_id: String,
    pub text: String,
    pub dy: f64,
}

impl Draw for SliceLabel {
    fn write_svg(&self, svg: &mut String) -> fmt::Result {
        writeln!(
            svg,
            r##"    <text class="{}" dy="{}"><textPath startOffset="50%" xlink:href="#{}">{}</textPath></text>"##,
            css::SLICE_LABEL,
            self.dy,
            escape_attr(&self.rail_id),
            escape_text(&self.text),
        )
    }
}

/// Which of the two hub labels a [`CenterLabel`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterLabelKind {
    Category,
    Percentage,
}

impl CenterLabelKind {
    fn class(self) -> &'static str {
        match self {
            CenterLabelKind::Category => css::CATEGORY_LABEL,
            CenterLabelKind::Percentage => css::PERCENTAGE_LABEL,
        }
    }
}

/// One of the two labels at the hub of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CenterLabel {
    pub kind: CenterLabelKind,
    pub text: String,
    pub visible: bool,
    pub fill: Option<String>,
    /// Vertical shift off the hub, negative is up.
    pub offset_y: f64,
    pub font_size: f64,
}

impl Draw for CenterLabel {
    fn write_svg(&self, svg: &mut String) -> fmt::Result {
        write!(svg, r#"  <text class="{} {}"#, css::LABEL, self.kind.class())?;
        if self.visible {
            write!(svg, " {}", css::LABEL_VISIBLE)?;
        }
        write!(
            svg,
            r#"" x="{}" y="{}" transform="translate(0,{:.2})" font-size="{}""#,
            CENTRAL_POINT, CENTRAL_POINT, self.offset_y, self.font_size,
        )?;
        if let Some(fill) = &self.fill {
            write!(svg, r#" fill="{}""#, escape_attr(fill))?;
        }
        writeln!(svg, ">{}</text>", escape_text(&self.text))
    }
}

/// Any node the scene can hold.
#[enum_dispatch(Draw)]
#[derive(Debug, Clone, PartialEq)]
pub enum SceneNode {
    SlicePath,
    LabelRail,
    SliceLabel,
    CenterLabel,
}

/// A complete renderable chart scene.
///
/// `body` nodes live inside the centered `<g>`; `overlay` nodes (the hub
/// labels) sit directly under the svg root so they never clip against the
/// rings.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub font_size: f64,
    pub interactive: bool,
    pub body: Vec<SceneNode>,
    pub overlay: Vec<SceneNode>,
}

impl Scene {
    /// Serialize the scene into a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut svg = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_svg(&mut svg);
        svg
    }

    fn write_svg(&self, svg: &mut String) -> fmt::Result {
        write!(svg, r#"<svg class="{}"#, css::MAIN)?;
        if self.interactive {
            write!(svg, " {}", css::MAIN_INTERACTIVE)?;
        }
        writeln!(
            svg,
            r#"" viewBox="0 0 {} {}" width="100%" height="100%" preserveAspectRatio="xMidYMid meet" font-size="{}" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">"#,
            VIEW_BOX_SIZE, VIEW_BOX_SIZE, self.font_size,
        )?;
        writeln!(
            svg,
            r#"  <g transform="translate({},{})">"#,
            CENTRAL_POINT, CENTRAL_POINT,
        )?;
        for node in &self.body {
            node.write_svg(svg)?;
        }
        writeln!(svg, "  </g>")?;
        for node in &self.overlay {
            node.write_svg(svg)?;
        }
        writeln!(svg, "</svg>")
    }
}
