//! Text measurement, truncation and center label placement.
//!
//! The chart runs without any rendering backend, so text width comes from a
//! [`TextMeasurer`] seam. The built-in measurer sums per-character advance
//! widths of a Helvetica-like metric table; hosts with real font access can
//! plug in their own.

use crate::render::defaults::{
    CATEGORY_LINE_INTERVAL, DEFAULT_PERCENTAGE_LINE_INTERVAL, MULTILINE_PERCENTAGE_LINE_INTERVAL,
    PERCENTAGE_FONT_SIZE_MULTIPLIER,
};
use crate::settings::GroupSettings;
use crate::slice::SunburstData;

/// The character appended to truncated labels.
pub const ELLIPSIS: char = '\u{2026}';

/// Measures rendered text width in pixels for a given font size.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> f64;
}

/// Advance widths in 1/1000 em for ASCII 0x20..=0x7E, Helvetica metrics.
#[rustfmt::skip]
const ADVANCE: [u16; 95] = [
    //  SP    !    "    #    $    %    &    '
       278, 278, 355, 556, 556, 889, 667, 191,
    //   (    )    *    +    ,    -    .    /
       333, 333, 389, 584, 278, 333, 278, 278,
    //   0    1    2    3    4    5    6    7
       556, 556, 556, 556, 556, 556, 556, 556,
    //   8    9    :    ;    <    =    >    ?
       556, 556, 278, 278, 584, 584, 584, 556,
    //   @    A    B    C    D    E    F    G
      1015, 667, 667, 722, 722, 667, 611, 778,
    //   H    I    J    K    L    M    N    O
       722, 278, 500, 667, 556, 833, 722, 778,
    //   P    Q    R    S    T    U    V    W
       667, 778, 722, 667, 611, 722, 667, 944,
    //   X    Y    Z    [    \    ]    ^    _
       667, 667, 611, 278, 278, 278, 469, 556,
    //   `    a    b    c    d    e    f    g
       333, 556, 556, 500, 556, 556, 278, 556,
    //   h    i    j    k    l    m    n    o
       556, 222, 222, 500, 222, 833, 556, 556,
    //   p    q    r    s    t    u    v    w
       556, 556, 333, 500, 278, 556, 500, 722,
    //   x    y    z    {    |    }    ~
       500, 500, 500, 334, 260, 334, 584,
];

/// Advance width of characters outside the table.
const FALLBACK_ADVANCE: u16 = 556;

fn advance_units(c: char) -> f64 {
    let code = c as usize;
    if (0x20..=0x7e).contains(&code) {
        ADVANCE[code - 0x20] as f64
    } else if c == ELLIPSIS {
        1000.0
    } else {
        FALLBACK_ADVANCE as f64
    }
}

/// DOM-free [`TextMeasurer`] backed by the metric table above.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvanceWidthMeasurer;

impl TextMeasurer for AdvanceWidthMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> f64 {
        text.chars().map(advance_units).sum::<f64>() * font_size / 1000.0
    }
}

/// Shorten `text` with a trailing ellipsis until it fits in
/// `available_width` minus padding on both sides.
///
/// Text that already fits comes back untouched. When even a bare ellipsis
/// overflows, the result is empty so nothing spills out of the slice.
pub fn truncate_to_fit(
    text: &str,
    available_width: f64,
    padding: f64,
    font_size: f64,
    measurer: &dyn TextMeasurer,
) -> String {
    let limit = available_width - 2.0 * padding;
    let mut kept = text.to_string();
    let mut rendered = kept.clone();
    let mut width = measurer.measure(&rendered, font_size);
    while width > limit && !kept.is_empty() {
        kept.pop();
        rendered = format!("{kept}{ELLIPSIS}");
        width = measurer.measure(&rendered, font_size);
    }
    if width > limit { String::new() } else { rendered }
}

/// Vertical placement and font sizes of the two center labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterLabelLayout {
    /// Category label shift relative to the hub, negative is up.
    pub category_offset_y: f64,
    pub category_font_size: f64,
    /// Percentage label shift relative to the hub.
    pub percentage_offset_y: f64,
    pub percentage_font_size: f64,
}

/// Compute the center label layout for the current group settings.
///
/// The percentage label sits lower when the category label is shown above
/// it, so the two never collide at the hub.
pub fn center_label_layout(group: &GroupSettings) -> CenterLabelLayout {
    let category_font_size = group.font_size;
    let percentage_font_size = group.font_size * PERCENTAGE_FONT_SIZE_MULTIPLIER;
    let interval = if group.show_selected {
        MULTILINE_PERCENTAGE_LINE_INTERVAL
    } else {
        DEFAULT_PERCENTAGE_LINE_INTERVAL
    };
    CenterLabelLayout {
        category_offset_y: -(category_font_size * CATEGORY_LINE_INTERVAL),
        category_font_size,
        percentage_offset_y: percentage_font_size * interval,
        percentage_font_size,
    }
}

/// Width available to the center labels: the innermost ring edge radius.
pub fn center_label_width(data: &SunburstData) -> f64 {
    let min = data
        .top_level()
        .iter()
        .map(|id| data.get(*id).inner_radius())
        .fold(f64::INFINITY, f64::min);
    if min.is_finite() { min } else { 0.0 }
}
