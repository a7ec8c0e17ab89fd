//! Shared geometric primitives for the chart surface.
//!
//! Angles follow the d3 partition convention: zero points straight up
//! (12 o'clock) and positive angles sweep clockwise. Radial positions are
//! stored as *squared* radii so that equal radial spans cover equal areas;
//! the square root is taken only when geometry is emitted.

use std::fmt;

/// The drawing area handed over by the host, in pixels.
///
/// Non-finite or negative dimensions are clamped to zero so downstream
/// layout math never sees them.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const ZERO: Viewport = Viewport {
        width: 0.0,
        height: 0.0,
    };

    #[inline]
    pub fn new(width: f64, height: f64) -> Viewport {
        Viewport {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    /// Shrink the viewport by the given margins, clamping at zero.
    #[inline]
    pub fn shrink(self, margins: Margins) -> Viewport {
        Viewport {
            width: (self.width - margins.width).max(0.0),
            height: (self.height - margins.height).max(0.0),
        }
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Space reserved along the viewport edges, e.g. by a legend.
///
/// Only one of the two components is typically non-zero: a legend docked
/// left or right consumes width, one docked top or bottom consumes height.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Margins {
    pub width: f64,
    pub height: f64,
}

impl Margins {
    pub const ZERO: Margins = Margins {
        width: 0.0,
        height: 0.0,
    };

    #[inline]
    pub fn new(width: f64, height: f64) -> Margins {
        Margins {
            width: sanitize(width),
            height: sanitize(height),
        }
    }
}

#[inline]
fn sanitize(val: f64) -> f64 {
    if val.is_finite() && val > 0.0 { val } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_clamps_bad_dimensions() {
        let vp = Viewport::new(f64::NAN, -20.0);
        assert_eq!(vp, Viewport::ZERO);
        let vp = Viewport::new(f64::INFINITY, 300.0);
        assert_eq!(vp.width, 0.0);
        assert_eq!(vp.height, 300.0);
    }

    #[test]
    fn shrink_never_goes_negative() {
        let vp = Viewport::new(100.0, 80.0);
        let shrunk = vp.shrink(Margins::new(30.0, 200.0));
        assert_eq!(shrunk.width, 70.0);
        assert_eq!(shrunk.height, 0.0);
    }
}
