//! Branch color assignment.
//!
//! Each top-level branch of the sunburst gets one color which every
//! descendant inherits, so the ring hierarchy reads as wedges of a single
//! hue. The palette trait is the seam where hosts plug in their own theme
//! service; the built-in wheel is deterministic per instance.

use std::collections::HashMap;

/// Hands out one color per distinct key, stably for the palette's lifetime.
pub trait ColorPalette {
    /// The color for `key`, assigning a fresh one on first sight.
    fn color_for(&mut self, key: &str) -> String;
}

/// Default color wheel, assigned round-robin in first-seen key order.
const DEFAULT_WHEEL: [&str; 16] = [
    "#01b8aa", "#374649", "#fd625e", "#f2c80f", "#5f6b6d", "#8ad4eb", "#fe9666", "#a66999",
    "#3599b8", "#dfbfbf", "#4ac5bb", "#b887ad", "#fb8281", "#f4d25a", "#7f898a", "#a4ddee",
];

/// In-memory [`ColorPalette`] backed by a fixed wheel of hex colors.
///
/// Keys seen before return their original color; new keys take the next
/// wheel slot, wrapping around when the wheel is exhausted.
#[derive(Debug, Clone)]
pub struct WheelPalette {
    wheel: Vec<String>,
    assigned: HashMap<String, usize>,
}

impl WheelPalette {
    pub fn new(wheel: Vec<String>) -> WheelPalette {
        WheelPalette {
            wheel,
            assigned: HashMap::new(),
        }
    }
}

impl Default for WheelPalette {
    fn default() -> WheelPalette {
        WheelPalette::new(DEFAULT_WHEEL.iter().map(|c| c.to_string()).collect())
    }
}

impl ColorPalette for WheelPalette {
    fn color_for(&mut self, key: &str) -> String {
        if self.wheel.is_empty() {
            return String::from("#000000");
        }
        let next = self.assigned.len() % self.wheel.len();
        let slot = *self.assigned.entry(key.to_string()).or_insert(next);
        self.wheel[slot % self.wheel.len()].clone()
    }
}
