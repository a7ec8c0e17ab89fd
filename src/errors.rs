//! Error types with rich diagnostics using miette
//!
//! The chart core recovers locally from bad data (absent measures, negative
//! values, empty trees), so errors here only cover host-supplied inputs that
//! cannot be silently repaired: malformed settings and format patterns.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Settings Errors
// ============================================================================

/// Errors from parsing host-supplied settings values
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum SettingsError {
    #[error("unknown legend position: {value}")]
    #[diagnostic(
        code(sunburst::settings::unknown_legend_position),
        help(
            "expected one of Top, TopCenter, Bottom, BottomCenter, Left, LeftCenter, Right, RightCenter, None"
        )
    )]
    UnknownLegendPosition { value: String },

    #[error("invalid font size: {value}")]
    #[diagnostic(
        code(sunburst::settings::invalid_font_size),
        help("font sizes must be finite and positive")
    )]
    InvalidFontSize { value: f64 },
}

// ============================================================================
// Format Pattern Errors
// ============================================================================

/// Errors from parsing numeric format patterns like `0.00%;-0.00%;0.00%`
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("empty format pattern")]
    #[diagnostic(code(sunburst::format::empty_pattern))]
    EmptyPattern,

    #[error("too many sections in format pattern: {count}")]
    #[diagnostic(
        code(sunburst::format::too_many_sections),
        help("patterns hold at most three sections: positive;negative;zero")
    )]
    TooManySections { count: usize },

    #[error("format section has no digit placeholder: {section:?}")]
    #[diagnostic(code(sunburst::format::missing_digits))]
    MissingDigits { section: String },
}
