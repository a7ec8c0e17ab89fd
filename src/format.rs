//! Numeric formatting for tooltips and center labels.
//!
//! Patterns follow the familiar sectioned syntax `positive;negative;zero`,
//! where each section is a skeleton like `0`, `#,0.00` or `-0.00%`. Only the
//! subset the chart actually needs is supported: grouping, fixed decimals,
//! an explicit minus, and a percent suffix.

use crate::data::MeasureColumn;
use crate::errors::FormatError;
use crate::log::warn;

/// Pattern used for the center percentage label.
pub const PERCENTAGE_FORMAT: &str = "0.00%;-0.00%;0.00%";

/// One parsed section of a format pattern.
#[derive(Debug, Clone, PartialEq)]
struct Section {
    minus: bool,
    grouping: bool,
    decimals: usize,
    percent: bool,
    trim_trailing: bool,
}

impl Section {
    fn parse(raw: &str) -> Result<Section, FormatError> {
        let mut rest = raw.trim();
        let percent = rest.ends_with('%');
        if percent {
            rest = &rest[..rest.len() - 1];
        }
        let minus = rest.starts_with('-');
        if minus {
            rest = &rest[1..];
        }
        if !rest.contains('0') {
            return Err(FormatError::MissingDigits {
                section: raw.to_string(),
            });
        }
        let grouping = rest.contains(',');
        let decimals = match rest.split_once('.') {
            Some((_, frac)) => frac.chars().filter(|c| *c == '0').count(),
            None => 0,
        };
        Ok(Section {
            minus,
            grouping,
            decimals,
            percent,
            trim_trailing: false,
        })
    }

    fn render(&self, magnitude: f64, signed: bool) -> String {
        let scaled = magnitude * if self.percent { 100.0 } else { 1.0 };
        let mut body = format!("{:.*}", self.decimals, scaled);
        if self.trim_trailing && self.decimals > 0 {
            while body.ends_with('0') {
                body.pop();
            }
            if body.ends_with('.') {
                body.pop();
            }
        }
        if self.grouping {
            body = group_thousands(&body);
        }
        let mut out = String::with_capacity(body.len() + 2);
        if signed {
            out.push('-');
        }
        out.push_str(&body);
        if self.percent {
            out.push('%');
        }
        out
    }
}

/// Inserts `,` separators into the integer part of an already-rendered
/// non-negative number.
fn group_thousands(body: &str) -> String {
    let (int_part, frac) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body, None),
    };
    let len = int_part.len();
    let mut grouped = String::with_capacity(len + len / 3 + 8);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if let Some(frac) = frac {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

/// A compiled format pattern.
///
/// Negative inputs pick the negative section when one exists, otherwise the
/// positive section with a leading minus. Exact zero prefers the zero
/// section. Non-finite inputs render as the empty string.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueFormatter {
    positive: Section,
    negative: Option<Section>,
    zero: Option<Section>,
}

impl ValueFormatter {
    /// Compile a sectioned pattern like `0.00%;-0.00%;0.00%`.
    pub fn parse(pattern: &str) -> Result<ValueFormatter, FormatError> {
        if pattern.trim().is_empty() {
            return Err(FormatError::EmptyPattern);
        }
        let sections: Vec<&str> = pattern.split(';').collect();
        if sections.len() > 3 {
            return Err(FormatError::TooManySections {
                count: sections.len(),
            });
        }
        let positive = Section::parse(sections[0])?;
        let negative = match sections.get(1) {
            Some(raw) => Some(Section::parse(raw)?),
            None => None,
        };
        let zero = match sections.get(2) {
            Some(raw) => Some(Section::parse(raw)?),
            None => None,
        };
        Ok(ValueFormatter {
            positive,
            negative,
            zero,
        })
    }

    /// The fixed two-decimal percentage formatter used by the center label.
    pub fn percentage() -> ValueFormatter {
        let section = |minus| Section {
            minus,
            grouping: false,
            decimals: 2,
            percent: true,
            trim_trailing: false,
        };
        ValueFormatter {
            positive: section(false),
            negative: Some(section(true)),
            zero: Some(section(false)),
        }
    }

    /// Fallback formatter for measure columns without a pattern: grouped
    /// thousands, up to two decimals, trailing zeros trimmed.
    pub fn default_numeric() -> ValueFormatter {
        let section = Section {
            minus: false,
            grouping: true,
            decimals: 2,
            percent: false,
            trim_trailing: true,
        };
        ValueFormatter {
            positive: section,
            negative: None,
            zero: None,
        }
    }

    /// Formatter for a measure column, falling back to [`default_numeric`]
    /// when the column carries no pattern or an unparsable one.
    ///
    /// [`default_numeric`]: ValueFormatter::default_numeric
    pub fn from_column(column: &MeasureColumn) -> ValueFormatter {
        match &column.format {
            Some(pattern) => ValueFormatter::parse(pattern).unwrap_or_else(|_err| {
                warn!("unparsable format pattern {pattern:?}: {_err}");
                ValueFormatter::default_numeric()
            }),
            None => ValueFormatter::default_numeric(),
        }
    }

    /// Format a value through the pattern, honoring section selection.
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return String::new();
        }
        if value < 0.0 {
            return match &self.negative {
                Some(section) => section.render(-value, section.minus),
                None => self.positive.render(-value, true),
            };
        }
        if value == 0.0 {
            if let Some(section) = &self.zero {
                return section.render(0.0, false);
            }
        }
        self.positive.render(value, false)
    }

    /// Format a value for display, where negatives render as nothing at all.
    ///
    /// Aggregated totals can dip below zero when the host feeds negative
    /// measures; those never reach the user as text.
    pub fn display(&self, value: f64) -> String {
        if value < 0.0 {
            return String::new();
        }
        self.format(value)
    }
}
