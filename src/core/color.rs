//! Threshold classification into status-bar colors.

use std::fmt;

use super::threshold::{Polarity, ThresholdPair};

/// Severity of a reading, rendered as an i3bar color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorTag {
    #[default]
    None,
    Warning,
    Critical,
}

impl ColorTag {
    pub const WARNING_HEX: &'static str = "#FFFC00";
    pub const CRITICAL_HEX: &'static str = "#FF0000";

    /// Hex color code, or `None` when the reading needs no highlight
    pub fn hex(self) -> Option<&'static str> {
        match self {
            ColorTag::None => None,
            ColorTag::Warning => Some(Self::WARNING_HEX),
            ColorTag::Critical => Some(Self::CRITICAL_HEX),
        }
    }

    pub fn is_none(self) -> bool {
        self == ColorTag::None
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex().unwrap_or(""))
    }
}

/// Classify a reading against validated thresholds.
///
/// Comparisons are strict: a value equal to a threshold does not reach
/// that tier.
pub fn classify(value: i32, thresholds: &ThresholdPair) -> ColorTag {
    let warning = i32::from(thresholds.warning());
    let critical = i32::from(thresholds.critical());

    match thresholds.polarity() {
        Polarity::Regular => {
            if value > critical {
                ColorTag::Critical
            } else if value > warning {
                ColorTag::Warning
            } else {
                ColorTag::None
            }
        }
        Polarity::Reverse => {
            if value < critical {
                ColorTag::Critical
            } else if value < warning {
                ColorTag::Warning
            } else {
                ColorTag::None
            }
        }
    }
}

/// Reduce a measured value to the integer level used for classification.
///
/// Truncates toward zero, so 80.9% compares as 80.
pub fn level(value: f64) -> i32 {
    if value.is_nan() {
        return 0;
    }
    value.trunc() as i32
}
