//! Battery glyph selection.
//!
//! Two ladders of five icons each: one for a discharging (or unknown)
//! battery, one for a charging battery. The tier is picked from the charge
//! level with breakpoints at 20, 40, 60 and 85 percent.

use super::color::{classify, ColorTag};
use super::threshold::ThresholdPair;

/// Charging state as reported by the battery hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryState {
    Charging,
    Discharging,
    Unknown,
}

/// Fill tier of a battery icon, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BatteryTier {
    Empty,
    Quarter,
    Half,
    ThreeQuarters,
    Full,
}

/// One of the ten battery icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryIcon {
    pub tier: BatteryTier,
    pub charging: bool,
}

impl BatteryTier {
    fn from_level(level: i32) -> Self {
        if level < 20 {
            BatteryTier::Empty
        } else if level < 40 {
            BatteryTier::Quarter
        } else if level < 60 {
            BatteryTier::Half
        } else if level < 85 {
            BatteryTier::ThreeQuarters
        } else {
            BatteryTier::Full
        }
    }
}

impl BatteryIcon {
    /// Nerd Font glyph for this icon
    pub fn glyph(&self) -> &'static str {
        match (self.charging, self.tier) {
            // Font Awesome battery set
            (false, BatteryTier::Empty) => "\u{f244}",
            (false, BatteryTier::Quarter) => "\u{f243}",
            (false, BatteryTier::Half) => "\u{f242}",
            (false, BatteryTier::ThreeQuarters) => "\u{f241}",
            (false, BatteryTier::Full) => "\u{f240}",
            // Material Design battery-charging set
            (true, BatteryTier::Empty) => "\u{f089c}",
            (true, BatteryTier::Quarter) => "\u{f0086}",
            (true, BatteryTier::Half) => "\u{f0088}",
            (true, BatteryTier::ThreeQuarters) => "\u{f008a}",
            (true, BatteryTier::Full) => "\u{f0085}",
        }
    }
}

/// Pick the icon for a charge level and state.
///
/// Discharging and Unknown share a ladder; Charging uses its own.
pub fn select_icon(level: i32, state: BatteryState) -> BatteryIcon {
    BatteryIcon {
        tier: BatteryTier::from_level(level),
        charging: state == BatteryState::Charging,
    }
}

/// Color for a battery reading. Only a discharging battery is colored.
pub fn battery_color(level: i32, state: BatteryState, thresholds: &ThresholdPair) -> ColorTag {
    match state {
        BatteryState::Discharging => classify(level, thresholds),
        BatteryState::Charging | BatteryState::Unknown => ColorTag::None,
    }
}
