// Core business logic module

pub mod battery_icon;
pub mod color;
pub mod config;
pub mod device_match;
pub mod display;
pub mod metrics;
pub mod source;
pub mod threshold;

// Re-export commonly used items
pub use battery_icon::{select_icon, BatteryIcon, BatteryState, BatteryTier};
pub use color::{classify, ColorTag};
pub use config::Config;
pub use device_match::{match_devices, DeviceRule};
pub use display::{OutputFormat, StatusLine};
pub use source::MetricSource;
pub use threshold::{validate, Polarity, ThresholdPair};
