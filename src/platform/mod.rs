// Platform-specific code module

pub mod diskstats;
pub mod fs;
pub mod power_supply;
pub mod system;
pub mod wireless;

// Live metric source used by the binary
pub use system::SystemSource;
