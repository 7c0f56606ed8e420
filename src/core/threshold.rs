//! Warning/critical threshold pairs and their validation.
//!
//! A metric is either "regular" (a high reading is bad, e.g. CPU usage) or
//! "reverse" (a low reading is bad, e.g. battery charge). The allowed ranges
//! and the ordering between the two thresholds depend on that polarity.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which direction of a reading is considered worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// Higher is worse (CPU, memory, disk, load)
    Regular,
    /// Lower is worse (battery charge, WiFi signal)
    Reverse,
}

/// The specific bound a threshold pair violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThresholdError {
    #[error("Warning threshold should be set between {min} and {max}")]
    WarningOutOfRange { min: i8, max: i8 },

    #[error("Critical threshold should be set between {min} and {max}")]
    CriticalOutOfRange { min: i8, max: i8 },

    #[error("Warning threshold ({warning}) can't be greater than critical threshold ({critical})")]
    WarningAboveCritical { warning: i8, critical: i8 },

    #[error("Critical threshold ({critical}) can't be greater than warning threshold ({warning})")]
    CriticalAboveWarning { warning: i8, critical: i8 },
}

impl Polarity {
    /// Inclusive range accepted for the warning threshold
    pub fn warning_range(self) -> (i8, i8) {
        match self {
            Polarity::Regular => (1, 99),
            Polarity::Reverse => (2, 100),
        }
    }

    /// Inclusive range accepted for the critical threshold
    pub fn critical_range(self) -> (i8, i8) {
        match self {
            Polarity::Regular => (2, 100),
            Polarity::Reverse => (1, 99),
        }
    }
}

/// Check a (warning, critical) pair against the rules of `polarity`.
///
/// Clauses are checked in order (warning range, critical range, ordering)
/// and the first violation is returned.
pub fn check(warning: i8, critical: i8, polarity: Polarity) -> Result<(), ThresholdError> {
    let (warn_min, warn_max) = polarity.warning_range();
    if !(warn_min..=warn_max).contains(&warning) {
        return Err(ThresholdError::WarningOutOfRange {
            min: warn_min,
            max: warn_max,
        });
    }

    let (crit_min, crit_max) = polarity.critical_range();
    if !(crit_min..=crit_max).contains(&critical) {
        return Err(ThresholdError::CriticalOutOfRange {
            min: crit_min,
            max: crit_max,
        });
    }

    match polarity {
        Polarity::Regular if critical < warning => {
            Err(ThresholdError::WarningAboveCritical { warning, critical })
        }
        Polarity::Reverse if warning < critical => {
            Err(ThresholdError::CriticalAboveWarning { warning, critical })
        }
        _ => Ok(()),
    }
}

/// Validate a threshold pair, printing the violated constraint on failure.
///
/// The diagnostic goes to stdout so that it shows up in the status bar.
/// The caller decides how to terminate.
pub fn validate(warning: i8, critical: i8, polarity: Polarity) -> bool {
    match check(warning, critical, polarity) {
        Ok(()) => true,
        Err(e) => {
            println!("{}", e);
            false
        }
    }
}

/// A validated warning/critical pair. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdPair {
    warning: i8,
    critical: i8,
    polarity: Polarity,
}

impl ThresholdPair {
    pub fn new(warning: i8, critical: i8, polarity: Polarity) -> Result<Self, ThresholdError> {
        check(warning, critical, polarity)?;
        Ok(Self {
            warning,
            critical,
            polarity,
        })
    }

    pub fn warning(&self) -> i8 {
        self.warning
    }

    pub fn critical(&self) -> i8 {
        self.critical
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }
}
