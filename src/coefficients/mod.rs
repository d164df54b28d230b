//! Coefficient registry.
//!
//! A fixed table from `CoefficientStandard` to its multiplier and display
//! label, plus the one place where `CoefficientMode` is interpreted.

use crate::domain::{CoefficientMode, CoefficientStandard, Multipliers};

/// Standard used when the caller does not pick one.
pub const DEFAULT_STANDARD: CoefficientStandard = CoefficientStandard::European;

/// TF multiplier in fixed mode (rate per million hours).
pub const FIXED_TF_MULTIPLIER: u32 = 1_000_000;

/// TG multiplier in fixed mode (days lost per thousand hours).
pub const FIXED_TG_MULTIPLIER: u32 = 1_000;

/// Every standard, in display order.
pub const ALL: [CoefficientStandard; 2] = [CoefficientStandard::European, CoefficientStandard::Osha];

/// Multiplier of a standard.
pub fn value_of(standard: CoefficientStandard) -> u32 {
    match standard {
        CoefficientStandard::European => 1_000_000,
        CoefficientStandard::Osha => 200_000,
    }
}

/// Human-readable label of a standard.
pub fn label_of(standard: CoefficientStandard) -> &'static str {
    match standard {
        CoefficientStandard::European => "European standard (1,000,000)",
        CoefficientStandard::Osha => "OSHA (200,000)",
    }
}

/// Resolve the multipliers a calculation should use.
pub fn multipliers(mode: CoefficientMode, standard: CoefficientStandard) -> Multipliers {
    match mode {
        CoefficientMode::Fixed => Multipliers {
            tf: FIXED_TF_MULTIPLIER,
            tg: FIXED_TG_MULTIPLIER,
        },
        CoefficientMode::Configurable => {
            let value = value_of(standard);
            Multipliers { tf: value, tg: value }
        }
    }
}
