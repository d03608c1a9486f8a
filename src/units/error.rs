use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    #[error("Invalid unit '{unit}'. Valid units are {valid}.")]
    InvalidUnit { unit: String, valid: String },

    #[error("Invalid size spec '{spec}' ({reason}). Expected {expected}.")]
    InvalidSizeSpec {
        spec: String,
        reason: SpecFault,
        expected: String,
    },

    #[error("Unknown font size keyword '{keyword}'. Valid keywords are {valid}.")]
    UnknownFontScale { keyword: String, valid: String },

    #[error("Setting '{name}' must be a positive finite number, received {value}.")]
    InvalidSetting { name: &'static str, value: f64 },
}

/// Why a size spec was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFault {
    /// Leading digits don't form a number (empty, "1.2.3", ".")
    MalformedNumber,
    /// Suffix isn't in the unit table
    UnknownSuffix,
    /// Neither a number nor a string
    UnsupportedType,
}

impl fmt::Display for SpecFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecFault::MalformedNumber => write!(f, "malformed number"),
            SpecFault::UnknownSuffix => write!(f, "unknown unit suffix"),
            SpecFault::UnsupportedType => write!(f, "must be a string or number or list thereof"),
        }
    }
}

impl UnitError {
    pub fn is_invalid_unit(&self) -> bool {
        matches!(self, UnitError::InvalidUnit { .. })
    }

    pub fn is_invalid_size_spec(&self) -> bool {
        matches!(self, UnitError::InvalidSizeSpec { .. })
    }
}
