use std::fmt;
use thiserror::Error;

/// Defines a type alias for results carrying a [BandError]
pub type BandResult<T> = Result<T, BandError>;

/// Indicates where a quantity was being evaluated when it failed
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Location {
    /// Material-level (angle independent) quantity, e.g. the pure shear thickness
    Material,

    /// Orientation angle θ, stored in degrees
    Angle { degrees: f64 },
}

impl Location {
    /// Returns the location corresponding to an angle given in radians
    pub fn at_radians(theta: f64) -> Self {
        Location::Angle {
            degrees: theta.to_degrees(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Material => write!(f, "material level"),
            Location::Angle { degrees } => write!(f, "θ = {}°", degrees),
        }
    }
}

/// Errors raised while evaluating the shear band model
#[derive(Clone, Debug, Error, PartialEq)]
pub enum BandError {
    /// The band mode is neither `shear` nor `uniaxial`
    #[error("invalid band mode `{mode}`: must be 'shear' or 'uniaxial'")]
    InvalidConfiguration { mode: String },

    /// A material constant or an input grid is missing, malformed, or not finite
    #[error("invalid input `{field}`: {reason}")]
    InvalidInput { field: String, reason: String },

    /// A square root argument is negative
    #[error("negative radicand in {quantity} at {location}: {radicand:e}")]
    NegativeRadicand {
        quantity: &'static str,
        location: Location,
        radicand: f64,
    },

    /// A denominator vanishes (or the quantity overflows)
    #[error("singularity in {quantity} at {location}")]
    Singularity {
        quantity: &'static str,
        location: Location,
    },

    /// The requested material is not present in the material table
    #[error("material `{name}` not found")]
    MaterialNotFound { name: String },

    /// A material table file could not be opened
    #[error("cannot read `{path}`: {message}")]
    Io { path: String, message: String },

    /// A material table file could not be deserialized
    #[error("cannot parse `{path}`: {message}")]
    Parse { path: String, message: String },
}

impl BandError {
    /// Returns a new InvalidInput error
    pub(crate) fn invalid_input(field: &str, reason: &str) -> Self {
        BandError::InvalidInput {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Returns `num / den` or a singularity error if the denominator vanishes or the ratio is not finite
pub(crate) fn checked_div(quantity: &'static str, location: Location, num: f64, den: f64) -> BandResult<f64> {
    let value = num / den;
    if den == 0.0 || !value.is_finite() {
        return Err(BandError::Singularity { quantity, location });
    }
    Ok(value)
}

/// Returns `sqrt(radicand)` or an error if the radicand is negative (or NaN)
pub(crate) fn checked_sqrt(quantity: &'static str, location: Location, radicand: f64) -> BandResult<f64> {
    if radicand.is_nan() {
        return Err(BandError::Singularity { quantity, location });
    }
    if radicand < 0.0 {
        return Err(BandError::NegativeRadicand {
            quantity,
            location,
            radicand,
        });
    }
    Ok(f64::sqrt(radicand))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
