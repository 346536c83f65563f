use super::BandError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Defines the loading mode of the shear band
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BandMode {
    /// Pure shear: the thickness is a single closed-form value
    Shear,

    /// Uniaxial tension: the thickness depends on the orientation angle θ
    Uniaxial,
}

impl FromStr for BandMode {
    type Err = BandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shear" => Ok(BandMode::Shear),
            "uniaxial" => Ok(BandMode::Uniaxial),
            _ => Err(BandError::InvalidConfiguration { mode: s.to_string() }),
        }
    }
}

impl fmt::Display for BandMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BandMode::Shear => write!(f, "shear"),
            BandMode::Uniaxial => write!(f, "uniaxial"),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
