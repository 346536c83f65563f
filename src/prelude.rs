//! Makes available common structures needed to compute shear bands
//!
//! You may write `use shearband::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::analytical::{ShearBand, StrainRateField, StrainRates, Thickness, ThicknessSeries};
pub use crate::base::{BandError, BandMode, BandResult, Location, MaterialTable, SampleMaterials, ShearBandMaterial};
