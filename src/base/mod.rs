//! Implements the base structures: material constants, band modes, errors, and sample data

mod band_error;
mod band_mode;
mod constants;
mod material;
mod material_table;
mod sample_materials;
pub use crate::base::band_error::*;
pub use crate::base::band_mode::*;
pub use crate::base::constants::*;
pub use crate::base::material::*;
pub use crate::base::material_table::*;
pub use crate::base::sample_materials::*;
