//! This module contains the closed-form shear band solutions: thickness, coefficient functions, and strain-rate field

mod shear_band;
mod shear_band_coefficients;
mod strain_rate_field;

pub use shear_band::*;
pub use strain_rate_field::*;
