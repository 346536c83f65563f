//! Shear band thickness and strain-rate field of strain-softening elasto-plastic materials
//!
//! The initial thickness of the localized band is computed with the closed-form solutions of
//! a reduced strain gradient theory; see [analytical::ShearBand] and [analytical::StrainRateField].

pub mod analytical;
pub mod base;
pub mod prelude;
