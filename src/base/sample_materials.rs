use super::ShearBandMaterial;

/// Holds samples of material parameters for shear band calculations
pub struct SampleMaterials {}

impl SampleMaterials {
    /// Returns sample parameters for the S235JR structural steel (SI units)
    pub fn s235jr() -> ShearBandMaterial {
        ShearBandMaterial {
            elastic_modulus: 210e9,           // Pa
            hardening_modulus: 2e9,           // Pa
            softening_modulus: -1e9,          // Pa
            yield_strength: 235e6,            // Pa
            ultimate_tensile_strength: 360e6, // Pa
            intrinsic_length: 1e-5,           // m
            strain_at_uts: 0.2,               // -
        }
    }

    /// Returns sample parameters for the S355 structural steel (SI units)
    pub fn s355() -> ShearBandMaterial {
        ShearBandMaterial {
            elastic_modulus: 210e9,           // Pa
            hardening_modulus: 2.5e9,         // Pa
            softening_modulus: -1.5e9,        // Pa
            yield_strength: 355e6,            // Pa
            ultimate_tensile_strength: 510e6, // Pa
            intrinsic_length: 1e-5,           // m
            strain_at_uts: 0.15,              // -
        }
    }

    /// Returns parameters with a positive softening modulus
    ///
    /// The pure shear radicand is negative for this material; it is useful to test error handling.
    pub fn non_softening() -> ShearBandMaterial {
        ShearBandMaterial {
            softening_modulus: 1e9,
            ..SampleMaterials::s235jr()
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
