use super::{BandError, BandResult};
use serde::{Deserialize, Serialize};

/// Holds the constants of a strain-softening elasto-plastic material (SI units)
///
/// The stress-strain response is trilinear: an elastic branch, a hardening branch
/// up to the ultimate tensile strength, and a softening branch afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct ShearBandMaterial {
    /// Young's modulus E (Pa)
    pub elastic_modulus: f64,

    /// Slope of the hardening branch (Pa)
    pub hardening_modulus: f64,

    /// Slope of the softening branch (Pa); typically negative
    pub softening_modulus: f64,

    /// Yield strength σy (Pa)
    pub yield_strength: f64,

    /// Ultimate tensile strength σu (Pa)
    pub ultimate_tensile_strength: f64,

    /// Intrinsic material length l (m)
    pub intrinsic_length: f64,

    /// Plastic strain εu at the ultimate tensile strength
    pub strain_at_uts: f64,
}

/// Holds the field names in positional order (see [ShearBandMaterial::from_values])
pub const MATERIAL_FIELDS: [&str; 7] = [
    "elastic_modulus",
    "hardening_modulus",
    "softening_modulus",
    "yield_strength",
    "ultimate_tensile_strength",
    "intrinsic_length",
    "strain_at_uts",
];

impl ShearBandMaterial {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `elastic_modulus` -- Young's modulus E
    /// * `hardening_modulus` -- slope of the hardening branch
    /// * `softening_modulus` -- slope of the softening branch
    /// * `yield_strength` -- yield strength σy
    /// * `ultimate_tensile_strength` -- ultimate tensile strength σu
    /// * `intrinsic_length` -- intrinsic material length l
    /// * `strain_at_uts` -- strain εu at the ultimate tensile strength
    ///
    /// **Note:** The constants are not checked here; see [ShearBandMaterial::validate].
    pub fn new(
        elastic_modulus: f64,
        hardening_modulus: f64,
        softening_modulus: f64,
        yield_strength: f64,
        ultimate_tensile_strength: f64,
        intrinsic_length: f64,
        strain_at_uts: f64,
    ) -> Self {
        ShearBandMaterial {
            elastic_modulus,
            hardening_modulus,
            softening_modulus,
            yield_strength,
            ultimate_tensile_strength,
            intrinsic_length,
            strain_at_uts,
        }
    }

    /// Allocates a new instance from seven values given in the order of [MATERIAL_FIELDS]
    pub fn from_values(values: &[f64]) -> BandResult<Self> {
        if values.len() != MATERIAL_FIELDS.len() {
            return Err(BandError::InvalidInput {
                field: "material".to_string(),
                reason: format!("expected {} constants, got {}", MATERIAL_FIELDS.len(), values.len()),
            });
        }
        let material = ShearBandMaterial::new(
            values[0], values[1], values[2], values[3], values[4], values[5], values[6],
        );
        material.validate()?;
        Ok(material)
    }

    /// Returns the constants in the order of [MATERIAL_FIELDS]
    pub fn values(&self) -> [f64; 7] {
        [
            self.elastic_modulus,
            self.hardening_modulus,
            self.softening_modulus,
            self.yield_strength,
            self.ultimate_tensile_strength,
            self.intrinsic_length,
            self.strain_at_uts,
        ]
    }

    /// Checks that all constants are finite
    ///
    /// Physical consistency (positive moduli, σu > σy, ...) is the caller's responsibility.
    pub fn validate(&self) -> BandResult<()> {
        for (name, value) in MATERIAL_FIELDS.iter().zip(self.values()) {
            if !value.is_finite() {
                return Err(BandError::invalid_input(name, "must be a finite number"));
            }
        }
        Ok(())
    }

    /// Returns the elastic shear modulus g = E / 3
    pub fn elastic_shear_modulus(&self) -> f64 {
        self.elastic_modulus / 3.0
    }

    /// Returns the hardening shear modulus gt = Et / 3
    pub fn hardening_shear_modulus(&self) -> f64 {
        self.hardening_modulus / 3.0
    }

    /// Returns the softening shear modulus gs = Es / 3
    pub fn softening_shear_modulus(&self) -> f64 {
        self.softening_modulus / 3.0
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ShearBandMaterial;
    use crate::base::{BandError, SampleMaterials};

    #[test]
    fn shear_moduli_are_correct() {
        let mat = SampleMaterials::s235jr();
        assert_eq!(mat.elastic_shear_modulus(), mat.elastic_modulus / 3.0);
        assert_eq!(mat.hardening_shear_modulus(), mat.hardening_modulus / 3.0);
        assert_eq!(mat.softening_shear_modulus(), mat.softening_modulus / 3.0);
        assert_eq!(mat.elastic_shear_modulus() * 3.0, mat.elastic_modulus);
        assert_eq!(mat.hardening_shear_modulus() * 3.0, mat.hardening_modulus);
        assert_eq!(mat.softening_shear_modulus() * 3.0, mat.softening_modulus);
    }

    #[test]
    fn from_values_works() {
        let mat = SampleMaterials::s235jr();
        let copy = ShearBandMaterial::from_values(&mat.values()).unwrap();
        assert_eq!(copy, mat);
    }

    #[test]
    fn from_values_captures_errors() {
        assert_eq!(
            ShearBandMaterial::from_values(&[1.0, 2.0]).err(),
            Some(BandError::InvalidInput {
                field: "material".to_string(),
                reason: "expected 7 constants, got 2".to_string(),
            })
        );
        let mut values = SampleMaterials::s235jr().values();
        values[5] = f64::NAN;
        assert_eq!(
            ShearBandMaterial::from_values(&values).err(),
            Some(BandError::InvalidInput {
                field: "intrinsic_length".to_string(),
                reason: "must be a finite number".to_string(),
            })
        );
        values[5] = 1e-5;
        values[0] = f64::INFINITY;
        assert!(ShearBandMaterial::from_values(&values).is_err());
    }

    #[test]
    fn serialize_and_deserialize_work() {
        let mat = SampleMaterials::s235jr();
        let json = serde_json::to_string(&mat).unwrap();
        let read: ShearBandMaterial = serde_json::from_str(&json).unwrap();
        assert_eq!(read, mat);
        assert!(serde_json::from_str::<ShearBandMaterial>("{\"elastic_modulus\":1.0}").is_err());
    }
}
