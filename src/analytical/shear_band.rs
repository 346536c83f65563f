use crate::base::{checked_div, checked_sqrt, uniaxial_angles, BandError, BandMode, BandResult, Location};
use crate::base::ShearBandMaterial;
use std::f64::consts::PI;

/// Holds the thickness of the shear band
#[derive(Clone, Debug, PartialEq)]
pub enum Thickness {
    /// Single value for the pure shear band
    Shear(f64),

    /// One value per orientation angle for the uniaxial band
    Uniaxial(ThicknessSeries),
}

impl Thickness {
    /// Returns the pure shear thickness, if available
    pub fn scalar(&self) -> Option<f64> {
        match self {
            Thickness::Shear(value) => Some(*value),
            Thickness::Uniaxial(..) => None,
        }
    }

    /// Returns the per-angle thickness series, if available
    pub fn series(&self) -> Option<&ThicknessSeries> {
        match self {
            Thickness::Shear(..) => None,
            Thickness::Uniaxial(series) => Some(series),
        }
    }
}

/// Holds the thickness of the uniaxial band for a sequence of orientation angles
///
/// Angles for which the formula has no real solution hold the corresponding error.
#[derive(Clone, Debug, PartialEq)]
pub struct ThicknessSeries {
    /// Orientation angles θ in degrees
    pub angles_deg: Vec<f64>,

    /// Thickness (m) or error for each angle
    pub values: Vec<BandResult<f64>>,
}

impl ThicknessSeries {
    /// Returns the number of angles
    pub fn len(&self) -> usize {
        self.angles_deg.len()
    }

    /// Returns true if there are no angles
    pub fn is_empty(&self) -> bool {
        self.angles_deg.is_empty()
    }

    /// Returns the (angle, thickness) pairs that were successfully computed
    pub fn successful(&self) -> Vec<(f64, f64)> {
        self.angles_deg
            .iter()
            .zip(&self.values)
            .filter_map(|(angle, value)| value.as_ref().ok().map(|t| (*angle, *t)))
            .collect()
    }

    /// Returns the (angle, error) pairs that failed
    pub fn failures(&self) -> Vec<(f64, &BandError)> {
        self.angles_deg
            .iter()
            .zip(&self.values)
            .filter_map(|(angle, value)| value.as_ref().err().map(|e| (*angle, e)))
            .collect()
    }
}

/// Implements the shear band model of Ref #1
///
/// The thickness of the band is computed in closed form for pure shear. For uniaxial
/// tension, the thickness depends on the orientation angle θ of the band and is computed
/// with the coefficient functions a1, a2, a3 and η (see the `shear_band_coefficients` module).
///
/// # Reference
///
/// 1. Chen S et al. (2011) Prediction of the initial thickness of shear band
///    localization based on a reduced strain gradient theory
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShearBand {
    pub(crate) mode: BandMode,
    pub(crate) material: ShearBandMaterial,
}

impl ShearBand {
    /// Allocates a new instance
    pub fn new(mode: BandMode, material: ShearBandMaterial) -> BandResult<Self> {
        material.validate()?;
        Ok(ShearBand { mode, material })
    }

    /// Allocates a new instance with the mode given as `"shear"` or `"uniaxial"`
    pub fn new_with_mode_name(mode: &str, material: ShearBandMaterial) -> BandResult<Self> {
        ShearBand::new(mode.parse()?, material)
    }

    /// Returns the band mode
    pub fn mode(&self) -> BandMode {
        self.mode
    }

    /// Returns the material constants
    pub fn material(&self) -> &ShearBandMaterial {
        &self.material
    }

    /// Calculates the thickness of the band
    ///
    /// The uniaxial thickness is computed for θ = 0°, 1°, ..., 90°.
    pub fn thickness(&self) -> BandResult<Thickness> {
        match self.mode {
            BandMode::Shear => Ok(Thickness::Shear(self.band_thickness_shear()?)),
            BandMode::Uniaxial => Ok(Thickness::Uniaxial(self.band_thickness_uniaxial(&uniaxial_angles()))),
        }
    }

    /// Calculates the half-thickness of the band for each angle (in degrees)
    ///
    /// The pure shear thickness does not depend on the angle, thus the same value (or
    /// error) is repeated for all angles.
    pub fn half_thickness(&self, angles_deg: &[f64]) -> Vec<BandResult<f64>> {
        match self.mode {
            BandMode::Shear => {
                let half = self.band_thickness_shear().map(|t| t / 2.0);
                vec![half; angles_deg.len()]
            }
            BandMode::Uniaxial => self
                .band_thickness_uniaxial(angles_deg)
                .values
                .into_iter()
                .map(|value| value.map(|t| t / 2.0))
                .collect(),
        }
    }

    /// Calculates the thickness of the band under pure shear
    ///
    /// ```text
    ///            ┌──────────────────────────┐
    ///            │       -2 g gt σu         │
    /// t = l ·   ╱ ──────────────────────────  · (π - atan(-gs / g))
    ///         ╲╱   gs gt σy + g gs (σu - σy)
    /// ```
    pub fn band_thickness_shear(&self) -> BandResult<f64> {
        let (g, gt, gs) = self.shear_moduli();
        let sigma_y = self.material.yield_strength;
        let sigma_u = self.material.ultimate_tensile_strength;
        let l = self.material.intrinsic_length;

        let numerator = -2.0 * g * gt * sigma_u;
        let denominator = gs * gt * sigma_y + g * gs * (sigma_u - sigma_y);
        let radicand = checked_div("shear thickness", Location::Material, numerator, denominator)?;
        let root = checked_sqrt("shear thickness", Location::Material, radicand)?;
        let bracket = PI - f64::atan(-gs / g);

        let thickness = l * root * bracket;
        tracing::debug!(thickness, "pure shear band thickness");
        Ok(thickness)
    }

    /// Calculates the thickness of the band under uniaxial tension for each angle (in degrees)
    pub fn band_thickness_uniaxial(&self, angles_deg: &[f64]) -> ThicknessSeries {
        let values = angles_deg
            .iter()
            .map(|angle| {
                let value = self.thickness_at(angle.to_radians());
                if let Err(e) = &value {
                    tracing::warn!(angle = *angle, error = %e, "uniaxial band thickness is not available");
                }
                value
            })
            .collect();
        ThicknessSeries {
            angles_deg: angles_deg.to_vec(),
            values,
        }
    }

    /// Calculates the uniaxial thickness at the orientation angle θ (in radians)
    ///
    /// ```text
    ///     π + atan(√(-a1/a2) · a3)
    /// t = ────────────────────────
    ///                η
    /// ```
    pub fn thickness_at(&self, theta: f64) -> BandResult<f64> {
        let location = Location::at_radians(theta);
        let a1 = self.a1(theta)?;
        let a2 = self.a2(theta)?;
        let a3 = self.a3(theta)?;
        let eta = self.eta(theta)?;
        let ratio = checked_div("uniaxial thickness", location, -a1, a2)?;
        let root = checked_sqrt("uniaxial thickness", location, ratio)?;
        checked_div("uniaxial thickness", location, PI + f64::atan(root * a3), eta)
    }

    /// Returns the elastic, hardening and softening shear moduli (g, gt, gs)
    pub(crate) fn shear_moduli(&self) -> (f64, f64, f64) {
        (
            self.material.elastic_shear_modulus(),
            self.material.hardening_shear_modulus(),
            self.material.softening_shear_modulus(),
        )
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{ShearBand, Thickness};
    use crate::base::{BandError, BandMode, Location, SampleMaterials};
    use approx::assert_relative_eq;

    #[test]
    fn new_captures_errors() {
        let mut mat = SampleMaterials::s235jr();
        assert_eq!(
            ShearBand::new_with_mode_name("torsion", mat).err(),
            Some(BandError::InvalidConfiguration {
                mode: "torsion".to_string()
            })
        );
        mat.yield_strength = f64::NAN;
        assert_eq!(
            ShearBand::new(BandMode::Shear, mat).err(),
            Some(BandError::InvalidInput {
                field: "yield_strength".to_string(),
                reason: "must be a finite number".to_string(),
            })
        );
    }

    #[test]
    fn band_thickness_shear_works() {
        let band = ShearBand::new(BandMode::Shear, SampleMaterials::s235jr()).unwrap();
        let t = band.band_thickness_shear().unwrap();
        assert!(t.is_finite() && t > 0.0);
        assert_relative_eq!(t, 1.0552704036421446e-4, max_relative = 1e-12);
        assert_eq!(band.thickness().unwrap(), Thickness::Shear(t));
        assert_eq!(band.band_thickness_shear().unwrap().to_bits(), t.to_bits());
    }

    #[test]
    fn band_thickness_shear_captures_negative_radicand() {
        let band = ShearBand::new(BandMode::Shear, SampleMaterials::non_softening()).unwrap();
        match band.band_thickness_shear() {
            Err(BandError::NegativeRadicand {
                quantity,
                location,
                radicand,
            }) => {
                assert_eq!(quantity, "shear thickness");
                assert_eq!(location, Location::Material);
                assert!(radicand < 0.0);
            }
            other => panic!("expected a negative radicand, got {:?}", other),
        }
        assert!(band.thickness().is_err());
    }

    #[test]
    fn band_thickness_shear_captures_singularity() {
        let mut mat = SampleMaterials::s235jr();
        mat.softening_modulus = 0.0;
        let band = ShearBand::new(BandMode::Shear, mat).unwrap();
        assert_eq!(
            band.band_thickness_shear().err(),
            Some(BandError::Singularity {
                quantity: "shear thickness",
                location: Location::Material,
            })
        );
    }

    #[test]
    fn band_thickness_uniaxial_works() {
        let band = ShearBand::new(BandMode::Uniaxial, SampleMaterials::s235jr()).unwrap();
        let series = band.band_thickness_uniaxial(&[0.0, 45.0, 90.0]);
        assert_eq!(series.len(), 3);
        assert!(matches!(series.values[0], Err(BandError::NegativeRadicand { .. })));
        assert!(matches!(series.values[2], Err(BandError::NegativeRadicand { .. })));
        let t45 = *series.values[1].as_ref().unwrap();
        assert_relative_eq!(t45, 2.2629243720987663e-5, max_relative = 1e-10);
        assert_eq!(series.successful(), vec![(45.0, t45)]);
        let failed: Vec<_> = series.failures().iter().map(|(angle, _)| *angle).collect();
        assert_eq!(failed, &[0.0, 90.0]);
    }

    #[test]
    fn thickness_uniaxial_uses_all_angles() {
        let band = ShearBand::new(BandMode::Uniaxial, SampleMaterials::s235jr()).unwrap();
        let thickness = band.thickness().unwrap();
        assert_eq!(thickness.scalar(), None);
        let series = thickness.series().unwrap();
        assert_eq!(series.len(), 91);
        assert_eq!(series.angles_deg[0], 0.0);
        assert_eq!(series.angles_deg[90], 90.0);
        for value in &series.values {
            if let Ok(t) = value {
                assert!(t.is_finite());
            }
        }
        assert_eq!(series.successful().len() + series.failures().len(), 91);
    }

    #[test]
    fn half_thickness_works() {
        let shear = ShearBand::new(BandMode::Shear, SampleMaterials::s235jr()).unwrap();
        let t = shear.band_thickness_shear().unwrap();
        let halves = shear.half_thickness(&[0.0, 30.0]);
        assert_eq!(halves, vec![Ok::<f64, BandError>(t / 2.0), Ok(t / 2.0)]);

        let uniaxial = ShearBand::new(BandMode::Uniaxial, SampleMaterials::s235jr()).unwrap();
        let halves = uniaxial.half_thickness(&[0.0, 45.0]);
        assert!(halves[0].is_err());
        assert_relative_eq!(*halves[1].as_ref().unwrap(), 1.1314621860493831e-5, max_relative = 1e-10);
    }
}
