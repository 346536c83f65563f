use super::ShearBand;
use crate::base::{checked_div, checked_sqrt, BandError, BandResult, Location, SINGULARITY_TOLERANCE};

/// Holds the angular factors shared by the coefficient functions
struct Trig {
    c2: f64, // cos²θ
    c4: f64, // cos⁴θ
    s2: f64, // sin²2θ
}

impl Trig {
    fn new(theta: f64) -> Self {
        let c2 = f64::powi(f64::cos(theta), 2);
        Trig {
            c2,
            c4: c2 * c2,
            s2: f64::powi(f64::sin(2.0 * theta), 2),
        }
    }
}

/// Coefficient functions of the localized displacement-rate modes
///
/// All functions take the orientation angle θ in radians.
impl ShearBand {
    /// Returns gt σy + g (σu - σy), a factor appearing in most coefficients
    fn strength_factor(&self) -> f64 {
        let (g, gt, _) = self.shear_moduli();
        let sigma_y = self.material.yield_strength;
        let sigma_u = self.material.ultimate_tensile_strength;
        gt * sigma_y + g * (sigma_u - sigma_y)
    }

    /// Calculates the coefficient a1(θ) of the localized mode
    ///
    /// ```text
    ///       2 σu gt g [3 (cos⁴θ + sin²2θ)(σu - σy)(g - gt) + 4 σu gt]
    /// a1 = ────────────────────────────────────────────────────────────
    ///       [gt σy + g (σu - σy)] [3 cos⁴θ (σu - σy)(g - gt) + 4 σu gt]
    /// ```
    pub fn a1(&self, theta: f64) -> BandResult<f64> {
        let (g, gt, _) = self.shear_moduli();
        let sigma_y = self.material.yield_strength;
        let sigma_u = self.material.ultimate_tensile_strength;
        let Trig { c4, s2, .. } = Trig::new(theta);

        let top = 3.0 * (c4 + s2) * (sigma_u - sigma_y) * (g - gt) + 4.0 * sigma_u * gt;
        let numerator = 2.0 * sigma_u * gt * g * top;
        let bottom = 3.0 * c4 * (sigma_u - sigma_y) * (g - gt) + 4.0 * sigma_u * gt;
        let denominator = self.strength_factor() * bottom;
        checked_div("a1", Location::at_radians(theta), numerator, denominator)
    }

    /// Calculates the coefficient a2(θ) of the localized mode
    pub fn a2(&self, theta: f64) -> BandResult<f64> {
        let (g, gt, gs) = self.shear_moduli();
        let sigma_y = self.material.yield_strength;
        let sigma_u = self.material.ultimate_tensile_strength;
        let Trig { c4, s2, .. } = Trig::new(theta);

        let factor = 2.0 * sigma_u * gt * g;
        let top_left = 2.0 * sigma_y * gs * (gt - g) * (s2 + c4);
        let top_right = g * sigma_u * (3.0 * (s2 + c4) * (gs - gt) + 4.0 * gt);
        let numerator = factor * (top_left + top_right);

        let bottom = 3.0 * (gt - g) * gs * sigma_y * c4 + 4.0 * g * gt * sigma_u + 3.0 * g * sigma_u * c4 * (gs - gt);
        let denominator = self.strength_factor() * bottom;
        checked_div("a2", Location::at_radians(theta), numerator, denominator)
    }

    /// Calculates the coefficient a3(θ) of the localized mode (proportional to a2)
    pub fn a3(&self, theta: f64) -> BandResult<f64> {
        let (g, gt, _) = self.shear_moduli();
        let sigma_y = self.material.yield_strength;
        let sigma_u = self.material.ultimate_tensile_strength;
        let Trig { c2, c4, .. } = Trig::new(theta);

        let top = 3.0 * c4 * (gt - g) * (sigma_y - sigma_u) + 4.0 * gt * sigma_u;
        let numerator = top * self.strength_factor();
        let bottom = 3.0 * (3.0 * c4 - 4.0 * c2) * (gt - g) * (sigma_y - sigma_u) - 4.0 * gt * sigma_u;
        let denominator = g * sigma_u * gt * bottom;
        let ratio = checked_div("a3", Location::at_radians(theta), numerator, denominator)?;
        Ok(-0.5 * ratio * self.a2(theta)?)
    }

    /// Calculates the coefficient b2(θ) of the far-field solution
    ///
    /// The far-field shear strain rate is b2/a2.
    ///
    /// ```text
    ///       ¾ (σu - σy)(g - gt) sin2θ (sin4θ + sin6θ) + σu gt sin²2θ
    /// b2 = ────────────────────────────────────────────────────────
    ///                     gt σy + g (σu - σy)
    /// ```
    pub fn b2(&self, theta: f64) -> BandResult<f64> {
        let (g, gt, _) = self.shear_moduli();
        let sigma_y = self.material.yield_strength;
        let sigma_u = self.material.ultimate_tensile_strength;
        let Trig { s2, .. } = Trig::new(theta);

        let harmonics = f64::sin(2.0 * theta) * (f64::sin(4.0 * theta) + f64::sin(6.0 * theta));
        let numerator = 0.75 * (sigma_u - sigma_y) * (g - gt) * harmonics + sigma_u * gt * s2;
        checked_div("b2", Location::at_radians(theta), numerator, self.strength_factor())
    }

    /// Calculates the decay rate ξ(θ) = √(3 εu a1 / (σu l²)) inside the band
    pub fn xi(&self, theta: f64) -> BandResult<f64> {
        let location = Location::at_radians(theta);
        let a1 = self.a1(theta)?;
        let radicand = checked_div("xi", location, 3.0 * self.material.strain_at_uts * a1, self.length_factor())?;
        checked_sqrt("xi", location, radicand)
    }

    /// Calculates the oscillation rate η(θ) = √(-3 εu a2 / (σu l²)) outside the band
    pub fn eta(&self, theta: f64) -> BandResult<f64> {
        let location = Location::at_radians(theta);
        let a2 = self.a2(theta)?;
        let radicand = checked_div("eta", location, -3.0 * self.material.strain_at_uts * a2, self.length_factor())?;
        checked_sqrt("eta", location, radicand)
    }

    /// Returns the elastic shear strain rate sin2θ / (4 g) (baseline inside the band)
    pub fn baseline_shear_rate(&self, theta: f64) -> f64 {
        f64::sin(2.0 * theta) / (4.0 * self.material.elastic_shear_modulus())
    }

    /// Returns the far-field shear strain rate b2/a2
    pub fn far_field_shear_rate(&self, theta: f64) -> BandResult<f64> {
        checked_div("b2/a2", Location::at_radians(theta), self.b2(theta)?, self.a2(theta)?)
    }

    /// Calculates the amplitude A(θ, t) of the solution inside the band
    ///
    /// A and C are chosen such that the inside and outside solutions have the same value
    /// and slope at the band boundary x2 = t (half-thickness):
    ///
    /// ```text
    ///     η tan(ηt) D exp(ξt)
    /// A = ───────────────────     with D = sin2θ/(4g) - b2/a2
    ///       ξ - η tan(ηt)
    /// ```
    pub fn a_value(&self, theta: f64, half_thickness: f64) -> BandResult<f64> {
        let location = Location::at_radians(theta);
        let xi = self.xi(theta)?;
        let eta = self.eta(theta)?;
        let d = self.baseline_shear_rate(theta) - self.far_field_shear_rate(theta)?;
        let tan = self.tan_eta_t(theta, eta, half_thickness, "a_value")?;
        let numerator = eta * tan * d * f64::exp(xi * half_thickness);
        checked_div("a_value", location, numerator, xi - eta * tan)
    }

    /// Calculates the amplitude C(θ, t) of the solution outside the band
    ///
    /// ```text
    ///     D + A exp(-ξt)
    /// C = ──────────────
    ///        cos(ηt)
    /// ```
    pub fn c_value(&self, theta: f64, half_thickness: f64) -> BandResult<f64> {
        let location = Location::at_radians(theta);
        let xi = self.xi(theta)?;
        let eta = self.eta(theta)?;
        let d = self.baseline_shear_rate(theta) - self.far_field_shear_rate(theta)?;
        let cos = self.cos_eta_t(theta, eta, half_thickness, "c_value")?;
        let a = self.a_value(theta, half_thickness)?;
        checked_div("c_value", location, d + a * f64::exp(-xi * half_thickness), cos)
    }

    /// Returns σu l²
    fn length_factor(&self) -> f64 {
        let l = self.material.intrinsic_length;
        self.material.ultimate_tensile_strength * l * l
    }

    /// Returns cos(ηt), checking that it does not vanish
    fn cos_eta_t(&self, theta: f64, eta: f64, half_thickness: f64, quantity: &'static str) -> BandResult<f64> {
        let cos = f64::cos(eta * half_thickness);
        if f64::abs(cos) < SINGULARITY_TOLERANCE {
            return Err(BandError::Singularity {
                quantity,
                location: Location::at_radians(theta),
            });
        }
        Ok(cos)
    }

    /// Returns tan(ηt)
    fn tan_eta_t(&self, theta: f64, eta: f64, half_thickness: f64, quantity: &'static str) -> BandResult<f64> {
        let cos = self.cos_eta_t(theta, eta, half_thickness, quantity)?;
        Ok(f64::sin(eta * half_thickness) / cos)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use crate::analytical::ShearBand;
    use crate::base::{BandError, BandMode, Location, SampleMaterials};
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn s235jr_band() -> ShearBand {
        ShearBand::new(BandMode::Uniaxial, SampleMaterials::s235jr()).unwrap()
    }

    #[test]
    fn coefficients_are_correct() {
        let band = s235jr_band();
        let theta = PI / 4.0;
        assert_relative_eq!(band.a1(theta).unwrap(), 16920421890.802835, max_relative = 1e-10);
        assert_relative_eq!(band.a2(theta).unwrap(), -988412685.8299698, max_relative = 1e-10);
        assert_relative_eq!(band.a3(theta).unwrap(), -0.05841536884888345, max_relative = 1e-10);
        assert_relative_eq!(band.eta(theta).unwrap(), f64::sqrt(16473544763.832829), max_relative = 1e-10);
        assert_relative_eq!(band.xi(theta).unwrap(), f64::sqrt(282007031513.3806), max_relative = 1e-10);
    }

    #[test]
    fn coefficients_at_zero_and_right_angle() {
        let band = s235jr_band();
        // the numerator and denominator brackets of a1 coincide at θ = 0 and θ = π/2
        assert_relative_eq!(band.a1(0.0).unwrap(), band.a1(PI / 2.0).unwrap(), max_relative = 1e-10);
        assert_relative_eq!(band.a3(PI / 2.0).unwrap(), 1.0, max_relative = 1e-10);
        assert_relative_eq!(band.b2(0.0).unwrap(), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn coefficients_are_symmetric() {
        let band = s235jr_band();
        for deg in [5.0, 17.0, 30.0, 45.0, 62.0, 80.0] {
            let theta = f64::to_radians(deg);
            assert_relative_eq!(band.a1(theta).unwrap(), band.a1(PI - theta).unwrap(), max_relative = 1e-10);
            assert_relative_eq!(band.a2(theta).unwrap(), band.a2(PI - theta).unwrap(), max_relative = 1e-10);
            let b2 = band.b2(theta).unwrap();
            assert_relative_eq!(b2, band.b2(PI - theta).unwrap(), max_relative = 1e-9, epsilon = 1e-15);
        }
    }

    #[test]
    fn xi_and_eta_capture_negative_radicands() {
        let band = s235jr_band();
        // a2(0) > 0, thus η is not real
        assert!(matches!(
            band.eta(0.0),
            Err(BandError::NegativeRadicand { quantity: "eta", .. })
        ));
        let mut mat = SampleMaterials::s235jr();
        mat.strain_at_uts = -0.2;
        let negative = ShearBand::new(BandMode::Uniaxial, mat).unwrap();
        assert!(matches!(
            negative.xi(PI / 4.0),
            Err(BandError::NegativeRadicand { quantity: "xi", .. })
        ));
    }

    #[test]
    fn amplitudes_make_the_solution_continuous() {
        let band = s235jr_band();
        let theta = PI / 4.0;
        let t = band.thickness_at(theta).unwrap() / 2.0;
        let a = band.a_value(theta, t).unwrap();
        let c = band.c_value(theta, t).unwrap();
        let xi = band.xi(theta).unwrap();
        let eta = band.eta(theta).unwrap();
        let inside = band.baseline_shear_rate(theta) + a * f64::exp(-xi * t);
        let outside = band.far_field_shear_rate(theta).unwrap() + c * f64::cos(eta * t);
        assert_relative_eq!(inside, outside, max_relative = 1e-10);
        let slope_inside = -xi * a * f64::exp(-xi * t);
        let slope_outside = -eta * c * f64::sin(eta * t);
        assert_relative_eq!(slope_inside, slope_outside, max_relative = 1e-10);
    }

    #[test]
    fn c_value_captures_singularity() {
        let band = s235jr_band();
        let theta = PI / 4.0;
        let eta = band.eta(theta).unwrap();
        // cos(η t) = 0
        let t = PI / (2.0 * eta);
        assert!(f64::abs(f64::cos(eta * t)) < 1e-12);
        assert!(matches!(
            band.c_value(theta, t),
            Err(BandError::Singularity { quantity: "c_value", .. })
        ));
        assert!(matches!(
            band.a_value(theta, t),
            Err(BandError::Singularity { quantity: "a_value", .. })
        ));
    }

    #[test]
    fn amplitudes_share_the_singularity_check() {
        let band = s235jr_band();
        let theta = f64::to_radians(30.0);
        let eta = band.eta(theta).unwrap();
        // cos(η t) = 0 at the first and second zeros
        for n in [1.0, 3.0] {
            let t = n * PI / (2.0 * eta);
            assert_eq!(
                band.c_value(theta, t).err(),
                Some(BandError::Singularity {
                    quantity: "c_value",
                    location: Location::at_radians(theta),
                })
            );
            assert_eq!(
                band.a_value(theta, t).err(),
                Some(BandError::Singularity {
                    quantity: "a_value",
                    location: Location::at_radians(theta),
                })
            );
        }
        // slightly away from the zero both amplitudes are available
        let t = 0.99 * PI / (2.0 * eta);
        assert!(band.a_value(theta, t).unwrap().is_finite());
        assert!(band.c_value(theta, t).unwrap().is_finite());
    }

    #[test]
    fn coefficients_are_reproducible() {
        let band = s235jr_band();
        let theta = f64::to_radians(33.0);
        let first = (band.a1(theta), band.a2(theta), band.a3(theta), band.b2(theta), band.xi(theta));
        let second = (band.a1(theta), band.a2(theta), band.a3(theta), band.b2(theta), band.xi(theta));
        assert_eq!(first, second);
    }
}
