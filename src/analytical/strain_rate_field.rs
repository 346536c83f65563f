use super::ShearBand;
use crate::base::{checked_div, BandError, BandResult, Location};

/// Holds the strain rates at one point of the field
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrainRates {
    /// In-plane strain rate ε̇11 (depends on θ only)
    pub strain_rate_11: f64,

    /// Shear strain rate ε̇12
    pub strain_rate_12: f64,

    /// Normal strain rate ε̇22
    pub strain_rate_22: f64,

    /// Effective strain rate ε̇12 sin2θ + ε̇11 sin²θ + ε̇22 cos²θ
    pub effective: f64,
}

/// Holds the location and cause of a failed cell
#[derive(Clone, Debug, PartialEq)]
pub struct FieldFailure {
    /// Row index (transverse position)
    pub row: usize,

    /// Column index (orientation angle)
    pub column: usize,

    /// Transverse position x2 (m)
    pub x2: f64,

    /// Orientation angle θ (degrees)
    pub angle_deg: f64,

    /// Reason
    pub error: BandError,
}

/// Holds the strain-rate field across the shear band
///
/// The field is indexed by (row, column) = (transverse position x2, orientation angle θ).
/// Each cell holds either the strain rates or the error that prevented their calculation;
/// a failed cell does not affect the others.
///
/// ```text
///            θ[0]   θ[1]   ...
///  x2[0]  │  cell   cell
///  x2[1]  │  cell   cell
///   ...   │
/// ```
#[derive(Clone, Debug)]
pub struct StrainRateField {
    angles_deg: Vec<f64>,
    x2: Vec<f64>,
    half_thickness: Vec<BandResult<f64>>,
    cells: Vec<Vec<BandResult<StrainRates>>>,
}

impl StrainRateField {
    /// Builds the field with given half-thickness values
    ///
    /// # Input
    ///
    /// * `band` -- the shear band model
    /// * `angles_deg` -- orientation angles θ in degrees (columns)
    /// * `x2` -- transverse positions measured from the band mid-plane (rows); must be ≥ 0
    /// * `half_thickness` -- half-thickness of the band for each angle (len = angles_deg.len())
    pub fn build(band: &ShearBand, angles_deg: &[f64], x2: &[f64], half_thickness: &[f64]) -> BandResult<Self> {
        if half_thickness.len() != angles_deg.len() {
            return Err(BandError::InvalidInput {
                field: "half_thickness".to_string(),
                reason: format!(
                    "expected {} values (one per angle), got {}",
                    angles_deg.len(),
                    half_thickness.len()
                ),
            });
        }
        check_finite("angles_deg", angles_deg)?;
        check_positions(x2)?;
        check_finite("half_thickness", half_thickness)?;
        let half_thickness = half_thickness.iter().map(|t| Ok(*t)).collect();
        Ok(StrainRateField::compute(band, angles_deg, x2, half_thickness))
    }

    /// Builds the field using the half-thickness resolved by the band model
    ///
    /// Columns whose thickness cannot be calculated hold the thickness error in every cell.
    ///
    /// In shear mode, the pure shear thickness is used as the band thickness of every column,
    /// whereas the coefficients (a_value, c_value, ξ, η) still depend on the angle of the column.
    pub fn from_band(band: &ShearBand, angles_deg: &[f64], x2: &[f64]) -> BandResult<Self> {
        check_finite("angles_deg", angles_deg)?;
        check_positions(x2)?;
        let half_thickness = band.half_thickness(angles_deg);
        Ok(StrainRateField::compute(band, angles_deg, x2, half_thickness))
    }

    /// Evaluates all cells
    fn compute(band: &ShearBand, angles_deg: &[f64], x2: &[f64], half_thickness: Vec<BandResult<f64>>) -> Self {
        let mut cells = vec![Vec::with_capacity(angles_deg.len()); x2.len()];
        for (angle, half) in angles_deg.iter().zip(&half_thickness) {
            let theta = angle.to_radians();
            for (row, x) in x2.iter().enumerate() {
                let cell = match half {
                    Ok(t) => calc_strain_rates(band, theta, *t, *x),
                    Err(e) => Err(e.clone()),
                };
                cells[row].push(cell);
            }
        }
        let field = StrainRateField {
            angles_deg: angles_deg.to_vec(),
            x2: x2.to_vec(),
            half_thickness,
            cells,
        };
        let nfail = field.failures().len();
        if nfail > 0 {
            tracing::warn!(nfail, ncell = x2.len() * angles_deg.len(), "strain-rate field has failed cells");
        }
        field
    }

    /// Returns the orientation angles θ in degrees (columns)
    pub fn angles_deg(&self) -> &[f64] {
        &self.angles_deg
    }

    /// Returns the transverse positions x2 (rows)
    pub fn x2(&self) -> &[f64] {
        &self.x2
    }

    /// Returns the half-thickness (or the error) used for each angle
    pub fn half_thickness(&self) -> &[BandResult<f64>] {
        &self.half_thickness
    }

    /// Returns the number of rows (transverse positions)
    pub fn nrow(&self) -> usize {
        self.x2.len()
    }

    /// Returns the number of columns (angles)
    pub fn ncol(&self) -> usize {
        self.angles_deg.len()
    }

    /// Returns the cell at (row, column)
    ///
    /// # Panics
    ///
    /// A panic will occur if the indices are out of range.
    pub fn get(&self, row: usize, column: usize) -> &BandResult<StrainRates> {
        &self.cells[row][column]
    }

    /// Returns the strain rates along the transverse direction for the given column
    ///
    /// Failed cells are skipped; the returned pairs are (x2, rates).
    pub fn profile(&self, column: usize) -> Vec<(f64, StrainRates)> {
        self.x2
            .iter()
            .zip(&self.cells)
            .filter_map(|(x, row)| row[column].as_ref().ok().map(|r| (*x, *r)))
            .collect()
    }

    /// Returns all failed cells
    pub fn failures(&self) -> Vec<FieldFailure> {
        let mut failures = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (column, cell) in cells.iter().enumerate() {
                if let Err(error) = cell {
                    failures.push(FieldFailure {
                        row,
                        column,
                        x2: self.x2[row],
                        angle_deg: self.angles_deg[column],
                        error: error.clone(),
                    });
                }
            }
        }
        failures
    }
}

/// Calculates the in-plane strain rate ε̇11 = (3 sin²θ - 1) / (6 g)
pub fn strain_rate_11(band: &ShearBand, theta: f64) -> f64 {
    let g = band.material.elastic_shear_modulus();
    (3.0 * f64::powi(f64::sin(theta), 2) - 1.0) / (6.0 * g)
}

/// Calculates the shear strain rate ε̇12 at the transverse position x2
///
/// ```text
/// inside  (x2 < t): ε̇12 = sin2θ / (4g) + A(θ,t) exp(-ξ x2)
/// outside (x2 ≥ t): ε̇12 = b2 / a2     + C(θ,t) cos(η x2)
/// ```
pub fn shear_strain_rate(band: &ShearBand, theta: f64, half_thickness: f64, x2: f64) -> BandResult<f64> {
    if x2 < half_thickness {
        let a = band.a_value(theta, half_thickness)?;
        let xi = band.xi(theta)?;
        Ok(band.baseline_shear_rate(theta) + a * f64::exp(-xi * x2))
    } else {
        let c = band.c_value(theta, half_thickness)?;
        let eta = band.eta(theta)?;
        Ok(band.far_field_shear_rate(theta)? + c * f64::cos(eta * x2))
    }
}

/// Calculates all strain rates at the transverse position x2
///
/// The normal strain rate follows from the compatibility relation
///
/// ```text
/// ε̇22 = -ε̇11 - k ε̇12 sin2θ / (3g)    with k = (σu - 3 g εu) / εu
/// ```
pub fn calc_strain_rates(band: &ShearBand, theta: f64, half_thickness: f64, x2: f64) -> BandResult<StrainRates> {
    let g = band.material.elastic_shear_modulus();
    let sigma_u = band.material.ultimate_tensile_strength;
    let epsilon_u = band.material.strain_at_uts;
    let sin_2theta = f64::sin(2.0 * theta);

    let k = checked_div("strain_rate_22", Location::Material, sigma_u - 3.0 * g * epsilon_u, epsilon_u)?;
    let strain_rate_12 = shear_strain_rate(band, theta, half_thickness, x2)?;
    let strain_rate_11 = strain_rate_11(band, theta);
    let strain_rate_22 = -strain_rate_11 - k * strain_rate_12 * sin_2theta / (3.0 * g);
    let effective = strain_rate_12 * sin_2theta
        + strain_rate_11 * f64::powi(f64::sin(theta), 2)
        + strain_rate_22 * f64::powi(f64::cos(theta), 2);
    for (quantity, value) in [
        ("strain_rate_12", strain_rate_12),
        ("strain_rate_22", strain_rate_22),
        ("effective", effective),
    ] {
        if !value.is_finite() {
            return Err(BandError::Singularity {
                quantity,
                location: Location::at_radians(theta),
            });
        }
    }
    Ok(StrainRates {
        strain_rate_11,
        strain_rate_12,
        strain_rate_22,
        effective,
    })
}

/// Checks that all values are finite
fn check_finite(field: &str, values: &[f64]) -> BandResult<()> {
    if values.iter().any(|v| !v.is_finite()) {
        return Err(BandError::invalid_input(field, "all values must be finite"));
    }
    Ok(())
}

/// Checks that the transverse positions are finite and non-negative
fn check_positions(x2: &[f64]) -> BandResult<()> {
    check_finite("x2", x2)?;
    if x2.iter().any(|x| *x < 0.0) {
        return Err(BandError::invalid_input("x2", "positions are measured from the mid-plane and must be ≥ 0"));
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
