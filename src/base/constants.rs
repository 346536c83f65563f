/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/shearband/test";

/// Defines the orientation angles (in degrees) used by the uniaxial thickness: 0°, 1°, ..., 90°
pub const UNIAXIAL_NUM_ANGLES: usize = 91;

/// Defines the magnitude below which cos(η t) is treated as zero
pub const SINGULARITY_TOLERANCE: f64 = 1e-12;

/// Returns the default orientation angles (in degrees) of the uniaxial band
pub fn uniaxial_angles() -> Vec<f64> {
    (0..UNIAXIAL_NUM_ANGLES).map(|i| i as f64).collect()
}
