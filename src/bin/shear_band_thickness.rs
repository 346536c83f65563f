use shearband::analytical::{StrainRateField, Thickness};
use shearband::base::{uniaxial_angles, BandError, BandMode, MaterialTable};
use shearband::prelude::ShearBand;
use structopt::StructOpt;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "shear_band_thickness",
    about = "Computes the initial thickness of a shear band (and optionally the strain-rate field)"
)]
struct Options {
    /// JSON file with the material table
    materials: String,

    /// Name of the material in the table
    name: String,

    /// Band mode: shear or uniaxial
    #[structopt(short, long, default_value = "shear")]
    mode: String,

    /// Orientation angles in degrees (default: 0, 1, ..., 90)
    #[structopt(short, long, use_delimiter = true)]
    angles: Vec<f64>,

    /// Prints the strain-rate field
    #[structopt(short, long)]
    field: bool,

    /// Largest transverse position of the field (m)
    #[structopt(long, default_value = "5e-5")]
    x2_max: f64,

    /// Number of transverse positions of the field
    #[structopt(long, default_value = "11")]
    nx2: usize,

    /// Shows debug messages
    #[structopt(short, long)]
    verbose: bool,
}

fn main() -> Result<(), BandError> {
    // parse options
    let options = Options::from_args();

    // logging
    let level = if options.verbose { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder().with_max_level(level).with_target(false).init();

    // run
    run(&options).map_err(|e| {
        tracing::error!(material = %options.name, error = %e, "shear band calculation failed");
        e
    })
}

/// Loads the material, computes the thickness, and prints the results
fn run(options: &Options) -> Result<(), BandError> {
    // band model
    let mode: BandMode = options.mode.parse()?;
    let table = MaterialTable::read_json(&options.materials)?;
    let material = table.get(&options.name)?;
    let band = ShearBand::new(mode, material)?;
    let angles = if options.angles.is_empty() {
        uniaxial_angles()
    } else {
        options.angles.clone()
    };

    // thickness
    println!("material = {}, mode = {}", options.name, mode);
    let thickness = match mode {
        BandMode::Shear => band.thickness()?,
        BandMode::Uniaxial => Thickness::Uniaxial(band.band_thickness_uniaxial(&angles)),
    };
    match &thickness {
        Thickness::Shear(t) => println!("thickness = {:e} m", t),
        Thickness::Uniaxial(series) => {
            for (angle, value) in series.angles_deg.iter().zip(&series.values) {
                match value {
                    Ok(t) => println!("θ = {:>5}°  thickness = {:e} m", angle, t),
                    Err(e) => println!("θ = {:>5}°  {}", angle, e),
                }
            }
        }
    }

    // strain-rate field
    if options.field {
        if options.nx2 < 2 {
            return Err(BandError::InvalidInput {
                field: "nx2".to_string(),
                reason: "must be ≥ 2".to_string(),
            });
        }
        let dx = options.x2_max / ((options.nx2 - 1) as f64);
        let x2: Vec<_> = (0..options.nx2).map(|i| (i as f64) * dx).collect();
        let field = StrainRateField::from_band(&band, &angles, &x2)?;
        println!("{:>6} {:>13} {:>13} {:>13} {:>13}", "θ", "x2", "ε̇12", "ε̇22", "effective");
        for column in 0..field.ncol() {
            for (x, rates) in field.profile(column) {
                println!(
                    "{:>6} {:>13.6e} {:>13.6e} {:>13.6e} {:>13.6e}",
                    field.angles_deg()[column],
                    x,
                    rates.strain_rate_12,
                    rates.strain_rate_22,
                    rates.effective
                );
            }
        }
        for failure in field.failures() {
            println!("θ = {}°, x2 = {:e}: {}", failure.angle_deg, failure.x2, failure.error);
        }
    }
    Ok(())
}
