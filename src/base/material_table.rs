use super::{BandError, BandResult, ShearBandMaterial};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds a set of named materials
///
/// The JSON representation is:
///
/// ```text
/// {
///   "materials": {
///     "S235JR": {
///       "elastic_modulus": 210e9,
///       "hardening_modulus": 2e9,
///       ...
///     }
///   }
/// }
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct MaterialTable {
    pub materials: BTreeMap<String, ShearBandMaterial>,
}

impl MaterialTable {
    /// Allocates an empty table
    pub fn new() -> Self {
        MaterialTable {
            materials: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) a material
    pub fn insert(&mut self, name: &str, material: ShearBandMaterial) -> &mut Self {
        self.materials.insert(name.to_string(), material);
        self
    }

    /// Returns the material with the given name, after checking its constants
    pub fn get(&self, name: &str) -> BandResult<ShearBandMaterial> {
        let material = self.materials.get(name).ok_or_else(|| BandError::MaterialNotFound {
            name: name.to_string(),
        })?;
        material.validate()?;
        Ok(*material)
    }

    /// Returns the material names (sorted)
    pub fn names(&self) -> Vec<&str> {
        self.materials.keys().map(|k| k.as_str()).collect()
    }

    /// Reads a JSON file containing the materials
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> BandResult<Self>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|e| BandError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let reader = BufReader::new(file);
        let table = serde_json::from_reader(reader).map_err(|e| BandError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(table)
    }

    /// Writes a JSON file with the materials
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> BandResult<()>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let io_error = |e: std::io::Error| BandError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        };
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(io_error)?;
        }
        let mut file = File::create(&path).map_err(io_error)?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|e| BandError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
