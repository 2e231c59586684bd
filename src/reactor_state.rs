//! # Reactor State Containers
//!
//! Read-only inputs of the kinetics evaluator: the model parameters and the
//! per-cell gas/solid snapshots produced by the surrounding grid and
//! integrator. This crate never advances these fields in time; it only reads
//! them, so the structs here are plain data with constructors for bootstrap
//! and a dimension check run before every kinetics update.
//!
//! ## Mole-fraction column convention
//!
//! The rate laws address the N×5 matrix `xg` positionally. The column
//! identity is fixed by whoever fills the [`GasState`] and must be:
//!
//! | Column | Species |
//! |--------|---------|
//! | 0 | H₂  |
//! | 1 | CH₄ |
//! | 2 | CO  |
//! | 3 | CO₂ |
//! | 4 | H₂O |
//!
//! No rate law reads column 1; columns 0, 2, 3, 4 feed the Boudouard
//! inhibition quotient and the steam-gasification uptake term. A misordered
//! matrix corrupts those two rates silently, so keep this table in sync with
//! the gas-phase solver that owns `xg`.

use crate::errors::KineticsError;
use log::info;
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Number of species columns in the mole-fraction matrix `xg`.
pub const XG_COLS: usize = 5;

/// Model parameters of the reacting bed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Number of cells in the spatial grid
    pub N: usize,
    /// Number of cells in the active pyrolysis zone, counted from the fuel
    /// inlet; devolatilization gas and tar release is suppressed beyond it
    pub Ni: usize,
    /// Moisture mass fraction of the feedstock
    pub wH2O: f64,
}

impl Params {
    pub fn new(N: usize, Ni: usize, wH2O: f64) -> Self {
        Self { N, Ni, wH2O }
    }

    /// Read parameters from a JSON file, e.g. `{"N": 100, "Ni": 40, "wH2O": 0.18}`.
    pub fn from_json_file(path: &Path) -> Result<Self, KineticsError> {
        let content = fs::read_to_string(path)?;
        let params: Params = serde_json::from_str(&content)?;
        params.validate()?;
        info!(
            "loaded parameters from {:?}: N = {}, Ni = {}, wH2O = {}",
            path, params.N, params.Ni, params.wH2O
        );
        Ok(params)
    }

    /// Validate parameter ranges
    pub fn validate(&self) -> Result<(), KineticsError> {
        if self.N == 0 {
            return Err(KineticsError::InvalidConfiguration(
                "cell count N must be at least 1".to_string(),
            ));
        }
        if self.Ni > self.N {
            return Err(KineticsError::InvalidConfiguration(format!(
                "pyrolysis zone Ni = {} exceeds cell count N = {}",
                self.Ni, self.N
            )));
        }
        if !(0.0..1.0).contains(&self.wH2O) {
            return Err(KineticsError::InvalidConfiguration(format!(
                "moisture fraction wH2O = {} must lie in [0, 1)",
                self.wH2O
            )));
        }
        Ok(())
    }
}

/// Per-cell gas-phase snapshot. Owned and advanced by the gas-phase solver;
/// the kinetics evaluator only reads it.
#[derive(Debug, Clone)]
pub struct GasState {
    /// Pressure [Pa]
    pub P: DVector<f64>,
    /// Gas temperature [K]
    pub Tg: DVector<f64>,
    /// CH₄ bulk density [kg/m³]
    pub rhob_ch4: DVector<f64>,
    /// CO bulk density [kg/m³]
    pub rhob_co: DVector<f64>,
    /// CO₂ bulk density [kg/m³]
    pub rhob_co2: DVector<f64>,
    /// H₂ bulk density [kg/m³]
    pub rhob_h2: DVector<f64>,
    /// H₂O bulk density [kg/m³]
    pub rhob_h2o: DVector<f64>,
    /// Tar bulk density [kg/m³]
    pub rhob_t: DVector<f64>,
    /// N×5 mole-fraction matrix, columns per the module-level table
    pub xg: DMatrix<f64>,
}

impl GasState {
    /// Uniform gas state: every cell at pressure `P` and temperature `Tg`,
    /// all six bulk densities equal to `rhob`, all `xg` entries equal to `x`.
    pub fn uniform(n: usize, P: f64, Tg: f64, rhob: f64, x: f64) -> Self {
        Self {
            P: DVector::from_element(n, P),
            Tg: DVector::from_element(n, Tg),
            rhob_ch4: DVector::from_element(n, rhob),
            rhob_co: DVector::from_element(n, rhob),
            rhob_co2: DVector::from_element(n, rhob),
            rhob_h2: DVector::from_element(n, rhob),
            rhob_h2o: DVector::from_element(n, rhob),
            rhob_t: DVector::from_element(n, rhob),
            xg: DMatrix::from_element(n, XG_COLS, x),
        }
    }

    /// Check that every field spans `n` cells and `xg` is n×5.
    pub fn check_dims(&self, n: usize) -> Result<(), KineticsError> {
        let fields = [
            ("P", self.P.len()),
            ("Tg", self.Tg.len()),
            ("rhob_ch4", self.rhob_ch4.len()),
            ("rhob_co", self.rhob_co.len()),
            ("rhob_co2", self.rhob_co2.len()),
            ("rhob_h2", self.rhob_h2.len()),
            ("rhob_h2o", self.rhob_h2o.len()),
            ("rhob_t", self.rhob_t.len()),
        ];
        for (name, len) in fields {
            if len != n {
                return Err(KineticsError::MismatchedDimensions(format!(
                    "gas field {} spans {} cells, expected {}",
                    name, len, n
                )));
            }
        }
        if self.xg.nrows() != n || self.xg.ncols() != XG_COLS {
            return Err(KineticsError::MismatchedDimensions(format!(
                "xg is {}x{}, expected {}x{}",
                self.xg.nrows(),
                self.xg.ncols(),
                n,
                XG_COLS
            )));
        }
        Ok(())
    }
}

/// Per-cell solid-phase snapshot. Owned and advanced by the solid-phase
/// solver; the kinetics evaluator only reads it.
#[derive(Debug, Clone)]
pub struct SolidState {
    /// Solid temperature [K]
    pub Ts: DVector<f64>,
    /// Reacted-char fraction, 0 = fresh char, 1 = fully reacted
    pub Xcr: DVector<f64>,
    /// Biomass bulk density [kg/m³]
    pub rhob_b: DVector<f64>,
    /// Char bulk density [kg/m³]
    pub rhob_c: DVector<f64>,
}

impl SolidState {
    /// Uniform solid state across `n` cells.
    pub fn uniform(n: usize, Ts: f64, Xcr: f64, rhob_b: f64, rhob_c: f64) -> Self {
        Self {
            Ts: DVector::from_element(n, Ts),
            Xcr: DVector::from_element(n, Xcr),
            rhob_b: DVector::from_element(n, rhob_b),
            rhob_c: DVector::from_element(n, rhob_c),
        }
    }

    /// Check that every field spans `n` cells.
    pub fn check_dims(&self, n: usize) -> Result<(), KineticsError> {
        let fields = [
            ("Ts", self.Ts.len()),
            ("Xcr", self.Xcr.len()),
            ("rhob_b", self.rhob_b.len()),
            ("rhob_c", self.rhob_c.len()),
        ];
        for (name, len) in fields {
            if len != n {
                return Err(KineticsError::MismatchedDimensions(format!(
                    "solid field {} spans {} cells, expected {}",
                    name, len, n
                )));
            }
        }
        Ok(())
    }
}
