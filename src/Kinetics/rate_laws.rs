//! # Gasification Rate-Law Library
//!
//! Reaction-rate expressions and physical constants for the fixed reaction
//! network of a downdraft biomass gasifier. Both the mass-generation and the
//! heat-generation stages evaluate their rates through this module, so the
//! formulas live here exactly once.
//!
//! ## Reaction Network
//!
//! | Symbol | Reaction | Phase |
//! |--------|----------|-------|
//! | `kbv, kbc, kbt` | biomass → volatiles / char / tar (parallel pyrolysis)   | solid |
//! | `KR2` | C + 2H₂ → CH₄ (char hydrogasification) | gas-solid |
//! | `KR3` | CH₄ + H₂O → CO + 3H₂ (methane reforming) | gas |
//! | `KR4` | CO + H₂O ⇌ CO₂ + H₂ (water-gas shift) | gas |
//! | `KR5` | C + CO₂ → 2CO (Boudouard) | gas-solid |
//! | `KR6` | C + H₂O → CO + H₂ (steam gasification) | gas-solid |
//! | `kt`  | tar → H₂ + CH₄ + CO + CO₂ (thermal cracking) | gas |
//!
//! All rate functions are pure elementwise transforms over length-N cell
//! arrays. Heterogeneous (gas-solid) rates are evaluated at the mean bed
//! temperature `Tss = (Ts + Tg)/2`; homogeneous rates at the gas temperature
//! `Tg`. Bulk densities `rhob_*` are in kg/m³, temperatures in K, pressure
//! in Pa; `KR2..KR6` come out in mol/(m³·s), so species source terms scale
//! them by the molar mass in g/mol times 1e-3.
//!
//! The mole-fraction matrix `xg` is addressed positionally (columns 0..4);
//! the column convention is documented on
//! [`GasState`](crate::reactor_state::GasState).

use nalgebra::{DMatrix, DVector};

/// Universal gas constant [J/(mol·K)]
pub const R_G: f64 = 8.314;

// Molar masses [g/mol]
pub const M_C: f64 = 12.0;
pub const M_CH4: f64 = 16.0;
pub const M_CO: f64 = 28.0;
pub const M_CO2: f64 = 44.0;
pub const M_H2: f64 = 2.0;
pub const M_H2O: f64 = 18.0;

// Pyrolysis Arrhenius parameters, A0 [1/s], E [J/mol]
pub const A0_BV: f64 = 1.44e4;
pub const E_BV: f64 = 88.6e3;
pub const A0_BC: f64 = 7.38e5;
pub const E_BC: f64 = 106.5e3;
pub const A0_BT: f64 = 4.13e6;
pub const E_BT: f64 = 112.7e3;

// Reaction enthalpies [kJ/mol], negative = exothermic
pub const DH_R2: f64 = -74.8;
pub const DH_R3: f64 = 206.0;
pub const DH_R4: f64 = -41.2;
pub const DH_R5: f64 = 172.0;
pub const DH_R6: f64 = 131.0;
/// Pyrolysis heat of reaction [J/kg]
pub const DH_PY: f64 = 64e3;

// Tar cracking product mass fractions
#[allow(non_upper_case_globals)]
pub const rH2: f64 = 0.01733;
#[allow(non_upper_case_globals)]
pub const rCH4: f64 = 0.08841;
#[allow(non_upper_case_globals)]
pub const rCO: f64 = 0.56333;
#[allow(non_upper_case_globals)]
pub const rCO2: f64 = 0.11093;

// Volatile gas correlation coefficients in species order [H2, CO, CO2, CH4]
#[allow(non_upper_case_globals)]
pub const m0v: [f64; 4] = [1.34e-16, 1.80e7, 2.48e3, 4.43e5];
#[allow(non_upper_case_globals)]
pub const b0v: [f64; 4] = [5.727, -1.871, -0.696, -1.495];

/// Elementwise Arrhenius coefficient `k(T) = A0 * exp(-E / (R*T))`.
fn arrhenius(a0: f64, e: f64, temp: &DVector<f64>) -> DVector<f64> {
    temp.map(|t| a0 * f64::exp(-e / (R_G * t)))
}

/// Devolatilization rate biomass → volatiles [1/s]
pub fn kbv(Ts: &DVector<f64>) -> DVector<f64> {
    arrhenius(A0_BV, E_BV, Ts)
}

/// Devolatilization rate biomass → char [1/s]
pub fn kbc(Ts: &DVector<f64>) -> DVector<f64> {
    arrhenius(A0_BC, E_BC, Ts)
}

/// Devolatilization rate biomass → tar [1/s]
pub fn kbt(Ts: &DVector<f64>) -> DVector<f64> {
    arrhenius(A0_BT, E_BT, Ts)
}

/// Mean of solid and gas temperature, `Tss = 0.5*(Ts + Tg)`, at which the
/// heterogeneous rates `KR2`, `KR5`, `KR6` are evaluated.
pub fn mean_solid_gas_temp(Ts: &DVector<f64>, Tg: &DVector<f64>) -> DVector<f64> {
    (Ts + Tg).scale(0.5)
}

/// Char hydrogasification rate `KR2` (C + 2H₂ → CH₄) [mol/(m³·s)],
/// first order in both the H₂ and the char bulk concentration.
pub fn char_hydrogasification(
    Tss: &DVector<f64>,
    rhob_h2: &DVector<f64>,
    rhob_c: &DVector<f64>,
) -> DVector<f64> {
    Tss.map(|t| 6.11e3 * f64::exp(-80333.0 / (R_G * t)))
        .component_mul(rhob_h2)
        .component_mul(rhob_c)
        .scale(1.0 / (M_H2 * M_C))
}

/// Methane reforming rate `KR3` (CH₄ + H₂O → CO + 3H₂) [mol/(m³·s)].
pub fn methane_reforming(Tg: &DVector<f64>, rhob_ch4: &DVector<f64>) -> DVector<f64> {
    Tg.map(|t| 312.0 * f64::exp(-15098.0 / t))
        .component_mul(rhob_ch4)
        .scale(1e3 / M_CH4)
}

/// Water-gas shift equilibrium constant `kr4(Tg)`.
pub fn water_gas_shift_equilibrium(Tg: &DVector<f64>) -> DVector<f64> {
    Tg.map(|t| 0.022 * f64::exp(34730.0 / (R_G * t)))
}

/// Equilibrium-corrected water-gas shift rate `KR4` (CO + H₂O ⇌ CO₂ + H₂)
/// [mol/(m³·s)]. Negative where the product side dominates; the sign carries
/// through to the species and heat balances and must not be clamped.
pub fn water_gas_shift(
    Tg: &DVector<f64>,
    rhob_co: &DVector<f64>,
    rhob_h2o: &DVector<f64>,
    rhob_co2: &DVector<f64>,
    rhob_h2: &DVector<f64>,
) -> DVector<f64> {
    let kr4 = water_gas_shift_equilibrium(Tg);
    let driving = rhob_co.component_mul(rhob_h2o).scale(1.0 / (M_CO * M_H2O))
        - rhob_co2
            .component_mul(rhob_h2)
            .scale(1.0 / (M_CO2 * M_H2))
            .component_div(&kr4);
    Tg.map(|t| 0.278e6 * f64::exp(-12560.0 / (R_G * t)))
        .component_mul(&driving)
}

/// Boudouard rate `KR5` (C + CO₂ → 2CO) [mol/(m³·s)] with Langmuir-type CO
/// inhibition, `k5r1 / (1 + xg_CO/(k5r2 * xg_CO2))`.
///
/// Cells with a zero CO₂ mole fraction get a zero rate by an explicit
/// per-cell override after the vectorized evaluation, so the inhibition
/// quotient never turns a missing reactant into NaN/inf.
pub fn boudouard(Tss: &DVector<f64>, xg: &DMatrix<f64>, rhob_c: &DVector<f64>) -> DVector<f64> {
    let k5r1 = Tss.map(|t| 3.6e5 * f64::exp(-20130.0 / t));
    let k5r2 = Tss.map(|t| 4.15e3 * f64::exp(-11420.0 / t));
    let inhibition = xg.column(2).component_div(&k5r2.component_mul(&xg.column(3)));
    let mut KR5 = k5r1
        .component_div(&inhibition.add_scalar(1.0))
        .component_mul(rhob_c)
        .scale(1e3 / M_C);
    for i in 0..KR5.len() {
        if xg[(i, 3)] == 0.0 {
            KR5[i] = 0.0;
        }
    }
    KR5
}

/// Steam gasification rate `KR6` (C + H₂O → CO + H₂) [mol/(m³·s)], with
/// pressure-dependent uptake, H₂ inhibition and scaling by the reacted-char
/// fraction `Xcr`.
pub fn steam_gasification(
    Tss: &DVector<f64>,
    P: &DVector<f64>,
    xg: &DMatrix<f64>,
    Xcr: &DVector<f64>,
    rhob_c: &DVector<f64>,
) -> DVector<f64> {
    let k6r1 = Tss.map(|t| 1.25e5 * f64::exp(-28000.0 / t));
    let k6r2 = 3.26e-4;
    let k6r3 = Tss.map(|t| 0.313 * f64::exp(-10120.0 / t));
    let denom = P.map(|p| 1.0 / p) + k6r3.component_mul(&xg.column(4)) + xg.column(0) * k6r2;
    k6r1.component_mul(&xg.column(4))
        .component_div(&denom)
        .component_mul(Xcr)
        .component_mul(rhob_c)
        .scale(1e3 / M_C)
}

/// Tar thermal cracking rate `kt` [1/s]; the cracked mass splits into the
/// gas species by the fixed fractions `rH2, rCH4, rCO, rCO2`.
pub fn tar_cracking(Tg: &DVector<f64>) -> DVector<f64> {
    Tg.map(|t| 9.55e4 * f64::exp(-93.37 / (R_G * t)))
}

/// Mass fractions of the devolatilization gas.
#[derive(Debug, Clone, Copy)]
pub struct VolatileFractions {
    pub h2: f64,
    pub co: f64,
    pub co2: f64,
    pub ch4: f64,
}

/// Composition of the volatile gas released by pyrolysis, from the empirical
/// correlation `yv_j = m0v_j * Tsv^b0v_j` evaluated at the mean solid
/// temperature of the active pyrolysis zone (the first `Ni` cells), then
/// converted to mass fractions with `xv = yv .* Mv / Σ(yv .* Mv)`.
pub fn volatile_composition(Ts: &DVector<f64>, Ni: usize) -> VolatileFractions {
    let Tsv = Ts.rows(0, Ni).mean();
    let Mv = [M_H2, M_CO, M_CO2, M_CH4];
    let yv: Vec<f64> = m0v
        .iter()
        .zip(b0v.iter())
        .map(|(m, b)| m * Tsv.powf(*b))
        .collect();
    let total: f64 = yv.iter().zip(Mv.iter()).map(|(y, mw)| y * mw).sum();
    VolatileFractions {
        h2: yv[0] * Mv[0] / total,
        co: yv[1] * Mv[1] / total,
        co2: yv[2] * Mv[2] / total,
        ch4: yv[3] * Mv[3] / total,
    }
}
