//! # Gasifier Kinetics Evaluator
//!
//! Source-term evaluator for the fixed pyrolysis/gasification reaction
//! network of a 1-D downdraft reactor bed. Given the current gas and solid
//! snapshots it produces, per cell, the mass-generation rate of every tracked
//! species and the heat-generation rates consumed by the gas- and solid-phase
//! energy equations.
//!
//! ## Main Components
//!
//! - [`Kinetics`]: owns the model parameters and the latest result arrays,
//!   overwritten wholesale by every [`Kinetics::update_state`] call
//! - [`MassGeneration`]: bundle of the ten mass-rate arrays produced by the
//!   first stage; the solid-heat stage takes it by reference
//! - Rate formulas live in [`rate_laws`](crate::Kinetics::rate_laws)
//!
//! ## Evaluation Order
//!
//! One update runs three stages in a fixed order:
//! 1. species mass generation ([`Kinetics::mass_generation`])
//! 2. gas-phase heat generation ([`Kinetics::gas_heat_generation`])
//! 3. solid-phase heat generation ([`Kinetics::solid_heat_generation`])
//!
//! Stage 3 consumes the biomass consumption rate `Sb` of stage 1 through the
//! [`MassGeneration`] argument, so it cannot run on data older than the
//! current pass unless the caller deliberately feeds it a stale bundle.
//! Callers that parallelize around the evaluator must treat one full update
//! as indivisible.
//!
//! ## Example Usage
//!
//! ```
//! use GasifKin::Kinetics::gasifier_kinetics::Kinetics;
//! use GasifKin::reactor_state::{GasState, Params, SolidState};
//!
//! let params = Params::new(3, 3, 0.2);
//! let gas = GasState::uniform(3, 1e5, 800.0, 0.01, 0.1);
//! let solid = SolidState::uniform(3, 800.0, 0.5, 50.0, 10.0);
//!
//! let mut kin = Kinetics::new(params).unwrap();
//! kin.update_state(&gas, &solid).unwrap();
//! println!("biomass consumption: {:?}", kin.Sb);
//! println!("solid heat source: {:?}", kin.qss);
//! ```

use crate::Kinetics::rate_laws::{
    self, DH_PY, DH_R2, DH_R3, DH_R4, DH_R5, DH_R6, M_C, M_CH4, M_CO, M_CO2, M_H2, M_H2O, rCH4,
    rCO, rCO2, rH2,
};
use crate::errors::KineticsError;
use crate::reactor_state::{GasState, Params, SolidState};
use log::{error, info};
use nalgebra::DVector;
use prettytable::{Cell, Row, Table};

/// Mass-generation rates of one evaluation pass, all in kg/(m³·s).
///
/// `Sg` is the elementwise sum of the six gas-species rates and is stored
/// rather than rederived downstream so the conservation identity holds by
/// construction.
#[derive(Debug, Clone)]
pub struct MassGeneration {
    /// Biomass consumption rate, negative by convention
    pub Sb: DVector<f64>,
    /// Char net rate: pyrolysis char yield minus gasification consumption
    pub Sc: DVector<f64>,
    /// Char formation rate alone, without gasification losses
    pub Sca: DVector<f64>,
    pub Sh2: DVector<f64>,
    pub Sh2o: DVector<f64>,
    pub Sch4: DVector<f64>,
    pub Sco: DVector<f64>,
    pub Sco2: DVector<f64>,
    /// Tar net rate: pyrolysis yield minus thermal cracking
    pub St: DVector<f64>,
    /// Total gas-phase rate, `Sh2 + Sch4 + Sco + Sco2 + Sh2o + St`
    pub Sg: DVector<f64>,
}

/// Three-stage kinetics evaluator for the reacting bed.
///
/// Construction validates the parameters; the result fields stay empty until
/// the first [`Kinetics::update_state`] call fills them.
#[derive(Debug, Clone)]
pub struct Kinetics {
    pub params: Params,
    /// Biomass consumption rate [kg/(m³·s)]
    pub Sb: DVector<f64>,
    /// Char net generation rate [kg/(m³·s)]
    pub Sc: DVector<f64>,
    /// Accumulated char formation rate [kg/(m³·s)]
    pub Sca: DVector<f64>,
    /// H₂ generation rate [kg/(m³·s)]
    pub Sh2: DVector<f64>,
    /// H₂O generation rate [kg/(m³·s)]
    pub Sh2o: DVector<f64>,
    /// CH₄ generation rate [kg/(m³·s)]
    pub Sch4: DVector<f64>,
    /// CO generation rate [kg/(m³·s)]
    pub Sco: DVector<f64>,
    /// CO₂ generation rate [kg/(m³·s)]
    pub Sco2: DVector<f64>,
    /// Tar net generation rate [kg/(m³·s)]
    pub St: DVector<f64>,
    /// Total gas generation rate [kg/(m³·s)]
    pub Sg: DVector<f64>,
    /// Gas-phase heat generation [W/m³]
    pub qgs: DVector<f64>,
    /// Solid-phase heat generation [W/m³]
    pub qss: DVector<f64>,
}

impl Kinetics {
    pub fn new(params: Params) -> Result<Self, KineticsError> {
        params.validate()?;
        Ok(Self {
            params,
            Sb: DVector::zeros(0),
            Sc: DVector::zeros(0),
            Sca: DVector::zeros(0),
            Sh2: DVector::zeros(0),
            Sh2o: DVector::zeros(0),
            Sch4: DVector::zeros(0),
            Sco: DVector::zeros(0),
            Sco2: DVector::zeros(0),
            St: DVector::zeros(0),
            Sg: DVector::zeros(0),
            qgs: DVector::zeros(0),
            qss: DVector::zeros(0),
        })
    }

    /// Stage 1: mass-generation rates for the gas species and both solid
    /// phases.
    ///
    /// Biomass devolatilizes through three parallel Arrhenius channels into
    /// volatiles, char and tar; the released volatile gas is split by the
    /// empirical composition correlation and, together with tar cracking and
    /// the heterogeneous/homogeneous reaction set, assembled into per-species
    /// rates. Volatile and tar release is zeroed beyond the active pyrolysis
    /// zone (cells `Ni..N`); char formation is not zone-restricted.
    pub fn mass_generation(&self, gas: &GasState, solid: &SolidState) -> MassGeneration {
        let n = self.params.N;
        let Ni = self.params.Ni;

        let kbv = rate_laws::kbv(&solid.Ts);
        let kbc = rate_laws::kbc(&solid.Ts);
        let kbt = rate_laws::kbt(&solid.Ts);
        let Sb = -(&kbv + &kbc + &kbt).component_mul(&solid.rhob_b);

        let Tss = rate_laws::mean_solid_gas_temp(&solid.Ts, &gas.Tg);
        let KR2 = rate_laws::char_hydrogasification(&Tss, &gas.rhob_h2, &solid.rhob_c);
        let KR5 = rate_laws::boudouard(&Tss, &gas.xg, &solid.rhob_c);
        let KR6 =
            rate_laws::steam_gasification(&Tss, &gas.P, &gas.xg, &solid.Xcr, &solid.rhob_c);
        let Sc = kbc.component_mul(&solid.rhob_b) - (&KR2 + &KR5 + &KR6).scale(M_C * 1e-3);
        let Sca = kbc.component_mul(&solid.rhob_b);

        let mut Sbv = kbv.component_mul(&solid.rhob_b);
        let mut Sbt = kbt.component_mul(&solid.rhob_b);
        // no devolatilization release beyond the active pyrolysis zone
        Sbv.rows_mut(Ni, n - Ni).fill(0.0);
        Sbt.rows_mut(Ni, n - Ni).fill(0.0);

        let xv = rate_laws::volatile_composition(&solid.Ts, Ni);
        let KR3 = rate_laws::methane_reforming(&gas.Tg, &gas.rhob_ch4);
        let KR4 = rate_laws::water_gas_shift(
            &gas.Tg,
            &gas.rhob_co,
            &gas.rhob_h2o,
            &gas.rhob_co2,
            &gas.rhob_h2,
        );
        let kt = rate_laws::tar_cracking(&gas.Tg);
        let cracked_tar = kt.component_mul(&gas.rhob_t);

        let Sh2 = &Sbv * xv.h2
            + &cracked_tar * rH2
            + (KR2.scale(-2.0) + KR3.scale(3.0) + &KR4 + &KR6).scale(M_H2 * 1e-3);
        let Sch4 =
            &Sbv * xv.ch4 + &cracked_tar * rCH4 + (&KR2 - &KR3).scale(M_CH4 * 1e-3);
        let Sco = &Sbv * xv.co
            + &cracked_tar * rCO
            + (&KR3 - &KR4 + KR5.scale(2.0) + &KR6).scale(M_CO * 1e-3);
        let Sco2 = &Sbv * xv.co2 + &cracked_tar * rCO2 + (&KR4 - &KR5).scale(M_CO2 * 1e-3);
        let Sh2o = &Sb * (-self.params.wH2O) - (&KR3 + &KR4 + &KR6).scale(M_H2O * 1e-3);
        let St = &Sbt - &cracked_tar;
        let Sg = &Sh2 + &Sch4 + &Sco + &Sco2 + &Sh2o + &St;

        MassGeneration {
            Sb,
            Sc,
            Sca,
            Sh2,
            Sh2o,
            Sch4,
            Sco,
            Sco2,
            St,
            Sg,
        }
    }

    /// Stage 2: heat generation of the homogeneous gas reactions (methane
    /// reforming and water-gas shift) [W/m³].
    pub fn gas_heat_generation(&self, gas: &GasState) -> DVector<f64> {
        let KR3 = rate_laws::methane_reforming(&gas.Tg, &gas.rhob_ch4);
        let KR4 = rate_laws::water_gas_shift(
            &gas.Tg,
            &gas.rhob_co,
            &gas.rhob_h2o,
            &gas.rhob_co2,
            &gas.rhob_h2,
        );
        (KR4.scale(DH_R4) + KR3.scale(DH_R3)).scale(1e3)
    }

    /// Stage 3: heat generation of the heterogeneous char reactions plus the
    /// pyrolysis heat sink [W/m³].
    ///
    /// Takes the stage-1 bundle explicitly because the pyrolysis term is
    /// proportional to the biomass consumption rate `Sb` of the same pass.
    pub fn solid_heat_generation(
        &self,
        gas: &GasState,
        solid: &SolidState,
        mass: &MassGeneration,
    ) -> DVector<f64> {
        let Tss = rate_laws::mean_solid_gas_temp(&solid.Ts, &gas.Tg);
        let KR2 = rate_laws::char_hydrogasification(&Tss, &gas.rhob_h2, &solid.rhob_c);
        let KR5 = rate_laws::boudouard(&Tss, &gas.xg, &solid.rhob_c);
        let KR6 =
            rate_laws::steam_gasification(&Tss, &gas.P, &gas.xg, &solid.Xcr, &solid.rhob_c);
        (KR2.scale(DH_R2) + KR5.scale(DH_R5) + KR6.scale(DH_R6)).scale(1e3) + &mass.Sb * DH_PY
    }

    /// Run the three stages in order and overwrite every result field.
    pub fn update_state(&mut self, gas: &GasState, solid: &SolidState) -> Result<(), KineticsError> {
        let n = self.params.N;
        if let Err(e) = gas.check_dims(n).and_then(|_| solid.check_dims(n)) {
            error!("kinetics update rejected: {}", e);
            return Err(e);
        }

        let mass = self.mass_generation(gas, solid);
        info!("mass-generation rates computed for {} cells", n);
        let qgs = self.gas_heat_generation(gas);
        info!("gas-phase heat generation computed");
        let qss = self.solid_heat_generation(gas, solid, &mass);
        info!("solid-phase heat generation computed");

        let MassGeneration {
            Sb,
            Sc,
            Sca,
            Sh2,
            Sh2o,
            Sch4,
            Sco,
            Sco2,
            St,
            Sg,
        } = mass;
        self.Sb = Sb;
        self.Sc = Sc;
        self.Sca = Sca;
        self.Sh2 = Sh2;
        self.Sh2o = Sh2o;
        self.Sch4 = Sch4;
        self.Sco = Sco;
        self.Sco2 = Sco2;
        self.St = St;
        self.Sg = Sg;
        self.qgs = qgs;
        self.qss = qss;
        Ok(())
    }

    /// Print the latest source terms as a per-cell table.
    pub fn pretty_print_rates(&self) -> Result<(), KineticsError> {
        if self.Sg.is_empty() {
            return Err(KineticsError::MissingData(
                "no rates to print, call update_state first".to_string(),
            ));
        }
        let mut table = Table::new();
        let header = [
            "cell", "Sb", "Sc", "Sca", "Sh2", "Sh2o", "Sch4", "Sco", "Sco2", "St", "Sg", "qgs",
            "qss",
        ];
        table.add_row(Row::new(header.iter().map(|h| Cell::new(h)).collect()));
        for i in 0..self.Sg.len() {
            let values = [
                self.Sb[i],
                self.Sc[i],
                self.Sca[i],
                self.Sh2[i],
                self.Sh2o[i],
                self.Sch4[i],
                self.Sco[i],
                self.Sco2[i],
                self.St[i],
                self.Sg[i],
                self.qgs[i],
                self.qss[i],
            ];
            let mut row = vec![Cell::new(&i.to_string())];
            row.extend(values.iter().map(|v| Cell::new(&format!("{:.4e}", v))));
            table.add_row(Row::new(row));
        }
        table.printstd();
        Ok(())
    }
}
