//! Chemical-kinetics source terms for a 1-D downdraft gasifier bed: biomass
//! pyrolysis, char gasification and the homogeneous gas reactions, evaluated
//! per cell into mass- and heat-generation rate arrays for the surrounding
//! transport equations.

/// Three-stage source-term evaluator. Stage 1 produces the per-species
/// mass-generation rates, stage 2 the gas-phase heat release, stage 3 the
/// solid-phase heat release; stage 3 consumes the biomass consumption rate
/// of stage 1, so the stages of one update run in that order.
///
/// # Examples
/// ```
/// use GasifKin::Kinetics::gasifier_kinetics::Kinetics;
/// use GasifKin::reactor_state::{GasState, Params, SolidState};
/// let mut kin = Kinetics::new(Params::new(4, 2, 0.15)).unwrap();
/// let gas = GasState::uniform(4, 1e5, 750.0, 0.02, 0.1);
/// let solid = SolidState::uniform(4, 850.0, 0.3, 40.0, 12.0);
/// kin.update_state(&gas, &solid).unwrap();
/// // total gas generation equals the sum of the species rates
/// let total = &kin.Sh2 + &kin.Sch4 + &kin.Sco + &kin.Sco2 + &kin.Sh2o + &kin.St;
/// assert_eq!(kin.Sg, total);
/// ```
pub mod gasifier_kinetics;
mod gasifier_kinetics_tests;
/// Rate expressions and physical constants of the fixed reaction network;
/// pure elementwise functions shared by all three evaluator stages.
pub mod rate_laws;
