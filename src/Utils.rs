/// Terminal logging bootstrap built on simplelog, for drivers that want the
/// per-stage log lines of the kinetics evaluator on screen.
pub mod logger;
