#[allow(non_snake_case)]
pub mod Kinetics;
#[allow(non_snake_case)]
pub mod Utils;
pub mod errors;
#[allow(non_snake_case)]
pub mod reactor_state;
