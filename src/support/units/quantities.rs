use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P1, P2, Z0},
};

/// Molar enthalpy, J/mol in SI.
pub type MolarEnthalpy = Quantity<ISQ<P2, P1, N2, Z0, Z0, N1, Z0>, SI<f64>, f64>;

/// Molar entropy, J/mol·K in SI.
pub type MolarEntropy = Quantity<ISQ<P2, P1, N2, Z0, N1, N1, Z0>, SI<f64>, f64>;

/// Rate of change of pressure with temperature, Pa/K in SI.
///
/// The slope of a saturation curve, `dPsat/dT`.
pub type PressureTemperatureSlope = Quantity<ISQ<N1, P1, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;
