//! Preset initial conditions.

use crate::core::{body::Body, constant::GravitationalConstant};

/// Initial bodies together with the constant they are meant to be run with.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: &'static str,
    pub bodies: Vec<Body>,
    pub g: GravitationalConstant,
    /// Orbital period, for periodic configurations.
    pub period: Option<f64>,
}

/// Chenciner & Montgomery (2000) figure-eight orbit of three equal masses.
///
/// Only periodic with G = 1.
pub fn figure_eight() -> Scenario {
    Scenario {
        name: "figure-eight",
        bodies: vec![
            Body::new(1.0, -0.97000436, 0.24208753, 0.4662036850, 0.4323657300),
            Body::new(1.0, 0.0, 0.0, -0.933240737, -0.86473146),
            Body::new(1.0, 0.97000436, -0.24208753, 0.4662036850, 0.4323657300),
        ],
        g: GravitationalConstant::UNIT,
        period: Some(6.32591398),
    }
}

/// Earth at the origin with the Moon at mean distance (km) moving along -x.
pub fn earth_moon() -> Scenario {
    const EARTH_MASS: f64 = 5.972e24;
    const MOON_MASS: f64 = 7.34767309e22;
    const EARTH_MOON_DISTANCE: f64 = 384400.0;

    Scenario {
        name: "earth-moon",
        bodies: vec![
            Body::at_rest(EARTH_MASS, 0.0, 0.0),
            Body::new(MOON_MASS, 0.0, EARTH_MOON_DISTANCE, -31410.0, 0.0),
        ],
        g: GravitationalConstant::DEFAULT,
        period: None,
    }
}
