//! Right-hand side of the first-order N-body gravity system.
//!
//! For bodies `i = 0..N` the derivative is
//!
//! ```text
//! dv_i/dt = sum over j != i of -G * M_j * (p_i - p_j) / |p_j - p_i|^3
//! dp_i/dt = v_i
//! ```
//!
//! evaluated by exact pairwise summation. There is no softening, so two
//! bodies at the same position produce non-finite accelerations; detecting
//! that is left to the integrator.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::{
    core::{
        body::{bodies_from_flat, Body, BodyRecord},
        constant::{ConstantResolution, GravitationalConstant, Scope},
    },
    error::Result,
    utils::logging::ScopedTimer,
};

/// How the outer loop over bodies is executed.
///
/// Both modes sum contributions for a body in ascending index order, so they
/// produce bit-identical results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutionMode {
    #[default]
    Serial,
    /// Distributes bodies across the rayon pool. Runs serially when the
    /// `parallel` feature is disabled.
    Parallel,
}

/// Derivative of every body's state, as four parallel sequences in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Derivatives {
    pub dv_x: Vec<f64>,
    pub dv_y: Vec<f64>,
    pub vx: Vec<f64>,
    pub vy: Vec<f64>,
}

/// Derivative of a single body's state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyDerivative {
    pub dv_x: f64,
    pub dv_y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl BodyDerivative {
    pub fn acceleration(&self) -> DVec2 {
        DVec2::new(self.dv_x, self.dv_y)
    }

    pub fn velocity(&self) -> DVec2 {
        DVec2::new(self.vx, self.vy)
    }
}

impl Derivatives {
    pub fn len(&self) -> usize {
        self.dv_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dv_x.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<BodyDerivative> {
        Some(BodyDerivative {
            dv_x: *self.dv_x.get(index)?,
            dv_y: *self.dv_y.get(index)?,
            vx: *self.vx.get(index)?,
            vy: *self.vy.get(index)?,
        })
    }

    /// Per-body view over the sequences.
    pub fn iter(&self) -> impl Iterator<Item = BodyDerivative> + '_ {
        (0..self.len()).filter_map(move |index| self.get(index))
    }

    /// `(dv_x, dv_y, vx, vy)`.
    pub fn into_tuple(self) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.dv_x, self.dv_y, self.vx, self.vy)
    }

    fn assemble(bodies: &[Body], accelerations: Vec<DVec2>) -> Self {
        let (dv_x, dv_y) = accelerations.iter().map(|a| (a.x, a.y)).unzip();
        let (vx, vy) = bodies.iter().map(|b| (b.vx, b.vy)).unzip();
        Self { dv_x, dv_y, vx, vy }
    }
}

impl From<Derivatives> for (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
    fn from(derivatives: Derivatives) -> Self {
        derivatives.into_tuple()
    }
}

/// Evaluates the gravity derivative serially.
pub fn gravity_first_order(bodies: &[Body], g: GravitationalConstant) -> Derivatives {
    gravity_first_order_with(bodies, g, ExecutionMode::default())
}

/// Evaluates the gravity derivative with the given execution mode.
pub fn gravity_first_order_with(
    bodies: &[Body],
    g: GravitationalConstant,
    mode: ExecutionMode,
) -> Derivatives {
    let _timer = ScopedTimer::new("gravity_first_order", bodies.len());
    let g = g.value();

    let accelerations = match mode {
        ExecutionMode::Serial => serial_accelerations(bodies, g),
        ExecutionMode::Parallel => parallel_accelerations(bodies, g),
    };

    Derivatives::assemble(bodies, accelerations)
}

/// Evaluates the derivative of a flat `[x, y, vx, vy, M, ...]` state.
///
/// Fails with [`GravityError::InvalidArgument`](crate::GravityError::InvalidArgument)
/// when the slice does not hold a whole number of bodies.
pub fn gravity_first_order_flat(state: &[f64], g: GravitationalConstant) -> Result<Derivatives> {
    let bodies = bodies_from_flat(state)?;
    Ok(gravity_first_order(&bodies, g))
}

/// Evaluates the derivative of externally supplied records.
///
/// Every record is validated before any summation starts; the first missing
/// field aborts the call.
pub fn gravity_first_order_records(
    records: &[BodyRecord],
    g: GravitationalConstant,
) -> Result<Derivatives> {
    let bodies = records
        .iter()
        .enumerate()
        .map(|(index, record)| record.into_body(index))
        .collect::<Result<Vec<_>>>()?;
    Ok(gravity_first_order(&bodies, g))
}

/// Resolves `G` from `scope` once, then evaluates the derivative.
///
/// The resolution is returned so callers can observe a fallback to the
/// default constant.
pub fn gravity_first_order_in_scope(
    bodies: &[Body],
    scope: &Scope,
) -> (Derivatives, ConstantResolution) {
    let resolution = scope.gravitational_constant();
    let derivatives = gravity_first_order(bodies, resolution.constant);
    (derivatives, resolution)
}

/// Acceleration of body `i` from every other body, summed in index order.
fn acceleration_on(bodies: &[Body], i: usize, g: f64) -> DVec2 {
    let p_i = bodies[i].position();
    bodies
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .fold(DVec2::ZERO, |acc, (_, other)| {
            let rdiff = p_i - other.position();
            let r = rdiff.length();
            acc + (-g * other.m) * rdiff / (r * r * r)
        })
}

fn serial_accelerations(bodies: &[Body], g: f64) -> Vec<DVec2> {
    (0..bodies.len())
        .map(|i| acceleration_on(bodies, i, g))
        .collect()
}

#[cfg(feature = "parallel")]
fn parallel_accelerations(bodies: &[Body], g: f64) -> Vec<DVec2> {
    use rayon::prelude::*;

    (0..bodies.len())
        .into_par_iter()
        .map(|i| acceleration_on(bodies, i, g))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn parallel_accelerations(bodies: &[Body], g: f64) -> Vec<DVec2> {
    serial_accelerations(bodies, g)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lone_body_has_zero_acceleration() {
        let bodies = [Body::new(5.0, 1.0, 2.0, 3.0, 4.0)];
        let d = gravity_first_order(&bodies, GravitationalConstant::UNIT);
        assert_eq!(d.dv_x, vec![0.0]);
        assert_eq!(d.dv_y, vec![0.0]);
        assert_eq!(d.vx, vec![3.0]);
        assert_eq!(d.vy, vec![4.0]);
    }

    #[test]
    fn acceleration_points_toward_the_other_body() {
        let bodies = [Body::at_rest(1.0, 0.0, 0.0), Body::at_rest(4.0, 0.0, 2.0)];
        let d = gravity_first_order(&bodies, GravitationalConstant::UNIT);
        // G * M / r^2 = 4 / 4 toward +y for the first body.
        assert_eq!(d.dv_y[0], 1.0);
        assert_eq!(d.dv_y[1], -0.25);
        assert_eq!(d.dv_x, vec![0.0, 0.0]);
    }

    #[test]
    fn per_body_view_matches_sequences() {
        let bodies = [
            Body::new(1.0, 0.0, 0.0, 0.5, -0.5),
            Body::new(2.0, 1.0, 1.0, -1.0, 1.0),
        ];
        let d = gravity_first_order(&bodies, GravitationalConstant::UNIT);
        let view: Vec<_> = d.iter().collect();
        assert_eq!(view.len(), 2);
        for (i, item) in view.iter().enumerate() {
            assert_eq!(item.dv_x, d.dv_x[i]);
            assert_eq!(item.dv_y, d.dv_y[i]);
            assert_eq!(item.velocity(), bodies[i].velocity());
        }
        assert!(d.get(2).is_none());
    }
}
