//! Gravity RK – first-order N-body gravity derivatives.
//!
//! This crate evaluates the right-hand side of the planar N-body problem
//! written as a first-order ODE system, for use by an external Runge-Kutta
//! (or any other) integrator. Each call reads the current bodies and returns
//! `(dv_x, dv_y, vx, vy)` for every body; stepping and state ownership stay
//! with the caller.
//!
//! ```
//! use gravity_rk::{gravity_first_order, Body, GravitationalConstant};
//!
//! let bodies = [Body::at_rest(1.0, 0.0, 0.0), Body::at_rest(1.0, 1.0, 0.0)];
//! let (dv_x, dv_y, vx, vy) = gravity_first_order(&bodies, GravitationalConstant::UNIT).into_tuple();
//! assert_eq!(dv_x, vec![1.0, -1.0]);
//! assert_eq!(dv_y, vec![0.0, 0.0]);
//! assert_eq!((vx, vy), (vec![0.0, 0.0], vec![0.0, 0.0]));
//! ```

pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod scenarios;
pub mod utils;

pub use glam::DVec2;

pub use crate::core::{
    body::{bodies_from_flat, Body, BodyRecord},
    constant::{ConstantResolution, ConstantWarning, GravitationalConstant, Scope, ScopeValue},
};
pub use dynamics::gravity::{
    gravity_first_order, gravity_first_order_flat, gravity_first_order_in_scope,
    gravity_first_order_records, gravity_first_order_with, BodyDerivative, Derivatives,
    ExecutionMode,
};
pub use error::{GravityError, Result};
pub use scenarios::Scenario;
