//! Derivative evaluation for the first-order gravity system.

pub mod gravity;

pub use gravity::{BodyDerivative, Derivatives, ExecutionMode};
