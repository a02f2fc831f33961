//! Core data types: bodies and the gravitational constant.

pub mod body;
pub mod constant;

pub use body::{bodies_from_flat, Body, BodyRecord};
pub use constant::{ConstantResolution, ConstantWarning, GravitationalConstant, Scope, ScopeValue};
