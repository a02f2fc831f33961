//! Global configuration constants for the gravity derivative.

/// Default gravitational constant in N·m²/kg², used when the caller's scope
/// does not provide a usable value.
pub const DEFAULT_GRAVITATIONAL_CONSTANT: f64 = 6.67408313131313e-11;

/// Name under which the gravitational constant is looked up in a [`Scope`](crate::core::constant::Scope).
pub const GRAVITATIONAL_CONSTANT_NAME: &str = "G";

/// Number of values per body in a flat state slice: `[x, y, vx, vy, M]`.
pub const FLAT_STATE_STRIDE: usize = 5;
