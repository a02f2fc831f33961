use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::config::FLAT_STATE_STRIDE;
use crate::error::{GravityError, Result};

/// A point mass in the plane.
///
/// Bodies are owned by the caller and only read by the derivative; the
/// integrator builds a fresh set for every stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub vx: f64,
    #[serde(default)]
    pub vy: f64,
    /// Mass. Not validated: zero or negative mass yields degenerate output.
    #[serde(rename = "M")]
    pub m: f64,
}

impl Body {
    /// Creates a body from mass, position and velocity.
    pub fn new(m: f64, x: f64, y: f64, vx: f64, vy: f64) -> Self {
        Self { x, y, vx, vy, m }
    }

    /// Creates a body with zero velocity.
    pub fn at_rest(m: f64, x: f64, y: f64) -> Self {
        Self::new(m, x, y, 0.0, 0.0)
    }

    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn velocity(&self) -> DVec2 {
        DVec2::new(self.vx, self.vy)
    }

    /// Euclidean distance between the two bodies' positions.
    pub fn distance(&self, other: &Body) -> f64 {
        (other.position() - self.position()).length()
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "M: {:>8} ({:12.9}, {:12.9}) v_x: {:10.8}, v_y: {:10.8}",
            self.m, self.x, self.y, self.vx, self.vy
        )
    }
}

/// Body data as received from an external source where any field may be
/// absent. Convert with [`BodyRecord::into_body`] before evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyRecord {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub vx: Option<f64>,
    pub vy: Option<f64>,
    #[serde(rename = "M")]
    pub m: Option<f64>,
}

impl BodyRecord {
    /// Resolves every field, failing on the first one that is absent.
    ///
    /// `index` is the record's position in its sequence and is only used to
    /// label the error.
    pub fn into_body(self, index: usize) -> Result<Body> {
        let require = |value: Option<f64>, field: &'static str| {
            value.ok_or(GravityError::MissingAttribute { index, field })
        };

        Ok(Body {
            x: require(self.x, "x")?,
            y: require(self.y, "y")?,
            vx: require(self.vx, "vx")?,
            vy: require(self.vy, "vy")?,
            m: require(self.m, "M")?,
        })
    }
}

impl From<Body> for BodyRecord {
    fn from(body: Body) -> Self {
        Self {
            x: Some(body.x),
            y: Some(body.y),
            vx: Some(body.vx),
            vy: Some(body.vy),
            m: Some(body.m),
        }
    }
}

/// Splits a flat `[x, y, vx, vy, M, x, y, ...]` state into bodies.
pub fn bodies_from_flat(state: &[f64]) -> Result<Vec<Body>> {
    if state.len() % FLAT_STATE_STRIDE != 0 {
        return Err(GravityError::invalid_argument(
            format!("a flat state of [x, y, vx, vy, M] per body (length divisible by {FLAT_STATE_STRIDE})"),
            format!("length {}", state.len()),
        ));
    }

    Ok(state
        .chunks_exact(FLAT_STATE_STRIDE)
        .map(|chunk| Body {
            x: chunk[0],
            y: chunk[1],
            vx: chunk[2],
            vy: chunk[3],
            m: chunk[4],
        })
        .collect())
}
