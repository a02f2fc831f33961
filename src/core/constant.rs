//! Gravitational constant and the caller scope it is resolved from.
//!
//! Resolution happens once per derivative evaluation. A missing or unusable
//! value never fails the call: the default constant is substituted and a
//! single [`ConstantWarning`] is logged and handed back to the caller.

use std::collections::HashMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{DEFAULT_GRAVITATIONAL_CONSTANT, GRAVITATIONAL_CONSTANT_NAME};

/// Finite proportionality constant of Newtonian gravity.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct GravitationalConstant(f64);

impl GravitationalConstant {
    /// Physical value in SI units.
    pub const DEFAULT: Self = Self(DEFAULT_GRAVITATIONAL_CONSTANT);

    /// G = 1, for normalized unit systems.
    pub const UNIT: Self = Self(1.0);

    /// Returns `None` for NaN or infinite values.
    pub fn new(value: f64) -> Option<Self> {
        value.is_finite().then_some(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Resolves the constant from an optional scope entry.
    ///
    /// Falls back to [`GravitationalConstant::DEFAULT`] when the entry is
    /// absent or cannot be read as a finite number, logging one warning.
    pub fn resolve(entry: Option<&ScopeValue>) -> ConstantResolution {
        let resolution = match entry {
            None => ConstantResolution::fallback(ConstantWarning::Missing),
            Some(value) => match value.as_f64().and_then(Self::new) {
                Some(constant) => ConstantResolution {
                    constant,
                    warning: None,
                },
                None => ConstantResolution::fallback(ConstantWarning::Invalid(value.to_string())),
            },
        };

        match &resolution.warning {
            Some(warning) => warn!("{warning}"),
            None => debug!(
                "resolved {GRAVITATIONAL_CONSTANT_NAME} = {}",
                resolution.constant.0
            ),
        }

        resolution
    }
}

impl Default for GravitationalConstant {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for GravitationalConstant {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("gravitational constant must be finite, got {value}"))
    }
}

impl From<GravitationalConstant> for f64 {
    fn from(constant: GravitationalConstant) -> Self {
        constant.0
    }
}

/// Non-fatal diagnostic raised when the default constant had to be used.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConstantWarning {
    #[error(
        "`{name}` not found in scope, using default {default:e}",
        name = GRAVITATIONAL_CONSTANT_NAME,
        default = DEFAULT_GRAVITATIONAL_CONSTANT
    )]
    Missing,

    #[error(
        "`{name}` = {0} is not a finite number, using default {default:e}",
        name = GRAVITATIONAL_CONSTANT_NAME,
        default = DEFAULT_GRAVITATIONAL_CONSTANT
    )]
    Invalid(String),
}

/// Outcome of a constant lookup: the value to use and whether it was a fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantResolution {
    pub constant: GravitationalConstant,
    pub warning: Option<ConstantWarning>,
}

impl ConstantResolution {
    fn fallback(warning: ConstantWarning) -> Self {
        Self {
            constant: GravitationalConstant::DEFAULT,
            warning: Some(warning),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.warning.is_some()
    }
}

/// A named value in a caller [`Scope`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScopeValue {
    Number(f64),
    Flag(bool),
    Text(String),
}

impl ScopeValue {
    /// Numeric reading of the value. Text is parsed, flags are not numbers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
            Self::Flag(_) => None,
        }
    }
}

impl std::fmt::Display for ScopeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::Text(text) => write!(f, "{text:?}"),
        }
    }
}

impl From<f64> for ScopeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for ScopeValue {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<&str> for ScopeValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for ScopeValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Caller-supplied configuration the gravitational constant is read from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scope {
    values: HashMap<String, ScopeValue>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ScopeValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ScopeValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<ScopeValue> {
        self.values.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&ScopeValue> {
        self.values.get(name)
    }

    /// Resolves `G` from this scope.
    pub fn gravitational_constant(&self) -> ConstantResolution {
        GravitationalConstant::resolve(self.get(GRAVITATIONAL_CONSTANT_NAME))
    }
}
