//! The value vocabulary: what a property can hold and how raw source
//! strings become typed values.
//!
//! Conversion is kind-directed, not heuristic — every property declares its
//! [`PropertyKind`], and loaders convert through
//! [`Property::parse_value`](crate::Property::parse_value), which dispatches
//! here.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The type of a configuration property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    /// Free-form string.
    Str,
    /// Boolean flag. Accepts case-insensitive `true` / `false`.
    Flag,
    /// Signed 64-bit integer.
    Int,
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str => write!(f, "string"),
            Self::Flag => write!(f, "flag"),
            Self::Int => write!(f, "integer"),
        }
    }
}

/// A typed configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Str(String),
    Flag(bool),
    Int(i64),
}

impl Value {
    /// The kind this value belongs to.
    pub fn kind(&self) -> PropertyKind {
        match self {
            Self::Str(_) => PropertyKind::Str,
            Self::Flag(_) => PropertyKind::Flag,
            Self::Int(_) => PropertyKind::Int,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s}"),
            Self::Flag(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

/// Why a raw source string could not be converted to a typed value.
///
/// This is pure type conversion failure — business-rule violations are a
/// separate, deferred concern (see [`Violation`](crate::Violation)).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueParseError {
    #[error("'{raw}' is not a valid flag value (expected true or false)")]
    InvalidFlag { raw: String },

    #[error("'{raw}' is not a valid integer")]
    InvalidInt { raw: String },
}

/// Convert a raw string into a value of the given kind.
pub(crate) fn parse_as(kind: PropertyKind, raw: &str) -> Result<Value, ValueParseError> {
    match kind {
        PropertyKind::Str => Ok(Value::Str(raw.to_string())),
        PropertyKind::Flag => {
            if raw.eq_ignore_ascii_case("true") {
                Ok(Value::Flag(true))
            } else if raw.eq_ignore_ascii_case("false") {
                Ok(Value::Flag(false))
            } else {
                Err(ValueParseError::InvalidFlag {
                    raw: raw.to_string(),
                })
            }
        }
        PropertyKind::Int => raw
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| ValueParseError::InvalidInt {
                raw: raw.to_string(),
            }),
    }
}
