//! The closed set of load-time anomalies.
//!
//! Loaders never fail: every irregularity in the raw input — an unknown key,
//! a repeated assignment, a token that won't split, a value that won't
//! convert — becomes a [`Problem`] on the load result, and processing moves
//! on to the next token. Exhaustive collection is the point: the user should
//! see every configuration mistake in one pass, not just the first.

use crate::property::PropertyHandle;
use crate::value::ValueParseError;
use thiserror::Error;

/// A structured, non-fatal anomaly found while loading explicit values.
///
/// Each variant carries enough context to render one line of a startup
/// report; `Display` gives the report-ready text.
#[derive(Debug, Clone, Error)]
pub enum Problem {
    /// An input key that resolved to no registered name.
    #[error("unknown property '{raw_key}'")]
    UnknownProperty { raw_key: String },

    /// A property assigned more than once within one load call. The first
    /// assignment's value is kept; this records a rejected repeat.
    #[error("property '{canonical}' was assigned more than once; the first value is kept")]
    DuplicateProperty {
        property: PropertyHandle,
        canonical: String,
    },

    /// A raw token that could not be split into a key and a value.
    #[error("malformed token '{token}': {reason}")]
    Parsing { token: String, reason: String },

    /// A value that failed the property's type conversion. Business-rule
    /// violations are not problems — they belong to the downstream merger.
    #[error("invalid value '{raw_value}' for '{canonical}': {source}")]
    Value {
        property: PropertyHandle,
        canonical: String,
        raw_value: String,
        source: ValueParseError,
    },
}

impl Problem {
    /// The property this problem is about, when one was identified.
    /// `UnknownProperty` and `Parsing` have none by definition.
    pub fn property(&self) -> Option<&PropertyHandle> {
        match self {
            Self::DuplicateProperty { property, .. } | Self::Value { property, .. } => {
                Some(property)
            }
            Self::UnknownProperty { .. } | Self::Parsing { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::Property;

    #[test]
    fn unknown_property_display_names_the_key() {
        let problem = Problem::UnknownProperty {
            raw_key: "pkg.Group.XXX".into(),
        };
        assert_eq!(problem.to_string(), "unknown property 'pkg.Group.XXX'");
        assert!(problem.property().is_none());
    }

    #[test]
    fn duplicate_display_says_first_value_wins() {
        let p = Property::string().build();
        let problem = Problem::DuplicateProperty {
            property: p.clone(),
            canonical: "pkg.Group.STR_NULL".into(),
        };
        let msg = problem.to_string();
        assert!(msg.contains("pkg.Group.STR_NULL"));
        assert!(msg.contains("first value is kept"));
        assert!(problem.property().is_some());
    }

    #[test]
    fn value_problem_chains_the_parse_error() {
        let p = Property::flag().build();
        let problem = Problem::Value {
            property: p,
            canonical: "pkg.Group.FLAG_NULL".into(),
            raw_value: "maybe".into(),
            source: ValueParseError::InvalidFlag { raw: "maybe".into() },
        };
        let msg = problem.to_string();
        assert!(msg.contains("pkg.Group.FLAG_NULL"));
        assert!(msg.contains("maybe"));
        assert!(std::error::Error::source(&problem).is_some());
    }

    #[test]
    fn parsing_display_includes_token_and_reason() {
        let problem = Problem::Parsing {
            token: "no-delimiter-here".into(),
            reason: "missing '=' delimiter".into(),
        };
        let msg = problem.to_string();
        assert!(msg.contains("no-delimiter-here"));
        assert!(msg.contains("missing '='"));
    }
}
