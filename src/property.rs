//! Typed configuration points.
//!
//! A [`Property`] is declared once by application code — typically as part of
//! a [`PropertyGroup`](crate::PropertyGroup) — and never mutated afterward.
//! Its identity is the allocation, not its contents: two independently
//! declared properties with identical settings are distinct configuration
//! points, which is why the whole crate passes properties around as
//! [`PropertyHandle`]s and compares them by pointer.

use std::fmt;
use std::sync::Arc;

use crate::value::{parse_as, PropertyKind, Value, ValueParseError};

/// Shared handle to a declared property.
///
/// Equality of contents is meaningless for properties; the registry and
/// loaders identify a property by the allocation behind its handle
/// (`Arc::ptr_eq`). Cloning a handle is cheap and preserves identity.
pub type PropertyHandle = Arc<Property>;

/// Stable identity token for a property, usable as a map key.
pub(crate) fn property_id(property: &PropertyHandle) -> usize {
    Arc::as_ptr(property) as usize
}

/// An immutable, typed configuration point.
///
/// Construction goes through the per-kind builders returned by
/// [`Property::string`], [`Property::flag`] and [`Property::integer`], which
/// make a mismatched default or rule unrepresentable.
#[derive(Debug)]
pub struct Property {
    kind: PropertyKind,
    default: Option<Value>,
    aliases_in: Vec<String>,
    aliases_in_and_out: Vec<String>,
    rules: Vec<ValidationRule>,
}

impl Property {
    /// Start declaring a string property.
    pub fn string() -> StrBuilder {
        StrBuilder::default()
    }

    /// Start declaring a boolean flag property.
    pub fn flag() -> FlagBuilder {
        FlagBuilder::default()
    }

    /// Start declaring an integer property.
    pub fn integer() -> IntBuilder {
        IntBuilder::default()
    }

    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// The compiled-in default, if one was declared.
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Aliases recognized as input names only, in declaration order.
    pub fn aliases_in(&self) -> &[String] {
        &self.aliases_in
    }

    /// Aliases recognized both as input names and as output/display names,
    /// in declaration order.
    pub fn aliases_in_and_out(&self) -> &[String] {
        &self.aliases_in_and_out
    }

    /// Every alias usable as an input name: in-only aliases first, then
    /// in-and-out aliases, each in declaration order.
    pub fn input_aliases(&self) -> impl Iterator<Item = &str> {
        self.aliases_in
            .iter()
            .chain(self.aliases_in_and_out.iter())
            .map(String::as_str)
    }

    /// Convert a raw source string into this property's typed value.
    ///
    /// This is the only conversion loaders perform — business-rule
    /// validation is deferred to the downstream merger via [`validate`].
    ///
    /// [`validate`]: Property::validate
    pub fn parse_value(&self, raw: &str) -> Result<Value, ValueParseError> {
        parse_as(self.kind, raw)
    }

    /// Check an explicit value against this property's rules.
    ///
    /// Returns one [`Violation`] per failed rule, in rule declaration order.
    /// An empty result means the value is valid. Never called by loaders.
    pub fn validate(&self, value: &Value) -> Vec<Violation> {
        self.rules
            .iter()
            .filter(|rule| !rule.holds_for(value))
            .map(|rule| Violation {
                rule: rule.clone(),
                value: value.clone(),
            })
            .collect()
    }

    /// The declared rules, in declaration order.
    pub fn rules(&self) -> &[ValidationRule] {
        &self.rules
    }
}

/// A business rule checked against an explicit value.
///
/// Rules are evaluated by the downstream merger once a final value has been
/// chosen, never by loaders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationRule {
    /// String value must end with the given suffix.
    EndsWith(String),
    /// String value must start with the given prefix.
    StartsWith(String),
    /// Integer value must be strictly greater than the bound.
    GreaterThan(i64),
    /// Integer value must be strictly less than the bound.
    LessThan(i64),
}

impl ValidationRule {
    /// A rule applied to a value of the wrong kind cannot hold.
    fn holds_for(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::EndsWith(suffix), Value::Str(s)) => s.ends_with(suffix),
            (Self::StartsWith(prefix), Value::Str(s)) => s.starts_with(prefix),
            (Self::GreaterThan(bound), Value::Int(i)) => i > bound,
            (Self::LessThan(bound), Value::Int(i)) => i < bound,
            _ => false,
        }
    }
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndsWith(suffix) => write!(f, "must end with '{suffix}'"),
            Self::StartsWith(prefix) => write!(f, "must start with '{prefix}'"),
            Self::GreaterThan(bound) => write!(f, "must be greater than {bound}"),
            Self::LessThan(bound) => write!(f, "must be less than {bound}"),
        }
    }
}

/// One failed rule for one explicit value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    rule: ValidationRule,
    value: Value,
}

impl Violation {
    pub fn rule(&self) -> &ValidationRule {
        &self.rule
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value '{}' {}", self.value, self.rule)
    }
}

/// Builder for string properties.
#[derive(Debug, Default)]
pub struct StrBuilder {
    default: Option<String>,
    aliases_in: Vec<String>,
    aliases_in_and_out: Vec<String>,
    rules: Vec<ValidationRule>,
}

impl StrBuilder {
    /// Set the compiled-in default.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Add an alias usable as an input name only.
    pub fn alias_in(mut self, name: impl Into<String>) -> Self {
        self.aliases_in.push(name.into());
        self
    }

    /// Add an alias usable as both an input name and an output/display name.
    pub fn alias_in_and_out(mut self, name: impl Into<String>) -> Self {
        self.aliases_in_and_out.push(name.into());
        self
    }

    /// Require explicit values to end with `suffix`.
    pub fn must_end_with(mut self, suffix: impl Into<String>) -> Self {
        self.rules.push(ValidationRule::EndsWith(suffix.into()));
        self
    }

    /// Require explicit values to start with `prefix`.
    pub fn must_start_with(mut self, prefix: impl Into<String>) -> Self {
        self.rules.push(ValidationRule::StartsWith(prefix.into()));
        self
    }

    pub fn build(self) -> PropertyHandle {
        Arc::new(Property {
            kind: PropertyKind::Str,
            default: self.default.map(Value::Str),
            aliases_in: self.aliases_in,
            aliases_in_and_out: self.aliases_in_and_out,
            rules: self.rules,
        })
    }
}

/// Builder for boolean flag properties.
#[derive(Debug, Default)]
pub struct FlagBuilder {
    default: Option<bool>,
    aliases_in: Vec<String>,
    aliases_in_and_out: Vec<String>,
}

impl FlagBuilder {
    /// Set the compiled-in default.
    pub fn default_value(mut self, value: bool) -> Self {
        self.default = Some(value);
        self
    }

    /// Add an alias usable as an input name only.
    pub fn alias_in(mut self, name: impl Into<String>) -> Self {
        self.aliases_in.push(name.into());
        self
    }

    /// Add an alias usable as both an input name and an output/display name.
    pub fn alias_in_and_out(mut self, name: impl Into<String>) -> Self {
        self.aliases_in_and_out.push(name.into());
        self
    }

    pub fn build(self) -> PropertyHandle {
        Arc::new(Property {
            kind: PropertyKind::Flag,
            default: self.default.map(Value::Flag),
            aliases_in: self.aliases_in,
            aliases_in_and_out: self.aliases_in_and_out,
            rules: Vec::new(),
        })
    }
}

/// Builder for integer properties.
#[derive(Debug, Default)]
pub struct IntBuilder {
    default: Option<i64>,
    aliases_in: Vec<String>,
    aliases_in_and_out: Vec<String>,
    rules: Vec<ValidationRule>,
}

impl IntBuilder {
    /// Set the compiled-in default.
    pub fn default_value(mut self, value: i64) -> Self {
        self.default = Some(value);
        self
    }

    /// Add an alias usable as an input name only.
    pub fn alias_in(mut self, name: impl Into<String>) -> Self {
        self.aliases_in.push(name.into());
        self
    }

    /// Add an alias usable as both an input name and an output/display name.
    pub fn alias_in_and_out(mut self, name: impl Into<String>) -> Self {
        self.aliases_in_and_out.push(name.into());
        self
    }

    /// Require explicit values to be strictly greater than `bound`.
    pub fn must_be_greater_than(mut self, bound: i64) -> Self {
        self.rules.push(ValidationRule::GreaterThan(bound));
        self
    }

    /// Require explicit values to be strictly less than `bound`.
    pub fn must_be_less_than(mut self, bound: i64) -> Self {
        self.rules.push(ValidationRule::LessThan(bound));
        self
    }

    pub fn build(self) -> PropertyHandle {
        Arc::new(Property {
            kind: PropertyKind::Int,
            default: self.default.map(Value::Int),
            aliases_in: self.aliases_in,
            aliases_in_and_out: self.aliases_in_and_out,
            rules: self.rules,
        })
    }
}
