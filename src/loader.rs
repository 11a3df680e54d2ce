//! The loader contract and its result envelope.
//!
//! A [`Loader`] reads one external source shape — argument tokens, fixed
//! pairs, whatever an implementation chooses — resolves names through the
//! [`PropertyRegistry`], performs *type* conversion only, and collects every
//! anomaly as a [`Problem`] instead of failing. What a loader never does:
//! check required-value rules (a single loader cannot know a value is
//! missing — only the merger, after all loaders ran, can) or run
//! business-rule validation (that waits until a final value is chosen).

use tracing::debug;

use crate::problem::Problem;
use crate::property::{property_id, PropertyHandle};
use crate::registry::PropertyRegistry;
use crate::value::Value;

/// One explicit value found by a loader.
#[derive(Debug, Clone)]
pub struct ExplicitValue {
    property: PropertyHandle,
    value: Value,
}

impl ExplicitValue {
    pub fn property(&self) -> &PropertyHandle {
        &self.property
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// The result of one load pass: explicit values and problems, in the order
/// they were encountered in the input.
///
/// A property appears at most once in the value sequence per load — repeats
/// become [`Problem::DuplicateProperty`], never overwrites. The mutators are
/// public so external [`Loader`] implementations can assemble results.
#[derive(Debug, Clone, Default)]
pub struct LoaderValues {
    values: Vec<ExplicitValue>,
    problems: Vec<Problem>,
}

impl LoaderValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an explicit value for `property`.
    ///
    /// Callers are expected to have checked [`contains`](Self::contains)
    /// first; recording is append-only and preserves encounter order.
    pub fn push_value(&mut self, property: &PropertyHandle, value: Value) {
        self.values.push(ExplicitValue {
            property: property.clone(),
            value,
        });
    }

    pub fn push_problem(&mut self, problem: Problem) {
        self.problems.push(problem);
    }

    /// Whether `property` already has an explicit value in this result.
    pub fn contains(&self, property: &PropertyHandle) -> bool {
        let id = property_id(property);
        self.values.iter().any(|ev| property_id(&ev.property) == id)
    }

    /// The explicit value loaded for `property`, if any.
    pub fn explicit_value(&self, property: &PropertyHandle) -> Option<&Value> {
        let id = property_id(property);
        self.values
            .iter()
            .find(|ev| property_id(&ev.property) == id)
            .map(|ev| &ev.value)
    }

    /// The explicit value for `property`, falling back to its declared
    /// default. `None` means neither exists.
    pub fn value<'a>(&'a self, property: &'a PropertyHandle) -> Option<&'a Value> {
        self.explicit_value(property)
            .or_else(|| property.default_value())
    }

    /// All explicit values, in encounter order.
    pub fn values(&self) -> &[ExplicitValue] {
        &self.values
    }

    /// All problems, in encounter order.
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    pub fn is_problem_free(&self) -> bool {
        self.problems.is_empty()
    }
}

/// A source of explicit property values.
///
/// Implementations are read-only over the registry and produce a fresh
/// [`LoaderValues`] per call, so any number of loaders may run against the
/// same registry, in any order or concurrently. Precedence between loaders is
/// the downstream merger's business, not theirs.
pub trait Loader {
    /// Load explicit values from this loader's source against `registry`.
    /// Never fails: anomalies are collected as problems on the result.
    fn load(&self, registry: &PropertyRegistry) -> LoaderValues;

    /// Human-readable description of the source, for startup reports
    /// (e.g. `"string key=value pairs from command-line arguments"`).
    fn description(&self) -> String;
}

/// Resolve one raw key/value pair against the registry and record the
/// outcome on `out`. The shared path for every key-value shaped loader.
///
/// `token` is the original input fragment, used verbatim in parsing
/// problems. Keys and values are trimmed; an empty trimmed value means "no
/// explicit value supplied" — the property falls back to its default
/// downstream, and the pair participates in neither duplicate detection nor
/// conversion.
pub(crate) fn load_key_value(
    registry: &PropertyRegistry,
    out: &mut LoaderValues,
    token: &str,
    raw_key: &str,
    raw_value: &str,
) {
    let key = raw_key.trim();
    if key.is_empty() {
        out.push_problem(Problem::Parsing {
            token: token.to_string(),
            reason: "empty key".into(),
        });
        return;
    }

    let Some(property) = registry.property(key) else {
        out.push_problem(Problem::UnknownProperty {
            raw_key: key.to_string(),
        });
        return;
    };
    let property = property.clone();
    let canonical = registry
        .canonical_name(&property)
        .unwrap_or(key)
        .to_string();

    let value = raw_value.trim();
    if value.is_empty() {
        return;
    }

    if out.contains(&property) {
        out.push_problem(Problem::DuplicateProperty {
            property: property.clone(),
            canonical,
        });
        return;
    }

    match property.parse_value(value) {
        Ok(parsed) => out.push_value(&property, parsed),
        Err(source) => out.push_problem(Problem::Value {
            property: property.clone(),
            canonical,
            raw_value: value.to_string(),
            source,
        }),
    }
}

/// One `debug!` per load pass keeps the hot path quiet while still leaving
/// a trace of what each source contributed.
pub(crate) fn log_load_complete(description: &str, result: &LoaderValues) {
    debug!(
        source = description,
        values = result.values().len(),
        problems = result.problems().len(),
        "load pass complete"
    );
}
