//! Command-line argument loader — the reference [`Loader`] implementation.
//!
//! Takes raw tokens (anything iterable, so tests pass synthetic data instead
//! of `std::env::args()`), splits each on the first [`KVP_DELIMITER`], and
//! resolves the pair against the registry. There is no escaping mechanism:
//! the first delimiter occurrence always splits the token, so values may
//! contain `=` but keys may not.

use crate::loader::{load_key_value, log_load_complete, Loader, LoaderValues};
use crate::problem::Problem;
use crate::registry::PropertyRegistry;

/// Delimiter between a name and its value within one argument token.
pub const KVP_DELIMITER: &str = "=";

/// Loads explicit values from `name=value` argument tokens.
///
/// ```
/// use propfig::{ArgumentLoader, CaseInsensitiveNaming, Loader, Property, PropertyGroup,
///               PropertyRegistry, Value};
///
/// let timeout = Property::integer().default_value(30).build();
/// let group = PropertyGroup::new("myapp.net.HttpParams").with("TIMEOUT", &timeout);
/// let registry = PropertyRegistry::from_groups(CaseInsensitiveNaming, &[group]).unwrap();
///
/// let loader = ArgumentLoader::new(["myapp.net.HttpParams.TIMEOUT=5"]);
/// let result = loader.load(&registry);
/// assert!(result.is_problem_free());
/// assert_eq!(result.explicit_value(&timeout), Some(&Value::Int(5)));
/// ```
#[derive(Debug, Clone)]
pub struct ArgumentLoader {
    args: Vec<String>,
}

impl ArgumentLoader {
    /// Create a loader over raw argument tokens, e.g.
    /// `ArgumentLoader::new(std::env::args().skip(1))`.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl Loader for ArgumentLoader {
    fn load(&self, registry: &PropertyRegistry) -> LoaderValues {
        let mut out = LoaderValues::new();
        for token in &self.args {
            match token.split_once(KVP_DELIMITER) {
                Some((raw_key, raw_value)) => {
                    load_key_value(registry, &mut out, token, raw_key, raw_value);
                }
                None => out.push_problem(Problem::Parsing {
                    token: token.clone(),
                    reason: format!("missing '{KVP_DELIMITER}' delimiter"),
                }),
            }
        }
        log_load_complete(&self.description(), &out);
        out
    }

    fn description(&self) -> String {
        "string key=value pairs from command-line arguments".into()
    }
}
