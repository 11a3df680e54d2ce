//! Fixed-value loader: explicit values supplied directly in code.
//!
//! Runs the same name resolution and type conversion as any other loader,
//! just without a wire format to parse. Typical uses: pinning values in tests
//! and wiring hard-coded overrides ahead of (or behind) other loaders in the
//! merge order.

use crate::args::KVP_DELIMITER;
use crate::loader::{load_key_value, log_load_complete, Loader, LoaderValues};
use crate::registry::PropertyRegistry;

/// Loads explicit values from in-code `(name, raw value)` pairs.
///
/// Names resolve exactly like argument keys (canonical or alias, normalized
/// per the registry's naming strategy); values go through the property's type
/// conversion. Since pairs arrive pre-split, the only possible parsing
/// problem is an empty name.
#[derive(Debug, Clone)]
pub struct FixedValueLoader {
    pairs: Vec<(String, String)>,
}

impl FixedValueLoader {
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Loader for FixedValueLoader {
    fn load(&self, registry: &PropertyRegistry) -> LoaderValues {
        let mut out = LoaderValues::new();
        for (name, value) in &self.pairs {
            let token = format!("{name}{KVP_DELIMITER}{value}");
            load_key_value(registry, &mut out, &token, name, value);
        }
        log_load_complete(&self.description(), &out);
        out
    }

    fn description(&self) -> String {
        "fixed name/value pairs set in code".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{registry, SimpleParams, GROUP_PATH};
    use crate::problem::Problem;
    use crate::value::Value;

    fn name(field: &str) -> String {
        format!("{GROUP_PATH}.{field}")
    }

    #[test]
    fn pairs_load_like_tokens() {
        let params = SimpleParams::declare();
        let registry = registry(&params);

        let loader = FixedValueLoader::new([
            (name("STR_BOB"), "test".to_string()),
            (name("FLAG_NULL"), "true".to_string()),
        ]);
        let result = loader.load(&registry);

        assert!(result.is_problem_free());
        assert_eq!(
            result.explicit_value(&params.str_bob),
            Some(&Value::Str("test".into()))
        );
        assert_eq!(
            result.explicit_value(&params.flag_null),
            Some(&Value::Flag(true))
        );
    }

    #[test]
    fn matches_the_argument_loader_on_equivalent_input() {
        use crate::args::ArgumentLoader;

        let params = SimpleParams::declare();
        let registry = registry(&params);

        let fixed = FixedValueLoader::new([
            (name("STR_NULL"), "1".to_string()),
            (name("STR_NULL"), "2".to_string()),
            (name("FLAG_NULL"), "maybe".to_string()),
            ("nobody".to_string(), "x".to_string()),
        ])
        .load(&registry);
        let args = ArgumentLoader::new([
            format!("{}=1", name("STR_NULL")),
            format!("{}=2", name("STR_NULL")),
            format!("{}=maybe", name("FLAG_NULL")),
            "nobody=x".to_string(),
        ])
        .load(&registry);

        assert_eq!(fixed.values().len(), args.values().len());
        assert_eq!(fixed.problems().len(), args.problems().len());
        assert_eq!(
            fixed.explicit_value(&params.str_null),
            args.explicit_value(&params.str_null)
        );
    }

    #[test]
    fn unknown_names_and_duplicates_become_problems() {
        let params = SimpleParams::declare();
        let registry = registry(&params);

        let loader = FixedValueLoader::new([
            ("who.is.this".to_string(), "1".to_string()),
            (name("INT_NULL"), "1".to_string()),
            (name("INT_NULL"), "2".to_string()),
        ]);
        let result = loader.load(&registry);

        assert_eq!(result.problems().len(), 2);
        assert!(matches!(
            result.problems()[0],
            Problem::UnknownProperty { .. }
        ));
        assert!(matches!(
            result.problems()[1],
            Problem::DuplicateProperty { .. }
        ));
        assert_eq!(result.explicit_value(&params.int_null), Some(&Value::Int(1)));
    }

    #[test]
    fn empty_name_is_a_parsing_problem() {
        let params = SimpleParams::declare();
        let registry = registry(&params);

        let result =
            FixedValueLoader::new([("".to_string(), "v".to_string())]).load(&registry);
        assert_eq!(result.problems().len(), 1);
        assert!(matches!(result.problems()[0], Problem::Parsing { .. }));
    }

    #[test]
    fn empty_value_supplies_nothing() {
        let params = SimpleParams::declare();
        let registry = registry(&params);

        let result =
            FixedValueLoader::new([(name("STR_BOB"), "".to_string())]).load(&registry);
        assert!(result.is_problem_free());
        assert!(result.values().is_empty());
    }
}
