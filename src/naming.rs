//! Naming strategies: how a declared property maps to the set of names it
//! can be addressed by.
//!
//! A strategy is pure — the same `(property, group, field)` tuple always
//! produces the same names, with no dependence on registry state. The
//! registry applies [`NamingStrategy::lookup_key`] uniformly to every
//! candidate at registration time and to every name at lookup time, so the
//! strategy alone decides what counts as "the same name". Display forms
//! (canonical names, conflict reports) always keep the declared casing.

use std::fmt;

use crate::property::PropertyHandle;

/// The full set of candidate names one strategy generates for one property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyNames {
    canonical: String,
    aliases: Vec<String>,
}

impl PropertyNames {
    pub fn new(canonical: impl Into<String>, aliases: Vec<String>) -> Self {
        Self {
            canonical: canonical.into(),
            aliases,
        }
    }

    /// The single authoritative display name.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Alias display names, in declaration order.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Every candidate name in priority order: canonical first, then aliases
    /// in declaration order. Conflict detection walks this order.
    pub fn all(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.canonical.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

/// Maps a declared property to its candidate lookup names.
pub trait NamingStrategy: fmt::Debug + Send + Sync {
    /// Build candidate names for `property`, declared as `field_name` inside
    /// the group identified by `group_name`.
    ///
    /// The canonical name is `"{group_name}.{field_name}"`; every input alias
    /// is an additional candidate, verbatim.
    fn build_names(
        &self,
        property: &PropertyHandle,
        group_name: &str,
        field_name: &str,
    ) -> PropertyNames;

    /// Normalize a name for comparison.
    ///
    /// Registration and lookup both pass through this, so two names are the
    /// same name exactly when their lookup keys are equal.
    fn lookup_key(&self, name: &str) -> String;
}

fn candidate_names(
    property: &PropertyHandle,
    group_name: &str,
    field_name: &str,
) -> PropertyNames {
    PropertyNames::new(
        format!("{group_name}.{field_name}"),
        property.input_aliases().map(str::to_string).collect(),
    )
}

/// Case-insensitive naming, the default strategy.
///
/// Names compare case-insensitively; the declared casing is preserved for
/// display. `MyApp.Net.TIMEOUT` and `myapp.net.timeout` address the same
/// property — and collide if declared by different ones.
#[derive(Debug, Default, Clone, Copy)]
pub struct CaseInsensitiveNaming;

impl NamingStrategy for CaseInsensitiveNaming {
    fn build_names(
        &self,
        property: &PropertyHandle,
        group_name: &str,
        field_name: &str,
    ) -> PropertyNames {
        candidate_names(property, group_name, field_name)
    }

    fn lookup_key(&self, name: &str) -> String {
        name.to_lowercase()
    }
}

/// Exact-match naming: names are compared byte-for-byte, no case folding.
///
/// Two groups declaring the same alias string collide under this strategy
/// while near-misses (same alias, different case) do not, which makes
/// collisions deterministic to provoke and observe. Diagnostic/testing use.
#[derive(Debug, Default, Clone, Copy)]
pub struct AsIsAliasNaming;

impl NamingStrategy for AsIsAliasNaming {
    fn build_names(
        &self,
        property: &PropertyHandle,
        group_name: &str,
        field_name: &str,
    ) -> PropertyNames {
        candidate_names(property, group_name, field_name)
    }

    fn lookup_key(&self, name: &str) -> String {
        name.to_string()
    }
}
