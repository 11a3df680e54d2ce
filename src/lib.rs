//! Typed property registry and name resolution for application
//! configuration. Declare your configuration points once, register them, and
//! let loaders fill them in.
//!
//! Propfig is the core of a layered configuration system: a registry that
//! binds strongly-typed configuration points ("properties") to canonical and
//! alias names, and a loader contract that turns raw external input into
//! per-property explicit values — collecting every anomaly as data instead
//! of failing on the first one.
//!
//! ```
//! use propfig::{
//!     ArgumentLoader, CaseInsensitiveNaming, Loader, Property, PropertyGroup,
//!     PropertyRegistry, Value,
//! };
//!
//! // Declare properties and the group that owns them.
//! let verbose = Property::flag().default_value(false).build();
//! let endpoint = Property::string().alias_in("Endpoint").build();
//! let group = PropertyGroup::new("myapp.net.HttpParams")
//!     .with("VERBOSE", &verbose)
//!     .with("ENDPOINT", &endpoint);
//!
//! // Build the name index once, at startup.
//! let registry = PropertyRegistry::from_groups(CaseInsensitiveNaming, &[group])?;
//!
//! // Run a loader against it. Canonical names and aliases both resolve.
//! let loader = ArgumentLoader::new([
//!     "myapp.net.HttpParams.VERBOSE=true",
//!     "endpoint=https://example.org",
//! ]);
//! let result = loader.load(&registry);
//!
//! assert!(result.is_problem_free());
//! assert_eq!(result.explicit_value(&verbose), Some(&Value::Flag(true)));
//! # Ok::<(), propfig::ConstructionError>(())
//! ```
//!
//! # Why propfig
//!
//! Most applications resolve configuration by key strings all the way down:
//! sources produce string maps, and typos, duplicate assignments, and naming
//! collisions between modules surface late, one at a time, or never. Propfig
//! inverts that. The set of declared properties is the schema; every name in
//! every source either resolves to a declared property or is reported, and
//! every declaration either claims its names or the collision is recorded.
//! Nothing is stringly-typed past the registry boundary: application code
//! holds [`PropertyHandle`]s, and a handle — not a name — is what loaders
//! attach values and problems to.
//!
//! # Design: identity over equality
//!
//! A [`Property`] is a configuration *point*, not a value bag. Two
//! independently declared properties with identical settings are different
//! points, so identity is the allocation behind the handle ([`Arc`]
//! pointer equality), never structural comparison. This is what makes
//! bidirectional lookups ([`PropertyRegistry::canonical_name`] one way,
//! [`PropertyRegistry::property`] the other) unambiguous, and what makes
//! registering the same instance twice a detectable programmer error
//! ([`ConstructionError::DuplicateProperty`]) rather than a silent merge.
//!
//! [`Arc`]: std::sync::Arc
//!
//! # Names and collisions
//!
//! A [`NamingStrategy`] expands each declaration into its candidate names:
//! the canonical `"{group}.{field}"` plus every declared alias. Two
//! strategies ship:
//!
//! - [`CaseInsensitiveNaming`] (the default) — names compare
//!   case-insensitively, declared casing is preserved for display.
//! - [`AsIsAliasNaming`] — byte-exact comparison; makes collisions
//!   deterministic to provoke, which is what you want when diagnosing them.
//!
//! Name collisions between independently-authored groups are a configuration
//! authoring mistake, not a programming one — so they don't fail
//! registration. The losing property is left unregistered (atomically: all
//! of its names or none), a [`NamingConflict`] records both sides, and
//! registration continues. The startup layer decides whether conflicts are
//! fatal, with the complete list in hand.
//!
//! # Loaders never fail
//!
//! A [`Loader`] consumes one source shape — [`ArgumentLoader`] reads
//! `name=value` tokens, [`FixedValueLoader`] reads in-code pairs — and
//! produces a [`LoaderValues`]: explicit values plus [`Problem`]s, both in
//! encounter order. The contract is strict about what a loader does *not*
//! do:
//!
//! - No required-value checks. One loader can't know a value is missing;
//!   only the merger, after every loader has run, can.
//! - No business-rule validation. Rules ([`Property::validate`]) run
//!   downstream once a final value is chosen; loaders only perform type
//!   conversion.
//! - No short-circuiting. A malformed token, unknown key, duplicate
//!   assignment, or unconvertible value becomes a [`Problem`] and the next
//!   token proceeds, so users see all of their mistakes in one pass.
//!
//! Within one load, the first assignment to a property wins; repeats are
//! reported, never overwritten. An empty value (`"name="`) supplies nothing
//! at all — the property falls back to its default downstream — and is not a
//! problem.
//!
//! # Where the rest of the system sits
//!
//! ```text
//! declarations ──▶ PropertyRegistry ──▶ Loader₁ … Loaderₙ ──▶ merger (downstream)
//!                  name index,           LoaderValues per       override order,
//!                  NamingConflicts       loader: values +       required checks,
//!                                        Problems               rule validation
//! ```
//!
//! The merger, environment/file loaders, and the bootstrap façade that hands
//! validated values to application code are deliberately out of this crate;
//! they consume the types defined here. The registry is built once and
//! read-only afterward — every lookup takes `&self`, so loaders can share it
//! across threads without locking.
//!
//! # Error handling
//!
//! Three tiers, by who made the mistake:
//!
//! - [`ConstructionError`] — programmer error (duplicate instance
//!   registration). Fatal, returned as `Err` immediately.
//! - [`NamingConflict`] — configuration authoring error. Collected on the
//!   registry, reportable via `Display`.
//! - [`Problem`] — end-user input error. Collected per load call,
//!   reportable via `Display`.

pub mod error;

mod args;
mod fixed;
mod group;
mod loader;
mod naming;
mod problem;
mod property;
mod registry;
mod value;

#[cfg(test)]
mod fixtures;

pub use args::{ArgumentLoader, KVP_DELIMITER};
pub use error::ConstructionError;
pub use fixed::FixedValueLoader;
pub use group::{GroupMember, PropertyGroup};
pub use loader::{ExplicitValue, Loader, LoaderValues};
pub use naming::{AsIsAliasNaming, CaseInsensitiveNaming, NamingStrategy, PropertyNames};
pub use problem::Problem;
pub use property::{
    FlagBuilder, IntBuilder, Property, PropertyHandle, StrBuilder, ValidationRule, Violation,
};
pub use registry::{NamingConflict, PropertyRegistry};
pub use value::{PropertyKind, Value, ValueParseError};
