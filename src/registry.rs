//! The central property index.
//!
//! [`PropertyRegistry`] binds every declared property to its canonical and
//! alias names, detects collisions between independently-authored groups, and
//! answers bidirectional lookups during loading. It is built once at startup
//! and read-only afterward — every lookup takes `&self`, so loaders may share
//! it freely across threads.
//!
//! Collisions are not failures. A property whose name is already taken is
//! left unregistered, a [`NamingConflict`] is recorded, and registration
//! continues with the remaining declarations, so a startup report can show
//! the user every collision in one pass.

use std::collections::{HashMap, HashSet};
use std::fmt;

use tracing::debug;

use crate::error::ConstructionError;
use crate::group::PropertyGroup;
use crate::naming::NamingStrategy;
use crate::property::{property_id, PropertyHandle};

/// A rejected registration: two distinct properties generated the same
/// lookup name.
///
/// Records both sides so a report can show which declaration won. The losing
/// property has no names in the registry at all —
/// [`PropertyRegistry::canonical_name`] returns `None` for it.
#[derive(Debug, Clone)]
pub struct NamingConflict {
    new_property: PropertyHandle,
    new_canonical: String,
    conflict_name: String,
    existing_property: PropertyHandle,
    existing_canonical: String,
}

impl NamingConflict {
    /// The property that was rejected.
    pub fn new_property(&self) -> &PropertyHandle {
        &self.new_property
    }

    /// The canonical name the rejected property attempted to claim.
    pub fn new_canonical(&self) -> &str {
        &self.new_canonical
    }

    /// The specific candidate name that collided (canonical or alias),
    /// in its declared casing.
    pub fn conflict_name(&self) -> &str {
        &self.conflict_name
    }

    /// The previously-registered property that owns the name.
    pub fn existing_property(&self) -> &PropertyHandle {
        &self.existing_property
    }

    /// The canonical name of the previously-registered property.
    pub fn existing_canonical(&self) -> &str {
        &self.existing_canonical
    }
}

impl fmt::Display for NamingConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name '{}' of property '{}' collides with property '{}'; '{}' is unreachable",
            self.conflict_name, self.new_canonical, self.existing_canonical, self.new_canonical
        )
    }
}

/// The central index of declared properties.
///
/// Owns the `name → property` map (unique, first registrant wins), the
/// reverse `property → canonical name` and `property → group` mappings, and
/// the ordered group/property/conflict listings. All candidate names pass
/// through the configured [`NamingStrategy`], both at registration and at
/// lookup.
#[derive(Debug)]
pub struct PropertyRegistry {
    strategy: Box<dyn NamingStrategy>,
    /// lookup key → property, for every registered candidate name.
    names: HashMap<String, PropertyHandle>,
    /// property identity → canonical display name.
    canonical: HashMap<usize, String>,
    /// property identity → owning group name.
    owner: HashMap<usize, String>,
    /// Conflict-free properties, registration order.
    properties: Vec<PropertyHandle>,
    /// Group names, first-successful-registration order.
    groups: Vec<String>,
    members: HashMap<String, Vec<PropertyHandle>>,
    /// Every property instance ever submitted, including rejected ones.
    seen: HashSet<usize>,
    conflicts: Vec<NamingConflict>,
}

impl PropertyRegistry {
    /// Create an empty registry using `strategy` for name generation and
    /// comparison.
    pub fn new(strategy: impl NamingStrategy + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
            names: HashMap::new(),
            canonical: HashMap::new(),
            owner: HashMap::new(),
            properties: Vec::new(),
            groups: Vec::new(),
            members: HashMap::new(),
            seen: HashSet::new(),
            conflicts: Vec::new(),
        }
    }

    /// Build a registry from a full set of declaration groups, in order.
    ///
    /// # Errors
    ///
    /// Fails on the first [`ConstructionError`] — a programmer error such as
    /// registering one property instance twice. Naming collisions do not
    /// fail; they are collected on the returned registry.
    pub fn from_groups(
        strategy: impl NamingStrategy + 'static,
        groups: &[PropertyGroup],
    ) -> Result<Self, ConstructionError> {
        let mut registry = Self::new(strategy);
        for group in groups {
            registry.add_group(group)?;
        }
        Ok(registry)
    }

    /// Register every member of `group`, in declaration order.
    pub fn add_group(&mut self, group: &PropertyGroup) -> Result<(), ConstructionError> {
        for member in group.members() {
            self.add_property(group.name(), member.field_name(), member.property())?;
        }
        Ok(())
    }

    /// Register one property declared as `field_name` under `group_name`.
    ///
    /// Candidate names come from the naming strategy: canonical first, then
    /// aliases in declaration order. Registration is atomic per property —
    /// on the first candidate already owned by a different property, a
    /// [`NamingConflict`] is recorded, *none* of this property's names are
    /// installed, and the call still returns `Ok`. Partial registration would
    /// leave a property reachable by some of its names only, which is worse
    /// than unreachable.
    ///
    /// # Errors
    ///
    /// Submitting the same property instance twice (under any group or field
    /// name, and whether or not the first submission was rejected by a
    /// conflict) is a programmer error and fails with
    /// [`ConstructionError::DuplicateProperty`].
    pub fn add_property(
        &mut self,
        group_name: &str,
        field_name: &str,
        property: &PropertyHandle,
    ) -> Result<(), ConstructionError> {
        let names = self.strategy.build_names(property, group_name, field_name);
        let id = property_id(property);

        if !self.seen.insert(id) {
            return Err(ConstructionError::DuplicateProperty {
                canonical: names.canonical().to_string(),
                group: group_name.to_string(),
            });
        }

        // Atomic per property: find the first colliding candidate before
        // touching the name map.
        for candidate in names.all() {
            let key = self.strategy.lookup_key(candidate);
            if let Some(existing) = self.names.get(&key) {
                let conflict = NamingConflict {
                    new_property: property.clone(),
                    new_canonical: names.canonical().to_string(),
                    conflict_name: candidate.to_string(),
                    existing_property: existing.clone(),
                    existing_canonical: self
                        .canonical
                        .get(&property_id(existing))
                        .cloned()
                        .unwrap_or_default(),
                };
                debug!(
                    candidate,
                    new = names.canonical(),
                    existing = conflict.existing_canonical.as_str(),
                    "naming conflict; property left unregistered"
                );
                self.conflicts.push(conflict);
                return Ok(());
            }
        }

        for candidate in names.all() {
            let key = self.strategy.lookup_key(candidate);
            self.names.insert(key, property.clone());
        }
        self.canonical.insert(id, names.canonical().to_string());
        self.owner.insert(id, group_name.to_string());
        self.properties.push(property.clone());
        match self.members.get_mut(group_name) {
            Some(points) => points.push(property.clone()),
            None => {
                self.groups.push(group_name.to_string());
                self.members
                    .insert(group_name.to_string(), vec![property.clone()]);
            }
        }
        Ok(())
    }

    /// Look up a property by any of its registered names (canonical or
    /// alias), normalized per the naming strategy. `None` means the name is
    /// unknown — not an error.
    pub fn property(&self, name: &str) -> Option<&PropertyHandle> {
        self.names.get(&self.strategy.lookup_key(name))
    }

    /// The canonical name of a registered property.
    ///
    /// `None` for properties this registry has never seen *and* for
    /// properties that lost a naming conflict — a conflicted property is
    /// unreachable by name.
    pub fn canonical_name(&self, property: &PropertyHandle) -> Option<&str> {
        self.canonical
            .get(&property_id(property))
            .map(String::as_str)
    }

    /// The group that declared a registered property.
    pub fn group_of(&self, property: &PropertyHandle) -> Option<&str> {
        self.owner.get(&property_id(property)).map(String::as_str)
    }

    /// All conflict-free properties, in registration order.
    pub fn properties(&self) -> &[PropertyHandle] {
        &self.properties
    }

    /// The properties registered under one group, in registration order.
    /// Empty for groups this registry has never seen.
    pub fn properties_for_group(&self, group_name: &str) -> &[PropertyHandle] {
        self.members
            .get(group_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Group names, in first-successful-registration order.
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// The conflicts recorded during registration, in the order encountered.
    pub fn naming_conflicts(&self) -> &[NamingConflict] {
        &self.conflicts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::{AsIsAliasNaming, CaseInsensitiveNaming};
    use crate::property::Property;
    use std::sync::Arc;

    const GROUP: &str = "pkg.Group";
    const DUP_GROUP: &str = "pkg.GroupDuplicate";

    fn aliased_pair() -> (PropertyHandle, PropertyHandle) {
        let kvp_bob = Property::string()
            .alias_in("String_Bob")
            .default_value("bob")
            .build();
        let flag_false = Property::flag()
            .alias_in("Flag_False")
            .default_value(false)
            .build();
        (kvp_bob, flag_false)
    }

    #[test]
    fn happy_path_lookups_are_bidirectional() {
        let (kvp_bob, flag_false) = aliased_pair();
        let mut registry = PropertyRegistry::new(CaseInsensitiveNaming);
        registry.add_property(GROUP, "KVP_BOB", &kvp_bob).unwrap();
        registry
            .add_property(GROUP, "FLAG_FALSE", &flag_false)
            .unwrap();

        assert_eq!(registry.canonical_name(&kvp_bob), Some("pkg.Group.KVP_BOB"));
        assert_eq!(
            registry.canonical_name(&flag_false),
            Some("pkg.Group.FLAG_FALSE")
        );

        // canonical and alias both resolve to the same instance
        assert!(Arc::ptr_eq(
            registry.property("pkg.Group.KVP_BOB").unwrap(),
            &kvp_bob
        ));
        assert!(Arc::ptr_eq(registry.property("String_Bob").unwrap(), &kvp_bob));
        assert!(Arc::ptr_eq(
            registry.property("Flag_False").unwrap(),
            &flag_false
        ));

        assert_eq!(registry.groups(), [GROUP.to_string()]);
        assert_eq!(registry.properties().len(), 2);
        assert!(Arc::ptr_eq(&registry.properties()[0], &kvp_bob));
        assert!(Arc::ptr_eq(&registry.properties()[1], &flag_false));

        let points = registry.properties_for_group(GROUP);
        assert_eq!(points.len(), 2);
        assert_eq!(registry.group_of(&kvp_bob), Some(GROUP));

        // a random group that was never registered
        assert!(registry.properties_for_group("pkg.Other").is_empty());
    }

    #[test]
    fn lookup_is_case_insensitive_by_default() {
        let (kvp_bob, _) = aliased_pair();
        let mut registry = PropertyRegistry::new(CaseInsensitiveNaming);
        registry.add_property(GROUP, "KVP_BOB", &kvp_bob).unwrap();

        assert!(registry.property("PKG.GROUP.kvp_bob").is_some());
        assert!(registry.property("string_bob").is_some());
    }

    #[test]
    fn unknown_name_is_none_not_an_error() {
        let registry = PropertyRegistry::new(CaseInsensitiveNaming);
        assert!(registry.property("pkg.Group.MISSING").is_none());
    }

    #[test]
    fn registering_the_same_instance_twice_is_fatal() {
        let (kvp_bob, _) = aliased_pair();
        let mut registry = PropertyRegistry::new(CaseInsensitiveNaming);
        registry.add_property(GROUP, "KVP_BOB", &kvp_bob).unwrap();

        let err = registry
            .add_property("pkg.Other", "KVP_BOB", &kvp_bob)
            .unwrap_err();
        assert!(matches!(err, ConstructionError::DuplicateProperty { .. }));
    }

    #[test]
    fn colliding_alias_records_one_conflict_and_rejects_the_newcomer() {
        let (kvp_bob, flag_false) = aliased_pair();
        // same alias string as flag_false, declared by an unrelated group
        let dup_flag_false = Property::flag().alias_in("Flag_False").build();
        let dup_flag_true = Property::flag().alias_in("Flag_True").build();

        let mut registry = PropertyRegistry::new(AsIsAliasNaming);
        registry.add_property(GROUP, "KVP_BOB", &kvp_bob).unwrap();
        registry
            .add_property(GROUP, "FLAG_FALSE", &flag_false)
            .unwrap();
        registry
            .add_property(DUP_GROUP, "FLAG_FALSE", &dup_flag_false)
            .unwrap();
        // a non-colliding property registers as normal afterward
        registry
            .add_property(DUP_GROUP, "FLAG_TRUE", &dup_flag_true)
            .unwrap();

        let conflicts = registry.naming_conflicts();
        assert_eq!(conflicts.len(), 1);
        let conflict = &conflicts[0];
        assert!(Arc::ptr_eq(conflict.new_property(), &dup_flag_false));
        assert_eq!(conflict.new_canonical(), "pkg.GroupDuplicate.FLAG_FALSE");
        assert_eq!(conflict.conflict_name(), "Flag_False");
        assert!(Arc::ptr_eq(conflict.existing_property(), &flag_false));
        assert_eq!(conflict.existing_canonical(), "pkg.Group.FLAG_FALSE");

        // the loser is unreachable, the winner fully reachable
        assert_eq!(registry.canonical_name(&dup_flag_false), None);
        assert!(registry.property("pkg.GroupDuplicate.FLAG_FALSE").is_none());
        assert!(Arc::ptr_eq(registry.property("Flag_False").unwrap(), &flag_false));

        // the rest of the registry is unaffected
        assert_eq!(
            registry.canonical_name(&dup_flag_true),
            Some("pkg.GroupDuplicate.FLAG_TRUE")
        );
        assert_eq!(
            registry.groups(),
            [GROUP.to_string(), DUP_GROUP.to_string()]
        );
        assert_eq!(registry.properties().len(), 3);
        assert_eq!(registry.properties_for_group(GROUP).len(), 2);
        assert_eq!(registry.properties_for_group(DUP_GROUP).len(), 1);
    }

    #[test]
    fn conflict_is_atomic_even_when_the_canonical_name_is_free() {
        let first = Property::string().build();
        // canonical pkg.GroupDuplicate.OTHER is unclaimed, but the alias
        // collides with first's canonical name — nothing registers.
        let second = Property::string().alias_in("pkg.Group.FIRST").build();

        let mut registry = PropertyRegistry::new(AsIsAliasNaming);
        registry.add_property(GROUP, "FIRST", &first).unwrap();
        registry.add_property(DUP_GROUP, "OTHER", &second).unwrap();

        assert_eq!(registry.naming_conflicts().len(), 1);
        assert_eq!(registry.canonical_name(&second), None);
        assert!(registry.property("pkg.GroupDuplicate.OTHER").is_none());
    }

    #[test]
    fn case_only_difference_conflicts_only_under_case_folding() {
        let a = Property::flag().alias_in("Shared_Flag").build();
        let b = Property::flag().alias_in("SHARED_FLAG").build();

        let mut folded = PropertyRegistry::new(CaseInsensitiveNaming);
        folded.add_property(GROUP, "A", &a).unwrap();
        folded.add_property(DUP_GROUP, "B", &b).unwrap();
        assert_eq!(folded.naming_conflicts().len(), 1);

        let a = Property::flag().alias_in("Shared_Flag").build();
        let b = Property::flag().alias_in("SHARED_FLAG").build();
        let mut exact = PropertyRegistry::new(AsIsAliasNaming);
        exact.add_property(GROUP, "A", &a).unwrap();
        exact.add_property(DUP_GROUP, "B", &b).unwrap();
        assert!(exact.naming_conflicts().is_empty());
        assert!(exact.property("Shared_Flag").is_some());
        assert!(exact.property("SHARED_FLAG").is_some());
    }

    #[test]
    fn group_with_only_conflicted_members_never_appears() {
        let first = Property::flag().alias_in("F").build();
        let loser = Property::flag().alias_in("F").build();

        let mut registry = PropertyRegistry::new(AsIsAliasNaming);
        registry.add_property(GROUP, "FIRST", &first).unwrap();
        registry.add_property(DUP_GROUP, "LOSER", &loser).unwrap();

        assert_eq!(registry.groups(), [GROUP.to_string()]);
        assert!(registry.properties_for_group(DUP_GROUP).is_empty());
    }

    #[test]
    fn from_groups_registers_in_declaration_order() {
        let (kvp_bob, flag_false) = aliased_pair();
        let group = PropertyGroup::new(GROUP)
            .with("KVP_BOB", &kvp_bob)
            .with("FLAG_FALSE", &flag_false);

        let registry = PropertyRegistry::from_groups(CaseInsensitiveNaming, &[group]).unwrap();
        assert_eq!(registry.properties().len(), 2);
        assert!(Arc::ptr_eq(&registry.properties()[0], &kvp_bob));
        assert_eq!(registry.canonical_name(&kvp_bob), Some("pkg.Group.KVP_BOB"));
    }

    #[test]
    fn conflict_display_names_both_sides() {
        let first = Property::flag().alias_in("F").build();
        let loser = Property::flag().alias_in("F").build();
        let mut registry = PropertyRegistry::new(AsIsAliasNaming);
        registry.add_property(GROUP, "FIRST", &first).unwrap();
        registry.add_property(DUP_GROUP, "LOSER", &loser).unwrap();

        let msg = registry.naming_conflicts()[0].to_string();
        assert!(msg.contains("'F'"));
        assert!(msg.contains("pkg.Group.FIRST"));
        assert!(msg.contains("pkg.GroupDuplicate.LOSER"));
    }
}
