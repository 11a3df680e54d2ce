//! Declaration groups.
//!
//! A [`PropertyGroup`] is the unit of declaration: a named, ordered
//! collection of properties. The name is the stable identity of the declaring
//! module (by convention a dotted path like `"myapp.net.HttpParams"`) and
//! prefixes the canonical name of every member. Groups are assembled once at
//! startup and handed to the registry; nothing reads them afterward.

use crate::property::PropertyHandle;

/// One `(field name, property)` declaration inside a group.
#[derive(Debug, Clone)]
pub struct GroupMember {
    field_name: String,
    property: PropertyHandle,
}

impl GroupMember {
    /// The declared field name, as stated by the application.
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn property(&self) -> &PropertyHandle {
        &self.property
    }
}

/// A named, ordered collection of declared properties.
///
/// ```
/// use propfig::{Property, PropertyGroup};
///
/// let timeout = Property::integer().default_value(30).build();
/// let group = PropertyGroup::new("myapp.net.HttpParams").with("TIMEOUT", &timeout);
/// assert_eq!(group.members().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct PropertyGroup {
    name: String,
    members: Vec<GroupMember>,
}

impl PropertyGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Append a member. Declaration order is preserved all the way through
    /// the registry's global and per-group listings.
    pub fn with(mut self, field_name: impl Into<String>, property: &PropertyHandle) -> Self {
        self.members.push(GroupMember {
            field_name: field_name.into(),
            property: property.clone(),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[GroupMember] {
        &self.members
    }
}
