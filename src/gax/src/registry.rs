// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Declares the shape of generated records.
//!
//! Every generated record type publishes a static [RecordShape]: its name,
//! its parent type (if any), and the fields it declares. The
//! [TypeRegistry] collects these shapes, resolves single inheritance by
//! flattening each type's fields with its ancestors' fields, and answers the
//! questions asked by the wire codec and the mask builder: what fields does a
//! type have, what is the type of a field, is one type a subtype of another.
//!
//! The registry is built once and is read-only afterwards.

use std::collections::{BTreeMap, HashSet};

/// The prefix shared by all the type names in the SoftLayer API.
pub const TYPE_PREFIX: &str = "SoftLayer_";

/// The semantic type of a field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldKind {
    Bool,
    /// A signed integer, such as an id.
    Integer,
    /// An unsigned integer, such as a count.
    Unsigned,
    /// An exact decimal, see [wkt::Decimal].
    Decimal,
    String,
    /// Binary data, base64 encoded on the wire.
    Bytes,
    /// An RFC 3339 timestamp.
    Timestamp,
    /// A nested record, referenced by its canonical type name.
    Record(&'static str),
    /// A closed union of record types.
    Polymorphic(&'static PolymorphicShape),
}

impl FieldKind {
    /// Only record and polymorphic fields can appear with children in a mask.
    pub fn is_relational(&self) -> bool {
        matches!(self, Self::Record(_) | Self::Polymorphic(_))
    }
}

/// Describes one field of a record type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldShape {
    /// The name of the field in the Rust type.
    pub name: &'static str,
    /// The name of the field on the wire and in object masks.
    pub wire_name: &'static str,
    pub kind: FieldKind,
    /// The field holds a sequence of `kind`.
    pub repeated: bool,
    pub deprecated: bool,
}

impl FieldShape {
    pub const fn new(name: &'static str, wire_name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            wire_name,
            kind,
            repeated: false,
            deprecated: false,
        }
    }

    pub const fn repeated(mut self) -> Self {
        self.repeated = true;
        self
    }

    pub const fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }
}

/// Describes a generated record type, as declared.
///
/// The `fields` only include the fields declared by this type, inherited
/// fields are resolved by the [TypeRegistry].
#[derive(Debug)]
pub struct RecordShape {
    pub name: &'static str,
    pub parent: Option<&'static str>,
    pub fields: &'static [FieldShape],
}

/// Describes a closed union of record types.
///
/// The concrete type of a value is named by a discriminator. By default the
/// discriminator is the `complexType` key embedded in the value. Some records
/// carry the discriminator in a sibling field instead, for example
/// `SoftLayer_Container_Search_Result` names the type of its `resource` in
/// `resourceType`.
#[derive(Debug, PartialEq)]
pub struct PolymorphicShape {
    pub name: &'static str,
    /// A sibling field holding the discriminator.
    pub hint: Option<&'static str>,
    /// The canonical names of the union members.
    pub variants: &'static [&'static str],
}

/// The key holding the discriminator embedded in polymorphic values.
pub const DISCRIMINATOR: &str = "complexType";

/// Implemented by all generated record types.
pub trait Record: serde::Serialize + serde::de::DeserializeOwned + Send + Sync + 'static {
    /// The static description of this type.
    fn shape() -> &'static RecordShape;

    /// The canonical name of this type, e.g. `SoftLayer_Virtual_Guest`.
    fn typename() -> &'static str {
        Self::shape().name
    }
}

/// Implemented by generated unions of record types.
pub trait Polymorphic: serde::Serialize + serde::de::DeserializeOwned + Send + Sync + 'static {
    fn shape() -> &'static PolymorphicShape;
}

/// Failures detected while building a [TypeRegistry].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum RegistryError {
    #[error("type {0} is registered more than once")]
    Duplicate(String),
    #[error("type {type_name} names an unregistered parent {parent}")]
    UnknownParent { type_name: String, parent: String },
    #[error("type {0} is its own ancestor")]
    Cycle(String),
    #[error("field {type_name}.{field} references an unregistered type {target}")]
    UnknownFieldType {
        type_name: String,
        field: String,
        target: String,
    },
}

/// A record type with its inherited fields resolved.
#[derive(Clone, Debug)]
pub struct RecordType {
    name: &'static str,
    parent: Option<&'static str>,
    fields: Vec<FieldShape>,
}

impl RecordType {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn parent(&self) -> Option<&'static str> {
        self.parent
    }

    /// All fields, inherited fields first.
    pub fn fields(&self) -> &[FieldShape] {
        &self.fields
    }

    /// Finds a field by its wire name.
    pub fn field(&self, wire_name: &str) -> Option<&FieldShape> {
        self.fields.iter().find(|f| f.wire_name == wire_name)
    }
}

/// The read-only table of record types.
///
/// # Example
/// ```
/// # use softlayer_gax::registry::*;
/// static LOCATION: RecordShape = RecordShape {
///     name: "SoftLayer_Location",
///     parent: None,
///     fields: &[
///         FieldShape::new("id", "id", FieldKind::Integer),
///         FieldShape::new("name", "name", FieldKind::String),
///     ],
/// };
/// let registry = TypeRegistry::builder().register(&LOCATION).build()?;
/// let ty = registry.get("Location").expect("lookup accepts short names");
/// assert_eq!(ty.name(), "SoftLayer_Location");
/// assert!(ty.field("name").is_some());
/// # Ok::<(), RegistryError>(())
/// ```
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: BTreeMap<&'static str, RecordType>,
}

impl TypeRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Finds a type by name.
    ///
    /// Accepts the canonical name (`SoftLayer_Hardware`) or the name without
    /// the API prefix (`Hardware`).
    pub fn get(&self, name: &str) -> Option<&RecordType> {
        if let Some(t) = self.types.get(name) {
            return Some(t);
        }
        if name.starts_with(TYPE_PREFIX) {
            return None;
        }
        self.types.get(format!("{TYPE_PREFIX}{name}").as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The canonical names of all registered types, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.types.keys().copied()
    }

    /// Returns true if `child` is `ancestor` or inherits from it.
    pub fn is_subtype(&self, child: &str, ancestor: &str) -> bool {
        let Some(ancestor) = self.get(ancestor).map(|t| t.name) else {
            return false;
        };
        let mut current = self.get(child);
        while let Some(t) = current {
            if t.name == ancestor {
                return true;
            }
            current = t.parent.and_then(|p| self.types.get(p));
        }
        false
    }

    /// Resolves the discriminator of a polymorphic value.
    ///
    /// Returns the member type named by `discriminator`, or `None` if the name
    /// is unregistered or outside the union. There is no fallback to a base
    /// type.
    pub fn resolve_variant(
        &self,
        union: &PolymorphicShape,
        discriminator: &str,
    ) -> Option<&RecordType> {
        let t = self.get(discriminator)?;
        union.variants.contains(&t.name).then_some(t)
    }
}

/// Collects [RecordShape]s and builds a [TypeRegistry].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    shapes: Vec<&'static RecordShape>,
}

impl RegistryBuilder {
    pub fn register(mut self, shape: &'static RecordShape) -> Self {
        self.shapes.push(shape);
        self
    }

    pub fn register_record<T: Record>(self) -> Self {
        self.register(T::shape())
    }

    /// Validates the shapes and flattens inherited fields.
    pub fn build(self) -> Result<TypeRegistry, RegistryError> {
        let mut declared = BTreeMap::new();
        for shape in self.shapes {
            if declared.insert(shape.name, shape).is_some() {
                return Err(RegistryError::Duplicate(shape.name.to_string()));
            }
        }
        let mut types = BTreeMap::new();
        for name in declared.keys() {
            let mut visiting = HashSet::new();
            flatten(name, &declared, &mut types, &mut visiting)?;
        }
        let registry = TypeRegistry { types };
        registry.validate_references()?;
        Ok(registry)
    }
}

fn flatten(
    name: &'static str,
    declared: &BTreeMap<&'static str, &'static RecordShape>,
    types: &mut BTreeMap<&'static str, RecordType>,
    visiting: &mut HashSet<&'static str>,
) -> Result<(), RegistryError> {
    if types.contains_key(name) {
        return Ok(());
    }
    if !visiting.insert(name) {
        return Err(RegistryError::Cycle(name.to_string()));
    }
    // `name` always comes from `declared` keys or a validated parent.
    let Some(shape) = declared.get(name) else {
        return Ok(());
    };
    let mut fields = Vec::new();
    if let Some(parent) = shape.parent {
        if !declared.contains_key(parent) {
            return Err(RegistryError::UnknownParent {
                type_name: name.to_string(),
                parent: parent.to_string(),
            });
        }
        flatten(parent, declared, types, visiting)?;
        if let Some(p) = types.get(parent) {
            fields.extend(p.fields.iter().copied());
        }
    }
    for field in shape.fields {
        match fields.iter_mut().find(|f| f.wire_name == field.wire_name) {
            Some(inherited) => *inherited = *field,
            None => fields.push(*field),
        }
    }
    types.insert(
        name,
        RecordType {
            name,
            parent: shape.parent,
            fields,
        },
    );
    Ok(())
}

impl TypeRegistry {
    fn validate_references(&self) -> Result<(), RegistryError> {
        for t in self.types.values() {
            for f in &t.fields {
                let targets: &[&str] = match &f.kind {
                    FieldKind::Record(target) => std::slice::from_ref(target),
                    FieldKind::Polymorphic(union) => union.variants,
                    _ => &[],
                };
                if let Some(missing) = targets.iter().find(|n| !self.types.contains_key(**n)) {
                    return Err(RegistryError::UnknownFieldType {
                        type_name: t.name.to_string(),
                        field: f.wire_name.to_string(),
                        target: missing.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    pub(crate) static RESOURCE: PolymorphicShape = PolymorphicShape {
        name: "SoftLayer_Resource",
        hint: Some("resourceType"),
        variants: &["SoftLayer_Hardware", "SoftLayer_Virtual_Guest"],
    };

    pub(crate) static ENTITY: RecordShape = RecordShape {
        name: "SoftLayer_Entity",
        parent: None,
        fields: &[],
    };
    pub(crate) static LOCATION: RecordShape = RecordShape {
        name: "SoftLayer_Location",
        parent: Some("SoftLayer_Entity"),
        fields: &[
            FieldShape::new("id", "id", FieldKind::Integer),
            FieldShape::new("name", "name", FieldKind::String),
            FieldShape::new("long_name", "longName", FieldKind::String),
        ],
    };
    pub(crate) static HARDWARE: RecordShape = RecordShape {
        name: "SoftLayer_Hardware",
        parent: Some("SoftLayer_Entity"),
        fields: &[
            FieldShape::new("id", "id", FieldKind::Integer),
            FieldShape::new("hostname", "hostname", FieldKind::String),
            FieldShape::new("datacenter", "datacenter", FieldKind::Record("SoftLayer_Location")),
        ],
    };
    pub(crate) static HARDWARE_SERVER: RecordShape = RecordShape {
        name: "SoftLayer_Hardware_Server",
        parent: Some("SoftLayer_Hardware"),
        fields: &[
            FieldShape::new("hostname", "hostname", FieldKind::String).deprecated(),
            FieldShape::new("memory_capacity", "memoryCapacity", FieldKind::Unsigned),
        ],
    };
    pub(crate) static VIRTUAL_GUEST: RecordShape = RecordShape {
        name: "SoftLayer_Virtual_Guest",
        parent: Some("SoftLayer_Entity"),
        fields: &[
            FieldShape::new("id", "id", FieldKind::Integer),
            FieldShape::new("hostname", "hostname", FieldKind::String),
            FieldShape::new("max_memory", "maxMemory", FieldKind::Unsigned),
            FieldShape::new("create_date", "createDate", FieldKind::Timestamp),
            FieldShape::new("recurring_fee", "recurringFee", FieldKind::Decimal),
            FieldShape::new("hourly_billing_flag", "hourlyBillingFlag", FieldKind::Bool),
            FieldShape::new("user_data", "userData", FieldKind::Bytes),
            FieldShape::new("datacenter", "datacenter", FieldKind::Record("SoftLayer_Location")),
            FieldShape::new("tags", "tags", FieldKind::String).repeated(),
        ],
    };
    pub(crate) static SEARCH_RESULT: RecordShape = RecordShape {
        name: "SoftLayer_Container_Search_Result",
        parent: None,
        fields: &[
            FieldShape::new("matched_terms", "matchedTerms", FieldKind::String).repeated(),
            FieldShape::new("resource", "resource", FieldKind::Polymorphic(&RESOURCE)),
            FieldShape::new("resource_type", "resourceType", FieldKind::String),
        ],
    };

    pub(crate) static CONTAINER_EXCEPTION: RecordShape = RecordShape {
        name: "SoftLayer_Container_Exception",
        parent: None,
        fields: &[
            FieldShape::new("exception_class", "exceptionClass", FieldKind::String),
            FieldShape::new("exception_message", "exceptionMessage", FieldKind::String),
        ],
    };

    /// A small registry shared by the tests in this crate.
    pub(crate) fn test_registry() -> TypeRegistry {
        TypeRegistry::builder()
            .register(&ENTITY)
            .register(&LOCATION)
            .register(&HARDWARE)
            .register(&HARDWARE_SERVER)
            .register(&VIRTUAL_GUEST)
            .register(&SEARCH_RESULT)
            .register(&CONTAINER_EXCEPTION)
            .build()
            .expect("test registry is valid")
    }

    #[test]
    fn lookup() {
        let registry = test_registry();
        let t = registry.get("SoftLayer_Hardware").unwrap();
        assert_eq!(t.name(), "SoftLayer_Hardware");
        let t = registry.get("Hardware").unwrap();
        assert_eq!(t.name(), "SoftLayer_Hardware");
        assert!(registry.get("SoftLayer_Nope").is_none());
        assert!(registry.get("Nope").is_none());
        assert!(registry.contains("Virtual_Guest"));
        assert_eq!(registry.names().count(), 7);
    }

    #[test]
    fn flatten_inherited_fields() {
        let registry = test_registry();
        let t = registry.get("SoftLayer_Hardware_Server").unwrap();
        let names = t.fields().iter().map(|f| f.wire_name).collect::<Vec<_>>();
        assert_eq!(names, vec!["id", "hostname", "datacenter", "memoryCapacity"]);
        // The override replaces the inherited field in place.
        assert!(t.field("hostname").unwrap().deprecated);
        assert_eq!(t.parent(), Some("SoftLayer_Hardware"));
    }

    #[test]
    fn subtypes() {
        let registry = test_registry();
        assert!(registry.is_subtype("SoftLayer_Hardware_Server", "SoftLayer_Hardware"));
        assert!(registry.is_subtype("Hardware_Server", "Entity"));
        assert!(registry.is_subtype("SoftLayer_Hardware", "SoftLayer_Hardware"));
        assert!(!registry.is_subtype("SoftLayer_Hardware", "SoftLayer_Hardware_Server"));
        assert!(!registry.is_subtype("SoftLayer_Virtual_Guest", "SoftLayer_Hardware"));
        assert!(!registry.is_subtype("Nope", "SoftLayer_Hardware"));
    }

    #[test]
    fn resolve_variant() {
        let registry = test_registry();
        let got = registry.resolve_variant(&RESOURCE, "Hardware").map(|t| t.name());
        assert_eq!(got, Some("SoftLayer_Hardware"));
        let got = registry.resolve_variant(&RESOURCE, "SoftLayer_Virtual_Guest").map(|t| t.name());
        assert_eq!(got, Some("SoftLayer_Virtual_Guest"));
        // Registered, but not a member of the union.
        assert!(registry.resolve_variant(&RESOURCE, "SoftLayer_Location").is_none());
        assert!(registry.resolve_variant(&RESOURCE, "Bogus_Type").is_none());
    }

    #[test]
    fn duplicate() {
        let got = TypeRegistry::builder()
            .register(&ENTITY)
            .register(&ENTITY)
            .build();
        assert!(matches!(got, Err(RegistryError::Duplicate(ref n)) if n == "SoftLayer_Entity"), "{got:?}");
    }

    #[test]
    fn unknown_parent() {
        let got = TypeRegistry::builder().register(&LOCATION).build();
        assert!(matches!(got, Err(RegistryError::UnknownParent { .. })), "{got:?}");
    }

    #[test]
    fn unknown_field_type() {
        let got = TypeRegistry::builder()
            .register(&ENTITY)
            .register(&HARDWARE)
            .build();
        assert!(
            matches!(got, Err(RegistryError::UnknownFieldType { ref target, .. }) if target == "SoftLayer_Location"),
            "{got:?}"
        );
    }

    #[test]
    fn cycle() {
        static A: RecordShape = RecordShape {
            name: "SoftLayer_A",
            parent: Some("SoftLayer_B"),
            fields: &[],
        };
        static B: RecordShape = RecordShape {
            name: "SoftLayer_B",
            parent: Some("SoftLayer_A"),
            fields: &[],
        };
        let got = TypeRegistry::builder().register(&A).register(&B).build();
        assert!(matches!(got, Err(RegistryError::Cycle(_))), "{got:?}");
    }
}
