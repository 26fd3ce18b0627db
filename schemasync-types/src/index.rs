use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Field names declared for (or referenced by) one type.
pub type FieldSet = BTreeSet<String>;

/// Normalized mapping from type name to the set of its field names.
///
/// Both sides of a consistency check are reduced to this shape. The map is
/// sorted, so iteration order is stable across runs. A `FieldIndex` has no
/// mutators; build one with [`FieldIndexBuilder`] or `FromIterator`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldIndex {
    types: BTreeMap<String, FieldSet>,
}

impl FieldIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn contains_type(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    pub fn fields(&self, type_name: &str) -> Option<&FieldSet> {
        self.types.get(type_name)
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSet)> {
        self.types.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Total number of field names across all types.
    pub fn field_count(&self) -> usize {
        self.types.values().map(BTreeSet::len).sum()
    }
}

impl<T, I, F> FromIterator<(T, I)> for FieldIndex
where
    T: Into<String>,
    I: IntoIterator<Item = F>,
    F: Into<String>,
{
    /// Repeated type names union their fields.
    fn from_iter<It: IntoIterator<Item = (T, I)>>(iter: It) -> Self {
        let mut builder = FieldIndexBuilder::new();
        for (type_name, fields) in iter {
            builder.extend_type(type_name, fields);
        }
        builder.build()
    }
}

/// Incremental constructor for a [`FieldIndex`].
#[derive(Debug, Clone, Default)]
pub struct FieldIndexBuilder {
    types: BTreeMap<String, FieldSet>,
}

impl FieldIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `type_name` with an empty field set, replacing any earlier
    /// entry. Returns `true` if an entry was replaced.
    pub fn open_type(&mut self, type_name: impl Into<String>) -> bool {
        self.types.insert(type_name.into(), FieldSet::new()).is_some()
    }

    /// Add one field to an already registered type. Returns `false` when the
    /// type is unknown, in which case nothing is recorded.
    pub fn add_field(&mut self, type_name: &str, field: impl Into<String>) -> bool {
        match self.types.get_mut(type_name) {
            Some(fields) => {
                fields.insert(field.into());
                true
            }
            None => false,
        }
    }

    /// Union `fields` into `type_name`, registering the type if needed.
    pub fn extend_type<F: Into<String>>(
        &mut self,
        type_name: impl Into<String>,
        fields: impl IntoIterator<Item = F>,
    ) {
        self.types
            .entry(type_name.into())
            .or_default()
            .extend(fields.into_iter().map(Into::into));
    }

    pub fn build(self) -> FieldIndex {
        FieldIndex { types: self.types }
    }
}
