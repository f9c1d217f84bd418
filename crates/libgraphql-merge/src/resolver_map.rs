use crate::ast;
use crate::RootOperationTypes;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;

/// Arguments passed to a field's resolver, keyed by argument name.
pub type ResolverArgs = IndexMap<String, ast::query::Value>;

/// Computes a field's runtime value from its parent value and arguments.
pub type ResolverFn =
    Arc<dyn Fn(&ast::query::Value, &ResolverArgs) -> ast::query::Value + Send + Sync>;

/// One top-level entry of a [ResolverMap].
#[derive(Clone)]
pub enum ResolverEntry {
    /// `{ TypeName: { fieldName: resolver } }`
    Type(IndexMap<String, ResolverFn>),

    /// A field of a root operation type promoted to the top level of the map
    /// (the "flattened" interchange form).
    RootField(ResolverFn),
}
impl std::fmt::Debug for ResolverEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Type(fields) => f.debug_tuple("Type")
                .field(&fields.keys().collect::<Vec<_>>())
                .finish(),
            Self::RootField(_) => f.write_str("RootField"),
        }
    }
}

/// A name-keyed map of resolver functions that shadows a schema document.
///
/// Every leaf must name a field that is still present in the document it
/// travels with. [MergeEngine](crate::MergeEngine) and
/// [PareEngine](crate::PareEngine) keep this true as they mutate the
/// document.
#[derive(Clone, Debug, Default)]
pub struct ResolverMap {
    entries: IndexMap<String, ResolverEntry>,
}
impl ResolverMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deep-merges two maps. Entries from `right` win on collision, field by
    /// field for type entries.
    pub fn deep_merge(left: &ResolverMap, right: &ResolverMap) -> ResolverMap {
        let mut merged = left.to_owned();
        for (key, right_entry) in right.entries.iter() {
            match (merged.entries.get_mut(key), right_entry) {
                (Some(ResolverEntry::Type(left_fields)), ResolverEntry::Type(right_fields)) => {
                    for (field_name, resolver) in right_fields.iter() {
                        left_fields.insert(field_name.to_string(), resolver.clone());
                    }
                },

                (_, right_entry) => {
                    merged.entries.insert(key.to_string(), right_entry.clone());
                },
            }
        }
        merged
    }

    pub fn entries(&self) -> &IndexMap<String, ResolverEntry> {
        &self.entries
    }

    /// Looks up the resolver for `type_name.field_name`, consulting flattened
    /// root-field entries when `type_name` is a root operation type.
    pub fn field_resolver(
        &self,
        type_name: &str,
        field_name: &str,
        root_types: &RootOperationTypes,
    ) -> Option<&ResolverFn> {
        if let Some(ResolverEntry::Type(fields)) = self.entries.get(type_name)
            && let Some(resolver) = fields.get(field_name) {
            return Some(resolver);
        }

        if root_types.contains(type_name)
            && let Some(ResolverEntry::RootField(resolver)) = self.entries.get(field_name) {
            return Some(resolver);
        }

        None
    }

    pub fn has_field_resolver(&self, type_name: &str, field_name: &str) -> bool {
        matches!(
            self.entries.get(type_name),
            Some(ResolverEntry::Type(fields)) if fields.contains_key(field_name),
        )
    }

    pub fn has_root_field_resolver(&self, field_name: &str) -> bool {
        matches!(self.entries.get(field_name), Some(ResolverEntry::RootField(_)))
    }

    pub fn insert_field_resolver(
        &mut self,
        type_name: impl Into<String>,
        field_name: impl Into<String>,
        resolver: ResolverFn,
    ) {
        let type_name = type_name.into();
        match self.entries.get_mut(type_name.as_str()) {
            Some(ResolverEntry::Type(fields)) => {
                fields.insert(field_name.into(), resolver);
            },
            _ => {
                self.entries.insert(
                    type_name,
                    ResolverEntry::Type(IndexMap::from([(field_name.into(), resolver)])),
                );
            },
        }
    }

    pub fn insert_root_field_resolver(
        &mut self,
        field_name: impl Into<String>,
        resolver: ResolverFn,
    ) {
        self.entries.insert(field_name.into(), ResolverEntry::RootField(resolver));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any entry uses the flattened root-field form.
    pub fn is_flattened(&self) -> bool {
        self.entries.values().any(|entry| matches!(entry, ResolverEntry::RootField(_)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Exports the map in nested or flattened form.
    pub fn export(
        &self,
        flatten: bool,
        doc: &ast::schema::Document,
    ) -> ResolverMap {
        if flatten {
            self.flattened(&RootOperationTypes::from_document(doc))
        } else {
            self.nested(doc)
        }
    }

    /// Promotes every field of a root operation type to an unqualified
    /// top-level entry.
    pub fn flattened(&self, root_types: &RootOperationTypes) -> ResolverMap {
        let mut flattened = ResolverMap::new();
        let mut nested_leftovers = vec![];
        for (key, entry) in self.entries.iter() {
            match entry {
                ResolverEntry::Type(fields) if root_types.contains(key) => {
                    for (field_name, resolver) in fields.iter() {
                        if self.entries.contains_key(field_name)
                            && !self.has_root_field_resolver(field_name) {
                            log::warn!(
                                "Unable to flatten `{key}.{field_name}`: a \
                                top-level `{field_name}` entry already exists.",
                            );
                            nested_leftovers.push((key, field_name, resolver));
                            continue;
                        }
                        flattened.insert_root_field_resolver(
                            field_name.to_string(),
                            resolver.clone(),
                        );
                    }
                },

                ResolverEntry::Type(fields) => {
                    for (field_name, resolver) in fields.iter() {
                        flattened.insert_field_resolver(
                            key.to_string(),
                            field_name.to_string(),
                            resolver.clone(),
                        );
                    }
                },

                ResolverEntry::RootField(resolver) => {
                    flattened.insert_root_field_resolver(key.to_string(), resolver.clone());
                },
            }
        }
        for (type_name, field_name, resolver) in nested_leftovers {
            flattened.insert_field_resolver(
                type_name.to_string(),
                field_name.to_string(),
                resolver.clone(),
            );
        }
        flattened
    }

    /// Lifts flattened root-field entries back under their root operation
    /// type. A top-level entry is lifted when it names a field on one of the
    /// root operation types of `doc`; others are kept as they are.
    pub fn nested(&self, doc: &ast::schema::Document) -> ResolverMap {
        let root_types = RootOperationTypes::from_document(doc);
        let members = type_member_names(doc);
        let mut nested = ResolverMap::new();
        for (key, entry) in self.entries.iter() {
            match entry {
                ResolverEntry::Type(fields) => {
                    for (field_name, resolver) in fields.iter() {
                        nested.insert_field_resolver(
                            key.to_string(),
                            field_name.to_string(),
                            resolver.clone(),
                        );
                    }
                },

                ResolverEntry::RootField(resolver) => {
                    let owning_root_type = root_types.iter().find(|root_type| {
                        members.get(root_type)
                            .is_some_and(|names| names.contains(key.as_str()))
                    });
                    match owning_root_type {
                        Some(root_type) => nested.insert_field_resolver(
                            root_type.to_string(),
                            key.to_string(),
                            resolver.clone(),
                        ),
                        None => {
                            log::debug!(
                                "Top-level resolver `{key}` does not name a \
                                root operation field; leaving it in place.",
                            );
                            nested.insert_root_field_resolver(
                                key.to_string(),
                                resolver.clone(),
                            );
                        },
                    }
                },
            }
        }
        nested
    }

    /// Removes the resolver for `type_name.field_name` in whichever
    /// interchange form it is stored. A type entry left empty is removed.
    ///
    /// `doc` is the document as it stands after the field was removed from
    /// it. A flattened root-field entry is shared by every root operation
    /// type, so it stays while any root type of `doc` still declares the
    /// field.
    ///
    /// Returns `true` if an entry was removed.
    pub fn remove_field(
        &mut self,
        type_name: &str,
        field_name: &str,
        doc: &ast::schema::Document,
    ) -> bool {
        self.remove_fields([(type_name, field_name)], doc) == 1
    }

    /// [remove_field](Self::remove_field) for many `(type, field)` paths at
    /// once.
    ///
    /// Returns the number of entries removed.
    pub fn remove_fields<'a>(
        &mut self,
        paths: impl IntoIterator<Item = (&'a str, &'a str)>,
        doc: &ast::schema::Document,
    ) -> usize {
        let root_types = RootOperationTypes::from_document(doc);
        let members = type_member_names(doc);
        let declared_on_a_root_type = |field_name: &str| {
            root_types.iter().any(|root_type| {
                members.get(root_type)
                    .is_some_and(|names| names.contains(field_name))
            })
        };

        let mut removed = 0;
        for (type_name, field_name) in paths {
            if let Some(ResolverEntry::Type(fields)) = self.entries.get_mut(type_name)
                && fields.shift_remove(field_name).is_some() {
                if fields.is_empty() {
                    self.entries.shift_remove(type_name);
                }
                log::trace!("Removed resolver for `{type_name}.{field_name}`.");
                removed += 1;
                continue;
            }

            if !root_types.contains(type_name) || !self.has_root_field_resolver(field_name) {
                continue;
            }
            if declared_on_a_root_type(field_name) {
                log::debug!(
                    "Keeping flattened resolver `{field_name}`: another root \
                    operation type still declares it.",
                );
                continue;
            }
            self.entries.shift_remove(field_name);
            log::trace!("Removed flattened resolver for `{type_name}.{field_name}`.");
            removed += 1;
        }
        removed
    }

    /// Removes the whole type entry for `type_name`.
    pub fn remove_type(&mut self, type_name: &str) -> bool {
        matches!(
            self.entries.shift_remove(type_name),
            Some(ResolverEntry::Type(_)),
        )
    }

    /// Drops every entry that names a type or field no longer present in
    /// `doc`. Meta-resolvers (`__resolveType`, `__isTypeOf`, ...) survive for
    /// as long as their type does.
    ///
    /// Returns the `Type.field` paths that were removed.
    pub fn retain_present(&mut self, doc: &ast::schema::Document) -> Vec<String> {
        let root_types = RootOperationTypes::from_document(doc);
        let members = type_member_names(doc);
        let mut removed = vec![];

        self.entries.retain(|key, entry| match entry {
            ResolverEntry::Type(fields) => {
                let Some(type_members) = members.get(key.as_str()) else {
                    removed.extend(fields.keys().map(|field| format!("{key}.{field}")));
                    return false;
                };
                fields.retain(|field_name, _| {
                    let keep = field_name.starts_with("__")
                        || type_members.contains(field_name.as_str());
                    if !keep {
                        removed.push(format!("{key}.{field_name}"));
                    }
                    keep
                });
                !fields.is_empty()
            },

            ResolverEntry::RootField(_) => {
                let keep = root_types.iter().any(|root_type| {
                    members.get(root_type)
                        .is_some_and(|names| names.contains(key.as_str()))
                });
                if !keep {
                    removed.push(key.to_string());
                }
                keep
            },
        });

        for path in &removed {
            log::debug!("Dropped orphaned resolver `{path}`.");
        }
        removed
    }
}

/// Collects, per type name, the names of every field or enum value declared
/// on any definition or extension of that type.
pub(crate) fn type_member_names(
    doc: &ast::schema::Document,
) -> HashMap<&str, HashSet<&str>> {
    use ast::schema::Definition;
    use ast::schema::TypeDefinition;
    use ast::schema::TypeExtension;

    let mut members: HashMap<&str, HashSet<&str>> = HashMap::new();
    for def in doc.definitions.iter() {
        let (type_name, names): (&str, Vec<&str>) = match def {
            Definition::TypeDefinition(type_def) => match type_def {
                TypeDefinition::Enum(t) =>
                    (t.name.as_str(), t.values.iter().map(|v| v.name.as_str()).collect()),
                TypeDefinition::InputObject(t) =>
                    (t.name.as_str(), t.fields.iter().map(|f| f.name.as_str()).collect()),
                TypeDefinition::Interface(t) =>
                    (t.name.as_str(), t.fields.iter().map(|f| f.name.as_str()).collect()),
                TypeDefinition::Object(t) =>
                    (t.name.as_str(), t.fields.iter().map(|f| f.name.as_str()).collect()),
                TypeDefinition::Scalar(t) => (t.name.as_str(), vec![]),
                TypeDefinition::Union(t) => (t.name.as_str(), vec![]),
            },

            Definition::TypeExtension(ext) => match ext {
                TypeExtension::Enum(t) =>
                    (t.name.as_str(), t.values.iter().map(|v| v.name.as_str()).collect()),
                TypeExtension::InputObject(t) =>
                    (t.name.as_str(), t.fields.iter().map(|f| f.name.as_str()).collect()),
                TypeExtension::Interface(t) =>
                    (t.name.as_str(), t.fields.iter().map(|f| f.name.as_str()).collect()),
                TypeExtension::Object(t) =>
                    (t.name.as_str(), t.fields.iter().map(|f| f.name.as_str()).collect()),
                TypeExtension::Scalar(t) => (t.name.as_str(), vec![]),
                TypeExtension::Union(t) => (t.name.as_str(), vec![]),
            },

            Definition::DirectiveDefinition(_)
            | Definition::SchemaDefinition(_) => continue,
        };
        members.entry(type_name).or_default().extend(names);
    }
    members
}

/// An explicit, ordered composition of resolvers.
///
/// Resolving the chain runs each resolver in order, handing the previous
/// resolver's result to the next one as its parent value. An empty chain
/// yields the parent value unchanged.
#[derive(Clone, Default)]
pub struct ResolverChain {
    resolvers: Vec<ResolverFn>,
}
impl ResolverChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn push(mut self, resolver: ResolverFn) -> Self {
        self.resolvers.push(resolver);
        self
    }

    pub fn resolve(
        &self,
        parent: &ast::query::Value,
        args: &ResolverArgs,
    ) -> ast::query::Value {
        self.resolvers.iter().fold(parent.to_owned(), |prev, resolver| {
            resolver(&prev, args)
        })
    }

    /// Collapses the chain into a single [ResolverFn].
    pub fn into_resolver(self) -> ResolverFn {
        Arc::new(move |parent: &ast::query::Value, args: &ResolverArgs| {
            self.resolve(parent, args)
        })
    }
}
impl std::fmt::Debug for ResolverChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolverChain")
            .field("len", &self.resolvers.len())
            .finish()
    }
}
