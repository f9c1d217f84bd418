use crate::ast;
use crate::definition_arena::DefinitionArena;
use crate::definition_arena::DefinitionNamespace;
use crate::sibling_index::NamedNode;
use crate::type_collections;
use crate::type_collections::CollectionKind;
use crate::InputSide;
use crate::NodeNormalizer;
use crate::ScalarConfigMap;
use crate::SchemaBundle;
use crate::SchemaMergeError;
use crate::SchemaOperation;
use crate::SchemaSource;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, SchemaMergeError>;

/// Subtracts `source`'s definitions from `target`.
pub fn pare(
    target: impl Into<SchemaSource>,
    source: impl Into<SchemaSource>,
) -> Result<SchemaBundle> {
    PareEngine::new().pare(&target.into(), &source.into())
}

/// Pares one schema text from another and prints the result.
pub fn pare_sdl(target: &str, source: &str) -> Result<String> {
    Ok(pare(target, source)?.sdl())
}

/// The inverse of [MergeEngine](crate::MergeEngine).
///
/// For every type defined on both sides, the target loses each field, enum
/// value or union member that the source also names, from its definition and
/// from every extension of it. A definition or extension left with none is
/// dropped from the document altogether. Scalars named by the source are
/// dropped outright. The target's resolver map and scalar configs lose the
/// entries of everything removed.
///
/// A source definition with no same-named target definition is *added* to
/// the result, exactly as a merge would add it. This keeps pare symmetric
/// with merge's handling of new nodes, even though a subtraction arguably
/// should never add anything.
#[derive(Clone, Debug, Default)]
pub struct PareEngine;
impl PareEngine {
    pub fn new() -> Self {
        Self
    }

    /// Pares `source` from `target`. Neither input is modified; the target's
    /// resolver map and scalar configs are cloned and updated alongside the
    /// document.
    pub fn pare(
        &self,
        target: &SchemaSource,
        source: &SchemaSource,
    ) -> Result<SchemaBundle> {
        let operation = SchemaOperation::Pare;
        let target_doc = target.to_document(operation, InputSide::Target)?;
        let source_doc = NodeNormalizer::normalize_document(
            source.to_document(operation, InputSide::Source)?,
        );
        log::debug!(
            "Paring {} source definitions from {} target definitions.",
            source_doc.definitions.len(),
            target_doc.definitions.len(),
        );

        let mut state = PareState {
            arena: DefinitionArena::from_document(target_doc),
            removed_fields: vec![],
            scalars: target.scalars(),
        };
        for right_def in source_doc.definitions {
            state.pare_definition(right_def);
        }

        let document = state.arena.into_document();
        let mut resolvers = target.resolvers();
        resolvers.remove_fields(
            state.removed_fields.iter().map(|(type_name, field_name)| {
                (type_name.as_str(), field_name.as_str())
            }),
            &document,
        );
        resolvers.retain_present(&document);

        Ok(SchemaBundle::new(document)
            .with_resolvers(resolvers)
            .with_scalars(state.scalars))
    }
}

struct PareState {
    arena: DefinitionArena,
    /// `(type, field)` paths whose resolvers go once the document is final.
    removed_fields: Vec<(String, String)>,
    scalars: ScalarConfigMap,
}
impl PareState {
    fn pare_definition(&mut self, right_def: ast::schema::Definition) {
        use ast::schema::Definition;
        match right_def {
            Definition::TypeDefinition(right_type) =>
                self.pare_type_definition(right_type),

            Definition::TypeExtension(ext) =>
                self.pare_type_definition(NodeNormalizer::normalize_extension(ext)),

            Definition::DirectiveDefinition(right_directive) => {
                let name = right_directive.name.as_str();
                if self.arena.find(DefinitionNamespace::Directive, name).is_none() {
                    log::debug!(
                        "Directive `@{name}` is not defined in the target; adding \
                        it as a merge would.",
                    );
                    self.arena.push(Definition::DirectiveDefinition(right_directive));
                }
            },

            Definition::SchemaDefinition(_) => {
                log::trace!("Leaving the target's schema definition untouched.");
            },
        }
    }

    fn pare_type_definition(&mut self, right: ast::schema::TypeDefinition) {
        use ast::schema::Definition;
        let type_name = ast::schema::type_def_name(&right).to_string();
        let slots = self.arena.find_all(DefinitionNamespace::Type, &type_name);
        if slots.is_empty() {
            log::debug!(
                "`{type_name}` is not defined in the target; adding it as a \
                merge would.",
            );
            self.arena.push(Definition::TypeDefinition(right));
            return;
        }

        for idx in slots {
            let Some(slot) = self.arena.get(idx) else {
                continue;
            };
            let is_extension = matches!(slot, Definition::TypeExtension(_));
            let Some(left) = NodeNormalizer::type_definition_of(slot) else {
                continue;
            };
            self.pare_slot(idx, left, is_extension, &right);
        }
    }

    /// Pares `right` from the target slot at `idx`, whose normalized form is
    /// `left`. A rewritten slot keeps the form it was written in.
    fn pare_slot(
        &mut self,
        idx: usize,
        mut left: ast::schema::TypeDefinition,
        is_extension: bool,
        right: &ast::schema::TypeDefinition,
    ) {
        use ast::schema::Definition;
        let type_name = ast::schema::type_def_name(right).to_string();
        let left_kind = CollectionKind::of(&left);
        if left_kind == CollectionKind::None {
            log::debug!("Dropping scalar `{type_name}`.");
            self.arena.remove(idx);
            self.scalars.shift_remove(&type_name);
            return;
        }

        if left_kind != CollectionKind::of(right) {
            log::warn!(
                "`{type_name}` is a {} in the target but a {} in the source; \
                nothing was pared from it.",
                ast::schema::type_def_kind(&left),
                ast::schema::type_def_kind(right),
            );
            return;
        }

        let (removed, now_empty) = match left_kind {
            CollectionKind::OutputFields => remove_matching(
                type_collections::output_fields_mut(&mut left),
                type_collections::output_fields(right),
            ),
            CollectionKind::InputFields => remove_matching(
                type_collections::input_fields_mut(&mut left),
                type_collections::input_fields(right),
            ),
            CollectionKind::EnumValues => remove_matching(
                type_collections::enum_values_mut(&mut left),
                type_collections::enum_values(right),
            ),
            CollectionKind::UnionMembers => remove_matching(
                type_collections::union_members_mut(&mut left),
                type_collections::union_members(right),
            ),
            CollectionKind::None => (vec![], false),
        };

        if left_kind != CollectionKind::UnionMembers {
            self.removed_fields.extend(
                removed.iter().map(|sub_name| (type_name.to_string(), sub_name.to_string())),
            );
        }

        if now_empty {
            log::debug!(
                "Dropping {} `{type_name}`: nothing is left in it.",
                ast::schema::type_def_kind(&left),
            );
            self.arena.remove(idx);
        } else if !removed.is_empty() {
            log::debug!(
                "Pared {} members from `{type_name}`: {}.",
                removed.len(),
                removed.join(", "),
            );
            let pared = if is_extension {
                Definition::TypeExtension(NodeNormalizer::extension_of(left))
            } else {
                Definition::TypeDefinition(left)
            };
            self.arena.replace(idx, pared);
        }
    }
}

/// Removes every node of `left` that shares a name with a node of `right`.
///
/// Returns the removed names and whether the removal left `left` empty. A
/// collection that was empty to begin with is never reported as emptied.
fn remove_matching<N: NamedNode>(
    left: Option<&mut Vec<N>>,
    right: &[N],
) -> (Vec<String>, bool) {
    let Some(left) = left else {
        return (vec![], false);
    };
    let right_names: HashSet<&str> = right.iter().map(|node| node.node_name()).collect();
    let mut removed = vec![];
    left.retain(|node| {
        let keep = !right_names.contains(node.node_name());
        if !keep {
            removed.push(node.node_name().to_string());
        }
        keep
    });
    let now_empty = !removed.is_empty() && left.is_empty();
    (removed, now_empty)
}
