use crate::ast;
use crate::definition_arena::DefinitionArena;
use crate::definition_arena::DefinitionNamespace;
use crate::sibling_index::NamedNode;
use crate::sibling_index::SiblingIndex;
use crate::type_collections;
use crate::type_collections::CollectionKind;
use crate::ConflictResolvers;
use crate::FieldNode;
use crate::InputSide;
use crate::NodeNormalizer;
use crate::ResolverMap;
use crate::ScalarConfig;
use crate::ScalarConfigMap;
use crate::ScalarMergeUnavailable;
use crate::SchemaBundle;
use crate::SchemaMergeError;
use crate::SchemaOperation;
use crate::SchemaSource;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaMergeError>;

/// Merges `source` into `target` using the default conflict resolvers.
pub fn merge(
    target: impl Into<SchemaSource>,
    source: impl Into<SchemaSource>,
) -> Result<SchemaBundle> {
    MergeEngine::default().merge(&target.into(), &source.into())
}

/// Merges two schema texts and prints the result.
pub fn merge_sdl(target: &str, source: &str) -> Result<String> {
    Ok(merge(target, source)?.sdl())
}

/// Combines schema documents into one.
///
/// Wholly new top-level definitions from the source are appended to the
/// target. Definitions present on both sides have their directives and their
/// fields, enum values or union members merged one sub-node at a time: new
/// sub-nodes are appended and same-named ones are settled by the engine's
/// [ConflictResolvers]. Source-side extensions are normalized into base
/// definitions first. When the source touches a type that the target spreads
/// over a definition and its extensions, those target nodes are folded into
/// the first of them before the source is merged in.
#[derive(Clone, Debug, Default)]
pub struct MergeEngine {
    resolvers: ConflictResolvers,
}
impl MergeEngine {
    pub fn new(resolvers: ConflictResolvers) -> Self {
        Self { resolvers }
    }

    pub fn conflict_resolvers(&self) -> &ConflictResolvers {
        &self.resolvers
    }

    /// Merges `source` into `target`. Neither input is modified.
    pub fn merge(
        &self,
        target: &SchemaSource,
        source: &SchemaSource,
    ) -> Result<SchemaBundle> {
        let operation = SchemaOperation::Merge;
        let target_doc = target.to_document(operation, InputSide::Target)?;
        let source_doc = NodeNormalizer::normalize_document(
            source.to_document(operation, InputSide::Source)?,
        );
        log::debug!(
            "Merging {} source definitions into {} target definitions.",
            source_doc.definitions.len(),
            target_doc.definitions.len(),
        );

        // Scalar configs are looked up through registries built from each
        // side as it was before the merge.
        let mut scalar_ctx = ScalarMergeContext {
            left: SchemaBundle::new(target_doc.clone()).with_scalars(target.scalars()),
            right: SchemaBundle::new(source_doc.clone()).with_scalars(source.scalars()),
            resolved: IndexMap::new(),
        };

        let mut arena = DefinitionArena::from_document(target_doc);
        for right_def in source_doc.definitions {
            self.merge_definition(&mut arena, right_def, &mut scalar_ctx);
        }
        let document = arena.into_document();

        let mut resolvers = ResolverMap::deep_merge(&target.resolvers(), &source.resolvers());
        resolvers.retain_present(&document);

        let scalars = scalar_ctx.finalize(&document);

        Ok(SchemaBundle::new(document)
            .with_resolvers(resolvers)
            .with_scalars(scalars))
    }

    /// Folds every source, in order, into an initially empty schema.
    pub fn merge_all(&self, sources: &[SchemaSource]) -> Result<SchemaBundle> {
        let mut merged = SchemaBundle::new(ast::schema::empty_document());
        for source in sources {
            merged = self.merge(&SchemaSource::Bundle(merged), source)?;
        }
        Ok(merged)
    }

    fn merge_definition(
        &self,
        arena: &mut DefinitionArena,
        right_def: ast::schema::Definition,
        scalar_ctx: &mut ScalarMergeContext,
    ) {
        use ast::schema::Definition;
        match right_def {
            Definition::TypeDefinition(right_type) =>
                self.merge_type_definition(arena, right_type, scalar_ctx),

            Definition::TypeExtension(ext) => self.merge_type_definition(
                arena,
                NodeNormalizer::normalize_extension(ext),
                scalar_ctx,
            ),

            Definition::DirectiveDefinition(right_directive) => {
                let name = right_directive.name.to_string();
                match arena.find(DefinitionNamespace::Directive, &name) {
                    Some(idx) => {
                        log::debug!("Replacing directive definition `@{name}`.");
                        arena.replace(idx, Definition::DirectiveDefinition(right_directive));
                    },
                    None => {
                        log::debug!("Adding directive definition `@{name}`.");
                        arena.push(Definition::DirectiveDefinition(right_directive));
                    },
                }
            },

            Definition::SchemaDefinition(right_schema) => {
                let existing = arena.find(DefinitionNamespace::Schema, "")
                    .and_then(|idx| match arena.get(idx) {
                        Some(Definition::SchemaDefinition(left)) => Some((idx, left.to_owned())),
                        _ => None,
                    });
                match existing {
                    Some((idx, left_schema)) => arena.replace(
                        idx,
                        Definition::SchemaDefinition(merge_schema_definitions(
                            left_schema,
                            right_schema,
                        )),
                    ),
                    None => {
                        arena.push(Definition::SchemaDefinition(right_schema));
                    },
                }
            },
        }
    }

    fn merge_type_definition(
        &self,
        arena: &mut DefinitionArena,
        right: ast::schema::TypeDefinition,
        scalar_ctx: &mut ScalarMergeContext,
    ) {
        use ast::schema::Definition;
        let type_name = ast::schema::type_def_name(&right).to_string();
        let Some((idx, mut left)) = fold_target_slots(arena, &type_name) else {
            log::debug!(
                "Adding new {} `{type_name}`.",
                ast::schema::type_def_kind(&right),
            );
            arena.push(Definition::TypeDefinition(right));
            return;
        };

        log::debug!(
            "Merging {} `{type_name}` into existing {}.",
            ast::schema::type_def_kind(&right),
            ast::schema::type_def_kind(&left),
        );
        self.merge_type_members(&mut left, &right, scalar_ctx);
        arena.replace(idx, Definition::TypeDefinition(left));
    }

    /// Merges `right`'s directives and primary sub-collection into `left`,
    /// dispatching on the kind of `left`.
    fn merge_type_members(
        &self,
        left: &mut ast::schema::TypeDefinition,
        right: &ast::schema::TypeDefinition,
        scalar_ctx: &mut ScalarMergeContext,
    ) {
        let type_name = ast::schema::type_def_name(right).to_string();
        let directives = merge_collection(
            &type_name,
            type_collections::directives(left),
            type_collections::directives(right),
            |l, r| (self.resolvers.directive)(left, l, right, r),
        );
        *type_collections::directives_mut(left) = directives;

        let left_kind = CollectionKind::of(left);
        if left_kind != CollectionKind::of(right) {
            log::warn!(
                "`{type_name}` is a {} in the target but a {} in the source; \
                only its directives were merged.",
                ast::schema::type_def_kind(left),
                ast::schema::type_def_kind(right),
            );
        }

        match left_kind {
            CollectionKind::OutputFields => {
                let fields = merge_collection(
                    &type_name,
                    type_collections::output_fields(left),
                    type_collections::output_fields(right),
                    |l, r| {
                        let resolved = (self.resolvers.field)(
                            left,
                            &FieldNode::Output(l.to_owned()),
                            right,
                            &FieldNode::Output(r.to_owned()),
                        );
                        match resolved {
                            FieldNode::Output(field) => field,
                            FieldNode::Input(_) => {
                                log::warn!(
                                    "The field resolver returned an input field for \
                                    `{type_name}.{}`; keeping the source field.",
                                    r.name,
                                );
                                r.to_owned()
                            },
                        }
                    },
                );
                if let Some(left_fields) = type_collections::output_fields_mut(left) {
                    *left_fields = fields;
                }
            },

            CollectionKind::InputFields => {
                let fields = merge_collection(
                    &type_name,
                    type_collections::input_fields(left),
                    type_collections::input_fields(right),
                    |l, r| {
                        let resolved = (self.resolvers.field)(
                            left,
                            &FieldNode::Input(l.to_owned()),
                            right,
                            &FieldNode::Input(r.to_owned()),
                        );
                        match resolved {
                            FieldNode::Input(field) => field,
                            FieldNode::Output(_) => {
                                log::warn!(
                                    "The field resolver returned an output field for \
                                    `{type_name}.{}`; keeping the source field.",
                                    r.name,
                                );
                                r.to_owned()
                            },
                        }
                    },
                );
                if let Some(left_fields) = type_collections::input_fields_mut(left) {
                    *left_fields = fields;
                }
            },

            CollectionKind::EnumValues => {
                let values = merge_collection(
                    &type_name,
                    type_collections::enum_values(left),
                    type_collections::enum_values(right),
                    |l, r| (self.resolvers.enum_value)(left, l, right, r),
                );
                if let Some(left_values) = type_collections::enum_values_mut(left) {
                    *left_values = values;
                }
            },

            CollectionKind::UnionMembers => {
                let members = merge_collection(
                    &type_name,
                    type_collections::union_members(left),
                    type_collections::union_members(right),
                    |l, r| (self.resolvers.union_member)(left, l, right, r),
                );
                if let Some(left_members) = type_collections::union_members_mut(left) {
                    *left_members = members;
                }
            },

            CollectionKind::None => {
                if let (
                    ast::schema::TypeDefinition::Scalar(left_scalar),
                    ast::schema::TypeDefinition::Scalar(right_scalar),
                ) = (&*left, right) {
                    let left_config = scalar_ctx.config_of(InputSide::Target, &type_name);
                    let right_config = scalar_ctx.config_of(InputSide::Source, &type_name);
                    let degraded = left_config.is_err() || right_config.is_err();
                    let left_config = left_config.unwrap_or_else(log_unavailable);
                    let right_config = right_config.unwrap_or_else(log_unavailable);
                    let config = (self.resolvers.scalar)(
                        left_scalar,
                        left_config.as_ref(),
                        right_scalar,
                        right_config.as_ref(),
                    );
                    scalar_ctx.resolved.insert(type_name, ScalarResolution { config, degraded });
                }
            },
        }
    }
}

/// Folds every target node of `type_name` into the first one, normalized,
/// and empties the slots of the rest. Nodes of a different kind than the
/// first are left where they are.
///
/// Returns the first node's slot and the folded definition.
fn fold_target_slots(
    arena: &mut DefinitionArena,
    type_name: &str,
) -> Option<(usize, ast::schema::TypeDefinition)> {
    let slots = arena.find_all(DefinitionNamespace::Type, type_name);
    let (&first_idx, rest) = slots.split_first()?;
    let mut folded = arena.get(first_idx).and_then(NodeNormalizer::type_definition_of)?;
    for &idx in rest {
        let Some(piece) = arena.get(idx).and_then(NodeNormalizer::type_definition_of) else {
            continue;
        };
        if std::mem::discriminant(&piece) != std::mem::discriminant(&folded) {
            log::warn!(
                "`{type_name}` is extended as a {} but defined as a {}; leaving \
                that extension as it is.",
                ast::schema::type_def_kind(&piece),
                ast::schema::type_def_kind(&folded),
            );
            continue;
        }
        log::debug!("Folding a later `{type_name}` node into its first definition.");
        fold_members(&mut folded, &piece);
        arena.remove(idx);
    }
    Some((first_idx, folded))
}

/// Appends `piece`'s directives, interfaces and members to `into`. Names
/// `into` already carries keep their first occurrence.
fn fold_members(
    into: &mut ast::schema::TypeDefinition,
    piece: &ast::schema::TypeDefinition,
) {
    use ast::schema::TypeDefinition;
    let type_name = ast::schema::type_def_name(piece).to_string();
    let directives = merge_collection(
        &type_name,
        type_collections::directives(into),
        type_collections::directives(piece),
        |l, _| l.to_owned(),
    );
    *type_collections::directives_mut(into) = directives;

    match CollectionKind::of(into) {
        CollectionKind::OutputFields => {
            let fields = merge_collection(
                &type_name,
                type_collections::output_fields(into),
                type_collections::output_fields(piece),
                |l, _| l.to_owned(),
            );
            if let Some(into_fields) = type_collections::output_fields_mut(into) {
                *into_fields = fields;
            }
        },

        CollectionKind::InputFields => {
            let fields = merge_collection(
                &type_name,
                type_collections::input_fields(into),
                type_collections::input_fields(piece),
                |l, _| l.to_owned(),
            );
            if let Some(into_fields) = type_collections::input_fields_mut(into) {
                *into_fields = fields;
            }
        },

        CollectionKind::EnumValues => {
            let values = merge_collection(
                &type_name,
                type_collections::enum_values(into),
                type_collections::enum_values(piece),
                |l, _| l.to_owned(),
            );
            if let Some(into_values) = type_collections::enum_values_mut(into) {
                *into_values = values;
            }
        },

        CollectionKind::UnionMembers => {
            let members = merge_collection(
                &type_name,
                type_collections::union_members(into),
                type_collections::union_members(piece),
                |l, _| l.to_owned(),
            );
            if let Some(into_members) = type_collections::union_members_mut(into) {
                *into_members = members;
            }
        },

        CollectionKind::None => (),
    }

    let interfaces = match (into, piece) {
        (TypeDefinition::Object(into), TypeDefinition::Object(piece)) =>
            Some((&mut into.implements_interfaces, &piece.implements_interfaces)),
        (TypeDefinition::Interface(into), TypeDefinition::Interface(piece)) =>
            Some((&mut into.implements_interfaces, &piece.implements_interfaces)),
        _ => None,
    };
    if let Some((into_interfaces, piece_interfaces)) = interfaces {
        for interface in piece_interfaces {
            if !into_interfaces.contains(interface) {
                into_interfaces.push(interface.to_owned());
            }
        }
    }
}

/// Merges a right-hand sibling collection into a copy of the left-hand one.
///
/// Right-hand nodes with no same-named left-hand sibling are appended;
/// same-named pairs are replaced in place by whatever `resolve` returns.
fn merge_collection<N: NamedNode + Clone>(
    type_name: &str,
    left: &[N],
    right: &[N],
    resolve: impl Fn(&N, &N) -> N,
) -> Vec<N> {
    let mut merged = left.to_vec();
    let mut index = SiblingIndex::new(&merged);
    for right_node in right {
        let name = right_node.node_name();
        match index.find(name) {
            Some(idx) => {
                log::trace!("Resolving conflict on `{type_name}.{name}`.");
                merged[idx] = resolve(&merged[idx], right_node);
            },
            None => {
                log::trace!("Adding `{type_name}.{name}`.");
                index.insert(name, merged.len());
                merged.push(right_node.to_owned());
            },
        }
    }
    merged
}

fn merge_schema_definitions(
    mut left: ast::schema::SchemaDefinition,
    right: ast::schema::SchemaDefinition,
) -> ast::schema::SchemaDefinition {
    left.directives = merge_collection(
        "schema",
        &left.directives,
        &right.directives,
        |_, r| r.to_owned(),
    );
    if right.query.is_some() {
        left.query = right.query;
    }
    if right.mutation.is_some() {
        left.mutation = right.mutation;
    }
    if right.subscription.is_some() {
        left.subscription = right.subscription;
    }
    left
}

/// State for the out-of-band half of a scalar merge.
struct ScalarMergeContext {
    left: SchemaBundle,
    right: SchemaBundle,

    /// Scalar-resolver results, reattached once the tree merge is done.
    resolved: IndexMap<String, ScalarResolution>,
}
impl ScalarMergeContext {
    fn config_of(
        &self,
        side: InputSide,
        scalar_name: &str,
    ) -> std::result::Result<Option<ScalarConfig>, ScalarMergeUnavailable> {
        let bundle = match side {
            InputSide::Target => &self.left,
            InputSide::Source => &self.right,
        };
        match bundle.registry() {
            Ok(registry) => Ok(registry.scalar_config(scalar_name).cloned()),
            Err(reason) => Err(ScalarMergeUnavailable {
                side,
                reason: reason.to_owned(),
            }),
        }
    }

    /// Starts from both sides' raw config maps, right winning, then applies
    /// the scalar resolver's results. A `None` result removes the config
    /// unless one side's registry was unavailable; the raw map then still
    /// holds the only config that side has.
    fn finalize(self, merged_doc: &ast::schema::Document) -> ScalarConfigMap {
        let mut scalars = self.left.scalars().to_owned();
        for (name, config) in self.right.scalars() {
            scalars.insert(name.to_string(), config.to_owned());
        }
        for (name, resolution) in self.resolved {
            match resolution.config {
                Some(config) => {
                    scalars.insert(name, config);
                },
                None if resolution.degraded => {
                    log::debug!(
                        "Keeping the carried-over scalar config for `{name}`: a \
                        side's registry was unavailable to the scalar resolver.",
                    );
                },
                None => {
                    scalars.shift_remove(&name);
                },
            }
        }

        let defined_scalars = defined_scalar_names(merged_doc);
        scalars.retain(|name, _| {
            let keep = defined_scalars.contains(&name.as_str());
            if !keep {
                log::debug!(
                    "Dropping the scalar config for `{name}`: it no longer names \
                    a scalar in the merged schema.",
                );
            }
            keep
        });
        scalars
    }
}

struct ScalarResolution {
    config: Option<ScalarConfig>,

    /// Whether either side's config was unavailable to the resolver.
    degraded: bool,
}

fn log_unavailable(unavailable: ScalarMergeUnavailable) -> Option<ScalarConfig> {
    log::debug!("{unavailable}");
    None
}

pub(crate) fn defined_scalar_names(doc: &ast::schema::Document) -> Vec<&str> {
    use ast::schema::Definition;
    use ast::schema::TypeDefinition;
    doc.definitions.iter().filter_map(|def| match def {
        Definition::TypeDefinition(TypeDefinition::Scalar(scalar)) =>
            Some(scalar.name.as_str()),
        _ => None,
    }).collect()
}
