use crate::ast;

/// Rewrites extension nodes (`extend type Foo ...`) into their base
/// definition kind so that extensions and definitions can be merged
/// uniformly.
///
/// Normalization discards the fact that a node was written as an extension.
/// Extensions carry no description, so the resulting definition has none.
pub struct NodeNormalizer;
impl NodeNormalizer {
    /// Normalizes every top-level type extension in `doc` into a type
    /// definition. All other definitions pass through unchanged.
    pub fn normalize_document(doc: ast::schema::Document) -> ast::schema::Document {
        ast::schema::Document {
            definitions: doc.definitions
                .into_iter()
                .map(Self::normalize_definition)
                .collect(),
        }
    }

    pub fn normalize_definition(
        def: ast::schema::Definition,
    ) -> ast::schema::Definition {
        use ast::schema::Definition;
        match def {
            Definition::TypeExtension(ext) =>
                Definition::TypeDefinition(Self::normalize_extension(ext)),
            other => other,
        }
    }

    pub fn normalize_extension(
        ext: ast::schema::TypeExtension,
    ) -> ast::schema::TypeDefinition {
        use ast::schema::TypeDefinition;
        use ast::schema::TypeExtension;
        log::trace!(
            "Normalizing extension of `{}` into a type definition.",
            ast::schema::type_ext_name(&ext),
        );
        match ext {
            TypeExtension::Enum(ext) =>
                TypeDefinition::Enum(ast::schema::EnumType {
                    position: ext.position,
                    description: None,
                    name: ext.name,
                    directives: ext.directives,
                    values: ext.values,
                }),

            TypeExtension::InputObject(ext) =>
                TypeDefinition::InputObject(ast::schema::InputObjectType {
                    position: ext.position,
                    description: None,
                    name: ext.name,
                    directives: ext.directives,
                    fields: ext.fields,
                }),

            TypeExtension::Interface(ext) =>
                TypeDefinition::Interface(ast::schema::InterfaceType {
                    position: ext.position,
                    description: None,
                    name: ext.name,
                    implements_interfaces: ext.implements_interfaces,
                    directives: ext.directives,
                    fields: ext.fields,
                }),

            TypeExtension::Object(ext) =>
                TypeDefinition::Object(ast::schema::ObjectType {
                    position: ext.position,
                    description: None,
                    name: ext.name,
                    implements_interfaces: ext.implements_interfaces,
                    directives: ext.directives,
                    fields: ext.fields,
                }),

            TypeExtension::Scalar(ext) =>
                TypeDefinition::Scalar(ast::schema::ScalarType {
                    position: ext.position,
                    description: None,
                    name: ext.name,
                    directives: ext.directives,
                }),

            TypeExtension::Union(ext) =>
                TypeDefinition::Union(ast::schema::UnionType {
                    position: ext.position,
                    description: None,
                    name: ext.name,
                    directives: ext.directives,
                    types: ext.types,
                }),
        }
    }

    /// Turns a definition back into an extension of the same kind, dropping
    /// its description.
    pub(crate) fn extension_of(
        type_def: ast::schema::TypeDefinition,
    ) -> ast::schema::TypeExtension {
        use ast::schema::TypeDefinition;
        use ast::schema::TypeExtension;
        match type_def {
            TypeDefinition::Enum(def) =>
                TypeExtension::Enum(ast::schema::EnumTypeExtension {
                    position: def.position,
                    name: def.name,
                    directives: def.directives,
                    values: def.values,
                }),

            TypeDefinition::InputObject(def) =>
                TypeExtension::InputObject(ast::schema::InputObjectTypeExtension {
                    position: def.position,
                    name: def.name,
                    directives: def.directives,
                    fields: def.fields,
                }),

            TypeDefinition::Interface(def) =>
                TypeExtension::Interface(ast::schema::InterfaceTypeExtension {
                    position: def.position,
                    name: def.name,
                    implements_interfaces: def.implements_interfaces,
                    directives: def.directives,
                    fields: def.fields,
                }),

            TypeDefinition::Object(def) =>
                TypeExtension::Object(ast::schema::ObjectTypeExtension {
                    position: def.position,
                    name: def.name,
                    implements_interfaces: def.implements_interfaces,
                    directives: def.directives,
                    fields: def.fields,
                }),

            TypeDefinition::Scalar(def) =>
                TypeExtension::Scalar(ast::schema::ScalarTypeExtension {
                    position: def.position,
                    name: def.name,
                    directives: def.directives,
                }),

            TypeDefinition::Union(def) =>
                TypeExtension::Union(ast::schema::UnionTypeExtension {
                    position: def.position,
                    name: def.name,
                    directives: def.directives,
                    types: def.types,
                }),
        }
    }

    /// Produces a normalized view of a top-level node without consuming it.
    ///
    /// Returns `None` for definitions that are neither type definitions nor
    /// type extensions.
    pub fn type_definition_of(
        def: &ast::schema::Definition,
    ) -> Option<ast::schema::TypeDefinition> {
        use ast::schema::Definition;
        match def {
            Definition::TypeDefinition(type_def) => Some(type_def.to_owned()),
            Definition::TypeExtension(ext) =>
                Some(Self::normalize_extension(ext.to_owned())),
            Definition::DirectiveDefinition(_)
            | Definition::SchemaDefinition(_) => None,
        }
    }
}
