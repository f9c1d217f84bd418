use crate::ast;
use crate::InputSide;
use crate::RootOperationTypes;
use crate::ScalarConfig;
use crate::ScalarConfigMap;
use std::collections::HashSet;
use thiserror::Error;

type Result<T> = std::result::Result<T, RegistryBuildError>;

const BUILTIN_SCALAR_NAMES: [&str; 5] = ["Boolean", "Float", "ID", "Int", "String"];

/// A lightweight, built view of a schema document: the set of defined types,
/// its root operation types and the scalar configs attached to it.
///
/// Building a registry checks that the document is self-consistent enough to
/// attach scalar behavior to; it is not a full GraphQL validation pass.
#[derive(Clone, Debug)]
pub struct SchemaRegistry {
    root_types: RootOperationTypes,
    scalars: ScalarConfigMap,
    type_names: HashSet<String>,
}
impl SchemaRegistry {
    pub fn build(
        doc: &ast::schema::Document,
        scalars: &ScalarConfigMap,
    ) -> Result<Self> {
        use ast::schema::Definition;
        use ast::schema::TypeDefinition;

        let mut type_names = HashSet::new();
        let mut scalar_names = HashSet::new();
        for def in doc.definitions.iter() {
            let Definition::TypeDefinition(type_def) = def else {
                continue;
            };
            let type_name = ast::schema::type_def_name(type_def);
            if !type_names.insert(type_name.to_string()) {
                return Err(RegistryBuildError::DuplicateTypeDefinition {
                    type_name: type_name.to_string(),
                });
            }
            if let TypeDefinition::Scalar(_) = type_def {
                scalar_names.insert(type_name);
            }
        }

        type_names.extend(BUILTIN_SCALAR_NAMES.iter().map(|name| name.to_string()));

        for (referenced_from, referenced_type) in type_references(doc) {
            if !type_names.contains(referenced_type) {
                return Err(RegistryBuildError::UndefinedTypeReference {
                    referenced_from,
                    type_name: referenced_type.to_string(),
                });
            }
        }

        for scalar_name in scalars.keys() {
            if !scalar_names.contains(scalar_name.as_str()) {
                return Err(RegistryBuildError::ConfigForUndefinedScalar {
                    scalar_name: scalar_name.to_string(),
                });
            }
        }

        Ok(Self {
            root_types: RootOperationTypes::from_document(doc),
            scalars: scalars.to_owned(),
            type_names,
        })
    }

    pub fn defines_type(&self, type_name: &str) -> bool {
        self.type_names.contains(type_name)
    }

    pub fn root_operation_types(&self) -> &RootOperationTypes {
        &self.root_types
    }

    pub fn scalar_config(&self, scalar_name: &str) -> Option<&ScalarConfig> {
        self.scalars.get(scalar_name)
    }
}

fn named_type_of(type_: &ast::schema::Type) -> &str {
    use ast::schema::Type;
    match type_ {
        Type::NamedType(name) => name.as_str(),
        Type::ListType(inner) | Type::NonNullType(inner) => named_type_of(inner),
    }
}

/// Every `(location, referenced type name)` pair in the document.
fn type_references(doc: &ast::schema::Document) -> Vec<(String, &str)> {
    use ast::schema::Definition;
    use ast::schema::TypeDefinition;
    use ast::schema::TypeExtension;

    fn field_refs<'a>(
        type_name: &str,
        fields: &'a [ast::schema::Field],
        refs: &mut Vec<(String, &'a str)>,
    ) {
        for field in fields {
            refs.push((
                format!("{type_name}.{}", field.name),
                named_type_of(&field.field_type),
            ));
            input_refs(&format!("{type_name}.{}", field.name), &field.arguments, refs);
        }
    }

    fn input_refs<'a>(
        owner: &str,
        inputs: &'a [ast::schema::InputValue],
        refs: &mut Vec<(String, &'a str)>,
    ) {
        for input in inputs {
            refs.push((
                format!("{owner}({})", input.name),
                named_type_of(&input.value_type),
            ));
        }
    }

    fn member_refs<'a>(
        type_name: &str,
        members: &'a [String],
        refs: &mut Vec<(String, &'a str)>,
    ) {
        for member in members {
            refs.push((format!("union {type_name}"), member.as_str()));
        }
    }

    let mut refs = vec![];
    for def in doc.definitions.iter() {
        match def {
            Definition::TypeDefinition(TypeDefinition::Object(t)) =>
                field_refs(&t.name, &t.fields, &mut refs),
            Definition::TypeDefinition(TypeDefinition::Interface(t)) =>
                field_refs(&t.name, &t.fields, &mut refs),
            Definition::TypeDefinition(TypeDefinition::InputObject(t)) =>
                input_refs(&t.name, &t.fields, &mut refs),
            Definition::TypeDefinition(TypeDefinition::Union(t)) =>
                member_refs(&t.name, &t.types, &mut refs),
            Definition::TypeExtension(TypeExtension::Object(t)) =>
                field_refs(&t.name, &t.fields, &mut refs),
            Definition::TypeExtension(TypeExtension::Interface(t)) =>
                field_refs(&t.name, &t.fields, &mut refs),
            Definition::TypeExtension(TypeExtension::InputObject(t)) =>
                input_refs(&t.name, &t.fields, &mut refs),
            Definition::TypeExtension(TypeExtension::Union(t)) =>
                member_refs(&t.name, &t.types, &mut refs),
            Definition::DirectiveDefinition(directive_def) =>
                input_refs(
                    &format!("@{}", directive_def.name),
                    &directive_def.arguments,
                    &mut refs,
                ),
            _ => (),
        }
    }
    refs
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum RegistryBuildError {
    #[error("A scalar config was provided for `{scalar_name}`, which is not a scalar defined in the schema")]
    ConfigForUndefinedScalar {
        scalar_name: String,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
    },

    #[error("`{referenced_from}` references the undefined type `{type_name}`")]
    UndefinedTypeReference {
        referenced_from: String,
        type_name: String,
    },
}

/// A non-fatal degradation: one side of a merge could not build a
/// [SchemaRegistry], so its scalar configs are treated as absent.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("Scalar configs of the {side} schema are unavailable: {reason}")]
pub struct ScalarMergeUnavailable {
    pub side: InputSide,
    pub reason: RegistryBuildError,
}
