//! Accessors for the named sub-collections of a [TypeDefinition].
//!
//! Read accessors return an empty slice when a type kind has no such
//! collection, so a kind mismatch between the two sides of a merge simply
//! contributes nothing.

use crate::ast;
use ast::schema::TypeDefinition;

pub(crate) fn directives(def: &TypeDefinition) -> &[ast::query::Directive] {
    match def {
        TypeDefinition::Enum(t) => &t.directives,
        TypeDefinition::InputObject(t) => &t.directives,
        TypeDefinition::Interface(t) => &t.directives,
        TypeDefinition::Object(t) => &t.directives,
        TypeDefinition::Scalar(t) => &t.directives,
        TypeDefinition::Union(t) => &t.directives,
    }
}

pub(crate) fn directives_mut(def: &mut TypeDefinition) -> &mut Vec<ast::query::Directive> {
    match def {
        TypeDefinition::Enum(t) => &mut t.directives,
        TypeDefinition::InputObject(t) => &mut t.directives,
        TypeDefinition::Interface(t) => &mut t.directives,
        TypeDefinition::Object(t) => &mut t.directives,
        TypeDefinition::Scalar(t) => &mut t.directives,
        TypeDefinition::Union(t) => &mut t.directives,
    }
}

pub(crate) fn output_fields(def: &TypeDefinition) -> &[ast::schema::Field] {
    match def {
        TypeDefinition::Interface(t) => &t.fields,
        TypeDefinition::Object(t) => &t.fields,
        _ => &[],
    }
}

pub(crate) fn output_fields_mut(def: &mut TypeDefinition) -> Option<&mut Vec<ast::schema::Field>> {
    match def {
        TypeDefinition::Interface(t) => Some(&mut t.fields),
        TypeDefinition::Object(t) => Some(&mut t.fields),
        _ => None,
    }
}

pub(crate) fn input_fields(def: &TypeDefinition) -> &[ast::schema::InputValue] {
    match def {
        TypeDefinition::InputObject(t) => &t.fields,
        _ => &[],
    }
}

pub(crate) fn input_fields_mut(def: &mut TypeDefinition) -> Option<&mut Vec<ast::schema::InputValue>> {
    match def {
        TypeDefinition::InputObject(t) => Some(&mut t.fields),
        _ => None,
    }
}

pub(crate) fn enum_values(def: &TypeDefinition) -> &[ast::schema::EnumValue] {
    match def {
        TypeDefinition::Enum(t) => &t.values,
        _ => &[],
    }
}

pub(crate) fn enum_values_mut(def: &mut TypeDefinition) -> Option<&mut Vec<ast::schema::EnumValue>> {
    match def {
        TypeDefinition::Enum(t) => Some(&mut t.values),
        _ => None,
    }
}

pub(crate) fn union_members(def: &TypeDefinition) -> &[String] {
    match def {
        TypeDefinition::Union(t) => &t.types,
        _ => &[],
    }
}

pub(crate) fn union_members_mut(def: &mut TypeDefinition) -> Option<&mut Vec<String>> {
    match def {
        TypeDefinition::Union(t) => Some(&mut t.types),
        _ => None,
    }
}

/// The category of a type's primary sub-collection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum CollectionKind {
    EnumValues,
    InputFields,
    OutputFields,
    UnionMembers,

    /// Scalars carry nothing beyond directives.
    None,
}
impl CollectionKind {
    pub(crate) fn of(def: &TypeDefinition) -> Self {
        match def {
            TypeDefinition::Enum(_) => Self::EnumValues,
            TypeDefinition::InputObject(_) => Self::InputFields,
            TypeDefinition::Interface(_)
            | TypeDefinition::Object(_) => Self::OutputFields,
            TypeDefinition::Scalar(_) => Self::None,
            TypeDefinition::Union(_) => Self::UnionMembers,
        }
    }
}
