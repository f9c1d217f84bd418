use crate::ast;
use crate::ScalarConfig;
use std::sync::Arc;

/// A field-like sub-node: either an output field of an object/interface type
/// or an input field of an input object type.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldNode {
    Input(ast::schema::InputValue),
    Output(ast::schema::Field),
}
impl FieldNode {
    pub fn name(&self) -> &str {
        match self {
            Self::Input(input) => input.name.as_str(),
            Self::Output(field) => field.name.as_str(),
        }
    }
}

/// Picks the field to keep when both sides define a same-named field.
///
/// Receives `(left_type, left_field, right_type, right_field)`.
pub type FieldMergeResolver = Arc<
    dyn Fn(
        &ast::schema::TypeDefinition,
        &FieldNode,
        &ast::schema::TypeDefinition,
        &FieldNode,
    ) -> FieldNode + Send + Sync
>;

/// Picks the directive annotation to keep when both sides annotate a type
/// with a same-named directive.
pub type DirectiveMergeResolver = Arc<
    dyn Fn(
        &ast::schema::TypeDefinition,
        &ast::query::Directive,
        &ast::schema::TypeDefinition,
        &ast::query::Directive,
    ) -> ast::query::Directive + Send + Sync
>;

pub type EnumValueMergeResolver = Arc<
    dyn Fn(
        &ast::schema::TypeDefinition,
        &ast::schema::EnumValue,
        &ast::schema::TypeDefinition,
        &ast::schema::EnumValue,
    ) -> ast::schema::EnumValue + Send + Sync
>;

/// Picks the member reference to keep when both sides of a union list the
/// same member type.
pub type UnionMemberMergeResolver = Arc<
    dyn Fn(
        &ast::schema::TypeDefinition,
        &String,
        &ast::schema::TypeDefinition,
        &String,
    ) -> String + Send + Sync
>;

/// Picks (or synthesizes) the scalar config to attach to a scalar defined
/// on both sides. Returning `None` leaves the merged scalar without one.
pub type ScalarMergeResolver = Arc<
    dyn Fn(
        &ast::schema::ScalarType,
        Option<&ScalarConfig>,
        &ast::schema::ScalarType,
        Option<&ScalarConfig>,
    ) -> Option<ScalarConfig> + Send + Sync
>;

/// The pluggable conflict-resolution policy of a merge: one callback per
/// sub-node category.
///
/// Start from [ConflictResolvers::default()] and override only the handlers
/// you need. By default the right-hand sub-node always wins; the scalar
/// default prefers the right config, then the left, then none.
#[derive(Clone)]
pub struct ConflictResolvers {
    pub directive: DirectiveMergeResolver,
    pub enum_value: EnumValueMergeResolver,
    pub field: FieldMergeResolver,
    pub scalar: ScalarMergeResolver,
    pub union_member: UnionMemberMergeResolver,
}
impl ConflictResolvers {
    pub fn new() -> Self {
        Self {
            directive: Arc::new(right_wins::<ast::query::Directive>),
            enum_value: Arc::new(right_wins::<ast::schema::EnumValue>),
            field: Arc::new(right_wins::<FieldNode>),
            scalar: Arc::new(right_then_left_scalar_config),
            union_member: Arc::new(right_wins::<String>),
        }
    }

    pub fn with_directive_resolver(
        mut self,
        resolver: impl Fn(
            &ast::schema::TypeDefinition,
            &ast::query::Directive,
            &ast::schema::TypeDefinition,
            &ast::query::Directive,
        ) -> ast::query::Directive + Send + Sync + 'static,
    ) -> Self {
        self.directive = Arc::new(resolver);
        self
    }

    pub fn with_enum_value_resolver(
        mut self,
        resolver: impl Fn(
            &ast::schema::TypeDefinition,
            &ast::schema::EnumValue,
            &ast::schema::TypeDefinition,
            &ast::schema::EnumValue,
        ) -> ast::schema::EnumValue + Send + Sync + 'static,
    ) -> Self {
        self.enum_value = Arc::new(resolver);
        self
    }

    pub fn with_field_resolver(
        mut self,
        resolver: impl Fn(
            &ast::schema::TypeDefinition,
            &FieldNode,
            &ast::schema::TypeDefinition,
            &FieldNode,
        ) -> FieldNode + Send + Sync + 'static,
    ) -> Self {
        self.field = Arc::new(resolver);
        self
    }

    pub fn with_scalar_resolver(
        mut self,
        resolver: impl Fn(
            &ast::schema::ScalarType,
            Option<&ScalarConfig>,
            &ast::schema::ScalarType,
            Option<&ScalarConfig>,
        ) -> Option<ScalarConfig> + Send + Sync + 'static,
    ) -> Self {
        self.scalar = Arc::new(resolver);
        self
    }

    pub fn with_union_member_resolver(
        mut self,
        resolver: impl Fn(
            &ast::schema::TypeDefinition,
            &String,
            &ast::schema::TypeDefinition,
            &String,
        ) -> String + Send + Sync + 'static,
    ) -> Self {
        self.union_member = Arc::new(resolver);
        self
    }
}
impl Default for ConflictResolvers {
    fn default() -> Self {
        Self::new()
    }
}
impl std::fmt::Debug for ConflictResolvers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConflictResolvers").finish_non_exhaustive()
    }
}

fn right_wins<N: Clone>(
    _left_container: &ast::schema::TypeDefinition,
    _left: &N,
    _right_container: &ast::schema::TypeDefinition,
    right: &N,
) -> N {
    right.to_owned()
}

fn right_then_left_scalar_config(
    _left: &ast::schema::ScalarType,
    left_config: Option<&ScalarConfig>,
    _right: &ast::schema::ScalarType,
    right_config: Option<&ScalarConfig>,
) -> Option<ScalarConfig> {
    right_config.or(left_config).cloned()
}
