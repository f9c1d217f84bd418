use crate::ast;
use indexmap::IndexMap;
use std::sync::Arc;

/// Converts a runtime value of a custom scalar into its wire representation.
pub type ScalarSerializeFn =
    Arc<dyn Fn(&ast::query::Value) -> ast::query::Value + Send + Sync>;

/// Converts an incoming variable value into the scalar's runtime value.
pub type ScalarParseValueFn =
    Arc<dyn Fn(&ast::query::Value) -> Option<ast::query::Value> + Send + Sync>;

/// Converts an inline literal found in an executable document into the
/// scalar's runtime value.
pub type ScalarParseLiteralFn =
    Arc<dyn Fn(&ast::query::Value) -> Option<ast::query::Value> + Send + Sync>;

/// Out-of-band serialization behavior for a custom scalar.
///
/// Scalar behavior is not part of a schema [Document](ast::schema::Document);
/// it travels alongside the document in a [ScalarConfigMap] and is looked up
/// by scalar name through a [SchemaRegistry](crate::SchemaRegistry).
#[derive(Clone, Default)]
pub struct ScalarConfig {
    pub description: Option<String>,
    pub parse_literal: Option<ScalarParseLiteralFn>,
    pub parse_value: Option<ScalarParseValueFn>,
    pub serialize: Option<ScalarSerializeFn>,
    pub specified_by_url: Option<String>,
}
impl ScalarConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_parse_literal(
        mut self,
        parse_literal: impl Fn(&ast::query::Value) -> Option<ast::query::Value> + Send + Sync + 'static,
    ) -> Self {
        self.parse_literal = Some(Arc::new(parse_literal));
        self
    }

    pub fn with_parse_value(
        mut self,
        parse_value: impl Fn(&ast::query::Value) -> Option<ast::query::Value> + Send + Sync + 'static,
    ) -> Self {
        self.parse_value = Some(Arc::new(parse_value));
        self
    }

    pub fn with_serialize(
        mut self,
        serialize: impl Fn(&ast::query::Value) -> ast::query::Value + Send + Sync + 'static,
    ) -> Self {
        self.serialize = Some(Arc::new(serialize));
        self
    }

    pub fn with_specified_by_url(mut self, url: impl Into<String>) -> Self {
        self.specified_by_url = Some(url.into());
        self
    }

    /// Serializes `value` with the configured function. Scalars without a
    /// `serialize` function pass values through untouched.
    pub fn serialize_value(&self, value: &ast::query::Value) -> ast::query::Value {
        match &self.serialize {
            Some(serialize) => serialize(value),
            None => value.to_owned(),
        }
    }

    pub fn parse_input_value(
        &self,
        value: &ast::query::Value,
    ) -> Option<ast::query::Value> {
        match &self.parse_value {
            Some(parse_value) => parse_value(value),
            None => Some(value.to_owned()),
        }
    }

    pub fn parse_literal_value(
        &self,
        value: &ast::query::Value,
    ) -> Option<ast::query::Value> {
        match &self.parse_literal {
            Some(parse_literal) => parse_literal(value),
            None => Some(value.to_owned()),
        }
    }
}
impl std::fmt::Debug for ScalarConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarConfig")
            .field("description", &self.description)
            .field("parse_literal", &self.parse_literal.is_some())
            .field("parse_value", &self.parse_value.is_some())
            .field("serialize", &self.serialize.is_some())
            .field("specified_by_url", &self.specified_by_url)
            .finish()
    }
}

/// Scalar configs keyed by scalar name.
pub type ScalarConfigMap = IndexMap<String, ScalarConfig>;
