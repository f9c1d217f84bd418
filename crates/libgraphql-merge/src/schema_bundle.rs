use crate::ast;
use crate::PrintableSchema;
use crate::RegistryBuildError;
use crate::ResolverMap;
use crate::ScalarConfig;
use crate::ScalarConfigMap;
use crate::SchemaRegistry;
use inherent::inherent;
use std::sync::OnceLock;

/// A schema document travelling together with everything that lives outside
/// of the document itself: its resolver map, its scalar configs and (built
/// lazily) its [SchemaRegistry].
///
/// Both [MergeEngine](crate::MergeEngine) and [PareEngine](crate::PareEngine)
/// produce a fresh bundle and never mutate the bundles they are given.
#[derive(Clone, Debug)]
pub struct SchemaBundle {
    document: ast::schema::Document,
    registry: OnceLock<Result<SchemaRegistry, RegistryBuildError>>,
    resolvers: ResolverMap,
    scalars: ScalarConfigMap,
}
impl SchemaBundle {
    pub fn new(document: ast::schema::Document) -> Self {
        Self {
            document,
            registry: OnceLock::new(),
            resolvers: ResolverMap::new(),
            scalars: ScalarConfigMap::new(),
        }
    }

    pub fn from_sdl(sdl: &str) -> Result<Self, ast::schema::ParseError> {
        Ok(Self::new(ast::schema::parse(sdl)?))
    }

    pub fn document(&self) -> &ast::schema::Document {
        &self.document
    }

    pub fn into_document(self) -> ast::schema::Document {
        self.document
    }

    /// The [SchemaRegistry] built from this bundle's document and scalar
    /// configs. The build happens at most once per bundle.
    pub fn registry(&self) -> Result<&SchemaRegistry, &RegistryBuildError> {
        self.registry
            .get_or_init(|| SchemaRegistry::build(&self.document, &self.scalars))
            .as_ref()
    }

    pub fn resolvers(&self) -> &ResolverMap {
        &self.resolvers
    }

    pub fn scalars(&self) -> &ScalarConfigMap {
        &self.scalars
    }

    pub fn sdl(&self) -> String {
        ast::schema::print(&self.document)
    }

    pub fn with_resolvers(mut self, resolvers: ResolverMap) -> Self {
        self.resolvers = resolvers;
        self
    }

    pub fn with_scalar_config(
        mut self,
        scalar_name: impl Into<String>,
        config: ScalarConfig,
    ) -> Self {
        self.scalars.insert(scalar_name.into(), config);
        self.registry = OnceLock::new();
        self
    }

    pub fn with_scalars(mut self, scalars: ScalarConfigMap) -> Self {
        self.scalars = scalars;
        self.registry = OnceLock::new();
        self
    }
}

#[inherent]
impl PrintableSchema for SchemaBundle {
    pub fn print_sdl(&self) -> Option<String> {
        Some(self.sdl())
    }
}
