use crate::ast;
use crate::InputSide;
use crate::ResolverMap;
use crate::ScalarConfigMap;
use crate::SchemaBundle;
use crate::SchemaMergeError;
use crate::SchemaOperation;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaMergeError>;

/// Anything that can print itself as schema-definition-language text, such
/// as an already-built executable schema.
pub trait PrintableSchema: std::fmt::Debug + Send + Sync {
    /// Returns `None` when no text can be produced.
    fn print_sdl(&self) -> Option<String>;
}

/// Every form of "a schema" accepted on either side of a merge or pare.
///
/// Whatever the form, it is normalized to schema-definition-language text
/// before any tree operation begins.
#[derive(Clone, Debug)]
pub enum SchemaSource {
    Built(Arc<dyn PrintableSchema>),
    Bundle(SchemaBundle),
    Document(ast::schema::Document),
    Sdl(String),
}
impl SchemaSource {
    fn describe(&self) -> String {
        match self {
            Self::Built(built) => format!("built schema {built:?}"),
            Self::Bundle(_) => "schema bundle".to_string(),
            Self::Document(doc) =>
                format!("document with {} definitions", doc.definitions.len()),
            Self::Sdl(sdl) => format!("{} bytes of schema text", sdl.len()),
        }
    }

    /// Parses this source into a fresh document.
    pub fn to_document(
        &self,
        operation: SchemaOperation,
        side: InputSide,
    ) -> Result<ast::schema::Document> {
        let sdl = self.to_sdl(operation, side)?;
        ast::schema::parse(sdl.as_str())
            .map_err(|err| SchemaMergeError::UnparsableDocument {
                operation,
                side,
                err: err.to_string(),
            })
    }

    /// Normalizes this source to schema-definition-language text.
    pub fn to_sdl(
        &self,
        operation: SchemaOperation,
        side: InputSide,
    ) -> Result<String> {
        match self {
            Self::Built(built) => built.print_sdl().ok_or_else(|| {
                let received = self.describe();
                log::debug!("`{operation}` could not print its {side} input: {received}");
                SchemaMergeError::InvalidInput {
                    operation,
                    side,
                    received,
                }
            }),
            Self::Bundle(bundle) => Ok(bundle.sdl()),
            Self::Document(doc) => Ok(ast::schema::print(doc)),
            Self::Sdl(sdl) => Ok(sdl.to_owned()),
        }
    }

    pub fn resolvers(&self) -> ResolverMap {
        match self {
            Self::Bundle(bundle) => bundle.resolvers().to_owned(),
            _ => ResolverMap::new(),
        }
    }

    pub fn scalars(&self) -> ScalarConfigMap {
        match self {
            Self::Bundle(bundle) => bundle.scalars().to_owned(),
            _ => ScalarConfigMap::new(),
        }
    }
}

impl From<&str> for SchemaSource {
    fn from(sdl: &str) -> Self {
        Self::Sdl(sdl.to_string())
    }
}

impl From<String> for SchemaSource {
    fn from(sdl: String) -> Self {
        Self::Sdl(sdl)
    }
}

impl From<ast::schema::Document> for SchemaSource {
    fn from(doc: ast::schema::Document) -> Self {
        Self::Document(doc)
    }
}

impl From<SchemaBundle> for SchemaSource {
    fn from(bundle: SchemaBundle) -> Self {
        Self::Bundle(bundle)
    }
}

impl From<Arc<dyn PrintableSchema>> for SchemaSource {
    fn from(built: Arc<dyn PrintableSchema>) -> Self {
        Self::Built(built)
    }
}
