//! Merge and pare GraphQL schema documents.
//!
//! [MergeEngine] combines independently authored schema documents into one,
//! settling same-named collisions through pluggable [ConflictResolvers].
//! [PareEngine] performs the inverse, subtracting one document's definitions
//! from another. Both keep the structures that live outside of a document
//! (its [ResolverMap] and its [ScalarConfigMap]) consistent with every change
//! they make to the document.
//!
//! ```
//! let merged = libgraphql_merge::merge(
//!     "type Query { hello: String }",
//!     "type Query { world: String }",
//! ).unwrap();
//!
//! let pared = libgraphql_merge::pare(merged, "type Query { world: String }").unwrap();
//! assert!(pared.sdl().contains("hello"));
//! assert!(!pared.sdl().contains("world"));
//! ```

pub mod ast;
mod conflict_resolvers;
mod definition_arena;
mod merge_engine;
mod node_normalizer;
mod pare_engine;
mod resolver_map;
mod root_operation_types;
mod scalar_config;
mod schema_bundle;
mod schema_merge_error;
mod schema_registry;
mod schema_source;
mod sibling_index;
mod type_collections;

pub use conflict_resolvers::ConflictResolvers;
pub use conflict_resolvers::DirectiveMergeResolver;
pub use conflict_resolvers::EnumValueMergeResolver;
pub use conflict_resolvers::FieldMergeResolver;
pub use conflict_resolvers::FieldNode;
pub use conflict_resolvers::ScalarMergeResolver;
pub use conflict_resolvers::UnionMemberMergeResolver;
pub use merge_engine::merge;
pub use merge_engine::merge_sdl;
pub use merge_engine::MergeEngine;
pub use node_normalizer::NodeNormalizer;
pub use pare_engine::pare;
pub use pare_engine::pare_sdl;
pub use pare_engine::PareEngine;
pub use resolver_map::ResolverArgs;
pub use resolver_map::ResolverChain;
pub use resolver_map::ResolverEntry;
pub use resolver_map::ResolverFn;
pub use resolver_map::ResolverMap;
pub use root_operation_types::RootOperationTypes;
pub use scalar_config::ScalarConfig;
pub use scalar_config::ScalarConfigMap;
pub use scalar_config::ScalarParseLiteralFn;
pub use scalar_config::ScalarParseValueFn;
pub use scalar_config::ScalarSerializeFn;
pub use schema_bundle::SchemaBundle;
pub use schema_merge_error::InputSide;
pub use schema_merge_error::SchemaMergeError;
pub use schema_merge_error::SchemaOperation;
pub use schema_registry::RegistryBuildError;
pub use schema_registry::ScalarMergeUnavailable;
pub use schema_registry::SchemaRegistry;
pub use schema_source::PrintableSchema;
pub use schema_source::SchemaSource;
pub use sibling_index::find_sibling;
pub use sibling_index::NamedNode;
pub use sibling_index::SiblingIndex;

#[cfg(test)]
mod tests;
