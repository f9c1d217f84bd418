use crate::ast;

/// Names of the root operation types of a schema document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RootOperationTypes {
    pub query: Option<String>,
    pub mutation: Option<String>,
    pub subscription: Option<String>,
}
impl RootOperationTypes {
    /// Reads root operation types from the document's `schema { ... }`
    /// definition, or (when there is none) from object types conventionally
    /// named `Query`, `Mutation` and `Subscription`.
    pub fn from_document(doc: &ast::schema::Document) -> Self {
        use ast::schema::Definition;

        let mut schema_defs = doc.definitions.iter().filter_map(|def| match def {
            Definition::SchemaDefinition(schema_def) => Some(schema_def),
            _ => None,
        }).peekable();

        if schema_defs.peek().is_some() {
            let mut root_types = Self::default();
            for schema_def in schema_defs {
                if schema_def.query.is_some() {
                    root_types.query = schema_def.query.to_owned();
                }
                if schema_def.mutation.is_some() {
                    root_types.mutation = schema_def.mutation.to_owned();
                }
                if schema_def.subscription.is_some() {
                    root_types.subscription = schema_def.subscription.to_owned();
                }
            }
            return root_types;
        }

        let defines_object = |type_name: &str| doc.definitions.iter().any(|def| {
            use ast::schema::TypeDefinition;
            use ast::schema::TypeExtension;
            match def {
                Definition::TypeDefinition(TypeDefinition::Object(obj)) =>
                    obj.name == type_name,
                Definition::TypeExtension(TypeExtension::Object(ext)) =>
                    ext.name == type_name,
                _ => false,
            }
        });

        Self {
            query: defines_object("Query").then(|| "Query".to_string()),
            mutation: defines_object("Mutation").then(|| "Mutation".to_string()),
            subscription: defines_object("Subscription")
                .then(|| "Subscription".to_string()),
        }
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.iter().any(|name| name == type_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [&self.query, &self.mutation, &self.subscription]
            .into_iter()
            .filter_map(|name| name.as_deref())
    }
}
