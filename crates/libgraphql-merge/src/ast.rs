pub mod query {
    pub type Directive = graphql_parser::query::Directive<'static, String>;
    pub type Number = graphql_parser::query::Number;
    pub type Value = graphql_parser::query::Value<'static, String>;
}

pub mod schema {
    pub use graphql_parser::schema::ParseError;

    pub type Definition = graphql_parser::schema::Definition<'static, String>;
    pub type DirectiveDefinition = graphql_parser::schema::DirectiveDefinition<'static, String>;
    pub type Document = graphql_parser::schema::Document<'static, String>;
    pub type EnumType = graphql_parser::schema::EnumType<'static, String>;
    pub type EnumTypeExtension = graphql_parser::schema::EnumTypeExtension<'static, String>;
    pub type EnumValue = graphql_parser::schema::EnumValue<'static, String>;
    pub type Field = graphql_parser::schema::Field<'static, String>;
    pub type InputObjectType = graphql_parser::schema::InputObjectType<'static, String>;
    pub type InputObjectTypeExtension = graphql_parser::schema::InputObjectTypeExtension<'static, String>;
    pub type InputValue = graphql_parser::schema::InputValue<'static, String>;
    pub type InterfaceType = graphql_parser::schema::InterfaceType<'static, String>;
    pub type InterfaceTypeExtension = graphql_parser::schema::InterfaceTypeExtension<'static, String>;
    pub type ObjectType = graphql_parser::schema::ObjectType<'static, String>;
    pub type ObjectTypeExtension = graphql_parser::schema::ObjectTypeExtension<'static, String>;
    pub type ScalarType = graphql_parser::schema::ScalarType<'static, String>;
    pub type ScalarTypeExtension = graphql_parser::schema::ScalarTypeExtension<'static, String>;
    pub type SchemaDefinition = graphql_parser::schema::SchemaDefinition<'static, String>;
    pub type Type = graphql_parser::schema::Type<'static, String>;
    pub type TypeDefinition = graphql_parser::schema::TypeDefinition<'static, String>;
    pub type TypeExtension = graphql_parser::schema::TypeExtension<'static, String>;
    pub type UnionType = graphql_parser::schema::UnionType<'static, String>;
    pub type UnionTypeExtension = graphql_parser::schema::UnionTypeExtension<'static, String>;

    /// Parses schema-definition-language text into a [Document].
    ///
    /// Text that holds nothing but whitespace parses to an empty document.
    pub fn parse(content: &str) -> Result<Document, ParseError> {
        if content.trim().is_empty() {
            return Ok(empty_document());
        }
        Ok(graphql_parser::schema::parse_schema::<String>(content)?.into_static())
    }

    /// Prints a [Document] back to schema-definition-language text.
    pub fn print(doc: &Document) -> String {
        doc.to_string()
    }

    pub fn empty_document() -> Document {
        Document {
            definitions: vec![],
        }
    }

    /// The name of a top-level type definition or extension.
    pub fn type_def_name(def: &TypeDefinition) -> &str {
        match def {
            TypeDefinition::Enum(t) => t.name.as_str(),
            TypeDefinition::InputObject(t) => t.name.as_str(),
            TypeDefinition::Interface(t) => t.name.as_str(),
            TypeDefinition::Object(t) => t.name.as_str(),
            TypeDefinition::Scalar(t) => t.name.as_str(),
            TypeDefinition::Union(t) => t.name.as_str(),
        }
    }

    pub fn type_ext_name(ext: &TypeExtension) -> &str {
        match ext {
            TypeExtension::Enum(t) => t.name.as_str(),
            TypeExtension::InputObject(t) => t.name.as_str(),
            TypeExtension::Interface(t) => t.name.as_str(),
            TypeExtension::Object(t) => t.name.as_str(),
            TypeExtension::Scalar(t) => t.name.as_str(),
            TypeExtension::Union(t) => t.name.as_str(),
        }
    }

    /// A human-readable label for the kind of a [TypeDefinition].
    pub fn type_def_kind(def: &TypeDefinition) -> &'static str {
        match def {
            TypeDefinition::Enum(_) => "EnumTypeDefinition",
            TypeDefinition::InputObject(_) => "InputObjectTypeDefinition",
            TypeDefinition::Interface(_) => "InterfaceTypeDefinition",
            TypeDefinition::Object(_) => "ObjectTypeDefinition",
            TypeDefinition::Scalar(_) => "ScalarTypeDefinition",
            TypeDefinition::Union(_) => "UnionTypeDefinition",
        }
    }
}
