use crate::ast;
use crate::merge;
use crate::merge_sdl;
use crate::ConflictResolvers;
use crate::InputSide;
use crate::MergeEngine;
use crate::PrintableSchema;
use crate::ResolverMap;
use crate::ScalarConfig;
use crate::SchemaBundle;
use crate::SchemaMergeError;
use crate::SchemaOperation;
use crate::SchemaSource;
use super::test_utils::call;
use super::test_utils::const_resolver;
use super::test_utils::directive_names;
use super::test_utils::member_names;
use super::test_utils::output_field;
use super::test_utils::parse;
use super::test_utils::string_value;
use super::test_utils::type_def;
use super::test_utils::type_names;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaMergeError>;

mod basics {
    use super::*;

    #[test]
    fn merge_with_empty_source_is_identity() -> Result<()> {
        let sdl = concat!(
            "type Query { hello(name: String): String @deprecated }\n",
            "enum Color @flag { RED GREEN }\n",
            "union Thing = Query | Other\n",
            "type Other { a: Int }\n",
            "input Filter { q: String = \"x\" }\n",
            "scalar Date\n",
        );
        let merged = merge(sdl, "")?;

        assert_eq!(merged.document(), &parse(sdl));
        assert_eq!(merged.sdl(), ast::schema::print(&parse(sdl)));

        Ok(())
    }

    #[test]
    fn merge_into_empty_target_takes_source() -> Result<()> {
        let merged = merge("", "type Query { a: Int }")?;

        assert_eq!(type_names(merged.document()), vec!["Query"]);
        assert_eq!(member_names(merged.document(), "Query"), vec!["a"]);

        Ok(())
    }

    #[test]
    fn end_to_end_merge() -> Result<()> {
        let a = "type Query { hello: String } type Foo { a: Int }";
        let b = "type Query { world: String } type Foo { a: Int b: Int }";
        let merged = merge(a, b)?;
        let doc = merged.document();

        assert_eq!(type_names(doc), vec!["Query", "Foo"]);
        assert_eq!(member_names(doc, "Query"), vec!["hello", "world"]);
        assert_eq!(member_names(doc, "Foo"), vec!["a", "b"]);
        assert_eq!(
            output_field(doc, "Foo", "a").map(|f| &f.field_type),
            Some(&ast::schema::Type::NamedType("Int".to_string())),
        );

        Ok(())
    }

    #[test]
    fn new_types_are_appended_in_source_order() -> Result<()> {
        let merged = merge(
            "type Query { a: Int }",
            "type B { b: Int } enum C { X } type Query { q: Int } union D = B",
        )?;

        assert_eq!(type_names(merged.document()), vec!["Query", "B", "C", "D"]);

        Ok(())
    }

    #[test]
    fn merge_sdl_round_trips_through_text() -> Result<()> {
        let sdl = merge_sdl("type Query { a: Int }", "type Query { b: Int }")?;
        let doc = parse(&sdl);

        assert_eq!(member_names(&doc, "Query"), vec!["a", "b"]);

        Ok(())
    }

    #[test]
    fn inputs_are_not_modified() -> Result<()> {
        let target = SchemaBundle::new(parse("type Query { a: Int }"));
        let before = target.sdl();
        let source = SchemaSource::Sdl("type Query { b: Int }".to_string());

        let _merged = MergeEngine::default()
            .merge(&SchemaSource::Bundle(target.clone()), &source)?;

        assert_eq!(target.sdl(), before);

        Ok(())
    }
}

mod right_bias {
    use super::*;

    #[test]
    fn colliding_field_keeps_source_signature() -> Result<()> {
        let merged = merge(
            "type Foo { a: Int, keep: Int }",
            "type Foo { a(arg: ID): String! }",
        )?;
        let doc = merged.document();
        let field = output_field(doc, "Foo", "a").expect("Foo.a exists");

        assert_eq!(
            field.field_type,
            ast::schema::Type::NonNullType(Box::new(
                ast::schema::Type::NamedType("String".to_string()),
            )),
        );
        assert_eq!(field.arguments.len(), 1);
        assert_eq!(field.arguments[0].name, "arg");
        assert_eq!(member_names(doc, "Foo"), vec!["a", "keep"]);

        Ok(())
    }

    #[test]
    fn colliding_input_field_keeps_source_signature() -> Result<()> {
        let merged = merge(
            "input Filter { q: String, limit: Int }",
            "input Filter { q: [String!]! }",
        )?;

        let Some(ast::schema::TypeDefinition::InputObject(filter)) =
            type_def(merged.document(), "Filter") else {
            panic!("Filter is an input object");
        };
        assert_eq!(filter.fields.len(), 2);
        assert!(matches!(filter.fields[0].value_type, ast::schema::Type::NonNullType(_)));

        Ok(())
    }

    #[test]
    fn colliding_directive_keeps_source_arguments() -> Result<()> {
        let merged = merge(
            "type Foo @cache(ttl: 10) @a { x: Int }",
            "type Foo @cache(ttl: 20) { x: Int }",
        )?;

        let Some(def) = type_def(merged.document(), "Foo") else {
            panic!("Foo exists");
        };
        let directives = crate::type_collections::directives(def);
        assert_eq!(directives.len(), 2);
        assert_eq!(directives[0].name, "cache");
        assert_eq!(
            directives[0].arguments,
            vec![("ttl".to_string(), ast::query::Value::Int(20.into()))],
        );

        Ok(())
    }

    #[test]
    fn enum_values_and_union_members_are_merged() -> Result<()> {
        let merged = merge(
            "enum Color { RED GREEN } union U = A | B",
            "enum Color { GREEN @deprecated BLUE } union U = B | C",
        )?;
        let doc = merged.document();

        assert_eq!(member_names(doc, "Color"), vec!["RED", "GREEN", "BLUE"]);
        assert_eq!(member_names(doc, "U"), vec!["A", "B", "C"]);

        let Some(ast::schema::TypeDefinition::Enum(color)) = type_def(doc, "Color") else {
            panic!("Color is an enum");
        };
        assert_eq!(color.values[1].directives.len(), 1);

        Ok(())
    }

    #[test]
    fn interface_fields_are_merged() -> Result<()> {
        let merged = merge(
            "interface Node { id: ID! }",
            "interface Node { createdAt: String }",
        )?;

        assert_eq!(member_names(merged.document(), "Node"), vec!["id", "createdAt"]);

        Ok(())
    }
}

mod extensions {
    use super::*;

    #[test]
    fn source_extension_folds_into_base_definition() -> Result<()> {
        let merged = merge(
            "type Foo @a { x: Int }",
            "extend type Foo @b { y: Int }",
        )?;
        let doc = merged.document();

        assert_eq!(doc.definitions.len(), 1);
        assert!(matches!(
            doc.definitions[0],
            ast::schema::Definition::TypeDefinition(ast::schema::TypeDefinition::Object(_)),
        ));
        assert_eq!(member_names(doc, "Foo"), vec!["x", "y"]);
        assert_eq!(directive_names(doc, "Foo"), vec!["a", "b"]);

        Ok(())
    }

    #[test]
    fn unmatched_source_extension_is_appended_as_definition() -> Result<()> {
        let merged = merge("type Query { a: Int }", "extend enum Color { RED }")?;
        let doc = merged.document();

        assert!(matches!(
            doc.definitions[1],
            ast::schema::Definition::TypeDefinition(ast::schema::TypeDefinition::Enum(_)),
        ));
        assert_eq!(member_names(doc, "Color"), vec!["RED"]);

        Ok(())
    }

    #[test]
    fn target_extension_absorbs_source_definition() -> Result<()> {
        let merged = merge(
            "extend type Foo { a: Int }",
            "type Foo { b: Int }",
        )?;

        assert_eq!(member_names(merged.document(), "Foo"), vec!["a", "b"]);

        Ok(())
    }

    #[test]
    fn collision_with_a_target_extension_field_is_resolved() -> Result<()> {
        let merged = merge(
            "type Foo @a { a: Int } extend type Foo implements Node @b { b: Int }",
            "type Foo { b: String }",
        )?;
        let doc = merged.document();

        assert_eq!(doc.definitions.len(), 1);
        assert_eq!(member_names(doc, "Foo"), vec!["a", "b"]);
        assert_eq!(directive_names(doc, "Foo"), vec!["a", "b"]);
        assert_eq!(
            output_field(doc, "Foo", "b").map(|f| &f.field_type),
            Some(&ast::schema::Type::NamedType("String".to_string())),
        );
        let Some(ast::schema::TypeDefinition::Object(foo)) = type_def(doc, "Foo") else {
            panic!("Expected Foo to be an object type");
        };
        assert_eq!(foo.implements_interfaces, vec!["Node".to_string()]);

        Ok(())
    }

    #[test]
    fn target_extension_of_another_kind_is_left_in_place() -> Result<()> {
        let merged = merge(
            "type Foo { a: Int } extend enum Foo { B }",
            "type Foo { c: Int }",
        )?;
        let doc = merged.document();

        assert_eq!(doc.definitions.len(), 2);
        assert_eq!(member_names(doc, "Foo"), vec!["a", "c"]);
        assert!(matches!(
            doc.definitions[1],
            ast::schema::Definition::TypeExtension(ast::schema::TypeExtension::Enum(_)),
        ));

        Ok(())
    }

    #[test]
    fn target_extensions_of_untouched_types_keep_their_form() -> Result<()> {
        let merged = merge(
            "type Foo { a: Int } extend type Foo { b: Int }",
            "type Bar { x: Int }",
        )?;

        assert_eq!(merged.document().definitions.len(), 3);
        assert!(matches!(
            merged.document().definitions[1],
            ast::schema::Definition::TypeExtension(_),
        ));

        Ok(())
    }

    #[test]
    fn every_extension_kind_folds() -> Result<()> {
        let merged = merge(
            concat!(
                "type O { a: Int } interface I { a: Int } input In { a: Int }\n",
                "enum E { A } union U = O scalar S\n",
            ),
            concat!(
                "extend type O { b: Int } extend interface I { b: Int }\n",
                "extend input In { b: Int } extend enum E { B }\n",
                "extend union U = P extend scalar S @x\n",
            ),
        )?;
        let doc = merged.document();

        assert_eq!(member_names(doc, "O"), vec!["a", "b"]);
        assert_eq!(member_names(doc, "I"), vec!["a", "b"]);
        assert_eq!(member_names(doc, "In"), vec!["a", "b"]);
        assert_eq!(member_names(doc, "E"), vec!["A", "B"]);
        assert_eq!(member_names(doc, "U"), vec!["O", "P"]);
        assert_eq!(directive_names(doc, "S"), vec!["x"]);
        assert_eq!(doc.definitions.len(), 6);

        Ok(())
    }
}

mod custom_resolvers {
    use super::*;
    use crate::FieldNode;
    use std::sync::Mutex;

    #[test]
    fn field_resolver_called_once_per_collision() -> Result<()> {
        let calls: Arc<Mutex<Vec<(String, String, String, String)>>> =
            Arc::new(Mutex::new(vec![]));
        let recorded = calls.clone();
        let resolvers = ConflictResolvers::default().with_field_resolver(
            move |left_type, left_field, right_type, right_field| {
                recorded.lock().unwrap().push((
                    ast::schema::type_def_name(left_type).to_string(),
                    left_field.name().to_string(),
                    ast::schema::type_def_name(right_type).to_string(),
                    right_field.name().to_string(),
                ));
                left_field.to_owned()
            },
        );

        let merged = MergeEngine::new(resolvers).merge(
            &"type Foo { a: Int b: Int c: Int }".into(),
            &"type Foo { a: String b: String d: Int } type Bar { a: Int }".into(),
        )?;

        let calls = calls.lock().unwrap();
        assert_eq!(*calls, vec![
            ("Foo".to_string(), "a".to_string(), "Foo".to_string(), "a".to_string()),
            ("Foo".to_string(), "b".to_string(), "Foo".to_string(), "b".to_string()),
        ]);

        // The resolver chose the left-hand fields.
        let doc = merged.document();
        assert_eq!(member_names(doc, "Foo"), vec!["a", "b", "c", "d"]);
        assert_eq!(
            output_field(doc, "Foo", "a").map(|f| &f.field_type),
            Some(&ast::schema::Type::NamedType("Int".to_string())),
        );

        Ok(())
    }

    #[test]
    fn field_resolver_sees_both_sides() -> Result<()> {
        let resolvers = ConflictResolvers::default().with_field_resolver(
            |_, left_field, _, right_field| match (left_field, right_field) {
                (FieldNode::Output(left), FieldNode::Output(right)) => {
                    let mut field = right.to_owned();
                    field.directives.extend(left.directives.iter().cloned());
                    FieldNode::Output(field)
                },
                (_, right) => right.to_owned(),
            },
        );

        let merged = MergeEngine::new(resolvers).merge(
            &"type Foo { a: Int @left }".into(),
            &"type Foo { a: String @right }".into(),
        )?;
        let field = output_field(merged.document(), "Foo", "a").expect("Foo.a exists");
        let names: Vec<&str> = field.directives.iter().map(|d| d.name.as_str()).collect();

        assert_eq!(names, vec!["right", "left"]);

        Ok(())
    }

    #[test]
    fn field_resolver_returning_wrong_kind_falls_back_to_source() -> Result<()> {
        let resolvers = ConflictResolvers::default().with_field_resolver(
            |_, left, _, right| match left {
                FieldNode::Output(field) => FieldNode::Input(ast::schema::InputValue {
                    position: field.position,
                    description: None,
                    name: field.name.to_owned(),
                    value_type: field.field_type.to_owned(),
                    default_value: None,
                    directives: vec![],
                }),
                FieldNode::Input(_) => right.to_owned(),
            },
        );

        let merged = MergeEngine::new(resolvers)
            .merge(&"type Foo { a: Int }".into(), &"type Foo { a: String }".into())?;

        assert_eq!(
            output_field(merged.document(), "Foo", "a").map(|f| &f.field_type),
            Some(&ast::schema::Type::NamedType("String".to_string())),
        );

        Ok(())
    }

    #[test]
    fn directive_enum_and_union_resolvers_can_keep_left() -> Result<()> {
        let resolvers = ConflictResolvers::default()
            .with_directive_resolver(|_, left, _, _| left.to_owned())
            .with_enum_value_resolver(|_, left, _, _| left.to_owned())
            .with_union_member_resolver(|_, left, _, _| left.to_owned());

        let merged = MergeEngine::new(resolvers).merge(
            &"type Foo @cache(ttl: 1) { a: Int } enum E { A @old } union U = X".into(),
            &"type Foo @cache(ttl: 2) { a: Int } enum E { A @new } union U = X | Y".into(),
        )?;
        let doc = merged.document();

        let Some(foo) = type_def(doc, "Foo") else {
            panic!("Foo exists");
        };
        assert_eq!(
            crate::type_collections::directives(foo)[0].arguments,
            vec![("ttl".to_string(), ast::query::Value::Int(1.into()))],
        );

        let Some(ast::schema::TypeDefinition::Enum(e)) = type_def(doc, "E") else {
            panic!("E is an enum");
        };
        assert_eq!(e.values[0].directives[0].name, "old");
        assert_eq!(member_names(doc, "U"), vec!["X", "Y"]);

        Ok(())
    }

    #[test]
    fn overriding_one_resolver_keeps_other_defaults() -> Result<()> {
        let resolvers = ConflictResolvers::default()
            .with_enum_value_resolver(|_, left, _, _| left.to_owned());

        let merged = MergeEngine::new(resolvers).merge(
            &"type Foo { a: Int }".into(),
            &"type Foo { a: String }".into(),
        )?;

        assert_eq!(
            output_field(merged.document(), "Foo", "a").map(|f| &f.field_type),
            Some(&ast::schema::Type::NamedType("String".to_string())),
        );

        Ok(())
    }
}

mod kinds {
    use super::*;

    #[test]
    fn kind_mismatch_only_merges_directives() -> Result<()> {
        let merged = merge(
            "type Foo { a: Int }",
            "enum Foo @tagged { A B }",
        )?;
        let doc = merged.document();

        assert!(matches!(type_def(doc, "Foo"), Some(ast::schema::TypeDefinition::Object(_))));
        assert_eq!(member_names(doc, "Foo"), vec!["a"]);
        assert_eq!(directive_names(doc, "Foo"), vec!["tagged"]);

        Ok(())
    }

    #[test]
    fn object_and_input_fields_do_not_mix() -> Result<()> {
        let merged = merge("type Foo { a: Int }", "input Foo { b: Int }")?;

        assert_eq!(member_names(merged.document(), "Foo"), vec!["a"]);

        Ok(())
    }

    #[test]
    fn directive_definitions_are_added_or_replaced() -> Result<()> {
        let merged = merge(
            "directive @a on FIELD_DEFINITION type Query { x: Int }",
            "directive @a(reason: String) on OBJECT directive @b on ENUM",
        )?;
        let directive_defs: Vec<&ast::schema::DirectiveDefinition> = merged.document()
            .definitions
            .iter()
            .filter_map(|def| match def {
                ast::schema::Definition::DirectiveDefinition(d) => Some(d),
                _ => None,
            })
            .collect();

        assert_eq!(directive_defs.len(), 2);
        assert_eq!(directive_defs[0].name, "a");
        assert_eq!(directive_defs[0].arguments.len(), 1);
        assert_eq!(directive_defs[1].name, "b");

        Ok(())
    }

    #[test]
    fn directive_and_type_namespaces_are_separate() -> Result<()> {
        let merged = merge("type foo { a: Int }", "directive @foo on OBJECT")?;

        assert_eq!(merged.document().definitions.len(), 2);

        Ok(())
    }

    #[test]
    fn schema_definitions_combine_root_types() -> Result<()> {
        let merged = merge(
            "schema { query: Q } type Q { a: Int }",
            "schema { mutation: M } type M { b: Int }",
        )?;
        let schema_defs: Vec<&ast::schema::SchemaDefinition> = merged.document()
            .definitions
            .iter()
            .filter_map(|def| match def {
                ast::schema::Definition::SchemaDefinition(s) => Some(s),
                _ => None,
            })
            .collect();

        assert_eq!(schema_defs.len(), 1);
        assert_eq!(schema_defs[0].query.as_deref(), Some("Q"));
        assert_eq!(schema_defs[0].mutation.as_deref(), Some("M"));

        Ok(())
    }
}

mod scalars {
    use super::*;

    fn described(description: &str) -> ScalarConfig {
        ScalarConfig::new().with_description(description)
    }

    fn merged_description(merged: &SchemaBundle, scalar_name: &str) -> Option<String> {
        merged.scalars()
            .get(scalar_name)
            .and_then(|config| config.description.to_owned())
    }

    #[test]
    fn right_config_wins_by_default() -> Result<()> {
        let left = SchemaBundle::new(parse("scalar Date"))
            .with_scalar_config("Date", described("left"));
        let right = SchemaBundle::new(parse("scalar Date @right"))
            .with_scalar_config("Date", described("right"));

        let merged = merge(left, right)?;

        assert_eq!(merged_description(&merged, "Date").as_deref(), Some("right"));
        assert_eq!(directive_names(merged.document(), "Date"), vec!["right"]);

        Ok(())
    }

    #[test]
    fn left_config_is_the_fallback() -> Result<()> {
        let left = SchemaBundle::new(parse("scalar Date"))
            .with_scalar_config("Date", described("left"));

        let merged = merge(left, "scalar Date")?;

        assert_eq!(merged_description(&merged, "Date").as_deref(), Some("left"));

        Ok(())
    }

    #[test]
    fn no_config_on_either_side_yields_none() -> Result<()> {
        let merged = merge("scalar Date", "scalar Date")?;

        assert!(merged.scalars().is_empty());

        Ok(())
    }

    #[test]
    fn configs_of_non_colliding_scalars_are_carried() -> Result<()> {
        let left = SchemaBundle::new(parse("scalar A"))
            .with_scalar_config("A", described("a"));
        let right = SchemaBundle::new(parse("scalar B"))
            .with_scalar_config("B", described("b"));

        let merged = merge(left, right)?;

        assert_eq!(merged.scalars().keys().collect::<Vec<_>>(), vec!["A", "B"]);
        assert!(merged.registry().is_ok());

        Ok(())
    }

    #[test]
    fn unbuildable_side_is_treated_as_absent() -> Result<()> {
        let left = SchemaBundle::new(parse("scalar Date"))
            .with_scalar_config("Date", described("left"));
        // `Missing` is never defined, so no registry can be built for the
        // right-hand side.
        let right = SchemaBundle::new(parse("scalar Date type Query { d: Missing }"))
            .with_scalar_config("Date", described("right"));
        assert!(right.registry().is_err());

        let merged = merge(left, right)?;

        assert_eq!(merged_description(&merged, "Date").as_deref(), Some("left"));

        Ok(())
    }

    #[test]
    fn config_held_only_by_an_unbuildable_side_is_kept() -> Result<()> {
        let left = SchemaBundle::new(parse("scalar Date type Query { d: Missing }"))
            .with_scalar_config("Date", described("left"));
        assert!(left.registry().is_err());

        let merged = merge(left, "scalar Date")?;

        assert_eq!(merged_description(&merged, "Date").as_deref(), Some("left"));

        Ok(())
    }

    #[test]
    fn unbuildable_side_keeps_its_config_when_the_resolver_yields_none() -> Result<()> {
        let resolvers = ConflictResolvers::default()
            .with_scalar_resolver(|_, _, _, _| None);
        let left = SchemaBundle::new(parse("scalar Date"));
        let right = SchemaBundle::new(parse("scalar Date type Query { d: Missing }"))
            .with_scalar_config("Date", described("right"));

        let merged = MergeEngine::new(resolvers).merge(&left.into(), &right.into())?;

        assert_eq!(merged_description(&merged, "Date").as_deref(), Some("right"));

        Ok(())
    }

    #[test]
    fn scalar_resolver_receives_both_configs() -> Result<()> {
        let resolvers = ConflictResolvers::default().with_scalar_resolver(
            |left_def, left_config, right_def, right_config| {
                assert_eq!(left_def.name, "Date");
                assert_eq!(right_def.name, "Date");
                let left = left_config.and_then(|c| c.description.to_owned())?;
                let right = right_config.and_then(|c| c.description.to_owned())?;
                Some(ScalarConfig::new().with_description(format!("{left}+{right}")))
            },
        );
        let left = SchemaBundle::new(parse("scalar Date"))
            .with_scalar_config("Date", described("l"));
        let right = SchemaBundle::new(parse("scalar Date"))
            .with_scalar_config("Date", described("r"));

        let merged = MergeEngine::new(resolvers).merge(&left.into(), &right.into())?;

        assert_eq!(merged_description(&merged, "Date").as_deref(), Some("l+r"));

        Ok(())
    }

    #[test]
    fn scalar_resolver_may_drop_the_config() -> Result<()> {
        let resolvers = ConflictResolvers::default()
            .with_scalar_resolver(|_, _, _, _| None);
        let left = SchemaBundle::new(parse("scalar Date"))
            .with_scalar_config("Date", described("l"));
        let right = SchemaBundle::new(parse("scalar Date"))
            .with_scalar_config("Date", described("r"));

        let merged = MergeEngine::new(resolvers).merge(&left.into(), &right.into())?;

        assert!(merged.scalars().get("Date").is_none());

        Ok(())
    }

    #[test]
    fn merged_config_keeps_its_behavior() -> Result<()> {
        let right = SchemaBundle::new(parse("scalar Upper")).with_scalar_config(
            "Upper",
            ScalarConfig::new().with_serialize(|value| match value {
                ast::query::Value::String(s) => ast::query::Value::String(s.to_uppercase()),
                other => other.to_owned(),
            }),
        );

        let merged = merge("scalar Upper", right)?;
        let config = merged.scalars().get("Upper").expect("Upper has a config");

        assert_eq!(config.serialize_value(&string_value("abc")), string_value("ABC"));

        Ok(())
    }
}

mod resolver_maps {
    use super::*;

    #[test]
    fn resolver_maps_are_deep_merged_right_winning() -> Result<()> {
        let mut left_resolvers = ResolverMap::new();
        left_resolvers.insert_field_resolver("Query", "hello", const_resolver("left hello"));
        left_resolvers.insert_field_resolver("Query", "shared", const_resolver("left shared"));
        let mut right_resolvers = ResolverMap::new();
        right_resolvers.insert_field_resolver("Query", "world", const_resolver("right world"));
        right_resolvers.insert_field_resolver("Query", "shared", const_resolver("right shared"));

        let merged = merge(
            SchemaBundle::new(parse("type Query { hello: String shared: String }"))
                .with_resolvers(left_resolvers),
            SchemaBundle::new(parse("type Query { world: String shared: String }"))
                .with_resolvers(right_resolvers),
        )?;
        let root_types = crate::RootOperationTypes::from_document(merged.document());
        let resolvers = merged.resolvers();

        let resolve = |field: &str| resolvers
            .field_resolver("Query", field, &root_types)
            .map(call);
        assert_eq!(resolve("hello"), Some(string_value("left hello")));
        assert_eq!(resolve("world"), Some(string_value("right world")));
        assert_eq!(resolve("shared"), Some(string_value("right shared")));

        Ok(())
    }

    #[test]
    fn orphaned_resolvers_are_dropped() -> Result<()> {
        let mut left_resolvers = ResolverMap::new();
        left_resolvers.insert_field_resolver("Query", "hello", const_resolver("hello"));
        left_resolvers.insert_field_resolver("Query", "gone", const_resolver("gone"));
        left_resolvers.insert_field_resolver("Ghost", "a", const_resolver("a"));

        let merged = merge(
            SchemaBundle::new(parse("type Query { hello: String }"))
                .with_resolvers(left_resolvers),
            "type Query { world: String }",
        )?;

        assert!(merged.resolvers().has_field_resolver("Query", "hello"));
        assert!(!merged.resolvers().has_field_resolver("Query", "gone"));
        assert!(merged.resolvers().entries().get("Ghost").is_none());

        Ok(())
    }
}

mod inputs {
    use super::*;

    #[derive(Debug)]
    struct Unprintable;
    impl PrintableSchema for Unprintable {
        fn print_sdl(&self) -> Option<String> {
            None
        }
    }

    #[derive(Debug)]
    struct Printable(&'static str);
    impl PrintableSchema for Printable {
        fn print_sdl(&self) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    #[test]
    fn unprintable_source_is_invalid_input() {
        let source = SchemaSource::Built(Arc::new(Unprintable));
        let result = MergeEngine::default().merge(&"type Query { a: Int }".into(), &source);

        assert!(matches!(
            result,
            Err(SchemaMergeError::InvalidInput {
                operation: SchemaOperation::Merge,
                side: InputSide::Source,
                ..
            }),
        ));
    }

    #[test]
    fn unprintable_target_is_invalid_input() {
        let target = SchemaSource::Built(Arc::new(Unprintable));
        let result = MergeEngine::default().merge(&target, &"type Query { a: Int }".into());

        assert!(matches!(
            result,
            Err(SchemaMergeError::InvalidInput {
                side: InputSide::Target,
                ..
            }),
        ));
    }

    #[test]
    fn built_schema_is_printed_then_merged() -> Result<()> {
        let target = SchemaSource::Built(Arc::new(Printable("type Query { a: Int }")));
        let merged = MergeEngine::default().merge(&target, &"type Query { b: Int }".into())?;

        assert_eq!(member_names(merged.document(), "Query"), vec!["a", "b"]);

        Ok(())
    }

    #[test]
    fn unparsable_target_is_reported() {
        let result = merge_sdl("type Query {", "type Query { a: Int }");

        assert!(matches!(
            result,
            Err(SchemaMergeError::UnparsableDocument {
                operation: SchemaOperation::Merge,
                side: InputSide::Target,
                ..
            }),
        ));
    }

    #[test]
    fn document_inputs_are_accepted() -> Result<()> {
        let merged = merge(parse("type Query { a: Int }"), parse("type Query { b: Int }"))?;

        assert_eq!(member_names(merged.document(), "Query"), vec!["a", "b"]);

        Ok(())
    }
}

mod many {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn merge_all_folds_in_order() -> Result<()> {
        let merged = MergeEngine::default().merge_all(&[
            "type Query { a: Int }".into(),
            "type Query { b: Int } type Foo { x: Int }".into(),
            "extend type Foo { y: Int }".into(),
        ])?;

        assert_eq!(type_names(merged.document()), vec!["Query", "Foo"]);
        assert_eq!(member_names(merged.document(), "Query"), vec!["a", "b"]);
        assert_eq!(member_names(merged.document(), "Foo"), vec!["x", "y"]);

        Ok(())
    }

    #[test]
    fn merge_all_of_nothing_is_empty() -> Result<()> {
        let merged = MergeEngine::default().merge_all(&[])?;

        assert!(merged.document().definitions.is_empty());

        Ok(())
    }

    #[test]
    fn independent_merges_run_concurrently() {
        let engine = MergeEngine::default();
        let target: SchemaSource = SchemaBundle::new(parse("type Query { a: Int }"))
            .with_scalar_config("Date", ScalarConfig::new())
            .into();

        let outputs: Vec<String> = (0..32).into_par_iter()
            .map(|i| {
                let source: SchemaSource = format!("type Query {{ f{i}: Int }}").into();
                engine.merge(&target.clone(), &source)
                    .map(|merged| merged.sdl())
                    .expect("merge succeeds")
            })
            .collect();

        for (i, sdl) in outputs.iter().enumerate() {
            assert_eq!(member_names(&parse(sdl), "Query"), vec!["a".to_string(), format!("f{i}")]);
        }
    }
}
