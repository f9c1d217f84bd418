use crate::ast;
use crate::merge;
use crate::pare;
use super::test_utils::member_names;
use super::test_utils::output_field;
use super::test_utils::parse;
use super::test_utils::type_names;
use proptest::prelude::*;
use std::collections::BTreeMap;

/// Object type name -> field name -> named field type.
type ObjectTypes = BTreeMap<String, BTreeMap<String, &'static str>>;

fn arb_object_types() -> impl Strategy<Value = ObjectTypes> {
    let field_type = prop::sample::select(vec!["Boolean", "Float", "ID", "Int", "String"]);
    let fields = prop::collection::btree_map("f_[a-z]{1,4}", field_type, 1..5);
    prop::collection::btree_map("T[a-z]{1,3}", fields, 0..5)
}

fn render(types: &ObjectTypes) -> String {
    types.iter().map(|(type_name, fields)| {
        let fields = fields.iter()
            .map(|(field_name, field_type)| format!("  {field_name}: {field_type}\n"))
            .collect::<String>();
        format!("type {type_name} {{\n{fields}}}\n")
    }).collect()
}

proptest! {
    /// Merging with an empty source reproduces the target.
    #[test]
    fn merge_with_nothing_is_identity(target in arb_object_types()) {
        let sdl = render(&target);
        let merged = merge(sdl.as_str(), "").unwrap();

        prop_assert_eq!(merged.document(), &parse(&sdl));
    }

    /// Every field survives a merge, and colliding fields carry the
    /// source's signature.
    #[test]
    fn merge_is_a_right_biased_union(
        target in arb_object_types(),
        source in arb_object_types(),
    ) {
        let merged = merge(render(&target), render(&source)).unwrap();
        let doc = merged.document();

        for (type_name, fields) in target.iter().chain(source.iter()) {
            for field_name in fields.keys() {
                let expected = source.get(type_name)
                    .and_then(|source_fields| source_fields.get(field_name))
                    .or_else(|| target[type_name].get(field_name))
                    .copied();
                let actual = output_field(doc, type_name, field_name)
                    .map(|field| field.field_type.to_owned());
                prop_assert_eq!(
                    actual,
                    expected.map(|ty| ast::schema::Type::NamedType(ty.to_string())),
                );
            }
        }

        // Target members come first, followed by members new in the source.
        for (type_name, target_fields) in target.iter() {
            let names = member_names(doc, type_name);
            let mut expected: Vec<String> = target_fields.keys().cloned().collect();
            if let Some(source_fields) = source.get(type_name) {
                expected.extend(source_fields.keys()
                    .filter(|name| !target_fields.contains_key(*name))
                    .cloned());
            }
            prop_assert_eq!(names, expected);
        }
    }

    /// Paring the source back out of a merge leaves only what the target
    /// had that the source did not.
    #[test]
    fn pare_subtracts_what_merge_added(
        target in arb_object_types(),
        source in arb_object_types(),
    ) {
        let source_sdl = render(&source);
        let merged = merge(render(&target), source_sdl.as_str()).unwrap();
        let pared = pare(merged, source_sdl.as_str()).unwrap();
        let doc = pared.document();

        let mut expected_types = vec![];
        for (type_name, target_fields) in target.iter() {
            let remaining: Vec<String> = target_fields.keys()
                .filter(|name| !source.get(type_name)
                    .is_some_and(|source_fields| source_fields.contains_key(*name)))
                .cloned()
                .collect();
            if !remaining.is_empty() {
                prop_assert_eq!(member_names(doc, type_name), remaining);
                expected_types.push(type_name.to_string());
            }
        }
        prop_assert_eq!(type_names(doc), expected_types);
    }
}
