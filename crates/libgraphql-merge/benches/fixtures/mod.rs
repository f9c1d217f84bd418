/// Builds `type_count` object types (plus a `Query` root referencing each of
/// them), every type carrying `field_count` fields whose names start with
/// `field_prefix`.
///
/// Schemas built with the same `type_count` but different prefixes share
/// every type name and none of their field names, which makes every type a
/// merge collision.
pub fn object_schema(type_count: usize, field_count: usize, field_prefix: &str) -> String {
    let mut sdl = String::from("type Query {\n");
    for type_idx in 0..type_count {
        sdl.push_str(&format!("  {field_prefix}type{type_idx}: Type{type_idx}\n"));
    }
    sdl.push_str("}\n\n");

    for type_idx in 0..type_count {
        sdl.push_str(&format!("type Type{type_idx} @key(fields: \"id\") {{\n"));
        for field_idx in 0..field_count {
            sdl.push_str(&format!("  {field_prefix}{field_idx}(arg: Int): String\n"));
        }
        sdl.push_str("}\n\n");
    }
    sdl
}

/// A schema made only of type extensions of the types in [object_schema].
pub fn extension_schema(type_count: usize, field_count: usize, field_prefix: &str) -> String {
    let mut sdl = String::new();
    for type_idx in 0..type_count {
        sdl.push_str(&format!("extend type Type{type_idx} {{\n"));
        for field_idx in 0..field_count {
            sdl.push_str(&format!("  {field_prefix}{field_idx}: Int\n"));
        }
        sdl.push_str("}\n\n");
    }
    sdl
}
