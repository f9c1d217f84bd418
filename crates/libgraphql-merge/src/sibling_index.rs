use crate::ast;
use std::collections::HashMap;

/// Any sub-node of a type definition that can be matched against its
/// siblings by name: fields, input fields, enum values, directive
/// annotations and union member references.
pub trait NamedNode {
    fn node_name(&self) -> &str;
}

impl NamedNode for ast::schema::Field {
    fn node_name(&self) -> &str {
        self.name.as_str()
    }
}

impl NamedNode for ast::schema::InputValue {
    fn node_name(&self) -> &str {
        self.name.as_str()
    }
}

impl NamedNode for ast::schema::EnumValue {
    fn node_name(&self) -> &str {
        self.name.as_str()
    }
}

impl NamedNode for ast::query::Directive {
    fn node_name(&self) -> &str {
        self.name.as_str()
    }
}

/// Union members are bare type-name references.
impl NamedNode for String {
    fn node_name(&self) -> &str {
        self.as_str()
    }
}

/// Finds the first node in `siblings` named `name`.
pub fn find_sibling<'a, N: NamedNode>(
    siblings: &'a [N],
    name: &str,
) -> Option<&'a N> {
    siblings.iter().find(|node| node.node_name() == name)
}

/// A name -> position index over one sibling collection.
///
/// Names are expected to be unique within a collection. If they are not,
/// the first occurrence wins, exactly as with [find_sibling].
#[derive(Debug)]
pub struct SiblingIndex {
    positions: HashMap<String, usize>,
}
impl SiblingIndex {
    pub fn new<N: NamedNode>(siblings: &[N]) -> Self {
        let mut positions = HashMap::with_capacity(siblings.len());
        for (idx, node) in siblings.iter().enumerate() {
            positions.entry(node.node_name().to_string()).or_insert(idx);
        }
        Self { positions }
    }

    pub fn find(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    pub(crate) fn insert(&mut self, name: &str, idx: usize) {
        self.positions.entry(name.to_string()).or_insert(idx);
    }
}
