use crate::ast;
use std::collections::HashMap;

/// Types and directives live in separate namespaces, so `type foo` and
/// `directive @foo` never collide.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum DefinitionNamespace {
    Directive,
    Schema,
    Type,
}

type DefinitionKey = (DefinitionNamespace, String);

fn key_of(def: &ast::schema::Definition) -> DefinitionKey {
    use ast::schema::Definition;
    match def {
        Definition::DirectiveDefinition(directive_def) =>
            (DefinitionNamespace::Directive, directive_def.name.to_string()),
        Definition::SchemaDefinition(_) =>
            (DefinitionNamespace::Schema, String::new()),
        Definition::TypeDefinition(type_def) =>
            (DefinitionNamespace::Type, ast::schema::type_def_name(type_def).to_string()),
        Definition::TypeExtension(ext) =>
            (DefinitionNamespace::Type, ast::schema::type_ext_name(ext).to_string()),
    }
}

/// The working copy of a target document during a merge or pare.
///
/// Top-level definitions keep their document order; removed definitions
/// leave an empty slot until the arena is turned back into a document.
/// Lookups by `(namespace, name)` are O(1). A name may be carried by several
/// slots (a definition followed by its extensions), indexed in document
/// order.
#[derive(Debug)]
pub(crate) struct DefinitionArena {
    index: HashMap<DefinitionKey, Vec<usize>>,
    slots: Vec<Option<ast::schema::Definition>>,
}
impl DefinitionArena {
    pub(crate) fn from_document(doc: ast::schema::Document) -> Self {
        let mut arena = Self {
            index: HashMap::with_capacity(doc.definitions.len()),
            slots: Vec::with_capacity(doc.definitions.len()),
        };
        for def in doc.definitions {
            arena.push(def);
        }
        arena
    }

    /// The first slot carrying `name`.
    pub(crate) fn find(
        &self,
        namespace: DefinitionNamespace,
        name: &str,
    ) -> Option<usize> {
        self.index.get(&(namespace, name.to_string()))
            .and_then(|slots| slots.first())
            .copied()
    }

    /// Every slot carrying `name`, in document order.
    pub(crate) fn find_all(
        &self,
        namespace: DefinitionNamespace,
        name: &str,
    ) -> Vec<usize> {
        self.index.get(&(namespace, name.to_string()))
            .cloned()
            .unwrap_or_default()
    }

    pub(crate) fn get(&self, idx: usize) -> Option<&ast::schema::Definition> {
        self.slots.get(idx).and_then(|slot| slot.as_ref())
    }

    pub(crate) fn push(&mut self, def: ast::schema::Definition) -> usize {
        let idx = self.slots.len();
        self.index.entry(key_of(&def)).or_default().push(idx);
        self.slots.push(Some(def));
        idx
    }

    /// Empties the slot at `idx`. If another definition shares the removed
    /// definition's name, lookups fall through to the next one.
    pub(crate) fn remove(&mut self, idx: usize) -> Option<ast::schema::Definition> {
        let removed = self.slots.get_mut(idx)?.take()?;
        let key = key_of(&removed);
        if let Some(slots) = self.index.get_mut(&key) {
            slots.retain(|slot_idx| *slot_idx != idx);
            if slots.is_empty() {
                self.index.remove(&key);
            }
        }
        Some(removed)
    }

    /// Overwrites the slot at `idx`. `def` must carry the same name as the
    /// definition it replaces.
    pub(crate) fn replace(&mut self, idx: usize, def: ast::schema::Definition) {
        if let Some(slot) = self.slots.get_mut(idx) {
            *slot = Some(def);
        }
    }

    pub(crate) fn into_document(self) -> ast::schema::Document {
        ast::schema::Document {
            definitions: self.slots.into_iter().flatten().collect(),
        }
    }
}
