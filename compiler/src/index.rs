use indexmap::IndexMap;
use astgen_schema::{ConcreteKind, Entry, Schema};

/// Concrete kinds grouped under their parent abstract kind.
///
/// Parents iterate in the order they first acquired a child, and children in
/// schema order. A parent without children has no key at all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HierarchyIndex<'a> {
    children: IndexMap<&'a str, Vec<&'a ConcreteKind>>,
}

impl<'a> HierarchyIndex<'a> {
    pub fn build(schema: &'a Schema) -> HierarchyIndex<'a> {
        let mut children: IndexMap<&'a str, Vec<&'a ConcreteKind>> = IndexMap::new();
        for entry in &schema.entries {
            if let Entry::Concrete(kind) = entry {
                children.entry(kind.parent.as_str()).or_default().push(kind);
            }
        }
        HierarchyIndex { children }
    }

    /// Children of `parent`; empty when the parent has none or is unknown.
    pub fn children_of(&self, parent: &str) -> &[&'a ConcreteKind] {
        self.children.get(parent).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn parents(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.children.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &[&'a ConcreteKind])> + '_ {
        self.children.iter().map(|(parent, kids)| (*parent, kids.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
