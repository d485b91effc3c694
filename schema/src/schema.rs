use serde::{Deserialize, Serialize};

/// A single member of a concrete node kind. The type text is emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name:  String,
    #[serde(rename = "type")]
    pub type_: String,
}

impl Field {
    pub fn new(name: impl Into<String>, type_: impl Into<String>) -> Field {
        Field { name: name.into(), type_: type_.into() }
    }
}

/// A polymorphic base of the hierarchy, e.g. `Expression`.
///
/// A nested abstract kind lives in the naming scope of its parent but is
/// dispatched through its own visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbstractKind {
    pub name:   String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl AbstractKind {
    pub fn root(name: impl Into<String>) -> AbstractKind {
        AbstractKind { name: name.into(), parent: None }
    }

    pub fn nested(name: impl Into<String>, parent: impl Into<String>) -> AbstractKind {
        AbstractKind { name: name.into(), parent: Some(parent.into()) }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// An instantiable node variant with its fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcreteKind {
    pub name:   String,
    #[serde(default)]
    pub fields: Vec<Field>,
    pub parent: String,
}

impl ConcreteKind {
    pub fn new(name: impl Into<String>, fields: Vec<Field>, parent: impl Into<String>) -> ConcreteKind {
        ConcreteKind { name: name.into(), fields, parent: parent.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entry {
    Abstract(AbstractKind),
    Concrete(ConcreteKind),
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Entry::Abstract(a) => &a.name,
            Entry::Concrete(c) => &c.name,
        }
    }

    pub fn parent(&self) -> Option<&str> {
        match self {
            Entry::Abstract(a) => a.parent.as_deref(),
            Entry::Concrete(c) => Some(&c.parent),
        }
    }
}

impl From<AbstractKind> for Entry {
    fn from(kind: AbstractKind) -> Entry {
        Entry::Abstract(kind)
    }
}

impl From<ConcreteKind> for Entry {
    fn from(kind: ConcreteKind) -> Entry {
        Entry::Concrete(kind)
    }
}

/// Ordered list of node kinds. Entry order is the emission order, and every
/// parent is expected to appear before the kinds that reference it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Extra headers included by the declaration file, emitted verbatim.
    #[serde(default)]
    pub includes: Vec<String>,
    pub entries:  Vec<Entry>,
}

impl Schema {
    pub fn new(entries: Vec<Entry>) -> Schema {
        Schema { includes: Vec::new(), entries }
    }

    pub fn with_includes(mut self, includes: Vec<String>) -> Schema {
        self.includes = includes;
        self
    }

    pub fn abstract_kind(&self, name: &str) -> Option<&AbstractKind> {
        self.entries.iter().find_map(|entry| match entry {
            Entry::Abstract(a) if a.name == name => Some(a),
            _ => None,
        })
    }

    pub fn abstract_kinds(&self) -> impl Iterator<Item = &AbstractKind> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Abstract(a) => Some(a),
            Entry::Concrete(_) => None,
        })
    }

    pub fn concrete_kinds(&self) -> impl Iterator<Item = &ConcreteKind> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Concrete(c) => Some(c),
            Entry::Abstract(_) => None,
        })
    }

    /// Direct members of an abstract kind's scope, abstract or concrete, in schema order.
    pub fn members_of<'a>(&'a self, parent: &'a str) -> impl Iterator<Item = &'a Entry> + 'a {
        self.entries.iter().filter(move |entry| entry.parent() == Some(parent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Schema {
        Schema::new(vec![
            AbstractKind::root("Expression").into(),
            ConcreteKind::new("Literal", vec![Field::new("value", "Value")], "Expression").into(),
            AbstractKind::nested("Pattern", "Expression").into(),
            ConcreteKind::new("Wildcard", vec![], "Pattern").into(),
        ])
    }

    #[test]
    fn test_abstract_lookup() {
        let schema = sample();
        assert!(schema.abstract_kind("Expression").unwrap().is_root());
        assert_eq!(schema.abstract_kind("Pattern").unwrap().parent.as_deref(), Some("Expression"));
        assert!(schema.abstract_kind("Literal").is_none());
    }

    #[test]
    fn test_members_of_keeps_schema_order() {
        let schema = sample();
        let names: Vec<&str> = schema.members_of("Expression").map(Entry::name).collect();
        assert_eq!(names, vec!["Literal", "Pattern"]);
        assert_eq!(schema.members_of("Pattern").count(), 1);
    }

    #[test]
    fn test_kind_iterators() {
        let schema = sample();
        assert_eq!(schema.abstract_kinds().count(), 2);
        let concrete: Vec<&str> = schema.concrete_kinds().map(|c| c.name.as_str()).collect();
        assert_eq!(concrete, vec!["Literal", "Wildcard"]);
    }
}
