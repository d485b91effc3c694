use std::collections::{HashMap, HashSet};
use astgen_schema::{ConcreteKind, Entry, Schema};
use crate::{
    error::AstGenError,
    utils::{is_cpp_keyword, is_identifier, quote},
};

/// Names the generated classes already use for their own members.
pub const RESERVED_NAMES: [&str; 3] = ["Visitor", "accept", "visit"];

/// `place` is appended to the message, e.g. ` in "Binary"`.
fn verify_name(name: &str, what: &str, place: &str) -> Result<(), AstGenError> {
    if !is_identifier(name) {
        return Err(AstGenError::VerifierError(format!(
            "The {} {}{} is not a valid identifier",
            what,
            quote(name),
            place
        )));
    }
    if RESERVED_NAMES.contains(&name) || is_cpp_keyword(name) {
        return Err(AstGenError::VerifierError(format!(
            "The {} {}{} is reserved",
            what,
            quote(name),
            place
        )));
    }
    Ok(())
}

/// Returns `Ok(())` if verification passed, or `Err(AstGenError::VerifierError(_))` otherwise.
pub fn verify_schema(schema: &Schema) -> Result<(), AstGenError> {
    // Position of every abstract kind, used to resolve parents
    let mut abstract_positions: HashMap<&str, usize> = HashMap::new();
    for (position, entry) in schema.entries.iter().enumerate() {
        if let Entry::Abstract(kind) = entry {
            if abstract_positions.insert(&kind.name, position).is_some() {
                return Err(AstGenError::VerifierError(format!(
                    "The abstract kind {} is defined twice",
                    quote(&kind.name)
                )));
            }
        }
    }

    // Names must be unique within one nesting scope
    let mut scopes: HashSet<(Option<&str>, &str)> = HashSet::new();

    for (position, entry) in schema.entries.iter().enumerate() {
        let name = entry.name();
        verify_name(name, "kind name", "")?;

        if let Some(parent) = entry.parent() {
            match abstract_positions.get(parent) {
                None => {
                    return Err(AstGenError::VerifierError(format!(
                        "The parent {} of {} is not an abstract kind in the schema",
                        quote(parent),
                        quote(name)
                    )));
                }
                Some(&parent_position) if parent_position >= position => {
                    return Err(AstGenError::VerifierError(format!(
                        "The parent {} of {} must be declared before it",
                        quote(parent),
                        quote(name)
                    )));
                }
                Some(_) => {}
            }
        }

        if !scopes.insert((entry.parent(), name)) {
            return Err(AstGenError::VerifierError(format!(
                "The kind {} is defined twice in the same scope",
                quote(name)
            )));
        }

        if let Entry::Concrete(kind) = entry {
            verify_concrete(kind)?;
        }
    }

    Ok(())
}

fn verify_concrete(kind: &ConcreteKind) -> Result<(), AstGenError> {
    if kind.name == kind.parent {
        return Err(AstGenError::VerifierError(format!(
            "The kind {} cannot share the name of its parent",
            quote(&kind.name)
        )));
    }

    let mut seen = HashSet::new();
    for field in &kind.fields {
        verify_name(&field.name, "field name", &format!(" in {}", quote(&kind.name)))?;
        if field.name == kind.name {
            return Err(AstGenError::VerifierError(format!(
                "The field {} in {} cannot share the name of its kind",
                quote(&field.name),
                quote(&kind.name)
            )));
        }
        if field.type_.trim().is_empty() {
            return Err(AstGenError::VerifierError(format!(
                "The field {} in {} has no type",
                quote(&field.name),
                quote(&kind.name)
            )));
        }
        if !seen.insert(field.name.as_str()) {
            return Err(AstGenError::VerifierError(format!(
                "The field {} is defined twice in {}",
                quote(&field.name),
                quote(&kind.name)
            )));
        }
    }

    Ok(())
}
