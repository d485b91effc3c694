//! C++ renderers for a verified schema.
//!
//! Both renderers walk the same four stages (provenance comment, includes,
//! one block per schema entry, one visitor block per indexed parent) and
//! differ only in the text each stage produces. The declaration renderer
//! writes the header; the definition renderer writes the matching bodies.

pub mod declaration;
pub mod definition;

use std::fmt;
use std::str::FromStr;

use astgen_schema::{Field, Schema};
use tracing::{debug, info};

use crate::{error::AstGenError, index::HierarchyIndex, verifier::verify_schema};

pub use declaration::DeclarationRenderer;
pub use definition::DefinitionRenderer;

const PROVENANCE: &str = "/*\n * This file was generated by astgen.\n */";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Class declarations and visitor interfaces (`.hpp`).
    Declaration,
    /// Constructor and `accept` bodies (`.cpp`).
    Definition,
}

impl Mode {
    pub fn extension(&self) -> &'static str {
        match self {
            Mode::Declaration => "hpp",
            Mode::Definition => "cpp",
        }
    }
}

impl FromStr for Mode {
    type Err = AstGenError;

    fn from_str(s: &str) -> Result<Mode, AstGenError> {
        match s {
            "hpp" | "declaration" => Ok(Mode::Declaration),
            "cpp" | "definition" => Ok(Mode::Definition),
            other => Err(AstGenError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Everything a stage may read: the schema and the index derived from it.
pub struct RenderContext<'a> {
    pub schema: &'a Schema,
    pub index:  HierarchyIndex<'a>,
}

impl<'a> RenderContext<'a> {
    pub fn new(schema: &'a Schema) -> RenderContext<'a> {
        RenderContext { schema, index: HierarchyIndex::build(schema) }
    }

    /// `Outer::Inner` for a nested abstract kind, the bare name for a root.
    pub fn qualified_name(&self, abstract_name: &str) -> String {
        let mut chain = vec![abstract_name];
        let mut current = self.schema.abstract_kind(abstract_name);
        while let Some(parent) = current.and_then(|kind| kind.parent.as_deref()) {
            chain.push(parent);
            current = self.schema.abstract_kind(parent);
        }
        chain.reverse();
        chain.join("::")
    }
}

/// The four stages shared by both renderers.
pub(crate) trait Stages {
    fn docstring(&self) -> String {
        PROVENANCE.to_string()
    }

    fn includes(&self, ctx: &RenderContext) -> String;

    fn ast_classes(&self, ctx: &RenderContext) -> String;

    fn visitors(&self, ctx: &RenderContext) -> String;
}

/// The closed set of output modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Renderer {
    Declaration(DeclarationRenderer),
    Definition(DefinitionRenderer),
}

impl Renderer {
    /// Selects a renderer. Definition mode needs the header it includes.
    pub fn new(mode: Mode, header: Option<&str>) -> Result<Renderer, AstGenError> {
        let renderer = match mode {
            Mode::Declaration => Renderer::Declaration(DeclarationRenderer),
            Mode::Definition => {
                let header = header
                    .map(str::trim)
                    .filter(|h| !h.is_empty())
                    .ok_or(AstGenError::MissingHeader)?;
                Renderer::Definition(DefinitionRenderer::new(header))
            }
        };
        debug!("selected {} renderer", mode);
        Ok(renderer)
    }

    pub fn mode(&self) -> Mode {
        match self {
            Renderer::Declaration(_) => Mode::Declaration,
            Renderer::Definition(_) => Mode::Definition,
        }
    }

    /// Verifies `schema` and renders one complete document.
    pub fn generate(&self, schema: &Schema) -> Result<String, AstGenError> {
        verify_schema(schema)?;
        let ctx = RenderContext::new(schema);
        debug!(
            entries = schema.entries.len(),
            visitors = ctx.index.len(),
            "built hierarchy index"
        );

        let stages: &dyn Stages = match self {
            Renderer::Declaration(r) => r,
            Renderer::Definition(r) => r,
        };
        let document = [
            stages.docstring(),
            stages.includes(&ctx),
            stages.ast_classes(&ctx),
            stages.visitors(&ctx),
            "\n".to_string(),
        ]
        .concat();

        info!(mode = %self.mode(), bytes = document.len(), "generated document");
        Ok(document)
    }
}

/// `Type name, Type name` in field order.
pub(crate) fn parameter_list(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|field| format!("{} {}", field.type_, field.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Wraps a bare path in quotes; `"x.hpp"` and `<x>` pass through unchanged.
pub(crate) fn include_target(target: &str) -> String {
    if target.starts_with('"') || target.starts_with('<') {
        target.to_string()
    } else {
        format!("\"{}\"", target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astgen_schema::{AbstractKind, ConcreteKind};

    #[test]
    fn test_mode_from_str() {
        assert_eq!("hpp".parse::<Mode>().unwrap(), Mode::Declaration);
        assert_eq!("definition".parse::<Mode>().unwrap(), Mode::Definition);
        let err = "java".parse::<Mode>().unwrap_err();
        assert!(matches!(err, AstGenError::UnknownMode(ref m) if m == "java"), "{:?}", err);
    }

    #[test]
    fn test_definition_requires_header() {
        assert!(matches!(
            Renderer::new(Mode::Definition, None),
            Err(AstGenError::MissingHeader)
        ));
        assert!(matches!(
            Renderer::new(Mode::Definition, Some("  ")),
            Err(AstGenError::MissingHeader)
        ));
        let renderer = Renderer::new(Mode::Definition, Some("ast.hpp")).unwrap();
        assert_eq!(renderer.mode(), Mode::Definition);
    }

    #[test]
    fn test_declaration_ignores_header() {
        let renderer = Renderer::new(Mode::Declaration, Some("ast.hpp")).unwrap();
        assert_eq!(renderer, Renderer::Declaration(DeclarationRenderer));
    }

    #[test]
    fn test_qualified_name() {
        let schema = Schema::new(vec![
            AbstractKind::root("Statement").into(),
            AbstractKind::nested("Declaration", "Statement").into(),
            AbstractKind::nested("Member", "Declaration").into(),
            ConcreteKind::new("Field", vec![], "Member").into(),
        ]);
        let ctx = RenderContext::new(&schema);
        assert_eq!(ctx.qualified_name("Statement"), "Statement");
        assert_eq!(ctx.qualified_name("Member"), "Statement::Declaration::Member");
    }

    #[test]
    fn test_parameter_list_and_include_target() {
        let fields = vec![Field::new("op", "Token"), Field::new("right", "std::unique_ptr<Expression>")];
        assert_eq!(parameter_list(&fields), "Token op, std::unique_ptr<Expression> right");
        assert_eq!(parameter_list(&[]), "");
        assert_eq!(include_target("ast.hpp"), "\"ast.hpp\"");
        assert_eq!(include_target("\"ast.hpp\""), "\"ast.hpp\"");
        assert_eq!(include_target("<ast/ast.hpp>"), "<ast/ast.hpp>");
    }

    #[test]
    fn test_invalid_schema_produces_no_output() {
        let schema = Schema::new(vec![ConcreteKind::new("Literal", vec![], "Expression").into()]);
        let renderer = Renderer::new(Mode::Declaration, None).unwrap();
        assert!(matches!(
            renderer.generate(&schema),
            Err(AstGenError::VerifierError(_))
        ));
    }
}
