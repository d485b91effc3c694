use astgen_schema::{ConcreteKind, Entry};

use super::{include_target, parameter_list, RenderContext, Stages};

/// Renders the source file: a constructor and an `accept` body for every
/// concrete kind. Abstract kinds and visitors are fully declared by the
/// header and contribute nothing here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionRenderer {
    header: String,
}

impl DefinitionRenderer {
    pub fn new(header: impl Into<String>) -> DefinitionRenderer {
        DefinitionRenderer { header: header.into() }
    }

    fn constructor(&self, parent: &str, kind: &ConcreteKind) -> String {
        // Members are initialised in declaration order, each moved from its parameter.
        let initializers = if kind.fields.is_empty() {
            String::new()
        } else {
            let moves: Vec<String> = kind
                .fields
                .iter()
                .map(|field| format!("{}{{std::move({})}}", field.name, field.name))
                .collect();
            format!(" : {}", moves.join(", "))
        };
        format!(
            "\n{}::{}::{}({}){} {{}}",
            parent,
            kind.name,
            kind.name,
            parameter_list(&kind.fields),
            initializers
        )
    }

    fn accept(&self, parent: &str, kind: &ConcreteKind) -> String {
        format!(
            "\nvoid {}::{}::accept({}::Visitor& visitor) const {{ visitor.visit(*this); }}",
            parent, kind.name, parent
        )
    }
}

impl Stages for DefinitionRenderer {
    fn includes(&self, _ctx: &RenderContext) -> String {
        format!("\n\n#include <optional>\n\n#include {}", include_target(&self.header))
    }

    fn ast_classes(&self, ctx: &RenderContext) -> String {
        let mut blocks = Vec::new();
        for entry in &ctx.schema.entries {
            if let Entry::Concrete(kind) = entry {
                let parent = ctx.qualified_name(&kind.parent);
                blocks.push("\n\n".to_string());
                blocks.push(self.constructor(&parent, kind));
                blocks.push(self.accept(&parent, kind));
            }
        }
        blocks.concat()
    }

    fn visitors(&self, _ctx: &RenderContext) -> String {
        String::new()
    }
}
