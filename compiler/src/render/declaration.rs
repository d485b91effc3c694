use astgen_schema::{AbstractKind, ConcreteKind, Entry};

use crate::utils::{escape_cpp_keyword, to_snake_case};
use super::{include_target, parameter_list, RenderContext, Stages};

/// Renders the header: abstract bases, concrete node structs and the
/// visitor interface of every parent that has children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeclarationRenderer;

impl Stages for DeclarationRenderer {
    fn includes(&self, ctx: &RenderContext) -> String {
        let mut includes = vec![
            "\n\n#pragma once".to_string(),
            "\n\n#include <memory>".to_string(),
            "\n#include <optional>".to_string(),
        ];
        if !ctx.schema.includes.is_empty() {
            includes.push("\n".to_string());
        }
        for include in &ctx.schema.includes {
            includes.push(format!("\n#include {}", include_target(include)));
        }
        includes.concat()
    }

    fn ast_classes(&self, ctx: &RenderContext) -> String {
        ctx.schema
            .entries
            .iter()
            .map(|entry| match entry {
                Entry::Abstract(kind) => self.abstract_class(ctx, kind),
                Entry::Concrete(kind) => self.concrete_class(ctx, kind),
            })
            .collect()
    }

    fn visitors(&self, ctx: &RenderContext) -> String {
        ctx.index
            .iter()
            .map(|(parent, children)| self.visitor(ctx, parent, children))
            .collect()
    }
}

impl DeclarationRenderer {
    fn abstract_class(&self, ctx: &RenderContext, kind: &AbstractKind) -> String {
        let mut lines = vec![
            format!("\n\n\nstruct {}\n{{", ctx.qualified_name(&kind.name)),
            "\n    class Visitor;".to_string(),
        ];
        for member in ctx.schema.members_of(&kind.name) {
            lines.push(format!("\n    class {};", member.name()));
        }
        lines.push(format!("\n    virtual ~{}() = default;", kind.name));
        lines.push("\n    virtual void accept(Visitor& visitor) const = 0;".to_string());
        lines.push("\n};".to_string());
        lines.concat()
    }

    fn concrete_class(&self, ctx: &RenderContext, kind: &ConcreteKind) -> String {
        let parent = ctx.qualified_name(&kind.parent);
        let mut lines = vec![
            format!("\n\n\nstruct {}::{} : {}\n{{", parent, kind.name, parent),
            format!("\n    {}({});", kind.name, parameter_list(&kind.fields)),
            format!("\n    void accept({}::Visitor& visitor) const override;", parent),
        ];
        for field in &kind.fields {
            lines.push(format!("\n    {} {};", field.type_, field.name));
        }
        lines.push("\n};".to_string());
        lines.concat()
    }

    fn visitor(&self, ctx: &RenderContext, parent: &str, children: &[&ConcreteKind]) -> String {
        let parent = ctx.qualified_name(parent);
        let mut lines = vec![format!("\n\n\nclass {}::Visitor\n{{", parent), "\npublic:".to_string()];
        for child in children {
            lines.push(format!(
                "\n    virtual void visit(const {}::{}& {}) = 0;",
                parent,
                child.name,
                escape_cpp_keyword(&to_snake_case(&child.name))
            ));
        }
        lines.push("\n};".to_string());
        lines.concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astgen_schema::{Field, Schema};

    fn schema() -> Schema {
        Schema::new(vec![
            AbstractKind::root("Statement").into(),
            ConcreteKind::new(
                "Return",
                vec![Field::new("keyword", "Token"), Field::new("value", "std::unique_ptr<Expression>")],
                "Statement",
            )
            .into(),
            ConcreteKind::new("Break", vec![], "Statement").into(),
        ])
    }

    #[test]
    fn test_abstract_class_block() {
        let schema = schema();
        let ctx = RenderContext::new(&schema);
        let Entry::Abstract(kind) = &schema.entries[0] else { panic!("expected abstract kind") };
        assert_eq!(
            DeclarationRenderer.abstract_class(&ctx, kind),
            "\n\n\nstruct Statement\n{\
             \n    class Visitor;\
             \n    class Return;\
             \n    class Break;\
             \n    virtual ~Statement() = default;\
             \n    virtual void accept(Visitor& visitor) const = 0;\
             \n};"
        );
    }

    #[test]
    fn test_concrete_class_block() {
        let schema = schema();
        let ctx = RenderContext::new(&schema);
        let Entry::Concrete(kind) = &schema.entries[1] else { panic!("expected concrete kind") };
        assert_eq!(
            DeclarationRenderer.concrete_class(&ctx, kind),
            "\n\n\nstruct Statement::Return : Statement\n{\
             \n    Return(Token keyword, std::unique_ptr<Expression> value);\
             \n    void accept(Statement::Visitor& visitor) const override;\
             \n    Token keyword;\
             \n    std::unique_ptr<Expression> value;\
             \n};"
        );
    }

    #[test]
    fn test_empty_concrete_class_block() {
        let schema = schema();
        let ctx = RenderContext::new(&schema);
        let Entry::Concrete(kind) = &schema.entries[2] else { panic!("expected concrete kind") };
        assert_eq!(
            DeclarationRenderer.concrete_class(&ctx, kind),
            "\n\n\nstruct Statement::Break : Statement\n{\
             \n    Break();\
             \n    void accept(Statement::Visitor& visitor) const override;\
             \n};"
        );
    }

    #[test]
    fn test_visitor_escapes_keywords() {
        let schema = schema();
        let ctx = RenderContext::new(&schema);
        assert_eq!(
            DeclarationRenderer.visitors(&ctx),
            "\n\n\nclass Statement::Visitor\n{\
             \npublic:\
             \n    virtual void visit(const Statement::Return& return_) = 0;\
             \n    virtual void visit(const Statement::Break& break_) = 0;\
             \n};"
        );
    }

    #[test]
    fn test_includes() {
        let bare = Schema::default();
        assert_eq!(
            DeclarationRenderer.includes(&RenderContext::new(&bare)),
            "\n\n#pragma once\n\n#include <memory>\n#include <optional>"
        );

        let with_project = Schema::default().with_includes(vec!["lexer.hpp".into(), "<vector>".into()]);
        assert_eq!(
            DeclarationRenderer.includes(&RenderContext::new(&with_project)),
            "\n\n#pragma once\n\n#include <memory>\n#include <optional>\
             \n\n#include \"lexer.hpp\"\n#include <vector>"
        );
    }

    #[test]
    fn test_nested_abstract_kind_is_a_scope() {
        let schema = Schema::new(vec![
            AbstractKind::root("Expression").into(),
            AbstractKind::nested("Pattern", "Expression").into(),
            ConcreteKind::new("Wildcard", vec![], "Pattern").into(),
        ]);
        let ctx = RenderContext::new(&schema);
        let classes = DeclarationRenderer.ast_classes(&ctx);
        assert!(classes.contains("\nstruct Expression\n{\n    class Visitor;\n    class Pattern;"));
        assert!(classes.contains("\nstruct Expression::Pattern\n{\n    class Visitor;\n    class Wildcard;"));
        assert!(classes.contains("\nstruct Expression::Pattern::Wildcard : Expression::Pattern\n{"));
        assert_eq!(
            DeclarationRenderer.visitors(&ctx),
            "\n\n\nclass Expression::Pattern::Visitor\n{\
             \npublic:\
             \n    virtual void visit(const Expression::Pattern::Wildcard& wildcard) = 0;\
             \n};"
        );
    }
}
