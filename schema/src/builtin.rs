use crate::schema::{AbstractKind, ConcreteKind, Entry, Field, Schema};

const EXPRESSION: &str = "Expression";
const STATEMENT: &str = "Statement";

fn node(name: &str, fields: &[(&str, &str)], parent: &str) -> Entry {
    let fields = fields.iter().map(|(n, t)| Field::new(*n, *t)).collect();
    ConcreteKind::new(name, fields, parent).into()
}

/// The node set of the interpreter's expression/statement language.
///
/// Statement fields spell `::Expression` because `Statement::Expression`
/// shadows the root kind inside the `Statement` scope.
pub fn builtin_schema() -> Schema {
    Schema::new(vec![
        AbstractKind::root(EXPRESSION).into(),
        node("Binary", &[
            ("left",  "std::unique_ptr<Expression>"),
            ("op",    "Token"),
            ("right", "std::unique_ptr<Expression>"),
        ], EXPRESSION),
        node("Grouping", &[("expression", "std::unique_ptr<Expression>")], EXPRESSION),
        node("Literal", &[("value", "Token::Literal")], EXPRESSION),
        node("Unary", &[
            ("op",    "Token"),
            ("right", "std::unique_ptr<Expression>"),
        ], EXPRESSION),
        node("Variable", &[("name", "Token")], EXPRESSION),
        node("Assignment", &[
            ("name",  "Token"),
            ("value", "std::unique_ptr<Expression>"),
        ], EXPRESSION),
        AbstractKind::root(STATEMENT).into(),
        node("Expression", &[("expression", "std::unique_ptr<::Expression>")], STATEMENT),
        node("Print", &[
            ("keyword",    "Token"),
            ("expression", "std::unique_ptr<::Expression>"),
        ], STATEMENT),
        node("VariableDeclaration", &[
            ("name",        "Token"),
            ("initializer", "std::unique_ptr<::Expression>"),
        ], STATEMENT),
        node("Block", &[("statements", "std::vector<std::unique_ptr<Statement>>")], STATEMENT),
        node("IfElse", &[
            ("condition",      "std::unique_ptr<::Expression>"),
            ("if_keyword",     "Token"),
            ("then_statement", "std::unique_ptr<Statement>"),
            ("else_keyword",   "std::optional<Token>"),
            ("else_statement", "std::unique_ptr<Statement>"),
        ], STATEMENT),
        node("WhileLoop", &[
            ("keyword",   "Token"),
            ("condition", "std::unique_ptr<::Expression>"),
            ("body",      "std::unique_ptr<Statement>"),
        ], STATEMENT),
    ])
    .with_includes(vec!["\"lexer.hpp\"".to_string()])
}
