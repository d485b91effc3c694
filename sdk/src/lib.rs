//! astgen
//!
//! Generates a C++ AST class hierarchy with double-dispatch visitors from a
//! declarative node schema.
//!
//! - `generate` renders a schema as a header (`Mode::Declaration`) or as the
//!   matching source file (`Mode::Definition`)
//! - `builtin_schema` is the expression/statement node set of the interpreter
//! - `load_schema` / `schema_to_json` move schemas in and out of JSON files

pub use astgen_compiler::{
    compile_schema, generate, load_schema, verify_schema, AstGenError, HierarchyIndex, Mode, Renderer,
};
pub use astgen_schema::{builtin_schema, AbstractKind, ConcreteKind, Entry, Field, Schema};

/// Pretty-print a schema as JSON, in the format `load_schema` reads.
pub fn schema_to_json(schema: &Schema) -> Result<String, AstGenError> {
    Ok(serde_json::to_string_pretty(schema)?)
}

pub mod error {
    pub use astgen_compiler::error::AstGenError;
}

pub mod schema {
    pub use astgen_schema::{AbstractKind, ConcreteKind, Entry, Field, Schema};
}
