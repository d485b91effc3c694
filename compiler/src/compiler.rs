use std::{fs, path::Path};
use astgen_schema::Schema;
use tracing::debug;
use crate::{
    error::AstGenError,
    render::{Mode, Renderer},
    verifier::verify_schema,
};

/// Parse a JSON schema document into a verified `Schema`.
/// Returns `Err(AstGenError)` if the JSON is malformed or verification fails.
pub fn compile_schema(text: &str) -> Result<Schema, AstGenError> {
    let schema: Schema = serde_json::from_str(text)?;
    verify_schema(&schema)?;
    debug!(entries = schema.entries.len(), "loaded schema");
    Ok(schema)
}

/// Read and compile a JSON schema file.
pub fn load_schema(path: &Path) -> Result<Schema, AstGenError> {
    let text = fs::read_to_string(path)?;
    compile_schema(&text)
}

/// Render `schema` in the given mode. Configuration is checked before any
/// rendering starts; on error nothing is produced.
pub fn generate(schema: &Schema, mode: Mode, header: Option<&str>) -> Result<String, AstGenError> {
    Renderer::new(mode, header)?.generate(schema)
}
