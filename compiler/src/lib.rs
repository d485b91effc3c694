//! astgen-compiler
//!
//! This crate implements:
//!  1) A schema verifier (unknown or late parents, duplicate kinds and fields, bad identifiers),
//!  2) The hierarchy index (abstract kind → ordered concrete children),
//!  3) The declaration (`.hpp`) and definition (`.cpp`) renderers,
//!  4) JSON schema loading (`compile_schema`, `load_schema`),
//!  5) The error type (`AstGenError`).

pub mod error;
pub mod utils;
pub mod verifier;
pub mod index;
pub mod render;
pub mod compiler;

pub use compiler::{compile_schema, generate, load_schema};
pub use error::AstGenError;
pub use index::HierarchyIndex;
pub use render::{Mode, Renderer};
pub use verifier::verify_schema;
