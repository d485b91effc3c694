//! Schema model for astgen.
//!
//! A schema is a flat, ordered list of node kinds. Abstract kinds are the
//! polymorphic bases of the generated hierarchy; concrete kinds are the
//! instantiable variants, each with typed fields and exactly one parent.
//! Parents are referenced by name and resolved at generation time.
//!
//! ```
//! use astgen_schema::*;
//!
//! let schema = Schema::new(vec![
//!     AbstractKind::root("Expression").into(),
//!     ConcreteKind::new("Literal", vec![Field::new("value", "Value")], "Expression").into(),
//! ]);
//!
//! assert_eq!(schema.members_of("Expression").count(), 1);
//! ```

pub mod builtin;
pub mod schema;

pub use builtin::builtin_schema;
pub use schema::*;
