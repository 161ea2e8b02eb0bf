//! Walks a GraphQL schema graph and emits TypeScript: one structural type
//! definition per schema type, plus one executable operation document (with
//! matching `Variables`/result type definitions) per field on the schema's
//! root operation types.
//!
//! Schema text is parsed into an immutable [`Schema`](schema::Schema) via
//! [`SchemaBuilder`](schema::SchemaBuilder); the [`codegen`] module walks
//! that graph and renders text.

pub mod ast;
pub mod codegen;
mod file_reader;
pub mod loc;
pub mod schema;
pub mod types;

pub use file_reader::ReadContentError;
