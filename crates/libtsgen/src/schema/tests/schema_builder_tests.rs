use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;

type Result<T> = std::result::Result<T, Box<SchemaBuildError>>;

fn build_from_sdl(sdl: &str) -> Result<Schema> {
    let mut builder = Schema::builder();
    builder.load_content(None, sdl)?;
    builder.build()
}

#[test]
fn builtin_scalars_are_pre_seeded() -> Result<()> {
    let schema = build_from_sdl("type T { f: Int }")?;
    for name in ["Boolean", "Float", "ID", "Int", "String"] {
        match schema.type_named(name) {
            Some(GraphQLType::Scalar(scalar_type)) =>
                assert!(scalar_type.is_builtin()),
            other => panic!("expected built-in scalar `{name}`, got {other:?}"),
        }
    }
    Ok(())
}

#[test]
fn type_declaration_order_is_preserved() -> Result<()> {
    let schema = build_from_sdl("
        type Zebra { name: String }
        enum Color { RED }
        type Aardvark { name: String }
    ")?;

    let declared: Vec<&str> =
        schema.types()
            .values()
            .filter(|t| match t {
                GraphQLType::Scalar(s) => !s.is_builtin(),
                _ => true,
            })
            .map(|t| t.name())
            .collect();
    assert_eq!(declared, vec!["Zebra", "Color", "Aardvark"]);
    Ok(())
}

#[test]
fn root_types_default_to_query_and_mutation() -> Result<()> {
    let schema = build_from_sdl("
        type Query { ping: String }
        type Mutation { pong: String }
    ")?;
    assert_eq!(schema.query_type().expect("no query type").name(), "Query");
    assert_eq!(
        schema.mutation_type().expect("no mutation type").name(),
        "Mutation",
    );
    assert!(schema.is_root_type_name("Query"));
    assert!(schema.is_root_type_name("Mutation"));
    assert!(!schema.is_root_type_name("String"));
    Ok(())
}

#[test]
fn schema_block_overrides_root_type_names() -> Result<()> {
    let schema = build_from_sdl("
        schema { query: Root }
        type Root { ping: String }
        type Query { other: String }
    ")?;
    assert_eq!(schema.query_type().expect("no query type").name(), "Root");
    assert!(schema.is_root_type_name("Root"));
    assert!(!schema.is_root_type_name("Query"));
    Ok(())
}

#[test]
fn schema_without_roots_still_builds() -> Result<()> {
    let schema = build_from_sdl("type User { id: ID! }")?;
    assert!(schema.query_type().is_none());
    assert!(schema.mutation_type().is_none());
    Ok(())
}

#[test]
fn duplicate_type_definition_is_an_error() {
    let err = build_from_sdl("
        type User { id: ID! }
        type User { name: String }
    ").expect_err("expected a build error");
    assert!(matches!(
        *err,
        SchemaBuildError::DuplicateTypeDefinition { ref type_name, .. }
            if type_name == "User",
    ));
}

#[test]
fn redefining_a_builtin_scalar_is_an_error() {
    let err = build_from_sdl("scalar ID")
        .expect_err("expected a build error");
    assert!(matches!(
        *err,
        SchemaBuildError::DuplicateTypeDefinition { ref type_name, .. }
            if type_name == "ID",
    ));
}

#[test]
fn interface_definitions_are_rejected() {
    let err = build_from_sdl("interface Node { id: ID! }")
        .expect_err("expected a build error");
    assert!(matches!(
        *err,
        SchemaBuildError::UnsupportedInterfaceType { ref type_name, .. }
            if type_name == "Node",
    ));
}

#[test]
fn type_extensions_are_rejected() {
    let err = build_from_sdl("
        type User { id: ID! }
        extend type User { name: String }
    ").expect_err("expected a build error");
    assert!(matches!(
        *err,
        SchemaBuildError::UnsupportedTypeExtension { ref type_name, .. }
            if type_name == "User",
    ));
}

#[test]
fn unknown_configured_root_type_is_an_error() {
    let err = build_from_sdl("
        schema { query: Missing }
        type T { f: Int }
    ").expect_err("expected a build error");
    assert!(matches!(
        *err,
        SchemaBuildError::InvalidRootOperationType {
            operation: "query",
            ref type_name,
            ..
        } if type_name == "Missing",
    ));
}

#[test]
fn subscription_root_is_ignored() -> Result<()> {
    let schema = build_from_sdl("
        schema { query: Query, subscription: Sub }
        type Query { ping: String }
        type Sub { tick: Int }
    ")?;
    assert!(!schema.is_root_type_name("Sub"));
    Ok(())
}

#[test]
fn field_arguments_preserve_declaration_order() -> Result<()> {
    let schema = build_from_sdl("
        type Query { search(first: Int, after: String, term: String!): String }
    ")?;
    let query_type = schema.query_type().expect("no query type");
    let field = query_type.fields().get("search").expect("no search field");
    let arg_names: Vec<&str> =
        field.arguments().iter().map(|arg| arg.name()).collect();
    assert_eq!(arg_names, vec!["first", "after", "term"]);
    Ok(())
}

#[test]
fn parse_errors_surface_as_build_errors() {
    let err = build_from_sdl("type {{{")
        .expect_err("expected a build error");
    assert!(matches!(*err, SchemaBuildError::SchemaParseError { .. }));
}
