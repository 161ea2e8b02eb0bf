use crate::ast;

/// The wrapper axis of a type reference: an arbitrarily nested stack of
/// [list](https://spec.graphql.org/October2021/#sec-List) and
/// [non-null](https://spec.graphql.org/October2021/#sec-Non-Null) modifiers
/// around an innermost named type.
///
/// Produced once from the parser AST when the schema is loaded, so all
/// downstream classification is a total `match` over a closed enum.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum TypeExpr {
    List(Box<TypeExpr>),
    Named(String),
    NonNull(Box<TypeExpr>),
}
impl TypeExpr {
    pub(crate) fn from_ast_type(ast_type: &ast::schema::Type) -> Self {
        match ast_type {
            ast::schema::Type::ListType(inner) =>
                Self::List(Box::new(Self::from_ast_type(inner))),
            ast::schema::Type::NamedType(name) =>
                Self::Named(name.to_string()),
            ast::schema::Type::NonNullType(inner) =>
                Self::NonNull(Box::new(Self::from_ast_type(inner))),
        }
    }

    /// Recursively strip [`TypeExpr::List`] and [`TypeExpr::NonNull`] layers
    /// and return the innermost type name.
    ///
    /// Always terminates: wrapper nesting depth is finite in any parsed
    /// schema (named-type self-reference is a property of the type graph,
    /// not of a single type expression).
    pub fn innermost_name(&self) -> &str {
        match self {
            TypeExpr::List(inner) => inner.innermost_name(),
            TypeExpr::Named(name) => name.as_str(),
            TypeExpr::NonNull(inner) => inner.innermost_name(),
        }
    }

    /// Whether the outermost layer of this expression is a non-null wrapper.
    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeExpr::NonNull(_))
    }
}

/// Renders the expression back in GraphQL syntax (e.g. `[Foo!]!`). Used
/// verbatim for operation-signature argument types.
impl std::fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeExpr::List(inner) => write!(f, "[{inner}]"),
            TypeExpr::Named(name) => write!(f, "{name}"),
            TypeExpr::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
