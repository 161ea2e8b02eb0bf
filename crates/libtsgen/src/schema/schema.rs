use crate::schema::SchemaBuilder;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::TypeExpr;
use crate::types::TypeKind;
use indexmap::IndexMap;

/// Represents a fully built, immutable GraphQL schema.
///
/// The type map preserves declaration order, which is also the order types
/// are emitted in by [`Generator`](crate::codegen::Generator).
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: Option<String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Classify a [`TypeExpr`] into exactly one [`TypeKind`].
    ///
    /// Wrapper layers classify before named-type lookup, since each wrapper
    /// carries an inner expression of its own. A name with no definition in
    /// this schema is a programmer error (the builder rejects dangling
    /// references only insofar as they are reachable; classification of an
    /// undefined name is fatal rather than recoverable).
    pub fn classify<'schema>(
        &'schema self,
        expr: &'schema TypeExpr,
    ) -> TypeKind<'schema> {
        match expr {
            TypeExpr::List(inner) => TypeKind::List(inner),
            TypeExpr::NonNull(inner) => TypeKind::NonNull(inner),
            TypeExpr::Named(name) => match self.types.get(name.as_str()) {
                Some(GraphQLType::Enum(t)) => TypeKind::Enum(t),
                Some(GraphQLType::InputObject(t)) => TypeKind::InputObject(t),
                Some(GraphQLType::Object(t)) => TypeKind::Object(t),
                Some(GraphQLType::Scalar(t)) => TypeKind::Scalar(t),
                Some(GraphQLType::Union(t)) => TypeKind::Union(t),
                None => panic!(
                    "Undefined type referenced in schema: `{name}`",
                ),
            },
        }
    }

    /// Whether `name` is one of the schema's configured root operation type
    /// names.
    pub fn is_root_type_name(&self, name: &str) -> bool {
        self.query_type.as_deref() == Some(name)
            || self.mutation_type.as_deref() == Some(name)
    }

    /// The mutation root operation type, if this schema defines one.
    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.mutation_type
            .as_deref()
            .and_then(|name| self.types.get(name))
            .and_then(GraphQLType::as_object)
    }

    /// The query root operation type, if this schema defines one.
    pub fn query_type(&self) -> Option<&ObjectType> {
        self.query_type
            .as_deref()
            .and_then(|name| self.types.get(name))
            .and_then(GraphQLType::as_object)
    }

    pub fn type_named(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// All named types defined in this schema (built-in scalars included),
    /// in declaration order.
    pub fn types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }
}
