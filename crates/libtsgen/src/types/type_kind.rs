use crate::types::EnumType;
use crate::types::InputObjectType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeExpr;
use crate::types::UnionType;

/// The classification of a [`TypeExpr`] against a
/// [`Schema`](crate::schema::Schema): exactly one variant matches any valid
/// expression.
///
/// Wrapper variants carry the inner expression; named variants borrow the
/// schema's type payload.
#[derive(Clone, Debug)]
pub enum TypeKind<'schema> {
    Enum(&'schema EnumType),
    InputObject(&'schema InputObjectType),
    List(&'schema TypeExpr),
    NonNull(&'schema TypeExpr),
    Object(&'schema ObjectType),
    Scalar(&'schema ScalarType),
    Union(&'schema UnionType),
}
impl TypeKind<'_> {
    pub fn name(&self) -> &str {
        match self {
            Self::Enum(_) => "Enum",
            Self::InputObject(_) => "InputObject",
            Self::List(_) => "List",
            Self::NonNull(_) => "NonNull",
            Self::Object(_) => "Object",
            Self::Scalar(_) => "Scalar",
            Self::Union(_) => "Union",
        }
    }
}
