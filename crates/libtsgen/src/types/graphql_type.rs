use crate::loc;
use crate::types::EnumType;
use crate::types::InputObjectType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;

/// Represents a named GraphQL type defined within some
/// [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum GraphQLType {
    Enum(EnumType),
    InputObject(InputObjectType),
    Object(ObjectType),
    Scalar(ScalarType),
    Union(UnionType),
}
impl GraphQLType {
    pub fn def_location(&self) -> Option<&loc::FilePosition> {
        match self {
            GraphQLType::Enum(t) => Some(&t.def_location),
            GraphQLType::InputObject(t) => Some(&t.def_location),
            GraphQLType::Object(t) => Some(&t.def_location),
            GraphQLType::Scalar(t) => t.def_location.as_ref(),
            GraphQLType::Union(t) => Some(&t.def_location),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            GraphQLType::Enum(t) => t.name.as_str(),
            GraphQLType::InputObject(t) => t.name.as_str(),
            GraphQLType::Object(t) => t.name.as_str(),
            GraphQLType::Scalar(t) => t.name.as_str(),
            GraphQLType::Union(t) => t.name.as_str(),
        }
    }

    /// Unwrap the [`ObjectType`] if this type is one.
    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(obj_type) = self {
            Some(obj_type)
        } else {
            None
        }
    }
}
