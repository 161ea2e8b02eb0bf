mod argument;
mod enum_type;
mod field;
mod graphql_type;
mod input_object_type;
mod object_type;
mod scalar_type;
mod type_expr;
mod type_kind;
mod union_type;

pub use argument::Argument;
pub use enum_type::EnumType;
pub use field::Field;
pub use graphql_type::GraphQLType;
pub use input_object_type::InputField;
pub use input_object_type::InputObjectType;
pub use object_type::ObjectType;
pub use scalar_type::ScalarType;
pub use type_expr::TypeExpr;
pub use type_kind::TypeKind;
pub use union_type::UnionType;

#[cfg(test)]
mod tests;
