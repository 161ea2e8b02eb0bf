use crate::loc;
use crate::types::TypeExpr;
use indexmap::IndexMap;

/// Represents an [input object
/// type](https://spec.graphql.org/October2021/#sec-Input-Objects) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputObjectType {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) fields: IndexMap<String, InputField>,
    pub(crate) name: String,
}
impl InputObjectType {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    /// The input fields defined on this type, in declaration order.
    pub fn fields(&self) -> &IndexMap<String, InputField> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// A single field on an [`InputObjectType`]. Unlike
/// [`Field`](crate::types::Field), input fields never declare arguments.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputField {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) name: String,
    pub(crate) type_expr: TypeExpr,
}
impl InputField {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_expr(&self) -> &TypeExpr {
        &self.type_expr
    }
}
