use crate::loc;
use crate::types::Argument;
use crate::types::TypeExpr;

/// Represents a field defined on an
/// [`ObjectType`](crate::types::ObjectType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Field {
    pub(crate) arguments: Vec<Argument>,
    pub(crate) def_location: loc::FilePosition,
    pub(crate) name: String,
    pub(crate) type_expr: TypeExpr,
}
impl Field {
    /// The field's declared arguments, in declaration order. Empty for most
    /// fields; for root-operation-type fields these become the operation's
    /// variable definitions.
    pub fn arguments(&self) -> &[Argument] {
        self.arguments.as_slice()
    }

    /// The innermost named type of this field's type expression, with all
    /// list/non-null wrappers stripped.
    pub fn base_type_name(&self) -> &str {
        self.type_expr.innermost_name()
    }

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
