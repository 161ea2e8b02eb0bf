use crate::ast;
use crate::types::TypeExpr;

/// Represents a single argument declared on a [`Field`](crate::types::Field).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Argument {
    pub(crate) name: String,
    pub(crate) type_expr: TypeExpr,
}
impl Argument {
    pub(crate) fn from_ast(input_val: &ast::schema::InputValue) -> Self {
        Self {
            name: input_val.name.to_string(),
            type_expr: TypeExpr::from_ast_type(&input_val.value_type),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_expr(&self) -> &TypeExpr {
        &self.type_expr
    }
}
