use crate::loc;

/// Represents a
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars) defined
/// within some [`Schema`](crate::schema::Schema), including the five
/// built-in scalars which are pre-seeded at build time.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarType {
    pub(crate) builtin: bool,
    pub(crate) def_location: Option<loc::FilePosition>,
    pub(crate) name: String,
}
impl ScalarType {
    /// Whether this is one of the built-in `ID`/`String`/`Int`/`Float`/
    /// `Boolean` scalars (as opposed to a custom scalar defined in the
    /// schema).
    pub fn is_builtin(&self) -> bool {
        self.builtin
    }

    pub fn def_location(&self) -> Option<&loc::FilePosition> {
        self.def_location.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
