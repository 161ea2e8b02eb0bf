/// The TypeScript primitive a built-in scalar maps to, with distinct slots
/// for input (variable/input-field) and output positions. The slots are
/// identical for every built-in scalar today; custom scalars bypass this
/// table entirely and render as their own name.
pub(crate) struct ScalarMapping {
    pub input: &'static str,
    pub output: &'static str,
}

pub(crate) fn builtin_scalar_mapping(scalar_name: &str) -> Option<ScalarMapping> {
    match scalar_name {
        "ID" | "String" => Some(ScalarMapping {
            input: "string",
            output: "string",
        }),
        "Int" | "Float" => Some(ScalarMapping {
            input: "number",
            output: "number",
        }),
        "Boolean" => Some(ScalarMapping {
            input: "boolean",
            output: "boolean",
        }),
        _ => None,
    }
}
