use crate::codegen::string_utils;
use crate::schema::Schema;
use crate::types::Argument;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::TypeExpr;
use std::collections::HashMap;

/// Renders one executable operation document per field of a root operation
/// type: the operation signature, a variable-binding call line, and a
/// recursively expanded selection set over the field's result type.
///
/// Selection text is memoized per object-type name, so repeated types render
/// once and are reused verbatim. The memo is owned by this instance; use one
/// transformer per root-type render and never share it across unrelated
/// renders.
pub struct OperationTransformer<'schema> {
    in_progress: Vec<String>,
    memo: HashMap<String, String>,
    schema: &'schema Schema,
}
impl<'schema> OperationTransformer<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self {
            in_progress: vec![],
            memo: HashMap::new(),
            schema,
        }
    }

    /// Render one operation document per field of `operation_type`,
    /// concatenated in field-declaration order. `keyword` is the operation's
    /// literal keyword (`"query"` or `"mutation"`).
    pub fn transform(
        &mut self,
        operation_type: &'schema ObjectType,
        keyword: &str,
    ) -> String {
        let mut output = String::new();

        for field in operation_type.fields().values() {
            output.push_str(&self.build_operation(field, keyword));
        }

        output
    }

    fn build_operation(
        &mut self,
        field: &'schema Field,
        keyword: &str,
    ) -> String {
        let mut operation = format!(
            "{keyword} {}",
            string_utils::capitalize(field.name()),
        );
        let mut alias = field.name().to_string();

        operation.push_str(&build_args(
            field.arguments(),
            |arg| format!("{}: {}", arg.name(), arg.type_expr()),
        ));
        alias.push_str(&build_args(
            field.arguments(),
            |arg| format!("{}: ${}", arg.name(), arg.name()),
        ));

        let mut output = format!("{operation} {{\n");
        output.push_str(&string_utils::indent(&alias, 1));
        output.push_str(&self.build_fields(field.type_expr(), 2));
        output.push_str("\n}\n\n");

        output
    }

    /// Expand the selection set for `type_expr`'s base type.
    ///
    /// Scalar and enum leaves expand to nothing: the caller's field-name
    /// line is the whole selection.
    fn build_fields(
        &mut self,
        type_expr: &'schema TypeExpr,
        depth: usize,
    ) -> String {
        let base_name = type_expr.innermost_name();
        let schema = self.schema;
        match schema.type_named(base_name) {
            Some(GraphQLType::Object(obj_type)) =>
                self.build_object_selection(obj_type, depth),
            _ => String::new(),
        }
    }

    fn build_object_selection(
        &mut self,
        obj_type: &'schema ObjectType,
        depth: usize,
    ) -> String {
        if let Some(memoized) = self.memo.get(obj_type.name()) {
            log::trace!(
                "Reusing memoized selection text for `{}`.",
                obj_type.name(),
            );
            return memoized.clone();
        }

        // Cycle bound: a type reached again while its own selection is still
        // being built expands exactly one more level, leaf fields only.
        if self.in_progress.iter().any(|name| name == obj_type.name()) {
            return self.build_leaf_selection(obj_type, depth);
        }
        self.in_progress.push(obj_type.name().to_string());

        let schema = self.schema;
        let mut output = String::from(" {\n");

        for (field_name, field) in obj_type.fields() {
            output.push_str(&string_utils::indent(field_name, depth));

            match schema.type_named(field.base_type_name()) {
                Some(GraphQLType::Object(inner_type)) => {
                    let nested =
                        self.build_object_selection(inner_type, depth + 1);
                    output.push_str(&nested);
                },

                Some(GraphQLType::Union(union_type)) => {
                    for member_name in union_type.members() {
                        let member_selection =
                            match schema.type_named(member_name) {
                                Some(GraphQLType::Object(member_type)) =>
                                    self.build_object_selection(
                                        member_type,
                                        depth + 1,
                                    ),
                                _ => String::new(),
                            };
                        output.push('\n');
                        output.push_str(&string_utils::indent(
                            &format!("... on {member_name}"),
                            depth,
                        ));
                        output.push_str(&member_selection);
                    }
                },

                _ => {},
            }

            output.push('\n');
        }

        output.push_str(&string_utils::indent("}", depth - 1));

        self.in_progress.pop();
        self.memo.insert(obj_type.name().to_string(), output.clone());
        output
    }

    /// One-level expansion used when a cycle is detected: only the type's
    /// scalar/enum fields are selected, and nothing recurses further.
    /// Deliberately not memoized; the truncated text must not stand in for
    /// the full rendering elsewhere.
    fn build_leaf_selection(
        &self,
        obj_type: &ObjectType,
        depth: usize,
    ) -> String {
        let mut output = String::from(" {\n");

        for (field_name, field) in obj_type.fields() {
            let is_leaf = matches!(
                self.schema.type_named(field.base_type_name()),
                Some(GraphQLType::Scalar(_) | GraphQLType::Enum(_)),
            );
            if is_leaf {
                output.push_str(&string_utils::indent(field_name, depth));
                output.push('\n');
            }
        }

        output.push_str(&string_utils::indent("}", depth - 1));
        output
    }
}

fn build_args<F>(args: &[Argument], key_value_pair: F) -> String
where
    F: Fn(&Argument) -> String,
{
    if args.is_empty() {
        return String::new();
    }

    format!(
        "({})",
        args.iter()
            .map(key_value_pair)
            .collect::<Vec<_>>()
            .join(", "),
    )
}
