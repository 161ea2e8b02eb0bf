use crate::codegen::scalar_map;
use crate::codegen::string_utils;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::ObjectType;
use crate::types::TypeExpr;
use crate::types::TypeKind;

/// Renders one TypeScript type definition per object or input-object type.
///
/// The schema's root operation types get special treatment: instead of a
/// single aggregate definition, every root field yields a `...Variables`
/// definition (from its arguments) and a result definition (from its return
/// type), named by capitalizing the field name and suffixing the root type's
/// name.
pub struct ObjectTransformer<'schema> {
    schema: &'schema Schema,
}
impl<'schema> ObjectTransformer<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self { schema }
    }

    /// Render the TypeScript definition(s) for `object_type`.
    ///
    /// Passing a type that is neither an object nor an input object is a
    /// programmer error.
    pub fn transform(&self, object_type: &GraphQLType) -> String {
        match object_type {
            GraphQLType::Object(obj_type)
                if self.schema.is_root_type_name(obj_type.name()) =>
                self.transform_root_type(obj_type),
            GraphQLType::Object(obj_type) =>
                self.transform_object_type(obj_type),
            GraphQLType::InputObject(inputobj_type) =>
                self.transform_input_object_type(inputobj_type),
            other => panic!(
                "ObjectTransformer::transform() called with a \
                non-object type: `{}`",
                other.name(),
            ),
        }
    }

    fn transform_root_type(&self, root_type: &ObjectType) -> String {
        let mut output = String::new();
        let root_name = root_type.name();

        for (field_name, field) in root_type.fields() {
            let def_prefix = string_utils::capitalize(field_name);

            output.push_str(&format!(
                "export type {def_prefix}{root_name}Variables = {{",
            ));
            for arg in field.arguments() {
                let value = self.render_type_expr(
                    arg.type_expr(),
                    /* non_null = */ false,
                    /* input_position = */ true,
                );
                let pair = create_key_value_pair(arg.name(), &value);
                output.push_str(&format!(
                    "\n{};",
                    string_utils::indent(&pair, 1),
                ));
            }
            output.push_str("\n};\n\n");

            let result_value = self.render_type_expr(
                field.type_expr(),
                /* non_null = */ false,
                /* input_position = */ false,
            );
            output.push_str(&format!(
                "export type {def_prefix}{root_name} = {{\n{}\n{}\n}};\n\n",
                string_utils::indent(
                    &format!("__typename?: \"{root_name}\","),
                    1,
                ),
                string_utils::indent(
                    &create_key_value_pair(field_name, &result_value),
                    1,
                ),
            ));
        }

        output
    }

    fn transform_object_type(&self, obj_type: &ObjectType) -> String {
        let mut output = format!("export type {} = {{\n", obj_type.name());

        // The discriminant field is only ever present on output object
        // types, never on input objects.
        output.push_str(&string_utils::indent(
            &format!("__typename?: \"{}\";\n", obj_type.name()),
            1,
        ));

        for (field_name, field) in obj_type.fields() {
            let value = self.render_type_expr(
                field.type_expr(),
                /* non_null = */ false,
                /* input_position = */ false,
            );
            let pair = create_key_value_pair(field_name, &value);
            output.push_str(&format!(
                "{};\n",
                string_utils::indent(&pair, 1),
            ));
        }

        output.push_str("};\n\n");
        output
    }

    fn transform_input_object_type(
        &self,
        inputobj_type: &InputObjectType,
    ) -> String {
        let mut output = format!("export type {} = {{\n", inputobj_type.name());

        for (field_name, input_field) in inputobj_type.fields() {
            let value = self.render_type_expr(
                input_field.type_expr(),
                /* non_null = */ false,
                /* input_position = */ true,
            );
            let pair = create_key_value_pair(field_name, &value);
            output.push_str(&format!(
                "{};\n",
                string_utils::indent(&pair, 1),
            ));
        }

        output.push_str("};\n\n");
        output
    }

    /// Recursively render a type expression into a TypeScript type
    /// expression. Entered with `non_null = false`; only a non-null wrapper
    /// layer flips it.
    ///
    /// `input_position` selects the input slot of the scalar mapping table
    /// (variables and input-object fields) over the output slot.
    pub(crate) fn render_type_expr(
        &self,
        type_expr: &TypeExpr,
        non_null: bool,
        input_position: bool,
    ) -> String {
        let value = match self.schema.classify(type_expr) {
            // Non-null short-circuits the optional-wrapping step below.
            TypeKind::NonNull(inner) =>
                return self.render_type_expr(inner, true, input_position),

            // The nullability context passes through list wrappers; the
            // outer `| null` below is governed by the list's own
            // non-null status.
            TypeKind::List(inner) => format!(
                "Array<{}>",
                self.render_type_expr(inner, non_null, input_position),
            ),

            TypeKind::Scalar(scalar_type) =>
                match scalar_map::builtin_scalar_mapping(scalar_type.name()) {
                    Some(mapping) if input_position =>
                        mapping.input.to_string(),
                    Some(mapping) =>
                        mapping.output.to_string(),
                    // Custom scalars are opaque type references; their
                    // definitions are emitted by the generator.
                    None => scalar_type.name().to_string(),
                },

            TypeKind::Union(union_type) =>
                union_type.members().join(" | "),

            TypeKind::Enum(enum_type) =>
                enum_type.name().to_string(),

            TypeKind::Object(obj_type) =>
                obj_type.name().to_string(),

            TypeKind::InputObject(inputobj_type) =>
                inputobj_type.name().to_string(),
        };

        if non_null {
            value
        } else {
            format!("{value} | null")
        }
    }
}

fn create_key_value_pair(key: &str, value: &str) -> String {
    format!("{key}: {value}")
}
