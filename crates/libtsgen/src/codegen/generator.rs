use crate::codegen::ObjectTransformer;
use crate::codegen::OperationTransformer;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::GraphQLType;
use crate::types::UnionType;

/// Walks a [`Schema`] and emits the full generated TypeScript source: one
/// definition per named type (in declaration order), followed by the query
/// and mutation operation documents.
pub struct Generator<'schema> {
    schema: &'schema Schema,
}
impl<'schema> Generator<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self { schema }
    }

    pub fn generate(&self) -> String {
        let mut output = String::new();
        let object_transformer = ObjectTransformer::new(self.schema);

        log::debug!(
            "Generating TypeScript for {} schema types.",
            self.schema.types().len(),
        );

        for graphql_type in self.schema.types().values() {
            match graphql_type {
                GraphQLType::Scalar(scalar_type) if scalar_type.is_builtin() =>
                    {},

                // Emit a definition for each custom scalar so the opaque
                // references produced by the transformers resolve within the
                // generated file.
                GraphQLType::Scalar(scalar_type) =>
                    output.push_str(&format!(
                        "export type {} = unknown;\n\n",
                        scalar_type.name(),
                    )),

                GraphQLType::Enum(enum_type) =>
                    output.push_str(&render_enum(enum_type)),

                GraphQLType::Union(union_type) =>
                    output.push_str(&render_union_alias(union_type)),

                GraphQLType::Object(_) | GraphQLType::InputObject(_) =>
                    output.push_str(
                        &object_transformer.transform(graphql_type),
                    ),
            }
        }

        // One fresh transformer per root: the selection memo never crosses
        // unrelated renders.
        if let Some(query_type) = self.schema.query_type() {
            output.push_str(&OperationTransformer::new(self.schema)
                .transform(query_type, "query"));
        }
        if let Some(mutation_type) = self.schema.mutation_type() {
            output.push_str(&OperationTransformer::new(self.schema)
                .transform(mutation_type, "mutation"));
        }

        output
    }
}

fn render_enum(enum_type: &EnumType) -> String {
    let values =
        enum_type.values()
            .iter()
            .map(|value| format!("\"{value}\""))
            .collect::<Vec<_>>()
            .join(" | ");
    format!("export type {} = {values};\n\n", enum_type.name())
}

fn render_union_alias(union_type: &UnionType) -> String {
    format!(
        "export type {} = {};\n\n",
        union_type.name(),
        union_type.members().join(" | "),
    )
}
