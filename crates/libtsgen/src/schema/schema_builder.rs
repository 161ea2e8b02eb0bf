use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::schema::Schema;
use crate::types::Argument;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeExpr;
use crate::types::UnionType;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, Box<SchemaBuildError>>;

const BUILTIN_SCALAR_NAMES: [&str; 5] = [
    "Boolean",
    "Float",
    "ID",
    "Int",
    "String",
];

/// Utility for building a [`Schema`] from SDL text.
///
/// Multiple files (or raw strings) can be loaded into one builder; types
/// accumulate in declaration order across loads.
#[derive(Debug)]
pub struct SchemaBuilder {
    mutation_type: Option<RootTypeDef>,
    query_type: Option<RootTypeDef>,
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        // The built-in scalars are seeded eagerly so that every name
        // reachable from a well-formed schema classifies without a special
        // case.
        let mut types = IndexMap::new();
        for name in BUILTIN_SCALAR_NAMES {
            types.insert(name.to_string(), GraphQLType::Scalar(ScalarType {
                builtin: true,
                def_location: None,
                name: name.to_string(),
            }));
        }

        Self {
            mutation_type: None,
            query_type: None,
            types,
        }
    }

    pub fn load_file(
        &mut self,
        file_path: impl AsRef<Path>,
    ) -> Result<()> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        &mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<()> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self.load_content(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(())
    }

    pub fn load_content(
        &mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<()> {
        let doc = ast::schema::parse(content)
            .map_err(|err| SchemaBuildError::SchemaParseError {
                file: file_path.to_owned(),
                err,
            })?;

        for def in doc.definitions {
            self.visit_definition(&file_path, def)?;
        }

        Ok(())
    }

    /// Finalize the builder into an immutable [`Schema`].
    ///
    /// Root operation types default to object types named `Query` and
    /// `Mutation` when no `schema {}` block configured them. A schema
    /// missing either root still builds; operation generation for the
    /// missing root is simply skipped downstream.
    pub fn build(self) -> Result<Schema> {
        let query_type = Self::resolve_root_type(
            &self.types,
            self.query_type,
            "query",
            "Query",
        )?;
        let mutation_type = Self::resolve_root_type(
            &self.types,
            self.mutation_type,
            "mutation",
            "Mutation",
        )?;

        Ok(Schema {
            mutation_type,
            query_type,
            types: self.types,
        })
    }

    fn resolve_root_type(
        types: &IndexMap<String, GraphQLType>,
        configured: Option<RootTypeDef>,
        operation: &'static str,
        default_name: &str,
    ) -> Result<Option<String>> {
        if let Some(def) = configured {
            return match types.get(def.type_name.as_str()) {
                Some(GraphQLType::Object(_)) => Ok(Some(def.type_name)),
                _ => Err(SchemaBuildError::InvalidRootOperationType {
                    operation,
                    type_name: def.type_name,
                    location: def.def_location,
                })?,
            };
        }

        Ok(match types.get(default_name) {
            Some(GraphQLType::Object(_)) => Some(default_name.to_string()),
            _ => None,
        })
    }

    fn check_for_conflicting_type(
        &self,
        file_position: &loc::FilePosition,
        name: &str,
    ) -> Result<()> {
        if let Some(conflicting_type) = self.types.get(name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: name.to_string(),
                def1: conflicting_type.def_location().cloned(),
                def2: file_position.clone(),
            })?;
        }
        Ok(())
    }

    fn visit_definition(
        &mut self,
        file_path: &Option<PathBuf>,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_schemablock_definition(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_type_definition(file_path, type_def),
            Definition::TypeExtension(type_ext) =>
                self.visit_type_extension(file_path, type_ext),
            Definition::DirectiveDefinition(directive_def) => {
                // Directives carry no information the generated TypeScript
                // can represent.
                log::debug!(
                    "Ignoring directive definition `@{}`.",
                    directive_def.name,
                );
                Ok(())
            },
        }
    }

    fn visit_schemablock_definition(
        &mut self,
        file_path: &Option<PathBuf>,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let file_position = loc::FilePosition::from_pos(
            file_path.as_ref(),
            schema_def.position,
        );

        if let Some(type_name) = &schema_def.query {
            if let Some(existing_def) = &self.query_type {
                return Err(SchemaBuildError::DuplicateRootOperationDefinition {
                    operation: "query",
                    location1: existing_def.def_location.clone(),
                    location2: file_position,
                })?;
            }
            self.query_type = Some(RootTypeDef {
                def_location: file_position.clone(),
                type_name: type_name.to_string(),
            });
        }

        if let Some(type_name) = &schema_def.mutation {
            if let Some(existing_def) = &self.mutation_type {
                return Err(SchemaBuildError::DuplicateRootOperationDefinition {
                    operation: "mutation",
                    location1: existing_def.def_location.clone(),
                    location2: file_position,
                })?;
            }
            self.mutation_type = Some(RootTypeDef {
                def_location: file_position.clone(),
                type_name: type_name.to_string(),
            });
        }

        if let Some(type_name) = &schema_def.subscription {
            log::debug!(
                "Ignoring subscription root type `{type_name}`: subscription \
                operations are not generated.",
            );
        }

        Ok(())
    }

    fn visit_type_definition(
        &mut self,
        file_path: &Option<PathBuf>,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        match type_def {
            ast::schema::TypeDefinition::Enum(enum_def) =>
                self.visit_enum_type_definition(file_path, enum_def),
            ast::schema::TypeDefinition::InputObject(inputobj_def) =>
                self.visit_inputobj_type_definition(file_path, inputobj_def),
            ast::schema::TypeDefinition::Interface(iface_def) =>
                Err(SchemaBuildError::UnsupportedInterfaceType {
                    type_name: iface_def.name.to_string(),
                    location: loc::FilePosition::from_pos(
                        file_path.as_ref(),
                        iface_def.position,
                    ),
                })?,
            ast::schema::TypeDefinition::Object(obj_def) =>
                self.visit_object_type_definition(file_path, obj_def),
            ast::schema::TypeDefinition::Scalar(scalar_def) =>
                self.visit_scalar_type_definition(file_path, scalar_def),
            ast::schema::TypeDefinition::Union(union_def) =>
                self.visit_union_type_definition(file_path, union_def),
        }
    }

    fn visit_type_extension(
        &mut self,
        file_path: &Option<PathBuf>,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;
        let (type_name, position) = match &ext {
            TypeExtension::Enum(e) => (e.name.as_str(), e.position),
            TypeExtension::InputObject(e) => (e.name.as_str(), e.position),
            TypeExtension::Interface(e) => (e.name.as_str(), e.position),
            TypeExtension::Object(e) => (e.name.as_str(), e.position),
            TypeExtension::Scalar(e) => (e.name.as_str(), e.position),
            TypeExtension::Union(e) => (e.name.as_str(), e.position),
        };
        Err(SchemaBuildError::UnsupportedTypeExtension {
            type_name: type_name.to_string(),
            location: loc::FilePosition::from_pos(file_path.as_ref(), position),
        })?
    }

    fn visit_enum_type_definition(
        &mut self,
        file_path: &Option<PathBuf>,
        def: ast::schema::EnumType,
    ) -> Result<()> {
        let file_position = loc::FilePosition::from_pos(
            file_path.as_ref(),
            def.position,
        );
        self.check_for_conflicting_type(&file_position, def.name.as_str())?;

        let values =
            def.values
                .iter()
                .map(|val| val.name.to_string())
                .collect();

        self.types.insert(
            def.name.to_string(),
            GraphQLType::Enum(EnumType {
                def_location: file_position,
                name: def.name.to_string(),
                values,
            }),
        );

        Ok(())
    }

    fn visit_inputobj_type_definition(
        &mut self,
        file_path: &Option<PathBuf>,
        def: ast::schema::InputObjectType,
    ) -> Result<()> {
        let file_position = loc::FilePosition::from_pos(
            file_path.as_ref(),
            def.position,
        );
        self.check_for_conflicting_type(&file_position, def.name.as_str())?;

        let fields =
            def.fields
                .iter()
                .map(|input_field| {
                    (input_field.name.to_string(), InputField {
                        def_location: loc::FilePosition::from_pos(
                            file_path.as_ref(),
                            input_field.position,
                        ),
                        name: input_field.name.to_string(),
                        type_expr: TypeExpr::from_ast_type(
                            &input_field.value_type,
                        ),
                    })
                })
                .collect();

        self.types.insert(
            def.name.to_string(),
            GraphQLType::InputObject(InputObjectType {
                def_location: file_position,
                fields,
                name: def.name.to_string(),
            }),
        );

        Ok(())
    }

    fn visit_object_type_definition(
        &mut self,
        file_path: &Option<PathBuf>,
        def: ast::schema::ObjectType,
    ) -> Result<()> {
        let file_position = loc::FilePosition::from_pos(
            file_path.as_ref(),
            def.position,
        );
        self.check_for_conflicting_type(&file_position, def.name.as_str())?;

        let fields = object_fields_from_ast(file_path, &def.fields);

        self.types.insert(
            def.name.to_string(),
            GraphQLType::Object(ObjectType {
                def_location: file_position,
                fields,
                name: def.name.to_string(),
            }),
        );

        Ok(())
    }

    fn visit_scalar_type_definition(
        &mut self,
        file_path: &Option<PathBuf>,
        def: ast::schema::ScalarType,
    ) -> Result<()> {
        let file_position = loc::FilePosition::from_pos(
            file_path.as_ref(),
            def.position,
        );
        self.check_for_conflicting_type(&file_position, def.name.as_str())?;

        self.types.insert(
            def.name.to_string(),
            GraphQLType::Scalar(ScalarType {
                builtin: false,
                def_location: Some(file_position),
                name: def.name.to_string(),
            }),
        );

        Ok(())
    }

    fn visit_union_type_definition(
        &mut self,
        file_path: &Option<PathBuf>,
        def: ast::schema::UnionType,
    ) -> Result<()> {
        let file_position = loc::FilePosition::from_pos(
            file_path.as_ref(),
            def.position,
        );
        self.check_for_conflicting_type(&file_position, def.name.as_str())?;

        let members =
            def.types
                .iter()
                .map(|type_name| type_name.to_string())
                .collect();

        self.types.insert(
            def.name.to_string(),
            GraphQLType::Union(UnionType {
                def_location: file_position,
                members,
                name: def.name.to_string(),
            }),
        );

        Ok(())
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error)]
pub enum SchemaBuildError {
    #[error(
        "The `schema` block at {location2} redefines the {operation} root \
        operation type (previously set at {location1})."
    )]
    DuplicateRootOperationDefinition {
        operation: &'static str,
        location1: loc::FilePosition,
        location2: loc::FilePosition,
    },

    #[error("Multiple types defined with the name `{type_name}`.")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: Option<loc::FilePosition>,
        def2: loc::FilePosition,
    },

    #[error(
        "The configured {operation} root type `{type_name}` is not an object \
        type defined in this schema."
    )]
    InvalidRootOperationType {
        operation: &'static str,
        type_name: String,
        location: loc::FilePosition,
    },

    #[error("Failed to read a schema file.")]
    SchemaFileReadError(
        #[source]
        Box<file_reader::ReadContentError>,
    ),

    #[error("Failed to parse schema text ({file:?}).")]
    SchemaParseError {
        file: Option<PathBuf>,
        #[source]
        err: ast::schema::ParseError,
    },

    #[error(
        "Interface types are not representable in the generated output \
        (`{type_name}` at {location})."
    )]
    UnsupportedInterfaceType {
        type_name: String,
        location: loc::FilePosition,
    },

    #[error(
        "Type extensions are not supported (`extend` on `{type_name}` at \
        {location})."
    )]
    UnsupportedTypeExtension {
        type_name: String,
        location: loc::FilePosition,
    },
}

/// Tracks where a `schema {}` block assigned a root operation type, so that
/// a later conflicting block can report both locations.
#[derive(Clone, Debug)]
struct RootTypeDef {
    def_location: loc::FilePosition,
    type_name: String,
}

fn object_fields_from_ast(
    file_path: &Option<PathBuf>,
    fields: &[ast::schema::Field],
) -> IndexMap<String, Field> {
    fields.iter().map(|field| (field.name.to_string(), Field {
        arguments: field.arguments
            .iter()
            .map(Argument::from_ast)
            .collect(),
        def_location: loc::FilePosition::from_pos(
            file_path.as_ref(),
            field.position,
        ),
        name: field.name.to_string(),
        type_expr: TypeExpr::from_ast_type(&field.field_type),
    })).collect()
}
