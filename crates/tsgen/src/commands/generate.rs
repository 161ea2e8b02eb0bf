use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libtsgen::codegen::Generator;
use libtsgen::schema::Schema;
use std::collections::HashSet;
use std::error::Error;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for schema \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Path to write the generated TypeScript to. Prints to stdout \
             when omitted.",
        long,
        short='o',
    )]
    out: Option<PathBuf>,

    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing schema files.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<Box<dyn Error>> = vec![];

        // Normalize the set of file extensions to filter with (extensions
        // from `Path::extension()` never carry a leading dot).
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();

        // Find all schema files recursively located at or under each path
        // passed as an arg.
        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if entry.file_type().is_file() {
                            log::trace!("Found file at {path:#?}.");
                            if let Some(ext) = path.extension().map(|s| s.to_string_lossy())
                                && graphql_file_exts.contains(ext.as_ref()) {
                                file_paths.push(path.to_path_buf());
                            }
                        } else {
                            log::trace!("Skipping non-file: {path:#?}.");
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(Box::new(e));
                        continue
                    },
                }
            }
        }

        // If the user specifies a single file path as an argument, presume
        // the user explicitly wants that file loaded as a schema file even
        // if its file extension doesn't match one of the extensions in
        // `graphql_file_exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding with {first_arg_path:#?} even though it doesn't \
                match any of the --graphql-file-exts ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path.to_path_buf());
        }

        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors while scanning input paths: {errors:#?}",
                output_utils::RED_X,
            ));
        }

        if file_paths.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} No schema files found under the given paths.",
                output_utils::RED_X,
            ));
        }

        log::debug!("Found {} schema files.", file_paths.len());

        let mut schema_builder = Schema::builder();
        if let Err(e) = schema_builder.load_files(file_paths.clone()) {
            return CommandResult::stderr(format_args!(
                "{} Failed to load schema: {e}",
                output_utils::RED_X,
            ));
        }
        let schema = match schema_builder.build() {
            Ok(schema) => schema,
            Err(e) => {
                return CommandResult::stderr(format_args!(
                    "{} Failed to build schema: {e}",
                    output_utils::RED_X,
                ));
            },
        };

        let generated = Generator::new(&schema).generate();

        match &self.out {
            Some(out_path) => match std::fs::write(out_path, &generated) {
                Ok(()) => CommandResult::stdout(format_args!(
                    concat!(
                        "{} Generated TypeScript written to {}:\n",
                        "  * Read {} schema files.\n",
                        "  * Emitted definitions for {} schema types.",
                    ),
                    output_utils::GREEN_CHECK,
                    out_path.display(),
                    file_paths.len(),
                    schema.types().len(),
                )),

                Err(e) => CommandResult::stderr(format_args!(
                    "{} Failed to write {}: {e}",
                    output_utils::RED_X,
                    out_path.display(),
                )),
            },

            None => CommandResult::stdout(format_args!("{generated}")),
        }
    }
}
