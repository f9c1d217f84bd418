use crate::commands::schema_files::SchemaFileArgs;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_merge::MergeEngine;
use libgraphql_merge::SchemaSource;
use std::path::PathBuf;

/// Merges the source schema into the target schema.
#[derive(Debug, clap::Args)]
pub(crate) struct MergeCmd {
    #[command(flatten)]
    files: SchemaFileArgs,

    #[arg(
        help="Paths to the GraphQL files or directories that make up the \
             schema being merged into.",
        long,
        num_args=1..,
        required=true,
    )]
    target: Vec<PathBuf>,

    #[arg(
        help="Paths to the GraphQL files or directories that make up the \
             schema being merged in. Its definitions win on conflict.",
        long,
        num_args=1..,
        required=true,
    )]
    source: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for MergeCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let target = match self.files.load_side("target", &self.target) {
            Ok(target) => target,
            Err(errors) => return CommandResult::errors("Unable to load the target schema", &errors),
        };
        let source = match self.files.load_side("source", &self.source) {
            Ok(source) => source,
            Err(errors) => return CommandResult::errors("Unable to load the source schema", &errors),
        };

        let merged = match MergeEngine::default().merge(
            &SchemaSource::Bundle(target.bundle),
            &SchemaSource::Bundle(source.bundle),
        ) {
            Ok(merged) => merged,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Errors merging schemas: {e}",
                output_utils::RED_X,
            )),
        };

        let sdl = merged.sdl();
        match self.files.write_output(&sdl) {
            Ok(false) => CommandResult::stdout(format_args!("{sdl}")),
            Ok(true) => CommandResult::stdout(format_args!(
                concat!(
                    "{} Merged GraphQL schemas:\n",
                    "  * Read {} target files and {} source files.\n",
                    "  * Skipped {} non-file entries.\n",
                    "  * Wrote {} top-level definitions.",
                ),
                output_utils::GREEN_CHECK,
                target.num_files,
                source.num_files,
                target.num_skipped + source.num_skipped,
                merged.document().definitions.len(),
            )),
            Err(e) => CommandResult::errors("Unable to write the merged schema", &[e]),
        }
    }
}
