use crate::commands::schema_files::SchemaFileArgs;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_merge::PareEngine;
use libgraphql_merge::SchemaSource;
use std::path::PathBuf;

/// Subtracts the source schema's fields, enum values, union members and
/// scalars from the target schema.
#[derive(Debug, clap::Args)]
pub(crate) struct PareCmd {
    #[command(flatten)]
    files: SchemaFileArgs,

    #[arg(
        help="Paths to the GraphQL files or directories that make up the \
             schema being pared.",
        long,
        num_args=1..,
        required=true,
    )]
    target: Vec<PathBuf>,

    #[arg(
        help="Paths to the GraphQL files or directories that make up the \
             schema to subtract.",
        long,
        num_args=1..,
        required=true,
    )]
    source: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for PareCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let target = match self.files.load_side("target", &self.target) {
            Ok(target) => target,
            Err(errors) => return CommandResult::errors("Unable to load the target schema", &errors),
        };
        let source = match self.files.load_side("source", &self.source) {
            Ok(source) => source,
            Err(errors) => return CommandResult::errors("Unable to load the source schema", &errors),
        };
        let num_target_defs = target.bundle.document().definitions.len();

        let pared = match PareEngine::new().pare(
            &SchemaSource::Bundle(target.bundle),
            &SchemaSource::Bundle(source.bundle),
        ) {
            Ok(pared) => pared,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Errors paring schemas: {e}",
                output_utils::RED_X,
            )),
        };

        let sdl = pared.sdl();
        match self.files.write_output(&sdl) {
            Ok(false) => CommandResult::stdout(format_args!("{sdl}")),
            Ok(true) => CommandResult::stdout(format_args!(
                concat!(
                    "{} Pared GraphQL schemas:\n",
                    "  * Read {} target files and {} source files.\n",
                    "  * Skipped {} non-file entries.\n",
                    "  * Kept {} of {} top-level target definitions.",
                ),
                output_utils::GREEN_CHECK,
                target.num_files,
                source.num_files,
                target.num_skipped + source.num_skipped,
                pared.document().definitions.len(),
                num_target_defs,
            )),
            Err(e) => CommandResult::errors("Unable to write the pared schema", &[e]),
        }
    }
}
