mod merge;
mod pare;
mod schema_files;

use crate::Cli;
use crate::CommandResult;
use merge::MergeCmd;
use pare::PareCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    Merge(Box<MergeCmd>),
    Pare(Box<PareCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Merge(cmd) => cmd.run(cli).await,
            Self::Pare(cmd) => cmd.run(cli).await,
        }
    }
}
