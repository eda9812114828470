mod render;

use crate::CommandOutput;
use render::RenderCmd;

#[derive(Debug, clap::Subcommand)]
pub(crate) enum CommandEnum {
    /// Render JSON document descriptions as GraphQL.
    Render(Box<RenderCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self) -> CommandOutput {
        match self {
            Self::Render(cmd) => cmd.run().await,
        }
    }
}
