use crate::commands::CommandEnum;

/// Build GraphQL operation documents from JSON descriptions.
#[derive(clap::Parser, Debug)]
#[command(arg_required_else_help = true, name = "graphql-build", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: CommandEnum,

    #[arg(
        global=true,
        help="Log at debug level, regardless of `LOG_LEVEL`.",
        long,
        short='v',
    )]
    pub(crate) verbose: bool,
}
