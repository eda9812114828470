mod cli;
mod command;
mod command_output;
mod commands;
mod document_description;
mod logging;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_output::CommandOutput;

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    cli.cmd.run().await.emit()
}

#[cfg(test)]
mod tests;
