use crate::CommandOutput;

pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self) -> CommandOutput;
}
