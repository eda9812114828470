use std::process::ExitCode;

/// What a command prints, and the status the process exits with.
#[derive(Debug, PartialEq)]
pub(crate) struct CommandOutput {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}
impl CommandOutput {
    /// Successfully rendered documents go to stdout, failures to stderr. Any
    /// failure makes the whole run fail, even if some documents rendered.
    pub fn from_documents(documents: Vec<String>, failures: Vec<String>) -> Self {
        let exit_code =
            if failures.is_empty() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        Self {
            exit_code,
            stderr: (!failures.is_empty()).then(|| failures.join("\n")),
            stdout: (!documents.is_empty()).then(|| documents.join("\n")),
        }
    }

    /// Write both streams and hand back the exit status.
    pub fn emit(self) -> ExitCode {
        if let Some(stdout) = self.stdout {
            print!("{stdout}");
        }
        if let Some(stderr) = self.stderr {
            eprintln!("{stderr}");
        }
        self.exit_code
    }
}
