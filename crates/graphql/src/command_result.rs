use std::process::ExitCode;

#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }

    /// Reports a failed command, listing every error that led to it.
    pub fn errors(summary: &str, errors: &[anyhow::Error]) -> Self {
        let details = errors.iter()
            .map(|err| format!("  * {err:#}"))
            .collect::<Vec<_>>()
            .join("\n");
        Self::stderr(format_args!(
            "{} {summary}:\n{details}",
            crate::output_utils::RED_X,
        ))
    }
}
