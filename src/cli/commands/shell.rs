use super::{CommandContext, CommandHandler};
use crate::cli::shell::Shell;
use crate::Result;
use std::io;

/// Handler for the interactive session
pub struct ShellCommand {
    context: CommandContext,
}

impl CommandHandler for ShellCommand {
    fn execute(&self) -> Result<()> {
        let stdin = io::stdin();
        let mut shell = Shell::new(stdin.lock(), io::stdout(), self.context.paths.clone());
        shell.run()
    }

    fn name(&self) -> &'static str {
        "shell"
    }
}

impl ShellCommand {
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }
}
