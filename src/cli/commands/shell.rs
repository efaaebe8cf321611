use std::io::{self, Write};

use super::CommandHandler;
use crate::cli::session::Session;
use crate::cli::shell::Shell;
use crate::Result;

/// Handler for the `shell` command: the interactive menu on stdin
pub struct ShellCommand;

impl CommandHandler for ShellCommand {
    fn execute(&self, session: &mut Session, out: &mut dyn Write) -> Result<()> {
        let stdin = io::stdin();
        Shell::new(session, stdin.lock(), out).run()
    }

    fn name(&self) -> &'static str {
        "shell"
    }
}
