use std::io::Write;

use super::CommandHandler;
use crate::cli::session::Session;
use crate::Result;

/// Handler for the `list` command: one line per top-level entry
pub struct ListCommand;

impl CommandHandler for ListCommand {
    fn execute(&self, session: &mut Session, out: &mut dyn Write) -> Result<()> {
        for (index, item) in session.cursor().enumerate() {
            writeln!(out, "{:>3}. [{}] {}", index + 1, item.kind(), item.description())?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "list"
    }
}
