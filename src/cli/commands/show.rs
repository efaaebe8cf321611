use std::io::Write;

use super::CommandHandler;
use crate::cli::session::Session;
use crate::Result;

/// Handler for the `show` command
pub struct ShowCommand;

impl CommandHandler for ShowCommand {
    fn execute(&self, session: &mut Session, out: &mut dyn Write) -> Result<()> {
        let stats = session.stats();
        write!(out, "{}", session.catalog())?;
        writeln!(
            out,
            "\n{} books, {} magazines, {} DVDs in {} collections",
            stats.books, stats.magazines, stats.discs, stats.collections
        )?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "show"
    }
}
