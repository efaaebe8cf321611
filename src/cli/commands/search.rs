use std::io::Write;

use super::CommandHandler;
use crate::cli::session::Session;
use crate::Result;

/// Handler for the `search` command
pub struct SearchCommand {
    pub term: String,
}

impl SearchCommand {
    pub fn new(term: String) -> Self {
        Self { term }
    }
}

impl CommandHandler for SearchCommand {
    fn execute(&self, session: &mut Session, out: &mut dyn Write) -> Result<()> {
        let results = session.search(&self.term);

        if results.is_empty() {
            writeln!(out, "Nothing found for: {}", self.term.trim())?;
            return Ok(());
        }

        writeln!(out, "Found {} item(s):", results.len())?;
        for item in &results {
            writeln!(out, "  {}", item.description())?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "search"
    }
}
