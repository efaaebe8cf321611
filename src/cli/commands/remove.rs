use std::io::Write;

use super::CommandHandler;
use crate::cli::session::Session;
use crate::{BookshelfError, Result};

/// Handler for the `remove` command
pub struct RemoveCommand {
    pub title: String,
    pub from: Option<String>,
}

impl RemoveCommand {
    pub fn new(title: String, from: Option<String>) -> Self {
        Self { title, from }
    }
}

impl CommandHandler for RemoveCommand {
    fn execute(&self, session: &mut Session, out: &mut dyn Write) -> Result<()> {
        match session.remove(&self.title, self.from.as_deref())? {
            Some(item) => {
                writeln!(out, "Removed {}", item.description())?;
                Ok(())
            }
            None => Err(BookshelfError::Cli(format!(
                "no entry titled '{}'",
                self.title
            ))),
        }
    }

    fn name(&self) -> &'static str {
        "remove"
    }

    fn modifies_catalog(&self) -> bool {
        true
    }
}
