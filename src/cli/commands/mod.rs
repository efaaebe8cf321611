pub mod add;
pub mod demo;
pub mod list;
pub mod remove;
pub mod search;
pub mod shell;
pub mod show;

use std::io::Write;

use super::session::Session;
use crate::Result;

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Execute the command against `session`, writing user output to `out`
    fn execute(&self, session: &mut Session, out: &mut dyn Write) -> Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;

    /// Whether the command reads the existing catalog file
    fn needs_catalog(&self) -> bool {
        true
    }

    /// Whether the catalog must be saved back to its file afterwards
    fn modifies_catalog(&self) -> bool {
        false
    }
}
