use std::io::Write;

use super::CommandHandler;
use crate::catalog::demo_catalog;
use crate::cli::session::Session;
use crate::{BookshelfError, Result};

/// Handler for the `demo` command: replace the catalog file with the demo catalog
pub struct DemoCommand {
    pub force: bool,
}

impl DemoCommand {
    pub fn new(force: bool) -> Self {
        Self { force }
    }
}

impl CommandHandler for DemoCommand {
    fn execute(&self, session: &mut Session, out: &mut dyn Write) -> Result<()> {
        if session.from_disk() && !self.force {
            return Err(BookshelfError::Cli(format!(
                "'{}' already exists (use --force to overwrite)",
                session.file()
            )));
        }

        let path = session.replace_catalog(demo_catalog()?)?;
        writeln!(out, "Wrote demo catalog to {}", path.display())?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "demo"
    }

    fn needs_catalog(&self) -> bool {
        !self.force
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_forced_demo_skips_reading_the_catalog() {
        assert!(DemoCommand::new(false).needs_catalog());
        assert!(!DemoCommand::new(true).needs_catalog());
    }
}
