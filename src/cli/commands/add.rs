use std::io::Write;

use super::CommandHandler;
use crate::catalog::Item;
use crate::cli::app::AddItem;
use crate::cli::session::Session;
use crate::Result;

/// Handler for the `add` command
pub struct AddCommand {
    pub item: AddItem,
}

impl AddCommand {
    pub fn new(item: AddItem) -> Self {
        Self { item }
    }

    /// Build the item through the session's factory; this is where input is validated
    fn build(&self, session: &Session) -> Result<(Item, Option<&str>)> {
        let factory = session.factory();
        let built = match &self.item {
            AddItem::Book {
                title,
                author,
                year,
                isbn,
                into,
            } => (Item::from(factory.book(title, author, *year, isbn)?), into),
            AddItem::Magazine {
                title,
                issue,
                publisher,
                year,
                into,
            } => (
                Item::from(factory.magazine(title, *issue, publisher, *year)?),
                into,
            ),
            AddItem::Dvd {
                title,
                director,
                duration,
                year,
                into,
            } => (
                Item::from(factory.disc(title, director, *duration, *year)?),
                into,
            ),
            AddItem::Collection { name, into } => (Item::from(factory.collection(name)?), into),
        };
        Ok((built.0, built.1.as_deref()))
    }
}

impl CommandHandler for AddCommand {
    fn execute(&self, session: &mut Session, out: &mut dyn Write) -> Result<()> {
        let (item, into) = self.build(session)?;
        let line = item.description();
        session.add(item, into)?;
        writeln!(out, "Added {line}")?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "add"
    }

    fn modifies_catalog(&self) -> bool {
        true
    }
}
