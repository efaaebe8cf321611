//! Interactive menu over a [`Session`]
//!
//! Reads choices line by line from any `BufRead` and writes to any `Write`,
//! so it runs the same against a terminal or a test buffer. Errors from the
//! catalog are shown as short messages; storage failures show only their
//! top-level message, the cause goes to the log.

use std::io::{BufRead, Write};
use tracing::{error, info};

use super::session::Session;
use crate::catalog::{Item, ValidationError};
use crate::Result;

const RULE: &str = "===============================";

pub struct Shell<'a, R, W> {
    session: &'a mut Session,
    input: R,
    output: W,
}

/// Outcome of reading one numeric field
enum Number {
    Value(i32),
    Invalid,
    Eof,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(session: &'a mut Session, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    /// Run the menu until the user picks 0 or input ends
    pub fn run(&mut self) -> Result<()> {
        info!("Starting interactive session");
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                break;
            };

            match line.trim().parse::<u8>() {
                Ok(1) => self.display_catalog()?,
                Ok(2) => self.search_items()?,
                Ok(3) => self.add_book()?,
                Ok(4) => self.add_magazine()?,
                Ok(5) => self.add_disc()?,
                Ok(6) => self.add_collection()?,
                Ok(7) => self.save_catalog()?,
                Ok(8) => self.load_catalog()?,
                Ok(9) => self.iterate_catalog()?,
                Ok(0) => break,
                Ok(_) => writeln!(self.output, "Invalid option. Please try again.")?,
                Err(_) => writeln!(self.output, "Please enter a valid number.")?,
            }
        }
        info!("Leaving interactive session");
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "===== BOOKSHELF =====")?;
        writeln!(self.output, "1. Show the catalog")?;
        writeln!(self.output, "2. Search")?;
        writeln!(self.output, "3. Add a book")?;
        writeln!(self.output, "4. Add a magazine")?;
        writeln!(self.output, "5. Add a DVD")?;
        writeln!(self.output, "6. Create a collection")?;
        writeln!(self.output, "7. Save the catalog")?;
        writeln!(self.output, "8. Load a catalog")?;
        writeln!(self.output, "9. List top-level entries")?;
        writeln!(self.output, "0. Exit")?;
        write!(self.output, "Select an option: ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Next input line without its terminator; `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;
        self.read_line()
    }

    fn prompt_number(&mut self, label: &str) -> Result<Number> {
        Ok(match self.prompt(label)? {
            None => Number::Eof,
            Some(text) => match text.trim().parse() {
                Ok(value) => Number::Value(value),
                Err(_) => Number::Invalid,
            },
        })
    }

    fn display_catalog(&mut self) -> Result<()> {
        writeln!(self.output, "\n======= CATALOG =======")?;
        write!(self.output, "{}", self.session.catalog())?;
        writeln!(self.output, "{RULE}")?;
        Ok(())
    }

    fn search_items(&mut self) -> Result<()> {
        let Some(term) = self.prompt("Search term")? else {
            return Ok(());
        };
        let results = self.session.search(&term);

        writeln!(self.output, "\n===== SEARCH RESULTS =====")?;
        if results.is_empty() {
            writeln!(self.output, "Nothing found for: {term}")?;
        } else {
            writeln!(self.output, "Found {} item(s):", results.len())?;
            for item in &results {
                writeln!(self.output, "{}", item.description())?;
            }
        }
        Ok(())
    }

    fn iterate_catalog(&mut self) -> Result<()> {
        writeln!(self.output, "\n===== TOP-LEVEL ENTRIES =====")?;
        let mut cursor = self.session.cursor();
        while cursor.has_next() {
            if let Some(item) = cursor.next() {
                writeln!(self.output, "- {}", item.description())?;
            }
        }
        writeln!(self.output, "{RULE}")?;
        Ok(())
    }

    fn add_book(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== ADD A BOOK ===")?;
        let Some(title) = self.prompt("Title")? else {
            return Ok(());
        };
        let Some(author) = self.prompt("Author")? else {
            return Ok(());
        };
        let year = match self.prompt_number("Year")? {
            Number::Value(year) => year,
            Number::Invalid => return self.invalid_number(),
            Number::Eof => return Ok(()),
        };
        let Some(isbn) = self.prompt("ISBN")? else {
            return Ok(());
        };

        let built = self.session.factory().book(&title, &author, year, &isbn);
        self.finish_add(built.map(Item::from), "Book")
    }

    fn add_magazine(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== ADD A MAGAZINE ===")?;
        let Some(title) = self.prompt("Title")? else {
            return Ok(());
        };
        let issue = match self.prompt_number("Issue number")? {
            Number::Value(issue) => issue,
            Number::Invalid => return self.invalid_number(),
            Number::Eof => return Ok(()),
        };
        let Some(publisher) = self.prompt("Publisher")? else {
            return Ok(());
        };
        let year = match self.prompt_number("Year")? {
            Number::Value(year) => year,
            Number::Invalid => return self.invalid_number(),
            Number::Eof => return Ok(()),
        };

        let built = self.session.factory().magazine(&title, issue, &publisher, year);
        self.finish_add(built.map(Item::from), "Magazine")
    }

    fn add_disc(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== ADD A DVD ===")?;
        let Some(title) = self.prompt("Title")? else {
            return Ok(());
        };
        let Some(director) = self.prompt("Director")? else {
            return Ok(());
        };
        let duration = match self.prompt_number("Duration (minutes)")? {
            Number::Value(duration) => duration,
            Number::Invalid => return self.invalid_number(),
            Number::Eof => return Ok(()),
        };
        let year = match self.prompt_number("Year")? {
            Number::Value(year) => year,
            Number::Invalid => return self.invalid_number(),
            Number::Eof => return Ok(()),
        };

        let built = self.session.factory().disc(&title, &director, duration, year);
        self.finish_add(built.map(Item::from), "DVD")
    }

    fn add_collection(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== CREATE A COLLECTION ===")?;
        let Some(name) = self.prompt("Collection name")? else {
            return Ok(());
        };

        let built = self.session.factory().collection(&name);
        self.finish_add(built.map(Item::from), "Collection")
    }

    fn finish_add(
        &mut self,
        built: std::result::Result<Item, ValidationError>,
        label: &str,
    ) -> Result<()> {
        match built {
            Ok(item) => {
                self.session.add(item, None)?;
                writeln!(self.output, "{label} added.")?;
            }
            Err(e) => writeln!(self.output, "Invalid input: {e}")?,
        }
        Ok(())
    }

    fn invalid_number(&mut self) -> Result<()> {
        writeln!(self.output, "Invalid number. Please enter a whole number.")?;
        Ok(())
    }

    fn save_catalog(&mut self) -> Result<()> {
        let Some(name) = self.prompt("File name to save")? else {
            return Ok(());
        };
        match self.session.save_as(&name) {
            Ok(_) => writeln!(self.output, "Catalog saved.")?,
            Err(e) => {
                error!(error = ?e, "Saving catalog failed");
                writeln!(self.output, "Error: {e}")?;
            }
        }
        Ok(())
    }

    fn load_catalog(&mut self) -> Result<()> {
        let Some(name) = self.prompt("File name to load")? else {
            return Ok(());
        };
        match self.session.load(&name) {
            Ok(()) => writeln!(self.output, "Catalog loaded.")?,
            Err(e) => {
                error!(error = ?e, "Loading catalog failed");
                writeln!(self.output, "Error: {e}")?;
            }
        }
        Ok(())
    }
}
