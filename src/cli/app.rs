use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Bookshelf: a catalog of books, magazines and DVDs in nested collections
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(version)]
#[command(about = "Catalog books, magazines and DVDs in nested collections")]
#[command(
    long_about = "Bookshelf keeps a tree of collections holding books, magazines and DVDs. Run without a subcommand for the interactive menu."
)]
pub struct Cli {
    /// Settings file (defaults to ./bookshelf.yaml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog file name inside the data directory
    #[arg(short, long, global = true)]
    pub file: Option<String>,

    /// Log level (overrides the settings file)
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive menu (default)
    Shell,

    /// Print the whole catalog tree
    Show,

    /// Search titles, authors, publishers, directors and collection names
    Search {
        /// Case-insensitive search term
        #[arg(default_value = "")]
        term: String,
    },

    /// List the top-level entries of the catalog
    List,

    /// Add an item to the catalog
    Add {
        #[command(subcommand)]
        item: AddItem,
    },

    /// Remove the first top-level entry with the given title
    Remove {
        /// Exact title (or collection name)
        title: String,

        /// Remove from this top-level collection instead of the root
        #[arg(long)]
        from: Option<String>,
    },

    /// Write the demo catalog to the catalog file
    Demo {
        /// Overwrite an existing catalog file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum AddItem {
    #[command(allow_negative_numbers = true)]
    Book {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        isbn: String,
        /// Top-level collection to add into
        #[arg(long)]
        into: Option<String>,
    },

    #[command(allow_negative_numbers = true)]
    Magazine {
        #[arg(long)]
        title: String,
        #[arg(long)]
        issue: i32,
        #[arg(long)]
        publisher: String,
        #[arg(long)]
        year: i32,
        /// Top-level collection to add into
        #[arg(long)]
        into: Option<String>,
    },

    #[command(allow_negative_numbers = true)]
    Dvd {
        #[arg(long)]
        title: String,
        #[arg(long)]
        director: String,
        /// Running time in minutes
        #[arg(long)]
        duration: i32,
        #[arg(long)]
        year: i32,
        /// Top-level collection to add into
        #[arg(long)]
        into: Option<String>,
    },

    Collection {
        #[arg(long)]
        name: String,
        /// Top-level collection to add into
        #[arg(long)]
        into: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
