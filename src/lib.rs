pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod storage;

pub use error::{BookshelfError, Result};
