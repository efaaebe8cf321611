pub mod app;
pub mod commands;
pub mod session;
pub mod shell;

pub use app::{AddItem, Cli, Commands, LogLevel};
pub use session::Session;
pub use shell::Shell;
