//! One module per subcommand; each exposes `execute`.

pub mod completions;
pub mod compose;
pub mod config;
pub mod init;
pub mod list;
pub mod new;
