mod config;
pub use self::config::*;

mod cli;
pub use self::cli::*;

pub mod commands;
pub use self::commands::{check, map, contracts};
