mod args;
mod commands;

pub use args::{Cli, Command};
pub use commands::{GenerateOptions, config_command, generate_command};
