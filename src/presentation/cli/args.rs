use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "docthread", version, about = "Turn a document into a social media thread")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a thread from a text, PDF or markup file
    Generate {
        /// Path of the document to read
        path: PathBuf,

        /// Declared MIME type; guessed from the extension when omitted
        #[arg(long)]
        mime: Option<String>,

        /// User whose generation settings apply
        #[arg(long, env = "DOCTHREAD_USER")]
        user: Option<String>,

        /// Use a canned generator instead of calling the model API
        #[arg(long)]
        offline: bool,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Print the effective generation configuration as JSON
    Config {
        #[arg(long, env = "DOCTHREAD_USER")]
        user: Option<String>,
    },
}
