//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::EngineKind;

/// Parse cURL commands into request models and generate client code
#[derive(Parser, Debug, Clone)]
#[command(name = "curlkit", version, about, long_about = None)]
pub struct Args {
    /// Conversion engine (overrides the config file)
    #[arg(long = "engine", value_name = "KIND", value_enum, global = true, env = "CURLKIT_ENGINE")]
    pub engine: Option<EngineKind>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Parse a cURL command and print the request model as JSON
    Parse {
        /// cURL command; read from stdin when absent or `-`
        #[arg(value_name = "CURL")]
        curl: Option<String>,
    },

    /// Parse a cURL command and generate client code from it
    Generate {
        /// Target language key (see `curlkit languages`)
        #[arg(short = 'l', long = "language", value_name = "LANG")]
        language: Option<String>,

        /// cURL command; read from stdin when absent or `-`
        #[arg(value_name = "CURL")]
        curl: Option<String>,
    },

    /// Print a request model file as a cURL command
    #[command(name = "to-curl")]
    ToCurl {
        /// Request model JSON file
        #[arg(value_name = "MODEL")]
        model: PathBuf,
    },

    /// List the supported code generation languages
    Languages,
}
