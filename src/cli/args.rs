//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Morse code encoder/decoder backed by a dot/dash binary tree
#[derive(Parser, Debug)]
#[command(name = "morsetree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered on top of the global config
    #[arg(short, long, global = true, env = "MORSETREE_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Start with an empty tree instead of A-Z/0-9
    #[arg(long, global = true)]
    pub no_default: bool,

    /// Register an extra symbol, e.g. `-i '?=..--..'` (repeatable)
    #[arg(
        short,
        long = "insert",
        value_name = "SYMBOL=CODE",
        global = true,
        value_parser = parse_insertion
    )]
    pub insertions: Vec<Insertion>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode text to a Morse line
    Encode {
        /// Text to encode; multiple arguments are joined by single spaces
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Decode a Morse line (`.`, `-`, spaces, `/` between words)
    Decode {
        /// Morse line, e.g. "... --- ..."
        #[arg(allow_hyphen_values = true)]
        line: String,
    },

    /// Show the code of a single character
    Char {
        symbol: char,
    },

    /// Show the character of a single code
    Token {
        #[arg(allow_hyphen_values = true)]
        code: String,
    },

    /// Show the tree
    Tree,

    /// List all registered codes in tree order
    Table,

    /// Interactive session: insert, encode, decode, view
    Shell,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings as TOML
    Show,
    /// Show the global config file path
    Path,
}

/// Symbol/code pair given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub symbol: char,
    pub code: String,
}

/// Parse `SYMBOL=CODE`. The symbol is the first character, so `==-...-` registers `=`.
pub fn parse_insertion(s: &str) -> Result<Insertion, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), Some('=')) if !chars.as_str().is_empty() => Ok(Insertion {
            symbol,
            code: chars.as_str().to_string(),
        }),
        _ => Err(format!("expected SYMBOL=CODE, got {:?}", s)),
    }
}
