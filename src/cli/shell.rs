//! Interactive line-oriented session
//!
//! One command per line. Errors are reported and the session continues;
//! only I/O failures end it early.

use std::io::{BufRead, Write};

use tracing::{debug, instrument};

use crate::application::CodecService;
use crate::cli::error::{CliError, CliResult};

pub const PROMPT: &str = "morse> ";
pub const NO_SYMBOLS: &str = "no symbols registered";

const HELP: &str = "\
commands:
  insert <symbol> <code>   register a symbol, e.g. insert ? ..--..
  load                     load A-Z and 0-9
  encode <text>            text to morse
  decode <line>            morse to text, words separated by /
  char <symbol>            code of one character
  token <code>             character of one code
  tree                     show the tree
  table                    list registered codes
  help                     this text
  quit                     leave";

/// Parsed shell input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Insert { symbol: String, code: String },
    Load,
    Encode(String),
    Decode(String),
    Char(String),
    Token(String),
    Tree,
    Table,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one line. `Ok(None)` for blank lines, `Err` with a usage hint otherwise.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.trim().is_empty() {
            return Ok(None);
        }
        let (name, rest) = trimmed
            .split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));

        let command = match name {
            "insert" => {
                let args: Vec<&str> = rest.split_whitespace().collect();
                match args.as_slice() {
                    [symbol, code] => ShellCommand::Insert {
                        symbol: symbol.to_string(),
                        code: code.to_string(),
                    },
                    _ => return Err("usage: insert <symbol> <code>".to_string()),
                }
            }
            "load" => ShellCommand::Load,
            "encode" => ShellCommand::Encode(rest.to_string()),
            "decode" => ShellCommand::Decode(rest.to_string()),
            "char" => ShellCommand::Char(rest.trim().to_string()),
            "token" => ShellCommand::Token(rest.trim().to_string()),
            "tree" => ShellCommand::Tree,
            "table" => ShellCommand::Table,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => return Err(format!("unknown command: {} (try help)", other)),
        };
        Ok(Some(command))
    }
}

/// Run the session until `quit` or end of input.
#[instrument(level = "debug", skip_all)]
pub fn run_shell<R: BufRead, W: Write>(
    service: &mut CodecService,
    input: R,
    output: &mut W,
) -> CliResult<()> {
    write_prompt(output)?;
    for line in input.lines() {
        let line = line.map_err(|e| CliError::io("read shell input", e))?;
        debug!("shell input: {:?}", line);

        match ShellCommand::parse(&line) {
            Ok(Some(ShellCommand::Quit)) => return Ok(()),
            Ok(Some(command)) => {
                let reply = execute(service, command);
                say(output, &reply)?;
            }
            Ok(None) => {}
            Err(usage) => say(output, &format!("error: {}", usage))?,
        }
        write_prompt(output)?;
    }
    Ok(())
}

fn execute(service: &mut CodecService, command: ShellCommand) -> String {
    let result = match command {
        ShellCommand::Insert { symbol, code } => service
            .insert(&symbol, &code)
            .map(|stored| format!("inserted '{}' -> {}", stored, code)),
        ShellCommand::Load => {
            service.load_default_alphabet();
            Ok("loaded A-Z and 0-9".to_string())
        }
        ShellCommand::Encode(text) => service.encode(&text),
        ShellCommand::Decode(line) => service.decode(&line),
        ShellCommand::Char(symbol) => {
            let mut chars = symbol.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => service.encode_char(c).map(|code| code.to_string()),
                _ => return "error: usage: char <symbol>".to_string(),
            }
        }
        ShellCommand::Token(code) => service.decode_token(&code).map(String::from),
        ShellCommand::Tree => Ok(service.render().trim_end().to_string()),
        ShellCommand::Table => {
            let entries = service.entries();
            if entries.is_empty() {
                return NO_SYMBOLS.to_string();
            }
            Ok(entries
                .iter()
                .map(|(code, symbol)| format!("{}  {}", symbol, code))
                .collect::<Vec<_>>()
                .join("\n"))
        }
        ShellCommand::Help => Ok(HELP.to_string()),
        ShellCommand::Quit => Ok(String::new()),
    };
    result.unwrap_or_else(|e| format!("error: {}", e))
}

fn say<W: Write>(output: &mut W, msg: &str) -> CliResult<()> {
    writeln!(output, "{}", msg).map_err(|e| CliError::io("write shell output", e))
}

fn write_prompt<W: Write>(output: &mut W) -> CliResult<()> {
    write!(output, "{}", PROMPT)
        .and_then(|_| output.flush())
        .map_err(|e| CliError::io("write shell prompt", e))
}
