use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, CodecService};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::cli::shell::{run_shell, NO_SYMBOLS};
use crate::config::{global_config_path, Settings, SymbolEntry};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Completion { shell }) => return _completion(*shell),
        Some(Commands::Config { command }) => return _config(cli, command),
        None => return Ok(()),
        _ => {}
    }

    let mut service = build_service(cli)?;
    match &cli.command {
        Some(Commands::Encode { text }) => _encode(&service, &text.join(" ")),
        Some(Commands::Decode { line }) => _decode(&service, line),
        Some(Commands::Char { symbol }) => _char(&service, *symbol),
        Some(Commands::Token { code }) => _token(&service, code),
        Some(Commands::Tree) => _tree(&service),
        Some(Commands::Table) => _table(&service),
        Some(Commands::Shell) => _shell(&mut service),
        Some(Commands::Completion { .. }) | Some(Commands::Config { .. }) | None => Ok(()),
    }
}

/// Effective settings: config files, then command line flags.
fn build_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if cli.no_default {
        settings.preload_alphabet = false;
    }
    settings
        .symbols
        .extend(cli.insertions.iter().map(|i| SymbolEntry {
            symbol: i.symbol,
            code: i.code.clone(),
        }));
    debug!("settings: {:?}", settings);
    Ok(settings)
}

fn build_service(cli: &Cli) -> CliResult<CodecService> {
    let settings = build_settings(cli)?;
    Ok(CodecService::from_settings(&settings)?)
}

#[instrument(skip(service))]
fn _encode(service: &CodecService, text: &str) -> CliResult<()> {
    output::info(&service.encode(text)?);
    Ok(())
}

#[instrument(skip(service))]
fn _decode(service: &CodecService, line: &str) -> CliResult<()> {
    output::info(&service.decode(line)?);
    Ok(())
}

#[instrument(skip(service))]
fn _char(service: &CodecService, symbol: char) -> CliResult<()> {
    let code = service.encode_char(symbol)?;
    output::pair(crate::domain::normalize_symbol(symbol), &code);
    Ok(())
}

#[instrument(skip(service))]
fn _token(service: &CodecService, code: &str) -> CliResult<()> {
    let symbol = service.decode_token(code)?;
    output::pair(symbol, code);
    Ok(())
}

fn _tree(service: &CodecService) -> CliResult<()> {
    let tree = service.tree();
    output::header(&format!(
        "{} symbols, {} nodes, height {}",
        tree.symbol_count(),
        tree.node_count(),
        tree.height()
    ));
    output::info(service.render().trim_end());
    Ok(())
}

fn _table(service: &CodecService) -> CliResult<()> {
    let entries = service.entries();
    if entries.is_empty() {
        output::warning(NO_SYMBOLS);
        return Ok(());
    }
    for (code, symbol) in &entries {
        output::pair(*symbol, code);
    }
    Ok(())
}

fn _shell(service: &mut CodecService) -> CliResult<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_shell(service, stdin.lock(), &mut stdout)
}

fn _config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = build_settings(cli)?;
            output::info(settings.to_toml()?.trim_end());
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => {
                return Err(ApplicationError::Config {
                    message: "cannot determine config directory".to_string(),
                }
                .into())
            }
        },
    }
    Ok(())
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
