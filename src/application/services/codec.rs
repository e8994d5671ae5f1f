//! Codec session service
//!
//! Owns one codec for the lifetime of a CLI invocation or shell session and
//! guards the operations that make no sense on an empty tree.

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::{DomainError, MorseCode, MorseCodec, MorseTree, TreeRender};

/// Service wrapping a [`MorseCodec`] with input validation.
#[derive(Debug, Default)]
pub struct CodecService {
    codec: MorseCodec,
}

impl CodecService {
    /// Create a service with an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the codec described by `settings`.
    ///
    /// The default alphabet is loaded first (if enabled) so configured symbols
    /// can override its codes.
    #[instrument(level = "debug", skip(settings))]
    pub fn from_settings(settings: &Settings) -> ApplicationResult<Self> {
        let mut service = Self::new();
        if settings.preload_alphabet {
            service.load_default_alphabet();
        }
        for entry in &settings.symbols {
            service
                .codec
                .insert(&entry.code, entry.symbol)
                .map_err(|e| ApplicationError::Config {
                    message: format!("symbol {:?} with code {:?}: {}", entry.symbol, entry.code, e),
                })?;
        }
        debug!(
            "codec ready: {} symbols, {} nodes",
            service.tree().symbol_count(),
            service.tree().node_count()
        );
        Ok(service)
    }

    pub fn tree(&self) -> &MorseTree {
        self.codec.tree()
    }

    pub fn codec(&self) -> &MorseCodec {
        &self.codec
    }

    pub fn load_default_alphabet(&mut self) {
        self.codec.load_default_alphabet();
        info!("default alphabet loaded");
    }

    /// Insert from raw user input: `symbol` must be exactly one character.
    ///
    /// Returns the symbol as stored (uppercased).
    #[instrument(level = "debug", skip(self))]
    pub fn insert(&mut self, symbol: &str, code: &str) -> ApplicationResult<char> {
        let mut chars = symbol.chars();
        let symbol = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(ApplicationError::InvalidInput(format!(
                    "expected a single character, got {:?}",
                    symbol
                )))
            }
        };
        self.codec.insert(code, symbol)?;
        let stored = crate::domain::normalize_symbol(symbol);
        info!("inserted '{}' -> {}", stored, code);
        Ok(stored)
    }

    pub fn encode(&self, text: &str) -> ApplicationResult<String> {
        self.ensure_not_empty()?;
        Ok(self.codec.encode_line(text)?)
    }

    pub fn decode(&self, line: &str) -> ApplicationResult<String> {
        self.ensure_not_empty()?;
        Ok(self.codec.decode_line(line)?)
    }

    pub fn encode_char(&self, symbol: char) -> ApplicationResult<MorseCode> {
        self.ensure_not_empty()?;
        self.codec
            .encode_char(symbol)
            .ok_or(ApplicationError::Domain(DomainError::UnsupportedCharacter(symbol)))
    }

    /// Decode one token, distinguishing malformed codes from unknown ones.
    pub fn decode_token(&self, token: &str) -> ApplicationResult<char> {
        self.ensure_not_empty()?;
        let code: MorseCode = token.parse()?;
        self.codec
            .decode_code(&code)
            .ok_or_else(|| DomainError::UnknownMorseToken(token.to_string()).into())
    }

    /// All registered (code, symbol) pairs in tree order.
    pub fn entries(&self) -> Vec<(MorseCode, char)> {
        self.tree().entries()
    }

    pub fn render(&self) -> String {
        self.tree().to_tree_string().to_string()
    }

    fn ensure_not_empty(&self) -> ApplicationResult<()> {
        if self.tree().is_empty() {
            return Err(ApplicationError::EmptyTree);
        }
        Ok(())
    }
}
