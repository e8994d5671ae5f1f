//! Morse codec built on the dot/dash tree.
//!
//! Line format: letter codes within a word are separated by a single space,
//! words by `" / "`. Decoding accepts only `.`, `-`, space and `/`.

use tracing::{debug, instrument, trace, warn};

use crate::domain::alphabet::DEFAULT_ALPHABET;
use crate::domain::arena::MorseTree;
use crate::domain::code::MorseCode;
use crate::domain::error::{DomainError, DomainResult};

pub const LETTER_SEPARATOR: &str = " ";
pub const WORD_SEPARATOR: &str = " / ";

/// Uppercases `c` when its uppercase form is a single character.
pub fn normalize_symbol(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Encoder/decoder owning a single [`MorseTree`].
#[derive(Debug, Default)]
pub struct MorseCodec {
    tree: MorseTree,
}

impl MorseCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Codec preloaded with A-Z and 0-9.
    pub fn with_default_alphabet() -> Self {
        let mut codec = Self::new();
        codec.load_default_alphabet();
        codec
    }

    /// Read-only access for renderers.
    pub fn tree(&self) -> &MorseTree {
        &self.tree
    }

    /// Registers `symbol` under `code`.
    ///
    /// The code is validated in full before the tree is touched, so a failed
    /// insert never leaves partial paths behind.
    ///
    /// # Errors
    /// * `InvalidCodeFormat` if `code` contains anything but `.` and `-`
    /// * `EmptyCode` if `code` is empty
    /// * `InvalidSymbol` if `symbol` is whitespace
    #[instrument(level = "debug", skip(self))]
    pub fn insert(&mut self, code: &str, symbol: char) -> DomainResult<()> {
        let code: MorseCode = code.parse()?;
        self.insert_code(&code, symbol)
    }

    pub fn insert_code(&mut self, code: &MorseCode, symbol: char) -> DomainResult<()> {
        if symbol.is_whitespace() {
            return Err(DomainError::InvalidSymbol(symbol));
        }
        let symbol = normalize_symbol(symbol);
        self.tree.insert(code, symbol);
        trace!("inserted {} -> {}", symbol, code);
        Ok(())
    }

    /// Inserts the 36 international codes. Safe to call repeatedly.
    #[instrument(level = "debug", skip(self))]
    pub fn load_default_alphabet(&mut self) {
        for &(code, symbol) in DEFAULT_ALPHABET {
            if let Err(e) = self.insert(code, symbol) {
                warn!("skipping default entry {} -> {}: {}", code, symbol, e);
            }
        }
        debug!("default alphabet loaded, {} symbols", self.tree.symbol_count());
    }

    /// Code for a single character, case-insensitive. None if not registered.
    pub fn encode_char(&self, symbol: char) -> Option<MorseCode> {
        self.tree.find_symbol(normalize_symbol(symbol))
    }

    /// Symbol for a dot/dash token. None for unknown paths, waypoints and
    /// malformed tokens.
    pub fn decode_token(&self, token: &str) -> Option<char> {
        let code: MorseCode = token.parse().ok()?;
        self.decode_code(&code)
    }

    pub fn decode_code(&self, code: &MorseCode) -> Option<char> {
        self.tree.lookup(code)
    }

    /// Encodes a line of text.
    ///
    /// Any run of whitespace between words becomes one `" / "`; leading and
    /// trailing whitespace produce nothing. The whole call fails on the first
    /// character without a code.
    #[instrument(level = "debug", skip(self))]
    pub fn encode_line(&self, text: &str) -> DomainResult<String> {
        let mut out = String::new();
        let mut word_break = false;

        for ch in text.chars() {
            if ch.is_whitespace() {
                word_break = true;
                continue;
            }
            let code = self
                .encode_char(ch)
                .ok_or(DomainError::UnsupportedCharacter(ch))?;
            if !out.is_empty() {
                out.push_str(if word_break {
                    WORD_SEPARATOR
                } else {
                    LETTER_SEPARATOR
                });
            }
            word_break = false;
            out.push_str(&code.to_string());
        }

        debug!("encoded {:?} -> {:?}", text, out);
        Ok(out)
    }

    /// Decodes a Morse line. Every `/` yields one space in the output.
    ///
    /// # Errors
    /// * `InvalidDecodeInput` for any character outside `.`, `-`, space, `/`,
    ///   checked before decoding starts
    /// * `UnknownMorseToken` for a token without a registered symbol
    #[instrument(level = "debug", skip(self))]
    pub fn decode_line(&self, line: &str) -> DomainResult<String> {
        if let Some(bad) = line.chars().find(|c| !matches!(c, '.' | '-' | ' ' | '/')) {
            return Err(DomainError::InvalidDecodeInput(bad));
        }

        // Validated input is pure ASCII
        let bytes = line.as_bytes();
        let skip_spaces = |mut i: usize| {
            while i < bytes.len() && bytes[i] == b' ' {
                i += 1;
            }
            i
        };

        let mut out = String::new();
        let mut i = skip_spaces(0);
        while i < bytes.len() {
            if bytes[i] == b'/' {
                out.push(' ');
                i = skip_spaces(i + 1);
                continue;
            }

            let start = i;
            while i < bytes.len() && matches!(bytes[i], b'.' | b'-') {
                i += 1;
            }
            let token = &line[start..i];
            let symbol = self
                .decode_token(token)
                .ok_or_else(|| DomainError::UnknownMorseToken(token.to_string()))?;
            out.push(symbol);
            i = skip_spaces(i);
        }

        debug!("decoded {:?} -> {:?}", line, out);
        Ok(out)
    }
}
