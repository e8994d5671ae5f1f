//! Morse signals and codes

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// One Morse token. A dot descends to the left child, a dash to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Dot,
    Dash,
}

impl Signal {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Signal::Dot),
            '-' => Some(Signal::Dash),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Signal::Dot => '.',
            Signal::Dash => '-',
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Non-empty sequence of signals describing the path from the root to a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MorseCode(Vec<Signal>);

impl MorseCode {
    /// Build a code from signals, rejecting the empty path.
    pub fn new(signals: Vec<Signal>) -> Result<Self, DomainError> {
        if signals.is_empty() {
            return Err(DomainError::EmptyCode);
        }
        Ok(Self(signals))
    }

    pub fn signals(&self) -> &[Signal] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the code holds no signals. Parsed codes never do.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for MorseCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let signals = s
            .chars()
            .map(|c| {
                Signal::from_char(c).ok_or_else(|| DomainError::InvalidCodeFormat {
                    code: s.to_string(),
                    found: c,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(signals)
    }
}

impl fmt::Display for MorseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for signal in &self.0 {
            write!(f, "{}", signal)?;
        }
        Ok(())
    }
}
