//! Domain layer: the Morse tree and codec
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod alphabet;
pub mod arena;
pub mod code;
pub mod codec;
pub mod error;
pub mod render;

pub use alphabet::DEFAULT_ALPHABET;
pub use arena::{MorseTree, NodeHandle, TreeEntry, TreeIterator};
pub use code::{MorseCode, Signal};
pub use codec::{normalize_symbol, MorseCodec, LETTER_SEPARATOR, WORD_SEPARATOR};
pub use error::{DomainError, DomainResult};
pub use render::TreeRender;
