//! Morse code encoder/decoder backed by a dot/dash binary tree.
//!
//! A dot descends to the left child, a dash to the right; a node reached by a
//! code path may carry the symbol for that code.
//!
//! ```
//! use morsetree::domain::MorseCodec;
//!
//! let codec = MorseCodec::with_default_alphabet();
//! assert_eq!(codec.encode_line("SOS").unwrap(), "... --- ...");
//! assert_eq!(codec.decode_line("... --- ...").unwrap(), "SOS");
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
