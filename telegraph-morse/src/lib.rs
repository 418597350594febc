//! # Telegraph Morse
//!
//! Text to International Morse transliteration.
//!
//! Input is split into paragraphs on blank lines and into words on
//! whitespace. Each word becomes one line of concatenated Morse symbols,
//! paragraphs are separated by an empty line. Characters without a symbol
//! are dropped silently.

pub mod encoder;
pub mod error;
pub mod table;
pub mod transliterate;

pub use encoder::{encode, encode_with_stats, EncodeStats, MorseEncoder};
pub use error::MorseError;
pub use table::SymbolTable;
pub use transliterate::{transliterate, DEFAULT_INPUT, DEFAULT_OUTPUT};
