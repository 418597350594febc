//! ## telegraph-morse::transliterate
//! File to file transliteration.
//!
//! The output file is truncated and rewritten in one `fs::write`; a failure
//! part way through can leave it partially written.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::encoder::{EncodeStats, MorseEncoder};
use crate::error::MorseError;

pub const DEFAULT_INPUT: &str = "lorem.txt";
pub const DEFAULT_OUTPUT: &str = "lorem_morse.txt";

/// Reads `input`, encodes it and writes the Morse document to `output`.
pub fn transliterate<I, O>(input: I, output: O) -> Result<EncodeStats, MorseError>
where
    I: AsRef<Path>,
    O: AsRef<Path>,
{
    let input = input.as_ref();
    let output = output.as_ref();

    let text = fs::read_to_string(input).map_err(|source| MorseError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    debug!(path = %input.display(), bytes = text.len(), "Read input text");

    let (morse, stats) = MorseEncoder::new().encode_with_stats(&text);

    fs::write(output, morse.as_bytes()).map_err(|source| MorseError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    info!(
        input = %input.display(),
        output = %output.display(),
        paragraphs = stats.paragraphs,
        words = stats.words_emitted,
        dropped_words = stats.words_dropped,
        dropped_chars = stats.chars_dropped,
        "Transliteration complete"
    );

    Ok(stats)
}
