//! ## telegraph-morse::encoder
//! In-memory Morse encoding of a text document.
//!
//! Layout rules:
//! - `\r\n` and lone `\r` line endings are read as `\n`
//! - paragraphs are separated by `"\n\n"` both in input and output
//! - words are separated by Unicode whitespace or the `\x1c`..`\x1f`
//!   information separators
//! - every surviving word is written on its own line
//! - a word whose characters are all untabled is dropped
//! - a paragraph without surviving words still yields an empty entry, so the
//!   `"\n\n"` separators around it are kept

use crate::table::SymbolTable;

const PARAGRAPH_SEPARATOR: &str = "\n\n";
const WORD_SEPARATOR: &str = "\n";

#[inline]
fn is_word_boundary(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Counters for a single encoding pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EncodeStats {
    pub paragraphs: usize,
    pub words_emitted: usize,
    pub words_dropped: usize,
    pub chars_encoded: usize,
    pub chars_dropped: usize,
}

/// Encoder bound to a symbol table.
#[derive(Debug, Copy, Clone)]
pub struct MorseEncoder {
    table: &'static SymbolTable,
}

impl Default for MorseEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl MorseEncoder {
    pub fn new() -> Self {
        Self {
            table: SymbolTable::standard(),
        }
    }

    /// Encodes one upper-cased word, appending symbols to `out`.
    ///
    /// Returns `(encoded, dropped)` character counts.
    fn encode_word(&self, word: &str, out: &mut String) -> (usize, usize) {
        let mut encoded = 0;
        let mut dropped = 0;
        for c in word.chars() {
            match self.table.symbol(c) {
                Some(symbol) => {
                    out.push_str(symbol);
                    encoded += 1;
                }
                None => dropped += 1,
            }
        }
        (encoded, dropped)
    }

    fn encode_paragraph(&self, paragraph: &str, stats: &mut EncodeStats) -> String {
        let mut words = Vec::new();
        for word in paragraph.split(is_word_boundary).filter(|w| !w.is_empty()) {
            let mut morse = String::new();
            let (encoded, dropped) = self.encode_word(word, &mut morse);
            stats.chars_encoded += encoded;
            stats.chars_dropped += dropped;

            if morse.is_empty() {
                stats.words_dropped += 1;
            } else {
                stats.words_emitted += 1;
                words.push(morse);
            }
        }
        words.join(WORD_SEPARATOR)
    }

    pub fn encode_with_stats(&self, text: &str) -> (String, EncodeStats) {
        let upper = normalize_newlines(text).to_uppercase();
        let mut stats = EncodeStats::default();

        let paragraphs: Vec<String> = upper
            .split(PARAGRAPH_SEPARATOR)
            .map(|paragraph| {
                stats.paragraphs += 1;
                self.encode_paragraph(paragraph, &mut stats)
            })
            .collect();

        (paragraphs.join(PARAGRAPH_SEPARATOR), stats)
    }

    pub fn encode(&self, text: &str) -> String {
        self.encode_with_stats(text).0
    }
}

/// Encodes `text` with the standard table.
pub fn encode(text: &str) -> String {
    MorseEncoder::new().encode(text)
}

/// Encodes `text` with the standard table and reports counters.
pub fn encode_with_stats(text: &str) -> (String, EncodeStats) {
    MorseEncoder::new().encode_with_stats(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(encode(""), "");
    }

    #[test]
    fn words_are_one_per_line() {
        assert_eq!(encode("sos sos"), "...---...\n...---...");
    }

    #[test]
    fn paragraphs_are_separated_by_blank_line() {
        assert_eq!(encode("E T\n\nI M"), ".\n-\n\n..\n--");
    }

    #[test]
    fn single_newline_is_word_whitespace() {
        assert_eq!(encode("E\nT"), ".\n-");
    }

    #[test]
    fn untabled_characters_are_dropped_inside_words() {
        assert_eq!(encode("e!t?"), ".-");
        assert_eq!(encode("hi, there."), "......--..--\n-......-...-.-.-");
    }

    #[test]
    fn fully_untabled_word_is_dropped() {
        let (out, stats) = encode_with_stats("E !? T");
        assert_eq!(out, ".\n-");
        assert_eq!(stats.words_dropped, 1);
        assert_eq!(stats.words_emitted, 2);
        assert_eq!(stats.chars_dropped, 2);
    }

    #[test]
    fn empty_paragraph_keeps_its_separators() {
        assert_eq!(encode("E\n\n?!\n\nT"), ".\n\n\n\n-");
    }

    #[test]
    fn triple_newline_leaves_leading_newline_in_next_paragraph() {
        // "\n\n\n" splits into "E" and "\nT"; the leading "\n" is whitespace.
        assert_eq!(encode("E\n\n\nT"), ".\n\n-");
    }

    #[test]
    fn trailing_blank_line_produces_trailing_separator() {
        assert_eq!(encode("E\n\n"), ".\n\n");
    }

    #[test]
    fn windows_line_endings_split_paragraphs() {
        assert_eq!(encode("E\r\n\r\nT"), ".\n\n-");
        assert_eq!(encode("E\r\nT"), ".\n-");
        assert_eq!(encode("E\r\rT"), ".\n\n-");
        assert_eq!(encode("E\r\n\r\n?\r\n\r\nT"), ".\n\n\n\n-");
    }

    #[test]
    fn information_separators_split_words() {
        assert_eq!(encode("E\u{1c}T"), ".\n-");
        assert_eq!(encode("E\u{1f}T\u{1d}\u{1e}I"), ".\n-\n..");
    }

    #[test]
    fn digits_and_punctuation() {
        assert_eq!(encode("10:"), ".------------...");
        assert_eq!(encode("it's"), "..-.----....");
        assert_eq!(encode("-"), "-....-");
    }

    #[test]
    fn stats_count_everything() {
        let (_, stats) = encode_with_stats("Ab c?\n\nd");
        assert_eq!(
            stats,
            EncodeStats {
                paragraphs: 2,
                words_emitted: 3,
                words_dropped: 0,
                chars_encoded: 4,
                chars_dropped: 1,
            }
        );
    }

    proptest! {
        #[test]
        fn output_alphabet_is_dots_dashes_newlines(text in "\\PC*") {
            let out = encode(&text);
            prop_assert!(out.chars().all(|c| c == '.' || c == '-' || c == '\n'));
        }

        #[test]
        fn symbols_only_when_something_is_tabled(text in "[a-z0-9 !?\n]*") {
            let out = encode(&text);
            let tabled = text
                .to_uppercase()
                .chars()
                .any(|c| SymbolTable::standard().contains(c));
            prop_assert_eq!(out.contains(|c: char| c == '.' || c == '-'), tabled);
        }

        #[test]
        fn case_insensitive(text in "[a-zA-Z0-9 .,:'\n-]*") {
            prop_assert_eq!(encode(&text.to_lowercase()), encode(&text.to_uppercase()));
        }

        #[test]
        fn untabled_noise_does_not_change_words(word in "[a-z]{1,8}", noise in "[!?#]{1,3}") {
            let noisy = format!("{noise}{word}{noise}");
            prop_assert_eq!(encode(&noisy), encode(&word));
        }

        #[test]
        fn deterministic(text in "\\PC*") {
            prop_assert_eq!(encode(&text), encode(&text));
        }
    }
}
