//! ## telegraph-morse::table
//! The process-wide character to Morse symbol table.

use std::collections::HashMap;

use once_cell::sync::Lazy;

const SYMBOLS: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    (':', "---..."),
    ('\'', ".----."),
    ('-', "-....-"),
];

static STANDARD: Lazy<SymbolTable> = Lazy::new(|| SymbolTable {
    symbols: SYMBOLS.iter().copied().collect(),
});

/// Immutable mapping from upper-case characters to Morse symbols.
///
/// Only the shared [`SymbolTable::standard`] instance exists; it is built on
/// first use and never mutated afterwards.
#[derive(Debug)]
pub struct SymbolTable {
    symbols: HashMap<char, &'static str>,
}

impl SymbolTable {
    pub fn standard() -> &'static SymbolTable {
        &STANDARD
    }

    /// Symbol for an already upper-cased character.
    #[inline]
    pub fn symbol(&self, c: char) -> Option<&'static str> {
        self.symbols.get(&c).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains_key(&c)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Entries in table order (letters, digits, punctuation).
    pub fn entries(&self) -> impl Iterator<Item = (char, &'static str)> {
        SYMBOLS.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_letters_digits_and_punctuation() {
        let table = SymbolTable::standard();
        assert_eq!(table.len(), 26 + 10 + 5);
        assert!(('A'..='Z').all(|c| table.contains(c)));
        assert!(('0'..='9').all(|c| table.contains(c)));
        for c in ['.', ',', ':', '\'', '-'] {
            assert!(table.contains(c), "missing {c:?}");
        }
    }

    #[test]
    fn lower_case_is_not_in_table() {
        let table = SymbolTable::standard();
        assert_eq!(table.symbol('a'), None);
        assert_eq!(table.symbol('A'), Some(".-"));
    }

    #[test]
    fn symbols_are_dots_and_dashes() {
        for (c, symbol) in SymbolTable::standard().entries() {
            assert!(!symbol.is_empty(), "{c:?} has an empty symbol");
            assert!(symbol.chars().all(|s| s == '.' || s == '-'));
        }
    }

    #[test]
    fn known_symbols() {
        let table = SymbolTable::standard();
        assert_eq!(table.symbol('S'), Some("..."));
        assert_eq!(table.symbol('O'), Some("---"));
        assert_eq!(table.symbol('0'), Some("-----"));
        assert_eq!(table.symbol('\''), Some(".----."));
        assert_eq!(table.symbol('?'), None);
    }
}
