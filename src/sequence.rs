// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Symbol sequences read from text files.

use std::{fs, ops::Index, path::Path};

use crate::error::{Error, Result};

/// Ordered, immutable list of single character symbols.
/// Every char of the trimmed text is one symbol, the comparator
/// does not care whether they are '0'/'1' or anything else.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SymbolSequence {
    symbols: Vec<char>,
}

/// Unicode whitespace plus the ASCII separators FS, GS, RS and US.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

impl SymbolSequence {
    /// Strip surrounding blanks and split into chars.
    pub fn from_text(text: &str) -> Self {
        SymbolSequence {
            symbols: text.trim_matches(is_blank).chars().collect(),
        }
    }

    /// Read the whole file, decode as UTF-8 and build a sequence from it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read(path).map_err(|source| Error::NotFound {
            path: path.to_owned(),
            source,
        })?;
        let text = String::from_utf8(raw).map_err(|source| Error::Decode {
            path: path.to_owned(),
            source,
        })?;
        let sequence = Self::from_text(&text);
        log::debug!("loaded {} symbols from {}", sequence.len(), path.display());
        Ok(sequence)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

impl From<&str> for SymbolSequence {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl Index<usize> for SymbolSequence {
    type Output = char;

    fn index(&self, index: usize) -> &char {
        &self.symbols[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn strips_surrounding_whitespace() {
        let seq = SymbolSequence::from_text("  0110\n");
        assert_eq!(seq.symbols(), &['0', '1', '1', '0']);
    }

    #[test]
    fn strips_ascii_separators() {
        let seq = SymbolSequence::from_text("\x1f0101\x1c\n");
        assert_eq!(seq.symbols(), &['0', '1', '0', '1']);
        assert!(SymbolSequence::from_text("\x1d\x1e").is_empty());
    }

    #[test]
    fn inner_separator_is_a_symbol() {
        let seq = SymbolSequence::from_text("0\x1e1");
        assert_eq!(seq.len(), 3);
        assert_eq!(seq[1], '\x1e');
    }

    #[test]
    fn inner_whitespace_is_a_symbol() {
        let seq = SymbolSequence::from_text("0 1");
        assert_eq!(seq.len(), 3);
        assert_eq!(seq[1], ' ');
    }

    #[test]
    fn multibyte_chars_are_single_symbols() {
        let seq = SymbolSequence::from_text("aé0");
        assert_eq!(seq.len(), 3);
        assert_eq!(seq[1], 'é');
    }

    #[test]
    fn blank_text_is_empty() {
        assert!(SymbolSequence::from_text(" \n\t").is_empty());
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SymbolSequence::load(dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn load_rejects_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[b'0', 0xff, b'1']).unwrap();
        let err = SymbolSequence::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }
}
