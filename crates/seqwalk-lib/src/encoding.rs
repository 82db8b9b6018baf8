//! Alphabets and the DNA reverse complement
//!
//! An [`Alphabet`] is an ordered, deduplicated set of symbols. The order is
//! significant: the shift-rule generator works on integers `1..=q` and the
//! symbol at position `i` stands for integer `i + 1`.
//!
//! Complement pairing:
//! - A <-> T
//! - C <-> G
//!
//! Any other byte is its own complement, so reverse complementing a string
//! over a non-DNA alphabet just reverses it.

use crate::error::DesignError;
use std::fmt;

/// Complement of a single DNA base (uppercase), identity for other bytes
#[inline]
pub const fn complement_base(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        other => other,
    }
}

/// Reverse complement of a byte sequence
pub fn reverse_complement_bytes(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&b| complement_base(b)).collect()
}

/// Reverse complement of a DNA string
///
/// `reverse_complement(&reverse_complement(s)) == s` for every `s`.
pub fn reverse_complement(seq: &str) -> String {
    // complement_base maps ASCII to ASCII and leaves everything else alone,
    // but a multi-byte char reversed bytewise is not UTF-8 any more.
    if seq.is_ascii() {
        String::from_utf8_lossy(&reverse_complement_bytes(seq.as_bytes())).into_owned()
    } else {
        seq.chars()
            .rev()
            .map(|c| if c.is_ascii() { complement_base(c as u8) as char } else { c })
            .collect()
    }
}

/// Ordered set of symbols sequences are built from
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    symbols: Vec<u8>,
}

impl Alphabet {
    /// Build an alphabet from a string, dropping repeated symbols
    ///
    /// # Errors
    /// Returns an error if a symbol is not printable ASCII or if fewer than
    /// two distinct symbols remain.
    pub fn new(symbols: &str) -> Result<Self, DesignError> {
        let mut unique: Vec<u8> = Vec::with_capacity(symbols.len());
        for c in symbols.chars() {
            if !c.is_ascii_graphic() {
                return Err(DesignError::InvalidSymbol(c));
            }
            let b = c as u8;
            if !unique.contains(&b) {
                unique.push(b);
            }
        }
        if unique.len() < 2 {
            return Err(DesignError::AlphabetTooSmall { size: unique.len() });
        }
        Ok(Self { symbols: unique })
    }

    /// Number of symbols `q`
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false: construction rejects empty alphabets
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in order
    #[inline]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// True if the alphabet is exactly {A, C, G, T} in some order
    pub fn is_dna(&self) -> bool {
        self.symbols.len() == 4 && b"ACGT".iter().all(|b| self.symbols.contains(b))
    }

    /// Position of a symbol in the alphabet
    #[inline]
    pub fn index_of(&self, symbol: u8) -> Option<usize> {
        self.symbols.iter().position(|&s| s == symbol)
    }

    /// Map 1-based symbol indices (as produced by the shift rule) to a string
    pub fn decode_indices(&self, indices: &[u8]) -> String {
        indices
            .iter()
            .map(|&i| self.symbols[i as usize - 1] as char)
            .collect()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.symbols))
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alphabet({:?})", self.to_string())
    }
}
