use crate::error::{Result, SeqError};
use std::fmt;

/// A DNA sequence ready for translation.
///
/// Holds uppercase `A`, `C`, `G`, `T` only and its length is always a
/// multiple of 3. Construct it with [`NucleotideSequence::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NucleotideSequence(String);

impl NucleotideSequence {
    /// Validates and normalizes a raw DNA string.
    ///
    /// The length is checked before any symbol is inspected, so a sequence that
    /// is both too short and contains an `N` reports `InvalidLength`.
    ///
    /// # Errors
    /// * `SeqError::InvalidLength` - length (in characters) is not divisible by 3
    /// * `SeqError::InvalidSymbol` - a character other than A, C, G or T (any case)
    pub fn new(sequence: &str) -> Result<Self> {
        let length = sequence.chars().count();
        if length % 3 != 0 {
            return Err(SeqError::InvalidLength { length });
        }

        let mut normalized = String::with_capacity(length);
        for (position, symbol) in sequence.chars().enumerate() {
            match symbol.to_ascii_uppercase() {
                base @ ('A' | 'C' | 'G' | 'T') => normalized.push(base),
                _ => return Err(SeqError::invalid_symbol(position, symbol)),
            }
        }

        Ok(NucleotideSequence(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consecutive non-overlapping triplets starting at position 0.
    pub fn codons(&self) -> impl Iterator<Item = &str> + '_ {
        // ASCII only, so every 3-byte step is a char boundary
        (0..self.0.len())
            .step_by(3)
            .map(move |start| &self.0[start..start + 3])
    }
}

impl fmt::Display for NucleotideSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for NucleotideSequence {
    type Error = SeqError;

    fn try_from(sequence: &str) -> Result<Self> {
        NucleotideSequence::new(sequence)
    }
}

/// Amino-acid residues, one per translated codon, stops included as `*`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ProteinSequence(String);

impl ProteinSequence {
    pub(crate) fn from_residues(residues: String) -> Self {
        ProteinSequence(residues)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of residues, which equals the number of codons translated.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Residue indices holding the stop symbol.
    pub fn stop_positions(&self) -> Vec<usize> {
        self.0
            .char_indices()
            .filter(|&(_, residue)| residue == crate::translate::STOP_SYMBOL)
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ProteinSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProteinSequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for ProteinSequence {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Two strings to compare after right-padding the shorter one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonPair {
    pub a: String,
    pub b: String,
    pub pad: char,
}

impl ComparisonPair {
    /// Builds a pair using the default pad character `_`.
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        ComparisonPair {
            a: a.into(),
            b: b.into(),
            pad: crate::hamming::DEFAULT_PAD_CHAR,
        }
    }

    pub fn with_pad(mut self, pad: char) -> Self {
        self.pad = pad;
        self
    }
}
