//! Translation of DNA into protein with the standard genetic code.
//!
//! Every codon is translated, including stop codons, which appear inline as
//! [`STOP_SYMBOL`]. Translation does not halt at the first stop the way a
//! ribosome would: `ATGTAAATG` becomes `M*M`.

use crate::error::Result;
use crate::types::{NucleotideSequence, ProteinSequence};
use phf::phf_map;

/// Residue emitted for TAA, TAG and TGA.
pub const STOP_SYMBOL: char = '*';

/// Standard genetic code (NCBI table 1).
static CODON_TABLE: phf::Map<&'static str, char> = phf_map! {
    "TTT" => 'F', "TTC" => 'F', "TTA" => 'L', "TTG" => 'L',
    "TCT" => 'S', "TCC" => 'S', "TCA" => 'S', "TCG" => 'S',
    "TAT" => 'Y', "TAC" => 'Y', "TAA" => '*', "TAG" => '*',
    "TGT" => 'C', "TGC" => 'C', "TGA" => '*', "TGG" => 'W',
    "CTT" => 'L', "CTC" => 'L', "CTA" => 'L', "CTG" => 'L',
    "CCT" => 'P', "CCC" => 'P', "CCA" => 'P', "CCG" => 'P',
    "CAT" => 'H', "CAC" => 'H', "CAA" => 'Q', "CAG" => 'Q',
    "CGT" => 'R', "CGC" => 'R', "CGA" => 'R', "CGG" => 'R',
    "ATT" => 'I', "ATC" => 'I', "ATA" => 'I', "ATG" => 'M',
    "ACT" => 'T', "ACC" => 'T', "ACA" => 'T', "ACG" => 'T',
    "AAT" => 'N', "AAC" => 'N', "AAA" => 'K', "AAG" => 'K',
    "AGT" => 'S', "AGC" => 'S', "AGA" => 'R', "AGG" => 'R',
    "GTT" => 'V', "GTC" => 'V', "GTA" => 'V', "GTG" => 'V',
    "GCT" => 'A', "GCC" => 'A', "GCA" => 'A', "GCG" => 'A',
    "GAT" => 'D', "GAC" => 'D', "GAA" => 'E', "GAG" => 'E',
    "GGT" => 'G', "GGC" => 'G', "GGA" => 'G', "GGG" => 'G',
};

/// Looks up a single codon in the standard table.
///
/// Lowercase input is accepted. Returns `None` for anything that is not
/// exactly three of A, C, G, T.
pub fn codon_to_amino_acid(codon: &str) -> Option<char> {
    if codon.len() != 3 {
        return None;
    }
    CODON_TABLE.get(codon.to_ascii_uppercase().as_str()).copied()
}

impl NucleotideSequence {
    /// Translates every codon in order. Infallible: the sequence was
    /// validated on construction.
    pub fn translate(&self) -> ProteinSequence {
        let residues: String = self.codons().map(|codon| CODON_TABLE[codon]).collect();
        ProteinSequence::from_residues(residues)
    }
}

/// Translates a DNA sequence into a protein sequence.
///
/// # Arguments
/// * `dna` - DNA sequence, any case
///
/// # Returns
/// * `Result<ProteinSequence>` - one residue per codon, stops included
///
/// # Errors
/// * Returns `SeqError::InvalidLength` if the length is not a multiple of 3
/// * Returns `SeqError::InvalidSymbol` for characters outside A, C, G, T
///
/// No partial protein is produced on error.
pub fn translate_dna(dna: &str) -> Result<ProteinSequence> {
    Ok(NucleotideSequence::new(dna)?.translate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeqError;

    #[test]
    fn table_is_complete() {
        assert_eq!(CODON_TABLE.len(), 64);
        let stops = CODON_TABLE
            .entries()
            .filter(|(_, aa)| **aa == STOP_SYMBOL)
            .count();
        assert_eq!(stops, 3);
    }

    #[test]
    fn single_codons() {
        assert_eq!(codon_to_amino_acid("ATG"), Some('M'));
        assert_eq!(codon_to_amino_acid("atg"), Some('M'));
        assert_eq!(codon_to_amino_acid("TGG"), Some('W'));
        assert_eq!(codon_to_amino_acid("TGA"), Some(STOP_SYMBOL));
        assert_eq!(codon_to_amino_acid("ATN"), None);
        assert_eq!(codon_to_amino_acid("AT"), None);
    }

    #[test]
    fn length_checked_before_symbols() {
        match translate_dna("ANNN") {
            Err(SeqError::InvalidLength { length }) => assert_eq!(length, 4),
            other => panic!("expected InvalidLength, got {:?}", other),
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::error::SeqError;
    use proptest::prelude::*;

    fn base() -> impl Strategy<Value = char> {
        prop_oneof![Just('A'), Just('C'), Just('G'), Just('T')]
    }

    fn in_frame(max_codons: usize) -> impl Strategy<Value = String> {
        proptest::collection::vec((base(), base(), base()), 0..=max_codons)
            .prop_map(|codons| codons.into_iter().flat_map(|(a, b, c)| [a, b, c]).collect())
    }

    fn out_of_frame(max_codons: usize) -> impl Strategy<Value = String> {
        (in_frame(max_codons), proptest::collection::vec(base(), 1..=2)).prop_map(
            |(mut seq, extra)| {
                seq.extend(extra);
                seq
            },
        )
    }

    proptest! {
        #[test]
        fn case_insensitive(seq in in_frame(50)) {
            let upper = translate_dna(&seq.to_uppercase()).unwrap();
            let lower = translate_dna(&seq.to_lowercase()).unwrap();
            prop_assert_eq!(upper, lower);
        }

        #[test]
        fn one_residue_per_codon(seq in in_frame(50)) {
            let protein = translate_dna(&seq).unwrap();
            prop_assert_eq!(protein.len(), seq.len() / 3);
        }

        #[test]
        fn ragged_length_rejected(seq in out_of_frame(50)) {
            let is_length_error = matches!(translate_dna(&seq), Err(SeqError::InvalidLength { .. }));
            prop_assert!(is_length_error);
        }
    }
}
