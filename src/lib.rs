//! DNA to protein translation and padded Hamming distance in Rust

pub mod error;
pub mod fasta;
pub mod hamming;
pub mod table;
pub mod translate;
pub mod types;

pub use error::{Result, SeqError};
pub use hamming::{hamming_distance, hamming_distance_with_pad, DEFAULT_PAD_CHAR};
pub use translate::{translate_dna, STOP_SYMBOL};
pub use types::{ComparisonPair, NucleotideSequence, ProteinSequence};
