//! seqtools - DNA, RNA and protein sequence helpers
//!
//! Validation, transcription, reversal and (reverse) complementation of nucleic acid sequences,
//! and amino acid checks and molecular weights for protein sequences. Every operation is a pure
//! function over its arguments and read-only static tables.

pub mod error;
pub mod logging;
pub mod protein;
pub mod sequence;

// Re-export main types for convenience
pub use error::{Result, SeqError};
pub use protein::{aa_weight, choose_weight, is_aa, WeightKind, WeightTable};
pub use sequence::{
    check_valid_sequence, complement, contains_t_and_u_at_the_same_time, is_dna, reverse,
    reverse_complement, transcribe, SeqInput, SeqOutput,
};
