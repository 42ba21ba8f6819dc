//! Amino acid tables and protein molecular weight

pub mod amino_acids;
pub mod molecular_weights;

pub use amino_acids::*;
pub use molecular_weights::*;
