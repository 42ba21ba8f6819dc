//! Amino acid alphabet and classification tables
//!
//! Codes are the 20 standard one-letter residue codes, stored uppercase.

/// One-letter code to three-letter name for the 20 standard amino acids.
pub static AMINO_ACIDS: [(char, &str); 20] = [
    ('A', "Ala"),
    ('C', "Cys"),
    ('D', "Asp"),
    ('E', "Glu"),
    ('F', "Phe"),
    ('G', "Gly"),
    ('H', "His"),
    ('I', "Ile"),
    ('K', "Lys"),
    ('L', "Leu"),
    ('M', "Met"),
    ('N', "Asn"),
    ('P', "Pro"),
    ('Q', "Gln"),
    ('R', "Arg"),
    ('S', "Ser"),
    ('T', "Thr"),
    ('V', "Val"),
    ('W', "Trp"),
    ('Y', "Tyr"),
];

pub static HYDROPHOBIC_AA: [char; 8] = ['A', 'V', 'L', 'I', 'P', 'F', 'W', 'M'];

pub static HYDROPHILIC_AA: [char; 12] = [
    'R', 'N', 'D', 'C', 'Q', 'E', 'G', 'H', 'K', 'S', 'T', 'Y',
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hydropathy {
    Hydrophobic,
    Hydrophilic,
}

/// Check whether a character is one of the 20 standard codes, in either case.
pub fn is_amino_acid(residue: char) -> bool {
    matches!(
        residue.to_ascii_uppercase(),
        'A' | 'C' | 'D' | 'E' | 'F' | 'G' | 'H' | 'I' | 'K' | 'L'
            | 'M' | 'N' | 'P' | 'Q' | 'R' | 'S' | 'T' | 'V' | 'W' | 'Y'
    )
}

/// True if the sequence holds nothing but standard amino acid codes. Empty sequences pass.
pub fn is_aa(seq: &str) -> bool {
    seq.chars().all(is_amino_acid)
}

/// Three-letter name of a residue, case-insensitive.
pub fn three_letter_code(residue: char) -> Option<&'static str> {
    let residue = residue.to_ascii_uppercase();
    AMINO_ACIDS
        .iter()
        .find(|(code, _)| *code == residue)
        .map(|&(_, name)| name)
}

/// Classify a residue as hydrophobic or hydrophilic, case-insensitive.
pub fn hydropathy(residue: char) -> Option<Hydropathy> {
    let residue = residue.to_ascii_uppercase();
    if HYDROPHOBIC_AA.contains(&residue) {
        Some(Hydropathy::Hydrophobic)
    } else if HYDROPHILIC_AA.contains(&residue) {
        Some(Hydropathy::Hydrophilic)
    } else {
        None
    }
}
