//! Molecular weights of amino acid residues
//!
//! Two tables cover the 20 standard amino acids in Daltons: average masses from natural isotope
//! abundance, and monoisotopic masses from the most abundant isotope of each element. Both are
//! residue masses, i.e. without the water lost on peptide bond formation.

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};

use crate::error::{Result, SeqError};

/// Which mass table to weigh residues with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WeightKind {
    #[default]
    Average,
    Monoisotopic,
}

impl WeightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightKind::Average => "average",
            WeightKind::Monoisotopic => "monoisotopic",
        }
    }

    pub fn table(&self) -> &'static WeightTable {
        match self {
            WeightKind::Average => &AVERAGE_WEIGHTS,
            WeightKind::Monoisotopic => &MONOISOTOPIC_WEIGHTS,
        }
    }
}

impl fmt::Display for WeightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightKind {
    type Err = SeqError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "average" => Ok(WeightKind::Average),
            "monoisotopic" => Ok(WeightKind::Monoisotopic),
            other => Err(SeqError::InvalidArgument(format!(
                "unknown weight kind '{other}', expected 'average' or 'monoisotopic' \
                 (or leave it unset for average)"
            ))),
        }
    }
}

/// Residue masses keyed by uppercase one-letter code.
#[derive(Debug)]
pub struct WeightTable {
    kind: WeightKind,
    weights: [(char, f64); 20],
}

impl WeightTable {
    pub fn kind(&self) -> WeightKind {
        self.kind
    }

    /// Mass of an uppercase residue code.
    pub fn get(&self, residue: char) -> Option<f64> {
        self.weights
            .iter()
            .find(|(code, _)| *code == residue)
            .map(|&(_, weight)| weight)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.weights.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

pub static AVERAGE_WEIGHTS: WeightTable = WeightTable {
    kind: WeightKind::Average,
    weights: [
        ('A', 71.0788),   // Alanine
        ('R', 156.1875),  // Arginine
        ('N', 114.1038),  // Asparagine
        ('D', 115.0886),  // Aspartic acid
        ('C', 103.1388),  // Cysteine
        ('E', 129.1155),  // Glutamic acid
        ('Q', 128.1307),  // Glutamine
        ('G', 57.0519),   // Glycine
        ('H', 137.1411),  // Histidine
        ('I', 113.1594),  // Isoleucine
        ('L', 113.1594),  // Leucine
        ('K', 128.1741),  // Lysine
        ('M', 131.1926),  // Methionine
        ('F', 147.1766),  // Phenylalanine
        ('P', 97.1167),   // Proline
        ('S', 87.0782),   // Serine
        ('T', 101.1051),  // Threonine
        ('W', 186.2132),  // Tryptophan
        ('Y', 163.1760),  // Tyrosine
        ('V', 99.1326),   // Valine
    ],
};

pub static MONOISOTOPIC_WEIGHTS: WeightTable = WeightTable {
    kind: WeightKind::Monoisotopic,
    weights: [
        ('A', 71.03711),
        ('R', 156.10111),
        ('N', 114.04293),
        ('D', 115.02694),
        ('C', 103.00919),
        ('E', 129.04259),
        ('Q', 128.05858),
        ('G', 57.02146),
        ('H', 137.05891),
        ('I', 113.08406),
        ('L', 113.08406),
        ('K', 128.09496),
        ('M', 131.04049),
        ('F', 147.06841),
        ('P', 97.05276),
        ('S', 87.03203),
        ('T', 101.04768),
        ('W', 186.07931),
        ('Y', 163.06333),
        ('V', 99.06841),
    ],
};

/// Pick a weight table by name, `"average"` or `"monoisotopic"`.
pub fn choose_weight(kind: &str) -> Result<&'static WeightTable> {
    let kind: WeightKind = kind.parse()?;
    debug!("using {kind} residue weights");
    Ok(kind.table())
}

/// Get the mass of a single residue, case-insensitive
pub fn residue_weight(residue: char, kind: WeightKind) -> Option<f64> {
    kind.table().get(residue.to_ascii_uppercase())
}

/// Round the exact binary value to three decimals.
///
/// Scaling by 1000 first would round twice, so the value goes through decimal formatting instead.
fn round_milli(value: f64) -> Result<f64> {
    format!("{value:.3}")
        .parse()
        .map_err(|err| SeqError::InvalidArgument(format!("cannot round weight {value}: {err}")))
}

/// Sum the residue masses of a protein sequence, rounded to three decimals.
///
/// The sequence is uppercased before lookup. Any residue outside the 20 standard codes fails the
/// whole call with [`SeqError::UnknownResidue`]; no partial sum is returned.
pub fn aa_weight(seq: &str, kind: WeightKind) -> Result<f64> {
    let table = kind.table();
    let mut total_weight = 0.0;

    for residue in seq.to_uppercase().chars() {
        let weight = table
            .get(residue)
            .ok_or(SeqError::UnknownResidue { residue, kind })?;
        total_weight += weight;
    }

    trace!("{} residue(s) weigh {total_weight} Da ({kind})", seq.chars().count());
    round_milli(total_weight)
}
