//! Transcription, reversal and complementation of DNA/RNA sequences

use log::{debug, warn};

use super::input::{SeqInput, SeqOutput};
use super::validation::is_dna_sequence;
use crate::error::{Result, SeqError};

/// Convert a DNA base to its complementary base, keeping its case
pub fn dna_complement_base(base: char) -> Option<char> {
    match base {
        'A' => Some('T'),
        'T' => Some('A'),
        'G' => Some('C'),
        'C' => Some('G'),
        'a' => Some('t'),
        't' => Some('a'),
        'g' => Some('c'),
        'c' => Some('g'),
        _ => None,
    }
}

/// Convert an RNA base to its complementary base, keeping its case
pub fn rna_complement_base(base: char) -> Option<char> {
    match base {
        'A' => Some('U'),
        'U' => Some('A'),
        'G' => Some('C'),
        'C' => Some('G'),
        'a' => Some('u'),
        'u' => Some('a'),
        'g' => Some('c'),
        'c' => Some('g'),
        _ => None,
    }
}

/// Transcribe DNA into RNA by turning every `T` into `U` and `t` into `u`.
///
/// Fails with [`SeqError::InvalidSequence`] as soon as one sequence is not pure DNA.
pub fn transcribe<'a>(sequences: impl Into<SeqInput<'a>>) -> Result<SeqOutput> {
    let sequences: SeqInput<'a> = sequences.into();

    if let Some(seq) = sequences.iter().find(|seq| !is_dna_sequence(seq)) {
        warn!("refusing to transcribe non-DNA sequence {seq:?}");
        return Err(SeqError::InvalidSequence { sequence: seq.to_string() });
    }

    debug!("transcribing {} sequence(s)", sequences.len());
    Ok(sequences.map(|seq| {
        seq.chars()
            .map(|c| match c {
                'T' => 'U',
                't' => 'u',
                other => other,
            })
            .collect()
    }))
}

/// Reverse the character order of every sequence.
pub fn reverse<'a>(sequences: impl Into<SeqInput<'a>>) -> SeqOutput {
    let sequences: SeqInput<'a> = sequences.into();
    sequences.map(|seq| seq.chars().rev().collect())
}

/// Complement one sequence, picking the RNA map when it holds an uppercase `U`.
fn complement_sequence(seq: &str) -> Result<String> {
    let is_rna = seq.contains('U');
    let complement_base: fn(char) -> Option<char> = if is_rna {
        rna_complement_base
    } else {
        dna_complement_base
    };

    seq.chars()
        .map(|base| {
            complement_base(base).ok_or_else(|| SeqError::InvalidCharacter {
                character: base,
                sequence: seq.to_string(),
            })
        })
        .collect()
}

/// Complement every sequence, each with its own DNA or RNA map.
///
/// Fails with [`SeqError::InvalidCharacter`] when a base has no partner in the chosen map,
/// which includes a lowercase `u` in a sequence without any uppercase `U`.
pub fn complement<'a>(sequences: impl Into<SeqInput<'a>>) -> Result<SeqOutput> {
    let sequences: SeqInput<'a> = sequences.into();

    let complemented = sequences
        .iter()
        .map(complement_sequence)
        .collect::<Result<Vec<String>>>()
        .inspect_err(|err| debug!("complement failed: {err}"))?;

    Ok(SeqOutput::shaped_like(&sequences, complemented))
}

/// Reverse, then complement, every sequence.
pub fn reverse_complement<'a>(sequences: impl Into<SeqInput<'a>>) -> Result<SeqOutput> {
    let reversed = reverse(sequences);
    complement(&reversed)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn reverse_is_an_involution(seq in "\\PC{0,64}") {
            let once = reverse(seq.as_str());
            prop_assert_eq!(reverse(&once), SeqOutput::Single(seq.clone()));
        }

        #[test]
        fn dna_complement_is_an_involution(seq in "[ATGCatgc]{0,64}") {
            let once = complement(seq.as_str()).unwrap();
            prop_assert_eq!(complement(&once).unwrap(), SeqOutput::Single(seq.clone()));
        }

        #[test]
        fn rna_complement_is_an_involution(seq in "[AUGCaugc]{0,62}") {
            // uppercase U and A keep both passes on the RNA map
            let seq = format!("UA{seq}");
            let once = complement(seq.as_str()).unwrap();
            prop_assert_eq!(complement(&once).unwrap(), SeqOutput::Single(seq.clone()));
        }

        #[test]
        fn reverse_complement_is_an_involution(
            seqs in proptest::collection::vec("[ATGCatgc]{0,32}", 0..5)
        ) {
            let refs: Vec<&str> = seqs.iter().map(String::as_str).collect();
            let once = reverse_complement(refs.clone()).unwrap();
            let twice = reverse_complement(&once).unwrap();
            prop_assert_eq!(twice, SeqOutput::shaped_like(&SeqInput::from(refs), seqs.clone()));
        }

        #[test]
        fn transcribed_dna_has_no_t(seq in "[ATGCatgc]{0,64}") {
            let rna = transcribe(seq.as_str()).unwrap().into_vec().remove(0);
            prop_assert!(!rna.contains(['T', 't']));
            prop_assert_eq!(rna.len(), seq.len());
        }
    }
}
