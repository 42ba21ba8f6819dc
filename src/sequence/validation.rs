//! Alphabet checks for nucleic acid sequences.

use log::trace;

use super::input::SeqInput;

/// True if every character of every sequence is one of `ATGCU`, in either case.
///
/// Empty inputs and empty sequences pass.
pub fn check_valid_sequence<'a>(sequences: impl Into<SeqInput<'a>>) -> bool {
    let sequences: SeqInput<'a> = sequences.into();
    let valid = sequences.iter().all(|seq| seq.chars().all(is_nucleotide));
    valid
}

fn is_nucleotide(c: char) -> bool {
    matches!(c, 'A' | 'T' | 'G' | 'C' | 'U' | 'a' | 't' | 'g' | 'c' | 'u')
}

/// True if every character of every sequence is one of `ATGC`, in either case.
pub fn is_dna<'a>(sequences: impl Into<SeqInput<'a>>) -> bool {
    let sequences: SeqInput<'a> = sequences.into();
    let dna = sequences.iter().all(is_dna_sequence);
    dna
}

pub(crate) fn is_dna_sequence(seq: &str) -> bool {
    seq.chars().all(|c| matches!(c, 'A' | 'T' | 'G' | 'C' | 'a' | 't' | 'g' | 'c'))
}

/// True if some sequence holds a `T` while the input as a whole holds a `U`.
///
/// The `T` is looked for in each sequence after uppercasing it. The `U` is looked for across all
/// sequences and only in uppercase, so `["ATG", "CCU"]` is mixed while `["ATG", "ccu"]` is not.
pub fn contains_t_and_u_at_the_same_time<'a>(sequences: impl Into<SeqInput<'a>>) -> bool {
    let sequences: SeqInput<'a> = sequences.into();
    let has_u = sequences.iter().any(|seq| seq.contains('U'));

    for seq in sequences.iter() {
        if seq.to_uppercase().contains('T') && has_u {
            trace!("sequence {seq:?} has T while the input carries U");
            return true;
        }
    }
    false
}


#[cfg(test)]
mod proptests {
    use super::*;
    use bio_seq::prelude::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn dna_strings_are_valid(seq in "[ATGCatgc]{0,64}") {
            prop_assert!(is_dna(seq.as_str()));
            prop_assert!(check_valid_sequence(seq.as_str()));
        }

        #[test]
        fn is_dna_agrees_with_bio_seq(seq in "[ATGCU]{1,64}") {
            let parsed = seq.parse::<Seq<Dna>>().is_ok();
            prop_assert_eq!(is_dna(seq.as_str()), parsed);
        }

        #[test]
        fn is_dna_implies_valid(seqs in proptest::collection::vec("[ATGCUNatgcun]{0,16}", 0..4)) {
            let refs: Vec<&str> = seqs.iter().map(String::as_str).collect();
            if is_dna(refs.clone()) {
                prop_assert!(check_valid_sequence(refs));
            }
        }
    }
}
