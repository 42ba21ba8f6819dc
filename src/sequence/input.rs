//! Shapes of nucleic acid inputs and outputs.
//!
//! Callers hand the transforms either one bare sequence or an ordered collection of them.
//! Whenever that input reduces to exactly one sequence the result is a single string,
//! otherwise it is one string per input sequence, in input order.

/// One sequence or an ordered collection of sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeqInput<'a> {
    Single(&'a str),
    Many(Vec<&'a str>),
}

impl<'a> SeqInput<'a> {
    /// The lone sequence of this input, if there is exactly one.
    ///
    /// A bare sequence is returned as is, a one-element collection yields its element.
    /// Empty collections and collections of two or more have no first sequence.
    pub fn first_sequence(&self) -> Option<&'a str> {
        match self {
            SeqInput::Single(seq) => Some(*seq),
            SeqInput::Many(seqs) if seqs.len() == 1 => Some(seqs[0]),
            SeqInput::Many(_) => None,
        }
    }

    /// Sequences in input order. A bare sequence yields itself once.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        let seqs: &[&'a str] = match self {
            SeqInput::Single(seq) => std::slice::from_ref(seq),
            SeqInput::Many(seqs) => seqs,
        };
        seqs.iter().copied()
    }

    pub fn len(&self) -> usize {
        match self {
            SeqInput::Single(_) => 1,
            SeqInput::Many(seqs) => seqs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Apply `f` to every sequence and shape the results after this input.
    pub(crate) fn map<F>(&self, f: F) -> SeqOutput
    where
        F: FnMut(&'a str) -> String,
    {
        let out: Vec<String> = self.iter().map(f).collect();
        SeqOutput::shaped_like(self, out)
    }
}

impl<'a> From<&'a str> for SeqInput<'a> {
    fn from(seq: &'a str) -> Self {
        SeqInput::Single(seq)
    }
}

impl<'a> From<&'a String> for SeqInput<'a> {
    fn from(seq: &'a String) -> Self {
        SeqInput::Single(seq.as_str())
    }
}

impl<'a> From<Vec<&'a str>> for SeqInput<'a> {
    fn from(seqs: Vec<&'a str>) -> Self {
        SeqInput::Many(seqs)
    }
}

impl<'a> From<&'a [&'a str]> for SeqInput<'a> {
    fn from(seqs: &'a [&'a str]) -> Self {
        SeqInput::Many(seqs.to_vec())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for SeqInput<'a> {
    fn from(seqs: [&'a str; N]) -> Self {
        SeqInput::Many(seqs.to_vec())
    }
}

impl<'a> From<&'a [String]> for SeqInput<'a> {
    fn from(seqs: &'a [String]) -> Self {
        SeqInput::Many(seqs.iter().map(String::as_str).collect())
    }
}

impl<'a> From<&'a Vec<String>> for SeqInput<'a> {
    fn from(seqs: &'a Vec<String>) -> Self {
        SeqInput::from(seqs.as_slice())
    }
}

impl<'a> From<&'a SeqOutput> for SeqInput<'a> {
    fn from(output: &'a SeqOutput) -> Self {
        output.as_input()
    }
}

/// Result of a nucleic acid transform: one sequence, or one per input sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeqOutput {
    Single(String),
    Many(Vec<String>),
}

impl SeqOutput {
    /// Collapse `out` to a single string when `input` has a first sequence.
    pub(crate) fn shaped_like(input: &SeqInput<'_>, mut out: Vec<String>) -> SeqOutput {
        if input.first_sequence().is_some() && out.len() == 1 {
            SeqOutput::Single(out.remove(0))
        } else {
            SeqOutput::Many(out)
        }
    }

    pub fn as_single(&self) -> Option<&str> {
        match self {
            SeqOutput::Single(seq) => Some(seq.as_str()),
            SeqOutput::Many(_) => None,
        }
    }

    pub fn into_single(self) -> Option<String> {
        match self {
            SeqOutput::Single(seq) => Some(seq),
            SeqOutput::Many(_) => None,
        }
    }

    /// All sequences in order, whatever the shape.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            SeqOutput::Single(seq) => vec![seq],
            SeqOutput::Many(seqs) => seqs,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SeqOutput::Single(_) => 1,
            SeqOutput::Many(seqs) => seqs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow this output as the input of another transform, keeping its shape.
    pub fn as_input(&self) -> SeqInput<'_> {
        match self {
            SeqOutput::Single(seq) => SeqInput::Single(seq.as_str()),
            SeqOutput::Many(seqs) => SeqInput::Many(seqs.iter().map(String::as_str).collect()),
        }
    }
}

impl PartialEq<&str> for SeqOutput {
    fn eq(&self, other: &&str) -> bool {
        self.as_single() == Some(*other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sequence_of_bare_string() {
        assert_eq!(SeqInput::from("ATGC").first_sequence(), Some("ATGC"));
        assert_eq!(SeqInput::from("").first_sequence(), Some(""));
    }

    #[test]
    fn test_first_sequence_of_collections() {
        assert_eq!(SeqInput::from(vec!["ATGC"]).first_sequence(), Some("ATGC"));
        assert_eq!(SeqInput::from(vec!["ATGC", "GGCC"]).first_sequence(), None);
        assert_eq!(SeqInput::Many(Vec::new()).first_sequence(), None);
    }

    #[test]
    fn test_iter_keeps_order() {
        let owned = vec!["AA".to_string(), "CC".to_string(), "GG".to_string()];
        let input = SeqInput::from(&owned);
        assert_eq!(input.iter().collect::<Vec<_>>(), vec!["AA", "CC", "GG"]);
        assert_eq!(input.len(), 3);
        assert_eq!(SeqInput::from("AT").iter().collect::<Vec<_>>(), vec!["AT"]);
    }

    #[test]
    fn test_output_shapes() {
        let single = SeqInput::from(["ATGC"]).map(|s| s.to_lowercase());
        assert_eq!(single, SeqOutput::Single("atgc".to_string()));
        assert_eq!(single, "atgc");

        let many = SeqInput::from(["A", "C"]).map(|s| s.to_string());
        assert_eq!(many.as_single(), None);
        assert_eq!(many.into_vec(), vec!["A".to_string(), "C".to_string()]);

        let empty = SeqInput::Many(Vec::new()).map(|s| s.to_string());
        assert_eq!(empty, SeqOutput::Many(Vec::new()));
        assert!(empty.is_empty());
    }

    #[test]
    fn test_output_feeds_back_with_same_shape() {
        let out = SeqOutput::Many(vec!["AT".to_string()]);
        assert_eq!(out.as_input(), SeqInput::Many(vec!["AT"]));
        let out = SeqOutput::Single("GC".to_string());
        assert_eq!(SeqInput::from(&out), SeqInput::Single("GC"));
    }
}
