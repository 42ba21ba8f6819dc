//! Error type shared by every operation in the crate.

use thiserror::Error;

use crate::protein::WeightKind;

#[derive(Debug, Error)]
pub enum SeqError {
    /// Transcription was asked for on something that is not pure DNA.
    #[error("sequence '{sequence}' is RNA, not DNA; RNA cannot be transcribed")]
    InvalidSequence { sequence: String },

    /// A character has no partner in the complement map chosen for its sequence.
    #[error("cannot complement '{character}' in sequence '{sequence}'")]
    InvalidCharacter { character: char, sequence: String },

    /// A residue has no entry in the selected weight table.
    #[error("residue '{residue}' has no {kind} weight")]
    UnknownResidue { residue: char, kind: WeightKind },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("logger already initialized: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, SeqError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = SeqError::InvalidSequence { sequence: "ATGU".to_string() };
        assert_eq!(
            err.to_string(),
            "sequence 'ATGU' is RNA, not DNA; RNA cannot be transcribed"
        );

        let err = SeqError::UnknownResidue { residue: 'X', kind: WeightKind::Monoisotopic };
        assert_eq!(err.to_string(), "residue 'X' has no monoisotopic weight");
    }
}
