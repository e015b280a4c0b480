//! Codec errors
//!
//! Analysis distinguishes "no grammar recognized the word" (returned as
//! `Ok(None)`) from "a grammar recognized the shape but a slot value is
//! invalid", which is a [`CodecError`]. Generation reports contract
//! violations in the input record the same way.

use thiserror::Error;

use crate::phonology::Stress;

/// Errors raised while generating or analyzing words.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("cannot place {requested:?} stress: word has only {available} vowel nuclei")]
    StressUnavailable { requested: Stress, available: usize },

    #[error("cannot geminate '{0}': not a consonant cluster")]
    Ungeminatable(String),

    #[error("'{0}' is not a valid affix consonant form")]
    InvalidAffixForm(String),

    #[error("'{0}' is not a valid Ca form")]
    InvalidCaForm(String),

    #[error("'{form}' is not a valid {slot} vowel form")]
    InvalidVowelForm { slot: &'static str, form: String },

    #[error("'{form}' is not a valid {slot} consonant form")]
    InvalidConsonantForm { slot: &'static str, form: String },

    #[error("'{0}' is not a valid root")]
    InvalidRoot(String),

    #[error("'{0}' is not a valid referent list")]
    InvalidReferents(String),

    #[error("incompatible shortcut: {0}")]
    IncompatibleShortcut(String),

    #[error("unexpected glottal stop in '{0}'")]
    UnexpectedGlottalStop(String),

    #[error("invalid record: {0}")]
    InvalidRecord(String),

    #[error("'{0}' is not a valid numeral")]
    InvalidNumeral(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CodecError {
    pub(crate) fn vowel(slot: &'static str, form: impl Into<String>) -> Self {
        CodecError::InvalidVowelForm { slot, form: form.into() }
    }

    pub(crate) fn consonant(slot: &'static str, form: impl Into<String>) -> Self {
        CodecError::InvalidConsonantForm { slot, form: form.into() }
    }

    pub(crate) fn record(message: impl Into<String>) -> Self {
        CodecError::InvalidRecord(message.into())
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_form() {
        let err = CodecError::vowel("Vr", "ëa");
        assert_eq!(err.to_string(), "'ëa' is not a valid Vr vowel form");

        let err = CodecError::StressUnavailable { requested: Stress::Antepenultimate, available: 2 };
        assert!(err.to_string().contains("only 2 vowel nuclei"));
    }
}
