//! Word-level entry points and analysis output
//!
//! Every analysis carries a decomposition: the word class, the stress that
//! was read, and one morpheme per slot with its surface text and value.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::adjunct::{analyze_adjunct, generate_adjunct, Adjunct};
use crate::config::GenerationOptions;
use crate::affix::Affix;
use crate::error::Result;
use crate::formative::{analyze_formative, generate_formative, Formative};
use crate::grammar::{segment, GroupKind};
use crate::phonology::Stress;
use crate::referential::{analyze_referential, generate_referential, Referential};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordClass {
    Formative,
    Referential,
    ParsingAdjunct,
    RegisterAdjunct,
    NumericAdjunct,
    BiasAdjunct,
    SuppletiveAdjunct,
    ModularAdjunct,
    SingleAffixAdjunct,
    MultipleAffixAdjunct,
}

/// One slot of an analyzed word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Morpheme {
    pub slot: String,
    pub surface: String,
    pub value: String,
    /// Sub-morphemes, e.g. the vowel and consonant of an affix.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Morpheme>,
}

impl Morpheme {
    pub fn new(slot: &str, surface: &str, value: impl Into<String>) -> Self {
        Self {
            slot: slot.to_string(),
            surface: surface.to_string(),
            value: value.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Morpheme>) -> Self {
        self.children = children;
        self
    }

    /// An affix with its Vx and Cs as children, in surface order.
    pub fn affix(slot: &str, surface: &str, affix: &Affix) -> Self {
        let (vx, cs) = match affix {
            Affix::Plain { cs, degree, kind } => (format!("{}.T{}", degree, kind.series()), cs.clone()),
            other => (String::new(), other.to_string()),
        };
        let children = segment(surface)
            .into_iter()
            .map(|g| match g.kind {
                GroupKind::Vowel => Morpheme::new("Vx", &g.text, vx.clone()),
                _ => Morpheme::new("Cs", &g.text, cs.clone()),
            })
            .collect();
        Morpheme::new(slot, surface, affix.to_string()).with_children(children)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decomposition {
    pub class: WordClass,
    pub stress: Stress,
    pub morphemes: Vec<Morpheme>,
}

impl Decomposition {
    pub fn new(class: WordClass, stress: Stress) -> Self {
        Self { class, stress, morphemes: Vec::new() }
    }

    pub fn push(&mut self, slot: &str, surface: &str, value: impl Into<String>) {
        self.morphemes.push(Morpheme::new(slot, surface, value));
    }

    /// Surface texts joined with hyphens.
    pub fn gloss_surface(&self) -> String {
        self.morphemes
            .iter()
            .filter(|m| !m.surface.is_empty())
            .map(|m| m.surface.as_str())
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Values joined with hyphens, skipping empty ones.
    pub fn gloss(&self) -> String {
        self.morphemes
            .iter()
            .filter(|m| !m.value.is_empty())
            .map(|m| m.value.as_str())
            .collect::<Vec<_>>()
            .join("-")
    }
}

/// A decoded value with its decomposition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis<T> {
    pub value: T,
    pub decomposition: Decomposition,
}

impl<T> Analysis<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Analysis<U> {
        Analysis { value: f(self.value), decomposition: self.decomposition }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "class", content = "value")]
pub enum Word {
    Formative(Formative),
    Referential(Referential),
    Adjunct(Adjunct),
}

/// Analyzes a word of any class.
///
/// Referentials and adjuncts have the more specific shapes, so they are
/// tried before formatives. Returns `Ok(None)` if no grammar recognizes the
/// word.
pub fn analyze_word(text: &str) -> Result<Option<Analysis<Word>>> {
    if let Some(found) = analyze_referential(text)? {
        debug!(word = text, "analyzed as referential");
        return Ok(Some(found.map(Word::Referential)));
    }
    if let Some(found) = analyze_adjunct(text)? {
        debug!(word = text, class = ?found.decomposition.class, "analyzed as adjunct");
        return Ok(Some(found.map(Word::Adjunct)));
    }
    if let Some(found) = analyze_formative(text)? {
        debug!(word = text, "analyzed as formative");
        return Ok(Some(found.map(Word::Formative)));
    }
    debug!(word = text, "no grammar matched");
    Ok(None)
}

pub fn generate_word(word: &Word, options: &GenerationOptions) -> Result<String> {
    match word {
        Word::Formative(f) => generate_formative(f, options),
        Word::Referential(r) => generate_referential(r),
        Word::Adjunct(a) => generate_adjunct(a),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gloss_skips_empty_slots() {
        let mut d = Decomposition::new(WordClass::Formative, Stress::Penultimate);
        d.push("Vv", "", "S1");
        d.push("Cr", "kl", "kl");
        d.push("Vr", "a", "");
        assert_eq!(d.gloss_surface(), "kl-a");
        assert_eq!(d.gloss(), "S1-kl");
    }

    #[test]
    fn test_affix_morpheme_splits_vowel_and_consonant() {
        let m = Morpheme::affix("VII", "äks", &Affix::plain("ks", 2));
        let slots: Vec<&str> = m.children.iter().map(|c| c.slot.as_str()).collect();
        assert_eq!(slots, ["Vx", "Cs"]);
        assert_eq!(m.children[1].surface, "ks");
    }

    #[test]
    fn test_unknown_word_is_not_an_error() {
        assert_eq!(analyze_word("qqq123"), Ok(None));
    }
}
