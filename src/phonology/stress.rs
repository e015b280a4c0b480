//! Stress placement, normalization and syllables

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use super::letters::{self, is_consonant, is_stressed, is_vowel, nuclei};
use crate::error::{CodecError, Result};

/// Position of the stressed nucleus, counted from the end of the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stress {
    Ultimate,
    Penultimate,
    Antepenultimate,
    PreAntepenultimate,
}

impl Stress {
    /// 1 for ultimate, 2 for penultimate and so on.
    pub fn position(self) -> usize {
        match self {
            Stress::Ultimate => 1,
            Stress::Penultimate => 2,
            Stress::Antepenultimate => 3,
            Stress::PreAntepenultimate => 4,
        }
    }

    pub fn from_position(position: usize) -> Option<Self> {
        match position {
            1 => Some(Stress::Ultimate),
            2 => Some(Stress::Penultimate),
            3 => Some(Stress::Antepenultimate),
            4 => Some(Stress::PreAntepenultimate),
            _ => None,
        }
    }
}

impl Default for Stress {
    fn default() -> Self {
        Stress::Penultimate
    }
}

/// Marks the first vowel of the requested nucleus.
///
/// Existing marks are removed first. Monosyllables accept ultimate stress,
/// which is then written explicitly.
pub fn apply_stress(word: &str, stress: Stress) -> Result<String> {
    let plain = remove_stress(word);
    let mut chars: Vec<char> = plain.chars().collect();
    let found = nuclei(&plain);
    let position = stress.position();
    if found.len() < position {
        return Err(CodecError::StressUnavailable {
            requested: stress,
            available: found.len(),
        });
    }
    let target = found[found.len() - position];
    chars[target.start] = letters::stressed(chars[target.start]);
    Ok(chars.into_iter().collect())
}

/// Writes a word's stress the way it is spelled: penultimate stays
/// unmarked, any other position is marked.
pub fn mark_stress(word: &str, stress: Stress) -> Result<String> {
    match stress {
        Stress::Penultimate => Ok(remove_stress(word)),
        other => apply_stress(word, other),
    }
}

pub fn remove_stress(word: &str) -> String {
    word.chars().map(letters::unstressed).collect()
}

/// A word folded to canonical spelling, with its stress pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedWord {
    pub text: String,
    pub stress: Stress,
}

fn fold_variant(c: char) -> char {
    match c {
        'ṭ' | 'ŧ' => 'ţ',
        'ḍ' | 'đ' => 'ḑ',
        'ẓ' => 'ż',
        'ṇ' | 'ņ' => 'ň',
        'ŗ' => 'ř',
        'ł' | 'ḷ' => 'ļ',
        'ı' => 'i',
        'à' => 'á',
        'è' => 'é',
        'ì' => 'í',
        'ò' => 'ó',
        'ù' => 'ú',
        '’' | '‘' | 'ʼ' | '`' => '\'',
        other => other,
    }
}

fn canonical_chars(word: &str) -> Vec<char> {
    let mut out: Vec<char> = Vec::with_capacity(word.len());
    for c in word.to_lowercase().nfc() {
        // Unicode has no precomposed umlaut with circumflex.
        if c == '\u{302}' {
            if let Some(prev) = out.last_mut() {
                if matches!(*prev, 'ä' | 'ë' | 'ö' | 'ü') {
                    *prev = letters::stressed(*prev);
                    continue;
                }
            }
        }
        out.push(fold_variant(c));
    }
    out
}

/// Folds a word to canonical spelling and classifies its stress.
///
/// An unmarked word is penultimate. When several nuclei carry a mark the
/// first one wins.
pub fn normalize(word: &str) -> NormalizedWord {
    let chars = canonical_chars(word);
    let marked: String = chars.iter().collect();
    let found = nuclei(&marked);
    let stress = found
        .iter()
        .position(|n| chars[n.start..n.start + n.len].iter().any(|&c| is_stressed(c)))
        .and_then(|i| Stress::from_position(found.len() - i))
        .unwrap_or_default();

    NormalizedWord {
        text: remove_stress(&marked),
        stress,
    }
}

/// Splits a word into syllables.
///
/// Each syllable holds one nucleus. Medial consonants go to the following
/// onset except the first of a cluster of two or more, which closes the
/// previous syllable; trailing consonants close the last syllable.
pub fn syllables(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let found = nuclei(word);
    if found.is_empty() {
        return if word.is_empty() { Vec::new() } else { vec![word.to_string()] };
    }

    let mut bounds = vec![0];
    for pair in found.windows(2) {
        let gap_start = pair[0].start + pair[0].len;
        let gap_end = pair[1].start;
        let consonants = chars[gap_start..gap_end]
            .iter()
            .filter(|&&c| is_consonant(c))
            .count();
        let split = if consonants == 0 {
            gap_end
        } else {
            // a glottal stop stays with the preceding nucleus
            let mut onset = gap_end;
            while onset > gap_start && is_consonant(chars[onset - 1]) {
                onset -= 1;
            }
            if consonants >= 2 { onset + 1 } else { onset }
        };
        bounds.push(split);
    }
    bounds.push(chars.len());

    bounds
        .windows(2)
        .map(|w| chars[w[0]..w[1]].iter().collect::<String>())
        .filter(|s| s.chars().any(is_vowel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_stress_positions() {
        assert_eq!(apply_stress("malai", Stress::Ultimate).unwrap(), "malái");
        assert_eq!(apply_stress("malai", Stress::Penultimate).unwrap(), "málai");
        assert_eq!(apply_stress("ëlala", Stress::Antepenultimate).unwrap(), "êlala");
    }

    #[test]
    fn test_stress_boundary() {
        assert!(apply_stress("la", Stress::Ultimate).is_ok());
        assert_eq!(
            apply_stress("la", Stress::Penultimate),
            Err(CodecError::StressUnavailable { requested: Stress::Penultimate, available: 1 })
        );
    }

    #[test]
    fn test_normalize_classifies_stress() {
        let n = normalize("MALÁI");
        assert_eq!(n.text, "malai");
        assert_eq!(n.stress, Stress::Ultimate);

        let n = normalize("êlala");
        assert_eq!(n.stress, Stress::Antepenultimate);
        assert_eq!(n.text, "ëlala");

        assert_eq!(normalize("kala").stress, Stress::Penultimate);
    }

    #[test]
    fn test_normalize_folds_variants() {
        assert_eq!(normalize("aṭal").text, "aţal");
        assert_eq!(normalize("a’a").text, "a'a");
        assert_eq!(normalize("t\u{327}ala").text, "ţala");
        assert_eq!(normalize("ka\u{301}la").stress, Stress::Penultimate);
        assert_eq!(normalize("kala\u{301}").stress, Stress::Ultimate);
    }

    #[test]
    fn test_decomposed_and_precomposed_agree() {
        let pairs = [
            ("ņa", "n\u{327}a"),
            ("ŗa", "r\u{327}a"),
            ("ḷa", "l\u{323}a"),
            ("ṭa", "t\u{323}a"),
            ("ẓa", "z\u{323}a"),
            ("ţa", "t\u{327}a"),
            ("ša", "s\u{30C}a"),
            ("kälá", "ka\u{308}la\u{301}"),
        ];
        for (precomposed, decomposed) in pairs {
            assert_eq!(normalize(decomposed), normalize(precomposed), "{}", precomposed);
        }
        assert_eq!(normalize("n\u{327}a").text, "ňa");
        assert_eq!(normalize("l\u{323}a").text, "ļa");
    }

    #[test]
    fn test_circumflex_over_umlaut_marks_stress() {
        let n = normalize("e\u{308}\u{302}lala");
        assert_eq!(n.text, "ëlala");
        assert_eq!(n.stress, Stress::Antepenultimate);
    }

    #[test]
    fn test_syllables() {
        assert_eq!(syllables("malai"), vec!["ma", "lai"]);
        assert_eq!(syllables("arspal"), vec!["ar", "spal"]);
        assert_eq!(syllables("kia"), vec!["ki", "a"]);
        assert_eq!(syllables("a'a"), vec!["a'", "a"]);
    }
}
