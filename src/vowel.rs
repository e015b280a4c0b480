//! Vowel-form table
//!
//! Nearly every vocalic slot is a (series, degree) cell in one 4 × 10 table.
//! Rendering depends on the preceding letter (series-3 alternates after `w`
//! and `y`); parsing accepts either spelling.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::phonology::letters::{is_vowel, DIPHTHONGS, GLOTTAL_STOP};

const TABLE: [[&str; 10]; 4] = [
    ["ae", "a", "ä", "e", "i", "ëi", "ö", "o", "ü", "u"],
    ["ea", "ai", "au", "ei", "eu", "ëu", "ou", "oi", "iu", "ui"],
    ["üo", "ia", "ie", "io", "iö", "eë", "uö", "uo", "ue", "ua"],
    ["üö", "ao", "aö", "eo", "eö", "oë", "öe", "oe", "öa", "oa"],
];

/// Series-3 spellings used after `y` (for i-initial forms) or `w` (for
/// u-initial forms). Empty where no alternate exists.
const SERIES_3_ALTERNATES: [&str; 10] = ["", "uä", "uë", "üä", "üë", "", "öë", "öä", "ië", "iä"];

lazy_static! {
    static ref REVERSE: HashMap<&'static str, VowelForm> = {
        let mut map = HashMap::new();
        for (s, row) in TABLE.iter().enumerate() {
            for (d, form) in row.iter().enumerate() {
                map.insert(*form, VowelForm::new(s as u8 + 1, d as u8));
            }
        }
        for (d, form) in SERIES_3_ALTERNATES.iter().enumerate() {
            if !form.is_empty() {
                map.insert(*form, VowelForm::new(3, d as u8));
            }
        }
        map
    };
}

/// A cell of the vowel table: series 1–4, degree 0–9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VowelForm {
    pub series: u8,
    pub degree: u8,
}

impl VowelForm {
    pub const fn new(series: u8, degree: u8) -> Self {
        Self { series, degree }
    }

    pub fn is_valid(self) -> bool {
        (1..=4).contains(&self.series) && self.degree <= 9
    }

    /// Default spelling, ignoring context.
    pub fn plain(self) -> &'static str {
        if !self.is_valid() {
            return "";
        }
        TABLE[self.series as usize - 1][self.degree as usize]
    }

    /// Spelling after the given letter.
    pub fn render(self, preceding: Option<char>) -> &'static str {
        let base = self.plain();
        if !self.is_valid() || self.series != 3 {
            return base;
        }
        let alternate = SERIES_3_ALTERNATES[self.degree as usize];
        let swap = match preceding {
            Some('y') => base.starts_with('i'),
            Some('w') => base.starts_with('u'),
            _ => false,
        };
        if swap && !alternate.is_empty() {
            alternate
        } else {
            base
        }
    }

    /// Looks up a bare vowel form (no glottal stop).
    pub fn parse(text: &str) -> Option<Self> {
        REVERSE.get(text).copied()
    }
}

impl fmt::Display for VowelForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.plain())
    }
}

/// Inserts a glottal stop into a vowel form.
///
/// Word-finally a two-letter form is split and a single vowel is echoed
/// (`ia` → `i'a`, `a` → `a'a`). Medially the stop follows a single vowel or
/// diphthong and splits any other two-letter form.
pub fn insert_glottal_stop(vowels: &str, word_final: bool) -> String {
    let chars: Vec<char> = vowels.chars().collect();
    match chars.len() {
        0 => String::new(),
        1 if word_final => format!("{0}{1}{0}", chars[0], GLOTTAL_STOP),
        1 => format!("{}{}", chars[0], GLOTTAL_STOP),
        2 if !word_final && DIPHTHONGS.contains(&vowels) => format!("{}{}", vowels, GLOTTAL_STOP),
        _ => {
            let rest: String = chars[1..].iter().collect();
            format!("{}{}{}", chars[0], GLOTTAL_STOP, rest)
        }
    }
}

/// A vowel form read from a word, with whether it carried a glottal stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VowelUnit {
    pub form: VowelForm,
    pub glottal_stop: bool,
}

/// Reads a vowel group, undoing glottal-stop insertion.
pub fn parse_vowel_group(text: &str) -> Option<VowelUnit> {
    let glottal_stop = text.contains(GLOTTAL_STOP);
    if text.starts_with(GLOTTAL_STOP) {
        return None;
    }
    let bare: Vec<char> = text.chars().filter(|&c| c != GLOTTAL_STOP).collect();
    if !bare.iter().all(|&c| is_vowel(c)) {
        return None;
    }
    let collapsed: String = if glottal_stop && bare.len() == 2 && bare[0] == bare[1] {
        bare[..1].iter().collect()
    } else {
        bare.iter().collect()
    };
    VowelForm::parse(&collapsed).map(|form| VowelUnit { form, glottal_stop })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lookup() {
        assert_eq!(VowelForm::new(1, 1).plain(), "a");
        assert_eq!(VowelForm::new(4, 0).plain(), "üö");
        assert_eq!(VowelForm::parse("oë"), Some(VowelForm::new(4, 5)));
        assert_eq!(VowelForm::parse("xa"), None);
    }

    #[test]
    fn test_out_of_range_cell_renders_empty() {
        assert_eq!(VowelForm::new(3, 10).render(None), "");
        assert_eq!(VowelForm::new(3, 10).render(Some('w')), "");
        assert_eq!(VowelForm::new(0, 1).render(None), "");
    }

    #[test]
    fn test_series_three_alternates() {
        assert_eq!(VowelForm::new(3, 1).render(Some('y')), "uä");
        assert_eq!(VowelForm::new(3, 1).render(Some('w')), "ia");
        assert_eq!(VowelForm::new(3, 9).render(Some('w')), "iä");
        assert_eq!(VowelForm::new(3, 5).render(Some('y')), "eë");
        assert_eq!(VowelForm::parse("öä"), Some(VowelForm::new(3, 7)));
    }

    #[test]
    fn test_glottal_stop_insertion() {
        assert_eq!(insert_glottal_stop("a", true), "a'a");
        assert_eq!(insert_glottal_stop("ia", true), "i'a");
        assert_eq!(insert_glottal_stop("ai", true), "a'i");
        assert_eq!(insert_glottal_stop("a", false), "a'");
        assert_eq!(insert_glottal_stop("ai", false), "ai'");
        assert_eq!(insert_glottal_stop("ia", false), "i'a");
    }

    #[test]
    fn test_parse_undoes_glottal_stop() {
        for (text, series, degree) in [("a'a", 1, 1), ("i'a", 3, 1), ("ai'", 2, 1), ("a'i", 2, 1)] {
            let unit = parse_vowel_group(text).unwrap();
            assert_eq!(unit.form, VowelForm::new(series, degree), "{}", text);
            assert!(unit.glottal_stop);
        }
        assert!(parse_vowel_group("'a").is_none());
    }
}
