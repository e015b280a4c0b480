//! Lexical grammar builder
//!
//! Small combinators that assemble anchored regular expressions from letter
//! classes and literal alternations, plus a segmenter that splits a word into
//! alternating vowel and consonant groups. Word-class grammars are declared
//! once with these and compiled lazily into [`Grammar`] values.

use regex::{Captures, Regex};

use crate::phonology::letters::{is_consonant, is_vowel, CONSONANTS, GLOTTAL_STOP, VOWELS};

/// Character class over the given letters.
pub fn class(letters: &str) -> String {
    let mut out = String::from("[");
    for c in letters.chars() {
        if matches!(c, '\\' | ']' | '[' | '^' | '-') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push(']');
    out
}

/// Character class over the consonants minus `excluded`.
pub fn consonants_except(excluded: &str) -> String {
    let kept: String = CONSONANTS.chars().filter(|c| !excluded.contains(*c)).collect();
    class(&kept)
}

/// One vowel group, possibly containing glottal stops.
pub fn vowel_group() -> String {
    format!("{}[{}{}]*", class(VOWELS), VOWELS, GLOTTAL_STOP)
}

/// One consonant group.
pub fn consonant_group() -> String {
    format!("{}+", class(CONSONANTS))
}

/// Alternation of literal forms, longest first.
pub fn alt<S: AsRef<str>>(forms: &[S]) -> String {
    let mut sorted: Vec<&str> = forms
        .iter()
        .map(|f| f.as_ref())
        .filter(|f| !f.is_empty())
        .collect();
    sorted.sort_by_key(|f| std::cmp::Reverse(f.chars().count()));
    let escaped: Vec<String> = sorted.iter().map(|f| regex::escape(f)).collect();
    format!("(?:{})", escaped.join("|"))
}

pub fn group(name: &str, pattern: &str) -> String {
    format!("(?P<{}>{})", name, pattern)
}

pub fn opt(pattern: &str) -> String {
    format!("(?:{})?", pattern)
}

pub fn many(pattern: &str) -> String {
    format!("(?:{})*", pattern)
}

pub fn many1(pattern: &str) -> String {
    format!("(?:{})+", pattern)
}

pub fn repeat(pattern: &str, min: usize, max: usize) -> String {
    format!("(?:{}){{{},{}}}", pattern, min, max)
}

pub fn seq(parts: &[&str]) -> String {
    parts.concat()
}

/// A named whole-word pattern.
///
/// Patterns are built from fixed tables, so a compile failure is a bug in a
/// table; it is logged once and the grammar then matches nothing.
#[derive(Debug)]
pub struct Grammar {
    pub name: &'static str,
    regex: Option<Regex>,
}

impl Grammar {
    pub fn new(name: &'static str, pattern: &str) -> Self {
        let source = format!("^(?:{})$", pattern);
        let regex = match Regex::new(&source) {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::error!(grammar = name, %source, error = %e, "grammar failed to compile");
                None
            }
        };
        Self { name, regex }
    }

    pub fn captures<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        self.regex.as_ref().and_then(|re| re.captures(text))
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().map(|re| re.is_match(text)).unwrap_or(false)
    }

    pub fn is_compiled(&self) -> bool {
        self.regex.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Vowel,
    Consonant,
    Other,
}

/// A maximal run of one letter kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGroup {
    pub kind: GroupKind,
    pub text: String,
}

fn kind_of(c: char) -> GroupKind {
    if is_vowel(c) || c == GLOTTAL_STOP {
        GroupKind::Vowel
    } else if is_consonant(c) {
        GroupKind::Consonant
    } else {
        GroupKind::Other
    }
}

/// Splits text into alternating vowel and consonant groups.
///
/// Glottal stops belong to vowel groups.
pub fn segment(text: &str) -> Vec<LetterGroup> {
    let mut groups: Vec<LetterGroup> = Vec::new();
    for c in text.chars() {
        let kind = kind_of(c);
        match groups.last_mut() {
            Some(last) if last.kind == kind && kind != GroupKind::Other => last.text.push(c),
            _ => groups.push(LetterGroup { kind, text: c.to_string() }),
        }
    }
    groups
}
