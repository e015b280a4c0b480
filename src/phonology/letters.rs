//! Letter classes and vowel nuclei

/// Plain vowel letters.
pub const VOWELS: &str = "aäeëioöuü";

/// Consonant letters, including the approximants `w` and `y`.
pub const CONSONANTS: &str = "ptkbdgfţxvḑszšžżcčjmnňlrřļçhwy";

pub const GLOTTAL_STOP: char = '\'';

/// Two-letter vowel sequences that form a single nucleus.
pub const DIPHTHONGS: [&str; 12] = [
    "ai", "äi", "ei", "ëi", "oi", "öi", "ui", "au", "eu", "ëu", "ou", "iu",
];

const PLAIN: [char; 9] = ['a', 'ä', 'e', 'ë', 'i', 'o', 'ö', 'u', 'ü'];
const STRESSED: [char; 9] = ['á', 'â', 'é', 'ê', 'í', 'ó', 'ô', 'ú', 'û'];

const STOPS: &str = "ptkbdg";
const FRICATIVES: &str = "fţxvḑçh";
const SIBILANTS: &str = "sšzž";
const AFFRICATES: &str = "cčżj";
const NASALS: &str = "mnň";
const LIQUIDS: &str = "lrřļ";

pub fn is_vowel(c: char) -> bool {
    PLAIN.contains(&c) || STRESSED.contains(&c)
}

pub fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(c)
}

pub fn is_stop(c: char) -> bool {
    STOPS.contains(c)
}

pub fn is_fricative(c: char) -> bool {
    FRICATIVES.contains(c)
}

pub fn is_sibilant(c: char) -> bool {
    SIBILANTS.contains(c)
}

pub fn is_affricate(c: char) -> bool {
    AFFRICATES.contains(c)
}

pub fn is_nasal(c: char) -> bool {
    NASALS.contains(c)
}

pub fn is_liquid(c: char) -> bool {
    LIQUIDS.contains(c)
}

pub fn is_approximant(c: char) -> bool {
    c == 'w' || c == 'y'
}

/// True if every character is a consonant letter and the text is non-empty.
pub fn is_consonant_cluster(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_consonant)
}

/// True if the text contains two adjacent identical consonants.
pub fn has_geminate(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    chars.windows(2).any(|w| w[0] == w[1] && is_consonant(w[0]))
}

/// Stressed form of a plain vowel; other characters pass through.
pub fn stressed(c: char) -> char {
    PLAIN
        .iter()
        .position(|&p| p == c)
        .map(|i| STRESSED[i])
        .unwrap_or(c)
}

/// Plain form of a stressed vowel; other characters pass through.
pub fn unstressed(c: char) -> char {
    STRESSED
        .iter()
        .position(|&s| s == c)
        .map(|i| PLAIN[i])
        .unwrap_or(c)
}

pub fn is_stressed(c: char) -> bool {
    STRESSED.contains(&c)
}

fn is_diphthong(first: char, second: char) -> bool {
    let mut pair = String::with_capacity(4);
    pair.push(unstressed(first));
    pair.push(unstressed(second));
    DIPHTHONGS.contains(&pair.as_str())
}

/// A vowel nucleus: `len` characters starting at char index `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nucleus {
    pub start: usize,
    pub len: usize,
}

/// Splits a word into vowel nuclei, left to right.
///
/// Diphthongs count once; every other vowel letter is its own nucleus and a
/// glottal stop always separates nuclei.
pub fn nuclei(word: &str) -> Vec<Nucleus> {
    let chars: Vec<char> = word.chars().collect();
    let mut found = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if !is_vowel(chars[i]) {
            i += 1;
            continue;
        }
        // A stress mark on the second letter breaks a diphthong.
        let joins = i + 1 < chars.len()
            && is_vowel(chars[i + 1])
            && !is_stressed(chars[i + 1])
            && is_diphthong(chars[i], chars[i + 1]);
        let len = if joins { 2 } else { 1 };
        found.push(Nucleus { start: i, len });
        i += len;
    }
    found
}

pub fn count_nuclei(word: &str) -> usize {
    nuclei(word).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diphthongs_are_one_nucleus() {
        assert_eq!(count_nuclei("kail"), 1);
        assert_eq!(count_nuclei("kial"), 2);
        assert_eq!(count_nuclei("a'i"), 2);
        assert_eq!(count_nuclei("malëuţa"), 3);
    }

    #[test]
    fn test_stress_marks_fold_both_ways() {
        assert_eq!(stressed('ë'), 'ê');
        assert_eq!(unstressed('ô'), 'ö');
        assert_eq!(stressed('k'), 'k');
    }

    #[test]
    fn test_geminate_detection() {
        assert!(has_geminate("lkk"));
        assert!(!has_geminate("lk"));
        assert!(!has_geminate("aa"));
    }
}
