//! Consonant-cluster legality
//!
//! Two checks: a general rule applied to any cluster, and per-length tables
//! of clusters allowed at the start of a word.

use lazy_static::lazy_static;

use super::letters::is_consonant_cluster;
use crate::grammar::Grammar;

/// Pairs that may never be adjacent (voicing conflicts and the like).
const FORBIDDEN_PAIRS: [&str; 20] = [
    "pb", "bp", "td", "dt", "kg", "gk", "fv", "vf", "ţḑ", "ḑţ",
    "sz", "zs", "šž", "žš", "cż", "żc", "čj", "jč", "wy", "yw",
];

lazy_static! {
    static ref INITIAL_PATTERNS: Vec<Grammar> = build_initial_patterns();
}

fn build_initial_patterns() -> Vec<Grammar> {
    // Index 0 holds single consonants, 1 holds pairs and so on.
    vec![
        Grammar::new("initial consonant", "[ptkbdgfţxvḑszšžżcčjmnňlrřçhwy]"),
        Grammar::new(
            "initial pair",
            concat!(
                "[ptkbdg][lrřwy]",
                "|[fţxvḑ][lrřwy]",
                "|[sšzž][ptkbdgfţxvḑmnňlrřwycč]",
                "|[cčżj][lrřwy]",
                "|[ptk][sšfţç]|[bdg][zžvḑ]",
                "|[ptkbdg][mnň]",
                "|[mnň][lrřwy]",
                "|[lrř][wy]",
                "|h[lrřwmnň]"
            ),
        ),
        Grammar::new(
            "initial triple",
            "[sšzž][ptkbdg][lrřwy]|[sšzž][mnň][wy]|[ptk][sš][wy]",
        ),
        Grammar::new("initial quadruple", "[sšzž][ptkbdg][lrř][wy]"),
    ]
}

/// General legality of a consonant cluster anywhere in a word.
pub fn is_legal_cluster(cluster: &str) -> bool {
    if !is_consonant_cluster(cluster) {
        return false;
    }
    let chars: Vec<char> = cluster.chars().collect();
    if chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2]) {
        return false;
    }
    !chars.windows(2).any(|w| {
        let pair: String = w.iter().collect();
        FORBIDDEN_PAIRS.contains(&pair.as_str())
    })
}

/// Legality of a cluster at the start of a word.
pub fn is_legal_word_initial(cluster: &str) -> bool {
    if !is_legal_cluster(cluster) {
        return false;
    }
    let len = cluster.chars().count();
    INITIAL_PATTERNS
        .get(len - 1)
        .map(|grammar| grammar.is_match(cluster))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_rule() {
        assert!(is_legal_cluster("rskl"));
        assert!(!is_legal_cluster("ttt"));
        assert!(!is_legal_cluster("pb"));
        assert!(!is_legal_cluster("ka"));
        assert!(!is_legal_cluster(""));
    }

    #[test]
    fn test_initial_tables_compile_in_length_order() {
        assert_eq!(INITIAL_PATTERNS.len(), 4);
        assert!(INITIAL_PATTERNS.iter().all(|grammar| grammar.is_compiled()));
        assert!(INITIAL_PATTERNS[2].is_match("str"));
    }

    #[test]
    fn test_word_initial_tables() {
        for ok in ["k", "pl", "st", "kš", "hl", "str", "skw", "sprw"] {
            assert!(is_legal_word_initial(ok), "{} should be legal", ok);
        }
        for bad in ["ļ", "lk", "rt", "tk", "mpl", "pšk", "strwy"] {
            assert!(!is_legal_word_initial(bad), "{} should be illegal", bad);
        }
    }
}
