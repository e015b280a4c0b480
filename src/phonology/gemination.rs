//! Ca gemination
//!
//! A geminated Ca marks the presence of Slot V affixes. Every result
//! contains an adjacent doubled consonant, and distinct Ca forms geminate
//! to distinct results.

use super::letters::{is_consonant_cluster, is_liquid};
use super::phonotactics::is_legal_cluster;
use crate::error::{CodecError, Result};

/// Replacements keyed on the first two consonants of the cluster.
const OVERRIDES: [(&str, &str); 12] = [
    ("pt", "bbḑ"),
    ("pk", "bbg"),
    ("kt", "ggḑ"),
    ("kp", "ggb"),
    ("tk", "ḑvv"),
    ("tp", "ḑḑv"),
    ("pm", "vvm"),
    ("pn", "vvn"),
    ("km", "xxm"),
    ("kn", "xxn"),
    ("tm", "ḑḑm"),
    ("tn", "ḑḑn"),
];

fn double_first(chars: &[char]) -> String {
    let mut out = String::new();
    out.push(chars[0]);
    out.extend(chars.iter());
    out
}

/// Geminates a Ca consonant form.
pub fn geminate_ca(ca: &str) -> Result<String> {
    if !is_consonant_cluster(ca) {
        return Err(CodecError::Ungeminatable(ca.to_string()));
    }
    for (prefix, replacement) in OVERRIDES.iter() {
        if let Some(rest) = ca.strip_prefix(prefix) {
            return Ok(format!("{}{}", replacement, rest));
        }
    }

    let chars: Vec<char> = ca.chars().collect();
    if chars.len() == 1 {
        return Ok(double_first(&chars));
    }

    let first = chars[0];
    if first != 'ļ' && is_liquid(first) {
        let rest: String = chars[1..].iter().collect();
        let candidate = format!("{}{}", first, geminate_ca(&rest)?);
        if is_legal_cluster(&candidate) {
            return Ok(candidate);
        }
        return Ok(double_first(&chars));
    }

    // stop + liquid and everything else: double the first consonant
    Ok(double_first(&chars))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonology::letters::has_geminate;

    #[test]
    fn test_single_consonant_doubles() {
        assert_eq!(geminate_ca("k").unwrap(), "kk");
        assert_eq!(geminate_ca("l").unwrap(), "ll");
    }

    #[test]
    fn test_overrides() {
        assert_eq!(geminate_ca("pt").unwrap(), "bbḑ");
        assert_eq!(geminate_ca("tpr").unwrap(), "ḑḑvr");
        assert_eq!(geminate_ca("kn").unwrap(), "xxn");
    }

    #[test]
    fn test_liquid_initial_recurses() {
        assert_eq!(geminate_ca("lt").unwrap(), "ltt");
        assert_eq!(geminate_ca("rpt").unwrap(), "rbbḑ");
        assert_eq!(geminate_ca("rļ").unwrap(), "rļļ");
    }

    #[test]
    fn test_results_contain_a_geminate() {
        for ca in ["sk", "řtļ", "nļ", "ks", "ţs", "mp", "ň", "hm"] {
            assert!(has_geminate(&geminate_ca(ca).unwrap()), "{}", ca);
        }
    }

    #[test]
    fn test_rejects_non_clusters() {
        assert!(geminate_ca("").is_err());
        assert!(geminate_ca("ka").is_err());
    }
}
