//! Personal referents and referential perspective

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::ca::Perspective;

category! {
    ReferentTarget {
        MonadicSpeaker => "1m",
        MonadicAddressee => "2m",
        PolyadicAddressee => "2p",
        MonadicAnimate => "ma",
        PolyadicAnimate => "pa",
        MonadicInanimate => "mi",
        PolyadicInanimate => "pi",
        Mixed => "Mx",
        Reduplicative => "Rdp",
        Obviative => "Obv",
        ProvisionalSet => "PVS",
    }
}

category! {
    ReferentEffect {
        Neutral => "NEU",
        Beneficial => "BEN",
        Detrimental => "DET",
    }
}

impl Default for ReferentEffect {
    fn default() -> Self {
        ReferentEffect::Neutral
    }
}

const REFERENT_FORMS: [[&str; 3]; 11] = [
    ["l", "r", "ř"],
    ["s", "š", "ž"],
    ["n", "t", "d"],
    ["m", "p", "b"],
    ["ň", "k", "g"],
    ["z", "ţ", "ḑ"],
    ["ż", "f", "v"],
    ["c", "č", "j"],
    ["th", "ph", "kh"],
    ["ll", "rr", "řř"],
    ["mm", "nn", "ňň"],
];

lazy_static! {
    static ref REFERENT_INDEX: HashMap<&'static str, Referent> = {
        let mut map = HashMap::new();
        for (t, row) in REFERENT_FORMS.iter().enumerate() {
            for (e, form) in row.iter().enumerate() {
                map.entry(*form).or_insert(Referent {
                    target: ReferentTarget::ALL[t],
                    effect: ReferentEffect::ALL[e],
                });
            }
        }
        map
    };
}

/// Suffix marking the perspective of a referent list.
pub fn perspective_suffix(perspective: Perspective) -> &'static str {
    ["", "ļ", "ç", "x"][perspective.index()]
}

/// A referent: target plus effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Referent {
    pub target: ReferentTarget,
    pub effect: ReferentEffect,
}

impl Referent {
    pub fn new(target: ReferentTarget, effect: ReferentEffect) -> Self {
        Self { target, effect }
    }

    pub fn form(self) -> &'static str {
        REFERENT_FORMS[self.target.index()][self.effect.index()]
    }

    pub fn parse(form: &str) -> Option<Self> {
        REFERENT_INDEX.get(form).copied()
    }
}

impl fmt::Display for Referent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.target, self.effect)
    }
}

/// Encodes a referent list with its perspective suffix.
pub fn encode_referents(referents: &[Referent], perspective: Perspective) -> String {
    let mut out: String = referents.iter().map(|r| r.form()).collect();
    out.push_str(perspective_suffix(perspective));
    out
}

/// Reads a referent list and optional perspective suffix.
///
/// Two-letter forms are matched before single letters, so `ll` is the
/// obviative rather than two first-person referents.
pub fn parse_referents(text: &str) -> Option<(Vec<Referent>, Perspective)> {
    let (body, perspective) = match text.chars().last() {
        Some('ļ') => (&text[..text.len() - 'ļ'.len_utf8()], Perspective::Agglomerative),
        Some('ç') => (&text[..text.len() - 'ç'.len_utf8()], Perspective::Nomic),
        Some('x') => (&text[..text.len() - 1], Perspective::Abstract),
        _ => (text, Perspective::Monadic),
    };
    let chars: Vec<char> = body.chars().collect();
    let mut referents = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let pair: String = chars[i..(i + 2).min(chars.len())].iter().collect();
        if pair.chars().count() == 2 {
            if let Some(r) = Referent::parse(&pair) {
                referents.push(r);
                i += 2;
                continue;
            }
        }
        referents.push(Referent::parse(&chars[i].to_string())?);
        i += 1;
    }
    if referents.is_empty() {
        return None;
    }
    Some((referents, perspective))
}
