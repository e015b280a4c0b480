//! Referentials
//!
//! `[ë] C1 Vc1 [w Vc2 C2]`: a referent list (or, in a two-part referential,
//! a suppletive tag) with its case, optionally followed by a second referent
//! list and case. Representative essence is shown by ultimate stress.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::{Analysis, Decomposition, WordClass};
use crate::category::referent::{encode_referents, parse_referents};
use crate::category::{Case, Essence, Perspective, Referent, Suppletive};
use crate::error::{CodecError, Result};
use crate::grammar::{alt, group, opt, seq, vowel_group, Grammar};
use crate::phonology::{is_legal_word_initial, mark_stress, normalize, Stress};
use crate::vowel::{insert_glottal_stop, parse_vowel_group};

lazy_static! {
    static ref REFERENTIAL: Grammar = Grammar::new("referential", &referential_pattern());
}

/// One or more referent forms with an optional perspective suffix.
fn referents_pattern() -> String {
    let doubled = alt(&["th", "ph", "kh", "ll", "rr", "řř", "mm", "nn", "ňň"]);
    format!("(?:{}|[lrřsšžntdmpbňkgzţḑżfvcčj])+[ļçx]?", doubled)
}

fn referential_pattern() -> String {
    let v = vowel_group();
    let refs = referents_pattern();
    let plain = seq(&[
        &opt("(?P<e>ë)"),
        &group("c1", &refs),
        &group("v1", &v),
        &opt(&seq(&["w", &group("v2", &v), &group("c2", &refs)])),
    ]);
    let suppletive = seq(&[
        &group("sup", &alt(&["hl", "hm", "hn", "hň"])),
        &group("sv1", &v),
        "w",
        &group("sv2", &v),
        &group("sc2", &refs),
    ]);
    format!("{}|{}", plain, suppletive)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferentialHead {
    Referents { referents: Vec<Referent>, perspective: Perspective },
    /// Only in two-part referentials; a lone suppletive form is an adjunct.
    Suppletive(Suppletive),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondReferent {
    pub referents: Vec<Referent>,
    pub perspective: Perspective,
    pub case: Case,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Referential {
    pub head: ReferentialHead,
    pub case: Case,
    pub second: Option<SecondReferent>,
    pub essence: Essence,
}

impl Referential {
    pub fn new(referents: Vec<Referent>, perspective: Perspective) -> Self {
        Self {
            head: ReferentialHead::Referents { referents, perspective },
            case: Case::default(),
            second: None,
            essence: Essence::default(),
        }
    }

    pub fn suppletive(kind: Suppletive) -> Self {
        Self {
            head: ReferentialHead::Suppletive(kind),
            case: Case::default(),
            second: None,
            essence: Essence::default(),
        }
    }

    pub fn with_case(mut self, case: Case) -> Self {
        self.case = case;
        self
    }

    pub fn with_second(mut self, referents: Vec<Referent>, perspective: Perspective, case: Case) -> Self {
        self.second = Some(SecondReferent { referents, perspective, case });
        self
    }

    pub fn with_essence(mut self, essence: Essence) -> Self {
        self.essence = essence;
        self
    }

    fn stress(&self) -> Stress {
        match self.essence {
            Essence::Normal => Stress::Penultimate,
            Essence::Representative => Stress::Ultimate,
        }
    }
}

/// Encodes a referent list, checking that it reads back unchanged.
fn referent_form(referents: &[Referent], perspective: Perspective) -> Result<String> {
    let form = encode_referents(referents, perspective);
    match parse_referents(&form) {
        Some((ref parsed, p)) if parsed == referents && p == perspective => Ok(form),
        _ => Err(CodecError::InvalidReferents(form)),
    }
}

fn case_vowel(case: Case, preceding: Option<char>, word_final: bool) -> String {
    let rendered = case.vowel_form().render(preceding);
    if case.is_extended() {
        insert_glottal_stop(rendered, word_final)
    } else {
        rendered.to_string()
    }
}

pub fn generate_referential(r: &Referential) -> Result<String> {
    let mut word = String::new();
    match &r.head {
        ReferentialHead::Referents { referents, perspective } => {
            let c1 = referent_form(referents, *perspective)?;
            if !is_legal_word_initial(&c1) {
                word.push('ë');
            }
            word.push_str(&c1);
        }
        ReferentialHead::Suppletive(kind) => {
            if r.second.is_none() {
                return Err(CodecError::record(
                    "a suppletive referential needs a second referent; use a suppletive adjunct",
                ));
            }
            word.push_str(kind.form());
        }
    }

    let last = word.chars().last();
    word.push_str(&case_vowel(r.case, last, r.second.is_none()));

    if let Some(second) = &r.second {
        word.push('w');
        word.push_str(&case_vowel(second.case, Some('w'), false));
        word.push_str(&referent_form(&second.referents, second.perspective)?);
    }

    debug!(%word, essence = %r.essence, "composed referential");
    mark_stress(&word, r.stress())
}

fn read_case(slot: &'static str, text: &str) -> Result<Case> {
    let unit = parse_vowel_group(text).ok_or_else(|| CodecError::vowel(slot, text))?;
    Case::from_vowel_form(unit.form, unit.glottal_stop).ok_or_else(|| CodecError::vowel(slot, text))
}

fn read_referents(text: &str) -> Result<(Vec<Referent>, Perspective)> {
    parse_referents(text).ok_or_else(|| CodecError::InvalidReferents(text.to_string()))
}

fn list_value(referents: &[Referent], perspective: Perspective) -> String {
    let names: Vec<String> = referents.iter().map(|r| r.to_string()).collect();
    let mut value = names.join("+");
    if perspective != Perspective::default() {
        value.push('.');
        value.push_str(perspective.abbreviation());
    }
    value
}

pub fn analyze_referential(text: &str) -> Result<Option<Analysis<Referential>>> {
    let normalized = normalize(text);
    let word = normalized.text.as_str();
    let caps = match REFERENTIAL.captures(word) {
        Some(caps) => caps,
        None => return Ok(None),
    };
    let get = |name: &str| caps.name(name).map(|m| m.as_str());

    let essence = match normalized.stress {
        Stress::Penultimate => Essence::Normal,
        Stress::Ultimate => Essence::Representative,
        other => {
            return Err(CodecError::record(format!("{:?} stress is not used by referentials", other)))
        }
    };
    let mut decomposition = Decomposition::new(WordClass::Referential, normalized.stress);

    let (head, v1, second_parts) = if let Some(sup) = get("sup") {
        let kind = Suppletive::parse(sup).ok_or_else(|| CodecError::consonant("C1", sup))?;
        decomposition.push("C1", sup, kind.abbreviation());
        (ReferentialHead::Suppletive(kind), get("sv1"), get("sv2").zip(get("sc2")))
    } else {
        if let Some(e) = get("e") {
            decomposition.push("ë", e, "");
        }
        let c1 = get("c1").unwrap_or_default();
        let (referents, perspective) = read_referents(c1)?;
        decomposition.push("C1", c1, list_value(&referents, perspective));
        (ReferentialHead::Referents { referents, perspective }, get("v1"), get("v2").zip(get("c2")))
    };

    let v1 = v1.unwrap_or_default();
    let case = read_case("Vc", v1)?;
    decomposition.push("Vc", v1, case.abbreviation());

    let second = match second_parts {
        Some((v2, c2)) => {
            let case = read_case("Vc2", v2)?;
            let (referents, perspective) = read_referents(c2)?;
            decomposition.push("w", "w", "");
            decomposition.push("Vc2", v2, case.abbreviation());
            decomposition.push("C2", c2, list_value(&referents, perspective));
            Some(SecondReferent { referents, perspective, case })
        }
        None => None,
    };
    decomposition.push("Stress", "", essence.abbreviation());

    let value = Referential { head, case, second, essence };
    Ok(Some(Analysis { value, decomposition }))
}
