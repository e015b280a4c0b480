//! Affix codec
//!
//! An affix is a vowel (Vx) and a consonant form (Cs). Besides ordinary
//! affixes there are four special kinds, each told apart by its vowel or
//! consonant: Ca stacking (`üö` + Ca), case stacking (`lw`/`ly`), case
//! accessors (`sw`, `šw`, ...), and referential affixes (series-4 vowels, or
//! series 3 in a standalone affixual adjunct).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ca::{decode_ca, encode_ca, CaBundle};
use crate::category::referent::{encode_referents, parse_referents};
use crate::category::{Case, Perspective, Referent};
use crate::error::{CodecError, Result};
use crate::phonology::{has_geminate, is_legal_cluster};
use crate::vowel::{insert_glottal_stop, parse_vowel_group, VowelForm};

/// Consonant forms no ordinary affix may use.
pub const RESERVED_AFFIX_FORMS: [&str; 2] = ["ļ", "ç"];

const CA_STACKING_VOWEL: VowelForm = VowelForm::new(4, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AffixType {
    One,
    Two,
    Three,
}

impl Default for AffixType {
    fn default() -> Self {
        AffixType::One
    }
}

impl AffixType {
    pub fn series(self) -> u8 {
        match self {
            AffixType::One => 1,
            AffixType::Two => 2,
            AffixType::Three => 3,
        }
    }

    pub fn from_series(series: u8) -> Option<Self> {
        match series {
            1 => Some(AffixType::One),
            2 => Some(AffixType::Two),
            3 => Some(AffixType::Three),
            _ => None,
        }
    }

    fn subscript(self) -> &'static str {
        match self {
            AffixType::One => "₁",
            AffixType::Two => "₂",
            AffixType::Three => "₃",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Affix {
    /// Ordinary affix: consonant form, degree 0–9 and type.
    Plain { cs: String, degree: u8, kind: AffixType },
    /// A second Ca complex.
    Ca(CaBundle),
    CaseStacking(Case),
    CaseAccessor { case: Case, kind: AffixType, inverse: bool },
    Referential { referents: Vec<Referent>, perspective: Perspective, case: Case },
}

impl Affix {
    /// Type-1 ordinary affix.
    pub fn plain(cs: &str, degree: u8) -> Self {
        Affix::Plain { cs: cs.to_string(), degree, kind: AffixType::One }
    }

    pub fn typed(cs: &str, degree: u8, kind: AffixType) -> Self {
        Affix::Plain { cs: cs.to_string(), degree, kind }
    }

    /// True if this affix would be read differently as the only affix of a
    /// standalone adjunct (type-3 affixes whose form spells referents).
    pub fn is_ambiguous_standalone(&self) -> bool {
        match self {
            Affix::Plain { cs, degree, kind: AffixType::Three } => {
                *degree > 0 && parse_referents(cs).is_some()
            }
            _ => false,
        }
    }
}

impl fmt::Display for Affix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Affix::Plain { cs, degree, kind } => {
                let subscript = if *kind == AffixType::One { "" } else { kind.subscript() };
                write!(f, "{}/{}{}", cs, degree, subscript)
            }
            Affix::Ca(ca) => write!(f, "({})", ca),
            Affix::CaseStacking(case) => write!(f, "({})", case),
            Affix::CaseAccessor { case, kind, inverse } => {
                let tag = if *inverse { "ia" } else { "acc" };
                write!(f, "({}-{}{})", case, tag, kind.subscript())
            }
            Affix::Referential { referents, perspective, case } => {
                let names: Vec<String> = referents.iter().map(|r| r.to_string()).collect();
                write!(f, "({}", names.join("+"))?;
                if *perspective != Perspective::default() {
                    write!(f, ".{}", perspective)?;
                }
                write!(f, "-{})", case)
            }
        }
    }
}

/// Whether a consonant form may carry an ordinary affix.
pub fn is_legal_affix_form(cs: &str) -> bool {
    is_legal_cluster(cs)
        && !RESERVED_AFFIX_FORMS.contains(&cs)
        && !cs.starts_with(|c: char| matches!(c, 'h' | 'w' | 'y'))
        && !has_geminate(cs)
        && !is_case_affix_form(cs)
}

fn is_case_affix_form(cs: &str) -> bool {
    let chars: Vec<char> = cs.chars().collect();
    chars.len() == 2 && "szčšžjl".contains(chars[0]) && matches!(chars[1], 'w' | 'y')
}

const ACCESSOR_CONSONANTS: [[char; 3]; 2] = [['s', 'z', 'č'], ['š', 'ž', 'j']];

fn case_glide(case: Case) -> char {
    if case.is_extended() {
        'y'
    } else {
        'w'
    }
}

/// Vowel form and consonant form of an affix.
pub fn affix_parts(affix: &Affix) -> Result<(VowelForm, String)> {
    match affix {
        Affix::Plain { cs, degree, kind } => {
            if *degree > 9 || !is_legal_affix_form(cs) {
                return Err(CodecError::InvalidAffixForm(cs.clone()));
            }
            Ok((VowelForm::new(kind.series(), *degree), cs.clone()))
        }
        Affix::Ca(ca) => Ok((CA_STACKING_VOWEL, encode_ca(ca))),
        Affix::CaseStacking(case) => {
            Ok((case.vowel_form(), format!("l{}", case_glide(*case))))
        }
        Affix::CaseAccessor { case, kind, inverse } => {
            let row = usize::from(*inverse);
            let first = ACCESSOR_CONSONANTS[row][kind.series() as usize - 1];
            Ok((case.vowel_form(), format!("{}{}", first, case_glide(*case))))
        }
        Affix::Referential { referents, perspective, case } => {
            if referents.is_empty() {
                return Err(CodecError::record("referential affix needs at least one referent"));
            }
            let i = case.index() as u8;
            let vowel = match i {
                0..=8 => VowelForm::new(4, i + 1),
                9..=17 => VowelForm::new(3, i - 8),
                _ => {
                    return Err(CodecError::record(format!(
                        "case {} cannot be shown on a referential affix",
                        case
                    )))
                }
            };
            let cs = encode_referents(referents, *perspective);
            match parse_referents(&cs) {
                Some((ref parsed, p)) if parsed == referents && p == *perspective => Ok((vowel, cs)),
                _ => Err(CodecError::InvalidReferents(cs)),
            }
        }
    }
}

/// Checks an affix placed inside a formative or a multiple-affix adjunct,
/// where series-3 vowels always read as ordinary affixes.
pub fn validate_embedded(affix: &Affix) -> Result<()> {
    if let Affix::Referential { case, .. } = affix {
        if case.index() >= 9 {
            return Err(CodecError::record(format!(
                "case {} on a referential affix needs a standalone adjunct",
                case
            )));
        }
    }
    affix_parts(affix).map(|_| ())
}

/// Writes an affix.
///
/// `reversed` puts the consonant first (Slot V of the general grammar);
/// `preceding` is the last letter already written, which selects vowel
/// alternates when the vowel comes first.
pub fn encode_affix(
    affix: &Affix,
    reversed: bool,
    insert_glottal: bool,
    preceding: Option<char>,
) -> Result<String> {
    let (vowel, cs) = affix_parts(affix)?;
    let before_vowel = if reversed { cs.chars().last() } else { preceding };
    let mut vx = vowel.render(before_vowel).to_string();
    if insert_glottal {
        vx = insert_glottal_stop(&vx, false);
    }
    Ok(if reversed { format!("{}{}", cs, vx) } else { format!("{}{}", vx, cs) })
}

/// Reads an affix from its vowel group and consonant form.
///
/// Returns the affix and whether the vowel carried a glottal stop.
/// `standalone` is set for the lone affix of a single-affix adjunct, where
/// series-3 vowels mark referential affixes.
pub fn decode_affix(vowel: &str, cs: &str, standalone: bool) -> Result<(Affix, bool)> {
    let unit = parse_vowel_group(vowel).ok_or_else(|| CodecError::vowel("Vx", vowel))?;
    let form = unit.form;

    if form == CA_STACKING_VOWEL {
        return Ok((Affix::Ca(decode_ca(cs)?), unit.glottal_stop));
    }

    if is_case_affix_form(cs) {
        let chars: Vec<char> = cs.chars().collect();
        let case = Case::from_vowel_form(form, chars[1] == 'y')
            .ok_or_else(|| CodecError::vowel("Vx", vowel))?;
        if chars[0] == 'l' {
            return Ok((Affix::CaseStacking(case), unit.glottal_stop));
        }
        let (row, column) = ACCESSOR_CONSONANTS
            .iter()
            .enumerate()
            .find_map(|(r, row)| row.iter().position(|&c| c == chars[0]).map(|c| (r, c)))
            .ok_or_else(|| CodecError::InvalidAffixForm(cs.to_string()))?;
        let kind = AffixType::from_series(column as u8 + 1)
            .ok_or_else(|| CodecError::InvalidAffixForm(cs.to_string()))?;
        let affix = Affix::CaseAccessor { case, kind, inverse: row == 1 };
        return Ok((affix, unit.glottal_stop));
    }

    let referential_case = match (form.series, form.degree) {
        (4, d) => Case::from_index(d as usize - 1),
        (3, d) if standalone && d > 0 && parse_referents(cs).is_some() => {
            Case::from_index(d as usize + 8)
        }
        _ => None,
    };
    if let Some(case) = referential_case {
        let (referents, perspective) =
            parse_referents(cs).ok_or_else(|| CodecError::InvalidReferents(cs.to_string()))?;
        return Ok((Affix::Referential { referents, perspective, case }, unit.glottal_stop));
    }

    let kind = AffixType::from_series(form.series).ok_or_else(|| CodecError::vowel("Vx", vowel))?;
    if !is_legal_affix_form(cs) {
        return Err(CodecError::InvalidAffixForm(cs.to_string()));
    }
    let affix = Affix::Plain { cs: cs.to_string(), degree: form.degree, kind };
    Ok((affix, unit.glottal_stop))
}
