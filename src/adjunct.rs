//! Adjuncts
//!
//! Eight small grammars, tried in a fixed order: parsing marker, register,
//! numeral, bias, suppletive, modular, single affix, multiple affix.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::affix::{decode_affix, encode_affix, validate_embedded, Affix};
use crate::analysis::{Analysis, Decomposition, Morpheme, WordClass};
use crate::category::adjunct::REGISTER_END;
use crate::category::{
    AffixualScope, Bias, Case, ModularScope, ModularTarget, MoodCaseScope, Register, Suppletive, Vn,
};
use crate::error::{CodecError, Result};
use crate::grammar::{
    alt, class, consonant_group, group, many1, opt, repeat, segment, seq, vowel_group, Grammar,
};
use crate::phonology::letters::GLOTTAL_STOP;
use crate::phonology::{is_consonant_cluster, mark_stress, normalize, Stress};
use crate::vowel::{insert_glottal_stop, parse_vowel_group, VowelForm};

const PARSING_MARKERS: [(&str, Stress); 4] = [
    ("a'", Stress::Ultimate),
    ("e'", Stress::Penultimate),
    ("o'", Stress::Antepenultimate),
    ("u'", Stress::PreAntepenultimate),
];

const MAX_MODULAR_SLOTS: usize = 3;

lazy_static! {
    static ref SUPPLETIVE: Grammar = Grammar::new(
        "suppletive adjunct",
        &seq(&[&group("c", &alt(&["hl", "hm", "hn", "hň"])), &group("v", &vowel_group())]),
    );
    static ref MODULAR: Grammar = Grammar::new("modular adjunct", &modular_pattern());
    static ref SINGLE_AFFIX: Grammar = Grammar::new(
        "single-affix adjunct",
        &seq(&[
            &group("vx", &vowel_group()),
            &group("cs", &consonant_group()),
            &opt(&group("vs", &vowel_group())),
        ]),
    );
    static ref MULTI_AFFIX: Grammar = Grammar::new("multiple-affix adjunct", &multi_affix_pattern());
}

fn cn_forms() -> Vec<&'static str> {
    MoodCaseScope::ALL
        .iter()
        .flat_map(|cn| [cn.form(false, false), cn.form(true, false)])
        .collect()
}

fn modular_pattern() -> String {
    let v = vowel_group();
    let pair = seq(&[&v, &alt(cn_forms().as_slice())]);
    seq(&[
        &opt(&group("cm", &class("wy"))),
        &group("body", &seq(&[&repeat(&pair, 0, MAX_MODULAR_SLOTS), &v])),
    ])
}

fn multi_affix_pattern() -> String {
    let v = vowel_group();
    seq(&[
        &group("cs", &consonant_group()),
        &group("vx", &v),
        &group("cz", &alt(AffixualScope::consonant_forms())),
        &group("rest", &many1(&seq(&[&v, &consonant_group()]))),
        &opt(&group("vz", &v)),
    ])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegisterAdjunct {
    Initial(Register),
    Final(Register),
    /// Closes whatever register is open.
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModularSlot {
    pub vn: Vn,
    pub cn: MoodCaseScope,
}

impl ModularSlot {
    pub fn new(vn: Vn) -> Self {
        Self { vn, cn: MoodCaseScope::default() }
    }

    pub fn with_cn(mut self, cn: MoodCaseScope) -> Self {
        self.cn = cn;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Adjunct {
    /// Stress the following word carries.
    Parsing(Stress),
    Register(RegisterAdjunct),
    Numeral(u64),
    Bias(Bias),
    Suppletive { kind: Suppletive, case: Case },
    /// With no scope, the last slot is an aspect whose default Cn is
    /// dropped, and the adjunct takes ultimate stress.
    Modular { target: ModularTarget, slots: Vec<ModularSlot>, scope: Option<ModularScope> },
    SingleAffix { affix: Affix, scope: AffixualScope, concatenated_only: bool },
    MultiAffix {
        first: Affix,
        first_scope: AffixualScope,
        rest: Vec<Affix>,
        scope: AffixualScope,
        concatenated_only: bool,
    },
}

impl Adjunct {
    pub fn class(&self) -> WordClass {
        match self {
            Adjunct::Parsing(_) => WordClass::ParsingAdjunct,
            Adjunct::Register(_) => WordClass::RegisterAdjunct,
            Adjunct::Numeral(_) => WordClass::NumericAdjunct,
            Adjunct::Bias(_) => WordClass::BiasAdjunct,
            Adjunct::Suppletive { .. } => WordClass::SuppletiveAdjunct,
            Adjunct::Modular { .. } => WordClass::ModularAdjunct,
            Adjunct::SingleAffix { .. } => WordClass::SingleAffixAdjunct,
            Adjunct::MultiAffix { .. } => WordClass::MultipleAffixAdjunct,
        }
    }
}

fn push_vowel(word: &mut String, form: VowelForm) {
    let preceding = word.chars().last();
    word.push_str(form.render(preceding));
}

fn affix_stress(concatenated_only: bool) -> Stress {
    if concatenated_only {
        Stress::Ultimate
    } else {
        Stress::Penultimate
    }
}

pub fn generate_adjunct(adjunct: &Adjunct) -> Result<String> {
    debug!(class = ?adjunct.class(), "composing adjunct");
    match adjunct {
        Adjunct::Parsing(stress) => Ok(PARSING_MARKERS
            .iter()
            .find(|(_, s)| s == stress)
            .map(|(form, _)| form.to_string())
            .unwrap_or_default()),
        Adjunct::Register(RegisterAdjunct::Initial(r)) => Ok(r.initial_form().to_string()),
        Adjunct::Register(RegisterAdjunct::Final(r)) => Ok(r.final_form().to_string()),
        Adjunct::Register(RegisterAdjunct::End) => Ok(REGISTER_END.to_string()),
        Adjunct::Numeral(n) => Ok(n.to_string()),
        Adjunct::Bias(bias) => Ok(bias.form().to_string()),
        Adjunct::Suppletive { kind, case } => {
            let vc = case.vowel_form().render(kind.form().chars().last());
            let vc = if case.is_extended() { insert_glottal_stop(vc, true) } else { vc.to_string() };
            Ok(format!("{}{}", kind.form(), vc))
        }
        Adjunct::Modular { target, slots, scope } => generate_modular(*target, slots, *scope),
        Adjunct::SingleAffix { affix, scope, concatenated_only } => {
            if affix.is_ambiguous_standalone() {
                return Err(CodecError::record(format!(
                    "affix {} would read as a referential affix when standalone",
                    affix
                )));
            }
            let mut word = encode_affix(affix, false, false, None)?;
            word.push_str(scope.vowel(true));
            mark_stress(&word, affix_stress(*concatenated_only))
        }
        Adjunct::MultiAffix { first, first_scope, rest, scope, concatenated_only } => {
            if rest.is_empty() {
                return Err(CodecError::record("a multiple-affix adjunct needs at least two affixes"));
            }
            validate_embedded(first)?;
            // The first Vx always carries a glottal stop.
            let mut word = encode_affix(first, true, true, None)?;
            word.push_str(first_scope.consonant());
            for affix in rest {
                validate_embedded(affix)?;
                let text = encode_affix(affix, false, false, word.chars().last())?;
                word.push_str(&text);
            }
            word.push_str(scope.vowel(true));
            mark_stress(&word, affix_stress(*concatenated_only))
        }
    }
}

fn generate_modular(target: ModularTarget, slots: &[ModularSlot], scope: Option<ModularScope>) -> Result<String> {
    if slots.is_empty() || slots.len() > MAX_MODULAR_SLOTS {
        return Err(CodecError::record(format!(
            "a modular adjunct takes 1 to {} slots, got {}",
            MAX_MODULAR_SLOTS,
            slots.len()
        )));
    }
    let mut word = target.form().to_string();
    let full = match scope {
        Some(_) => slots,
        None => &slots[..slots.len() - 1],
    };
    for slot in full {
        push_vowel(&mut word, slot.vn.vowel_form());
        word.push_str(slot.cn.form(slot.vn.is_aspect(), false));
    }
    match scope {
        Some(scope) => {
            word.push_str(scope.vowel());
            mark_stress(&word, Stress::Penultimate)
        }
        None => {
            let last = slots[slots.len() - 1];
            if !last.vn.is_aspect() || last.cn != MoodCaseScope::default() {
                return Err(CodecError::record(
                    "a modular adjunct without a scope must end in an aspect with the default Cn",
                ));
            }
            push_vowel(&mut word, last.vn.vowel_form());
            word.push_str(last.cn.form(true, true));
            mark_stress(&word, Stress::Ultimate)
        }
    }
}

/// Analyzes an adjunct of any kind.
pub fn analyze_adjunct(text: &str) -> Result<Option<Analysis<Adjunct>>> {
    let normalized = normalize(text);
    let word = normalized.text.as_str();
    let stress = normalized.stress;

    let found = analyze_fixed(word)
        .map(Ok)
        .or_else(|| analyze_suppletive(word).transpose())
        .or_else(|| analyze_modular(word, stress).transpose())
        .or_else(|| analyze_single_affix(word, stress).transpose())
        .or_else(|| analyze_multi_affix(word, stress).transpose())
        .transpose()?;

    Ok(found.map(|(adjunct, morphemes)| {
        let mut decomposition = Decomposition::new(adjunct.class(), stress);
        decomposition.morphemes = morphemes;
        trace!(word, class = ?decomposition.class, "adjunct match");
        Analysis { value: adjunct, decomposition }
    }))
}

type Found = (Adjunct, Vec<Morpheme>);

fn single(slot: &str, surface: &str, value: impl Into<String>) -> Vec<Morpheme> {
    vec![Morpheme::new(slot, surface, value)]
}

/// Parsing markers, registers, numerals and biases: whole-word lookups.
fn analyze_fixed(word: &str) -> Option<Found> {
    if let Some((form, stress)) = PARSING_MARKERS.iter().find(|(f, _)| *f == word) {
        return Some((Adjunct::Parsing(*stress), single("Parsing", form, format!("{:?}", stress))));
    }
    if word == REGISTER_END {
        return Some((Adjunct::Register(RegisterAdjunct::End), single("Register", word, "END")));
    }
    if let Some((register, is_final)) = Register::parse(word) {
        let adjunct = if is_final { RegisterAdjunct::Final(register) } else { RegisterAdjunct::Initial(register) };
        let value = format!("{}{}", register, if is_final { "_END" } else { "" });
        return Some((Adjunct::Register(adjunct), single("Register", word, value)));
    }
    if !word.is_empty() && word.chars().all(|c| c.is_ascii_digit()) {
        // Overlong digit strings are not numerals this codec can hold.
        return word
            .parse::<u64>()
            .ok()
            .map(|n| (Adjunct::Numeral(n), single("Numeral", word, n.to_string())));
    }
    if is_consonant_cluster(word) {
        return Bias::parse(word).map(|bias| (Adjunct::Bias(bias), single("Bias", word, bias.abbreviation())));
    }
    None
}

fn analyze_suppletive(word: &str) -> Result<Option<Found>> {
    let caps = match SUPPLETIVE.captures(word) {
        Some(caps) => caps,
        None => return Ok(None),
    };
    let c = &caps["c"];
    let v = &caps["v"];
    let kind = Suppletive::parse(c).ok_or_else(|| CodecError::consonant("Cs", c))?;
    let unit = parse_vowel_group(v).ok_or_else(|| CodecError::vowel("Vc", v))?;
    let case = Case::from_vowel_form(unit.form, unit.glottal_stop).ok_or_else(|| CodecError::vowel("Vc", v))?;
    let morphemes = vec![
        Morpheme::new("Cs", c, kind.abbreviation()),
        Morpheme::new("Vc", v, case.abbreviation()),
    ];
    Ok(Some((Adjunct::Suppletive { kind, case }, morphemes)))
}

fn analyze_modular(word: &str, stress: Stress) -> Result<Option<Found>> {
    let caps = match MODULAR.captures(word) {
        Some(caps) => caps,
        None => return Ok(None),
    };
    let mut morphemes = Vec::new();
    let cm = caps.name("cm").map(|m| m.as_str()).unwrap_or_default();
    let target = ModularTarget::parse(cm).ok_or_else(|| CodecError::consonant("Cm", cm))?;
    if !cm.is_empty() {
        morphemes.push(Morpheme::new("Cm", cm, target.abbreviation()));
    }

    let groups: Vec<String> = segment(&caps["body"]).into_iter().map(|g| g.text).collect();
    let last = groups.last().cloned().unwrap_or_default();
    let mut slots = Vec::new();
    for pair in groups[..groups.len() - 1].chunks(2) {
        let (vowel, consonant) = (&pair[0], &pair[1]);
        let form = bare_vowel("Vn", vowel)?;
        let (cn, aspect) =
            MoodCaseScope::parse(consonant).ok_or_else(|| CodecError::consonant("Cn", consonant.clone()))?;
        let vn = Vn::from_vowel_form(form, aspect).ok_or_else(|| CodecError::vowel("Vn", vowel.clone()))?;
        morphemes.push(Morpheme::new("Vn", vowel, vn.to_string()));
        morphemes.push(Morpheme::new("Cn", consonant, cn.abbreviation()));
        slots.push(ModularSlot { vn, cn });
    }

    let scope = match stress {
        Stress::Ultimate => {
            let form = bare_vowel("Vn", &last)?;
            let vn = Vn::from_vowel_form(form, true).ok_or_else(|| CodecError::vowel("Vn", last.clone()))?;
            morphemes.push(Morpheme::new("Vn", &last, vn.to_string()));
            slots.push(ModularSlot::new(vn));
            None
        }
        Stress::Penultimate => {
            if slots.is_empty() {
                return Err(CodecError::record(format!(
                    "modular adjunct '{}' has a scope but no Vn Cn pair",
                    word
                )));
            }
            let scope = ModularScope::parse(&last).ok_or_else(|| CodecError::vowel("Vh", last.clone()))?;
            morphemes.push(Morpheme::new("Vh", &last, scope.abbreviation()));
            Some(scope)
        }
        other => {
            return Err(CodecError::record(format!("{:?} stress is not used by modular adjuncts", other)))
        }
    };
    Ok(Some((Adjunct::Modular { target, slots, scope }, morphemes)))
}

fn bare_vowel(slot: &'static str, text: &str) -> Result<VowelForm> {
    let unit = parse_vowel_group(text).ok_or_else(|| CodecError::vowel(slot, text))?;
    if unit.glottal_stop {
        return Err(CodecError::UnexpectedGlottalStop(text.to_string()));
    }
    Ok(unit.form)
}

fn concatenated_only(stress: Stress) -> Result<bool> {
    match stress {
        Stress::Penultimate => Ok(false),
        Stress::Ultimate => Ok(true),
        other => Err(CodecError::record(format!("{:?} stress is not used by affixual adjuncts", other))),
    }
}

fn analyze_single_affix(word: &str, stress: Stress) -> Result<Option<Found>> {
    let caps = match SINGLE_AFFIX.captures(word) {
        Some(caps) => caps,
        None => return Ok(None),
    };
    let vx = &caps["vx"];
    let cs = &caps["cs"];
    let (affix, glottal_stop) = decode_affix(vx, cs, true)?;
    if glottal_stop {
        return Err(CodecError::UnexpectedGlottalStop(vx.to_string()));
    }
    let vs = caps.name("vs").map(|m| m.as_str()).unwrap_or_default();
    let scope = if vs.is_empty() {
        AffixualScope::default()
    } else {
        AffixualScope::parse_vowel(vs).ok_or_else(|| CodecError::vowel("Vs", vs))?
    };
    let concatenated_only = concatenated_only(stress)?;
    let morphemes = vec![
        affix_morpheme(vx, cs, &affix),
        Morpheme::new("Vs", vs, scope.abbreviation()),
    ];
    Ok(Some((Adjunct::SingleAffix { affix, scope, concatenated_only }, morphemes)))
}

fn analyze_multi_affix(word: &str, stress: Stress) -> Result<Option<Found>> {
    let caps = match MULTI_AFFIX.captures(word) {
        Some(caps) => caps,
        None => return Ok(None),
    };
    let cs = &caps["cs"];
    let vx = &caps["vx"];
    let cz = &caps["cz"];
    if !vx.contains(GLOTTAL_STOP) {
        // Without the glottal stop this shape belongs to formatives.
        return Ok(None);
    }
    let (first, _) = decode_affix(vx, cs, false)?;
    let first_scope = AffixualScope::parse_consonant(cz).ok_or_else(|| CodecError::consonant("Cz", cz))?;
    let mut morphemes = vec![
        affix_morpheme(vx, cs, &first),
        Morpheme::new("Cz", cz, first_scope.abbreviation()),
    ];

    let groups: Vec<String> = segment(&caps["rest"]).into_iter().map(|g| g.text).collect();
    let mut rest = Vec::new();
    for pair in groups.chunks(2) {
        let (vowel, consonant) = (&pair[0], &pair[1]);
        let (affix, glottal_stop) = decode_affix(vowel, consonant, false)?;
        if glottal_stop {
            return Err(CodecError::UnexpectedGlottalStop(vowel.clone()));
        }
        morphemes.push(affix_morpheme(vowel, consonant, &affix));
        rest.push(affix);
    }

    let vz = caps.name("vz").map(|m| m.as_str()).unwrap_or_default();
    let scope = if vz.is_empty() {
        AffixualScope::default()
    } else {
        AffixualScope::parse_vowel(vz).ok_or_else(|| CodecError::vowel("Vz", vz))?
    };
    morphemes.push(Morpheme::new("Vz", vz, scope.abbreviation()));
    let concatenated_only = concatenated_only(stress)?;
    Ok(Some((Adjunct::MultiAffix { first, first_scope, rest, scope, concatenated_only }, morphemes)))
}

fn affix_morpheme(vowel: &str, consonant: &str, affix: &Affix) -> Morpheme {
    Morpheme::affix("Affix", &format!("{}{}", vowel, consonant), affix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{Aspect, Valence};

    fn round_trip(adjunct: Adjunct) -> String {
        let word = generate_adjunct(&adjunct).unwrap();
        let parsed = analyze_adjunct(&word).unwrap().unwrap();
        assert_eq!(parsed.value, adjunct, "{}", word);
        word
    }

    #[test]
    fn test_fixed_forms() {
        assert_eq!(round_trip(Adjunct::Parsing(Stress::Antepenultimate)), "o'");
        assert_eq!(round_trip(Adjunct::Register(RegisterAdjunct::Final(Register::Parenthetical))), "hei");
        assert_eq!(round_trip(Adjunct::Register(RegisterAdjunct::End)), "hü");
        assert_eq!(round_trip(Adjunct::Numeral(1234)), "1234");
        assert_eq!(round_trip(Adjunct::Bias(Bias::Accidental)), "lf");
    }

    #[test]
    fn test_suppletive() {
        let word = round_trip(Adjunct::Suppletive { kind: Suppletive::Quotative, case: Case::Locative });
        assert_eq!(word, "hmi'a");
    }

    #[test]
    fn test_modular() {
        let scoped = Adjunct::Modular {
            target: ModularTarget::Whole,
            slots: vec![ModularSlot::new(Vn::Valence(Valence::Parallel))],
            scope: Some(ModularScope::Mood),
        };
        assert_eq!(round_trip(scoped), "ähe");

        let aspectual = Adjunct::Modular {
            target: ModularTarget::Parent,
            slots: vec![ModularSlot::new(Vn::Aspect(Aspect::Prospective))],
            scope: None,
        };
        assert_eq!(round_trip(aspectual), "wâ");

        let mixed = Adjunct::Modular {
            target: ModularTarget::Whole,
            slots: vec![
                ModularSlot::new(Vn::Valence(Valence::Parallel)).with_cn(MoodCaseScope::SubCca),
                ModularSlot::new(Vn::Aspect(Aspect::Prospective)),
            ],
            scope: None,
        };
        let word = round_trip(mixed);
        assert!(word.chars().last().is_some_and(crate::phonology::letters::is_vowel), "{}", word);
    }

    #[test]
    fn test_single_affix() {
        let adjunct = Adjunct::SingleAffix {
            affix: Affix::plain("rs", 2),
            scope: AffixualScope::default(),
            concatenated_only: false,
        };
        assert_eq!(round_trip(adjunct), "ärs");

        let ultimate = Adjunct::SingleAffix {
            affix: Affix::plain("rs", 2),
            scope: AffixualScope::Formative,
            concatenated_only: true,
        };
        assert_eq!(round_trip(ultimate), "ärsó");
    }

    #[test]
    fn test_multi_affix() {
        let adjunct = Adjunct::MultiAffix {
            first: Affix::plain("rs", 1),
            first_scope: AffixualScope::SlotVDominant,
            rest: vec![Affix::plain("ks", 2)],
            scope: AffixualScope::SlotVDominant,
            concatenated_only: false,
        };
        assert_eq!(round_trip(adjunct), "rsa'häks");
    }

    #[test]
    fn test_invalid_records() {
        let empty = Adjunct::Modular { target: ModularTarget::Whole, slots: vec![], scope: None };
        assert!(generate_adjunct(&empty).is_err());
        let not_aspect = Adjunct::Modular {
            target: ModularTarget::Whole,
            slots: vec![ModularSlot::new(Vn::Valence(Valence::Parallel))],
            scope: None,
        };
        assert!(generate_adjunct(&not_aspect).is_err());
    }

    #[test]
    fn test_no_match() {
        assert_eq!(analyze_adjunct("qqq123"), Ok(None));
        assert_eq!(analyze_adjunct("klala"), Ok(None));
        assert_eq!(analyze_adjunct("99999999999999999999999"), Ok(None));
    }
}
