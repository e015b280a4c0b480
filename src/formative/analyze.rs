//! Formative analysis
//!
//! One of three grammars is chosen from the leading letters, then the
//! matched groups are decoded slot by slot. A word that fits none of the
//! grammars is not a formative (`Ok(None)`); a word that fits but holds an
//! invalid slot value is an error.

use lazy_static::lazy_static;
use regex::Captures;
use tracing::debug;

use super::{
    is_legal_root, Formative, FormativeKind, Root, SlotIx, CN_SHORTCUT_LETTERS, VII_SHORTCUTS,
};
use crate::affix::{decode_affix, is_legal_affix_form, Affix};
use crate::analysis::{Analysis, Decomposition, Morpheme, WordClass};
use crate::ca::{decode_ca, decode_geminated_ca, shortcut_bundle};
use crate::category::case::parse_vk;
use crate::category::referent::parse_referents;
use crate::category::slots::{parse_cc, stem_version_from_degree, vr_from_degree};
use crate::category::{Case, Context, MoodCaseScope, Specification, Stem, Version, Vn};
use crate::error::{CodecError, Result};
use crate::grammar::{
    alt, class, consonant_group, consonants_except, group, many, many1, opt, segment, seq,
    vowel_group, Grammar,
};
use crate::phonology::letters::CONSONANTS;
use crate::phonology::{has_geminate, normalize, Stress};
use crate::vowel::{parse_vowel_group, VowelForm, VowelUnit};

lazy_static! {
    static ref GENERAL: Grammar = Grammar::new("formative", &general_pattern());
    static ref CA_SHORTCUT: Grammar = Grammar::new("ca-shortcut formative", &ca_shortcut_pattern());
    static ref CN_SHORTCUT: Grammar = Grammar::new("cn-shortcut formative", &cn_shortcut_pattern());
}

fn root_pattern() -> String {
    format!("{}{}*", consonants_except("hwyç"), class(CONSONANTS))
}

fn general_pattern() -> String {
    let v = vowel_group();
    let head = format!(
        "{}{}|{}",
        group("cc", &alt(&["hw", "h"])),
        group("vv", &v),
        group("vve", &v)
    );
    seq(&[
        &opt(&head),
        &group("cr", &root_pattern()),
        &group("vr", &v),
        &group("rest", &many1(&seq(&[&consonant_group(), &v]))),
    ])
}

fn ca_shortcut_pattern() -> String {
    let v = vowel_group();
    seq(&[
        &group("cc", &alt(&["hl", "hm", "hr", "hn", "w", "y"])),
        &group("vv", &v),
        &group("cr", &root_pattern()),
        &group("rest", &seq(&[&v, &many(&seq(&[&consonant_group(), &v]))])),
    ])
}

fn cn_shortcut_pattern() -> String {
    let v = vowel_group();
    seq(&[
        "ç",
        &opt(&group("cn", &class("lrmnň"))),
        &opt(&group("vii", &class("wyř"))),
        &group("vv", &v),
        &group("cr", &root_pattern()),
        &group("vr", &v),
        &group("rest", &many1(&seq(&[&consonant_group(), &v]))),
    ])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    General,
    CaShortcut,
    CnShortcut,
}

/// Picks the single grammar a word can belong to.
fn select(word: &str) -> Shape {
    if word.starts_with('ç') {
        Shape::CnShortcut
    } else if word.starts_with(|c: char| matches!(c, 'w' | 'y'))
        || ["hl", "hm", "hr", "hn"].iter().any(|p| word.starts_with(p))
    {
        Shape::CaShortcut
    } else {
        Shape::General
    }
}

fn text<'t>(caps: &Captures<'t>, name: &str) -> Option<&'t str> {
    caps.name(name).map(|m| m.as_str())
}

fn vowel_unit(slot: &'static str, text: &str) -> Result<VowelUnit> {
    parse_vowel_group(text).ok_or_else(|| CodecError::vowel(slot, text))
}

fn bare_vowel(slot: &'static str, text: &str) -> Result<VowelForm> {
    let unit = vowel_unit(slot, text)?;
    if unit.glottal_stop {
        return Err(CodecError::UnexpectedGlottalStop(text.to_string()));
    }
    Ok(unit.form)
}

/// What the Vv degree says about the root.
#[derive(Debug, Clone, Copy)]
enum RootKind {
    Plain(Stem, Version),
    Referential(Stem),
    Affixual(Specification),
}

fn root_kind(form: VowelForm, text: &str) -> Result<RootKind> {
    let kind = match form.degree {
        0 => Stem::from_series(form.series).map(RootKind::Referential),
        5 => Specification::from_series(form.series).map(RootKind::Affixual),
        d if form.series == 1 => stem_version_from_degree(d).map(|(s, v)| RootKind::Plain(s, v)),
        _ => None,
    };
    kind.ok_or_else(|| CodecError::vowel("Vv", text))
}

/// A vowel followed by a consonant form.
#[derive(Debug, Clone)]
struct Pair {
    vowel: String,
    consonant: String,
}

fn is_slot_viii(pair: &Pair) -> bool {
    MoodCaseScope::is_cn_form(&pair.consonant)
        && parse_vowel_group(&pair.vowel).map(|u| u.form.degree != 0).unwrap_or(false)
}

/// Accumulates the record and its decomposition.
struct Reader {
    formative: Formative,
    decomposition: Decomposition,
}

impl Reader {
    fn new(stress: Stress) -> Self {
        Self {
            formative: Formative::new(Root::Plain(String::new())),
            decomposition: Decomposition::new(WordClass::Formative, stress),
        }
    }

    fn stress(&self) -> Stress {
        self.decomposition.stress
    }

    fn read_cc(&mut self, cc: &str) -> Result<Option<crate::category::CaShortcut>> {
        let (concatenation, shortcut) =
            parse_cc(cc).ok_or_else(|| CodecError::consonant("Cc", cc))?;
        self.formative.concatenation = concatenation;
        let mut value = concatenation.map(|c| c.to_string()).unwrap_or_default();
        if let Some(shortcut) = shortcut {
            if !value.is_empty() {
                value.push('+');
            }
            value.push_str(shortcut.abbreviation());
        }
        self.decomposition.push("Cc", cc, value);
        Ok(shortcut)
    }

    /// Reads Vv (absent when elided) and returns the root kind.
    fn read_vv(&mut self, vv: Option<&str>) -> Result<RootKind> {
        let (form, surface) = match vv {
            Some(text) => (bare_vowel("Vv", text)?, text),
            None => (VowelForm::new(1, 1), ""),
        };
        let kind = root_kind(form, surface)?;
        let value = match kind {
            RootKind::Plain(stem, version) => {
                self.formative.stem = stem;
                self.formative.version = version;
                format!("{}.{}", stem, version)
            }
            RootKind::Referential(stem) => {
                self.formative.stem = stem;
                format!("{}.PRC", stem)
            }
            RootKind::Affixual(specification) => {
                self.formative.specification = specification;
                format!("S1.PRC.{}", specification)
            }
        };
        self.decomposition.push("Vv", surface, value);
        Ok(kind)
    }

    fn read_root(&mut self, kind: RootKind, cr: &str, vr: &str) -> Result<()> {
        let form = bare_vowel("Vr", vr)?;
        let context = Context::from_series(form.series).ok_or_else(|| CodecError::vowel("Vr", vr))?;
        self.formative.context = context;

        let root = match kind {
            RootKind::Plain(..) => {
                if !is_legal_root(cr) {
                    return Err(CodecError::InvalidRoot(cr.to_string()));
                }
                Root::Plain(cr.to_string())
            }
            RootKind::Referential(_) => {
                let (referents, perspective) =
                    parse_referents(cr).ok_or_else(|| CodecError::InvalidReferents(cr.to_string()))?;
                Root::Referential { referents, perspective }
            }
            RootKind::Affixual(_) => {
                if !is_legal_affix_form(cr) {
                    return Err(CodecError::InvalidAffixForm(cr.to_string()));
                }
                Root::Affixual { cs: cr.to_string(), degree: form.degree }
            }
        };
        self.formative.root = root;
        self.decomposition.push("Cr", cr, cr);

        let value = match kind {
            RootKind::Affixual(_) => format!("{}/{}", context, form.degree),
            _ => {
                let (function, specification) =
                    vr_from_degree(form.degree).ok_or_else(|| CodecError::vowel("Vr", vr))?;
                self.formative.function = function;
                self.formative.specification = specification;
                format!("{}.{}.{}", function, specification, context)
            }
        };
        self.decomposition.push("Vr", vr, value);
        Ok(())
    }

    fn push_affix(&mut self, surface: String, affix: Affix, in_slot_v: bool) {
        let slot = if in_slot_v { "V" } else { "VII" };
        self.decomposition.morphemes.push(Morpheme::affix(slot, &surface, &affix));
        if in_slot_v {
            self.formative.slot_v.push(affix);
        } else {
            self.formative.slot_vii.push(affix);
        }
    }

    fn read_slot_viii(&mut self, pair: &Pair) -> Result<()> {
        let form = bare_vowel("Vn", &pair.vowel)?;
        let (cn, aspect) = MoodCaseScope::parse(&pair.consonant)
            .ok_or_else(|| CodecError::consonant("Cn", pair.consonant.clone()))?;
        let vn = Vn::from_vowel_form(form, aspect).ok_or_else(|| CodecError::vowel("Vn", pair.vowel.clone()))?;
        self.formative.vn = vn;
        self.formative.cn = cn;
        self.decomposition.push("Vn", &pair.vowel, vn.to_string());
        self.decomposition.push("Cn", &pair.consonant, cn.abbreviation());
        Ok(())
    }

    /// Reads Slot VII and Slot VIII from the pairs that follow Ca.
    fn read_tail(&mut self, mut pairs: Vec<Pair>) -> Result<()> {
        let slot_viii = match pairs.last() {
            Some(last) if is_slot_viii(last) => pairs.pop(),
            _ => None,
        };
        for pair in pairs {
            let (affix, glottal_stop) = decode_affix(&pair.vowel, &pair.consonant, false)?;
            if glottal_stop {
                return Err(CodecError::UnexpectedGlottalStop(pair.vowel));
            }
            self.push_affix(format!("{}{}", pair.vowel, pair.consonant), affix, false);
        }
        if let Some(pair) = slot_viii {
            self.read_slot_viii(&pair)?;
        }
        Ok(())
    }

    fn read_slot_ix(&mut self, vc: &str) -> Result<()> {
        let unit = vowel_unit("Vc", vc)?;
        let concatenated = self.formative.concatenation.is_some();
        let (kind, slot_ix) = match (concatenated, self.stress()) {
            (true, Stress::Penultimate) | (true, Stress::Ultimate) => {
                if unit.glottal_stop {
                    return Err(CodecError::UnexpectedGlottalStop(vc.to_string()));
                }
                let extended = self.stress() == Stress::Ultimate;
                (FormativeKind::Nominal, SlotIx::Case(case_from(unit.form, extended, vc)?))
            }
            (false, Stress::Penultimate) => {
                (FormativeKind::Nominal, SlotIx::Case(case_from(unit.form, unit.glottal_stop, vc)?))
            }
            (false, Stress::Antepenultimate) => {
                (FormativeKind::Framed, SlotIx::Case(case_from(unit.form, unit.glottal_stop, vc)?))
            }
            (false, Stress::Ultimate) => {
                if unit.glottal_stop {
                    return Err(CodecError::UnexpectedGlottalStop(vc.to_string()));
                }
                let (illocution, validation) =
                    parse_vk(unit.form).ok_or_else(|| CodecError::vowel("Vk", vc))?;
                (FormativeKind::Verbal, SlotIx::Illocution { illocution, validation })
            }
            (_, stress) => {
                return Err(CodecError::record(format!("{:?} stress is not used by formatives", stress)))
            }
        };
        self.formative.kind = kind;
        self.formative.slot_ix = slot_ix;
        match slot_ix {
            SlotIx::Case(case) => self.decomposition.push("Vc", vc, case.abbreviation()),
            SlotIx::Illocution { illocution, validation } => {
                self.decomposition.push("Vk", vc, format!("{}.{}", illocution, validation))
            }
        }
        self.decomposition.push("Stress", "", kind.abbreviation());
        Ok(())
    }

    fn finish(self) -> Analysis<Formative> {
        Analysis { value: self.formative, decomposition: self.decomposition }
    }
}

fn case_from(form: VowelForm, extended: bool, vc: &str) -> Result<Case> {
    Case::from_vowel_form(form, extended).ok_or_else(|| CodecError::vowel("Vc", vc))
}

fn groups(text: &str) -> Vec<String> {
    segment(text).into_iter().map(|g| g.text).collect()
}

/// Analyzes a formative.
pub fn analyze_formative(text: &str) -> Result<Option<Analysis<Formative>>> {
    let normalized = normalize(text);
    let word = normalized.text.as_str();
    let shape = select(word);
    let grammar: &Grammar = match shape {
        Shape::General => &GENERAL,
        Shape::CaShortcut => &CA_SHORTCUT,
        Shape::CnShortcut => &CN_SHORTCUT,
    };
    let caps = match grammar.captures(word) {
        Some(caps) => caps,
        None => {
            debug!(word, grammar = grammar.name, "no formative match");
            return Ok(None);
        }
    };
    debug!(word, grammar = grammar.name, "formative match");

    let mut reader = Reader::new(normalized.stress);
    match shape {
        Shape::General => read_general(&mut reader, &caps)?,
        Shape::CaShortcut => read_ca_shortcut(&mut reader, &caps)?,
        Shape::CnShortcut => read_cn_shortcut(&mut reader, &caps)?,
    }
    Ok(Some(reader.finish()))
}

/// Splits `C V C V ... C V` into Slot V, Ca, and the pairs after Ca.
fn read_body(reader: &mut Reader, rest: &str) -> Result<String> {
    let parts = groups(rest);
    let consonants: Vec<&String> = parts.iter().step_by(2).collect();
    let vowels: Vec<&String> = parts.iter().skip(1).step_by(2).collect();
    let count = vowels.len();

    let ca_index = consonants.iter().position(|c| has_geminate(c)).unwrap_or(0);
    for k in 0..ca_index {
        let (affix, glottal_stop) = decode_affix(vowels[k], consonants[k], false)?;
        if glottal_stop {
            return Err(CodecError::UnexpectedGlottalStop(vowels[k].clone()));
        }
        reader.push_affix(format!("{}{}", consonants[k], vowels[k]), affix, true);
    }

    let ca_text = consonants[ca_index];
    let ca = if ca_index == 0 { decode_ca(ca_text)? } else { decode_geminated_ca(ca_text)? };
    reader.formative.ca = ca;
    reader.decomposition.push("Ca", ca_text, ca.to_string());

    let pairs = (ca_index..count - 1)
        .map(|j| Pair { vowel: vowels[j].clone(), consonant: consonants[j + 1].clone() })
        .collect();
    reader.read_tail(pairs)?;
    Ok(vowels[count - 1].clone())
}

fn read_general(reader: &mut Reader, caps: &Captures) -> Result<()> {
    if let Some(cc) = text(caps, "cc") {
        reader.read_cc(cc)?;
    }
    let vv = text(caps, "vv").or_else(|| text(caps, "vve"));
    let kind = reader.read_vv(vv)?;
    reader.read_root(kind, text(caps, "cr").unwrap_or_default(), text(caps, "vr").unwrap_or_default())?;
    let vc = read_body(reader, text(caps, "rest").unwrap_or_default())?;
    reader.read_slot_ix(&vc)
}

fn read_cn_shortcut(reader: &mut Reader, caps: &Captures) -> Result<()> {
    let cn_letter = text(caps, "cn");
    let vii_letter = text(caps, "vii");
    if cn_letter.is_none() && vii_letter.is_none() {
        return Err(CodecError::IncompatibleShortcut("empty ç marker".to_string()));
    }
    reader.decomposition.push(
        "Cc",
        &format!("ç{}{}", cn_letter.unwrap_or_default(), vii_letter.unwrap_or_default()),
        "",
    );

    let kind = reader.read_vv(text(caps, "vv"))?;
    reader.read_root(kind, text(caps, "cr").unwrap_or_default(), text(caps, "vr").unwrap_or_default())?;
    let vc = read_body(reader, text(caps, "rest").unwrap_or_default())?;

    if let Some(letter) = vii_letter {
        let (_, cs, degree) = VII_SHORTCUTS
            .iter()
            .find(|(l, _, _)| *l == letter)
            .ok_or_else(|| CodecError::consonant("Cc", letter))?;
        reader.push_affix(String::new(), Affix::plain(cs, *degree), false);
    }
    if let Some(letter) = cn_letter {
        if reader.formative.vn != Vn::default() || reader.formative.cn != MoodCaseScope::default() {
            return Err(CodecError::IncompatibleShortcut(
                "Cn given both in the ç marker and in Slot VIII".to_string(),
            ));
        }
        let index = CN_SHORTCUT_LETTERS
            .iter()
            .position(|l| *l == letter)
            .ok_or_else(|| CodecError::consonant("Cc", letter))?;
        let cn = MoodCaseScope::from_index(index).ok_or_else(|| CodecError::consonant("Cc", letter))?;
        reader.formative.cn = cn;
        reader.decomposition.push("Cn", "", cn.abbreviation());
    }
    reader.read_slot_ix(&vc)
}

fn read_ca_shortcut(reader: &mut Reader, caps: &Captures) -> Result<()> {
    let cc = text(caps, "cc").unwrap_or_default();
    let shortcut = reader
        .read_cc(cc)?
        .ok_or_else(|| CodecError::consonant("Cc", cc))?;

    let vv = text(caps, "vv").unwrap_or_default();
    let unit = vowel_unit("Vv", vv)?;
    if matches!(unit.form.degree, 0 | 5) {
        return Err(CodecError::IncompatibleShortcut(format!(
            "Ca shortcut '{}' needs a plain root, found Vv '{}'",
            cc, vv
        )));
    }
    let (stem, version) =
        stem_version_from_degree(unit.form.degree).ok_or_else(|| CodecError::vowel("Vv", vv))?;
    let ca = shortcut_bundle(shortcut, unit.form.series).ok_or_else(|| CodecError::vowel("Vv", vv))?;
    reader.formative.stem = stem;
    reader.formative.version = version;
    reader.formative.ca = ca;
    reader.decomposition.push("Vv", vv, format!("{}.{}.{}", stem, version, ca));

    let cr = text(caps, "cr").unwrap_or_default();
    if !is_legal_root(cr) {
        return Err(CodecError::InvalidRoot(cr.to_string()));
    }
    reader.formative.root = Root::Plain(cr.to_string());
    reader.decomposition.push("Cr", cr, cr);

    // rest is V (C V)*: pairs of (V, C) then the final vowel.
    let parts = groups(text(caps, "rest").unwrap_or_default());
    let vowels: Vec<&String> = parts.iter().step_by(2).collect();
    let consonants: Vec<&String> = parts.iter().skip(1).step_by(2).collect();
    let mut pairs: Vec<Pair> = consonants
        .iter()
        .enumerate()
        .map(|(k, c)| Pair { vowel: vowels[k].clone(), consonant: (*c).clone() })
        .collect();
    let vc = vowels[vowels.len() - 1].clone();

    let slot_viii = match pairs.last() {
        Some(last) if is_slot_viii(last) => pairs.pop(),
        _ => None,
    };

    let mut decoded = Vec::with_capacity(pairs.len());
    for pair in &pairs {
        let (affix, glottal_stop) = decode_affix(&pair.vowel, &pair.consonant, false)?;
        decoded.push((affix, glottal_stop, format!("{}{}", pair.vowel, pair.consonant)));
    }
    let slot_v_len = if unit.glottal_stop {
        if decoded.is_empty() {
            return Err(CodecError::UnexpectedGlottalStop(vv.to_string()));
        }
        decoded.iter().position(|(_, g, _)| *g).map(|i| i + 1).unwrap_or(decoded.len())
    } else {
        0
    };
    if let Some((_, _, surface)) = decoded.iter().skip(slot_v_len).find(|(_, g, _)| *g) {
        return Err(CodecError::UnexpectedGlottalStop(surface.clone()));
    }
    for (i, (affix, _, surface)) in decoded.into_iter().enumerate() {
        reader.push_affix(surface, affix, i < slot_v_len);
    }

    if let Some(pair) = slot_viii {
        reader.read_slot_viii(&pair)?;
    }
    reader.read_slot_ix(&vc)
}
