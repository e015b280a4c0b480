//! Formatives
//!
//! The record type, its validation, and the tables shared by the composer
//! and the analyzer.

pub mod analyze;
pub mod compose;

pub use analyze::analyze_formative;
pub use compose::generate_formative;

use serde::{Deserialize, Serialize};

use crate::affix::{affix_parts, is_legal_affix_form, validate_embedded, Affix};
use crate::ca::CaBundle;
use crate::category::case::vk_form;
use crate::category::referent::{encode_referents, parse_referents};
use crate::category::{
    Case, Concatenation, Context, Function, Illocution, MoodCaseScope, Perspective, Referent,
    Specification, Stem, Validation, Version, Vn,
};
use crate::error::{CodecError, Result};
use crate::phonology::{has_geminate, is_legal_cluster, Stress};

/// Slot III root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Root {
    Plain(String),
    /// A referent list standing in for a root.
    Referential { referents: Vec<Referent>, perspective: Perspective },
    /// An affix standing in for a root.
    Affixual { cs: String, degree: u8 },
}

/// Formative type, shown by stress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormativeKind {
    /// UNF/C: penultimate stress, Slot IX holds a case.
    Nominal,
    /// UNF/K: ultimate stress, Slot IX holds illocution and validation.
    Verbal,
    /// FRM: antepenultimate stress.
    Framed,
}

impl FormativeKind {
    pub fn abbreviation(self) -> &'static str {
        match self {
            FormativeKind::Nominal => "UNF/C",
            FormativeKind::Verbal => "UNF/K",
            FormativeKind::Framed => "FRM",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotIx {
    Case(Case),
    Illocution { illocution: Illocution, validation: Validation },
}

impl Default for SlotIx {
    fn default() -> Self {
        SlotIx::Case(Case::default())
    }
}

/// A formative, slot by slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formative {
    pub kind: FormativeKind,
    pub concatenation: Option<Concatenation>,
    pub stem: Stem,
    pub version: Version,
    pub root: Root,
    pub function: Function,
    pub specification: Specification,
    pub context: Context,
    pub slot_v: Vec<Affix>,
    pub ca: CaBundle,
    pub slot_vii: Vec<Affix>,
    pub vn: Vn,
    pub cn: MoodCaseScope,
    pub slot_ix: SlotIx,
}

impl Formative {
    /// A nominal formative with every category at its default.
    pub fn new(root: Root) -> Self {
        Self {
            kind: FormativeKind::Nominal,
            concatenation: None,
            stem: Stem::default(),
            version: Version::default(),
            root,
            function: Function::default(),
            specification: Specification::default(),
            context: Context::default(),
            slot_v: Vec::new(),
            ca: CaBundle::default(),
            slot_vii: Vec::new(),
            vn: Vn::default(),
            cn: MoodCaseScope::default(),
            slot_ix: SlotIx::default(),
        }
    }

    /// Shorthand for a plain root.
    pub fn from_root(cr: &str) -> Self {
        Self::new(Root::Plain(cr.to_string()))
    }

    pub fn with_concatenation(mut self, concatenation: Concatenation) -> Self {
        self.concatenation = Some(concatenation);
        self
    }

    pub fn with_stem(mut self, stem: Stem) -> Self {
        self.stem = stem;
        self
    }

    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    pub fn with_function(mut self, function: Function) -> Self {
        self.function = function;
        self
    }

    pub fn with_specification(mut self, specification: Specification) -> Self {
        self.specification = specification;
        self
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    pub fn with_ca(mut self, ca: CaBundle) -> Self {
        self.ca = ca;
        self
    }

    pub fn with_slot_v(mut self, affix: Affix) -> Self {
        self.slot_v.push(affix);
        self
    }

    pub fn with_slot_vii(mut self, affix: Affix) -> Self {
        self.slot_vii.push(affix);
        self
    }

    pub fn with_vn(mut self, vn: Vn) -> Self {
        self.vn = vn;
        self
    }

    pub fn with_cn(mut self, cn: MoodCaseScope) -> Self {
        self.cn = cn;
        self
    }

    /// Sets a case; a verbal formative becomes nominal.
    pub fn with_case(mut self, case: Case) -> Self {
        self.slot_ix = SlotIx::Case(case);
        if self.kind == FormativeKind::Verbal {
            self.kind = FormativeKind::Nominal;
        }
        self
    }

    /// Sets illocution and validation, making the formative verbal.
    pub fn with_illocution(mut self, illocution: Illocution, validation: Validation) -> Self {
        self.slot_ix = SlotIx::Illocution { illocution, validation };
        self.kind = FormativeKind::Verbal;
        self
    }

    pub fn framed(mut self) -> Self {
        self.kind = FormativeKind::Framed;
        if !matches!(self.slot_ix, SlotIx::Case(_)) {
            self.slot_ix = SlotIx::default();
        }
        self
    }

    /// Stress that Slot X calls for.
    pub fn stress(&self) -> Stress {
        if self.concatenation.is_some() {
            return match self.slot_ix {
                SlotIx::Case(case) if case.is_extended() => Stress::Ultimate,
                _ => Stress::Penultimate,
            };
        }
        match self.kind {
            FormativeKind::Nominal => Stress::Penultimate,
            FormativeKind::Verbal => Stress::Ultimate,
            FormativeKind::Framed => Stress::Antepenultimate,
        }
    }

    /// Checks the cross-slot constraints a writable formative must meet.
    pub fn validate(&self) -> Result<()> {
        match (self.kind, self.slot_ix) {
            (FormativeKind::Verbal, SlotIx::Illocution { illocution, validation }) => {
                if vk_form(illocution, validation).is_none() {
                    return Err(CodecError::record(format!(
                        "{} illocution cannot show {} validation",
                        illocution, validation
                    )));
                }
            }
            (FormativeKind::Verbal, SlotIx::Case(_)) => {
                return Err(CodecError::record("verbal formatives take illocution, not case"))
            }
            (_, SlotIx::Illocution { .. }) => {
                return Err(CodecError::record("only verbal formatives take illocution"))
            }
            _ => {}
        }
        if self.concatenation.is_some() && self.kind != FormativeKind::Nominal {
            return Err(CodecError::record("concatenated formatives must be nominal"));
        }

        match &self.root {
            Root::Plain(cr) => {
                if !is_legal_root(cr) {
                    return Err(CodecError::InvalidRoot(cr.clone()));
                }
            }
            Root::Referential { referents, perspective } => {
                let text = encode_referents(referents, *perspective);
                match parse_referents(&text) {
                    Some((ref parsed, p)) if parsed == referents && p == *perspective => {}
                    _ => return Err(CodecError::InvalidReferents(text)),
                }
                if self.version != Version::Processual {
                    return Err(CodecError::record("referential roots take processual version"));
                }
            }
            Root::Affixual { cs, degree } => {
                if *degree > 9 || !is_legal_affix_form(cs) {
                    return Err(CodecError::InvalidAffixForm(cs.clone()));
                }
                if self.stem != Stem::S1
                    || self.version != Version::Processual
                    || self.function != Function::Stative
                {
                    return Err(CodecError::record(
                        "affixual roots take S1 stem, processual version and stative function",
                    ));
                }
            }
        }

        for affix in self.slot_v.iter().chain(self.slot_vii.iter()) {
            validate_embedded(affix)?;
            let (_, cs) = affix_parts(affix)?;
            if has_geminate(&cs) {
                return Err(CodecError::record(format!(
                    "affix {} has a doubled consonant and cannot appear in a formative",
                    affix
                )));
            }
        }
        Ok(())
    }
}

/// Whether a consonant cluster can serve as a plain root.
///
/// Roots may not begin with letters that mark Slot I or the Cn shortcut.
pub fn is_legal_root(cr: &str) -> bool {
    is_legal_cluster(cr) && !cr.starts_with(|c: char| matches!(c, 'h' | 'w' | 'y' | 'ç'))
}

/// Slot VIII letters of the Cn-shortcut marker, indexed by Cn.
pub(crate) const CN_SHORTCUT_LETTERS: [&str; 6] = ["", "l", "r", "m", "n", "ň"];

/// Slot VII letters of the Cn-shortcut marker and the type-1 affix each
/// stands for.
pub(crate) const VII_SHORTCUTS: [(&str, &str, u8); 3] = [("w", "r", 4), ("y", "t", 4), ("ř", "t", 5)];

/// Marker letter for a trailing Slot VII affix, if it has one.
pub(crate) fn vii_shortcut_letter(affix: &Affix) -> Option<&'static str> {
    match affix {
        Affix::Plain { cs, degree, kind: crate::affix::AffixType::One } => VII_SHORTCUTS
            .iter()
            .find(|(_, form, d)| form == cs && d == degree)
            .map(|(letter, _, _)| *letter),
        _ => None,
    }
}
