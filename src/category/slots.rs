//! Slot I, II and IV categories

use super::ca::CaShortcut;

category! {
    /// Concatenation type of a formative.
    Concatenation {
        Type1 => "T1",
        Type2 => "T2",
    }
}

category! {
    Stem {
        S1 => "S1",
        S2 => "S2",
        S3 => "S3",
        S0 => "S0",
    }
}

category! {
    Version {
        Processual => "PRC",
        Completive => "CPT",
    }
}

category! {
    Function {
        Stative => "STA",
        Dynamic => "DYN",
    }
}

category! {
    Specification {
        Basic => "BSC",
        Contential => "CTE",
        Constitutive => "CSV",
        Objective => "OBJ",
    }
}

category! {
    Context {
        Existential => "EXS",
        Functional => "FNC",
        Representational => "RPS",
        Amalgamative => "AMG",
    }
}

impl Default for Stem {
    fn default() -> Self {
        Stem::S1
    }
}

impl Default for Version {
    fn default() -> Self {
        Version::Processual
    }
}

impl Default for Function {
    fn default() -> Self {
        Function::Stative
    }
}

impl Default for Specification {
    fn default() -> Self {
        Specification::Basic
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::Existential
    }
}

/// Vowel-table series used by a category with four values.
macro_rules! series_by_index {
    ($($name:ident),+) => {
        $(impl $name {
            pub fn series(self) -> u8 {
                self.index() as u8 + 1
            }

            pub fn from_series(series: u8) -> Option<Self> {
                (series as usize).checked_sub(1).and_then(Self::from_index)
            }
        })+
    };
}

series_by_index!(Stem, Specification, Context);

/// Vv degree for a stem and version.
pub fn stem_version_degree(stem: Stem, version: Version) -> u8 {
    match (stem, version) {
        (Stem::S1, Version::Processual) => 1,
        (Stem::S1, Version::Completive) => 2,
        (Stem::S2, Version::Processual) => 3,
        (Stem::S2, Version::Completive) => 4,
        (Stem::S3, Version::Processual) => 9,
        (Stem::S3, Version::Completive) => 8,
        (Stem::S0, Version::Processual) => 7,
        (Stem::S0, Version::Completive) => 6,
    }
}

pub fn stem_version_from_degree(degree: u8) -> Option<(Stem, Version)> {
    let pair = match degree {
        1 => (Stem::S1, Version::Processual),
        2 => (Stem::S1, Version::Completive),
        3 => (Stem::S2, Version::Processual),
        4 => (Stem::S2, Version::Completive),
        9 => (Stem::S3, Version::Processual),
        8 => (Stem::S3, Version::Completive),
        7 => (Stem::S0, Version::Processual),
        6 => (Stem::S0, Version::Completive),
        _ => return None,
    };
    Some(pair)
}

/// Vr degree for a function and specification.
pub fn vr_degree(function: Function, specification: Specification) -> u8 {
    let offset = specification.index() as u8;
    match function {
        Function::Stative => 1 + offset,
        Function::Dynamic => 9 - offset,
    }
}

pub fn vr_from_degree(degree: u8) -> Option<(Function, Specification)> {
    match degree {
        1..=4 => Specification::from_index(degree as usize - 1).map(|s| (Function::Stative, s)),
        6..=9 => Specification::from_index(9 - degree as usize).map(|s| (Function::Dynamic, s)),
        _ => None,
    }
}

const CC_FORMS: [(Option<Concatenation>, Option<CaShortcut>, &str); 9] = [
    (None, None, ""),
    (None, Some(CaShortcut::W), "w"),
    (None, Some(CaShortcut::Y), "y"),
    (Some(Concatenation::Type1), None, "h"),
    (Some(Concatenation::Type1), Some(CaShortcut::W), "hl"),
    (Some(Concatenation::Type1), Some(CaShortcut::Y), "hm"),
    (Some(Concatenation::Type2), None, "hw"),
    (Some(Concatenation::Type2), Some(CaShortcut::W), "hr"),
    (Some(Concatenation::Type2), Some(CaShortcut::Y), "hn"),
];

/// Slot I consonant for a concatenation type and Ca shortcut.
pub fn cc_form(concatenation: Option<Concatenation>, shortcut: Option<CaShortcut>) -> &'static str {
    CC_FORMS
        .iter()
        .find(|(c, s, _)| *c == concatenation && *s == shortcut)
        .map(|(_, _, form)| *form)
        .unwrap_or("")
}

pub fn parse_cc(form: &str) -> Option<(Option<Concatenation>, Option<CaShortcut>)> {
    CC_FORMS
        .iter()
        .find(|(_, _, f)| *f == form)
        .map(|(c, s, _)| (*c, *s))
}
