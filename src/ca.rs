//! Ca complex codec
//!
//! Encodes the five Ca categories into one consonant cluster. Decoding uses
//! tables precomputed over the full cross product, for both the plain and the
//! geminated spelling.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::category::ca::{perspective_essence_form, CA_SUBSTITUTIONS};
use crate::category::{Affiliation, CaShortcut, Configuration, Essence, Extension, Perspective};
use crate::error::{CodecError, Result};
use crate::phonology::geminate_ca;

/// The five Ca categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaBundle {
    pub affiliation: Affiliation,
    pub configuration: Configuration,
    pub extension: Extension,
    pub perspective: Perspective,
    pub essence: Essence,
}

impl CaBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_affiliation(mut self, affiliation: Affiliation) -> Self {
        self.affiliation = affiliation;
        self
    }

    pub fn with_configuration(mut self, configuration: Configuration) -> Self {
        self.configuration = configuration;
        self
    }

    pub fn with_extension(mut self, extension: Extension) -> Self {
        self.extension = extension;
        self
    }

    pub fn with_perspective(mut self, perspective: Perspective) -> Self {
        self.perspective = perspective;
        self
    }

    pub fn with_essence(mut self, essence: Essence) -> Self {
        self.essence = essence;
        self
    }

    /// Every combination of the five categories.
    pub fn all() -> impl Iterator<Item = CaBundle> {
        Affiliation::ALL.iter().flat_map(|&affiliation| {
            Configuration::ALL.iter().flat_map(move |&configuration| {
                Extension::ALL.iter().flat_map(move |&extension| {
                    Perspective::ALL.iter().flat_map(move |&perspective| {
                        Essence::ALL.iter().map(move |&essence| CaBundle {
                            affiliation,
                            configuration,
                            extension,
                            perspective,
                            essence,
                        })
                    })
                })
            })
        })
    }
}

impl fmt::Display for CaBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.affiliation != Affiliation::default() {
            parts.push(self.affiliation.abbreviation());
        }
        if self.configuration != Configuration::default() {
            parts.push(self.configuration.abbreviation());
        }
        if self.extension != Extension::default() {
            parts.push(self.extension.abbreviation());
        }
        if self.perspective != Perspective::default() {
            parts.push(self.perspective.abbreviation());
        }
        if self.essence != Essence::default() {
            parts.push(self.essence.abbreviation());
        }
        if parts.is_empty() {
            write!(f, "{{Ca}}")
        } else {
            write!(f, "{}", parts.join("."))
        }
    }
}

/// Plain (ungeminated) Ca form.
pub fn encode_ca(ca: &CaBundle) -> String {
    let uniplex = ca.configuration == Configuration::Uniplex;
    let bare = uniplex && ca.extension == Extension::Delimitive;
    let silent_rest = ca.perspective == Perspective::Monadic && ca.essence == Essence::Normal;

    if bare && silent_rest {
        return ca.affiliation.standalone_form().to_string();
    }

    let standalone = bare && ca.affiliation == Affiliation::Consolidative;
    let mut out = String::new();
    out.push_str(ca.affiliation.form());
    out.push_str(ca.configuration.form());
    out.push_str(ca.extension.form(uniplex));
    out.push_str(perspective_essence_form(ca.perspective, ca.essence, standalone));

    for (from, to) in CA_SUBSTITUTIONS.iter() {
        out = out.replace(from, to);
    }
    out
}

/// Geminated Ca form, used when Slot V is filled.
pub fn encode_geminated_ca(ca: &CaBundle) -> Result<String> {
    geminate_ca(&encode_ca(ca))
}

struct CaTables {
    plain: HashMap<String, CaBundle>,
    geminated: HashMap<String, CaBundle>,
}

lazy_static! {
    static ref CA_TABLES: CaTables = build_ca_tables();
}

fn build_ca_tables() -> CaTables {
    let mut plain = HashMap::new();
    let mut geminated = HashMap::new();
    for ca in CaBundle::all() {
        let form = encode_ca(&ca);
        match geminate_ca(&form) {
            Ok(doubled) => {
                if let Some(previous) = geminated.insert(doubled.clone(), ca) {
                    warn!(form = %doubled, %previous, current = %ca, "geminated Ca collision");
                }
            }
            Err(e) => error!(%form, error = %e, "Ca form cannot be geminated"),
        }
        if let Some(previous) = plain.insert(form.clone(), ca) {
            warn!(%form, %previous, current = %ca, "Ca collision");
        }
    }
    CaTables { plain, geminated }
}

pub fn decode_ca(form: &str) -> Result<CaBundle> {
    CA_TABLES
        .plain
        .get(form)
        .copied()
        .ok_or_else(|| CodecError::InvalidCaForm(form.to_string()))
}

pub fn decode_geminated_ca(form: &str) -> Result<CaBundle> {
    CA_TABLES
        .geminated
        .get(form)
        .copied()
        .ok_or_else(|| CodecError::InvalidCaForm(form.to_string()))
}

/// Number of distinct plain and geminated Ca forms.
pub fn table_sizes() -> (usize, usize) {
    (CA_TABLES.plain.len(), CA_TABLES.geminated.len())
}

/// The Ca a Slot I shortcut and Vv series stand for.
pub fn shortcut_bundle(shortcut: CaShortcut, series: u8) -> Option<CaBundle> {
    let base = CaBundle::new();
    let ca = match (shortcut, series) {
        (CaShortcut::W, 1) => base,
        (CaShortcut::W, 2) => base.with_perspective(Perspective::Agglomerative),
        (CaShortcut::W, 3) => base.with_perspective(Perspective::Nomic),
        (CaShortcut::W, 4) => base
            .with_perspective(Perspective::Agglomerative)
            .with_essence(Essence::Representative),
        (CaShortcut::Y, 1) => base.with_extension(Extension::Proximal),
        (CaShortcut::Y, 2) => base.with_essence(Essence::Representative),
        (CaShortcut::Y, 3) => base.with_perspective(Perspective::Abstract),
        (CaShortcut::Y, 4) => base
            .with_extension(Extension::Proximal)
            .with_essence(Essence::Representative),
        _ => return None,
    };
    Some(ca)
}

/// Inverse of [`shortcut_bundle`].
pub fn shortcut_for(ca: &CaBundle) -> Option<(CaShortcut, u8)> {
    CaShortcut::ALL.iter().find_map(|&shortcut| {
        (1..=4)
            .find(|&series| shortcut_bundle(shortcut, series).as_ref() == Some(ca))
            .map(|series| (shortcut, series))
    })
}
