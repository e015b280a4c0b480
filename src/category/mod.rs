//! Grammatical categories
//!
//! Every category is a closed enumeration with a fixed abbreviation and
//! index, plus the surface tables the codecs read from. The `category!`
//! macro supplies the common surface (abbreviation, `ALL`, index lookups);
//! each submodule adds the forms its slots use.

macro_rules! category {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $abbr:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn abbreviation(self) -> &'static str {
                match self {
                    $($name::$variant => $abbr),+
                }
            }

            pub fn index(self) -> usize {
                self as usize
            }

            pub fn from_index(index: usize) -> Option<Self> {
                Self::ALL.get(index).copied()
            }

            pub fn from_abbreviation(abbr: &str) -> Option<Self> {
                lazy_static::lazy_static! {
                    static ref BY_ABBREVIATION: std::collections::HashMap<String, $name> = $name::ALL
                        .iter()
                        .map(|v| (v.abbreviation().to_lowercase(), *v))
                        .collect();
                }
                BY_ABBREVIATION.get(&abbr.to_lowercase()).copied()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.abbreviation())
            }
        }
    };
}

use std::collections::HashMap;

/// Position of every form in a surface table. The first occurrence wins.
pub(crate) fn reverse_table(forms: &[&'static str]) -> HashMap<&'static str, usize> {
    forms.iter().enumerate().rev().map(|(i, form)| (*form, i)).collect()
}

pub mod adjunct;
pub mod ca;
pub mod case;
pub mod referent;
pub mod slots;
pub mod vn;

pub use adjunct::{AffixualScope, Bias, ModularScope, ModularTarget, Register, Suppletive};
pub use ca::{Affiliation, CaShortcut, Configuration, Essence, Extension, Perspective};
pub use case::{Case, Illocution, Validation};
pub use referent::{Referent, ReferentEffect, ReferentTarget};
pub use slots::{Concatenation, Context, Function, Specification, Stem, Version};
pub use vn::{Aspect, CaseScope, Effect, Level, Mood, MoodCaseScope, Phase, Valence, Vn};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_table_keeps_first_position() {
        let table = reverse_table(&["a", "b", "a"]);
        assert_eq!(table.get("a"), Some(&0));
        assert_eq!(table.get("b"), Some(&1));
        assert_eq!(table.get("c"), None);
    }

    #[test]
    fn test_abbreviation_lookup_ignores_case() {
        for case in Case::ALL {
            assert_eq!(Case::from_abbreviation(case.abbreviation()), Some(*case));
        }
        assert_eq!(ReferentTarget::from_abbreviation("RDP"), Some(ReferentTarget::Reduplicative));
        assert_eq!(Bias::from_abbreviation("xyz"), None);
    }
}
