//! Slot VIII categories: Vn and Cn

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::reverse_table;

use crate::vowel::VowelForm;

category! {
    Valence {
        Monoactive => "MNO",
        Parallel => "PRL",
        Corollary => "CRO",
        Reciprocal => "RCP",
        Complementary => "CPL",
        Duplicative => "DUP",
        Demonstrative => "DEM",
        Contingent => "CNG",
        Participatory => "PTI",
    }
}

category! {
    Phase {
        Punctual => "PUN",
        Iterative => "ITR",
        Repetitive => "REP",
        Intermittent => "ITM",
        Recurrent => "RCT",
        Frequentative => "FRE",
        Fragmentative => "FRG",
        Vacillitative => "VAC",
        Fluctuative => "FLC",
    }
}

category! {
    Effect {
        FirstBeneficial => "1:BEN",
        SecondBeneficial => "2:BEN",
        ThirdBeneficial => "3:BEN",
        SelfBeneficial => "SLF:BEN",
        Unknown => "UNK",
        SelfDetrimental => "SLF:DET",
        ThirdDetrimental => "3:DET",
        SecondDetrimental => "2:DET",
        FirstDetrimental => "1:DET",
    }
}

category! {
    Level {
        Minimal => "MIN",
        Subequative => "SBE",
        Inferior => "IFR",
        Deficient => "DFC",
        Equative => "EQU",
        Surpassive => "SUR",
        Superlative => "SPL",
        Superequative => "SPQ",
        Maximal => "MAX",
    }
}

category! {
    Aspect {
        Retrospective => "RTR",
        Prospective => "PRS",
        Habitual => "HAB",
        Progressive => "PRG",
        Imminent => "IMM",
        Precessive => "PCS",
        Regulative => "REG",
        Summative => "SMM",
        Anticipatory => "ATP",
        Resumptive => "RSM",
        Cessative => "CSS",
        Pausal => "PAU",
        Regressive => "RGR",
        Preclusive => "PCL",
        Continuative => "CNT",
        Incessative => "ICS",
        Experiential => "EXP",
        Interruptive => "IRP",
        Preemptive => "PMP",
        Climactic => "CLM",
        Dilatory => "DLT",
        Temporary => "TMP",
        Expenditive => "XPD",
        Limitative => "LIM",
        Expeditive => "EPD",
        Protractive => "PTC",
        Preparatory => "PPR",
        Disclusive => "DCL",
        Conclusive => "CCL",
        Culminative => "CUL",
        Intermediative => "IMD",
        Tardative => "TRD",
        Transitional => "TNS",
        Intercommutative => "ITC",
        Motive => "MTV",
        Sequential => "SQN",
    }
}

category! {
    Mood {
        Factual => "FAC",
        Subjunctive => "SUB",
        Assumptive => "ASM",
        Speculative => "SPC",
        Counterfactive => "COU",
        Hypothetical => "HYP",
    }
}

category! {
    CaseScope {
        Natural => "CCN",
        Antecedent => "CCA",
        Subaltern => "CCS",
        Qualifier => "CCQ",
        Precedent => "CCP",
        Successive => "CCV",
    }
}

category! {
    /// Cn value: a mood on verbal formatives, a case-scope otherwise.
    MoodCaseScope {
        FacCcn => "FAC/CCN",
        SubCca => "SUB/CCA",
        AsmCcs => "ASM/CCS",
        SpcCcq => "SPC/CCQ",
        CouCcp => "COU/CCP",
        HypCcv => "HYP/CCV",
    }
}

impl Default for MoodCaseScope {
    fn default() -> Self {
        MoodCaseScope::FacCcn
    }
}

const CN_PLAIN: [&str; 6] = ["h", "hl", "hr", "hm", "hn", "hň"];
const CN_ASPECTUAL: [&str; 6] = ["w", "hw", "hrw", "hmw", "hnw", "hňw"];

lazy_static! {
    static ref CN_PLAIN_INDEX: HashMap<&'static str, usize> = reverse_table(&CN_PLAIN);
    static ref CN_ASPECTUAL_INDEX: HashMap<&'static str, usize> = reverse_table(&CN_ASPECTUAL);
}

impl MoodCaseScope {
    pub fn mood(self) -> Mood {
        Mood::ALL[self.index()]
    }

    pub fn case_scope(self) -> CaseScope {
        CaseScope::ALL[self.index()]
    }

    pub fn from_mood(mood: Mood) -> Self {
        Self::ALL[mood.index()]
    }

    pub fn from_case_scope(scope: CaseScope) -> Self {
        Self::ALL[scope.index()]
    }

    /// Cn consonant; aspects take the w-series. With `elide`, the default
    /// value is silent.
    pub fn form(self, after_aspect: bool, elide: bool) -> &'static str {
        if elide && self == MoodCaseScope::FacCcn {
            return "";
        }
        if after_aspect {
            CN_ASPECTUAL[self.index()]
        } else {
            CN_PLAIN[self.index()]
        }
    }

    /// Reads a Cn consonant, returning whether it was aspectual.
    pub fn parse(form: &str) -> Option<(Self, bool)> {
        if let Some(&i) = CN_PLAIN_INDEX.get(form) {
            return Self::from_index(i).map(|cn| (cn, false));
        }
        CN_ASPECTUAL_INDEX
            .get(form)
            .and_then(|&i| Self::from_index(i))
            .map(|cn| (cn, true))
    }

    pub fn is_cn_form(form: &str) -> bool {
        Self::parse(form).is_some()
    }
}

/// Vn value: one of five nine-valued categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vn {
    Valence(Valence),
    Phase(Phase),
    Effect(Effect),
    Level(Level),
    Aspect(Aspect),
}

impl Default for Vn {
    fn default() -> Self {
        Vn::Valence(Valence::Monoactive)
    }
}

impl Vn {
    pub fn is_aspect(self) -> bool {
        matches!(self, Vn::Aspect(_))
    }

    pub fn vowel_form(self) -> VowelForm {
        let (series, index) = match self {
            Vn::Valence(v) => (1, v.index()),
            Vn::Phase(p) => (2, p.index()),
            Vn::Effect(e) => (3, e.index()),
            Vn::Level(l) => (4, l.index()),
            Vn::Aspect(a) => (a.index() / 9 + 1, a.index() % 9),
        };
        VowelForm::new(series as u8, index as u8 + 1)
    }

    /// Decodes a vowel form; aspects are signalled by the Cn series.
    pub fn from_vowel_form(form: VowelForm, aspect: bool) -> Option<Self> {
        if form.degree == 0 || !form.is_valid() {
            return None;
        }
        let index = form.degree as usize - 1;
        if aspect {
            return Aspect::from_index((form.series as usize - 1) * 9 + index).map(Vn::Aspect);
        }
        match form.series {
            1 => Valence::from_index(index).map(Vn::Valence),
            2 => Phase::from_index(index).map(Vn::Phase),
            3 => Effect::from_index(index).map(Vn::Effect),
            4 => Level::from_index(index).map(Vn::Level),
            _ => None,
        }
    }
}

impl fmt::Display for Vn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abbreviation = match self {
            Vn::Valence(v) => v.abbreviation(),
            Vn::Phase(p) => p.abbreviation(),
            Vn::Effect(e) => e.abbreviation(),
            Vn::Level(l) => l.abbreviation(),
            Vn::Aspect(a) => a.abbreviation(),
        };
        f.write_str(abbreviation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_spans_four_series() {
        assert_eq!(Aspect::ALL.len(), 36);
        assert_eq!(Vn::Aspect(Aspect::Sequential).vowel_form(), VowelForm::new(4, 9));
        assert_eq!(
            Vn::from_vowel_form(VowelForm::new(2, 1), true),
            Some(Vn::Aspect(Aspect::Resumptive))
        );
        assert_eq!(
            Vn::from_vowel_form(VowelForm::new(2, 1), false),
            Some(Vn::Phase(Phase::Punctual))
        );
    }

    #[test]
    fn test_cn_forms() {
        assert_eq!(MoodCaseScope::HypCcv.form(false, false), "hň");
        assert_eq!(MoodCaseScope::SubCca.form(true, false), "hw");
        assert_eq!(MoodCaseScope::FacCcn.form(true, true), "");
        assert_eq!(MoodCaseScope::parse("hrw"), Some((MoodCaseScope::AsmCcs, true)));
        assert_eq!(MoodCaseScope::SpcCcq.mood(), Mood::Speculative);
        assert_eq!(MoodCaseScope::from_mood(Mood::Hypothetical), MoodCaseScope::HypCcv);
        assert_eq!(MoodCaseScope::from_case_scope(CaseScope::Antecedent), MoodCaseScope::SubCca);
        assert_eq!(MoodCaseScope::SpcCcq.case_scope(), CaseScope::Qualifier);
    }
}
