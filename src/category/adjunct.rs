//! Adjunct categories and their forms

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::reverse_table;

category! {
    Bias {
        Accidental => "ACC",
        Admissive => "ACH",
        Disapprobative => "ADS",
        Annunciative => "ANN",
        Anticipative => "ANP",
        Approbative => "APB",
        Apprehensive => "APH",
        Arbitrary => "ARB",
        Attentive => "ATE",
        Comedic => "CMD",
        Contensive => "CNV",
        Coincidental => "COI",
        Corruptive => "CRP",
        Corrective => "CRR",
        Contemptive => "CTP",
        Defiant => "DFD",
        Dismissive => "DIS",
        Delectative => "DLC",
        Dolorous => "DOL",
        Disappointive => "DPB",
        Derisive => "DRS",
        Dubitative => "DUB",
        Euphoric => "EUH",
        Euphemistic => "EUP",
        Exasperative => "EXA",
        Exigent => "EXG",
        Fortuitous => "FOR",
        Fascinative => "FSC",
        Gratificative => "GRT",
        Indignative => "IDG",
        Infatuative => "IFT",
        Implicative => "IPL",
        Impatient => "IPT",
        Ironic => "IRO",
        Insipid => "ISP",
        Invidious => "IVD",
        Mandatory => "MAN",
        Manipulative => "MNF",
        Optimal => "OPT",
        Pessimistic => "PES",
        Propitious => "PPT",
        Perplexive => "PPX",
        Perceptive => "PPV",
        Prosaic => "PSC",
        Presumptive => "PSM",
        Reactive => "RAC",
        Relief => "RLI",
        Renunciative => "RNC",
        Revelative => "RVL",
        Satiative => "SAT",
        Suggestive => "SGS",
        Skeptical => "SKP",
        Solicitative => "SOL",
        Stupefactive => "STU",
        Trepidative => "TRP",
        Vexative => "VEX",
    }
}

const BIAS_FORMS: [&str; 56] = [
    "lf", "mçt", "lļ", "drr", "lst", "řs", "čč", "xtļ", "ňj", "pļļ", "rrj", "šštļ", "gžž", "ňţ",
    "kšš", "gzj", "kff", "żmm", "řř", "ffx", "pfc", "mmf", "gzz", "vvt", "kçç", "rrs", "lzp",
    "žžj", "mmh", "pšš", "vvr", "vll", "žžv", "mmž", "lçp", "řřx", "msk", "pss", "ççs", "ksp",
    "mll", "llh", "sl", "žžt", "nnţ", "kll", "mmļ", "mst", "lţ", "ļţ", "ltç", "rnž", "ňňs", "ļļč",
    "llč", "ksk",
];

lazy_static! {
    static ref BIAS_INDEX: HashMap<&'static str, usize> = reverse_table(&BIAS_FORMS);
    static ref REGISTER_INITIAL_INDEX: HashMap<&'static str, usize> = reverse_table(&REGISTER_INITIAL);
    static ref REGISTER_FINAL_INDEX: HashMap<&'static str, usize> = reverse_table(&REGISTER_FINAL);
    static ref SUPPLETIVE_INDEX: HashMap<&'static str, usize> = reverse_table(&SUPPLETIVE_FORMS);
    static ref SCOPE_VOWEL_INDEX: HashMap<&'static str, usize> = reverse_table(&SCOPE_VOWELS);
    static ref SCOPE_CONSONANT_INDEX: HashMap<&'static str, usize> = reverse_table(&SCOPE_CONSONANTS);
    static ref MODULAR_SCOPE_INDEX: HashMap<&'static str, usize> = reverse_table(&MODULAR_SCOPE_VOWELS);
    static ref MODULAR_TARGET_INDEX: HashMap<&'static str, usize> = reverse_table(&MODULAR_TARGET_FORMS);
}

impl Bias {
    pub fn form(self) -> &'static str {
        BIAS_FORMS[self.index()]
    }

    pub fn parse(form: &str) -> Option<Self> {
        BIAS_INDEX.get(form).and_then(|&i| Bias::from_index(i))
    }
}

category! {
    Register {
        Discursive => "DSV",
        Parenthetical => "PNT",
        Specificative => "SPF",
        Exemplificative => "EXM",
        Cogitant => "CGT",
    }
}

const REGISTER_INITIAL: [&str; 5] = ["ha", "he", "hi", "ho", "hu"];
const REGISTER_FINAL: [&str; 5] = ["hai", "hei", "hiu", "hoi", "hui"];

/// Form closing any register.
pub const REGISTER_END: &str = "hü";

impl Register {
    pub fn initial_form(self) -> &'static str {
        REGISTER_INITIAL[self.index()]
    }

    pub fn final_form(self) -> &'static str {
        REGISTER_FINAL[self.index()]
    }

    /// Reads an initial or final form; the flag is true for finals.
    pub fn parse(form: &str) -> Option<(Self, bool)> {
        if let Some(&i) = REGISTER_INITIAL_INDEX.get(form) {
            return Register::from_index(i).map(|r| (r, false));
        }
        REGISTER_FINAL_INDEX
            .get(form)
            .and_then(|&i| Register::from_index(i))
            .map(|r| (r, true))
    }
}

category! {
    /// Tags that stand in for a referent list.
    Suppletive {
        Carrier => "CAR",
        Quotative => "QUO",
        Naming => "NAM",
        Phrasal => "PHR",
    }
}

const SUPPLETIVE_FORMS: [&str; 4] = ["hl", "hm", "hn", "hň"];

impl Suppletive {
    pub fn form(self) -> &'static str {
        SUPPLETIVE_FORMS[self.index()]
    }

    pub fn parse(form: &str) -> Option<Self> {
        SUPPLETIVE_INDEX.get(form).and_then(|&i| Suppletive::from_index(i))
    }
}

category! {
    /// What an affixual adjunct's affixes apply to.
    AffixualScope {
        SlotVDominant => "V:DOM",
        SlotVSubordinate => "V:SUB",
        SlotVIIDominant => "VII:DOM",
        SlotVIISubordinate => "VII:SUB",
        Formative => "FORMATIVE",
        Adjacent => "ADJACENT",
    }
}

impl Default for AffixualScope {
    fn default() -> Self {
        AffixualScope::SlotVDominant
    }
}

const SCOPE_VOWELS: [&str; 6] = ["a", "u", "e", "i", "o", "ö"];
const SCOPE_CONSONANTS: [&str; 6] = ["h", "hl", "hr", "hm", "hn", "hw"];

impl AffixualScope {
    /// Vs/Vz vowel; the default is elided when `elide` is set.
    pub fn vowel(self, elide: bool) -> &'static str {
        if elide && self == AffixualScope::SlotVDominant {
            ""
        } else {
            SCOPE_VOWELS[self.index()]
        }
    }

    /// Cz consonant joining the first affix of a multiple-affix adjunct.
    pub fn consonant(self) -> &'static str {
        SCOPE_CONSONANTS[self.index()]
    }

    pub fn parse_vowel(form: &str) -> Option<Self> {
        SCOPE_VOWEL_INDEX.get(form).and_then(|&i| AffixualScope::from_index(i))
    }

    pub fn parse_consonant(form: &str) -> Option<Self> {
        SCOPE_CONSONANT_INDEX.get(form).and_then(|&i| AffixualScope::from_index(i))
    }

    pub fn consonant_forms() -> &'static [&'static str] {
        &SCOPE_CONSONANTS
    }
}

category! {
    /// Scope of a modular adjunct's final Vh.
    ModularScope {
        Domain => "DOMAIN",
        Mood => "MOOD",
        CaseScope => "CASE",
        Formative => "FORMATIVE",
        Adjacent => "ADJACENT",
    }
}

const MODULAR_SCOPE_VOWELS: [&str; 5] = ["a", "e", "i", "o", "u"];

impl ModularScope {
    pub fn vowel(self) -> &'static str {
        MODULAR_SCOPE_VOWELS[self.index()]
    }

    pub fn parse(form: &str) -> Option<Self> {
        MODULAR_SCOPE_INDEX.get(form).and_then(|&i| ModularScope::from_index(i))
    }
}

category! {
    /// Cm: which formative a modular adjunct applies to.
    ModularTarget {
        Whole => "WHOLE",
        Parent => "PARENT",
        Concatenated => "CONCAT",
    }
}

impl Default for ModularTarget {
    fn default() -> Self {
        ModularTarget::Whole
    }
}

const MODULAR_TARGET_FORMS: [&str; 3] = ["", "w", "y"];

impl ModularTarget {
    pub fn form(self) -> &'static str {
        MODULAR_TARGET_FORMS[self.index()]
    }

    pub fn parse(form: &str) -> Option<Self> {
        MODULAR_TARGET_INDEX.get(form).and_then(|&i| ModularTarget::from_index(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_bias_forms_are_distinct() {
        assert_eq!(Bias::ALL.len(), BIAS_FORMS.len());
        let unique: HashSet<&str> = BIAS_FORMS.iter().copied().collect();
        assert_eq!(unique.len(), BIAS_FORMS.len());
        assert_eq!(Bias::parse("řř"), Some(Bias::Dolorous));
    }

    #[test]
    fn test_register_forms() {
        assert_eq!(Register::parse("hiu"), Some((Register::Specificative, true)));
        assert_eq!(Register::Cogitant.initial_form(), "hu");
    }

    #[test]
    fn test_scope_forms() {
        assert_eq!(AffixualScope::SlotVDominant.vowel(true), "");
        assert_eq!(AffixualScope::parse_consonant("hw"), Some(AffixualScope::Adjacent));
        assert_eq!(ModularScope::parse("i"), Some(ModularScope::CaseScope));
        assert_eq!(ModularTarget::parse(""), Some(ModularTarget::Whole));
        assert_eq!(ModularTarget::parse("y"), Some(ModularTarget::Concatenated));
        assert_eq!(Suppletive::parse("hň"), Some(Suppletive::Phrasal));
        for bias in Bias::ALL {
            assert_eq!(Bias::parse(bias.form()), Some(*bias));
        }
    }
}
