//! Slot IX categories: case, illocution and validation

use crate::vowel::VowelForm;

category! {
    Case {
        Thematic => "THM",
        Instrumental => "INS",
        Absolutive => "ABS",
        Affective => "AFF",
        Stimulative => "STM",
        Effectuative => "EFF",
        Ergative => "ERG",
        Dative => "DAT",
        Inducive => "IND",
        Possessive => "POS",
        Proprietive => "PRP",
        Genitive => "GEN",
        Attributive => "ATT",
        Productive => "PDC",
        Interpretive => "ITP",
        Originative => "OGN",
        Interdependent => "IDP",
        Partitive => "PAR",
        Applicative => "APL",
        Purposive => "PUR",
        Transmissive => "TRA",
        Deferential => "DFR",
        Contrastive => "CRS",
        Transpositive => "TSP",
        Commutative => "CMM",
        Comparative => "CMP",
        Considerative => "CSD",
        Functive => "FUN",
        Transformative => "TFM",
        Classificative => "CLA",
        Resultative => "RSL",
        Consumptive => "CSM",
        Concessive => "CON",
        Aversive => "AVR",
        Conversive => "CVS",
        Situative => "SIT",
        Pertinential => "PRN",
        Descriptive => "DSP",
        Correlative => "COR",
        Compositive => "CPS",
        Comitative => "COM",
        Utilitative => "UTL",
        Predicative => "PRD",
        Relative => "RLT",
        Activative => "ACT",
        Assimilative => "ASI",
        Essive => "ESS",
        Terminative => "TRM",
        Selective => "SEL",
        Conformative => "CFM",
        Dependent => "DEP",
        Vocative => "VOC",
        Locative => "LOC",
        Attendant => "ATD",
        Allative => "ALL",
        Ablative => "ABL",
        Orientative => "ORI",
        InterRelative => "IRL",
        Intrative => "INV",
        Navigative => "NAV",
        Concursive => "CNR",
        Assessive => "ASS",
        Periodic => "PER",
        Prolapsive => "PRO",
        Precursive => "PCV",
        Postcursive => "PCR",
        Elapsive => "ELP",
        Prolimitive => "PLM",
    }
}

impl Default for Case {
    fn default() -> Self {
        Case::Thematic
    }
}

/// Degrees 1–4 and 6–9, used where degree 5 is unavailable.
fn skip_five(step: usize) -> u8 {
    let degree = step as u8 + 1;
    if degree >= 5 {
        degree + 1
    } else {
        degree
    }
}

fn unskip_five(degree: u8) -> Option<usize> {
    match degree {
        1..=4 => Some(degree as usize - 1),
        6..=9 => Some(degree as usize - 2),
        _ => None,
    }
}

impl Case {
    /// True for the second half of the table (cases 37–68).
    pub fn is_extended(self) -> bool {
        self.index() >= 36
    }

    /// Vowel form; the second half shares vowels with degree 5 skipped and
    /// is told apart by a glottal stop or stress.
    pub fn vowel_form(self) -> VowelForm {
        let i = self.index();
        if i < 36 {
            VowelForm::new((i / 9) as u8 + 1, (i % 9) as u8 + 1)
        } else {
            let j = i - 36;
            VowelForm::new((j / 8) as u8 + 1, skip_five(j % 8))
        }
    }

    pub fn from_vowel_form(form: VowelForm, extended: bool) -> Option<Self> {
        if !form.is_valid() || form.degree == 0 {
            return None;
        }
        let series = form.series as usize - 1;
        if extended {
            unskip_five(form.degree).and_then(|step| Case::from_index(36 + series * 8 + step))
        } else {
            Case::from_index(series * 9 + form.degree as usize - 1)
        }
    }
}

category! {
    Illocution {
        Assertive => "ASR",
        Directive => "DIR",
        Declarative => "DEC",
        Interrogative => "IRG",
        Verificative => "VER",
        Admonitive => "ADM",
        Potentiative => "POT",
        Hortative => "HOR",
        Conjectural => "CNJ",
    }
}

category! {
    Validation {
        Observational => "OBS",
        Recollective => "REC",
        Purportive => "PUP",
        Reportive => "RPR",
        Unspecified => "USP",
        Imaginary => "IMA",
        Conventional => "CVN",
        Intuitive => "ITU",
        Inferential => "INF",
    }
}

impl Default for Illocution {
    fn default() -> Self {
        Illocution::Assertive
    }
}

impl Default for Validation {
    fn default() -> Self {
        Validation::Observational
    }
}

/// Vk form for an illocution and validation.
///
/// Only the assertive shows validation; other illocutions require the
/// default, which is then left unwritten. Returns `None` otherwise.
pub fn vk_form(illocution: Illocution, validation: Validation) -> Option<VowelForm> {
    if illocution == Illocution::Assertive {
        return Some(VowelForm::new(1, validation.index() as u8 + 1));
    }
    if validation != Validation::Observational {
        return None;
    }
    Some(VowelForm::new(2, skip_five(illocution.index() - 1)))
}

pub fn parse_vk(form: VowelForm) -> Option<(Illocution, Validation)> {
    match form.series {
        1 if form.degree >= 1 => {
            Validation::from_index(form.degree as usize - 1).map(|v| (Illocution::Assertive, v))
        }
        2 => unskip_five(form.degree)
            .and_then(|step| Illocution::from_index(step + 1))
            .map(|i| (i, Validation::Observational)),
        _ => None,
    }
}
