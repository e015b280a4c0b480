//! Formative composition
//!
//! Writes the slots left to right. Three shortcuts can shorten a formative;
//! at most one family applies, chosen in priority order Slot VIII, Slot VII,
//! then Slot IV/VI.

use tracing::debug;

use super::{vii_shortcut_letter, Formative, Root, SlotIx, CN_SHORTCUT_LETTERS};
use crate::affix::encode_affix;
use crate::ca::{encode_ca, encode_geminated_ca, shortcut_for};
use crate::category::case::vk_form;
use crate::category::referent::encode_referents;
use crate::category::slots::{cc_form, stem_version_degree, vr_degree};
use crate::category::{CaShortcut, Context, Function, MoodCaseScope, Specification, Vn};
use crate::config::{GenerationOptions, ShortcutPolicy};
use crate::error::{CodecError, Result};
use crate::phonology::{count_nuclei, is_legal_word_initial, mark_stress};
use crate::vowel::{insert_glottal_stop, VowelForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShortcutPlan {
    None,
    /// Ca folded into Slot I and the Vv series.
    Ca { shortcut: CaShortcut, series: u8 },
    /// `ç` marker carrying Cn and/or the last Slot VII affix.
    Cn { cn: Option<MoodCaseScope>, vii: Option<&'static str> },
}

impl ShortcutPlan {
    fn choose(f: &Formative, policy: &ShortcutPolicy) -> Self {
        let standalone = f.concatenation.is_none();
        let cn = (policy.cn && standalone && f.vn == Vn::default() && f.cn != MoodCaseScope::default())
            .then_some(f.cn);
        let vii = if policy.affix && standalone {
            f.slot_vii.last().and_then(vii_shortcut_letter)
        } else {
            None
        };
        if cn.is_some() || vii.is_some() {
            return ShortcutPlan::Cn { cn, vii };
        }

        let ca_eligible = matches!(f.root, Root::Plain(_))
            && f.function == Function::Stative
            && f.specification == Specification::Basic
            && f.context == Context::Existential;
        if policy.ca && ca_eligible {
            if let Some((shortcut, series)) = shortcut_for(&f.ca) {
                return ShortcutPlan::Ca { shortcut, series };
            }
        }
        ShortcutPlan::None
    }
}

fn last_letter(word: &str) -> Option<char> {
    word.chars().last()
}

fn push_vowel(word: &mut String, form: VowelForm, glottal_stop: bool, word_final: bool) {
    let rendered = form.render(last_letter(word));
    if glottal_stop {
        word.push_str(&insert_glottal_stop(rendered, word_final));
    } else {
        word.push_str(rendered);
    }
}

fn root_form(root: &Root) -> String {
    match root {
        Root::Plain(cr) => cr.clone(),
        Root::Referential { referents, perspective } => encode_referents(referents, *perspective),
        Root::Affixual { cs, .. } => cs.clone(),
    }
}

fn vv_form(f: &Formative, series: u8) -> VowelForm {
    match f.root {
        Root::Plain(_) => VowelForm::new(series, stem_version_degree(f.stem, f.version)),
        Root::Referential { .. } => VowelForm::new(f.stem.series(), 0),
        Root::Affixual { .. } => VowelForm::new(f.specification.series(), 5),
    }
}

fn vr_form(f: &Formative) -> VowelForm {
    match f.root {
        Root::Affixual { degree, .. } => VowelForm::new(f.context.series(), degree),
        _ => VowelForm::new(f.context.series(), vr_degree(f.function, f.specification)),
    }
}

/// Writes a formative, stress included.
pub fn generate_formative(f: &Formative, options: &GenerationOptions) -> Result<String> {
    f.validate()?;
    let plan = ShortcutPlan::choose(f, &options.shortcuts);
    debug!(?plan, root = ?f.root, "composing formative");
    match compose(f, options, plan) {
        // The Ca shortcut drops Vr, which framed formatives may need for stress.
        Err(CodecError::StressUnavailable { .. }) if matches!(plan, ShortcutPlan::Ca { .. }) => {
            debug!("Ca shortcut leaves too few nuclei; writing Ca in full");
            compose(f, options, ShortcutPlan::None)
        }
        result => result,
    }
}

fn compose(f: &Formative, options: &GenerationOptions, plan: ShortcutPlan) -> Result<String> {
    let mut head = String::new();

    // Slot I
    match plan {
        ShortcutPlan::Cn { cn, vii } => {
            head.push('ç');
            if let Some(cn) = cn {
                head.push_str(CN_SHORTCUT_LETTERS[cn.index()]);
            }
            if let Some(letter) = vii {
                head.push_str(letter);
            }
        }
        ShortcutPlan::Ca { shortcut, .. } => head.push_str(cc_form(f.concatenation, Some(shortcut))),
        ShortcutPlan::None => head.push_str(cc_form(f.concatenation, None)),
    }

    // Slot III; Slot II is written last, once elision can be decided.
    let cr = root_form(&f.root);
    let mut word = cr.clone();

    // Slots IV to VII
    let slot_vii = match plan {
        ShortcutPlan::Cn { vii: Some(_), .. } => &f.slot_vii[..f.slot_vii.len() - 1],
        _ => &f.slot_vii[..],
    };
    if let ShortcutPlan::Ca { .. } = plan {
        for (i, affix) in f.slot_v.iter().chain(slot_vii.iter()).enumerate() {
            let closes_slot_v = !slot_vii.is_empty() && i + 1 == f.slot_v.len();
            let text = encode_affix(affix, false, closes_slot_v, last_letter(&word))?;
            word.push_str(&text);
        }
    } else {
        push_vowel(&mut word, vr_form(f), false, false);
        for affix in &f.slot_v {
            word.push_str(&encode_affix(affix, true, false, None)?);
        }
        let ca = if f.slot_v.is_empty() { encode_ca(&f.ca) } else { encode_geminated_ca(&f.ca)? };
        word.push_str(&ca);
        for affix in slot_vii {
            let text = encode_affix(affix, false, false, last_letter(&word))?;
            word.push_str(&text);
        }
    }

    // Slot VIII
    let cn_in_marker = matches!(plan, ShortcutPlan::Cn { cn: Some(_), .. });
    if !cn_in_marker && !(f.vn == Vn::default() && f.cn == MoodCaseScope::default()) {
        push_vowel(&mut word, f.vn.vowel_form(), false, false);
        word.push_str(f.cn.form(f.vn.is_aspect(), false));
    }

    // Slot IX
    let (vc, glottal_stop) = match f.slot_ix {
        SlotIx::Case(case) => (case.vowel_form(), case.is_extended() && f.concatenation.is_none()),
        SlotIx::Illocution { illocution, validation } => {
            let vk = vk_form(illocution, validation).ok_or_else(|| {
                CodecError::record(format!("{} illocution cannot show {} validation", illocution, validation))
            })?;
            (vk, false)
        }
    };
    push_vowel(&mut word, vc, glottal_stop, true);

    // Slot II
    let series = match plan {
        ShortcutPlan::Ca { series, .. } => series,
        _ => 1,
    };
    let vv = vv_form(f, series);
    let stress = f.stress();
    let elide = options.elide_vv
        && plan == ShortcutPlan::None
        && f.concatenation.is_none()
        && matches!(f.root, Root::Plain(_))
        && vv == VowelForm::new(1, 1)
        && count_nuclei(&word) >= stress.position()
        && is_legal_word_initial(&cr);
    let mut full = head;
    if !elide {
        let marks_slot_v = matches!(plan, ShortcutPlan::Ca { .. }) && !f.slot_v.is_empty();
        push_vowel(&mut full, vv, marks_slot_v, false);
    }
    full.push_str(&word);

    // Slot X
    mark_stress(&full, stress)
}
