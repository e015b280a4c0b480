//! Property-based tests for the phonology and the formative codec.

use proptest::prelude::*;

use ithkuil::affix::{Affix, AffixType};
use ithkuil::ca::{encode_ca, encode_geminated_ca};
use ithkuil::category::{
    Aspect, Case, Concatenation, Context, Effect, Function, Illocution, Level, MoodCaseScope, Perspective,
    Phase, Referent, ReferentEffect, ReferentTarget, Specification, Stem, Valence, Validation, Version, Vn,
};
use ithkuil::phonology::{apply_stress, geminate_ca, has_geminate, normalize, Stress};
use ithkuil::{
    analyze_formative, analyze_word, generate_formative, CaBundle, Formative, GenerationOptions, Root,
    ShortcutPolicy, Word,
};

const ROOTS: [&str; 5] = ["kl", "pr", "st", "rk", "m"];

/// Includes the forms the Slot VII shortcut folds into the marker.
const AFFIX_FORMS: [&str; 5] = ["rs", "ks", "t", "r", "pl"];

fn all_vn() -> Vec<Vn> {
    let mut out: Vec<Vn> = Valence::ALL.iter().map(|v| Vn::Valence(*v)).collect();
    out.extend(Phase::ALL.iter().map(|v| Vn::Phase(*v)));
    out.extend(Effect::ALL.iter().map(|v| Vn::Effect(*v)));
    out.extend(Level::ALL.iter().map(|v| Vn::Level(*v)));
    out.extend(Aspect::ALL.iter().map(|v| Vn::Aspect(*v)));
    out
}

prop_compose! {
    fn arb_affix()(form in 0usize..AFFIX_FORMS.len(), degree in 1u8..=9, two in any::<bool>()) -> Affix {
        let kind = if two { AffixType::Two } else { AffixType::One };
        Affix::typed(AFFIX_FORMS[form], degree, kind)
    }
}

prop_compose! {
    fn arb_root()(
        pick in 0usize..4,
        plain in 0usize..ROOTS.len(),
        target in 0usize..ReferentTarget::ALL.len(),
        degree in 1u8..=9,
    ) -> Root {
        match pick {
            0 => Root::Referential {
                referents: vec![Referent::new(ReferentTarget::ALL[target], ReferentEffect::Neutral)],
                perspective: Perspective::Monadic,
            },
            1 => Root::Affixual { cs: "rs".to_string(), degree },
            _ => Root::Plain(ROOTS[plain].to_string()),
        }
    }
}

prop_compose! {
    fn arb_stem_slots()(
        stem in 0usize..Stem::ALL.len(),
        version in 0usize..Version::ALL.len(),
        function in 0usize..Function::ALL.len(),
        specification in 0usize..Specification::ALL.len(),
        context in 0usize..Context::ALL.len(),
    ) -> (Stem, Version, Function, Specification, Context) {
        (
            Stem::ALL[stem],
            Version::ALL[version],
            Function::ALL[function],
            Specification::ALL[specification],
            Context::ALL[context],
        )
    }
}

prop_compose! {
    fn arb_formative()(
        root in arb_root(),
        slots in arb_stem_slots(),
        ca in 0usize..3840,
        slot_v in prop::collection::vec(arb_affix(), 0..=2),
        slot_vii in prop::collection::vec(arb_affix(), 0..=2),
        vn in any::<usize>(),
        cn in 0usize..MoodCaseScope::ALL.len(),
        kind in 0usize..4,
        case in 0usize..Case::ALL.len(),
        illocution in 0usize..Illocution::ALL.len(),
    ) -> Formative {
        let (stem, version, function, specification, context) = slots;
        let vns = all_vn();
        let mut formative = Formative::new(root.clone())
            .with_stem(stem)
            .with_version(version)
            .with_function(function)
            .with_specification(specification)
            .with_context(context)
            .with_ca(CaBundle::all().nth(ca).unwrap_or_default())
            .with_vn(vns[vn % vns.len()])
            .with_cn(MoodCaseScope::ALL[cn]);
        formative.slot_v = slot_v;
        formative.slot_vii = slot_vii;
        match root {
            Root::Plain(_) => {}
            Root::Referential { .. } => formative.version = Version::Processual,
            Root::Affixual { .. } => {
                formative.stem = Stem::S1;
                formative.version = Version::Processual;
                formative.function = Function::Stative;
            }
        }
        let illocution = Illocution::ALL[illocution];
        let validation = if illocution == Illocution::Assertive {
            Validation::ALL[case % Validation::ALL.len()]
        } else {
            Validation::Observational
        };
        match kind {
            0 => formative.with_case(Case::ALL[case]),
            1 => formative.with_illocution(illocution, validation),
            2 => formative.with_case(Case::ALL[case]).framed(),
            _ => formative
                .with_concatenation(Concatenation::ALL[case % Concatenation::ALL.len()])
                .with_case(Case::ALL[case]),
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn normalize_is_idempotent(text in "[a-zäëöüáéíóúâêôûàèìòùAKL'ţḑňřļšžčç]{0,16}") {
        let once = normalize(&text);
        let twice = normalize(&once.text);
        prop_assert_eq!(twice.text, once.text);
    }

    #[test]
    fn formatives_round_trip_up_to_defaulting(
        root in 0usize..ROOTS.len(),
        stem in 0usize..Stem::ALL.len(),
        version in 0usize..Version::ALL.len(),
        function in 0usize..Function::ALL.len(),
        specification in 0usize..Specification::ALL.len(),
        context in 0usize..Context::ALL.len(),
        ca in 0usize..3840,
        case in 0usize..Case::ALL.len(),
    ) {
        let bundle = CaBundle::all().nth(ca).unwrap_or_default();
        let formative = Formative::from_root(ROOTS[root])
            .with_stem(Stem::ALL[stem])
            .with_version(Version::ALL[version])
            .with_function(Function::ALL[function])
            .with_specification(Specification::ALL[specification])
            .with_context(Context::ALL[context])
            .with_ca(bundle)
            .with_case(Case::ALL[case]);
        let options = GenerationOptions::new();
        let word = generate_formative(&formative, &options).unwrap();
        let analysis = analyze_formative(&word).unwrap().unwrap();
        prop_assert_eq!(generate_formative(&analysis.value, &options).unwrap(), word);
    }

    #[test]
    fn full_formatives_read_back_as_formatives(
        formative in arb_formative(),
        ca in any::<bool>(),
        affix in any::<bool>(),
        cn in any::<bool>(),
        elide_vv in any::<bool>(),
    ) {
        prop_assume!(formative.validate().is_ok());
        let options = GenerationOptions::new()
            .with_shortcuts(ShortcutPolicy { ca, affix, cn })
            .with_elide_vv(elide_vv);
        let word = generate_formative(&formative, &options).unwrap();
        match analyze_word(&word) {
            Ok(Some(analysis)) => match analysis.value {
                Word::Formative(read) => {
                    prop_assert_eq!(generate_formative(&read, &options).unwrap(), word);
                }
                other => prop_assert!(false, "{} read as {:?}", word, other),
            },
            other => prop_assert!(false, "{} was not read back: {:?}", word, other),
        }
    }
}

#[test]
fn every_ca_bundle_geminates() {
    let mut count = 0;
    for bundle in CaBundle::all() {
        let geminated = encode_geminated_ca(&bundle).unwrap();
        assert!(has_geminate(&geminated), "{} -> {}", encode_ca(&bundle), geminated);
        count += 1;
    }
    assert_eq!(count, 3840);
}

#[test]
fn gemination_examples() {
    assert_eq!(geminate_ca("k").unwrap(), "kk");
    assert_eq!(geminate_ca("pt").unwrap(), "bbḑ");
}

#[test]
fn stress_boundary_on_monosyllables() {
    assert!(apply_stress("ka", Stress::Ultimate).is_ok());
    assert!(apply_stress("ka", Stress::Penultimate).is_err());
}
