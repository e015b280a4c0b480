use ithkuil::affix::{Affix, AffixType};
use ithkuil::category::{
    Aspect, Case, Concatenation, Configuration, Context, Function, Illocution, MoodCaseScope,
    Perspective, Phase, Referent, ReferentEffect, ReferentTarget, Specification, Stem, Validation,
    Version, Vn,
};
use ithkuil::formative::Root;
use ithkuil::{analyze_formative, generate_formative, CaBundle, Formative, GenerationOptions, ShortcutPolicy};

fn sample_formatives() -> Vec<Formative> {
    vec![
        Formative::from_root("kl"),
        Formative::from_root("k"),
        Formative::from_root("rk").with_stem(Stem::S3).with_version(Version::Completive),
        Formative::from_root("st")
            .with_function(Function::Dynamic)
            .with_specification(Specification::Objective)
            .with_context(Context::Representational),
        Formative::from_root("kl").with_case(Case::Locative),
        Formative::from_root("kl")
            .with_concatenation(Concatenation::Type2)
            .with_case(Case::Locative),
        Formative::from_root("pr").with_illocution(Illocution::Directive, Validation::Observational),
        Formative::from_root("pr").with_illocution(Illocution::Assertive, Validation::Inferential),
        Formative::from_root("kl").framed(),
        Formative::from_root("kl")
            .with_ca(CaBundle::new().with_configuration(Configuration::Duplex))
            .with_slot_v(Affix::plain("rs", 1))
            .with_slot_vii(Affix::typed("ks", 7, AffixType::Two)),
        Formative::from_root("kl").with_ca(CaBundle::new().with_perspective(Perspective::Agglomerative)),
        Formative::from_root("kl")
            .with_vn(Vn::Phase(Phase::Iterative))
            .with_cn(MoodCaseScope::AsmCcs),
        Formative::from_root("kl").with_vn(Vn::Aspect(Aspect::Habitual)),
        Formative::from_root("kl").with_cn(MoodCaseScope::HypCcv),
        Formative::from_root("kl").with_slot_vii(Affix::plain("t", 5)),
        Formative::new(Root::Referential {
            referents: vec![Referent::new(ReferentTarget::MonadicSpeaker, ReferentEffect::Neutral)],
            perspective: Perspective::Monadic,
        }),
        Formative::new(Root::Affixual { cs: "rs".to_string(), degree: 2 }),
    ]
}

fn option_sets() -> Vec<GenerationOptions> {
    vec![
        GenerationOptions::new(),
        GenerationOptions::new().with_shortcuts(ShortcutPolicy::NONE),
        GenerationOptions::new().with_elide_vv(false),
    ]
}

#[test]
fn test_round_trip_up_to_defaulting() {
    for options in option_sets() {
        for formative in sample_formatives() {
            let word = generate_formative(&formative, &options).unwrap();
            let analysis = analyze_formative(&word)
                .unwrap_or_else(|e| panic!("{} failed to analyze: {}", word, e))
                .unwrap_or_else(|| panic!("{} was not recognized", word));
            let again = generate_formative(&analysis.value, &options).unwrap();
            assert_eq!(again, word, "{:?}", formative);
        }
    }
}

#[test]
fn test_analysis_recovers_the_record() {
    for formative in sample_formatives() {
        let word = generate_formative(&formative, &GenerationOptions::new()).unwrap();
        let analysis = analyze_formative(&word).unwrap().unwrap();
        assert_eq!(analysis.value, formative, "{}", word);
    }
}

#[test]
fn test_default_formative_takes_ca_shortcut() {
    let formative = Formative::from_root("k");
    let word = generate_formative(&formative, &GenerationOptions::new()).unwrap();
    assert_eq!(word, "waka");
    let analysis = analyze_formative(&word).unwrap().unwrap();
    assert_eq!(analysis.value, formative);
    assert_eq!(analysis.value.ca, CaBundle::new());
    assert_eq!(analysis.value.function, Function::Stative);
    assert_eq!(analysis.value.specification, Specification::Basic);
    assert_eq!(analysis.value.context, Context::Existential);
}

#[test]
fn test_shortcut_priority_combines_slot_vii_and_viii() {
    let formative = Formative::from_root("kl")
        .with_cn(MoodCaseScope::SubCca)
        .with_slot_vii(Affix::plain("r", 4));
    let word = generate_formative(&formative, &GenerationOptions::new()).unwrap();
    assert!(word.starts_with("çlw"), "{}", word);
    assert!(!word.starts_with('w'), "{}", word);
}

#[test]
fn test_policy_restricts_shortcuts() {
    let formative = Formative::from_root("kl").with_cn(MoodCaseScope::SubCca);
    let only_ca = GenerationOptions::new().with_shortcuts(ShortcutPolicy { ca: true, affix: false, cn: false });
    let word = generate_formative(&formative, &only_ca).unwrap();
    assert!(!word.starts_with('ç'), "{}", word);
}

#[test]
fn test_decomposition_covers_the_word() {
    let formative = Formative::from_root("kl")
        .with_ca(CaBundle::new().with_configuration(Configuration::Duplex))
        .with_slot_v(Affix::plain("rs", 1))
        .with_slot_vii(Affix::plain("ks", 2));
    let options = GenerationOptions::new().with_shortcuts(ShortcutPolicy::NONE).with_elide_vv(false);
    let word = generate_formative(&formative, &options).unwrap();
    let analysis = analyze_formative(&word).unwrap().unwrap();
    let surface: String = analysis.decomposition.morphemes.iter().map(|m| m.surface.as_str()).collect();
    assert_eq!(surface, word);

    let affix = analysis
        .decomposition
        .morphemes
        .iter()
        .find(|m| m.slot == "VII")
        .expect("slot VII morpheme");
    assert_eq!(affix.children.len(), 2);
}
