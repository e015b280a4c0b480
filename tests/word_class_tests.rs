use ithkuil::adjunct::{ModularSlot, RegisterAdjunct};
use ithkuil::affix::Affix;
use ithkuil::category::{
    AffixualScope, Aspect, Bias, Case, ModularScope, ModularTarget, MoodCaseScope, Perspective, Referent,
    ReferentEffect, ReferentTarget, Register, Suppletive, Valence, Vn,
};
use ithkuil::{
    analyze_adjunct, analyze_formative, analyze_referential, analyze_word, generate_word, Adjunct, CaBundle,
    Formative, GenerationOptions, Referential, Stress, Word, WordClass,
};

fn speaker() -> Vec<Referent> {
    vec![Referent::new(ReferentTarget::MonadicSpeaker, ReferentEffect::Neutral)]
}

fn sample_words() -> Vec<(Word, WordClass)> {
    vec![
        (Word::Formative(Formative::from_root("kl")), WordClass::Formative),
        (
            Word::Formative(Formative::from_root("kl").with_ca(CaBundle::new().with_perspective(Perspective::Agglomerative))),
            WordClass::Formative,
        ),
        (
            Word::Formative(Formative::from_root("kl").with_slot_vii(Affix::plain("ks", 2))),
            WordClass::Formative,
        ),
        (Word::Referential(Referential::new(speaker(), Perspective::Monadic)), WordClass::Referential),
        (
            Word::Referential(
                Referential::suppletive(Suppletive::Naming).with_second(speaker(), Perspective::Monadic, Case::Ergative),
            ),
            WordClass::Referential,
        ),
        (Word::Adjunct(Adjunct::Parsing(Stress::Ultimate)), WordClass::ParsingAdjunct),
        (Word::Adjunct(Adjunct::Register(RegisterAdjunct::Initial(Register::Cogitant))), WordClass::RegisterAdjunct),
        (Word::Adjunct(Adjunct::Numeral(42)), WordClass::NumericAdjunct),
        (Word::Adjunct(Adjunct::Bias(Bias::Dolorous)), WordClass::BiasAdjunct),
        (
            Word::Adjunct(Adjunct::Suppletive { kind: Suppletive::Carrier, case: Case::Absolutive }),
            WordClass::SuppletiveAdjunct,
        ),
        (
            Word::Adjunct(Adjunct::Modular {
                target: ModularTarget::Whole,
                slots: vec![
                    ModularSlot::new(Vn::Valence(Valence::Corollary)).with_cn(MoodCaseScope::SubCca),
                    ModularSlot::new(Vn::Aspect(Aspect::Habitual)),
                ],
                scope: None,
            }),
            WordClass::ModularAdjunct,
        ),
        (
            Word::Adjunct(Adjunct::Modular {
                target: ModularTarget::Concatenated,
                slots: vec![ModularSlot::new(Vn::Valence(Valence::Parallel))],
                scope: Some(ModularScope::CaseScope),
            }),
            WordClass::ModularAdjunct,
        ),
        (
            Word::Adjunct(Adjunct::SingleAffix {
                affix: Affix::plain("ks", 3),
                scope: AffixualScope::SlotVIIDominant,
                concatenated_only: false,
            }),
            WordClass::SingleAffixAdjunct,
        ),
        (
            Word::Adjunct(Adjunct::MultiAffix {
                first: Affix::plain("ks", 1),
                first_scope: AffixualScope::Formative,
                rest: vec![Affix::plain("rs", 4), Affix::plain("t", 2)],
                scope: AffixualScope::Adjacent,
                concatenated_only: true,
            }),
            WordClass::MultipleAffixAdjunct,
        ),
    ]
}

#[test]
fn test_generated_words_read_back_in_their_own_class() {
    let options = GenerationOptions::new();
    for (word, class) in sample_words() {
        let text = generate_word(&word, &options).unwrap();
        let analysis = analyze_word(&text)
            .unwrap_or_else(|e| panic!("{} failed to analyze: {}", text, e))
            .unwrap_or_else(|| panic!("{} was not recognized", text));
        assert_eq!(analysis.decomposition.class, class, "{}", text);
        assert_eq!(analysis.value, word, "{}", text);
    }
}

#[test]
fn test_garbage_is_no_match_for_every_class() {
    assert_eq!(analyze_formative("qqq123"), Ok(None));
    assert_eq!(analyze_referential("qqq123"), Ok(None));
    assert_eq!(analyze_adjunct("qqq123"), Ok(None));
    assert_eq!(analyze_word("qqq123"), Ok(None));
}

#[test]
fn test_word_serializes_with_class_tag() {
    let word = Word::Adjunct(Adjunct::Numeral(7));
    let json = serde_json::to_string(&word).unwrap();
    assert!(json.contains("\"class\":\"Adjunct\""), "{}", json);
    let back: Word = serde_json::from_str(&json).unwrap();
    assert_eq!(back, word);
}

#[test]
fn test_affixual_adjunct_glosses_affix_parts() {
    let analysis = analyze_word("äks").unwrap().unwrap();
    let affix = &analysis.decomposition.morphemes[0];
    assert_eq!(affix.children.len(), 2);
    assert_eq!(affix.children[0].surface, "ä");
    assert_eq!(affix.children[1].surface, "ks");
}
