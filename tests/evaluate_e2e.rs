use kyroeval::{
    AnalysisMode, ClaimSupport, ConsensusVerdict, Coordinator, EvaluationConfig,
    EvaluationInput, Query, Source, SourceType,
};

fn coordinator() -> Coordinator {
    Coordinator::default()
}

#[test]
fn tariff_question_with_strong_support() {
    let input = EvaluationInput::new(
        vec![Source::academic("NBER w24412", ClaimSupport::Supports)],
        Query::new("do tariffs increase prices?")
            .with_factors(["causal", "multi-variable", "trend"]),
        "do tariffs increase prices?",
    )
    .with_premises(["Supply and demand govern prices."]);

    let result = coordinator().run(&input).unwrap();

    assert_eq!(result.confidence, 1.0);
    assert_eq!(result.mode, AnalysisMode::Deep);
    assert_eq!(result.consensus, ConsensusVerdict::Consensus);
    assert_eq!(
        result.conclusion,
        "Supply and demand govern prices. Data suggests do tariffs increase prices? strongly likely"
    );
}

#[test]
fn weak_dissent_does_not_block_consensus() {
    let input = EvaluationInput::new(
        vec![
            Source::academic("journal", ClaimSupport::Supports),
            Source::blog("hot take", ClaimSupport::Disputes),
        ],
        Query::new("X"),
        "X",
    );

    let result = coordinator().run(&input).unwrap();

    assert_eq!(result.consensus, ConsensusVerdict::Consensus);
    assert_eq!(result.mode, AnalysisMode::Light);
    assert!((result.confidence - 0.65).abs() < 1e-6);
    assert_eq!(result.conclusion, "Data suggests X possibly");
    assert!(!result.conclusion.contains("therefore"));
}

#[test]
fn no_sources_is_insufficient_data() {
    let input = EvaluationInput::new(
        Vec::new(),
        Query::new("anything at all").with_factor("causal"),
        "",
    )
    .with_premises(["A", "B"]);

    let err = coordinator().run(&input).unwrap_err();
    assert!(err.is_insufficient_data());
    assert!(!err.is_retryable());
}

#[test]
fn strong_disagreement_softens_the_conclusion() {
    let input = EvaluationInput::new(
        vec![
            Source::primary("customs data", ClaimSupport::Supports),
            Source::news("wire report", ClaimSupport::Disputes),
            Source::academic("meta-analysis", ClaimSupport::Supports),
        ],
        Query::new("did the 2018 tariffs raise consumer prices?")
            .with_factors(["causal", "multi-variable", "trend", "policy"]),
        "the 2018 tariffs raised consumer prices",
    )
    .with_premises([
        "Tariffs raise import costs.",
        "Importers pass costs to consumers.",
        "Consumer prices rise.",
    ]);

    let result = coordinator().run(&input).unwrap();

    assert_eq!(result.mode, AnalysisMode::Deep);
    assert_eq!(result.consensus, ConsensusVerdict::NoConsensus);
    assert_eq!(
        result.conclusion,
        "Tariffs raise import costs. and Importers pass costs to consumers. therefore \
         Consumer prices rise. Data suggests the 2018 tariffs raised consumer prices likely"
    );
}

#[test]
fn only_weak_sources_are_inconclusive() {
    let input = EvaluationInput::new(
        vec![
            Source::blog("a", ClaimSupport::Supports),
            Source::other("b", ClaimSupport::Supports),
        ],
        Query::new("is coffee healthy?").with_factor("health"),
        "coffee is healthy",
    );

    let result = coordinator().run(&input).unwrap();

    assert_eq!(result.consensus, ConsensusVerdict::InsufficientData);
    assert!((result.confidence - 0.25).abs() < 1e-6);
    assert_eq!(result.conclusion, "Data suggests coffee is healthy inconclusive");
}

#[test]
fn results_are_deterministic() {
    let input = EvaluationInput::new(
        vec![
            Source::news("n", ClaimSupport::Neutral),
            Source::academic("a", ClaimSupport::Supports),
        ],
        Query::new("one two three four five six seven eight nine ten eleven"),
        "claim",
    );
    let c = coordinator();
    let first = c.run(&input).unwrap();
    for _ in 0..8 {
        assert_eq!(c.run(&input).unwrap(), first);
    }
}

#[test]
fn confidence_is_bounded_for_all_type_mixes() {
    let c = coordinator();
    for a in SourceType::ALL {
        for b in SourceType::ALL {
            for s in [ClaimSupport::Supports, ClaimSupport::Disputes, ClaimSupport::Neutral] {
                let input = EvaluationInput::new(
                    vec![Source::new("a", a, s), Source::new("b", b, ClaimSupport::Supports)],
                    Query::new("q"),
                    "c",
                );
                let result = c.run(&input).unwrap();
                assert!((0.0..=1.0).contains(&result.confidence));
                assert!(!result.conclusion.is_empty());
            }
        }
    }
}

#[test]
fn configured_weights_change_the_outcome() {
    let config = EvaluationConfig::from_json(r#"{"weights": {"blog": 0.8}}"#).unwrap();
    let input = EvaluationInput::new(
        vec![
            Source::academic("journal", ClaimSupport::Supports),
            Source::blog("hot take", ClaimSupport::Disputes),
        ],
        Query::new("X"),
        "X",
    );

    let result = Coordinator::from_config(&config).run(&input).unwrap();

    assert!((result.confidence - 0.9).abs() < 1e-6);
    assert_eq!(result.consensus, ConsensusVerdict::NoConsensus);
    assert_eq!(result.conclusion, "Data suggests X inconclusive");
}
