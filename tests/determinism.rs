use fuzzrank::{MatchEngine, MatchResult, Ranker, Ranking, ScoreModel};

/// Deterministic mixed-shape corpus, large enough to cross the parallel
/// ranking cutover.
fn synthetic_keys(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| match i % 4 {
            0 => format!("notes/project-{i}/readme"),
            1 => format!("AppBundle{i} viewer"),
            2 => format!("system tool {i}"),
            _ => format!("misc_{i}_archive"),
        })
        .collect()
}

#[test]
fn repeated_evaluation_is_identical() {
    let engine = MatchEngine::new(ScoreModel::default()).expect("default model");
    let first = engine.evaluate("prj", "notes/project-12/readme");
    for _ in 0..50 {
        assert_eq!(engine.evaluate("prj", "notes/project-12/readme"), first);
    }
}

#[test]
fn repeated_ranking_is_identical() {
    let ranker = Ranker::default();
    let keys = synthetic_keys(64);
    let first = ranker.rank("ar", &keys);
    for _ in 0..5 {
        assert_eq!(ranker.rank("ar", &keys), first);
    }
}

#[test]
fn large_collection_ranking_matches_per_key_evaluation() {
    // 1000 candidates is well past the internal parallel cutover, so with
    // the `parallel` feature on this exercises the rayon path. The output
    // must be indistinguishable from evaluating each key one at a time.
    let keys = synthetic_keys(1000);
    let engine = MatchEngine::new(ScoreModel::default()).expect("default model");
    let expected: Ranking = keys
        .iter()
        .enumerate()
        .map(|(index, key)| {
            let eval = engine.evaluate("are", key);
            MatchResult {
                index,
                score: if eval.matched { eval.score } else { 0.0 },
                matched: eval.matched,
            }
        })
        .collect();

    let ranking = Ranker::default().rank("are", &keys);
    assert_eq!(ranking, expected);
}

#[test]
fn custom_weights_stay_deterministic() {
    let model = ScoreModel {
        separator_bonus: 15.0,
        max_leading_letter_penalty: -6.0,
        ..ScoreModel::default()
    };
    let ranker = Ranker::new(model).expect("model should be valid");
    let keys = synthetic_keys(300);
    assert_eq!(ranker.rank("sys", &keys), ranker.rank("sys", &keys));
}
