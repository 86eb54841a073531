use super::*;

fn engine() -> MatchEngine {
    MatchEngine::default()
}

#[test]
fn empty_query_matches_everything_at_zero() {
    let eng = engine();
    for key in ["", "a", "Spotify", "two words"] {
        let eval = eng.evaluate("", key);
        assert!(eval.matched, "empty query should match {key:?}");
        assert_eq!(eval.score, 0.0);
    }
}

#[test]
fn empty_key_rejects_non_empty_query() {
    let eval = engine().evaluate("a", "");
    assert!(!eval.matched);
    assert_eq!(eval.score, 0.0);
}

#[test]
fn query_longer_than_key_never_matches() {
    assert!(!engine().evaluate("abcd", "abc").matched);
}

#[test]
fn non_subsequence_rejected() {
    let eng = engine();
    assert!(!eng.evaluate("ba", "ab").matched);
    assert!(!eng.evaluate("xyz", "hello").matched);
}

#[test]
fn exact_match_earns_full_adjacency_run() {
    // "ab" on "ab": no leading or unmatched chars, one adjacency bonus.
    let eval = engine().evaluate("ab", "ab");
    assert!(eval.matched);
    assert_eq!(eval.score, 5.0);
}

#[test]
fn repeated_key_char_picks_the_adjacent_placement() {
    // Greedy left-to-right would take the first `a` (score -1); the optimal
    // alignment takes the second `a` for adjacency credit.
    let eval = engine().evaluate("ab", "aab");
    assert!(eval.matched);
    assert_eq!(eval.score, 1.0);

    // And the adjacent placement must beat a true gap.
    let gapped = engine().evaluate("ab", "axb");
    assert!(gapped.matched);
    assert!(eval.score > gapped.score);
}

#[test]
fn separator_credit_beats_plain_adjacency() {
    // Defaults: `a-b` = 0 leading - 1 unmatched + 10 separator = 9.
    let eval = engine().evaluate("ab", "a-b");
    assert!(eval.matched);
    assert_eq!(eval.score, 9.0);
    assert!(eval.score > engine().evaluate("ab", "aab").score);
}

#[test]
fn camel_boundary_prefers_the_later_placement() {
    // "ob" on "FooBar": the second `o` sets up `B` for adjacency + camel.
    // Greedy (first `o`) would land at 3.0.
    let eval = engine().evaluate("ob", "FooBar");
    assert!(eval.matched);
    assert_eq!(eval.score, 5.0);
}

#[test]
fn leading_penalty_caps_at_the_floor() {
    // Five leading chars would accrue -15; the default floor stops at -9.
    // Plus five unmatched chars at -1 each.
    let eval = engine().evaluate("d", "xxxxxd");
    assert!(eval.matched);
    assert_eq!(eval.score, -14.0);
}

#[test]
fn matching_is_case_insensitive() {
    let eng = engine();
    let lower = eng.evaluate("ab", "ab");
    for (query, key) in [("AB", "ab"), ("ab", "AB"), ("aB", "Ab")] {
        let eval = eng.evaluate(query, key);
        assert!(eval.matched, "{query:?} should match {key:?}");
        assert_eq!(eval.score, lower.score);
    }
}

#[test]
fn unicode_keys_match_folded() {
    let eval = engine().evaluate("é", "CAFÉ");
    assert!(eval.matched);
    assert!(engine().evaluate("tf", "ToDo—fertig").matched);
}

#[test]
fn trailing_suffix_is_penalized() {
    // Identical match, longer unmatched tail, strictly lower score.
    let short = engine().evaluate("ab", "ab");
    let long = engine().evaluate("ab", "abxx");
    assert!(long.matched);
    assert_eq!(long.score, short.score - 2.0);
}

#[test]
fn evaluation_is_deterministic() {
    let eng = engine();
    let first = eng.evaluate("spo", "Spotify — music player");
    for _ in 0..10 {
        assert_eq!(eng.evaluate("spo", "Spotify — music player"), first);
    }
}

#[test]
fn scratch_reuse_matches_one_off_evaluation() {
    let eng = engine();
    let mut scratch = Scratch::new();
    for (query, key) in [
        ("ab", "aab"),
        ("ob", "FooBar"),
        ("", "anything"),
        ("zz", "zebra"),
        ("ab", "a-b"),
    ] {
        assert_eq!(
            eng.evaluate_with(&mut scratch, query, key),
            eng.evaluate(query, key),
            "scratch reuse diverged on {query:?} / {key:?}"
        );
    }
}

#[test]
fn custom_weights_flow_through() {
    let model = ScoreModel {
        separator_bonus: 15.0,
        max_leading_letter_penalty: -6.0,
        ..ScoreModel::default()
    };
    let eng = MatchEngine::new(model).expect("model should be valid");
    assert_eq!(eng.evaluate("ab", "a-b").score, 14.0);
    // Floor now -6 instead of -9.
    assert_eq!(eng.evaluate("d", "xxxxxd").score, -11.0);
}

#[test]
fn invalid_model_rejected_at_construction() {
    let model = ScoreModel {
        leading_letter_penalty: -3.0,
        max_leading_letter_penalty: -2.0,
        ..ScoreModel::default()
    };
    assert!(MatchEngine::new(model).is_err());
}
