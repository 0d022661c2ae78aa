use editwise::{
    distances_from, edit_script, edit_script_text, lcs_length, lcs_string, levenshtein,
    levenshtein_bounded, levenshtein_detailed, CommandCounter, Distance, EditDistanceFrom,
    LcsDistance, LevenshteinDetailedDistance, LevenshteinDistance, LongestCommonSubsequence,
    MetricConfig, Score, ScriptApplier, SequenceMetric, SimilarityError, TextMetric,
};
use proptest::prelude::*;

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[test]
fn test_levenshtein_threshold_scenarios() {
    let cases: &[(&str, &str, usize, Option<usize>)] = &[
        ("", "", 0, Some(0)),
        ("aa", "", 2, Some(2)),
        ("aa", "", 1, None),
        ("a", "b", 0, None),
        ("a", "b", 1, Some(1)),
        ("aaapppp", "", 8, Some(7)),
        ("aaapppp", "", 7, Some(7)),
        ("aaapppp", "", 6, None),
        ("elephant", "hippo", 7, Some(7)),
        ("elephant", "hippo", 6, None),
        ("hippo", "elephant", 7, Some(7)),
        ("hippo", "elephant", 6, None),
        ("hello", "hallo", 1, Some(1)),
        ("kitten", "sitting", 3, Some(3)),
        ("kitten", "sitting", 2, None),
    ];
    for &(a, b, threshold, expected) in cases {
        let metric = LevenshteinDistance::with_threshold(threshold);
        let got = metric.apply_text(Some(a), Some(b)).unwrap();
        assert_eq!(got, Distance::from(expected), "{:?} vs {:?} @ {}", a, b, threshold);
    }
}

#[test]
fn test_shared_metric_across_threads() {
    let metric = LevenshteinDistance::with_threshold(3);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(move || metric.apply_text(Some("kitten"), Some("sitting")))
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), Ok(Distance::Exact(3)));
    }
}

#[test]
fn test_absent_operands_everywhere() {
    assert!(LevenshteinDistance::new().apply_text(None, Some("a")).is_err());
    assert!(LevenshteinDetailedDistance::new().apply_text(Some("a"), None).is_err());
    assert!(LongestCommonSubsequence::new().apply_text(None, None).is_err());
    assert!(LongestCommonSubsequence::new().longest_common_subsequence(None, Some("a")).is_err());
    assert!(LcsDistance::new().apply_text(None, Some("a")).is_err());
    assert!(EditDistanceFrom::<LevenshteinDistance, char>::text(None, Some("a")).is_err());

    let err = LevenshteinDistance::new()
        .apply(None::<&[u8]>, Some(&b"abc"[..]))
        .unwrap_err();
    assert!(matches!(err, SimilarityError::InvalidArgument(_)));
}

#[test]
fn test_detailed_display_and_counts() {
    let result = levenshtein_detailed("kitten", "sitting");
    assert_eq!(
        result.to_string(),
        "Distance: 3, Insert: 1, Delete: 0, Substitute: 2"
    );
    let swapped = levenshtein_detailed("sitting", "kitten");
    assert_eq!(swapped.distance(), 3);
    assert_eq!(swapped.delete_count(), 1);
    assert_eq!(swapped.substitute_count(), 2);
}

#[test]
fn test_long_repeated_blocks() {
    let word1 = "abcabc".repeat(333);
    let word2 = "abcabc".repeat(332);
    let word3 = "defdef".repeat(333);

    assert_eq!(levenshtein(&word1, &word2), 6);
    assert_eq!(levenshtein(&word1, &word3), 1998);

    let detailed = levenshtein_detailed(&word1, &word2);
    assert_eq!(detailed.distance(), 6);
    assert_eq!(detailed.delete_count(), 6);

    assert_eq!(lcs_length(&word1, &word2), 1992);
    assert_eq!(lcs_string(&word1, &word2), word2);
}

#[test]
fn test_edit_script_matches_detailed_counts() {
    for (a, b) in [("kitten", "sitting"), ("qwerty", "erty"), ("ab", "ba"), ("", "xyz")] {
        let script = edit_script_text(a, b);
        let detailed = levenshtein_detailed(a, b);
        let mut counter = CommandCounter::default();
        script.visit(&mut counter);
        assert_eq!(counter.inserts, detailed.insert_count() + detailed.substitute_count());
        assert_eq!(counter.deletes, detailed.delete_count() + detailed.substitute_count());
    }
}

#[test]
fn test_config_from_json() {
    let configs: Vec<MetricConfig> = serde_json::from_str(
        r#"[{"Levenshtein":{"threshold":1}}, "LongestCommonSubsequence", "CosineDistance"]"#,
    )
    .unwrap();
    let scores: Vec<Score> = configs
        .iter()
        .map(|c| c.evaluate(Some("hello"), Some("hallo")).unwrap())
        .collect();
    assert_eq!(
        scores,
        vec![
            Score::Distance(Distance::Exact(1)),
            Score::Count(4),
            Score::Ratio(1.0),
        ]
    );
}

#[test]
fn test_batch_against_from_binding() {
    let binding =
        EditDistanceFrom::text(Some(LevenshteinDistance::new()), Some("query")).unwrap();
    let words = ["query", "quarry", "queue", ""];
    let query = chars("query");
    let owned: Vec<Vec<char>> = words.iter().map(|w| chars(w)).collect();
    let candidates: Vec<Option<&[char]>> = owned.iter().map(|w| Some(w.as_slice())).collect();
    let batch = distances_from(binding.metric(), Some(&query[..]), &candidates).unwrap();
    for (w, d) in words.iter().zip(batch) {
        assert_eq!(binding.apply_text(Some(*w)), Ok(d));
    }
}

proptest! {
    #[test]
    fn prop_levenshtein_symmetric(a in "[a-d]{0,12}", b in "[a-d]{0,12}") {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
    }

    #[test]
    fn prop_levenshtein_identity(a in "\\PC{0,16}", b in "\\PC{0,16}") {
        prop_assert_eq!(levenshtein(&a, &a), 0);
        prop_assert_eq!(levenshtein(&a, &b) == 0, a == b);
    }

    #[test]
    fn prop_levenshtein_triangle(
        a in "[a-c]{0,8}",
        b in "[a-c]{0,8}",
        c in "[a-c]{0,8}",
    ) {
        prop_assert!(levenshtein(&a, &c) <= levenshtein(&a, &b) + levenshtein(&b, &c));
    }

    #[test]
    fn prop_bounded_agrees_with_exact(
        a in "[a-d]{0,12}",
        b in "[a-d]{0,12}",
        k in 0usize..14,
    ) {
        let exact = levenshtein(&a, &b);
        let bounded = levenshtein_bounded(&a, &b, k);
        if exact <= k {
            prop_assert_eq!(bounded, Some(exact));
        } else {
            prop_assert_eq!(bounded, None);
        }
    }

    #[test]
    fn prop_detailed_counts_sum_to_distance(a in "[a-d]{0,12}", b in "[a-d]{0,12}") {
        let r = levenshtein_detailed(&a, &b);
        prop_assert_eq!(r.insert_count() + r.delete_count() + r.substitute_count(), r.distance());
        prop_assert_eq!(r.distance(), levenshtein(&a, &b));
    }

    #[test]
    fn prop_edit_script_round_trip(
        a in prop::collection::vec(0u8..4, 0..12),
        b in prop::collection::vec(0u8..4, 0..12),
    ) {
        let script = edit_script(&a, &b);
        let mut applier = ScriptApplier::new();
        script.visit(&mut applier);
        prop_assert_eq!(applier.into_inner(), b);
    }

    #[test]
    fn prop_lcs_symmetric_length(a in "[a-d]{0,12}", b in "[a-d]{0,12}") {
        let len = lcs_length(&a, &b);
        prop_assert_eq!(len, lcs_length(&b, &a));
        prop_assert_eq!(lcs_string(&a, &b).chars().count(), len);
        prop_assert!(len <= a.chars().count().min(b.chars().count()));
    }

    #[test]
    fn prop_lcs_identity(a in "\\PC{0,16}") {
        prop_assert_eq!(lcs_length(&a, &a), a.chars().count());
        prop_assert_eq!(lcs_string(&a, &a), a.clone());
        let chars: Vec<char> = a.chars().collect();
        let lcs = LongestCommonSubsequence::new();
        prop_assert_eq!(lcs.reconstruct(Some(&chars[..]), Some(&chars[..])), Ok(chars.clone()));
    }

    #[test]
    fn prop_lcs_is_common_subsequence(a in "[a-d]{0,12}", b in "[a-d]{0,12}") {
        let lcs = lcs_string(&a, &b);
        let is_subsequence = |s: &str| {
            let mut it = s.chars();
            lcs.chars().all(|c| it.any(|x| x == c))
        };
        prop_assert!(is_subsequence(&a));
        prop_assert!(is_subsequence(&b));
    }
}
