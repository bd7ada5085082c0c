
use crate::{CheckerConfig, TaxCodeChecker, TaxCodeError};

#[test]
fn check_matches_the_predicate() {
    let checker = TaxCodeChecker::default();
    let candidates = vec![
        Some("RSSMRA85T10A562S"),
        Some("rssmra85t10a562s"),
        Some("RSSMRA85T10A562A"),
        Some("RSSMRA85T10A56-S"),
        Some(""),
        None,
    ];
    for candidate in candidates {
        assert_eq!(
            checker.check(candidate),
            crate::is_valid_tax_code(candidate),
            "candidate: {candidate:?}"
        );
    }
}

#[test]
fn explain_missing_candidate() {
    let checker = TaxCodeChecker::default();
    assert_eq!(checker.explain(None), Err(TaxCodeError::Missing));
    assert_eq!(checker.explain(Some("  ")), Err(TaxCodeError::Empty));
    assert_eq!(
        checker.explain(Some("MLLSNT82P65Z404U")).unwrap().as_str(),
        "MLLSNT82P65Z404U"
    );
}

#[test]
fn batch_keeps_input_order() {
    let candidates = vec![
        "RSSMRA85T10A562S",
        "RSSMRA85T10A562T",
        "MRTMTT91D08F205J",
        "not a tax code",
        "LKJLDJ00E20D635F",
    ];
    let expected = vec![true, false, true, false, true];

    let sequential = CheckerConfig::default().build();
    assert_eq!(sequential.check_batch(&candidates), expected);

    let parallel = CheckerConfig::default().parallel_batch_threshold(0).build();
    assert_eq!(parallel.check_batch(&candidates), expected);
}

#[test]
fn large_parallel_batch() {
    let mut candidates = vec![];
    for i in 0..1_000 {
        candidates.push(if i % 3 == 0 {
            "VRDLGU72D12F205F"
        } else {
            "VRDLGU72D12F205G"
        });
    }

    let checker = CheckerConfig::default().parallel_batch_threshold(100).build();
    let results = checker.check_batch(&candidates);
    assert_eq!(results.len(), 1_000);
    for (i, result) in results.into_iter().enumerate() {
        assert_eq!(result, i % 3 == 0, "index {i}");
    }
}

#[test]
fn empty_batch() {
    let checker = CheckerConfig::default().parallel_batch_threshold(0).build();
    assert!(checker.check_batch(&[]).is_empty());
}
