use seqscope::catalog::{Catalog, Category};
use seqscope::suggest::{suggest, SuggestionOutcome, DEFAULT_LIMIT};

#[test]
fn finds_extending_pattern_in_a_favorable_category() {
    let catalog = Catalog::from_records([
        vec![],
        vec![("a -1 b -1 c -1", 8u64)],
        vec![],
        vec![],
    ]);
    match suggest("a -1 b -1", &catalog, DEFAULT_LIMIT) {
        SuggestionOutcome::Suggestions { suggestions } => {
            assert_eq!(suggestions.len(), 1);
            assert_eq!(suggestions[0].sequence, "a -1 b -1 c -1");
            assert_eq!(suggestions[0].category, Category::Pass);
            assert_eq!(suggestions[0].support, 8);
        }
        SuggestionOutcome::NoImprovementPath => panic!("expected a suggestion"),
    }
}

#[test]
fn never_suggests_the_candidate_itself() {
    let catalog = Catalog::from_records([
        vec![("a -1 b -1", 10u64), ("a -1 b -1 c -1", 3u64)],
        vec![("a -1 b -1", 5u64)],
        vec![],
        vec![],
    ]);
    match suggest("a -1 b -1", &catalog, DEFAULT_LIMIT) {
        SuggestionOutcome::Suggestions { suggestions } => {
            assert!(suggestions.iter().all(|s| s.sequence != "a -1 b -1"));
            assert_eq!(suggestions.len(), 1);
        }
        SuggestionOutcome::NoImprovementPath => panic!("expected a suggestion"),
    }
}

#[test]
fn unfavorable_categories_are_never_searched() {
    let catalog = Catalog::from_records([
        vec![],
        vec![],
        vec![("a -1 b -1 c -1", 50u64)],
        vec![("a -1 b -1 d -1", 40u64)],
    ]);
    assert_eq!(
        suggest("a -1 b -1", &catalog, DEFAULT_LIMIT),
        SuggestionOutcome::NoImprovementPath
    );
}

#[test]
fn matches_pool_across_favorable_categories_sorted_by_support() {
    let catalog = Catalog::from_records([
        vec![("a -1 x -1", 4u64), ("a -1 y -1", 9u64)],
        vec![("a -1 z -1", 7u64), ("a -1 w -1", 2u64)],
        vec![],
        vec![],
    ]);
    match suggest("a -1", &catalog, 3) {
        SuggestionOutcome::Suggestions { suggestions } => {
            let supports: Vec<u64> = suggestions.iter().map(|s| s.support).collect();
            assert_eq!(supports, vec![9, 7, 4]);
        }
        SuggestionOutcome::NoImprovementPath => panic!("expected suggestions"),
    }
}

#[test]
fn containment_is_textual_not_subsequence() {
    // "a -1 c -1" is a subsequence of "a -1 b -1 c -1" but not a substring,
    // so it must not match.
    let catalog = Catalog::from_records([
        vec![("a -1 b -1 c -1", 8u64)],
        vec![],
        vec![],
        vec![],
    ]);
    assert_eq!(
        suggest("a -1 c -1", &catalog, DEFAULT_LIMIT),
        SuggestionOutcome::NoImprovementPath
    );
}

#[test]
fn limit_caps_the_suggestion_list() {
    let catalog = Catalog::from_records([
        vec![
            ("a -1 b -1", 1u64),
            ("a -1 c -1", 2u64),
            ("a -1 d -1", 3u64),
            ("a -1 e -1", 4u64),
        ],
        vec![],
        vec![],
        vec![],
    ]);
    match suggest("a -1", &catalog, 3) {
        SuggestionOutcome::Suggestions { suggestions } => {
            assert_eq!(suggestions.len(), 3);
            assert_eq!(suggestions[0].support, 4);
        }
        SuggestionOutcome::NoImprovementPath => panic!("expected suggestions"),
    }
}
