#[test]
fn normalize_is_canonical_and_idempotent() {
    let raw = "  forumng quiz   -1  homepage -1 ";
    let n = seqscope::sequence::normalize(raw);
    assert_eq!(n, "forumng quiz -1 homepage -1");
    assert_eq!(seqscope::sequence::normalize(&n), n);
}

#[test]
fn normalize_drops_empty_day_segments() {
    assert_eq!(
        seqscope::sequence::normalize("a -1 -1 b -1"),
        "a -1 b -1"
    );
}

#[test]
fn normalize_of_sentinel_only_input_is_empty() {
    assert_eq!(seqscope::sequence::normalize("-1 -1 -1"), "");
    assert_eq!(seqscope::sequence::normalize("   "), "");
    assert_eq!(seqscope::sequence::day_count(""), 0);
}

#[test]
fn sentinel_is_a_token_not_a_substring() {
    // An activity containing "-1" as a substring is not a day boundary.
    let n = seqscope::sequence::normalize("task-1 quiz -1");
    assert_eq!(n, "task-1 quiz -1");
    assert_eq!(seqscope::sequence::day_count(&n), 1);
}

#[test]
fn format_joins_days_with_arrows() {
    assert_eq!(
        seqscope::sequence::format("forumng quiz -1 homepage -1"),
        "forumng quiz -> homepage"
    );
    assert_eq!(seqscope::sequence::format(""), "");
}

#[test]
fn day_count_counts_sentinels() {
    let raw = "a -1 b c -1 d -1";
    assert_eq!(seqscope::sequence::day_count(raw), 3);
    assert_eq!(
        seqscope::sequence::day_count(&seqscope::sequence::normalize(raw)),
        3
    );
}

#[test]
fn from_days_builds_a_trailing_sentinel_candidate() {
    let days = ["forumng quiz", "homepage"];
    assert_eq!(
        seqscope::sequence::from_days(&days),
        "forumng quiz -1 homepage -1"
    );
}

#[test]
fn display_form_round_trips_through_from_days() {
    let raw = "quiz forumng -1 homepage -1 url -1";
    let n = seqscope::sequence::normalize(raw);
    let display = seqscope::sequence::format(&n);
    let days: Vec<&str> = display.split(" -> ").collect();
    assert_eq!(seqscope::sequence::from_days(&days), n);
}

#[test]
fn from_days_skips_blank_entries() {
    let days = ["a", "   ", "", "b"];
    assert_eq!(seqscope::sequence::from_days(&days), "a -1 b -1");
    let blank = ["", "  "];
    assert_eq!(seqscope::sequence::from_days(&blank), "");
}
