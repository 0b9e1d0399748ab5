//! Tests for overlap detection between a candidate block and existing blocks.

use weekgrid::{find_conflicts, Block, ConflictingBlock};

/// Helper: a block with an id, day, and time range.
fn block(id: &str, day: u8, start: &str, end: &str) -> Block {
    Block {
        id: id.to_string(),
        day,
        start: start.to_string(),
        end: end.to_string(),
        title: None,
        tag: None,
    }
}

// ---------------------------------------------------------------------------
// Plain same-day overlap
// ---------------------------------------------------------------------------

#[test]
fn overlapping_blocks_conflict() {
    let existing = vec![block("a", 1, "01:00", "02:00")];
    let candidate = block("n", 1, "00:30", "01:10");

    let conflicts = find_conflicts(&candidate, &existing);

    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].id, "a");
}

#[test]
fn contained_block_conflicts() {
    let existing = vec![block("a", 1, "01:00", "02:00")];
    let candidate = block("n", 1, "01:20", "01:40");

    assert_eq!(find_conflicts(&candidate, &existing).len(), 1);
}

#[test]
fn touching_endpoints_do_not_conflict() {
    // One ends 10:00, the other starts 10:00 -- half-open ranges, no overlap.
    let existing = vec![block("a", 1, "08:00", "10:00")];

    assert!(find_conflicts(&block("n", 1, "10:00", "11:00"), &existing).is_empty());
    assert!(find_conflicts(&block("n", 1, "07:00", "08:00"), &existing).is_empty());
}

#[test]
fn different_days_do_not_conflict() {
    let existing = vec![block("a", 1, "08:00", "10:00")];
    let candidate = block("n", 2, "08:00", "10:00");

    assert!(find_conflicts(&candidate, &existing).is_empty());
}

// ---------------------------------------------------------------------------
// Midnight wraparound
// ---------------------------------------------------------------------------

#[test]
fn candidate_inside_wraparound_head_conflicts() {
    // Existing Monday 22:00 → Tuesday 02:00; candidate Monday 23:00-23:30.
    let existing = vec![block("night", 1, "22:00", "02:00")];
    let candidate = block("n", 1, "23:00", "23:30");

    let conflicts = find_conflicts(&candidate, &existing);
    assert_eq!(conflicts.len(), 1, "head of the wrapped block should collide");
}

#[test]
fn candidate_inside_wraparound_tail_conflicts() {
    // Candidate lands on Tuesday inside the 00:00-02:00 tail.
    let existing = vec![block("night", 1, "22:00", "02:00")];
    let candidate = block("n", 2, "01:00", "01:30");

    let conflicts = find_conflicts(&candidate, &existing);
    assert_eq!(conflicts.len(), 1, "tail of the wrapped block should collide");
}

#[test]
fn candidate_after_wraparound_tail_does_not_conflict() {
    let existing = vec![block("night", 1, "22:00", "02:00")];
    let candidate = block("n", 2, "02:00", "03:00");

    assert!(find_conflicts(&candidate, &existing).is_empty());
}

#[test]
fn wraparound_candidate_collides_on_both_days() {
    // Candidate Saturday 23:00 → Sunday 01:00 hits a Saturday block and a
    // Sunday block.
    let existing = vec![
        block("sat", 6, "22:30", "23:30"),
        block("sun", 0, "00:30", "01:30"),
        block("mon", 1, "00:30", "01:30"),
    ];
    let candidate = block("n", 6, "23:00", "01:00");

    let conflicts = find_conflicts(&candidate, &existing);

    let ids: Vec<&str> = conflicts.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["sat", "sun"]);
}

// ---------------------------------------------------------------------------
// Dedup and ordering
// ---------------------------------------------------------------------------

#[test]
fn conflicting_block_reported_at_most_once() {
    // Both intervals of the wrapped existing block overlap the candidate's
    // two intervals, but the block must appear once.
    let existing = vec![block("night", 1, "22:00", "02:00")];
    let candidate = block("n", 1, "21:00", "03:00");

    let conflicts = find_conflicts(&candidate, &existing);
    assert_eq!(conflicts.len(), 1, "one block, one conflict entry");
}

#[test]
fn conflicts_preserve_existing_order() {
    let existing = vec![
        block("a", 1, "08:00", "09:00"),
        block("b", 1, "12:00", "13:00"),
        block("c", 1, "08:30", "09:30"),
    ];
    let candidate = block("n", 1, "08:45", "12:30");

    let conflicts = find_conflicts(&candidate, &existing);
    let ids: Vec<&str> = conflicts.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

// ---------------------------------------------------------------------------
// Degenerate input
// ---------------------------------------------------------------------------

#[test]
fn invalid_candidate_yields_no_conflicts() {
    // Callers must validate first; the detector itself degrades to empty.
    let existing = vec![block("a", 1, "00:00", "23:59")];

    assert!(find_conflicts(&block("n", 1, "10:00", "10:00"), &existing).is_empty());
    assert!(find_conflicts(&block("n", 1, "junk", "11:00"), &existing).is_empty());
}

#[test]
fn invalid_existing_blocks_are_skipped() {
    let existing = vec![
        block("bad", 1, "x", "y"),
        block("good", 1, "09:00", "10:00"),
    ];
    let candidate = block("n", 1, "09:30", "09:45");

    let conflicts = find_conflicts(&candidate, &existing);
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].id, "good");
}

#[test]
fn empty_existing_list_yields_no_conflicts() {
    assert!(find_conflicts(&block("n", 1, "09:00", "10:00"), &[]).is_empty());
}

// ---------------------------------------------------------------------------
// Wire summary
// ---------------------------------------------------------------------------

#[test]
fn conflicting_block_summary_carries_block_fields() {
    let mut b = block("a", 4, "08:00", "10:00");
    b.title = Some("Standup".to_string());
    b.tag = Some("t1".to_string());

    let summary = ConflictingBlock::from(&b);

    assert_eq!(summary.id, "a");
    assert_eq!(summary.day, 4);
    assert_eq!(summary.start, "08:00");
    assert_eq!(summary.end, "10:00");
    assert_eq!(summary.title.as_deref(), Some("Standup"));

    // The tag reference is not part of the conflict wire shape.
    let json = serde_json::to_value(&summary).unwrap();
    assert!(json.get("tag").is_none());
}
