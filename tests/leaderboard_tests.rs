//! Leaderboard ranking tests

use tui_stacker::core::Leaderboard;
use tui_stacker::types::LEADERBOARD_CAP;

#[test]
fn test_capped_and_sorted_after_every_insert() {
    let mut board = Leaderboard::new();

    for score in [3, 11, 7, 1, 9, 5, 13, 2] {
        board.insert(score, "ABC");

        assert!(board.entries().len() <= LEADERBOARD_CAP);
        assert!(board
            .entries()
            .windows(2)
            .all(|pair| pair[0].score >= pair[1].score));
    }

    let scores: Vec<u32> = board.entries().iter().map(|e| e.score).collect();
    assert_eq!(scores, vec![13, 11, 9, 7, 5]);
}

#[test]
fn test_ties_are_stable_by_insertion_order() {
    let mut board = Leaderboard::new();
    board.insert(10, "FST");
    board.insert(10, "SND");
    board.insert(10, "TRD");

    let initials: Vec<&str> = board
        .entries()
        .iter()
        .map(|e| e.initials.as_str())
        .collect();
    assert_eq!(initials, vec!["FST", "SND", "TRD"]);
}

#[test]
fn test_same_initials_at_different_scores() {
    let mut board = Leaderboard::new();
    board.insert(4, "ABC");
    board.insert(8, "ABC");

    assert_eq!(board.entries().len(), 2);
    assert_eq!(board.best(), Some(8));
}

#[test]
fn test_tie_with_the_best_entry_still_lands() {
    let mut board = Leaderboard::new();
    board.insert(6, "OLD");

    // A later session tying the best score goes in after the holder.
    board.insert(6, "ABC");

    assert_eq!(board.entries()[0].initials, "OLD");
    assert_eq!(board.entries()[1].initials, "ABC");
    assert_eq!(board.best(), Some(6));
}
