//! Validates nearest-color matching and its tie-breaking rule

use image::Rgb;
use photomosaic::library::{LibraryEntry, find_best_match};
use std::path::PathBuf;

fn entry(name: &str, color: Rgb<u8>) -> LibraryEntry {
    LibraryEntry {
        path: PathBuf::from(name),
        color,
        thumbnail: None,
    }
}

// Tests selection of the minimal-distance entry
// Verified by inverting the distance comparison
#[test]
fn test_matches_nearest_entry() {
    let entries = vec![
        entry("red", Rgb([255, 0, 0])),
        entry("green", Rgb([0, 255, 0])),
        entry("blue", Rgb([0, 0, 255])),
    ];

    let reddish = Rgb([200, 30, 20]);
    assert_eq!(find_best_match(reddish, &entries), Some(0));

    let bluish = Rgb([10, 40, 230]);
    assert_eq!(find_best_match(bluish, &entries), Some(2));
}

// Tests the first-match rule for exact duplicates
// Verified by switching the scan to keep later minima
#[test]
fn test_duplicate_colors_resolve_to_first_entry() {
    let entries = vec![
        entry("first", Rgb([80, 80, 80])),
        entry("second", Rgb([80, 80, 80])),
        entry("third", Rgb([80, 80, 80])),
    ];

    assert_eq!(find_best_match(Rgb([81, 80, 80]), &entries), Some(0));
}

// Tests the first-match rule for equidistant entries
#[test]
fn test_equidistant_entries_resolve_to_first() {
    let entries = vec![
        entry("below", Rgb([90, 100, 100])),
        entry("above", Rgb([110, 100, 100])),
    ];

    // Both entries sit at squared distance 100 from the target
    assert_eq!(find_best_match(Rgb([100, 100, 100]), &entries), Some(0));
}

#[test]
fn test_empty_entry_list_has_no_match() {
    assert_eq!(find_best_match(Rgb([1, 2, 3]), &[]), None);
}

// Tests determinism across repeated calls
#[test]
fn test_matching_is_deterministic() {
    let entries = vec![
        entry("a", Rgb([10, 200, 40])),
        entry("b", Rgb([12, 198, 41])),
        entry("c", Rgb([240, 7, 90])),
    ];
    let target = Rgb([11, 199, 40]);

    let first = find_best_match(target, &entries);
    for _ in 0..10 {
        assert_eq!(find_best_match(target, &entries), first);
    }
}

// Tests an exact color hit
#[test]
fn test_exact_color_wins() {
    let entries = vec![
        entry("near", Rgb([100, 101, 99])),
        entry("exact", Rgb([100, 100, 100])),
        entry("far", Rgb([0, 0, 0])),
    ];

    assert_eq!(find_best_match(Rgb([100, 100, 100]), &entries), Some(1));
}
