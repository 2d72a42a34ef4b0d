// Host-side tests for the active-section computation.

#![allow(dead_code)]
#[path = "../src/core/constants.rs"]
mod constants;
#[path = "../src/core/nav.rs"]
mod nav;

use nav::active_section;

#[test]
fn no_sections_means_no_active_link() {
    assert_eq!(active_section(0.0, &[]), None);
    assert_eq!(active_section(10_000.0, &[]), None);
}

#[test]
fn none_qualifies_above_the_first_section() {
    let tops = [500.0, 1200.0];
    assert_eq!(active_section(0.0, &tops), None);
    assert_eq!(active_section(299.0, &tops), None);
}

#[test]
fn lookahead_boundary_is_inclusive() {
    let tops = [500.0];
    // 500 - 200 = 300: exactly at the look-ahead line counts.
    assert_eq!(active_section(300.0, &tops), Some(0));
    assert_eq!(active_section(299.999, &tops), None);
}

#[test]
fn last_qualifying_section_wins() {
    let tops = [0.0, 400.0, 900.0];
    assert_eq!(active_section(0.0, &tops), Some(0));
    assert_eq!(active_section(250.0, &tops), Some(1));
    assert_eq!(active_section(750.0, &tops), Some(2));
    assert_eq!(active_section(99_999.0, &tops), Some(2));
}

#[test]
fn active_index_is_monotonic_in_scroll_offset() {
    let tops = [0.0, 350.0, 700.0, 1400.0, 2100.0];
    let mut prev = None;
    let mut y = 0.0;
    while y < 2500.0 {
        let cur = active_section(y, &tops);
        assert!(cur >= prev, "highlight moved backwards at scroll {y}");
        prev = cur;
        y += 10.0;
    }
}
