// Host-side tests for the entrance-transition descriptors and toggle logic.

#![allow(dead_code)]
#[path = "../src/core/constants.rs"]
mod constants;
#[path = "../src/core/entrance.rs"]
mod entrance;

use entrance::{entrance_specs, item_delay_ms, transition_decl, EntranceState, Toggle};

#[test]
fn specs_cover_every_page_group() {
    let specs = entrance_specs();
    for target in [
        ".hero-text",
        ".hero-visual",
        ".about-text",
        ".about-visual",
        ".stat",
        ".project-card",
        ".skill-item",
        ".contact-item",
        ".contact-form",
    ] {
        assert!(
            specs.iter().any(|s| s.target == target),
            "missing transition group for {target}"
        );
    }
}

#[test]
fn only_hero_groups_play_on_load() {
    for spec in entrance_specs() {
        let is_hero = spec.target.starts_with(".hero");
        assert_eq!(spec.play_on_load, is_hero, "{} load policy", spec.target);
    }
}

#[test]
fn grouped_targets_use_their_container_as_trigger() {
    let specs = entrance_specs();
    let cards = specs.iter().find(|s| s.target == ".project-card").unwrap();
    assert_eq!(cards.trigger, ".projects-grid");
    assert_eq!(cards.stagger_ms, 200);
    let skills = specs.iter().find(|s| s.target == ".skill-item").unwrap();
    assert_eq!(skills.trigger, ".skills-grid");
    assert_eq!(skills.stagger_ms, 100);
}

#[test]
fn plays_once_when_crossing_the_start_line() {
    let mut state = EntranceState::default();
    let vh = 1000.0;
    assert_eq!(state.on_scroll(900.0, vh), None);
    assert_eq!(state.on_scroll(800.0, vh), Some(Toggle::Play)); // exactly 80%
    assert!(state.played());
    assert_eq!(state.on_scroll(700.0, vh), None); // no replay while visible
    assert_eq!(state.on_scroll(100.0, vh), None);
}

#[test]
fn reverses_when_scrolling_back_above_the_start_line() {
    let mut state = EntranceState::default();
    let vh = 1000.0;
    assert_eq!(state.on_scroll(500.0, vh), Some(Toggle::Play));
    assert_eq!(state.on_scroll(850.0, vh), Some(Toggle::Reverse));
    assert!(!state.played());
    // Scrolling down again replays.
    assert_eq!(state.on_scroll(790.0, vh), Some(Toggle::Play));
}

#[test]
fn transition_declaration_animates_opacity_and_transform() {
    let specs = entrance_specs();
    let cards = specs.iter().find(|s| s.target == ".project-card").unwrap();
    let decl = transition_decl(cards);
    // Both properties at the group's own duration; hover wiring swaps this
    // out and the play/reverse paths must be able to re-install it.
    assert!(decl.contains("opacity 800ms"));
    assert!(decl.contains("transform 800ms"));
}

#[test]
fn stagger_delays_are_arithmetic() {
    let specs = entrance_specs();
    let stats = specs.iter().find(|s| s.target == ".stat").unwrap();
    assert_eq!(item_delay_ms(stats, 0), stats.delay_ms);
    assert_eq!(item_delay_ms(stats, 1), stats.delay_ms + 200);
    assert_eq!(item_delay_ms(stats, 3), stats.delay_ms + 600);

    let visual = specs.iter().find(|s| s.target == ".hero-visual").unwrap();
    assert_eq!(item_delay_ms(visual, 0), 300); // fixed lead-in, no stagger
    assert_eq!(item_delay_ms(visual, 5), 300);
}
