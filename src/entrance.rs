//! Scroll-triggered entrance transitions.
//!
//! Consumes the declarative specs from `core::entrance` and drives them
//! through the browser's CSS transition engine: targets start hidden
//! (opacity 0 + a small offset) and are flipped to their resting state when
//! the trigger crosses the start line, with a fixed per-item stagger.

use crate::core::{
    entrance_specs, item_delay_ms, transition_decl, EntranceSpec, EntranceState, Toggle,
};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct Group {
    spec: EntranceSpec,
    items: Vec<web::Element>,
    trigger: web::Element,
    state: EntranceState,
}

pub fn wire(document: &web::Document) {
    let mut groups: Vec<Group> = Vec::new();
    for spec in entrance_specs() {
        let items = dom::query_all(document, spec.target);
        if items.is_empty() {
            continue;
        }
        let trigger = match document.query_selector(spec.trigger) {
            Ok(Some(el)) => el,
            _ => continue,
        };
        for el in &items {
            conceal_item(el, &spec);
        }
        groups.push(Group {
            spec,
            items,
            trigger,
            state: EntranceState::default(),
        });
    }
    if groups.is_empty() {
        return;
    }
    log::info!("[entrance] {} transition group(s) wired", groups.len());

    // Load-time groups reveal immediately; the rest wait for their trigger.
    for group in &mut groups {
        if group.spec.play_on_load {
            reveal_group(group);
        }
    }
    // Evaluate once for sections already inside the viewport.
    evaluate_all(&mut groups);

    let groups = Rc::new(RefCell::new(groups));
    dom::on_window_event("scroll", move || {
        evaluate_all(&mut groups.borrow_mut());
    });
}

fn evaluate_all(groups: &mut [Group]) {
    let viewport_h = dom::viewport_height();
    for group in groups.iter_mut() {
        if group.spec.play_on_load {
            continue;
        }
        let top = group.trigger.get_bounding_client_rect().top();
        match group.state.on_scroll(top, viewport_h) {
            Some(Toggle::Play) => reveal_group(group),
            Some(Toggle::Reverse) => {
                for el in &group.items {
                    // Re-claim `transition` from any hover effect, then hide.
                    conceal_item(el, &group.spec);
                    dom::set_style(el, "transition-delay", "0ms");
                }
            }
            None => {}
        }
    }
}

fn reveal_group(group: &Group) {
    for (i, el) in group.items.iter().enumerate() {
        // The shorthand resets transition-delay, so the delay goes second.
        dom::set_style(el, "transition", &transition_decl(&group.spec));
        dom::set_style(
            el,
            "transition-delay",
            &format!("{}ms", item_delay_ms(&group.spec, i)),
        );
        dom::set_style(el, "opacity", "1");
        dom::set_style(el, "transform", "none");
    }
}

/// Initial hidden state plus the transition declaration the reveals rely on.
fn conceal_item(el: &web::Element, spec: &EntranceSpec) {
    dom::set_style(el, "transition", &transition_decl(spec));
    hide_styles(el, spec);
}

fn hide_styles(el: &web::Element, spec: &EntranceSpec) {
    dom::set_style(el, "opacity", "0");
    dom::set_style(
        el,
        "transform",
        &format!("translate({}px, {}px)", spec.from_x, spec.from_y),
    );
}
