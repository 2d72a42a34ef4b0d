//! Secondary interactive effects layered on after construction: parallax,
//! cursor tilt over the hero canvas, the title typewriter, and hover scale
//! transitions.

use crate::core::{
    hover_transition, parallax_offset, tilt_degrees, Typewriter, CARD_HOVER_SCALE,
    SKILL_HOVER_SCALE, TYPEWRITER_INTERVAL_MS, TYPEWRITER_START_DELAY_MS,
};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire(document: &web::Document) {
    wire_parallax(document);
    wire_hero_tilt(document);
    wire_typewriter(document);
    wire_hover_scale(document, ".project-card", CARD_HOVER_SCALE);
    wire_hover_scale(document, ".skill-item", SKILL_HOVER_SCALE);
}

/// Hero section drifts at half the scroll distance.
fn wire_parallax(document: &web::Document) {
    let hero = match document.query_selector(".hero") {
        Ok(Some(el)) => el,
        _ => return,
    };
    dom::on_window_event("scroll", move || {
        let offset = parallax_offset(dom::scroll_y());
        dom::set_style(&hero, "transform", &format!("translateY({offset}px)"));
    });
}

/// Map cursor position within the hero canvas to a perspective tilt,
/// reset to neutral on leave.
fn wire_hero_tilt(document: &web::Document) {
    let canvas = match document.get_element_by_id("hero-canvas") {
        Some(el) => el,
        None => return,
    };

    {
        let canvas_move = canvas.clone();
        dom::on_mouse_event(&canvas, "mousemove", move |ev: web::MouseEvent| {
            let rect = canvas_move.get_bounding_client_rect();
            if rect.width() <= 0.0 || rect.height() <= 0.0 {
                return;
            }
            let u = ((ev.client_x() as f64 - rect.left()) / rect.width()) as f32;
            let v = ((ev.client_y() as f64 - rect.top()) / rect.height()) as f32;
            let (ry, rx) = tilt_degrees(u, v);
            dom::set_style(
                &canvas_move,
                "transform",
                &format!("perspective(1000px) rotateY({ry}deg) rotateX({rx}deg)"),
            );
        });
    }
    {
        let canvas_leave = canvas.clone();
        dom::on_mouse_event(&canvas, "mouseleave", move |_| {
            dom::set_style(
                &canvas_leave,
                "transform",
                "perspective(1000px) rotateY(0deg) rotateX(0deg)",
            );
        });
    }
}

/// Reveal the hero title one character at a time. Runs once; the chain of
/// timeouts cannot be cancelled or restarted.
fn wire_typewriter(document: &web::Document) {
    let title = match document.query_selector(".hero-title .gradient-text") {
        Ok(Some(el)) => el,
        _ => return,
    };
    let text = title.text_content().unwrap_or_default();
    if text.is_empty() {
        return;
    }
    title.set_text_content(Some(""));

    let typewriter = Rc::new(RefCell::new(Typewriter::new(&text)));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(prefix) = typewriter.borrow_mut().step() {
            title.set_text_content(Some(&prefix));
        }
        if !typewriter.borrow().is_done() {
            if let Some(window) = web::window() {
                let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    tick_clone
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                    TYPEWRITER_INTERVAL_MS,
                );
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(window) = web::window() {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            tick.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            TYPEWRITER_START_DELAY_MS,
        );
    }
}

fn wire_hover_scale(document: &web::Document, selector: &str, scale: f32) {
    for el in dom::query_all(document, selector) {
        // These elements also carry an entrance transition (long duration
        // plus a stagger delay). Each enter re-claims `transition` and zeroes
        // the delay so the scale animates at the hover timing; the entrance
        // pass re-installs its own declaration whenever it plays or reverses.
        {
            let el_enter = el.clone();
            dom::on_mouse_event(&el, "mouseenter", move |_| {
                dom::set_style(&el_enter, "transition", &hover_transition());
                dom::set_style(&el_enter, "transition-delay", "0ms");
                dom::set_style(&el_enter, "transform", &format!("scale({scale})"));
            });
        }
        {
            let el_leave = el.clone();
            dom::on_mouse_event(&el, "mouseleave", move |_| {
                dom::set_style(&el_leave, "transform", "scale(1)");
            });
        }
    }
}
