//! Navigation controller: smooth-scroll on link clicks and active-section
//! highlighting on scroll.

use crate::core::active_section;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire(document: &web::Document) {
    wire_link_clicks(document);
    wire_active_highlight(document);
}

fn wire_link_clicks(document: &web::Document) {
    for link in dom::query_all(document, ".nav-link") {
        let doc = document.clone();
        let link_for_handler = link.clone();
        dom::on_event(&link, "click", move |ev: web::Event| {
            ev.prevent_default();
            let Some(href) = link_for_handler.get_attribute("href") else {
                return;
            };
            let id = href.trim_start_matches('#');
            // Unresolvable targets are silently swallowed.
            if let Some(target) = doc.get_element_by_id(id) {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        });
    }
}

fn wire_active_highlight(document: &web::Document) {
    let doc = document.clone();
    dom::on_window_event("scroll", move || {
        let sections = dom::query_all(&doc, "section[id]");
        let tops: Vec<f64> = sections
            .iter()
            .map(|s| {
                s.dyn_ref::<web::HtmlElement>()
                    .map(|h| h.offset_top() as f64)
                    .unwrap_or(0.0)
            })
            .collect();
        let current = active_section(dom::scroll_y(), &tops)
            .and_then(|i| sections[i].get_attribute("id"));

        for link in dom::query_all(&doc, ".nav-link") {
            let _ = link.class_list().remove_1("active");
            if let (Some(href), Some(id)) = (link.get_attribute("href"), current.as_deref()) {
                if href == format!("#{id}") {
                    let _ = link.class_list().add_1("active");
                }
            }
        }
    });
}
