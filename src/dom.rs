use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// All elements matching `selector`, empty on any failure.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(el) = node.dyn_into::<web::Element>() {
                    out.push(el);
                }
            }
        }
    }
    out
}

/// Attach a leaked event listener to any target. Listeners live for the
/// lifetime of the page, matching the rest of the wiring here.
pub fn on_event(
    target: &web::EventTarget,
    name: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    let _ = target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn on_mouse_event(
    target: &web::EventTarget,
    name: &str,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    let closure =
        Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>);
    let _ = target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Window-level listener for events whose payload we never read (scroll,
/// resize).
pub fn on_window_event(name: &str, mut handler: impl FnMut() + 'static) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Set one inline style property, silently skipping non-HTML elements.
pub fn set_style(el: &web::Element, name: &str, value: &str) {
    if let Some(h) = el.dyn_ref::<web::HtmlElement>() {
        let _ = h.style().set_property(name, value);
    }
}

#[inline]
pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.page_y_offset().ok())
        .unwrap_or(0.0)
}

#[inline]
pub fn viewport_height() -> f64 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}
