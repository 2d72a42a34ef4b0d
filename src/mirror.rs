//! Form mirror widget: each tracked input copies its text verbatim into a
//! display element on every `input` event. No validation, no debounce.

use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

const BINDINGS: [(&str, &str); 3] = [
    ("imgSrc", "displayImgSrc"),
    ("title", "displayTitle"),
    ("fileLink", "displayFileLink"),
];

pub fn wire(document: &web::Document) {
    let mut wired = 0usize;
    for (input_id, display_id) in BINDINGS {
        let (Some(input), Some(display)) = (
            document.get_element_by_id(input_id),
            document.get_element_by_id(display_id),
        ) else {
            continue;
        };
        let input_for_read = input.clone();
        dom::on_event(&input, "input", move |_| {
            let value = field_value(&input_for_read);
            display.set_text_content(Some(&value));
        });
        wired += 1;
    }
    if wired > 0 {
        log::info!("[mirror] {wired} field binding(s) active");
    }
}

fn field_value(el: &web::Element) -> String {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}
