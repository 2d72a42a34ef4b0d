//! Contact form stub: no transport, a fixed 2 s fake "send", then a blocking
//! acknowledgement. The simulated operation cannot fail by design.

use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const SEND_DELAY_MS: i32 = 2000;
const SENDING_LABEL: &str = "Sending...";

pub fn wire(document: &web::Document) {
    let form: web::HtmlFormElement = match document.get_element_by_id("contactForm") {
        Some(el) => match el.dyn_into() {
            Ok(f) => f,
            Err(_) => return,
        },
        None => return,
    };

    let form_for_submit = form.clone();
    dom::on_event(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();

        let Ok(data) = web::FormData::new_with_form(&form_for_submit) else {
            return;
        };
        let name = data.get("name").as_string().unwrap_or_default();
        let _email = data.get("email").as_string().unwrap_or_default();
        let _message = data.get("message").as_string().unwrap_or_default();

        let submit: web::HtmlButtonElement = match form_for_submit
            .query_selector("button[type=\"submit\"]")
        {
            Ok(Some(el)) => match el.dyn_into() {
                Ok(b) => b,
                Err(_) => return,
            },
            _ => return,
        };
        let original_label = submit.text_content().unwrap_or_default();
        submit.set_text_content(Some(SENDING_LABEL));
        submit.set_disabled(true);
        log::info!("[contact] simulating send for '{name}'");

        let form_done = form_for_submit.clone();
        let finish = Closure::once_into_js(move || {
            if let Some(window) = web::window() {
                let _ = window.alert_with_message(&format!(
                    "Thank you for your message, {name}! I'll get back to you soon."
                ));
            }
            form_done.reset();
            submit.set_text_content(Some(&original_label));
            submit.set_disabled(false);
        });
        if let Some(window) = web::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                finish.unchecked_ref(),
                SEND_DELAY_MS,
            );
        }
    });
}
