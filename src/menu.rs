//! Mobile hamburger menu: a two-state toggle on the trigger icon and the
//! menu container; any nav-link click forces it closed.

use crate::dom;
use web_sys as web;

pub fn wire(document: &web::Document) {
    let hamburger = match document.query_selector(".hamburger") {
        Ok(Some(el)) => el,
        _ => return,
    };
    let menu = match document.query_selector(".nav-menu") {
        Ok(Some(el)) => el,
        _ => return,
    };

    {
        let hamburger_t = hamburger.clone();
        let menu_t = menu.clone();
        dom::on_event(&hamburger, "click", move |_| {
            let _ = hamburger_t.class_list().toggle("active");
            let _ = menu_t.class_list().toggle("active");
        });
    }

    for link in dom::query_all(document, ".nav-link") {
        let hamburger = hamburger.clone();
        let menu = menu.clone();
        dom::on_event(&link, "click", move |_| {
            let _ = hamburger.class_list().remove_1("active");
            let _ = menu.class_list().remove_1("active");
        });
    }
}
