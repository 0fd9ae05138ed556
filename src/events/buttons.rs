use crate::{dom, loader, AppWiring};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire every button present right now, in document order, to load the set at
/// its position. Buttons added later are not wired.
pub fn wire_set_buttons(document: &web::Document, selector: &str, w: &AppWiring) {
    let buttons = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::error!("[buttons] query {:?} failed: {:?}", selector, e);
            return;
        }
    };
    let count = buttons.length();
    for i in 0..count {
        let Some(target) = buttons
            .get(i)
            .and_then(|node| node.dyn_into::<web::EventTarget>().ok())
        else {
            continue;
        };
        let w = w.clone();
        let set_index = i as usize;
        dom::add_click_listener(&target, move || loader::load_set(&w, set_index));
    }
    log::info!("[buttons] wired {} set buttons", count);
}
