use crate::core::{direction_for_key, Carousel, SlideOutcome};
use crate::render::PlaneTexture;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    carousel: &Rc<RefCell<Carousel<PlaneTexture>>>,
) {
    let Some(dir) = direction_for_key(&ev.key()) else {
        return;
    };
    let outcome = carousel.borrow_mut().slide(dir);
    if let SlideOutcome::Moved { from, to } = outcome {
        log::info!("[keys] {:?}: {} -> {}", dir, from, to);
    } else {
        log::debug!("[keys] {:?} ignored ({:?})", dir, outcome);
    }
}

pub fn wire_global_keydown(carousel: Rc<RefCell<Carousel<PlaneTexture>>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &carousel);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
