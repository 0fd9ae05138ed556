use crate::core::{Carousel, SlideOutcome, WheelGate};
use crate::render::PlaneTexture;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

// Throttled horizontal-scroll navigation
pub fn wire_wheel(carousel: Rc<RefCell<Carousel<PlaneTexture>>>, mut gate: WheelGate) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let Some(dir) = gate.handle(ev.delta_x(), js_sys::Date::now()) else {
            return;
        };
        let outcome = carousel.borrow_mut().slide(dir);
        if let SlideOutcome::Moved { from, to } = outcome {
            log::info!("[wheel] {:?}: {} -> {}", dir, from, to);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
