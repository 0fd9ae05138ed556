use crate::constants::{BUTTON_SELECTOR, MOUNT_ID};
use crate::core::{Carousel, CarouselConfig, TextureRegistry, WheelGate};
use crate::render::{GpuState, PlaneTexture};
use crate::{dom, events, frame};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Shared handles passed to every event handler, the loader and the frame loop.
#[derive(Clone)]
pub struct AppWiring {
    pub carousel: Rc<RefCell<Carousel<PlaneTexture>>>,
    pub gpu: Rc<RefCell<GpuState<'static>>>,
    pub canvas: web_sys::HtmlCanvasElement,
    pub loop_started: Rc<Cell<bool>>,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("plane-carousel starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::mount_canvas(&document, MOUNT_ID)?;

    // Buttons are wired only after the GPU is up so every load can upload.
    let gpu = frame::init_gpu(&canvas).await?;

    let config = CarouselConfig::default();
    let carousel = Rc::new(RefCell::new(Carousel::new(
        config,
        TextureRegistry::default(),
    )));
    {
        let c = carousel.borrow();
        log::info!(
            "[carousel] sets={} distance={} window={} duration={:?}",
            c.registry().len(),
            c.config().image_distance,
            c.config().visible_range,
            c.config().slide_duration
        );
    }

    let wiring = AppWiring {
        carousel: carousel.clone(),
        gpu: Rc::new(RefCell::new(gpu)),
        canvas,
        loop_started: Rc::new(Cell::new(false)),
    };

    events::wire_wheel(carousel.clone(), WheelGate::default());
    events::wire_global_keydown(carousel);
    events::wire_set_buttons(&document, BUTTON_SELECTOR, &wiring);
    Ok(())
}
