use crate::constants::MAX_FRAME_DT_SEC;
use crate::core::{Camera, Carousel};
use crate::render::{self, PlaneTexture};
use crate::AppWiring;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub carousel: Rc<RefCell<Carousel<PlaneTexture>>>,
    pub gpu: Rc<RefCell<render::GpuState<'static>>>,
    pub canvas: web::HtmlCanvasElement,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).min(Duration::from_secs_f32(MAX_FRAME_DT_SEC));
        self.last_instant = now;

        if self.carousel.borrow_mut().tick(dt) {
            log::debug!("[slide] transition complete");
        }

        let mut gpu = self.gpu.borrow_mut();
        gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        let carousel = self.carousel.borrow();
        let camera = Camera::looking_down_z(carousel.camera_z(), gpu.aspect());
        if let Err(e) = gpu.render(&camera, carousel.visible_planes().map(|(_, p)| p)) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    render::GpuState::new(leaked_canvas).await
}

/// Start the render loop unless it is already running.
pub fn ensure_loop(w: &AppWiring) {
    if w.loop_started.replace(true) {
        return;
    }
    log::info!("[frame] starting render loop");
    start_loop(Rc::new(RefCell::new(FrameContext {
        carousel: w.carousel.clone(),
        gpu: w.gpu.clone(),
        canvas: w.canvas.clone(),
        last_instant: Instant::now(),
    })));
}

fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
