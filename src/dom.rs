use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(target: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Create the render canvas inside `#mount_id`, sized to the viewport once.
/// Later window resizes are not tracked.
pub fn mount_canvas(
    document: &web::Document,
    mount_id: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let mount = document
        .get_element_by_id(mount_id)
        .ok_or_else(|| anyhow!("missing #{}", mount_id))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("{:?}", e))?;

    let css_w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let css_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let dpr = window.device_pixel_ratio();
    canvas.set_width(((css_w * dpr) as u32).max(1));
    canvas.set_height(((css_h * dpr) as u32).max(1));
    _ = canvas.set_attribute(
        "style",
        &format!("width:{}px;height:{}px;display:block", css_w, css_h),
    );

    mount
        .append_child(&canvas)
        .map_err(|e| anyhow!("{:?}", e))?;
    Ok(canvas)
}
