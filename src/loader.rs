//! Asynchronous set loading: decode every image of a set, upload them, and
//! hand the textures to the carousel under the load's generation token.

use crate::core::{LoadOutcome, LoadRequest};
use crate::{frame, AppWiring};
use anyhow::anyhow;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Start loading `set_index`. Returns immediately; the carousel changes only
/// once every image in the set has decoded.
pub fn load_set(w: &AppWiring, set_index: usize) {
    let request = match w.carousel.borrow_mut().begin_load(set_index) {
        Ok(r) => r,
        Err(e) => {
            log::error!("[load] {}", e);
            return;
        }
    };
    log::info!(
        "[load] set {} requested ({} images, generation {})",
        set_index + 1,
        request.sources.len(),
        request.generation
    );
    let w = w.clone();
    spawn_local(async move {
        let set_index = request.set_index;
        if let Err(e) = finish_load(&w, request).await {
            // No retry; the previous set stays on screen.
            log::error!("[load] set {} failed: {:?}", set_index + 1, e);
        }
    });
}

/// Start every decode before awaiting any of them, then await in set order.
async fn decode_all(sources: &[String]) -> anyhow::Result<Vec<web::HtmlImageElement>> {
    let images = sources
        .iter()
        .map(|src| {
            let img = web::HtmlImageElement::new().map_err(|e| anyhow!("{:?}", e))?;
            img.set_src(src);
            Ok(img)
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let pending: Vec<JsFuture> = images.iter().map(|img| JsFuture::from(img.decode())).collect();
    for (img, decode) in images.iter().zip(pending) {
        decode
            .await
            .map_err(|e| anyhow!("decode {}: {:?}", img.src(), e))?;
    }
    Ok(images)
}

async fn finish_load(w: &AppWiring, request: LoadRequest) -> anyhow::Result<()> {
    let images = decode_all(&request.sources).await?;

    // Skip the GPU upload entirely if a newer load has already started.
    if w.carousel.borrow().generation() != request.generation {
        log::debug!("[load] set {} superseded", request.set_index + 1);
        return Ok(());
    }

    let textures = {
        let gpu = w.gpu.borrow();
        images
            .iter()
            .map(|img| gpu.upload_image(img))
            .collect::<anyhow::Result<Vec<_>>>()?
    };
    let outcome = w
        .carousel
        .borrow_mut()
        .complete_load(request.generation, textures)?;
    match outcome {
        LoadOutcome::Applied { count } => {
            log::info!("Image set {} loaded ({} planes)", request.set_index + 1, count);
            frame::ensure_loop(w);
        }
        LoadOutcome::Stale => {
            log::debug!("[load] set {} superseded", request.set_index + 1);
        }
    }
    Ok(())
}
