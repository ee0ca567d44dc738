#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use triswap_core::{Scene, Session, VizParams};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("triswap-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn fetch_text(window: &web::Window, url: &str) -> anyhow::Result<String> {
    let promise: js_sys::Promise = window.fetch_with_str(url);
    let response: web::Response = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("fetch {} failed: {:?}", url, e))?
        .dyn_into()
        .map_err(|e| anyhow!("unexpected fetch result: {:?}", e))?;
    if !response.ok() {
        return Err(anyhow!("fetch {} returned HTTP {}", url, response.status()));
    }
    let text = response
        .text()
        .map_err(|e| anyhow!("response body error: {:?}", e))?;
    JsFuture::from(text)
        .await
        .map_err(|e| anyhow!("response body error: {:?}", e))?
        .as_string()
        .ok_or_else(|| anyhow!("response body is not text"))
}

async fn init() -> anyhow::Result<()> {
    let params = VizParams {
        data_source: constants::DATA_URL.to_string(),
        ..VizParams::default()
    };
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, constants::CANVAS_ID)?;
    dom::size_canvas(&canvas, &params.layout);

    // Nothing is drawn and no handlers exist until the dataset has loaded.
    let json = fetch_text(&window, &params.data_source).await?;
    let session = Session::from_json(&json, &params.layout)?;

    let ctx2d = dom::context_2d(&canvas)?;
    let surface = render::CanvasSurface::new(ctx2d, params.layout);
    let cues = audio::WebCuePlayer::new()?;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        session,
        Scene::new(params.transition_ms),
        surface,
        cues,
    )));

    events::wire_input_handlers(events::InputWiring {
        canvas,
        layout: params.layout,
        frame_ctx: frame_ctx.clone(),
        pressed_at: Rc::new(RefCell::new(None)),
    });
    frame::start_loop(frame_ctx);
    log::info!("triswap-web ready");
    Ok(())
}
