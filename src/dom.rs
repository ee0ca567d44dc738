use anyhow::anyhow;
use triswap_core::Layout;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("#{} is not a canvas: {:?}", id, e))
}

/// Fixed-size surface: backing store and CSS size both match the layout.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, layout: &Layout) {
    canvas.set_width(layout.width as u32);
    canvas.set_height(layout.height as u32);
    _ = canvas.set_attribute(
        "style",
        &format!("width:{}px;height:{}px", layout.width, layout.height),
    );
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("getContext error: {:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("unexpected context type: {:?}", e))
}
