use crate::frame::FrameContext;
use crate::input;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use triswap_core::Layout;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub layout: Layout,
    pub frame_ctx: Rc<RefCell<FrameContext>>,
    /// Plot position of the primary-button press awaiting its release.
    pub pressed_at: Rc<RefCell<Option<Vec2>>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerleave(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let px = input::pointer_canvas_px(&ev, &w.canvas);
        let plot = input::canvas_px_to_plot(px, &w.layout);
        w.frame_ctx.borrow_mut().hover_at(plot);
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerleave(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.frame_ctx.borrow_mut().hover_at(None);
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !input::is_primary_button(ev.button()) {
            return;
        }
        let px = input::pointer_canvas_px(&ev, &w.canvas);
        *w.pressed_at.borrow_mut() = input::canvas_px_to_plot(px, &w.layout);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !input::is_primary_button(ev.button()) {
            return;
        }
        let pressed = w.pressed_at.borrow_mut().take();
        let px = input::pointer_canvas_px(&ev, &w.canvas);
        if let (Some(down), Some(up)) = (pressed, input::canvas_px_to_plot(px, &w.layout)) {
            w.frame_ctx.borrow_mut().click(down, up);
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    closure.forget();
}
