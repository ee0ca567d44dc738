use glam::Vec2;
use triswap_core::Layout;
use web_sys as web;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let css = Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    );
    let css_size = Vec2::new(rect.width() as f32, rect.height() as f32);
    let backing = Vec2::new(canvas.width() as f32, canvas.height() as f32);
    css_to_canvas_px(css, css_size, backing)
}

/// CSS pixels relative to the canvas box -> backing-store pixels.
#[inline]
pub fn css_to_canvas_px(css: Vec2, css_size: Vec2, backing_size: Vec2) -> Vec2 {
    if css_size.x > 0.0 && css_size.y > 0.0 {
        css / css_size * backing_size
    } else {
        css
    }
}

/// Canvas pixel -> plot space, or `None` when the pointer is off the surface.
#[inline]
pub fn canvas_px_to_plot(px: Vec2, layout: &Layout) -> Option<Vec2> {
    let on_surface = px.x.is_finite()
        && px.y.is_finite()
        && (0.0..=layout.width).contains(&px.x)
        && (0.0..=layout.height).contains(&px.y);
    on_surface.then(|| layout.to_plot(px))
}

// MouseEvent.button value of the main (usually left) button
pub const PRIMARY_BUTTON: i16 = 0;

#[inline]
pub fn is_primary_button(button: i16) -> bool {
    button == PRIMARY_BUTTON
}

/// A click lands on a shape only when press and release hit the same one.
#[inline]
pub fn click_target<K: PartialEq>(pressed: Option<K>, released: Option<K>) -> Option<K> {
    match (pressed, released) {
        (Some(a), Some(b)) if a == b => Some(b),
        _ => None,
    }
}
