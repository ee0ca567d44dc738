use crate::audio::WebCuePlayer;
use crate::input;
use crate::render::CanvasSurface;
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use triswap_core::{Command, Scene, Session};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the event handlers and the animation loop share.
pub struct FrameContext {
    pub session: Session,
    pub scene: Scene,
    pub surface: CanvasSurface,
    pub cues: WebCuePlayer,
    pub started_at: Instant,
}

impl FrameContext {
    pub fn new(session: Session, scene: Scene, surface: CanvasSurface, cues: WebCuePlayer) -> Self {
        let mut ctx = Self {
            session,
            scene,
            surface,
            cues,
            started_at: Instant::now(),
        };
        ctx.scene.sync(&ctx.session, &mut ctx.surface);
        ctx.surface.paint_if_dirty();
        ctx
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64() * 1000.0
    }

    pub fn frame(&mut self) {
        let now = self.now_ms();
        self.scene.tick(now, &mut self.surface, &mut self.cues);
        self.surface.paint_if_dirty();
    }

    /// `plot` is `None` when the pointer left the surface.
    pub fn hover_at(&mut self, plot: Option<Vec2>) {
        let key = plot.and_then(|p| self.scene.pick(p));
        self.scene.set_hover(&self.session, key, &mut self.surface);
    }

    /// Primary-button press and release positions in plot space.
    pub fn click(&mut self, pressed: Vec2, released: Vec2) {
        self.cues.resume();
        let Some(key) = input::click_target(self.scene.pick(pressed), self.scene.pick(released))
        else {
            return;
        };
        let effects = self.session.handle(Command::Select(key));
        log::info!("[click] item {} -> {:?}", key, effects.as_slice());
        let now = self.now_ms();
        self.scene
            .apply(&self.session, &effects, now, &mut self.surface, &mut self.cues);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
