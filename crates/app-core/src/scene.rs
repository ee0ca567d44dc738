//! Keeps a drawing surface in step with a [`Session`].
//!
//! The surface and the audio output are collaborators behind the
//! [`ShapeSurface`] and [`CuePlayer`] traits. [`Scene`] remembers what it last
//! drew, diffs against the session by item index, and drives the swap
//! transition frame by frame.

use crate::constants::*;
use crate::geometry::{Hsl, Triangle};
use crate::selection::{Effect, Session};
use crate::transition::Transition;
use glam::Vec2;

pub type ShapeKey = usize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stroke {
    #[default]
    Default,
    Highlight,
}

impl Stroke {
    pub fn width(&self) -> f32 {
        match self {
            Stroke::Default => STROKE_DEFAULT_WIDTH,
            Stroke::Highlight => STROKE_HIGHLIGHT_WIDTH,
        }
    }

    pub fn rgb(&self) -> [f32; 3] {
        match self {
            Stroke::Default => STROKE_DEFAULT_RGB,
            Stroke::Highlight => STROKE_HIGHLIGHT_RGB,
        }
    }

    pub fn css(&self) -> String {
        let [r, g, b] = self.rgb();
        format!(
            "rgb({}, {}, {})",
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8
        )
    }
}

/// Everything a surface needs to draw one shape.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShapeSpec {
    pub triangle: Triangle,
    pub fill: Hsl,
    pub stroke: Stroke,
}

impl ShapeSpec {
    /// Geometry and fill interpolate; the stroke takes the target value
    /// immediately.
    pub fn lerp(&self, other: &ShapeSpec, t: f32) -> Self {
        Self {
            triangle: self.triangle.lerp(&other.triangle, t),
            fill: self.fill.lerp(&other.fill, t),
            stroke: other.stroke,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RenderOp {
    Create(ShapeKey, ShapeSpec),
    Update(ShapeKey, ShapeSpec),
    Remove(ShapeKey),
}

/// Keyed diff by index: new keys are created, changed ones updated, and keys
/// past the end of `next` removed.
pub fn reconcile(previous: &[ShapeSpec], next: &[ShapeSpec]) -> Vec<RenderOp> {
    let mut ops = Vec::new();
    for (key, spec) in next.iter().enumerate() {
        match previous.get(key) {
            None => ops.push(RenderOp::Create(key, *spec)),
            Some(old) if old != spec => ops.push(RenderOp::Update(key, *spec)),
            Some(_) => {}
        }
    }
    for key in next.len()..previous.len() {
        ops.push(RenderOp::Remove(key));
    }
    ops
}

/// Topmost shape under `point` (plot space). Later shapes draw on top.
pub fn hit_test(specs: &[ShapeSpec], point: Vec2) -> Option<ShapeKey> {
    specs
        .iter()
        .enumerate()
        .rev()
        .find(|(_, s)| s.triangle.contains(point))
        .map(|(i, _)| i)
}

pub trait ShapeSurface {
    fn create(&mut self, key: ShapeKey, spec: &ShapeSpec);
    fn update(&mut self, key: ShapeKey, spec: &ShapeSpec);
    fn remove(&mut self, key: ShapeKey);

    fn apply(&mut self, op: &RenderOp) {
        match op {
            RenderOp::Create(key, spec) => self.create(*key, spec),
            RenderOp::Update(key, spec) => self.update(*key, spec),
            RenderOp::Remove(key) => self.remove(*key),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    Select,
    Transition,
}

/// Synthesis parameters for a cue: a pitch glide with a short attack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CueSpec {
    pub start_hz: f32,
    pub end_hz: f32,
    pub duration_sec: f32,
    pub gain: f32,
}

impl Cue {
    pub fn spec(&self) -> CueSpec {
        let (start_hz, end_hz, duration_sec, gain) = match self {
            Cue::Select => SELECT_CUE,
            Cue::Transition => TRANSITION_CUE,
        };
        CueSpec {
            start_hz,
            end_hz,
            duration_sec,
            gain,
        }
    }
}

/// Fire-and-forget audio. Triggering a cue that is still sounding restarts
/// it from the beginning.
pub trait CuePlayer {
    fn play(&mut self, cue: Cue);
}

#[derive(Clone, Debug)]
pub struct Scene {
    drawn: Vec<ShapeSpec>,
    hover: Option<ShapeKey>,
    transition: Option<Transition>,
    transition_ms: f64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(TRANSITION_MS)
    }
}

impl Scene {
    pub fn new(transition_ms: f64) -> Self {
        Self {
            drawn: Vec::new(),
            hover: None,
            transition: None,
            transition_ms,
        }
    }

    pub fn drawn(&self) -> &[ShapeSpec] {
        &self.drawn
    }

    pub fn hover(&self) -> Option<ShapeKey> {
        self.hover
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Shape specs for the session's current data, selection and hover.
    pub fn target_specs(&self, session: &Session) -> Vec<ShapeSpec> {
        (0..session.len())
            .filter_map(|i| {
                let triangle = session.triangle(i)?;
                let fill = session.fill(i, self.hover == Some(i))?;
                let stroke = if session.is_selected(i) {
                    Stroke::Highlight
                } else {
                    Stroke::Default
                };
                Some(ShapeSpec {
                    triangle,
                    fill,
                    stroke,
                })
            })
            .collect()
    }

    /// Draw the session without animation. Any running transition is dropped.
    pub fn sync(&mut self, session: &Session, surface: &mut impl ShapeSurface) {
        self.transition = None;
        let next = self.target_specs(session);
        self.commit(next, surface);
    }

    pub fn pick(&self, point: Vec2) -> Option<ShapeKey> {
        hit_test(&self.drawn, point)
    }

    /// Pointer enter/leave. The hovered fill is transient and never reaches
    /// the session.
    pub fn set_hover(
        &mut self,
        session: &Session,
        hover: Option<ShapeKey>,
        surface: &mut impl ShapeSurface,
    ) {
        if self.hover == hover {
            return;
        }
        let previous = std::mem::replace(&mut self.hover, hover);
        for (key, hovered) in [(previous, false), (hover, true)] {
            let Some(key) = key else { continue };
            let Some(fill) = session.fill(key, hovered) else {
                continue;
            };
            self.patch(key, surface, |s| s.fill = fill);
        }
    }

    /// React to the effects of one command.
    pub fn apply(
        &mut self,
        session: &Session,
        effects: &[Effect],
        now_ms: f64,
        surface: &mut impl ShapeSurface,
        cues: &mut impl CuePlayer,
    ) {
        for effect in effects {
            match *effect {
                Effect::Selected(key) => {
                    self.patch(key, surface, |s| s.stroke = Stroke::Highlight)
                }
                Effect::Deselected(key) => {
                    self.patch(key, surface, |s| s.stroke = Stroke::Default)
                }
                Effect::PlaySelectCue => cues.play(Cue::Select),
                Effect::Swapped { a, b } => {
                    log::debug!("[scene] swap {} <-> {}, redrawing", a, b);
                }
                Effect::StartTransition => {
                    let target = self.target_specs(session);
                    self.transition = Some(Transition::new(
                        self.drawn.clone(),
                        target,
                        now_ms,
                        self.transition_ms,
                    ));
                }
            }
        }
    }

    /// Advance a running transition. The transition cue fires on its first
    /// frame; the last frame lands exactly on the target.
    pub fn tick(
        &mut self,
        now_ms: f64,
        surface: &mut impl ShapeSurface,
        cues: &mut impl CuePlayer,
    ) {
        let Some(transition) = self.transition.as_mut() else {
            return;
        };
        if transition.mark_started() {
            cues.play(Cue::Transition);
        }
        let frame = transition.sample(now_ms);
        let finished = transition.is_finished(now_ms);
        self.commit(frame, surface);
        if finished {
            self.transition = None;
        }
    }

    fn commit(&mut self, next: Vec<ShapeSpec>, surface: &mut impl ShapeSurface) {
        for op in reconcile(&self.drawn, &next) {
            surface.apply(&op);
        }
        self.drawn = next;
    }

    fn patch(
        &mut self,
        key: ShapeKey,
        surface: &mut impl ShapeSurface,
        f: impl Fn(&mut ShapeSpec),
    ) {
        if let Some(t) = self.transition.as_mut() {
            t.patch(key, &f);
        }
        if let Some(spec) = self.drawn.get_mut(key) {
            f(spec);
            surface.update(key, spec);
        }
    }
}
