use crate::scene::ShapeSpec;

/// Timed interpolation between two shape sets keyed by index.
#[derive(Clone, Debug)]
pub struct Transition {
    from: Vec<ShapeSpec>,
    to: Vec<ShapeSpec>,
    start_ms: f64,
    duration_ms: f64,
    started: bool,
}

impl Transition {
    pub fn new(from: Vec<ShapeSpec>, to: Vec<ShapeSpec>, start_ms: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
            started: false,
        }
    }

    pub fn target(&self) -> &[ShapeSpec] {
        &self.to
    }

    /// Linear progress in 0..=1.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Returns true exactly once, on the first sampled frame.
    pub fn mark_started(&mut self) -> bool {
        !std::mem::replace(&mut self.started, true)
    }

    pub fn sample(&self, now_ms: f64) -> Vec<ShapeSpec> {
        let p = self.progress(now_ms);
        if p >= 1.0 {
            return self.to.clone();
        }
        let t = ease_cubic_in_out(p) as f32;
        self.to
            .iter()
            .enumerate()
            .map(|(i, to)| match self.from.get(i) {
                Some(from) => from.lerp(to, t),
                None => *to,
            })
            .collect()
    }

    /// Apply `f` to the shape at `key` at both ends of the transition.
    pub fn patch(&mut self, key: usize, f: impl Fn(&mut ShapeSpec)) {
        if let Some(s) = self.from.get_mut(key) {
            f(s);
        }
        if let Some(s) = self.to.get_mut(key) {
            f(s);
        }
    }
}

#[inline]
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
