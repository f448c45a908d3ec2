//! Animation timing: tweens over the display clock.
//!
//! The display only declares targets ("move this letter to x = -650 over
//! 800ms, starting 240ms from now"). Everything here is a pure function of the
//! display time passed in, so the same code drives the browser frame loop and
//! the unit tests.

use tachyonfx::Interpolation;

/// Curve used for every heading and panel transition. The closest built-in
/// to `cubic-bezier(0.4, 0, 0.2, 1)`.
pub const STANDARD_EASING: Interpolation = Interpolation::CubicInOut;

/// How a value travels to a new target.
#[derive(Clone, Copy, Debug)]
pub struct Transition {
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Interpolation,
}

impl Transition {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            delay_ms: 0.0,
            easing: STANDARD_EASING,
        }
    }

    pub fn delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    #[allow(dead_code)]
    pub fn easing(mut self, easing: Interpolation) -> Self {
        self.easing = easing;
        self
    }
}

/// A single interpolation from `from` to `to`.
#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    start_ms: f64,
    transition: Transition,
}

impl Tween {
    pub fn new(from: f32, to: f32, start_ms: f64, transition: Transition) -> Self {
        Self {
            from,
            to,
            start_ms,
            transition,
        }
    }

    /// Linear progress in `0.0..=1.0`, before easing.
    fn progress(&self, now_ms: f64) -> f32 {
        let elapsed = now_ms - self.start_ms - self.transition.delay_ms;
        if self.transition.duration_ms <= 0.0 && elapsed >= 0.0 {
            return 1.0;
        }
        if elapsed <= 0.0 {
            return 0.0;
        }
        if elapsed >= self.transition.duration_ms {
            return 1.0;
        }
        (elapsed / self.transition.duration_ms) as f32
    }

    pub fn value_at(&self, now_ms: f64) -> f32 {
        let t = self.progress(now_ms);
        if t >= 1.0 {
            return self.to;
        }
        let eased = self.transition.easing.alpha(t);
        self.from + (self.to - self.from) * eased
    }

    pub fn is_done(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    pub fn target(&self) -> f32 {
        self.to
    }
}

/// A value that can be retargeted while in flight.
///
/// Retargeting starts the new tween from wherever the old one currently is,
/// so reversing an animation halfway through never jumps.
#[derive(Clone, Debug)]
pub struct AnimatedValue {
    resting: f32,
    tween: Option<Tween>,
}

impl AnimatedValue {
    pub fn new(value: f32) -> Self {
        Self {
            resting: value,
            tween: None,
        }
    }

    pub fn value_at(&self, now_ms: f64) -> f32 {
        match &self.tween {
            Some(t) => t.value_at(now_ms),
            None => self.resting,
        }
    }

    /// Where the value is heading (or resting).
    pub fn target(&self) -> f32 {
        match &self.tween {
            Some(t) => t.target(),
            None => self.resting,
        }
    }

    /// Start moving towards `to`. A repeated request for the current target
    /// keeps the running tween untouched.
    pub fn animate_to(&mut self, to: f32, transition: Transition, now_ms: f64) {
        if self.target() == to {
            return;
        }
        let from = self.value_at(now_ms);
        self.tween = Some(Tween::new(from, to, now_ms, transition));
    }

    /// Like [`animate_to`](Self::animate_to) but always starts a new tween,
    /// even when the target is unchanged. The value then reports as animating
    /// for the full transition, which exit lifecycles rely on.
    pub fn restart_to(&mut self, to: f32, transition: Transition, now_ms: f64) {
        let from = self.value_at(now_ms);
        self.tween = Some(Tween::new(from, to, now_ms, transition));
    }

    /// Fold a finished tween into the resting value. Returns true while still
    /// animating.
    pub fn settle(&mut self, now_ms: f64) -> bool {
        if let Some(t) = &self.tween {
            if t.is_done(now_ms) {
                self.resting = t.target();
                self.tween = None;
            }
        }
        self.tween.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }
}
