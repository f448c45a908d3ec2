//! Hover state for the experience display.

/// Side an overlay panel slides in from, derived from hover order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideDirection {
    /// Hovered a later job than before.
    Forward,
    /// Hovered an earlier job than before.
    Backward,
    /// First hover of the session, or the same job again.
    Neutral,
}

impl SlideDirection {
    /// Signed vertical offset for a panel travelling `travel` units.
    pub fn offset(self, travel: f32) -> f32 {
        match self {
            SlideDirection::Forward => travel,
            SlideDirection::Backward => -travel,
            SlideDirection::Neutral => 0.0,
        }
    }
}

/// Which job is hovered, which was hovered before it, and the pending clear.
///
/// `previous` is only ever `Some` while `hovered` is `Some`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HoverState {
    /// Ordinal of the hovered job in the catalog.
    pub hovered: Option<usize>,
    /// Ordinal of the job hovered just before `hovered`.
    pub previous: Option<usize>,
    /// Display time (ms) at which the hover clears, if a leave is pending.
    pub pending_clear: Option<f64>,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.hovered.is_none()
    }
}
