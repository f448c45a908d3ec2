//! Experience display hover logic (no rendering / IO).

use super::state::{HoverState, SlideDirection};

/// Result of a clear-timer check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClearOutcome {
    /// No timer pending.
    Idle,
    /// Timer pending but not yet due.
    Waiting,
    /// Timer fired; hover state is now empty.
    Cleared,
}

/// Pointer entered the label of job `ordinal`.
///
/// Cancels a pending clear, remembers the currently hovered job as
/// `previous`, and hovers `ordinal`. Ordinals outside `0..job_count` are
/// ignored.
pub fn pointer_enter(state: &mut HoverState, ordinal: usize, job_count: usize) -> bool {
    if ordinal >= job_count {
        return false;
    }
    state.pending_clear = None;
    if let Some(current) = state.hovered {
        state.previous = Some(current);
    }
    state.hovered = Some(ordinal);
    true
}

/// Pointer left a job label. The hover clears `delay_ms` later unless a
/// new enter arrives first.
pub fn pointer_leave(state: &mut HoverState, now_ms: f64, delay_ms: f64) -> bool {
    if state.hovered.is_none() {
        return false;
    }
    state.pending_clear = Some(now_ms + delay_ms);
    true
}

/// Fire the pending clear once its deadline has passed.
pub fn tick_clear(state: &mut HoverState, now_ms: f64) -> ClearOutcome {
    match state.pending_clear {
        None => ClearOutcome::Idle,
        Some(deadline) if now_ms < deadline => ClearOutcome::Waiting,
        Some(_) => {
            state.hovered = None;
            state.previous = None;
            state.pending_clear = None;
            ClearOutcome::Cleared
        }
    }
}

/// Drop everything, including a pending clear. Used on teardown.
pub fn reset(state: &mut HoverState) {
    *state = HoverState::default();
}

/// Compare the hovered job's position with the previously hovered one.
pub fn slide_direction(state: &HoverState) -> SlideDirection {
    match (state.hovered, state.previous) {
        (Some(current), Some(previous)) if current > previous => SlideDirection::Forward,
        (Some(current), Some(previous)) if current < previous => SlideDirection::Backward,
        _ => SlideDirection::Neutral,
    }
}

/// Keyboard focus target: the job after the hovered one, clamped to the end.
/// From nothing, focus starts at the first job.
pub fn next_focus(state: &HoverState, job_count: usize) -> Option<usize> {
    if job_count == 0 {
        return None;
    }
    Some(match state.hovered {
        Some(i) => (i + 1).min(job_count - 1),
        None => 0,
    })
}

/// Keyboard focus target: the job before the hovered one, clamped to the
/// start. From nothing, focus starts at the last job.
pub fn prev_focus(state: &HoverState, job_count: usize) -> Option<usize> {
    if job_count == 0 {
        return None;
    }
    Some(match state.hovered {
        Some(i) => i.saturating_sub(1),
        None => job_count - 1,
    })
}
