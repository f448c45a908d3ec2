//! Overlay panel presence: panels entering, resting, and exiting.
//!
//! Panels are keyed by job ordinal. Hovering a different job sends the old
//! panel out while the new one comes in; both are painted until the exit
//! finishes, at which point the panel is dropped and reported.

use crate::preset::MotionPreset;
use crate::tween::{AnimatedValue, Transition};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelPhase {
    Entering,
    Present,
    Exiting,
}

#[derive(Clone, Debug)]
pub struct Panel {
    pub ordinal: usize,
    /// Vertical offset in units; 0 is fully covering the heading area.
    pub y: AnimatedValue,
    pub phase: PanelPhase,
    /// Signed offset the panel entered from.
    pub entered_from: f32,
}

/// Presence lifecycle notifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelEvent {
    EnterComplete(usize),
    ExitComplete(usize),
}

#[derive(Clone, Debug, Default)]
pub struct Presence {
    panels: Vec<Panel>,
}

impl Presence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// The panel currently shown for the hovered job, if any.
    pub fn active(&self) -> Option<&Panel> {
        self.panels.iter().find(|p| p.phase != PanelPhase::Exiting)
    }

    /// Make `hovered` the only live panel.
    ///
    /// `direction_offset` is the signed distance the new panel enters from.
    /// Each exiting panel leaves towards the side opposite its own entry.
    pub fn show(
        &mut self,
        hovered: Option<usize>,
        direction_offset: f32,
        preset: &MotionPreset,
        now_ms: f64,
    ) {
        let exit = Transition::new(preset.panel_exit_ms);
        for panel in &mut self.panels {
            if Some(panel.ordinal) == hovered || panel.phase == PanelPhase::Exiting {
                continue;
            }
            panel.phase = PanelPhase::Exiting;
            panel.y.restart_to(-panel.entered_from, exit, now_ms);
        }

        let Some(ordinal) = hovered else {
            return;
        };
        if self
            .panels
            .iter()
            .any(|p| p.ordinal == ordinal && p.phase != PanelPhase::Exiting)
        {
            return;
        }

        let mut y = AnimatedValue::new(direction_offset);
        y.animate_to(0.0, Transition::new(preset.panel_enter_ms), now_ms);
        self.panels.push(Panel {
            ordinal,
            y,
            phase: PanelPhase::Entering,
            entered_from: direction_offset,
        });
    }

    /// Advance lifecycles; finished exits are removed.
    pub fn settle(&mut self, now_ms: f64) -> Vec<PanelEvent> {
        let mut events = Vec::new();
        for panel in &mut self.panels {
            if panel.y.settle(now_ms) {
                continue;
            }
            match panel.phase {
                PanelPhase::Entering => {
                    panel.phase = PanelPhase::Present;
                    events.push(PanelEvent::EnterComplete(panel.ordinal));
                }
                PanelPhase::Exiting => {
                    events.push(PanelEvent::ExitComplete(panel.ordinal));
                }
                PanelPhase::Present => {}
            }
        }
        self.panels
            .retain(|p| !(p.phase == PanelPhase::Exiting && !p.y.is_animating()));
        events
    }

    pub fn clear(&mut self) {
        self.panels.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::STANDARD;

    #[test]
    fn enter_slides_from_direction_to_zero() {
        let mut p = Presence::new();
        p.show(Some(2), 200.0, &STANDARD, 0.0);
        let panel = p.active().unwrap();
        assert_eq!(panel.y.value_at(0.0), 200.0);
        assert_eq!(panel.y.value_at(STANDARD.panel_enter_ms), 0.0);
        assert_eq!(panel.phase, PanelPhase::Entering);
    }

    #[test]
    fn neutral_enter_has_no_travel() {
        let mut p = Presence::new();
        p.show(Some(0), 0.0, &STANDARD, 0.0);
        assert_eq!(p.active().unwrap().y.value_at(0.0), 0.0);
        assert_eq!(p.settle(0.0), vec![PanelEvent::EnterComplete(0)]);
    }

    #[test]
    fn switching_jobs_exits_opposite_to_entry() {
        let mut p = Presence::new();
        p.show(Some(0), 0.0, &STANDARD, 0.0);
        p.show(Some(2), 200.0, &STANDARD, 10.0);
        p.settle(1000.0);
        // Backward: panel 2 came in from +200, so it leaves towards -200
        // even though panel 0 now enters from -200.
        p.show(Some(0), -200.0, &STANDARD, 1000.0);
        let old = p.panels().iter().find(|x| x.ordinal == 2).unwrap();
        assert_eq!(old.phase, PanelPhase::Exiting);
        assert_eq!(old.y.target(), -200.0);
        assert_eq!(p.active().unwrap().ordinal, 0);
        assert_eq!(p.active().unwrap().entered_from, -200.0);
    }

    #[test]
    fn neutral_entry_exits_in_place() {
        let mut p = Presence::new();
        p.show(Some(0), 0.0, &STANDARD, 0.0);
        p.settle(1000.0);
        p.show(Some(2), 200.0, &STANDARD, 1000.0);
        let old = &p.panels()[0];
        assert_eq!(old.phase, PanelPhase::Exiting);
        assert_eq!(old.y.target(), 0.0);
    }

    #[test]
    fn clear_after_forward_entry_exits_upwards() {
        let mut p = Presence::new();
        p.show(Some(2), 200.0, &STANDARD, 0.0);
        p.settle(1000.0);
        p.show(None, 0.0, &STANDARD, 1000.0);
        let panel = &p.panels()[0];
        assert_eq!(panel.y.target(), -200.0);
        assert_eq!(
            p.settle(1000.0 + STANDARD.panel_exit_ms),
            vec![PanelEvent::ExitComplete(2)]
        );
    }

    #[test]
    fn exit_completion_removes_panel() {
        let mut p = Presence::new();
        p.show(Some(1), 0.0, &STANDARD, 0.0);
        p.settle(0.0);
        p.show(None, 0.0, &STANDARD, 100.0);
        assert!(p.active().is_none());
        assert!(p.settle(100.0 + STANDARD.panel_exit_ms - 1.0).is_empty());
        assert_eq!(
            p.settle(100.0 + STANDARD.panel_exit_ms),
            vec![PanelEvent::ExitComplete(1)]
        );
        assert!(p.panels().is_empty());
    }

    #[test]
    fn rehover_same_job_keeps_panel() {
        let mut p = Presence::new();
        p.show(Some(1), 0.0, &STANDARD, 0.0);
        p.settle(500.0);
        p.show(Some(1), 0.0, &STANDARD, 600.0);
        assert_eq!(p.panels().len(), 1);
        assert_eq!(p.active().unwrap().phase, PanelPhase::Present);
    }

    #[test]
    fn returning_to_an_exiting_job_enters_a_fresh_panel() {
        let mut p = Presence::new();
        p.show(Some(0), 0.0, &STANDARD, 0.0);
        p.show(Some(1), 200.0, &STANDARD, 10.0);
        p.show(Some(0), -200.0, &STANDARD, 20.0);
        // Panel 0 (exiting) + panel 1 (now exiting) + fresh panel 0
        assert_eq!(p.panels().len(), 3);
        let active = p.active().unwrap();
        assert_eq!(active.ordinal, 0);
        assert_eq!(active.entered_from, -200.0);
    }

    #[test]
    fn clear_drops_everything() {
        let mut p = Presence::new();
        p.show(Some(0), 0.0, &STANDARD, 0.0);
        p.clear();
        assert!(p.panels().is_empty());
        assert!(p.settle(1000.0).is_empty());
    }
}
