//! Experience display: the animated "EXPER / IENCE" heading with a hoverable
//! list of past employers.
//!
//! Hovering a company slides the heading letters away and reveals a panel
//! with that job's title, dates, and description.

pub mod actions;
pub mod font;
pub mod logic;
pub mod motion;
pub mod presence;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::catalog::Catalog;
use crate::input::{HitMap, InputEvent, PointerTransition, PointerTracker};
use crate::preset::MotionPreset;

use actions::job_ordinal;
use logic::ClearOutcome;
use motion::{HeadingMotion, LabelMotion};
use presence::{PanelEvent, Presence};
use state::{HoverState, SlideDirection};

pub struct ExperienceDisplay {
    pub catalog: Catalog,
    pub preset: &'static MotionPreset,
    pub hover: HoverState,
    pub heading: HeadingMotion,
    pub labels: Vec<LabelMotion>,
    pub presence: Presence,
    tracker: PointerTracker,
    /// Display time of the latest tick; rendering samples animations here.
    now_ms: f64,
    mounted: bool,
}

impl ExperienceDisplay {
    pub fn new(catalog: Catalog, preset: &'static MotionPreset) -> Self {
        let labels = catalog.iter().map(|_| LabelMotion::new()).collect();
        Self {
            catalog,
            preset,
            hover: HoverState::new(),
            heading: HeadingMotion::new(),
            labels,
            presence: Presence::new(),
            tracker: PointerTracker::new(),
            now_ms: 0.0,
            mounted: true,
        }
    }

    pub fn now(&self) -> f64 {
        self.now_ms
    }

    pub fn slide_direction(&self) -> SlideDirection {
        logic::slide_direction(&self.hover)
    }

    /// Handle an input event at display time `now_ms`. Returns true if the
    /// hover state changed.
    pub fn handle_input(&mut self, event: &InputEvent, now_ms: f64) -> bool {
        if !self.mounted {
            return false;
        }
        self.now_ms = self.now_ms.max(now_ms);
        let changed = match event {
            InputEvent::Hover(hit) => {
                let edges = self.tracker.update(*hit);
                self.apply_edges(&edges)
            }
            InputEvent::Press(hit) => {
                // Touch has no hover: a tap on a label hovers it, a tap
                // anywhere else lets it go.
                self.tracker.update(*hit);
                match hit.and_then(job_ordinal) {
                    Some(ordinal) => self.enter(ordinal),
                    None => self.leave(),
                }
            }
            InputEvent::FocusNext => match logic::next_focus(&self.hover, self.catalog.len()) {
                Some(ordinal) => self.focus(ordinal),
                None => false,
            },
            InputEvent::FocusPrev => match logic::prev_focus(&self.hover, self.catalog.len()) {
                Some(ordinal) => self.focus(ordinal),
                None => false,
            },
            InputEvent::Escape => {
                self.tracker.reset();
                self.leave()
            }
        };
        if changed {
            self.sync_motion();
        }
        changed
    }

    fn apply_edges(&mut self, edges: &[PointerTransition]) -> bool {
        let mut changed = false;
        for edge in edges {
            changed |= match *edge {
                PointerTransition::Enter(target) => match job_ordinal(target) {
                    Some(ordinal) => self.enter(ordinal),
                    None => false,
                },
                PointerTransition::Leave(target) => {
                    job_ordinal(target).is_some() && self.leave()
                }
            };
        }
        changed
    }

    fn focus(&mut self, ordinal: usize) -> bool {
        if self.hover.hovered == Some(ordinal) && self.hover.pending_clear.is_none() {
            return false;
        }
        self.tracker.reset();
        self.enter(ordinal)
    }

    fn enter(&mut self, ordinal: usize) -> bool {
        let entered = logic::pointer_enter(&mut self.hover, ordinal, self.catalog.len());
        if entered {
            if let Some(job) = self.catalog.get(ordinal) {
                crate::console::log(&format!(
                    "hover: {} ({:?})",
                    job.company,
                    self.slide_direction()
                ));
            }
        }
        entered
    }

    fn leave(&mut self) -> bool {
        logic::pointer_leave(&mut self.hover, self.now_ms, self.preset.clear_delay_ms)
    }

    /// Point every animated value at the targets implied by the hover state.
    fn sync_motion(&mut self) {
        let now = self.now_ms;
        let hovered = self.hover.hovered;
        self.heading.sync(hovered.is_some(), self.preset, now);
        for (i, label) in self.labels.iter_mut().enumerate() {
            label.sync(hovered == Some(i), self.preset, now);
        }
        let offset = self.slide_direction().offset(self.preset.panel_travel);
        self.presence.show(hovered, offset, self.preset, now);
    }

    /// Advance to display time `now_ms`: fire the clear timer if due and
    /// retire finished animations. Returns the panel lifecycle events.
    pub fn tick(&mut self, now_ms: f64) -> Vec<PanelEvent> {
        if !self.mounted {
            return Vec::new();
        }
        self.now_ms = self.now_ms.max(now_ms);
        if logic::tick_clear(&mut self.hover, self.now_ms) == ClearOutcome::Cleared {
            crate::console::log("hover: cleared");
            self.sync_motion();
        }
        self.heading.settle(self.now_ms);
        for label in &mut self.labels {
            label.settle(self.now_ms);
        }
        let events = self.presence.settle(self.now_ms);
        for event in &events {
            if let PanelEvent::ExitComplete(ordinal) = event {
                crate::console::log(&format!("panel {} exit complete", ordinal));
            }
        }
        events
    }

    /// Tear the display down: cancel the pending clear and drop every
    /// running animation. Later input and ticks are ignored.
    pub fn unmount(&mut self) {
        logic::reset(&mut self.hover);
        self.tracker.reset();
        self.presence.clear();
        self.heading = HeadingMotion::new();
        for label in &mut self.labels {
            *label = LabelMotion::new();
        }
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn render(&self, f: &mut Frame, area: Rect, hit_map: &Rc<RefCell<HitMap>>) {
        render::render(self, f, area, hit_map);
    }
}
