//! Animation variants for the heading, its background boxes, and the labels.
//!
//! Variants are pure functions from a position index to a target and a
//! [`Transition`]; [`HeadingMotion`] and [`LabelMotion`] hold the animated
//! values that chase those targets.

use crate::preset::MotionPreset;
use crate::tween::{AnimatedValue, Transition};

/// The two heading lines. Letters are indexed globally: line 0 holds
/// indices 0..5, line 1 holds 5..10.
pub const HEADING_LINES: [&str; 2] = ["EXPER", "IENCE"];
pub const LETTER_COUNT: usize = 10;

/// Index of the letter each line's background box travels with, relative
/// to the start of its line.
const BOX_LEAD_LETTER: [usize; 2] = [3, 4];

#[derive(Clone, Copy, Debug)]
pub struct MotionTarget {
    pub x: f32,
    pub opacity: f32,
    pub transition: Transition,
}

/// Opacity a letter fades to while sliding away. Trailing letters vanish
/// entirely so nothing lingers over the panel.
fn slide_opacity(index: usize) -> f32 {
    if index >= 4 {
        0.0
    } else if index >= 2 {
        0.3
    } else {
        1.0
    }
}

fn slide_distance(index: usize, preset: &MotionPreset) -> f32 {
    -(preset.letter_base + index as f32 * preset.letter_step)
}

fn slide_transition(index: usize, preset: &MotionPreset) -> Transition {
    Transition::new(preset.letter_duration_ms).delay(index as f64 * preset.stagger_ms)
}

/// Letter target while a job is hovered.
pub fn letter_slide(index: usize, preset: &MotionPreset) -> MotionTarget {
    MotionTarget {
        x: slide_distance(index, preset),
        opacity: slide_opacity(index),
        transition: slide_transition(index, preset),
    }
}

/// Letter target with nothing hovered.
pub fn letter_rest(preset: &MotionPreset) -> MotionTarget {
    MotionTarget {
        x: 0.0,
        opacity: 1.0,
        transition: Transition::new(preset.return_duration_ms),
    }
}

/// Background box target for heading line `line` while a job is hovered.
/// The box keeps pace with the line's lead letter so the panel underneath is
/// fully uncovered by the time that letter is gone.
pub fn box_slide(line: usize, preset: &MotionPreset) -> MotionTarget {
    let lead = BOX_LEAD_LETTER[line.min(1)];
    MotionTarget {
        x: slide_distance(lead, preset),
        opacity: 1.0,
        transition: slide_transition(lead, preset),
    }
}

pub fn box_rest(preset: &MotionPreset) -> MotionTarget {
    letter_rest(preset)
}

/// Stacking order of a letter: earlier letters paint over later ones.
pub fn letter_z(index: usize) -> usize {
    LETTER_COUNT - index
}

#[derive(Clone, Debug)]
pub struct LetterMotion {
    pub x: AnimatedValue,
    pub opacity: AnimatedValue,
}

impl LetterMotion {
    fn new() -> Self {
        Self {
            x: AnimatedValue::new(0.0),
            opacity: AnimatedValue::new(1.0),
        }
    }

    fn apply(&mut self, target: MotionTarget, now_ms: f64) {
        self.x.animate_to(target.x, target.transition, now_ms);
        self.opacity
            .animate_to(target.opacity, target.transition, now_ms);
    }
}

/// Animated state of the heading letters and the two background boxes.
#[derive(Clone, Debug)]
pub struct HeadingMotion {
    pub letters: Vec<LetterMotion>,
    pub boxes: [AnimatedValue; 2],
    slid: bool,
}

impl HeadingMotion {
    pub fn new() -> Self {
        Self {
            letters: (0..LETTER_COUNT).map(|_| LetterMotion::new()).collect(),
            boxes: [AnimatedValue::new(0.0), AnimatedValue::new(0.0)],
            slid: false,
        }
    }

    /// Point every letter and box at the slide or rest variant.
    pub fn sync(&mut self, hovered: bool, preset: &MotionPreset, now_ms: f64) {
        if hovered == self.slid {
            return;
        }
        self.slid = hovered;
        for (i, letter) in self.letters.iter_mut().enumerate() {
            let target = if hovered {
                letter_slide(i, preset)
            } else {
                letter_rest(preset)
            };
            letter.apply(target, now_ms);
        }
        for (line, bx) in self.boxes.iter_mut().enumerate() {
            let target = if hovered {
                box_slide(line, preset)
            } else {
                box_rest(preset)
            };
            bx.animate_to(target.x, target.transition, now_ms);
        }
    }

    pub fn settle(&mut self, now_ms: f64) -> bool {
        let mut animating = false;
        for letter in &mut self.letters {
            animating |= letter.x.settle(now_ms);
            animating |= letter.opacity.settle(now_ms);
        }
        for bx in &mut self.boxes {
            animating |= bx.settle(now_ms);
        }
        animating
    }
}

/// Per-label hover affordance: a small rightward nudge and an underline that
/// grows to the full label width.
#[derive(Clone, Debug)]
pub struct LabelMotion {
    pub nudge: AnimatedValue,
    /// Underline coverage, 0.0..=1.0.
    pub underline: AnimatedValue,
}

impl LabelMotion {
    pub fn new() -> Self {
        Self {
            nudge: AnimatedValue::new(0.0),
            underline: AnimatedValue::new(0.0),
        }
    }

    pub fn sync(&mut self, hovered: bool, preset: &MotionPreset, now_ms: f64) {
        let (nudge, underline) = if hovered {
            (preset.label_nudge, 1.0)
        } else {
            (0.0, 0.0)
        };
        self.nudge
            .animate_to(nudge, Transition::new(preset.nudge_ms), now_ms);
        self.underline
            .animate_to(underline, Transition::new(preset.underline_ms), now_ms);
    }

    pub fn settle(&mut self, now_ms: f64) -> bool {
        let a = self.nudge.settle(now_ms);
        let b = self.underline.settle(now_ms);
        a || b
    }
}
