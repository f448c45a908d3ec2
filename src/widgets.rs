//! Reusable hoverable UI components.
//!
//! Each component encapsulates both rendering and hover target registration,
//! so a label's visual position and its pointer region can never drift apart.
//!
//! # Components
//!
//! - [`HoverList`]: vertical list with per-row hover targets.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::text::Line;

use crate::input::HitMap;

/// A builder that pairs rendered [`Line`]s with hover targets.
///
/// Instead of manually calculating row offsets, annotate lines as hoverable
/// while building the list, then call
/// [`register_targets`](HoverList::register_targets) once after rendering.
///
/// # Example
/// ```ignore
/// let mut list = HoverList::new();
/// list.push_hoverable(Line::from("Northwind Labs"), job_target(0));
/// list.push_gap();
/// list.push_hoverable(Line::from("Bluefin Systems"), job_target(1));
/// list.register_targets(area, &mut hits);
/// f.render_widget(Paragraph::new(list.into_lines()), area);
/// ```
pub struct HoverList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, target_id, trailing_gap_rows)`.
    targets: Vec<(u16, u16, u16)>,
    /// Whether the most recent line extends the previous target.
    extend_last: bool,
}

impl<'a> HoverList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            targets: Vec::new(),
            extend_last: false,
        }
    }

    /// Add a line that does not react to the pointer.
    #[allow(dead_code)]
    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
        self.extend_last = false;
    }

    /// Add a line whose rows react to hover with `target_id`.
    pub fn push_hoverable(&mut self, line: Line<'a>, target_id: u16) {
        let idx = self.lines.len() as u16;
        self.targets.push((idx, target_id, 0));
        self.lines.push(line);
        self.extend_last = true;
    }

    /// Add an empty spacer row. When it directly follows a hoverable line
    /// the spacer joins that line's hover region, so the pointer can travel
    /// between neighbouring labels without crossing a dead zone.
    pub fn push_gap(&mut self) {
        if self.extend_last {
            if let Some(last) = self.targets.last_mut() {
                last.2 += 1;
            }
        }
        self.lines.push(Line::default());
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Consume the builder, returning the lines for rendering.
    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register hover targets for all hoverable lines, one row per line
    /// starting at the top of `area`. Rows past the bottom are clipped.
    pub fn register_targets(&self, area: Rect, hits: &mut HitMap) {
        for &(line_idx, target_id, gap_rows) in &self.targets {
            let row = area.y.saturating_add(line_idx);
            hits.add_row_target(area, row, 1 + gap_rows, target_id);
        }
    }
}
