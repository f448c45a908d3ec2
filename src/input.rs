//! Shared input handling: coordinate conversion, hover targets, and event types.
//!
//! Pointer coordinates arrive in DOM pixels; the render pass registers the
//! cell rectangles that react to hover. Everything here is pure so the
//! hit-testing can be unit tested without a browser.

use ratzilla::ratatui::layout::Rect;

/// All possible input events, normalized from mouse, touch, and keyboard.
///
/// Pointer events carry the hover target already resolved by [`HitMap`];
/// `None` means the pointer is over no target (or outside the grid).
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer moved.
    Hover(Option<u16>),
    /// Primary button press / tap.
    Press(Option<u16>),
    FocusPrev,
    FocusNext,
    Escape,
}

/// A region on screen that reacts to hover, identified by a semantic target ID.
#[derive(Debug, Clone)]
pub struct HoverTarget {
    /// The rectangular region (in terminal cell coordinates) for hit testing.
    pub rect: Rect,
    pub target_id: u16,
}

/// Per-frame hover regions, shared between the render loop and the pointer
/// handlers.
pub struct HitMap {
    pub targets: Vec<HoverTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl HitMap {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
        }
    }

    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    pub fn add_target(&mut self, rect: Rect, target_id: u16) {
        self.targets.push(HoverTarget { rect, target_id });
    }

    /// Register a target spanning `height` rows starting at `row`, clipped to
    /// `area`. Rows outside the area are dropped.
    pub fn add_row_target(&mut self, area: Rect, row: u16, height: u16, target_id: u16) {
        let area_end = area.y + area.height;
        if row < area.y || row >= area_end {
            return;
        }
        let h = height.min(area_end - row);
        if h > 0 {
            self.add_target(Rect::new(area.x, row, area.width, h), target_id);
        }
    }

    /// Hit-test a terminal cell coordinate against all registered targets.
    /// Later registrations win where targets overlap, matching paint order.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        self.targets.iter().rev().find_map(|t| {
            let r = &t.rect;
            if col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height {
                Some(t.target_id)
            } else {
                None
            }
        })
    }
}

/// Hover edge produced when the target under the pointer changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerTransition {
    Enter(u16),
    Leave(u16),
}

/// Remembers which target the pointer is over and reports enter/leave edges.
#[derive(Debug, Default)]
pub struct PointerTracker {
    current: Option<u16>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self { current: None }
    }

    #[cfg(test)]
    pub fn current(&self) -> Option<u16> {
        self.current
    }

    /// Feed the latest hit-test result. Moving straight from one target to
    /// another yields `Leave(old)` followed by `Enter(new)`.
    pub fn update(&mut self, hit: Option<u16>) -> Vec<PointerTransition> {
        if hit == self.current {
            return Vec::new();
        }
        let mut edges = Vec::with_capacity(2);
        if let Some(old) = self.current {
            edges.push(PointerTransition::Leave(old));
        }
        if let Some(new) = hit {
            edges.push(PointerTransition::Enter(new));
        }
        self.current = hit;
        edges
    }

    /// Forget the current target without emitting an edge (focus moved by
    /// keyboard, or the display was torn down).
    pub fn reset(&mut self) {
        self.current = None;
    }
}

/// Determine whether a screen width (in columns) should use narrow layout.
pub fn is_narrow_layout(width: u16) -> bool {
    width < 60
}

/// Convert a pixel Y coordinate to a terminal row index.
///
/// `pixel_y` is relative to the grid container's top edge.
/// `grid_height` is the total pixel height of the grid container.
///
/// Returns `None` if the point is outside the grid or inputs are invalid.
pub fn pixel_y_to_row(pixel_y: f64, grid_height: f64, terminal_rows: u16) -> Option<u16> {
    if grid_height <= 0.0 || terminal_rows == 0 || pixel_y < 0.0 {
        return None;
    }

    let cell_height = grid_height / terminal_rows as f64;
    let row = (pixel_y / cell_height) as u16;

    if row >= terminal_rows {
        return None;
    }

    Some(row)
}

/// Convert a pixel X coordinate to a terminal column index.
pub fn pixel_x_to_col(pixel_x: f64, grid_width: f64, terminal_cols: u16) -> Option<u16> {
    if grid_width <= 0.0 || terminal_cols == 0 || pixel_x < 0.0 {
        return None;
    }
    let cell_width = grid_width / terminal_cols as f64;
    let col = (pixel_x / cell_width) as u16;
    if col >= terminal_cols { None } else { Some(col) }
}
