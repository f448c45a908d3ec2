//! Experience display rendering: overlay panels, sliding boxes, block letters,
//! and the company label list.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::buffer::Buffer;
use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Paragraph, Widget, Wrap};
use ratzilla::ratatui::Frame;

use crate::catalog::JobRecord;
use crate::input::{is_narrow_layout, HitMap};
use crate::widgets::HoverList;

use super::actions::{job_target, MAX_JOB_LABELS};
use super::font::{filled_cells, GLYPH_H, GLYPH_W};
use super::motion::{letter_z, HEADING_LINES};
use super::ExperienceDisplay;

const PAPER: (u8, u8, u8) = (255, 255, 255);
const INK: (u8, u8, u8) = (0, 0, 0);
const MUTED: Color = Color::Rgb(75, 85, 99);

const LETTER_CELL: &str = "█";

/// Rows per heading line: glyph plus one row of breathing room.
const LINE_H: u16 = GLYPH_H + 1;
pub const HEADING_H: u16 = LINE_H * 2;

/// Share of the page width used on wide screens.
const CONTAINER_PERCENT: u16 = 70;

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Ink faded towards paper. Opacity 1 is full ink, 0 is invisible.
fn ink_at(opacity: f32) -> Color {
    let a = opacity.clamp(0.0, 1.0);
    let mix = |ink: u8, paper: u8| (ink as f32 * a + paper as f32 * (1.0 - a)).round() as u8;
    Color::Rgb(mix(INK.0, PAPER.0), mix(INK.1, PAPER.1), mix(INK.2, PAPER.2))
}

/// Screen regions for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayLayout {
    pub heading: Rect,
    pub labels: Rect,
}

pub fn layout(area: Rect, heading_percent: u16, label_rows: u16) -> DisplayLayout {
    if is_narrow_layout(area.width) {
        let total = HEADING_H + 1 + label_rows;
        let y = area.y + area.height.saturating_sub(total) / 2;
        let heading = Rect::new(area.x, y, area.width, HEADING_H).intersection(area);
        let labels = Rect::new(area.x, y + HEADING_H + 1, area.width, label_rows).intersection(area);
        return DisplayLayout { heading, labels };
    }

    let width = (area.width as u32 * CONTAINER_PERCENT as u32 / 100) as u16;
    let x = area.x + (area.width - width) / 2;
    let block_h = HEADING_H.max(label_rows);
    let y = area.y + area.height.saturating_sub(block_h) / 2;
    let heading_w = (width as u32 * heading_percent.min(100) as u32 / 100) as u16;
    let heading = Rect::new(x, y, heading_w, HEADING_H).intersection(area);
    let labels = Rect::new(x + heading_w, y, width - heading_w, block_h).intersection(area);
    DisplayLayout { heading, labels }
}

pub fn render(
    display: &ExperienceDisplay,
    f: &mut Frame,
    area: Rect,
    hit_map: &Rc<RefCell<HitMap>>,
) {
    let mut hits = hit_map.borrow_mut();
    paint(display, area, f.buffer_mut(), &mut hits);
}

/// Paint the whole display into `buf` and register label hover targets.
pub fn paint(display: &ExperienceDisplay, area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
    buf.set_style(area, Style::default().fg(rgb(INK)).bg(rgb(PAPER)));

    let label_count = display.catalog.len().min(MAX_JOB_LABELS as usize) as u16;
    let regions = layout(area, display.preset.heading_percent, label_count * 2);

    // Back to front: panels, the boxes hiding them, then the letters.
    paint_panels(display, regions.heading, buf);
    paint_boxes(display, regions.heading, buf);
    paint_letters(display, regions.heading, buf);
    paint_labels(display, regions.labels, buf, hits);
}

fn cell_in(area: Rect, x: i32, y: i32) -> Option<(u16, u16)> {
    let inside = x >= area.x as i32
        && x < (area.x + area.width) as i32
        && y >= area.y as i32
        && y < (area.y + area.height) as i32;
    inside.then_some((x as u16, y as u16))
}

fn paint_panels(display: &ExperienceDisplay, heading: Rect, buf: &mut Buffer) {
    if heading.is_empty() {
        return;
    }
    let now = display.now();
    for panel in display.presence.panels() {
        let Some(job) = display.catalog.get(panel.ordinal) else {
            continue;
        };
        let dy = display.preset.units_to_rows(panel.y.value_at(now));
        if dy.unsigned_abs() >= heading.height as u32 {
            continue;
        }
        let content = panel_buffer(job, heading.width, heading.height);
        for sy in 0..heading.height {
            for sx in 0..heading.width {
                let target = cell_in(heading, (heading.x + sx) as i32, (heading.y + sy) as i32 + dy);
                if let Some(pos) = target {
                    buf[pos] = content[(sx, sy)].clone();
                }
            }
        }
    }
}

/// The panel's content laid out at rest, in its own buffer: title and dates
/// in the upper half, description centred in the lower half.
fn panel_buffer(job: &JobRecord, width: u16, height: u16) -> Buffer {
    let rect = Rect::new(0, 0, width, height);
    let mut content = Buffer::empty(rect);
    content.set_style(rect, Style::default().fg(rgb(INK)).bg(rgb(PAPER)));

    let half = height / 2;
    let top = Rect::new(0, 0, width, half);
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            job.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            job.date_range(),
            Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
        )),
    ]);
    let header_y = top.height.saturating_sub(2) / 2;
    header.render(Rect::new(0, header_y, width, top.height - header_y), &mut content);

    let bottom = Rect::new(0, half, width, height - half);
    let description = Paragraph::new(job.description.as_str()).wrap(Wrap { trim: true });
    let desc_rows = (description.line_count(width) as u16).min(bottom.height);
    let desc_y = bottom.y + (bottom.height - desc_rows) / 2;
    description.render(Rect::new(0, desc_y, width, desc_rows), &mut content);

    content
}

/// Column where letter `slot` of a line starts when spread edge to edge.
fn letter_x(heading: Rect, slot: usize, per_line: usize) -> i32 {
    if per_line < 2 {
        return heading.x as i32;
    }
    let free = heading.width.saturating_sub(GLYPH_W) as i32;
    heading.x as i32 + free * slot as i32 / (per_line as i32 - 1)
}

fn paint_boxes(display: &ExperienceDisplay, heading: Rect, buf: &mut Buffer) {
    let now = display.now();
    let paper = Style::default().bg(rgb(PAPER));
    for (line, bx) in display.heading.boxes.iter().enumerate() {
        let dx = display.preset.units_to_cols(bx.value_at(now));
        let top = heading.y as i32 + (line as u16 * LINE_H) as i32;
        for row in 0..LINE_H as i32 {
            for col in 0..heading.width as i32 {
                if let Some(pos) = cell_in(heading, heading.x as i32 + col + dx, top + row) {
                    let cell = &mut buf[pos];
                    cell.reset();
                    cell.set_style(paper);
                }
            }
        }
    }
}

fn paint_letters(display: &ExperienceDisplay, heading: Rect, buf: &mut Buffer) {
    let now = display.now();

    let mut letters: Vec<(usize, usize, usize, char)> = Vec::new();
    let mut index = 0;
    for (line, text) in HEADING_LINES.iter().enumerate() {
        for (slot, ch) in text.chars().enumerate() {
            letters.push((index, line, slot, ch));
            index += 1;
        }
    }
    // Lowest z first so earlier letters end up on top.
    letters.sort_by_key(|&(i, ..)| letter_z(i));

    for (i, line, slot, ch) in letters {
        let Some(motion) = display.heading.letters.get(i) else {
            continue;
        };
        let opacity = motion.opacity.value_at(now);
        if opacity <= 0.01 {
            continue;
        }
        let per_line = HEADING_LINES[line].chars().count();
        let x0 = letter_x(heading, slot, per_line) + display.preset.units_to_cols(motion.x.value_at(now));
        let y0 = heading.y as i32 + (line as u16 * LINE_H) as i32;
        let color = ink_at(opacity);
        for (dx, dy) in filled_cells(ch) {
            if let Some(pos) = cell_in(heading, x0 + dx as i32, y0 + dy as i32) {
                let cell = &mut buf[pos];
                cell.set_symbol(LETTER_CELL);
                cell.set_fg(color);
            }
        }
    }
}

/// One company label with its hover nudge and partial underline.
fn label_line(job: &JobRecord, nudge_cols: u16, underline: f32) -> Line<'static> {
    let chars: Vec<char> = job.company.chars().collect();
    let underlined = ((underline.clamp(0.0, 1.0) * chars.len() as f32).ceil() as usize).min(chars.len());
    let head: String = chars[..underlined].iter().collect();
    let tail: String = chars[underlined..].iter().collect();
    Line::from(vec![
        Span::raw(" ".repeat(nudge_cols as usize)),
        Span::styled(head, Style::default().add_modifier(Modifier::UNDERLINED)),
        Span::raw(tail),
    ])
}

fn paint_labels(display: &ExperienceDisplay, area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
    if area.is_empty() {
        return;
    }
    let now = display.now();
    let mut list = HoverList::new();
    for (ordinal, job) in display
        .catalog
        .iter()
        .enumerate()
        .take(MAX_JOB_LABELS as usize)
    {
        let (nudge, underline) = match display.labels.get(ordinal) {
            Some(m) => (m.nudge.value_at(now), m.underline.value_at(now)),
            None => (0.0, 0.0),
        };
        let nudge_cols = display.preset.units_to_cols(nudge).max(0) as u16;
        list.push_hoverable(label_line(job, nudge_cols, underline), job_target(ordinal));
        list.push_gap();
    }

    let rows = list.len() as u16;
    let list_area = Rect::new(
        area.x,
        area.y + area.height.saturating_sub(rows) / 2,
        area.width,
        rows.min(area.height),
    );
    list.register_targets(list_area, hits);
    Paragraph::new(list.into_lines()).render(list_area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample;
    use crate::input::InputEvent;
    use crate::preset::STANDARD;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.x + buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn screen_text(buf: &Buffer) -> String {
        (buf.area.y..buf.area.y + buf.area.height)
            .map(|y| row_text(buf, y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn letter_cells_in(buf: &Buffer, rect: Rect) -> usize {
        let mut n = 0;
        for y in rect.y..rect.y + rect.height {
            for x in rect.x..rect.x + rect.width {
                if buf[(x, y)].symbol() == LETTER_CELL {
                    n += 1;
                }
            }
        }
        n
    }

    fn paint_display(display: &ExperienceDisplay, area: Rect) -> (Buffer, HitMap) {
        let mut buf = Buffer::empty(area);
        let mut hits = HitMap::new();
        paint(display, area, &mut buf, &mut hits);
        (buf, hits)
    }

    fn display() -> ExperienceDisplay {
        ExperienceDisplay::new(sample(&["Acme", "Bolt", "Crane"]), &STANDARD)
    }

    #[test]
    fn wide_layout_splits_container() {
        let l = layout(Rect::new(0, 0, 100, 30), 60, 6);
        assert_eq!(l.heading, Rect::new(15, 9, 42, HEADING_H));
        assert_eq!(l.labels.x, 57);
        assert_eq!(l.labels.width, 28);
    }

    #[test]
    fn very_wide_layout_does_not_overflow() {
        let l = layout(Rect::new(0, 0, 1000, 40), 60, 6);
        assert_eq!(l.heading.x, 150);
        assert_eq!(l.heading.width, 420);
        assert_eq!(l.labels.width, 280);
    }

    #[test]
    fn narrow_layout_stacks_labels_below() {
        let l = layout(Rect::new(0, 0, 40, 40), 60, 6);
        assert_eq!(l.heading.width, 40);
        assert!(l.labels.y > l.heading.y + l.heading.height - 1);
    }

    #[test]
    fn idle_display_shows_heading_without_panel() {
        let d = display();
        let area = Rect::new(0, 0, 100, 30);
        let (buf, _) = paint_display(&d, area);
        let regions = layout(area, STANDARD.heading_percent, 6);

        // Every filled glyph cell of EXPER + IENCE is drawn.
        let expected: usize = HEADING_LINES
            .iter()
            .flat_map(|line| line.chars())
            .map(|ch| filled_cells(ch).count())
            .sum();
        assert_eq!(letter_cells_in(&buf, regions.heading), expected);

        let text = screen_text(&buf);
        assert!(!text.contains("Title Acme"));
        assert!(text.contains("Acme"));
        assert!(text.contains("Crane"));
    }

    #[test]
    fn hovered_display_reveals_panel_once_letters_are_gone() {
        let mut d = display();
        d.handle_input(&InputEvent::Hover(Some(job_target(1))), 0.0);
        d.tick(2000.0);
        let area = Rect::new(0, 0, 100, 30);
        let (buf, _) = paint_display(&d, area);
        let regions = layout(area, STANDARD.heading_percent, 6);

        assert_eq!(letter_cells_in(&buf, regions.heading), 0);
        let text = screen_text(&buf);
        assert!(text.contains("Title Bolt"));
        assert!(text.contains("Jan 2011 - Dec 2011"));
        assert!(text.contains("Worked at Bolt."));
    }

    #[test]
    fn panel_is_covered_until_boxes_move() {
        let mut d = display();
        d.handle_input(&InputEvent::Hover(Some(job_target(0))), 0.0);
        // Boxes wait for their lead letter's delay before moving.
        d.tick(100.0);
        let (buf, _) = paint_display(&d, Rect::new(0, 0, 100, 30));
        assert!(!screen_text(&buf).contains("Title Acme"));
    }

    #[test]
    fn labels_register_hover_targets() {
        let d = display();
        let area = Rect::new(0, 0, 100, 30);
        let (buf, hits) = paint_display(&d, area);
        assert_eq!(hits.targets.len(), 3);

        // The first label's row holds its company name and hit-tests to it.
        let first = hits.targets[0].rect;
        assert!(row_text(&buf, first.y).contains("Acme"));
        assert_eq!(hits.hit_test(first.x + 1, first.y), Some(job_target(0)));
        // The spacer below belongs to the same label.
        assert_eq!(hits.hit_test(first.x + 1, first.y + 1), Some(job_target(0)));
        assert_eq!(hits.hit_test(first.x + 1, first.y + 2), Some(job_target(1)));
    }

    #[test]
    fn hovered_label_is_nudged_and_underlined() {
        let mut d = display();
        d.handle_input(&InputEvent::Hover(Some(job_target(2))), 0.0);
        d.tick(1000.0);
        let (buf, hits) = paint_display(&d, Rect::new(0, 0, 100, 30));
        let rect = hits.targets[2].rect;
        // One column of nudge before the name.
        assert_eq!(buf[(rect.x, rect.y)].symbol(), " ");
        assert_eq!(buf[(rect.x + 1, rect.y)].symbol(), "C");
        assert!(buf[(rect.x + 1, rect.y)].modifier.contains(Modifier::UNDERLINED));

        let idle = hits.targets[0].rect;
        assert_eq!(buf[(idle.x, idle.y)].symbol(), "A");
        assert!(!buf[(idle.x, idle.y)].modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn label_line_underline_progress() {
        let job = &sample(&["Helio"]).get(0).cloned().unwrap();
        let half = label_line(job, 0, 0.5);
        assert_eq!(half.spans[1].content, "Hel");
        assert_eq!(half.spans[2].content, "io");
        let full = label_line(job, 1, 1.0);
        assert_eq!(full.spans[0].content, " ");
        assert_eq!(full.spans[1].content, "Helio");
    }

    #[test]
    fn faded_ink_blends_towards_paper() {
        assert_eq!(ink_at(1.0), Color::Rgb(0, 0, 0));
        assert_eq!(ink_at(0.0), Color::Rgb(255, 255, 255));
        assert_eq!(ink_at(0.5), Color::Rgb(128, 128, 128));
    }

    #[test]
    fn empty_catalog_renders_heading_only() {
        let d = ExperienceDisplay::new(crate::catalog::Catalog::default(), &STANDARD);
        let (buf, hits) = paint_display(&d, Rect::new(0, 0, 100, 30));
        assert!(hits.targets.is_empty());
        assert!(letter_cells_in(&buf, Rect::new(0, 0, 100, 30)) > 0);
    }

    #[test]
    fn tiny_area_does_not_panic() {
        let mut d = display();
        d.handle_input(&InputEvent::Hover(Some(job_target(1))), 0.0);
        d.tick(200.0);
        for (w, h) in [(1, 1), (10, 3), (59, 8), (60, 5)] {
            paint_display(&d, Rect::new(0, 0, w, h));
        }
    }
}
