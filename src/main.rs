mod catalog;
mod console;
mod experience;
mod input;
mod preset;
mod time;
mod tween;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use catalog::Catalog;
use experience::ExperienceDisplay;
use input::{pixel_x_to_col, pixel_y_to_row, HitMap, InputEvent};
use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use time::FrameClock;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Query the grid container's bounding rect and convert pixel coordinates to
/// a terminal cell. `None` when the pointer is outside the grid.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, hits: &HitMap) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let col = pixel_x_to_col(mouse_x as f64 - rect.left(), rect.width(), hits.terminal_cols)?;
    let row = pixel_y_to_row(mouse_y as f64 - rect.top(), rect.height(), hits.terminal_rows)?;
    Some((col, row))
}

/// Tear the display down when the page is unloaded or navigated away from.
/// Input and ticks after that are ignored.
fn unmount_on_pagehide(display: Rc<RefCell<ExperienceDisplay>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn FnMut()>::new(move || {
        // The frame loop may hold the borrow; the next pagehide retries.
        if let Ok(mut ds) = display.try_borrow_mut() {
            ds.unmount();
            console::log("display unmounted");
        }
    });
    if window
        .add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())
        .is_err()
    {
        console::warn("failed to register pagehide listener");
    }
    closure.forget();
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let preset = preset::from_location();
    console::log(&format!("preset: {}", preset.name));

    let catalog = Catalog::load_embedded();
    if catalog.is_empty() {
        console::warn("catalog: no jobs to show, rendering heading only");
    }
    let display = Rc::new(RefCell::new(ExperienceDisplay::new(catalog, preset)));
    unmount_on_pagehide(display.clone());
    let hit_map = Rc::new(RefCell::new(HitMap::new()));
    let clock = Rc::new(RefCell::new(FrameClock::new()));
    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse / touch: hover on move, select on tap
    terminal.on_mouse_event({
        let display = display.clone();
        let hit_map = hit_map.clone();
        let clock = clock.clone();
        move |mouse_event| {
            if !display.borrow().is_mounted() {
                return;
            }
            let pressed = match mouse_event.event {
                MouseEventKind::Moved => false,
                MouseEventKind::Pressed if mouse_event.button == MouseButton::Left => true,
                _ => return,
            };

            let hits = hit_map.borrow();
            if hits.terminal_rows == 0 || hits.terminal_cols == 0 {
                return;
            }
            let target = dom_pixel_to_cell(mouse_event.x, mouse_event.y, &hits)
                .and_then(|(col, row)| hits.hit_test(col, row));
            drop(hits);

            let event = if pressed {
                InputEvent::Press(target)
            } else {
                InputEvent::Hover(target)
            };
            let now = clock.borrow().now();
            display.borrow_mut().handle_input(&event, now);
        }
    });

    // Keyboard: walk the job list
    terminal.on_key_event({
        let display = display.clone();
        let clock = clock.clone();
        move |key_event| {
            let event = match key_event.code {
                KeyCode::Up | KeyCode::Char('k') => InputEvent::FocusPrev,
                KeyCode::Down | KeyCode::Char('j') => InputEvent::FocusNext,
                KeyCode::Esc => InputEvent::Escape,
                _ => return,
            };
            let now = clock.borrow().now();
            display.borrow_mut().handle_input(&event, now);
        }
    });

    terminal.draw_web({
        let hit_map = hit_map.clone();
        move |f| {
            let now = clock.borrow_mut().update(time::timestamp_ms());
            let mut ds = display.borrow_mut();
            ds.tick(now);

            let size = f.area();

            // Update terminal dimensions and clear hover targets
            {
                let mut hits = hit_map.borrow_mut();
                hits.terminal_cols = size.width;
                hits.terminal_rows = size.height;
                hits.clear_targets();
            }

            ds.render(f, size, &hit_map);
        }
    });

    Ok(())
}
