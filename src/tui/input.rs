use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::prelude::*;
use std::io;

use super::app::App;
use super::ui;

fn handle_mouse_event(app: &mut App, terminal_area: Rect, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let [grid_area, _status_area] = ui::split_main_chunks(terminal_area);
            if let Some((row, _col)) = ui::grid_cell_at(app, grid_area, mouse.column, mouse.row) {
                app.select_row(row);
                app.status_message.clear();
            }
        }
        MouseEventKind::ScrollDown => app.move_cursor(1),
        MouseEventKind::ScrollUp => app.move_cursor(-1),
        _ => {}
    }
}

/// Apply one key press. Returns `true` when the viewer should quit.
fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }
    app.status_message.clear();

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::PageDown => app.move_cursor(10),
        KeyCode::PageUp => app.move_cursor(-10),
        KeyCode::Char('g') | KeyCode::Home => app.goto_first(),
        KeyCode::Char('G') | KeyCode::End => app.goto_last(),
        KeyCode::Char('s') => app.toggle_starred(),
        KeyCode::Char('r') => app.toggle_read(),
        KeyCode::Char('n') => app.append_record(),
        KeyCode::Char('O') => app.insert_record_above(),
        KeyCode::Char('x') | KeyCode::Delete => app.remove_record(),
        KeyCode::Char('c') => app.add_next_column(),
        KeyCode::Char('y') => app.copy_url(),
        _ => {}
    }
    false
}

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        match event::read()? {
            Event::Key(key) => {
                // Only process key press events (Windows reports Press + Release)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(app, key) {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                handle_mouse_event(app, Rect::new(0, 0, size.width, size.height), mouse);
            }
            _ => {}
        }
    }
}
