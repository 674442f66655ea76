//! UI rendering

use super::app::App;
use multispan_core::{CellRect, RowKind};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub(crate) const GRID_MIN_HEIGHT: u16 = 4;
pub(crate) const STATUS_BAR_HEIGHT: u16 = 1;
pub(crate) const HEADER_HEIGHT: u16 = 1;
pub(crate) const GRID_COLUMN_SPACING: u16 = 1;

const STATUS_HINT: &str =
    "j/k:move  s:star  r:read  n:new  O:insert  x:remove  c:column  y:copy url  q:quit";

pub(crate) fn split_main_chunks(area: Rect) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(GRID_MIN_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);
    [chunks[0], chunks[1]]
}

/// Screen area for grid rows inside the bordered grid block, below the header.
fn body_area(grid_area: Rect) -> Rect {
    let inner = Block::default().borders(Borders::ALL).inner(grid_area);
    Rect {
        y: inner.y.saturating_add(HEADER_HEIGHT),
        height: inner.height.saturating_sub(HEADER_HEIGHT),
        ..inner
    }
}

/// Grid `(row, col)` under the mouse, or `None` outside any cell.
pub(crate) fn grid_cell_at(
    app: &App,
    grid_area: Rect,
    mouse_col: u16,
    mouse_row: u16,
) -> Option<(usize, usize)> {
    let body = body_area(grid_area);
    if mouse_col < body.x
        || mouse_col >= body.x.saturating_add(body.width)
        || mouse_row < body.y
        || mouse_row >= body.y.saturating_add(body.height)
    {
        return None;
    }

    let layout = app.layout();
    let top = layout.row_y(app.viewport_row)?;
    let row = layout.row_at(top + (mouse_row - body.y) as usize)?;
    let col = layout.column_at((mouse_col - body.x) as usize)?;
    Some((row, col))
}

/// Map a grid rectangle onto the screen, cutting off whatever lies above
/// `top` or outside `body`.
pub(crate) fn clip_rect(rect: CellRect, top: usize, body: Rect) -> Option<Rect> {
    let height = body.height as usize;
    let width = body.width as usize;
    let y0 = rect.y.max(top) - top;
    let y1 = rect.bottom().saturating_sub(top).min(height);
    let x0 = rect.x.min(width);
    let x1 = rect.right().min(width);
    if y1 <= y0 || x1 <= x0 {
        return None;
    }
    Some(Rect::new(
        body.x + x0 as u16,
        body.y + y0 as u16,
        (x1 - x0) as u16,
        (y1 - y0) as u16,
    ))
}

/// Draw the application UI
pub fn draw(f: &mut Frame, app: &mut App) {
    let [grid_area, status_area] = split_main_chunks(f.area());

    app.visible_height = (body_area(grid_area).height as usize).max(1);
    app.update_viewport();

    draw_grid(f, app, grid_area);
    draw_status_bar(f, app, status_area);
}

fn draw_grid(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.file_path {
        Some(ref path) => format!(" {} ", path.display()),
        None => " [No File] ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::White));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let widths = app.column_widths();
    let header: Vec<Span> = app
        .binding
        .columns()
        .iter()
        .zip(&widths)
        .map(|(column, &width)| {
            let pad = (width + GRID_COLUMN_SPACING) as usize;
            Span::styled(
                format!("{:<pad$}", column.label(), pad = pad),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    let header_area = Rect {
        height: HEADER_HEIGHT.min(inner.height),
        ..inner
    };
    f.render_widget(Paragraph::new(Line::from(header)), header_area);

    let body = body_area(area);
    let layout = app.layout();
    let Some(top) = layout.row_y(app.viewport_row) else {
        return;
    };
    let bottom = top + body.height as usize;
    let rows_in_view = (app.viewport_row..layout.row_count())
        .take_while(|&row| layout.row_y(row).is_some_and(|y| y < bottom))
        .count();

    for block in layout.visible_blocks(app.binding.spans(), app.viewport_row, rows_in_view) {
        let Some(rect) = layout.block_rect(&block) else {
            continue;
        };
        let Some(cell_area) = clip_rect(rect, top, body) else {
            continue;
        };
        let text = app
            .binding
            .cell_text(block.row, block.col)
            .unwrap_or_default();
        let paragraph = Paragraph::new(text)
            .style(cell_style(app, block.row))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, cell_area);
    }
}

fn cell_style(app: &App, row: usize) -> Style {
    let selected = app.binding.owner_of(row) == Some(app.cursor);
    let unread = app.binding.record_at(row).is_some_and(|a| !a.read);
    match app.binding.row_kind(row) {
        Some(RowKind::Summary) if selected => {
            let style = Style::default().fg(Color::Black).bg(Color::Cyan);
            if unread {
                style.add_modifier(Modifier::BOLD)
            } else {
                style
            }
        }
        Some(RowKind::Summary) if unread => Style::default().add_modifier(Modifier::BOLD),
        Some(RowKind::Summary) => Style::default(),
        _ if selected => Style::default().fg(Color::White),
        _ => Style::default().fg(Color::DarkGray),
    }
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let position = match app.binding.record_count() {
        0 => "no articles".to_string(),
        n => format!("{}/{}", app.cursor + 1, n),
    };

    let status = if !app.status_message.is_empty() {
        app.status_message.clone()
    } else {
        format!("{}  |  {}", position, STATUS_HINT)
    };

    let style = if app.status_message.starts_with("Error") {
        Style::default().fg(Color::Red)
    } else if !app.status_message.is_empty() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(Line::from(vec![Span::styled(status, style)]));
    f.render_widget(paragraph, area);
}
