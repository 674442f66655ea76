//! Plain-text export of a bound table.
//!
//! Blocks are boxed with ASCII borders; a merged block is drawn as one box,
//! so the detail row of an article shows up as a single wide cell.

use crate::binding::{GridBinding, RowKind};
use crate::error::Result;
use crate::layout::{CellRect, GridLayout};
use std::path::Path;

/// Character canvas that remembers where box corners go.
struct Canvas {
    cells: Vec<Vec<char>>,
    corners: Vec<(usize, usize)>,
}

impl Canvas {
    fn new(width: usize, height: usize) -> Self {
        Canvas {
            cells: vec![vec![' '; width]; height],
            corners: Vec::new(),
        }
    }

    fn put(&mut self, x: usize, y: usize, ch: char) {
        if let Some(cell) = self.cells.get_mut(y).and_then(|line| line.get_mut(x)) {
            *cell = ch;
        }
    }

    /// Box `rect` (content coordinates, shifted down by `dy`) and fill it with `text`.
    fn draw_box(&mut self, rect: CellRect, dy: usize, text: &str) {
        let (x0, y0) = (rect.x, rect.y + dy);
        let (x1, y1) = (x0 + rect.width + 1, y0 + rect.height + 1);
        for x in x0 + 1..x1 {
            self.put(x, y0, '-');
            self.put(x, y1, '-');
        }
        for y in y0 + 1..y1 {
            self.put(x0, y, '|');
            self.put(x1, y, '|');
        }
        self.corners.extend([(x0, y0), (x1, y0), (x0, y1), (x1, y1)]);

        for (i, line) in wrap(text, rect.width, rect.height).iter().enumerate() {
            for (j, ch) in line.chars().enumerate() {
                self.put(x0 + 1 + j, y0 + 1 + i, ch);
            }
        }
    }

    fn finish(mut self) -> String {
        for (x, y) in std::mem::take(&mut self.corners) {
            self.put(x, y, '+');
        }
        let mut out = String::new();
        for line in self.cells {
            let line: String = line.into_iter().collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

/// Greedy word wrap into at most `height` lines of `width` characters.
fn wrap(text: &str, width: usize, height: usize) -> Vec<String> {
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    for word in text.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        for piece in chars.chunks(width) {
            if current_len > 0 && current_len + 1 + piece.len() > width {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.extend(piece);
            current_len += piece.len();
        }
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines.truncate(height);
    lines
}

/// Render the header and every block of `binding` as boxed text.
///
/// `column_widths` falls back to each column's default width where missing;
/// detail rows are `detail_height` lines tall.
pub fn render_text(binding: &GridBinding, column_widths: &[u16], detail_height: u16) -> String {
    let columns = binding.columns();
    if columns.is_empty() {
        return String::new();
    }
    let widths: Vec<u16> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| column_widths.get(i).copied().unwrap_or(c.default_width()))
        .collect();
    let heights: Vec<u16> = (0..binding.row_count())
        .map(|row| match binding.row_kind(row) {
            Some(RowKind::Detail) => detail_height.max(1),
            _ => 1,
        })
        .collect();

    let header = GridLayout::new(&widths, &[1], 1, 1);
    let layout = GridLayout::new(&widths, &heights, 1, 1);
    let height = if heights.is_empty() {
        3
    } else {
        layout.total_height() + 4
    };
    let mut canvas = Canvas::new(layout.total_width() + 2, height);

    let header_grid = multispan_grid::SpanGrid::new(1, columns.len());
    for (col, column) in columns.iter().enumerate() {
        if let Some(rect) = header.cell_rect(&header_grid, 0, col) {
            canvas.draw_box(rect, 0, column.label());
        }
    }
    for block in binding.spans().blocks() {
        if let Some(rect) = layout.block_rect(&block) {
            let text = binding.cell_text(block.row, block.col).unwrap_or_default();
            canvas.draw_box(rect, 2, &text);
        }
    }
    canvas.finish()
}

/// Write [`render_text`] output to `path`.
pub fn write_text(
    path: &Path,
    binding: &GridBinding,
    column_widths: &[u16],
    detail_height: u16,
) -> Result<()> {
    std::fs::write(path, render_text(binding, column_widths, detail_height))?;
    Ok(())
}
