//! Application state and logic.
//!
//! [`App`] owns the [`GridBinding`] and a cursor over its articles. Every
//! edit goes through the binding, so the span grid stays in step with the
//! article list and the view only has to repaint.

use super::clipboard::{ClipboardProvider, SystemClipboard};
use super::ui::GRID_COLUMN_SPACING;
use crate::config::Config;
use multispan_core::binding::ROWS_PER_RECORD;
use multispan_core::{Article, Column, GridBinding, GridChange, GridLayout, RowKind};
use std::path::PathBuf;
use tracing::debug;

/// Main application state container.
pub struct App {
    pub binding: GridBinding,
    pub config: Config,
    pub file_path: Option<PathBuf>,
    /// Index of the selected article
    pub cursor: usize,
    /// First grid row on screen; always a summary row
    pub viewport_row: usize,
    /// Lines available for grid rows
    pub visible_height: usize,
    /// Status message to display
    pub status_message: String,
    next_id: i64,
    clipboard: Box<dyn ClipboardProvider>,
}

impl App {
    pub fn new(binding: GridBinding, config: Config, file_path: Option<PathBuf>) -> Self {
        let next_id = binding
            .records()
            .iter()
            .map(|a| a.id)
            .max()
            .unwrap_or(0)
            .saturating_add(1);
        App {
            binding,
            config,
            file_path,
            cursor: 0,
            viewport_row: 0,
            visible_height: 20,
            status_message: String::new(),
            next_id,
            clipboard: Box::new(SystemClipboard),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_clipboard(mut self, clipboard: impl ClipboardProvider + 'static) -> Self {
        self.clipboard = Box::new(clipboard);
        self
    }

    pub fn selected(&self) -> Option<&Article> {
        self.binding.records().get(self.cursor)
    }

    /// Height in lines of every grid row.
    pub fn row_heights(&self) -> Vec<u16> {
        (0..self.binding.row_count())
            .map(|row| match self.binding.row_kind(row) {
                Some(RowKind::Detail) => self.config.detail_height,
                _ => 1,
            })
            .collect()
    }

    pub fn column_widths(&self) -> Vec<u16> {
        self.config.widths(self.binding.columns())
    }

    pub fn layout(&self) -> GridLayout {
        GridLayout::new(
            &self.column_widths(),
            &self.row_heights(),
            GRID_COLUMN_SPACING,
            0,
        )
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let count = self.binding.record_count();
        if count == 0 {
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(count - 1);
        self.update_viewport();
    }

    pub fn goto_first(&mut self) {
        self.cursor = 0;
        self.update_viewport();
    }

    pub fn goto_last(&mut self) {
        self.cursor = self.binding.record_count().saturating_sub(1);
        self.update_viewport();
    }

    /// Select the article owning grid row `row`.
    pub fn select_row(&mut self, row: usize) {
        if let Some(index) = self.binding.owner_of(row) {
            self.cursor = index;
            self.update_viewport();
        }
    }

    /// Scroll so both rows of the selected article are on screen.
    pub fn update_viewport(&mut self) {
        let count = self.binding.record_count();
        self.cursor = self.cursor.min(count.saturating_sub(1));
        let summary = GridBinding::summary_row(self.cursor);
        if summary < self.viewport_row {
            self.viewport_row = summary;
            return;
        }

        let heights = self.row_heights();
        let detail = GridBinding::detail_row(self.cursor).min(heights.len().saturating_sub(1));
        let used = |from: usize| -> usize {
            heights
                .get(from..=detail)
                .map(|rows| rows.iter().map(|&h| h as usize).sum())
                .unwrap_or(0)
        };
        while self.viewport_row < summary && used(self.viewport_row) > self.visible_height {
            self.viewport_row += ROWS_PER_RECORD;
        }
    }

    fn apply(&mut self, change: GridChange) {
        debug!(?change, cursor = self.cursor, "grid changed");
        self.update_viewport();
    }

    fn report_error(&mut self, error: impl std::fmt::Display) {
        self.status_message = format!("Error: {}", error);
    }

    pub fn toggle_starred(&mut self) {
        match self.binding.toggle_starred(self.cursor) {
            Ok(change) => {
                let starred = self.selected().is_some_and(|a| a.starred);
                self.status_message = if starred { "Starred" } else { "Unstarred" }.to_string();
                self.apply(change);
            }
            Err(e) => self.report_error(e),
        }
    }

    pub fn toggle_read(&mut self) {
        let read = !self.selected().is_some_and(|a| a.read);
        match self.binding.set_read(self.cursor, read) {
            Ok(change) => {
                self.status_message = if read { "Marked read" } else { "Marked unread" }.to_string();
                self.apply(change);
            }
            Err(e) => self.report_error(e),
        }
    }

    fn blank_article(&mut self) -> Article {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        Article::new(id, "New article", "")
    }

    /// Append a blank article and select it.
    pub fn append_record(&mut self) {
        let article = self.blank_article();
        let change = self.binding.push_record(article);
        self.cursor = self.binding.record_count() - 1;
        self.status_message = "Added article".to_string();
        self.apply(change);
    }

    /// Insert a blank article above the selection and select it.
    pub fn insert_record_above(&mut self) {
        let article = self.blank_article();
        let index = self.cursor.min(self.binding.record_count());
        match self.binding.insert_record(index, article) {
            Ok(change) => {
                self.cursor = index;
                self.status_message = "Inserted article".to_string();
                self.apply(change);
            }
            Err(e) => self.report_error(e),
        }
    }

    pub fn remove_record(&mut self) {
        if self.binding.record_count() == 0 {
            self.status_message = "Nothing to remove".to_string();
            return;
        }
        match self.binding.remove_record(self.cursor) {
            Ok((removed, change)) => {
                self.status_message = format!("Removed '{}'", removed.title);
                self.apply(change);
            }
            Err(e) => self.report_error(e),
        }
    }

    /// Show the first column that is not on screen yet.
    pub fn add_next_column(&mut self) {
        let shown = self.binding.columns();
        let Some(column) = Column::ALL.iter().copied().find(|c| !shown.contains(c)) else {
            self.status_message = "All columns shown".to_string();
            return;
        };
        let change = self.binding.add_column(column);
        self.status_message = format!("Added column {}", column);
        self.apply(change);
    }

    pub fn copy_url(&mut self) {
        let Some(url) = self.selected().map(|a| a.url.clone()) else {
            return;
        };
        if url.is_empty() {
            self.status_message = "Article has no URL".to_string();
        } else if self.clipboard.set_text(url.clone()) {
            self.status_message = format!("Copied {}", url);
        } else {
            self.status_message = "Error: clipboard unavailable".to_string();
        }
    }
}
