use super::{GridBinding, RowKind};
use crate::columns::Column;
use crate::record::Article;
use std::fmt::Write;

impl GridBinding {
    /// Text of the block anchored at `(row, col)`.
    ///
    /// Returns `None` for covered cells and cells outside the table.
    pub fn cell_text(&self, row: usize, col: usize) -> Option<String> {
        if !self.spans.is_visible(row, col) {
            return None;
        }
        let article = self.records.get(self.owner_of(row)?)?;
        let column = *self.columns.get(col)?;
        let text = match self.row_kind(row)? {
            RowKind::Summary => self.summary_text(article, column),
            RowKind::Detail if col == self.detail_start_column() => article.text.clone(),
            RowKind::Detail => String::new(),
        };
        Some(text)
    }

    fn summary_text(&self, article: &Article, column: Column) -> String {
        match column {
            Column::Fetched if self.fetched.is_fetched(article) => {
                self.options.fetched_marker.clone()
            }
            Column::Fetched => String::new(),
            Column::Starred if article.starred => self.options.starred_icon.clone(),
            Column::Starred => self.options.unstarred_icon.clone(),
            Column::Read if article.read => String::new(),
            Column::Read => self.options.unread_marker.clone(),
            Column::Title => article.title.clone(),
            Column::Author => article.author_name().to_string(),
            Column::DateTime => article
                .date_time
                .map(|dt| {
                    // A bad user format string makes chrono's Display fail.
                    let mut out = String::new();
                    match write!(out, "{}", dt.format(&self.options.date_format)) {
                        Ok(()) => out,
                        Err(_) => String::new(),
                    }
                })
                .unwrap_or_default(),
        }
    }
}
