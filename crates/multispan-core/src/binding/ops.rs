use super::{GridBinding, GridChange};
use crate::columns::Column;
use crate::error::{MultispanError, Result};
use crate::record::Article;
use tracing::{debug, info};

impl GridBinding {
    /// Replace the bound articles, rebuilding every span.
    pub fn set_records(&mut self, records: Vec<Article>) -> GridChange {
        self.records = records;
        self.rebuild_spans();
        info!(records = self.records.len(), "articles bound");
        GridChange::Reset
    }

    /// Replace the displayed columns, rebuilding every span.
    pub fn set_columns(&mut self, columns: Vec<Column>) -> GridChange {
        self.columns = columns;
        self.rebuild_spans();
        info!(columns = self.columns.len(), "columns bound");
        GridChange::Structure
    }

    /// Append an article at the end of the table.
    pub fn push_record(&mut self, article: Article) -> GridChange {
        let index = self.records.len();
        self.records.push(article);
        self.spans.add_row();
        self.spans.add_row();
        self.combine_detail_row(index);

        GridChange::Inserted {
            first: Self::summary_row(index),
            last: Self::detail_row(index),
        }
    }

    /// Insert an article before the article at `index`.
    ///
    /// Rows are inserted at a record boundary, so no merged block is split.
    pub fn insert_record(&mut self, index: usize, article: Article) -> Result<GridChange> {
        if index > self.records.len() {
            return Err(MultispanError::RecordIndex {
                index,
                len: self.records.len(),
            });
        }
        self.records.insert(index, article);
        let first = Self::summary_row(index);
        self.spans.insert_row(first);
        self.spans.insert_row(first + 1);
        self.combine_detail_row(index);

        Ok(GridChange::Inserted {
            first,
            last: first + 1,
        })
    }

    /// Remove the article at `index`.
    ///
    /// The span grid cannot drop rows, so the whole table is rebuilt.
    pub fn remove_record(&mut self, index: usize) -> Result<(Article, GridChange)> {
        if index >= self.records.len() {
            return Err(MultispanError::RecordIndex {
                index,
                len: self.records.len(),
            });
        }
        let removed = self.records.remove(index);
        self.rebuild_spans();
        Ok((removed, GridChange::Reset))
    }

    /// Append a column and widen every detail block over it.
    pub fn add_column(&mut self, column: Column) -> GridChange {
        let old_start = self.detail_start_column();
        self.columns.push(column);
        self.spans.add_column();

        if self.options.combine_detail {
            for index in 0..self.records.len() {
                self.spans.split(Self::detail_row(index), old_start);
                self.combine_detail_row(index);
            }
        }
        GridChange::Structure
    }

    /// Flip the starred flag of an article.
    pub fn toggle_starred(&mut self, index: usize) -> Result<GridChange> {
        let article = self.record_mut(index)?;
        article.starred = !article.starred;
        Ok(GridChange::Updated {
            row: Self::summary_row(index),
        })
    }

    /// Mark an article read or unread.
    pub fn set_read(&mut self, index: usize, read: bool) -> Result<GridChange> {
        let article = self.record_mut(index)?;
        article.read = read;
        Ok(GridChange::Updated {
            row: Self::summary_row(index),
        })
    }

    fn record_mut(&mut self, index: usize) -> Result<&mut Article> {
        let len = self.records.len();
        self.records
            .get_mut(index)
            .ok_or(MultispanError::RecordIndex { index, len })
    }

    /// Reset the grid to the current shape and re-issue every detail merge.
    pub(crate) fn rebuild_spans(&mut self) {
        self.spans
            .set_size(self.columns.len(), self.records.len() * super::ROWS_PER_RECORD);
        for index in 0..self.records.len() {
            self.combine_detail_row(index);
        }
    }

    /// Merge the detail row of article `index` from the detail start column
    /// to the last column.
    fn combine_detail_row(&mut self, index: usize) -> bool {
        if !self.options.combine_detail {
            return false;
        }
        let start = self.detail_start_column();
        let cols = self.columns.len().saturating_sub(start);
        let applied = self
            .spans
            .combine_area(Self::detail_row(index), start, 1, cols);
        if !applied {
            debug!(index, start, cols, "detail row left un-combined");
        }
        applied
    }
}
