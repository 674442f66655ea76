use crate::columns::Column;
use crate::record::Article;
use multispan_grid::{SpanCount, SpanGrid};

/// Grid rows used by one article: summary then detail.
pub const ROWS_PER_RECORD: usize = 2;

/// Answers whether an article's body has already been fetched.
///
/// Supplied by the owner of the fetch machinery; the binding keeps no
/// global lookup tables of its own.
pub trait FetchLookup {
    fn is_fetched(&self, article: &Article) -> bool;
}

impl<F> FetchLookup for F
where
    F: Fn(&Article) -> bool,
{
    fn is_fetched(&self, article: &Article) -> bool {
        self(article)
    }
}

/// Display settings for summary and detail cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BindingOptions {
    pub fetched_marker: String,
    pub starred_icon: String,
    pub unstarred_icon: String,
    pub unread_marker: String,
    /// chrono format string for the date column
    pub date_format: String,
    /// Merge each detail row into one block
    pub combine_detail: bool,
}

impl Default for BindingOptions {
    fn default() -> Self {
        BindingOptions {
            fetched_marker: "✓".to_string(),
            starred_icon: "★".to_string(),
            unstarred_icon: "☆".to_string(),
            unread_marker: "unread".to_string(),
            date_format: "%Y-%m-%d %H:%M".to_string(),
            combine_detail: true,
        }
    }
}

/// Which of an article's rows a grid row is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowKind {
    Summary,
    Detail,
}

/// What a renderer has to repaint after a binding operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridChange {
    /// All rows were rebuilt.
    Reset,
    /// The column set changed.
    Structure,
    /// Rows `first..=last` were inserted.
    Inserted { first: usize, last: usize },
    /// Contents of one row changed, spans did not.
    Updated { row: usize },
}

/// Keeps a [`SpanGrid`] in lockstep with an ordered list of articles.
pub struct GridBinding {
    pub(crate) records: Vec<Article>,
    pub(crate) columns: Vec<Column>,
    pub(crate) spans: SpanGrid,
    pub(crate) options: BindingOptions,
    pub(crate) fetched: Box<dyn FetchLookup>,
}

impl GridBinding {
    /// Create an empty binding for the given columns.
    pub fn new(
        columns: Vec<Column>,
        options: BindingOptions,
        fetched: impl FetchLookup + 'static,
    ) -> Self {
        let spans = SpanGrid::new(0, columns.len());
        GridBinding {
            records: Vec::new(),
            columns,
            spans,
            options,
            fetched: Box::new(fetched),
        }
    }

    /// Create a binding and bind `records` straight away.
    pub fn with_records(
        records: Vec<Article>,
        columns: Vec<Column>,
        options: BindingOptions,
        fetched: impl FetchLookup + 'static,
    ) -> Self {
        let mut binding = Self::new(columns, options, fetched);
        binding.set_records(records);
        binding
    }

    pub fn spans(&self) -> &SpanGrid {
        &self.spans
    }

    pub fn records(&self) -> &[Article] {
        &self.records
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn options(&self) -> &BindingOptions {
        &self.options
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn row_count(&self) -> usize {
        self.spans.row_count()
    }

    pub fn column_count(&self) -> usize {
        self.spans.column_count()
    }

    pub fn is_visible(&self, row: usize, col: usize) -> bool {
        self.spans.is_visible(row, col)
    }

    pub fn span(&self, row: usize, col: usize) -> SpanCount {
        self.spans.span(row, col)
    }

    /// First column of the merged detail block: the title column if shown,
    /// otherwise the first column.
    pub fn detail_start_column(&self) -> usize {
        self.columns
            .iter()
            .position(|c| *c == Column::Title)
            .unwrap_or(0)
    }

    pub fn summary_row(index: usize) -> usize {
        index * ROWS_PER_RECORD
    }

    pub fn detail_row(index: usize) -> usize {
        index * ROWS_PER_RECORD + 1
    }

    pub fn row_kind(&self, row: usize) -> Option<RowKind> {
        if row >= self.row_count() {
            return None;
        }
        Some(if row % ROWS_PER_RECORD == 0 {
            RowKind::Summary
        } else {
            RowKind::Detail
        })
    }

    /// Index of the article owning `row`, for summary and detail rows alike.
    pub fn owner_of(&self, row: usize) -> Option<usize> {
        let index = row / ROWS_PER_RECORD;
        (index < self.records.len()).then_some(index)
    }

    /// The article shown on a summary row.
    ///
    /// Detail rows and rows outside the table have no record of their own.
    pub fn record_at(&self, row: usize) -> Option<&Article> {
        match self.row_kind(row)? {
            RowKind::Summary => self.owner_of(row).map(|index| &self.records[index]),
            RowKind::Detail => None,
        }
    }
}

impl std::fmt::Debug for GridBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridBinding")
            .field("records", &self.records.len())
            .field("columns", &self.columns)
            .field("spans", &self.spans)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
