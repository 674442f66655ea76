//! Column identifiers for the article table.

use std::fmt;

/// A displayed column of the summary row.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Column {
    /// Marker shown when the article body has been fetched.
    Fetched,
    /// Starred/unstarred icon.
    Starred,
    /// "unread" marker.
    Read,
    Title,
    Author,
    DateTime,
}

impl Column {
    /// All columns in their default display order.
    pub const ALL: [Column; 6] = [
        Column::Fetched,
        Column::Starred,
        Column::Read,
        Column::Title,
        Column::Author,
        Column::DateTime,
    ];

    /// Identifier used in config files.
    pub fn identifier(&self) -> &'static str {
        match self {
            Column::Fetched => "fetched",
            Column::Starred => "starred",
            Column::Read => "read",
            Column::Title => "title",
            Column::Author => "author",
            Column::DateTime => "date",
        }
    }

    /// Header label.
    pub fn label(&self) -> &'static str {
        match self {
            Column::Fetched => "F",
            Column::Starred => "*",
            Column::Read => "Read",
            Column::Title => "Title",
            Column::Author => "Author",
            Column::DateTime => "Date",
        }
    }

    pub fn default_width(&self) -> u16 {
        match self {
            Column::Fetched => 2,
            Column::Starred => 2,
            Column::Read => 6,
            Column::Title => 40,
            Column::Author => 18,
            Column::DateTime => 16,
        }
    }

    /// Look up a column by its config identifier (case-insensitive).
    pub fn from_identifier(name: &str) -> Option<Column> {
        let name = name.trim();
        Column::ALL
            .into_iter()
            .find(|c| c.identifier().eq_ignore_ascii_case(name))
    }
}

impl std::str::FromStr for Column {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_identifier(s).ok_or_else(|| format!("Unknown column: {}", s))
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
