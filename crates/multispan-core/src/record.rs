//! Article records bound to the table.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Author of an article.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Author {
    pub id: i64,
    pub name: String,
}

/// One article shown as a summary row plus a detail row.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Article {
    pub id: i64,
    pub url: String,
    /// Identifier of the source the article was fetched from (e.g. "nrc").
    pub source_id: String,
    pub author: Option<Author>,
    pub title: String,
    pub date_time: Option<NaiveDateTime>,
    /// Body or summary text, shown in the detail row.
    pub text: String,
    pub likes: i32,
    pub starred: bool,
    pub read: bool,
    pub archived: bool,
}

impl Article {
    /// Create an unread, unstarred article with just a title and text.
    pub fn new(id: i64, title: &str, text: &str) -> Self {
        Article {
            id,
            title: title.to_string(),
            text: text.to_string(),
            ..Default::default()
        }
    }

    pub fn author_name(&self) -> &str {
        self.author.as_ref().map_or("", |a| a.name.as_str())
    }
}
