//! Storage helpers (article files and text export).

mod records;
mod text;

pub use records::{MAX_RECORDS_FILE_BYTES, load_articles, parse_articles};
pub use text::{render_text, write_text};
