//! Article records file (TOML).

use crate::error::{MultispanError, Result};
use crate::record::Article;
use serde::Deserialize;
use std::path::Path;

pub const MAX_RECORDS_FILE_BYTES: u64 = 8_388_608; // 8 MiB

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RecordsFile {
    #[serde(default)]
    article: Vec<Article>,
}

/// Load articles from a TOML file of `[[article]]` tables.
pub fn load_articles(path: &Path) -> Result<Vec<Article>> {
    let size = std::fs::metadata(path)?.len();
    if size > MAX_RECORDS_FILE_BYTES {
        return Err(MultispanError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max: MAX_RECORDS_FILE_BYTES,
        });
    }
    let content = std::fs::read_to_string(path)?;
    parse_articles(&content)
}

/// Parse articles from TOML content.
pub fn parse_articles(content: &str) -> Result<Vec<Article>> {
    let file: RecordsFile = toml::from_str(content).map_err(|err| {
        let line = err
            .span()
            .map(|span| content[..span.start.min(content.len())].matches('\n').count() + 1)
            .unwrap_or(0);
        MultispanError::Parse {
            line,
            message: err.message().to_string(),
        }
    })?;
    Ok(file.article)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_articles() {
        let content = r#"
[[article]]
id = 1
url = "https://example.org/a"
source_id = "nrc"
title = "Bees"
author = { id = 7, name = "A. Writer" }
date_time = "2017-03-01T10:15:00"
text = "Bees can count."
likes = 3
starred = true

[[article]]
id = 2
title = "Second"
"#;
        let articles = parse_articles(content).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].author_name(), "A. Writer");
        assert!(articles[0].starred);
        assert!(articles[0].date_time.is_some());
        assert_eq!(articles[1].title, "Second");
        assert_eq!(articles[1].text, "");
        assert!(!articles[1].read);
    }

    #[test]
    fn test_parse_empty_content() {
        assert!(parse_articles("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_error_reports_line() {
        let content = "[[article]]\nid = 1\ntitle = \n";
        match parse_articles(content) {
            Err(MultispanError::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let content = "[[article]]\nid = 1\nbogus = 3\n";
        assert!(matches!(
            parse_articles(content),
            Err(MultispanError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("multispan_missing_records_file.toml");
        assert!(matches!(load_articles(&path), Err(MultispanError::Io(_))));
    }

    #[test]
    fn test_load_articles_from_file() {
        let path = std::env::temp_dir().join(format!(
            "multispan_records_{}_{:?}.toml",
            std::process::id(),
            std::thread::current().id(),
        ));
        struct Cleanup(std::path::PathBuf);
        impl Drop for Cleanup {
            fn drop(&mut self) {
                let _ = std::fs::remove_file(&self.0);
            }
        }
        let _cleanup = Cleanup(path.clone());
        std::fs::write(&path, "[[article]]\nid = 5\ntitle = \"Saved\"\n").unwrap();

        let articles = load_articles(&path).unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].id, 5);
    }
}
