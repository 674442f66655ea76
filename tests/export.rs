//! Integration tests for text export (-o/--output flag)

use std::path::PathBuf;
use std::process::Command;

struct Cleanup(Vec<PathBuf>);

impl Drop for Cleanup {
    fn drop(&mut self) {
        for path in &self.0 {
            let _ = std::fs::remove_file(path);
        }
    }
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("multispan_{}_{}", std::process::id(), name))
}

const CONFIG: &str = r#"
columns = ["starred", "title", "author"]
unstarred_icon = "-"
detail_height = 1

[column_widths]
starred = 2
title = 6
author = 5
"#;

const ARTICLES: &str = r#"
[[article]]
id = 1
title = "Bees"
author = { id = 7, name = "Ann" }
text = "Bees can count."

[[article]]
id = 2
title = "Ants"
starred = true
text = ""
"#;

fn run(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_multispan"))
        .args(args)
        .env_remove("MULTISPAN_LOG")
        .output()
        .expect("Failed to execute multispan");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

#[test]
fn test_export_merges_detail_rows() {
    let config = temp_path("merge_config.toml");
    let articles = temp_path("merge_articles.toml");
    let output = temp_path("merge_out.txt");
    let _cleanup = Cleanup(vec![config.clone(), articles.clone(), output.clone()]);
    std::fs::write(&config, CONFIG).unwrap();
    std::fs::write(&articles, ARTICLES).unwrap();

    let (stdout, stderr, code) = run(&[
        "-c",
        config.to_str().unwrap(),
        articles.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]);
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.starts_with("Exported to"));

    let text = std::fs::read_to_string(&output).unwrap();
    let expected = [
        "+--+------+-----+",
        "|* |Title |Autho|",
        "+--+------+-----+",
        "|- |Bees  |Ann  |",
        "+--+------+-----+",
        "|  |Bees can    |",
        "+--+------+-----+",
        "|★ |Ants  |     |",
        "+--+------+-----+",
        "|  |            |",
        "+--+------------+",
    ];
    assert_eq!(text, expected.join("\n") + "\n");
}

#[test]
fn test_export_without_detail_merge() {
    let config = temp_path("nodetail_config.toml");
    let articles = temp_path("nodetail_articles.toml");
    let output = temp_path("nodetail_out.txt");
    let _cleanup = Cleanup(vec![config.clone(), articles.clone(), output.clone()]);
    std::fs::write(&config, CONFIG).unwrap();
    std::fs::write(&articles, ARTICLES).unwrap();

    let (_, stderr, code) = run(&[
        "--no-detail",
        "--config",
        config.to_str().unwrap(),
        articles.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ]);
    assert_eq!(code, 0, "stderr: {}", stderr);

    let text = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[5], "|  |Bees  |     |");
    assert_eq!(lines[6], "+--+------+-----+");
}

#[test]
fn test_bad_articles_file_fails() {
    let config = temp_path("bad_config.toml");
    let articles = temp_path("bad_articles.toml");
    let output = temp_path("bad_out.txt");
    let _cleanup = Cleanup(vec![config.clone(), articles.clone(), output.clone()]);
    std::fs::write(&config, CONFIG).unwrap();
    std::fs::write(&articles, "[[article]]\nid = \"one\"\n").unwrap();

    let (_, stderr, code) = run(&[
        "-c",
        config.to_str().unwrap(),
        articles.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Failed to load"), "stderr: {}", stderr);
    assert!(!output.exists());
}

#[test]
fn test_unknown_option() {
    let (_, stderr, code) = run(&["--bogus"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown option: --bogus"));
}
