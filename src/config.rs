//! Viewer configuration loaded from `config.toml`.
//!
//! A broken or missing config never stops the viewer: every problem is
//! reported as a warning and the affected setting keeps its default.

use directories::ProjectDirs;
use multispan_core::{BindingOptions, Column};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const MAX_CONFIG_FILE_BYTES: u64 = 1024 * 1024;
const MAX_DETAIL_HEIGHT: u16 = 20;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    columns: Option<Vec<String>>,
    column_widths: Option<HashMap<String, u16>>,
    combine_detail: Option<bool>,
    fetched_marker: Option<String>,
    starred_icon: Option<String>,
    unstarred_icon: Option<String>,
    unread_marker: Option<String>,
    date_format: Option<String>,
    detail_height: Option<u16>,
    log: Option<LogSection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LogSection {
    file: Option<PathBuf>,
    level: Option<String>,
}

/// Settings the viewer runs with after defaults are applied.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub columns: Vec<Column>,
    pub column_widths: HashMap<Column, u16>,
    pub binding: BindingOptions,
    /// Lines given to each detail row.
    pub detail_height: u16,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            columns: Column::ALL.to_vec(),
            column_widths: HashMap::new(),
            binding: BindingOptions::default(),
            detail_height: 2,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn width_of(&self, column: Column) -> u16 {
        self.column_widths
            .get(&column)
            .copied()
            .unwrap_or(column.default_width())
    }

    /// Widths for `columns`, in order.
    pub fn widths(&self, columns: &[Column]) -> Vec<u16> {
        columns.iter().map(|&c| self.width_of(c)).collect()
    }
}

/// Load the config from `config_file`, or from the user config dir when none
/// is given. Returns the config plus any warnings for the user.
pub fn load_config(config_file: Option<&PathBuf>) -> (Config, Vec<String>) {
    let mut warnings = Vec::new();
    let explicit = config_file.is_some();
    let Some(path) = config_file.cloned().or_else(user_config_path) else {
        return (Config::default(), warnings);
    };
    if !explicit && !path.exists() {
        return (Config::default(), warnings);
    }

    match read_config_file(&path) {
        Ok(content) => {
            let (config, parse_warnings) = parse_config(&content, &path);
            warnings.extend(parse_warnings);
            (config, warnings)
        }
        Err(message) => {
            warnings.push(message);
            (Config::default(), warnings)
        }
    }
}

fn read_config_file(path: &Path) -> std::result::Result<String, String> {
    let meta = fs::metadata(path)
        .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
    if meta.len() > MAX_CONFIG_FILE_BYTES {
        return Err(format!(
            "Config {} is too large ({} bytes, max {})",
            path.display(),
            meta.len(),
            MAX_CONFIG_FILE_BYTES
        ));
    }
    fs::read_to_string(path).map_err(|e| format!("Failed to read config {}: {}", path.display(), e))
}

/// Parse config text; `path` only appears in warnings.
pub(crate) fn parse_config(content: &str, path: &Path) -> (Config, Vec<String>) {
    let mut warnings = Vec::new();
    let file: ConfigFile = match toml::from_str(content) {
        Ok(file) => file,
        Err(e) => {
            warnings.push(format!(
                "Failed to parse config {}: {}",
                path.display(),
                e.message()
            ));
            return (Config::default(), warnings);
        }
    };
    let config = apply(file, &mut warnings);
    (config, warnings)
}

fn apply(file: ConfigFile, warnings: &mut Vec<String>) -> Config {
    let mut config = Config::default();

    if let Some(names) = file.columns {
        let mut columns = Vec::new();
        for name in &names {
            match Column::from_identifier(name) {
                Some(column) if columns.contains(&column) => {
                    warnings.push(format!("Column '{}' listed twice; ignoring repeat", name));
                }
                Some(column) => columns.push(column),
                None => warnings.push(format!("Unknown column '{}'", name)),
            }
        }
        if columns.is_empty() {
            warnings.push("No usable columns configured; using defaults".to_string());
        } else {
            config.columns = columns;
        }
    }

    for (name, width) in file.column_widths.unwrap_or_default() {
        match Column::from_identifier(&name) {
            Some(_) if width == 0 => {
                warnings.push(format!("Width of column '{}' must be at least 1", name));
            }
            Some(column) => {
                config.column_widths.insert(column, width);
            }
            None => warnings.push(format!("Unknown column '{}' in column_widths", name)),
        }
    }

    let binding = &mut config.binding;
    if let Some(combine) = file.combine_detail {
        binding.combine_detail = combine;
    }
    if let Some(marker) = file.fetched_marker {
        binding.fetched_marker = marker;
    }
    if let Some(icon) = file.starred_icon {
        binding.starred_icon = icon;
    }
    if let Some(icon) = file.unstarred_icon {
        binding.unstarred_icon = icon;
    }
    if let Some(marker) = file.unread_marker {
        binding.unread_marker = marker;
    }
    if let Some(format) = file.date_format {
        binding.date_format = format;
    }

    if let Some(height) = file.detail_height {
        if (1..=MAX_DETAIL_HEIGHT).contains(&height) {
            config.detail_height = height;
        } else {
            warnings.push(format!(
                "detail_height must be between 1 and {}; keeping {}",
                MAX_DETAIL_HEIGHT, config.detail_height
            ));
        }
    }

    if let Some(log) = file.log {
        config.log_file = log.file;
        if let Some(level) = log.level {
            config.log_level = level;
        }
    }

    config
}

fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "multispan")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}
