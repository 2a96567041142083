use std::{fs, path::Path, path::PathBuf};

use bmf_engine::RasterOptions;
use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT: &str = "output.bmf";

/// Generator settings, read from an optional TOML file. Command line flags win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    pub output: PathBuf,

    /// Name stored in the header, defaults to the input file stem.
    pub name: Option<String>,

    pub raster: RasterOptions,

    /// Widen space glyphs narrower than this after a TrueType import.
    pub space_min_width: Option<u8>,

    /// Default log filter, `RUST_LOG` overrides it.
    pub log_level: String,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            name: None,
            raster: RasterOptions::default(),
            space_min_width: None,
            log_level: "info".to_string(),
        }
    }
}

impl GenConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Title-case a file stem: the first letter after any non-letter is upper case, the rest lower case.
pub fn title_case(stem: &str) -> String {
    let mut result = String::with_capacity(stem.len());
    let mut start_of_word = true;
    for ch in stem.chars() {
        if ch.is_alphabetic() {
            if start_of_word {
                result.extend(ch.to_uppercase());
            } else {
                result.extend(ch.to_lowercase());
            }
            start_of_word = false;
        } else {
            result.push(ch);
            start_of_word = true;
        }
    }
    result
}

/// Default font name for an input file.
pub fn name_from_path(path: &Path) -> String {
    path.file_stem().map(|stem| title_case(&stem.to_string_lossy())).unwrap_or_default()
}
