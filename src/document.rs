use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::error::SimilarityError;
use crate::frequency::{FrequencyMap, TokenCounts};

#[derive(Debug)]
pub struct Document {
    pub filename: String,
    pub path: PathBuf,
    pub frequencies: FrequencyMap,
    pub total_tokens: usize,
    pub distinct_tokens: usize,
    pub error: Option<String>,
}

impl Document {
    pub fn from_text(path: &Path, text: &str, config: &Config) -> Self {
        let counts = TokenCounts::count(text, &config.stop_words);
        let frequencies = counts.top_frequencies(config.top_words);
        let filename = display_name(path);
        debug!(
            "{}: {} distinct tokens, kept {} with mass {:.3}",
            filename,
            counts.distinct(),
            frequencies.len(),
            frequencies.total_mass()
        );
        Document {
            filename,
            path: path.to_path_buf(),
            frequencies,
            total_tokens: counts.total(),
            distinct_tokens: counts.distinct(),
            error: None,
        }
    }

    pub fn failed(path: &Path, error: &SimilarityError) -> Self {
        Document {
            filename: display_name(path),
            path: path.to_path_buf(),
            frequencies: FrequencyMap::default(),
            total_tokens: 0,
            distinct_tokens: 0,
            error: Some(error.to_string()),
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}
