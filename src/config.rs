use std::collections::HashSet;
use std::path::PathBuf;

use crate::lexer::normalize;

pub const DEFAULT_DOCUMENTS: [&str; 4] = ["book1.txt", "book2.txt", "book3.txt", "book4.txt"];
pub const DEFAULT_TOP_WORDS: usize = 100;
pub const DEFAULT_TOP_PAIRS: usize = 10;
pub const DEFAULT_STOP_WORDS: [&str; 6] = ["A", "AND", "AN", "OF", "IN", "THE"];

/// Words left out of frequency counting.
///
/// Entries are normalized the same way document tokens are, so `"the"`,
/// `"The"` and `"THE"` all name the same stop word.
#[derive(Debug, Clone, PartialEq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| normalize(word.as_ref()))
            .filter(|word| !word.is_empty())
            .collect();
        StopWords { words }
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        StopWords::new(DEFAULT_STOP_WORDS)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub documents: Vec<PathBuf>,
    pub top_words: usize,
    pub top_pairs: usize,
    pub stop_words: StopWords,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            documents: DEFAULT_DOCUMENTS.into_iter().map(PathBuf::from).collect(),
            top_words: DEFAULT_TOP_WORDS,
            top_pairs: DEFAULT_TOP_PAIRS,
            stop_words: StopWords::default(),
        }
    }
}
