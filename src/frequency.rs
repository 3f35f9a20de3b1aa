use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::config::StopWords;
use crate::lexer::tokenize;

#[derive(Debug, Default)]
pub struct TokenCounts {
    counts: HashMap<String, usize>,
    total: usize,
}

impl TokenCounts {
    pub fn count(text: &str, stop_words: &StopWords) -> Self {
        let mut counts = HashMap::<String, usize>::new();
        let mut total = 0;
        for word in tokenize(text) {
            if stop_words.is_stop_word(&word) {
                continue;
            }
            *counts.entry(word).or_insert(0) += 1;
            total += 1;
        }
        TokenCounts { counts, total }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(token, &count)| (token.as_str(), count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }

    pub fn top_frequencies(&self, top_words: usize) -> FrequencyMap {
        let total = self.total as f64;
        let frequencies = self
            .ranked()
            .into_iter()
            .take(top_words)
            .map(|(token, count)| (token.to_string(), count as f64 / total))
            .collect();
        FrequencyMap { frequencies }
    }
}

/// A document's retained tokens mapped to their share of its counted tokens.
///
/// Keys are kept sorted so that anything summed over a map is summed in the
/// same order every time.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FrequencyMap {
    frequencies: BTreeMap<String, f64>,
}

impl FrequencyMap {
    pub fn from_text(text: &str, stop_words: &StopWords, top_words: usize) -> Self {
        TokenCounts::count(text, stop_words).top_frequencies(top_words)
    }

    pub fn get(&self, token: &str) -> Option<f64> {
        self.frequencies.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.frequencies
            .iter()
            .map(|(token, &frequency)| (token.as_str(), frequency))
    }

    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| match b.1.total_cmp(&a.1) {
            Ordering::Equal => a.0.cmp(b.0),
            ordering => ordering,
        });
        ranked
    }

    pub fn total_mass(&self) -> f64 {
        self.frequencies.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAT_TEXT: &str = "the cat sat on the mat";

    #[test]
    fn counts_skip_stop_words() {
        let counts = TokenCounts::count(CAT_TEXT, &StopWords::default());
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.distinct(), 4);
        assert_eq!(
            counts.ranked(),
            vec![("CAT", 1), ("MAT", 1), ("ON", 1), ("SAT", 1)]
        );
    }

    #[test]
    fn extra_stop_word_is_removed_from_total() {
        let stop_words = StopWords::new(["the", "on"]);
        let map = FrequencyMap::from_text(CAT_TEXT, &stop_words, 5);
        assert_eq!(map.len(), 3);
        for token in ["CAT", "SAT", "MAT"] {
            assert!((map.get(token).unwrap() - 1.0 / 3.0).abs() < 1e-12);
        }
        assert_eq!(map.get("ON"), None);
    }

    #[test]
    fn default_stop_words_keep_on() {
        let map = FrequencyMap::from_text(CAT_TEXT, &StopWords::default(), 5);
        assert_eq!(map.len(), 4);
        for token in ["CAT", "SAT", "ON", "MAT"] {
            assert_eq!(map.get(token), Some(0.25));
        }
        assert!((map.total_mass() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn truncation_keeps_mass_below_one() {
        let text = "apple apple apple pear pear fig kiwi";
        let map = FrequencyMap::from_text(text, &StopWords::default(), 2);
        assert_eq!(map.len(), 2);
        assert!((map.get("APPLE").unwrap() - 3.0 / 7.0).abs() < 1e-12);
        assert!((map.get("PEAR").unwrap() - 2.0 / 7.0).abs() < 1e-12);
        assert!((map.total_mass() - 5.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn ties_rank_lexicographically() {
        let counts = TokenCounts::count("zeta beta beta alpha zeta gamma", &StopWords::default());
        assert_eq!(
            counts.ranked(),
            vec![("BETA", 2), ("ZETA", 2), ("ALPHA", 1), ("GAMMA", 1)]
        );

        let map = counts.top_frequencies(3);
        assert_eq!(map.get("GAMMA"), None);
        let tokens: Vec<&str> = map.ranked().into_iter().map(|(token, _)| token).collect();
        assert_eq!(tokens, vec!["BETA", "ZETA", "ALPHA"]);
    }

    #[test]
    fn only_stop_words_gives_empty_map() {
        let map = FrequencyMap::from_text("The a AN of... in, and!", &StopWords::default(), 100);
        assert!(map.is_empty());
        assert_eq!(map.total_mass(), 0.0);
    }

    #[test]
    fn zero_top_words_gives_empty_map() {
        let map = FrequencyMap::from_text(CAT_TEXT, &StopWords::default(), 0);
        assert!(map.is_empty());
    }
}
