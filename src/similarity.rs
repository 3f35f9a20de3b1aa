use crate::frequency::FrequencyMap;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarPair {
    pub first: usize,
    pub second: usize,
    pub similarity: f64,
}

/// Histogram intersection: the sum, over tokens kept by both maps, of the
/// smaller of the two frequencies.
///
/// Shared tokens are visited in token order whichever map comes first, so
/// `histogram_intersection(a, b) == histogram_intersection(b, a)` exactly.
pub fn histogram_intersection(a: &FrequencyMap, b: &FrequencyMap) -> f64 {
    let mut similarity = 0.0;
    for (token, frequency) in a.iter() {
        if let Some(other) = b.get(token) {
            similarity += frequency.min(other);
        }
    }
    similarity
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    scores: Vec<f64>,
}
impl SimilarityMatrix {
    pub fn build<'a>(maps: impl IntoIterator<Item = &'a FrequencyMap>) -> Self {
        let maps: Vec<&FrequencyMap> = maps.into_iter().collect();
        let size = maps.len();
        let mut scores = vec![0.0; size * size];
        for i in 0..size {
            for j in (i + 1)..size {
                let similarity = histogram_intersection(maps[i], maps[j]);
                scores[i * size + j] = similarity;
                scores[j * size + i] = similarity;
            }
        }
        SimilarityMatrix { size, scores }
    }
    pub fn size(&self) -> usize {
        self.size
    }
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.size && j < self.size, "index out of range");
        self.scores[i * self.size + j]
    }
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.scores.chunks(self.size.max(1))
    }
    pub fn pairs(&self) -> Vec<SimilarPair> {
        let mut pairs = Vec::with_capacity(self.size * self.size.saturating_sub(1) / 2);
        for first in 0..self.size {
            for second in (first + 1)..self.size {
                pairs.push(SimilarPair {
                    first,
                    second,
                    similarity: self.get(first, second),
                });
            }
        }
        pairs
    }
    pub fn ranked_pairs(&self, limit: usize) -> Vec<SimilarPair> {
        let mut pairs = self.pairs();
        pairs.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        pairs.truncate(limit);
        pairs
    }
}
