//! Pairwise lexical similarity between books.
//!
//! Each book is reduced to its most frequent words (stop words removed),
//! weighted by their share of the book's counted words. Two books are as
//! similar as the overlap of those weights.

pub mod config;
pub mod corpus;
pub mod document;
pub mod error;
pub mod frequency;
pub mod lexer;
pub mod report;
pub mod similarity;

pub use config::{Config, StopWords};
pub use corpus::Corpus;
pub use error::{Result, SimilarityError};
pub use frequency::FrequencyMap;
pub use similarity::{histogram_intersection, SimilarPair, SimilarityMatrix};

pub struct Analysis {
    pub corpus: Corpus,
    pub matrix: SimilarityMatrix,
    pub top_pairs: Vec<SimilarPair>,
    pub pair_limit: usize,
}

impl Analysis {
    pub fn from_corpus(corpus: Corpus, pair_limit: usize) -> Self {
        let matrix = corpus.similarity_matrix();
        let top_pairs = matrix.ranked_pairs(pair_limit);
        Analysis {
            corpus,
            matrix,
            top_pairs,
            pair_limit,
        }
    }
}

pub fn analyze(config: &Config) -> Analysis {
    Analysis::from_corpus(Corpus::load(config), config.top_pairs)
}
