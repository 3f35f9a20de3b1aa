//! Console and JSON rendering of an [`Analysis`].

use std::io::{self, Write};

use serde::Serialize;

use crate::Analysis;

pub fn write_text<W: Write>(analysis: &Analysis, out: &mut W) -> io::Result<()> {
    writeln!(out, "Similarity Matrix:")?;
    for row in analysis.matrix.rows() {
        for score in row {
            write!(out, "{:.3} ", score)?;
        }
        writeln!(out)?;
    }

    writeln!(out)?;
    writeln!(out, "Top {} Similar Pairs:", analysis.pair_limit)?;
    for pair in &analysis.top_pairs {
        writeln!(
            out,
            "Books {} and {} - Similarity: {:.3}",
            pair.first + 1,
            pair.second + 1,
            pair.similarity
        )?;
    }
    Ok(())
}

pub fn write_top_words<W: Write>(analysis: &Analysis, count: usize, out: &mut W) -> io::Result<()> {
    for (i, document) in analysis.corpus.documents.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "Book {} ({}) top words:", i + 1, document.filename)?;
        if let Some(error) = &document.error {
            writeln!(out, "  unavailable: {}", error)?;
            continue;
        }
        for (rank, (token, frequency)) in document
            .frequencies
            .ranked()
            .into_iter()
            .take(count)
            .enumerate()
        {
            writeln!(out, "  {:>3}. {:<20} {:.4}", rank + 1, token, frequency)?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    documents: Vec<JsonDocument<'a>>,
    matrix: Vec<&'a [f64]>,
    top_pairs: Vec<JsonPair>,
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    index: usize,
    filename: &'a str,
    total_tokens: usize,
    distinct_tokens: usize,
    retained_mass: f64,
    error: Option<&'a str>,
}

#[derive(Serialize)]
struct JsonPair {
    first: usize,
    second: usize,
    similarity: f64,
}

pub fn to_json(analysis: &Analysis) -> serde_json::Result<String> {
    let report = JsonReport {
        documents: analysis
            .corpus
            .documents
            .iter()
            .enumerate()
            .map(|(i, d)| JsonDocument {
                index: i + 1,
                filename: &d.filename,
                total_tokens: d.total_tokens,
                distinct_tokens: d.distinct_tokens,
                retained_mass: d.frequencies.total_mass(),
                error: d.error.as_deref(),
            })
            .collect(),
        matrix: analysis.matrix.rows().collect(),
        top_pairs: analysis
            .top_pairs
            .iter()
            .map(|p| JsonPair {
                first: p.first + 1,
                second: p.second + 1,
                similarity: p.similarity,
            })
            .collect(),
    };
    serde_json::to_string_pretty(&report)
}
