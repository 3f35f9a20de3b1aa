use crate::config::Config;
use crate::document::Document;
use crate::error::{Result, SimilarityError};
use crate::frequency::FrequencyMap;
use crate::similarity::SimilarityMatrix;
use epub::doc::EpubDoc;
use std::fs;
use std::path::Path;
use tracing::{error, info};

// wide enough that html2text never wraps a paragraph mid-word
const EPUB_TEXT_WIDTH: usize = 10_000;

pub struct Corpus {
    pub documents: Vec<Document>,
}
impl Corpus {
    pub fn load(config: &Config) -> Self {
        let documents = config
            .documents
            .iter()
            .map(|path| match read_document(path) {
                Ok(text) => {
                    let document = Document::from_text(path, &text, config);
                    info!(
                        "read {}: {} tokens counted",
                        document.filename, document.total_tokens
                    );
                    document
                }
                Err(e) => {
                    error!("{}", e);
                    Document::failed(path, &e)
                }
            })
            .collect();
        Corpus { documents }
    }
    pub fn from_documents(documents: Vec<Document>) -> Self {
        Corpus { documents }
    }
    pub fn len(&self) -> usize {
        self.documents.len()
    }
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
    pub fn frequency_maps(&self) -> impl Iterator<Item = &FrequencyMap> {
        self.documents.iter().map(|d| &d.frequencies)
    }
    pub fn similarity_matrix(&self) -> SimilarityMatrix {
        SimilarityMatrix::build(self.frequency_maps())
    }
}

pub fn read_document(path: &Path) -> Result<String> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "pdf" => process_pdf(path),
        "epub" => process_epub(path),
        _ => process_txt(path),
    }
}
fn process_pdf(path: &Path) -> Result<String> {
    // pdf-extract reports a missing file as an extraction error, so check first
    fs::metadata(path).map_err(|source| SimilarityError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    pdf_extract::extract_text(path).map_err(|e| SimilarityError::Extract {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
fn process_epub(path: &Path) -> Result<String> {
    fs::metadata(path).map_err(|source| SimilarityError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let mut doc = EpubDoc::new(path).map_err(|e| SimilarityError::Extract {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let mut content = String::new();
    loop {
        if let Some((chapter, _mime)) = doc.get_current_str() {
            content.push_str(&html2text::from_read(chapter.as_bytes(), EPUB_TEXT_WIDTH));
            content.push('\n');
        }
        if !doc.go_next() {
            break;
        }
    }
    Ok(content)
}
fn process_txt(path: &Path) -> Result<String> {
    let raw_contents = fs::read(path).map_err(|source| SimilarityError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&raw_contents).into_owned())
}
