//! Document ingestion: turn resume files into plain text for the engine
//!
//! Plain text and Markdown are read as UTF-8. PDFs go through `pdf-extract`
//! and are normalized so that layout whitespace does not skew line-based
//! scorers. Failures here are reported to the user and never reach the engine.

use globset::GlobSet;
use log::{debug, trace};
use regex::Regex;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;
use walkdir::WalkDir;

use crate::config::is_ignored;

/// Extensions read directly as text
pub const TEXT_EXTENSIONS: &[&str] = &["txt", "text", "md", "markdown"];

/// Extension handled by PDF text extraction
pub const PDF_EXTENSION: &str = "pdf";

/// Display path used for documents read from standard input
pub const STDIN_PATH: &str = "<stdin>";

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported file type: {0} (expected .txt, .md or .pdf)")]
    UnsupportedType(String),

    #[error("Could not extract text from PDF {}: {message}", path.display())]
    PdfExtraction { path: PathBuf, message: String },

    #[error("No extractable text in {} (the PDF may contain only images)", .0.display())]
    NoExtractableText(PathBuf),
}

impl IngestError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        IngestError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Lowercased extension of a path, if any
fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// All extensions this module can ingest
pub fn default_extensions() -> Vec<String> {
    TEXT_EXTENSIONS
        .iter()
        .chain(std::iter::once(&PDF_EXTENSION))
        .map(|e| e.to_string())
        .collect()
}

/// Whether a path has one of the given extensions (case-insensitive, no dot)
pub fn is_supported(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = extension_of(path) else {
        return false;
    };
    extensions
        .iter()
        .any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(&ext))
}

/// Load a resume document as text, dispatching on its extension.
///
/// An empty text file is returned as-is; the engine treats it as blank input.
pub fn load_document(path: &Path) -> Result<String, IngestError> {
    let ext = extension_of(path).unwrap_or_default();

    if TEXT_EXTENSIONS.contains(&ext.as_str()) {
        debug!("reading text document {}", path.display());
        return std::fs::read_to_string(path)
            .map(strip_bom)
            .map_err(|e| IngestError::io(path, e));
    }

    if ext == PDF_EXTENSION {
        debug!("extracting PDF document {}", path.display());
        let bytes = std::fs::read(path).map_err(|e| IngestError::io(path, e))?;
        return extract_pdf_text(path, &bytes);
    }

    Err(IngestError::UnsupportedType(if ext.is_empty() {
        "(none)".to_string()
    } else {
        format!(".{}", ext)
    }))
}

/// Read a resume from standard input
pub fn read_stdin() -> Result<String, IngestError> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|e| IngestError::io(Path::new(STDIN_PATH), e))?;
    trace!("read {} bytes from stdin", text.len());
    Ok(strip_bom(text))
}

/// Drop a leading UTF-8 byte-order mark
fn strip_bom(text: String) -> String {
    match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

/// Extract and normalize the text of an in-memory PDF.
///
/// `pdf-extract` panics on some malformed inputs, so extraction runs under
/// `catch_unwind` and a panic becomes a `PdfExtraction` error.
pub fn extract_pdf_text(path: &Path, bytes: &[u8]) -> Result<String, IngestError> {
    let extracted = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes));

    let raw = match extracted {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            return Err(IngestError::PdfExtraction {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        }
        Err(_) => {
            return Err(IngestError::PdfExtraction {
                path: path.to_path_buf(),
                message: "malformed PDF".to_string(),
            })
        }
    };

    let text = normalize_extracted_text(&raw);
    if text.is_empty() {
        return Err(IngestError::NoExtractableText(path.to_path_buf()));
    }
    debug!("extracted {} characters from {}", text.len(), path.display());
    Ok(text)
}

fn horizontal_space() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[ \t]+").unwrap())
}

fn excess_newlines() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\n{3,}").unwrap())
}

/// Collapse spaces/tabs to one space and 3+ newlines to a blank line, then trim
pub fn normalize_extracted_text(raw: &str) -> String {
    let spaced = horizontal_space().replace_all(raw, " ");
    let lined = excess_newlines().replace_all(&spaced, "\n\n");
    lined.trim().to_string()
}

/// Collect resume documents under a path.
///
/// A file path is returned as-is (subject to ignore globs) so unsupported
/// types surface as an error later. Directories are walked recursively and
/// filtered by extension. Output is sorted.
pub fn collect_documents(
    path: &Path,
    ignore_set: Option<&GlobSet>,
    extensions: &[String],
) -> Result<Vec<PathBuf>, IngestError> {
    if path.is_file() {
        if let Some(set) = ignore_set {
            if is_ignored(path, set) {
                return Ok(vec![]);
            }
        }
        return Ok(vec![path.to_path_buf()]);
    }

    if !path.is_dir() {
        return Err(IngestError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::NotFound, "path does not exist"),
        ));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let file_path = entry.path();
        if !entry.file_type().is_file() || !is_supported(file_path, extensions) {
            continue;
        }
        // Skip hidden directories like .git
        if file_path
            .strip_prefix(path)
            .map(|rel| {
                rel.components()
                    .any(|c| c.as_os_str().to_string_lossy().starts_with('.'))
            })
            .unwrap_or(false)
        {
            continue;
        }
        if let Some(set) = ignore_set {
            if is_ignored(file_path, set) {
                continue;
            }
        }
        files.push(file_path.to_path_buf());
    }

    files.sort();
    Ok(files)
}
