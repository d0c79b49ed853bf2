//! Variant generation functionality
//!
//! This module contains the Transformer, which holds a source file's raw
//! text and derives the two module-format variants from it.

use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::UTF_8;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{DECLARATION_KEYWORD, EXPORT_KEYWORD};
use crate::errors::{Result, file_operation_error, invalid_text_error};

/// Pattern that captures the identifier of the first declaration
///
/// Unlike the ESM rewrite, the identifier search is word-bounded, so a
/// keyword embedded in a longer identifier is not picked up here.
static DECLARATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bconst\b\s+(\w+)")
        .expect("Failed to compile regex pattern for DECLARATION_PATTERN")
});

/// Holds a source file's content and derives its module variants
#[derive(Debug, Clone)]
pub struct Transformer {
    source: PathBuf,
    content: String,
}

impl Transformer {
    /// Reads a source file and prepares it for transformation
    ///
    /// The file is decoded as UTF-8; a file that does not decode cleanly is
    /// rejected rather than transformed lossily.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid text
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)
            .map_err(|e| file_operation_error(e, path.to_path_buf(), "read"))?;

        let (content, _, had_errors) = UTF_8.decode(&bytes);
        if had_errors {
            return Err(invalid_text_error(path.to_path_buf()));
        }

        debug!("Loaded {} bytes from {}", bytes.len(), path.display());

        Ok(Transformer {
            source: path.to_path_buf(),
            content: content.into_owned(),
        })
    }

    /// Creates a Transformer from already-loaded content
    pub fn from_content(path: &Path, content: String) -> Self {
        Transformer {
            source: path.to_path_buf(),
            content,
        }
    }

    /// The source path this Transformer was loaded from
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The raw source text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Generates the ESM variant of the source text
    ///
    /// Every literal occurrence of the declaration keyword is prefixed with
    /// the export qualifier. The replacement is textual, with no word
    /// boundary: a keyword embedded in an identifier or a string literal is
    /// rewritten as well. Text without any occurrence comes back unchanged.
    pub fn esm_variant(&self) -> String {
        self.content.replace(DECLARATION_KEYWORD, EXPORT_KEYWORD)
    }

    /// Generates the CommonJS variant of the source text
    ///
    /// The variant is the raw text plus an appended export-object statement
    /// referencing the first declared identifier. Text without any
    /// declaration yields an empty string, not the original text.
    pub fn commonjs_variant(&self) -> String {
        match DECLARATION_PATTERN.captures(&self.content) {
            Some(captures) => {
                let identifier = captures
                    .get(1)
                    .map_or("", |group| group.as_str());
                format!("{} module.exports = {{ {} }};", self.content, identifier)
            }
            None => String::new(),
        }
    }
}
