// src/error.rs
//! Error types for every stage of a run.
//!
//! Fatal: [`FetchError`], [`RowFailure`] under the abort policy, and
//! [`PipelineError::NoRows`]. Everything else is collected into the run report.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Record field an extraction problem relates to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Year,
    Rating,
    RatingCount,
    LeadCredit,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Year => "year",
            Field::Rating => "rating",
            Field::RatingCount => "rating_count",
            Field::LeadCredit => "lead_credit",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row's markup did not have the expected shape.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ExtractionError {
    #[error("{field}: missing element `{selector}`")]
    MissingElement { field: Field, selector: &'static str },

    #[error("{field}: missing attribute `{attr}`")]
    MissingAttribute { field: Field, attr: &'static str },

    #[error("{field}: empty text")]
    Empty { field: Field },

    #[error("{field}: not a number: {text:?}")]
    NotNumeric { field: Field, text: String },

    #[error("{field}: {value} outside {min}..={max}")]
    OutOfRange { field: Field, value: f64, min: f64, max: f64 },
}

impl ExtractionError {
    pub fn field(&self) -> Field {
        match self {
            ExtractionError::MissingElement { field, .. }
            | ExtractionError::MissingAttribute { field, .. }
            | ExtractionError::Empty { field }
            | ExtractionError::NotNumeric { field, .. }
            | ExtractionError::OutOfRange { field, .. } => *field,
        }
    }
}

/// An [`ExtractionError`] tied to its 1-based data row (the rank position).
#[derive(Clone, Debug, PartialEq, Error)]
#[error("row {row}: {error}")]
pub struct RowFailure {
    pub row: usize,
    #[source]
    pub error: ExtractionError,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {code} {text} from {url}")]
    Status { url: String, code: u16, text: String },

    #[error("timed out fetching {url}")]
    Timeout { url: String },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Transport>,
    },

    #[error("reading response body from {url} failed: {source}")]
    Body {
        url: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("path exists but is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("cannot create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure drawing one chart page. Never fatal to the other pages.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("page {page}: {source}")]
    Io {
        page: usize,
        #[source]
        source: io::Error,
    },

    #[error("page {page}: {width} columns is too narrow (need at least {min})")]
    TooNarrow { page: usize, width: usize, min: usize },

    #[error("page {page}: drawing area too small")]
    TooSmall { page: usize },
}

impl RenderError {
    pub fn page(&self) -> usize {
        match self {
            RenderError::Io { page, .. }
            | RenderError::TooNarrow { page, .. }
            | RenderError::TooSmall { page } => *page,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("page count must be at least 1")]
    PageCount,

    #[error("{which} timeout must be a positive number of seconds, got {value:?}")]
    Timeout { which: &'static str, value: String },

    #[error("unknown export format: {0}")]
    Format(String),

    #[error("unknown failure policy: {0} (expected abort or skip)")]
    Policy(String),
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("extraction aborted at {0}")]
    Extraction(#[from] RowFailure),

    #[error("no ranking rows found in {source_desc}")]
    NoRows { source_desc: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
