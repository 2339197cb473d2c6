// src/config/options.rs
use std::ffi::OsString;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use super::consts::*;
use crate::error::ConfigError;
use crate::file::{looks_like_dir_hint, normalize_separators};

#[derive(Clone, Debug, PartialEq, Default)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub extract: ExtractOptions,
    pub export: ExportOptions,
    pub chart: ChartOptions,
}

/* ---------------- Fetch ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Remote(String),
    LocalFile(PathBuf),
}

impl Source {
    /// Human-readable origin, used in logs and error messages.
    pub fn describe(&self) -> String {
        match self {
            Source::Remote(url) => url.clone(),
            Source::LocalFile(path) => path.display().to_string(),
        }
    }
}

impl Default for Source {
    fn default() -> Self {
        Source::Remote(s!(SOURCE_URL))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FetchOptions {
    pub source: Source,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            source: Source::default(),
            connect_timeout: Duration::from_secs_f64(CONNECT_TIMEOUT_SECS),
            read_timeout: Duration::from_secs_f64(READ_TIMEOUT_SECS),
        }
    }
}

impl FetchOptions {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (which, d) in [("connect", self.connect_timeout), ("read", self.read_timeout)] {
            if d.is_zero() {
                return Err(ConfigError::Timeout { which, value: format!("{}", d.as_secs_f64()) });
            }
        }
        Ok(())
    }
}

/// Parse a timeout given in (possibly fractional) seconds.
pub fn parse_timeout_secs(which: &'static str, text: &str) -> Result<Duration, ConfigError> {
    let bad = || ConfigError::Timeout { which, value: s!(text) };
    let secs: f64 = text.trim().parse().map_err(|_| bad())?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(bad());
    }
    Duration::try_from_secs_f64(secs).map_err(|_| bad())
}

/* ---------------- Extract ---------------- */

/// What the dataset builder does with a row that fails extraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop the build and surface the first failure.
    #[default]
    Abort,
    /// Leave the row out, record why, keep going.
    Skip,
}

impl FailurePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailurePolicy::Abort => "abort",
            FailurePolicy::Skip => "skip",
        }
    }
}

impl FromStr for FailurePolicy {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(FailurePolicy::Abort),
            "skip" => Ok(FailurePolicy::Skip),
            other => Err(ConfigError::Policy(s!(other))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExtractOptions {
    pub on_failure: FailurePolicy,
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

impl FromStr for ExportFormat {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            other => Err(ConfigError::Format(s!(other))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    ext: Option<OsString>, // user-typed extension wins over the format's
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub enabled: bool,
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
    /// Prefix the file with a UTF-8 byte order mark.
    pub bom: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
            bom: true,
        }
    }
}

impl ExportOptions {
    /// Final file path: `<dir>/<stem>.<ext>`.
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        let ext = match &self.out_path.ext {
            Some(e) => e.to_string_lossy().into_owned(),
            None => s!(self.format.ext()),
        };
        self.out_path.dir.join(join!(stem.as_ref(), ".", &ext))
    }

    /// Parse user text into dir + stem (+ extension if typed).
    /// A directory hint (trailing separator or existing dir) keeps the default file name.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_path = OutputPath::default();
            return;
        }

        let normalized = normalize_separators(s);
        let p = Path::new(&normalized);

        if looks_like_dir_hint(p) || p.is_dir() {
            self.out_path = OutputPath { dir: p.to_path_buf(), ..OutputPath::default() };
            return;
        }

        self.out_path.dir = p.parent().map(Path::to_path_buf).unwrap_or_default();
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.ext = p.extension().map(|e| e.to_os_string());
    }

    pub fn has_custom_ext(&self) -> bool {
        self.out_path.ext.is_some()
    }
}

/* ---------------- Charts ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartOptions {
    pub enabled: bool,
    pub page_count: NonZeroUsize,
    /// Terminal width used by the text renderer.
    pub width: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            page_count: NonZeroUsize::new(DEFAULT_PAGE_COUNT).unwrap_or(NonZeroUsize::MIN),
            width: TEXT_CHART_WIDTH,
        }
    }
}

impl ChartOptions {
    pub fn set_page_count(&mut self, n: usize) -> Result<(), ConfigError> {
        self.page_count = NonZeroUsize::new(n).ok_or(ConfigError::PageCount)?;
        Ok(())
    }
}
