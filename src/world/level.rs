//! Level loading
//!
//! Level files hold a loose record (see `config.rs` for the merge rules) in
//! one of three encodings:
//! - JSON (starts with `{`, or `[` which is then rejected as a non-object root)
//! - RON (starts with `(`), read through the typed sections in `record.rs`
//!   into the same JSON-shaped record
//! - Brotli-compressed JSON or RON, detected when the data is not plain text

use std::fs;
use std::io::Cursor;
use std::path::Path;
use serde_json::Value;
use super::record::parse_ron_record;
use super::LevelConfig;

/// Error type for level loading
#[derive(Debug)]
pub enum LevelError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    RonError(ron::error::SpannedError),
    FormatError(String),
}

impl From<std::io::Error> for LevelError {
    fn from(e: std::io::Error) -> Self {
        LevelError::IoError(e)
    }
}

impl From<serde_json::Error> for LevelError {
    fn from(e: serde_json::Error) -> Self {
        LevelError::JsonError(e)
    }
}

impl From<ron::error::SpannedError> for LevelError {
    fn from(e: ron::error::SpannedError) -> Self {
        LevelError::RonError(e)
    }
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::IoError(e) => write!(f, "IO error: {}", e),
            LevelError::JsonError(e) => write!(f, "JSON error: {}", e),
            LevelError::RonError(e) => write!(f, "RON error: {}", e),
            LevelError::FormatError(e) => write!(f, "Format error: {}", e),
        }
    }
}

impl std::error::Error for LevelError {}

/// Text encoding of a level record, sniffed from the first non-whitespace byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextFormat {
    Json,
    Ron,
}

fn sniff(bytes: &[u8]) -> Option<TextFormat> {
    match bytes.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'{') | Some(b'[') => Some(TextFormat::Json),
        Some(b'(') => Some(TextFormat::Ron),
        _ => None,
    }
}

fn parse_text(contents: &str, format: TextFormat) -> Result<Value, LevelError> {
    let record: Value = match format {
        TextFormat::Json => serde_json::from_str(contents)?,
        TextFormat::Ron => parse_ron_record(contents)?,
    };

    if !record.is_object() {
        return Err(LevelError::FormatError("level record must be an object".to_string()));
    }
    Ok(record)
}

fn utf8(bytes: Vec<u8>) -> Result<String, LevelError> {
    String::from_utf8(bytes).map_err(|e| LevelError::IoError(std::io::Error::new(
        std::io::ErrorKind::InvalidData,
        format!("invalid UTF-8: {}", e),
    )))
}

/// Parse raw level file bytes into a record (plain or brotli-compressed)
pub fn parse_level_data(bytes: &[u8]) -> Result<Value, LevelError> {
    if let Some(format) = sniff(bytes) {
        return parse_text(&utf8(bytes.to_vec())?, format);
    }

    let mut decompressed = Vec::new();
    brotli::BrotliDecompress(&mut Cursor::new(bytes), &mut decompressed)
        .map_err(|e| LevelError::IoError(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("brotli decompression failed: {}", e),
        )))?;

    match sniff(&decompressed) {
        Some(format) => parse_text(&utf8(decompressed)?, format),
        None => Err(LevelError::FormatError(
            "expected a JSON object or RON struct".to_string(),
        )),
    }
}

/// Load a level from a JSON or RON string (for embedded levels or testing)
pub fn load_level_from_str(s: &str) -> Result<LevelConfig, LevelError> {
    let format = sniff(s.as_bytes()).ok_or_else(|| LevelError::FormatError(
        "expected a JSON object or RON struct".to_string(),
    ))?;
    let record = parse_text(s, format)?;
    Ok(LevelConfig::from_record(&record))
}

/// Load a level file (JSON, RON, or brotli-compressed either)
pub fn load_level<P: AsRef<Path>>(path: P) -> Result<LevelConfig, LevelError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;

    let record = parse_level_data(&bytes).map_err(|e| {
        log::error!("Failed to parse level {}: {}", path.display(), e);
        e
    })?;

    let level = LevelConfig::from_record(&record);
    log::info!(
        "Loaded level '{}' from {}: {} platforms, {} collectibles",
        level.name,
        path.display(),
        level.platforms.len(),
        level.collectibles.len(),
    );
    Ok(level)
}
