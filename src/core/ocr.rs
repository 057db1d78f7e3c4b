//! OCR collaborator - Recognises text and word boxes in product images.
//!
//! The engine is a black box behind [`OcrEngine`]: slow, fallible, one call per
//! image. [`TesseractCli`] drives the `tesseract` executable and reads its TSV
//! report.

use crate::{
    config::OcrConfig,
    core::extractor::{BoundingBox, OcrWord},
    errors::{Error, Result},
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};

/// Result of one recognition.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OcrOutput {
    /// Recognised text, one line per text line
    pub text: String,
    /// Recognised words with page-relative boxes
    pub words: Vec<OcrWord>,
}

/// An optical character recognition engine.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Recognises the image in `image`.
    ///
    /// # Errors
    /// Returns [`Error::Ocr`] when the engine cannot process the image.
    async fn recognize(&self, image: &[u8]) -> Result<OcrOutput>;
}

/// Runs `tesseract <image> stdout tsv` per recognition.
#[derive(Debug, Clone)]
pub struct TesseractCli {
    binary: String,
    timeout: Duration,
}

impl TesseractCli {
    /// Creates an engine invoking `binary` with a per-call `timeout`.
    #[must_use]
    pub const fn new(binary: String, timeout: Duration) -> Self {
        Self { binary, timeout }
    }

    /// Creates an engine from the `[ocr]` settings.
    #[must_use]
    pub fn from_config(config: &OcrConfig) -> Self {
        Self::new(
            config.tesseract_bin.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }
}

#[async_trait]
impl OcrEngine for TesseractCli {
    #[instrument(skip(self, image), fields(bytes = image.len()))]
    async fn recognize(&self, image: &[u8]) -> Result<OcrOutput> {
        let file = tempfile::NamedTempFile::new()?;
        tokio::fs::write(file.path(), image).await?;

        debug!("Running {} on {}", self.binary, file.path().display());
        let mut command = Command::new(&self.binary);
        command
            .arg(file.path())
            .arg("stdout")
            .arg("tsv")
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = timeout(self.timeout, command.output())
            .await
            .map_err(|_| Error::Ocr {
                message: format!("recognition timed out after {}s", self.timeout.as_secs()),
            })?
            .map_err(|e| Error::Ocr {
                message: format!("failed to run {}: {e}", self.binary),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!("tesseract exited with {}: {}", output.status, stderr.trim());
            return Err(Error::Ocr {
                message: stderr.trim().to_string(),
            });
        }

        let report = parse_tsv(&String::from_utf8_lossy(&output.stdout))?;
        info!("Recognised {} words", report.words.len());
        Ok(report)
    }
}

const LEVEL_PAGE: &str = "1";
const LEVEL_WORD: &str = "5";

struct TsvRow<'a> {
    level: &'a str,
    line_key: (&'a str, &'a str, &'a str, &'a str),
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    text: &'a str,
}

fn parse_row(line: &str) -> Option<TsvRow<'_>> {
    let cols: Vec<&str> = line.split('\t').collect();
    if cols.len() < 11 {
        return None;
    }
    let number = |i: usize| cols[i].trim().parse::<f64>().ok();
    Some(TsvRow {
        level: cols[0].trim(),
        line_key: (cols[1], cols[2], cols[3], cols[4]),
        left: number(6)?,
        top: number(7)?,
        width: number(8)?,
        height: number(9)?,
        text: cols.get(11).map_or("", |t| t.trim()),
    })
}

fn percent(value: f64, extent: f64) -> f64 {
    if extent > 0.0 { value / extent * 100.0 } else { 0.0 }
}

/// Parses a tesseract TSV report into text and page-relative word boxes.
///
/// # Errors
/// Returns [`Error::Ocr`] when the report has no page row to normalise against.
pub fn parse_tsv(report: &str) -> Result<OcrOutput> {
    let rows: Vec<TsvRow<'_>> = report.lines().skip(1).filter_map(parse_row).collect();

    let page = rows
        .iter()
        .find(|row| row.level == LEVEL_PAGE)
        .ok_or_else(|| Error::Ocr {
            message: "OCR report has no page dimensions".to_string(),
        })?;
    let (page_width, page_height) = (page.width, page.height);

    let mut words = Vec::new();
    let mut lines: Vec<String> = Vec::new();
    let mut current_line = None;

    for row in rows
        .iter()
        .filter(|row| row.level == LEVEL_WORD && !row.text.is_empty())
    {
        if current_line == Some(row.line_key) {
            if let Some(last) = lines.last_mut() {
                last.push(' ');
                last.push_str(row.text);
            }
        } else {
            lines.push(row.text.to_string());
            current_line = Some(row.line_key);
        }

        words.push(OcrWord {
            text: row.text.to_string(),
            bbox: BoundingBox {
                x0: percent(row.left, page_width),
                y0: percent(row.top, page_height),
                x1: percent(row.left + row.width, page_width),
                y1: percent(row.top + row.height, page_height),
            },
        });
    }

    Ok(OcrOutput {
        text: lines.join("\n"),
        words,
    })
}
