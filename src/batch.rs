//! Scoring a directory of labelled recordings.
//!
//! The expected label is encoded in the filename: the character right before the
//! extension is `M` (male) or `K` (female), in either case. `anna_k.wav` is female,
//! `s01.take2m.WAV` is male, `notes.wav` carries no label and is skipped.

use std::fmt;
use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::classifier::{GenderClassifier, Label};
use crate::error::{BatchError, DecodeError};
use crate::io::load_normalized;

/// The label marker of `file_name`, if it has one.
pub fn label_from_filename(file_name: &str) -> Option<Label> {
    let (stem, _extension) = file_name.rsplit_once('.')?;
    stem.chars().last().and_then(Label::from_code)
}

/// `true` for paths ending in `.wav`, in any case.
pub fn is_wav(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("wav"))
}

/// Decode, normalize and classify one file.
pub fn classify_file<C, P>(path: P, classifier: &mut C) -> Result<Label, DecodeError>
where
    C: GenderClassifier<f64>,
    P: AsRef<Path>,
{
    let audio = load_normalized(path)?;
    Ok(classifier.classify(&audio.samples, audio.sample_rate))
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchEntry {
    pub file_name: String,
    pub expected: Label,
    pub predicted: Label,
}

impl BatchEntry {
    pub fn is_correct(&self) -> bool {
        self.expected == self.predicted
    }
}

impl fmt::Display for BatchEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, recognized {}",
            self.file_name, self.expected, self.predicted
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
    pub correct: usize,
    pub total: usize,
}

impl BatchReport {
    pub fn record(
        &mut self,
        file_name: impl Into<String>,
        expected: Label,
        predicted: Label,
    ) -> &BatchEntry {
        let entry = BatchEntry {
            file_name: file_name.into(),
            expected,
            predicted,
        };
        if entry.is_correct() {
            self.correct += 1;
        }
        self.total += 1;
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// Share of correct predictions in percent, `None` before anything was recorded.
    pub fn accuracy_percent(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(100.0 * self.correct as f64 / self.total as f64)
    }

    /// Closing line of a scan, e.g. `Accuracy: 66.67%  (2/3)`.
    pub fn summary_line(&self) -> String {
        match self.accuracy_percent() {
            Some(accuracy) => format!(
                "Accuracy: {:.2}%  ({}/{})",
                accuracy, self.correct, self.total
            ),
            None => "No files recognized (no filename encodes a gender marker).".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// The directory holds no `.wav` files at all.
    NoWavFiles,
    Scored(BatchReport),
}

/// Classify every labelled `.wav` file directly inside `dir`, in filename order.
///
/// Files without a label marker are skipped silently. Files that fail to decode
/// are logged and left out of the report.
pub fn scan_directory<C>(dir: &Path, classifier: &mut C) -> Result<ScanOutcome, BatchError>
where
    C: GenderClassifier<f64>,
{
    scan_directory_with(dir, classifier, |_| {})
}

/// [scan_directory], calling `on_entry` as soon as each file has been classified.
pub fn scan_directory_with<C, F>(
    dir: &Path,
    classifier: &mut C,
    mut on_entry: F,
) -> Result<ScanOutcome, BatchError>
where
    C: GenderClassifier<f64>,
    F: FnMut(&BatchEntry),
{
    let io_error = |source| BatchError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && is_wav(&path) {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        return Ok(ScanOutcome::NoWavFiles);
    }

    let mut report = BatchReport::default();
    for path in files {
        let file_name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };
        let expected = match label_from_filename(&file_name) {
            Some(label) => label,
            None => continue,
        };

        match classify_file(&path, classifier) {
            Ok(predicted) => {
                info!("{}: expected {}, predicted {}", file_name, expected, predicted);
                on_entry(report.record(file_name, expected, predicted));
            }
            Err(e) => warn!("skipping {}: {}", file_name, e),
        }
    }

    Ok(ScanOutcome::Scored(report))
}
