//! Directory scanning for missing report files.
//!
//! A [`Scanner`] walks the roster against one submissions directory and
//! collects the combinations with no matching file. The scan is synchronous
//! and read-only; each combination is checked exactly once.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{LabscanError, Result};
use crate::report::{expected_filename, MissingReport};
use crate::roster::Roster;

/// Scans a submissions directory against a roster.
pub struct Scanner {
    root: PathBuf,
    roster: Roster,
}

impl Scanner {
    /// Create a scanner over the builtin roster.
    pub fn new(root: &Path) -> Self {
        Self::with_roster(root, Roster::builtin())
    }

    /// Create a scanner over a custom roster.
    pub fn with_roster(root: &Path, roster: Roster) -> Self {
        Self {
            root: root.to_path_buf(),
            roster,
        }
    }

    /// Get the directory being scanned.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the roster being scanned against.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Run the full enumeration.
    ///
    /// Checks every (lab, student) combination exactly once, lab-major, and
    /// collects the combinations whose file is absent. Absence is a result,
    /// not an error; any other IO failure aborts the scan.
    pub fn scan(&self) -> Result<ScanReport> {
        self.ensure_root()?;

        tracing::debug!(
            "Scanning {} for {} expected reports",
            self.root.display(),
            self.roster.len()
        );

        let mut missing = Vec::new();
        let mut checked = 0usize;
        for (lab, student) in self.roster.pairs() {
            let filename = expected_filename(lab, student);
            checked += 1;
            if !self.report_exists(&filename)? {
                tracing::debug!("Missing report: {}", filename);
                missing.push(MissingReport { lab, student });
            }
        }

        Ok(ScanReport { checked, missing })
    }

    fn ensure_root(&self) -> Result<()> {
        let meta = std::fs::metadata(&self.root).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                LabscanError::DirectoryNotFound {
                    path: self.root.clone(),
                }
            } else {
                LabscanError::Io(e)
            }
        })?;

        if !meta.is_dir() {
            return Err(LabscanError::NotADirectory {
                path: self.root.clone(),
            });
        }

        Ok(())
    }

    /// Existence check for one expected file.
    ///
    /// Follows symlinks and requires a regular file. A directory or other
    /// non-file entry under the expected name counts as missing.
    fn report_exists(&self, filename: &str) -> Result<bool> {
        let path = self.root.join(filename);
        match std::fs::metadata(&path) {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(LabscanError::CheckFailed { path, source: e }),
        }
    }
}

/// Outcome of one scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// Number of existence checks performed.
    pub checked: usize,

    /// Combinations with no matching file, in scan order.
    pub missing: Vec<MissingReport>,
}

impl ScanReport {
    /// Check whether every expected report was present.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Number of absent reports.
    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }
}
