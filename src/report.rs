//! Expected report filenames and missing-pair reporting.

use std::fmt;

use serde::Serialize;

/// Filename prefix shared by every report.
pub const REPORT_PREFIX: &str = "GeoLab";

/// Report file extension.
pub const REPORT_EXTENSION: &str = "pdf";

/// Derive the expected filename for one (lab, student) combination.
///
/// The lab number renders zero-padded to two digits; the student identifier
/// renders in plain decimal. Lab 3 and student 7749 yield
/// `GeoLab_03_7749.pdf`.
pub fn expected_filename(lab: u8, student: u32) -> String {
    format!("{}_{:02}_{}.{}", REPORT_PREFIX, lab, student, REPORT_EXTENSION)
}

/// A (lab, student) combination whose report file was absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MissingReport {
    /// Lab assignment number.
    pub lab: u8,
    /// Student identifier.
    pub student: u32,
}

impl MissingReport {
    /// Filename the scan looked for.
    pub fn filename(&self) -> String {
        expected_filename(self.lab, self.student)
    }
}

impl fmt::Display for MissingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Output line contract: two plain decimal integers, one space.
        write!(f, "{} {}", self.lab, self.student)
    }
}
