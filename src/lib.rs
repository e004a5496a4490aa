//! Labscan - missing lab-report scanner for course submission directories.
//!
//! Labscan knows which lab assignments exist and which students are expected
//! to submit them, derives the expected report filename for every
//! combination, and reports the combinations whose file is absent from a
//! submissions directory.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`report`] - Expected filename derivation and missing-pair reporting
//! - [`roster`] - The labs and student identifiers a scan covers
//! - [`scanner`] - Directory scanning against the roster
//! - [`ui`] - Terminal output and theming
//!
//! # Example
//!
//! ```
//! use labscan::report::expected_filename;
//!
//! assert_eq!(expected_filename(3, 7749), "GeoLab_03_7749.pdf");
//! ```
//!
//! For directory scanning, see the integration tests.

pub mod cli;
pub mod error;
pub mod report;
pub mod roster;
pub mod scanner;
pub mod ui;

pub use error::{LabscanError, Result};
