//! Scan command implementation.
//!
//! The `labscan scan` command (also the default when no subcommand is
//! given) checks every expected report file and prints the missing
//! (lab, student) pairs, one per line, in scan order.

use std::path::{Path, PathBuf};

use crate::cli::args::ScanArgs;
use crate::error::{LabscanError, Result};
use crate::scanner::Scanner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The scan command implementation.
pub struct ScanCommand {
    scan_root: PathBuf,
    args: ScanArgs,
}

impl ScanCommand {
    /// Create a new scan command.
    pub fn new(scan_root: &Path, args: ScanArgs) -> Self {
        Self {
            scan_root: scan_root.to_path_buf(),
            args,
        }
    }

    /// Get the scan directory.
    pub fn scan_root(&self) -> &Path {
        &self.scan_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ScanArgs {
        &self.args
    }
}

impl Command for ScanCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let scanner = Scanner::new(&self.scan_root);
        let report = match scanner.scan() {
            Ok(r) => r,
            Err(e @ LabscanError::DirectoryNotFound { .. })
            | Err(e @ LabscanError::NotADirectory { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        if self.args.json {
            let doc = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            ui.data(&doc);
        } else {
            for pair in &report.missing {
                ui.data(&pair.to_string());
            }
        }

        if ui.output_mode().shows_summary() {
            if report.is_complete() {
                ui.success(&format!("All {} reports present", report.checked));
            } else {
                ui.message(&format!(
                    "{} of {} reports missing",
                    report.missing_count(),
                    report.checked
                ));
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn scan_command_creation() {
        let temp = TempDir::new().unwrap();
        let cmd = ScanCommand::new(temp.path(), ScanArgs::default());

        assert_eq!(cmd.scan_root(), temp.path());
        assert!(!cmd.args().json);
    }

    #[test]
    fn scan_missing_directory_fails_with_exit_2() {
        let temp = TempDir::new().unwrap();
        let gone = temp.path().join("nonexistent");
        let cmd = ScanCommand::new(&gone, ScanArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("not found"));
        assert!(ui.data_lines().is_empty());
    }

    #[test]
    fn scan_empty_directory_emits_all_pairs() {
        let temp = TempDir::new().unwrap();
        let cmd = ScanCommand::new(temp.path(), ScanArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.data_lines().len(), 130);
        assert_eq!(ui.data_lines()[0], "1 7738");
        assert_eq!(ui.data_lines()[129], "5 7647");
    }

    #[test]
    fn scan_present_file_suppresses_its_line() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("GeoLab_03_7749.pdf"), b"report").unwrap();
        let cmd = ScanCommand::new(temp.path(), ScanArgs::default());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.data_lines().len(), 129);
        assert!(!ui.has_data_line("3 7749"));
    }

    #[test]
    fn scan_normal_mode_has_no_decorations() {
        let temp = TempDir::new().unwrap();
        let cmd = ScanCommand::new(temp.path(), ScanArgs::default());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.messages().is_empty());
        assert!(ui.successes().is_empty());
    }

    #[test]
    fn scan_verbose_mode_adds_summary() {
        let temp = TempDir::new().unwrap();
        let cmd = ScanCommand::new(temp.path(), ScanArgs::default());
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("130 of 130 reports missing"));
    }

    #[test]
    fn scan_verbose_complete_directory_reports_success() {
        let temp = TempDir::new().unwrap();
        for (lab, student) in crate::roster::Roster::builtin().pairs() {
            let name = crate::report::expected_filename(lab, student);
            fs::write(temp.path().join(name), b"report").unwrap();
        }
        let cmd = ScanCommand::new(temp.path(), ScanArgs::default());
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.data_lines().is_empty());
        assert!(ui.has_success("All 130 reports present"));
    }

    #[test]
    fn scan_json_emits_single_document() {
        let temp = TempDir::new().unwrap();
        let cmd = ScanCommand::new(temp.path(), ScanArgs { json: true });
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.data_lines().len(), 1);
        let doc: serde_json::Value = serde_json::from_str(&ui.data_lines()[0]).unwrap();
        assert_eq!(doc["checked"], 130);
        assert_eq!(doc["missing"].as_array().unwrap().len(), 130);
        assert_eq!(doc["missing"][0]["lab"], 1);
        assert_eq!(doc["missing"][0]["student"], 7738);
    }
}
