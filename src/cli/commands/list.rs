//! List command implementation.
//!
//! The `labscan list` command prints every expected report filename in scan
//! order, a dry enumeration of what `labscan scan` would look for.

use crate::cli::args::ListArgs;
use crate::error::{LabscanError, Result};
use crate::report::expected_filename;
use crate::roster::{Roster, FIRST_LAB, LAST_LAB};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let roster = Roster::builtin();

        if let Some(lab) = self.args.lab {
            if !roster.labs().contains(&lab) {
                let err = LabscanError::LabOutOfRange {
                    lab,
                    first: FIRST_LAB,
                    last: LAST_LAB,
                };
                ui.error(&err.to_string());
                return Ok(CommandResult::failure(2));
            }
        }

        let filenames: Vec<String> = roster
            .pairs()
            .filter(|(lab, _)| self.args.lab.map_or(true, |want| *lab == want))
            .map(|(lab, student)| expected_filename(lab, student))
            .collect();

        if self.args.json {
            let doc = serde_json::to_string_pretty(&filenames).map_err(anyhow::Error::from)?;
            ui.data(&doc);
        } else {
            for filename in &filenames {
                ui.data(filename);
            }
        }

        if ui.output_mode().shows_summary() {
            ui.message(&format!("{} expected reports", filenames.len()));
        }

        Ok(CommandResult::success())
    }
}
