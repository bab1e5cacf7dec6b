use std::path::Path;

use anyhow::{bail, Result};

use crate::compilation_database::CompileCommands;
use crate::path_resolution::make_absolute;
use crate::unified_source::unpack;

/// Statistics gathered while refining a compilation database
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RefinementSummary {
    pub input_commands: usize,
    pub unified_commands: usize,
    pub passed_through_commands: usize,
    pub synthesized_commands: usize,
}

impl RefinementSummary {
    pub fn output_commands(&self) -> usize {
        self.passed_through_commands + self.synthesized_commands
    }
}

/// Replace every unified source's compile command with the compile commands
/// of the files it includes, and make all file paths absolute.
///
/// `base_dir` must be an existing directory. Relative references are resolved
/// against it. Fails on the first unified source that can't be read.
pub fn refine(base_dir: &Path, compile_commands: CompileCommands) -> Result<CompileCommands> {
    refine_with_summary(base_dir, compile_commands).map(|(refined, _)| refined)
}

pub fn refine_with_summary(
    base_dir: &Path,
    compile_commands: CompileCommands,
) -> Result<(CompileCommands, RefinementSummary)> {
    if !base_dir.is_dir() {
        bail!(
            "Indexing root '{}' doesn't exist or isn't a directory",
            base_dir.display()
        );
    }
    let base_dir = make_absolute(base_dir)?;

    let mut summary = RefinementSummary {
        input_commands: compile_commands.len(),
        ..Default::default()
    };
    let mut refined_commands = CompileCommands::with_capacity(compile_commands.len());
    for compile_command in compile_commands {
        let is_unified = compile_command.is_unified();
        let unpacked_commands = unpack(&base_dir, compile_command)?;
        if is_unified {
            summary.unified_commands += 1;
            summary.synthesized_commands += unpacked_commands.len();
        } else {
            summary.passed_through_commands += unpacked_commands.len();
        }
        refined_commands.extend(unpacked_commands);
    }

    Ok((refined_commands, summary))
}
