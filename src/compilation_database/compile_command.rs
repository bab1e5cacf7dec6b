use std::path::Path;

use serde::{Deserialize, Serialize};

/// File name prefix the build system gives to its unified sources
pub const UNIFIED_SOURCE_PREFIX: &str = "UnifiedSource";

/// Extensions expected for C-family source and header files
const RECOGNIZED_EXTENSIONS: &[&str] = &[
    "c", "cc", "cpp", "cxx", "c++", "m", "mm", "h", "hh", "hpp", "hxx",
];

/// One entry of a compilation database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileCommand {
    /// Working directory the command is run from
    pub directory: String,
    /// Full shell invocation used to compile `file`
    pub command: String,
    /// Compiled source file (may be relative to the indexing root on input)
    pub file: String,
}

impl CompileCommand {
    pub fn new<D, C, F>(directory: D, command: C, file: F) -> Self
    where
        D: Into<String>,
        C: Into<String>,
        F: Into<String>,
    {
        Self {
            directory: directory.into(),
            command: command.into(),
            file: file.into(),
        }
    }

    /// Base name of `file`
    pub fn file_name(&self) -> &str {
        Path::new(&self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
    }

    /// Suffix following the last `.` of the base name, if any
    pub fn extension(&self) -> Option<&str> {
        Path::new(self.file_name())
            .extension()
            .and_then(|ext| ext.to_str())
    }

    /// Returns `true` if `file` is an aggregate file generated by the build
    /// system, which bundles several original source files.
    pub fn is_unified(&self) -> bool {
        self.file_name().starts_with(UNIFIED_SOURCE_PREFIX)
    }

    pub fn is_recognized_extension(&self) -> bool {
        self.extension().map_or(false, |ext| {
            RECOGNIZED_EXTENSIONS
                .iter()
                .any(|recognized| recognized.eq_ignore_ascii_case(ext))
        })
    }
}

pub type CompileCommands = Vec<CompileCommand>;
