use std::path::PathBuf;

use crate::cli::UnifiedCompdbOptions;

/// Database read when no input is given
pub const DEFAULT_INPUT_PATH: &str = "compile_commands.json";
/// Indexing root used when none is given
pub const DEFAULT_ROOT_DIR: &str = ".";
/// Name of the refined database written into the indexing root
pub const OUTPUT_FILE_NAME: &str = "compile_commands.json";

/// Everything needed to refine a compilation database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefineConfig {
    /// Compilation database to refine
    pub input_path: PathBuf,
    /// Directory relative file references are resolved against
    pub root_dir: PathBuf,
    /// Where the refined database is written
    pub output_path: PathBuf,
}

impl RefineConfig {
    pub fn new(input_path: PathBuf, root_dir: PathBuf, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| root_dir.join(OUTPUT_FILE_NAME));
        Self {
            input_path,
            root_dir,
            output_path,
        }
    }
}

impl Default for RefineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_PATH.into(), DEFAULT_ROOT_DIR.into(), None)
    }
}

impl From<UnifiedCompdbOptions> for RefineConfig {
    fn from(options: UnifiedCompdbOptions) -> Self {
        Self::new(
            options
                .input_path
                .unwrap_or_else(|| DEFAULT_INPUT_PATH.into()),
            options.root_dir.unwrap_or_else(|| DEFAULT_ROOT_DIR.into()),
            options.output_path,
        )
    }
}
