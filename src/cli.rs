use std::path::PathBuf;

use structopt::StructOpt;

const PKG_NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Debug, StructOpt)]
#[structopt(
    name = PKG_NAME,
    about = "Expands unified sources in compilation databases, for source code indexers"
)]
pub struct UnifiedCompdbOptions {
    /// Compilation database to refine. Defaults to "compile_commands.json".
    #[structopt(parse(from_os_str), short, long = "input")]
    pub input_path: Option<PathBuf>,

    /// Indexing root directory, relative file paths are resolved against it.
    /// Defaults to the current directory.
    #[structopt(parse(from_os_str), short, long = "root")]
    pub root_dir: Option<PathBuf>,

    /// Path of the refined compilation database. Defaults to
    /// "compile_commands.json" inside the indexing root.
    #[structopt(parse(from_os_str), short, long = "output")]
    pub output_path: Option<PathBuf>,

    /// Run the built-in self-tests instead of refining a database.
    #[structopt(long)]
    pub self_test: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_self_test_flag() {
        let options = UnifiedCompdbOptions::from_iter(["unified-compdb", "--self-test"]);
        assert!(options.self_test);
        assert!(options.input_path.is_none());
    }

    #[test]
    fn parse_unknown_flag() {
        assert!(UnifiedCompdbOptions::from_iter_safe(["unified-compdb", "--bin", "a.out"]).is_err());
    }
}
