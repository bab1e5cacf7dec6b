mod cli;
mod compilation_database;
mod config;
mod path_resolution;
mod refinement;
mod unified_source;

use anyhow::Result;
use structopt::StructOpt;

use cli::UnifiedCompdbOptions;
use compilation_database::{parse_compile_database, write_compile_database};
use config::RefineConfig;
use refinement::refine_with_summary;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = UnifiedCompdbOptions::from_args();
    if options.self_test {
        return self_test::run_self_tests();
    }

    run(&RefineConfig::from(options))
}

/// Read, refine and write back the compilation database described by `config`.
/// Nothing is written if refinement fails.
fn run(config: &RefineConfig) -> Result<()> {
    log::info!(
        "Refining '{}' (indexing root: '{}')",
        config.input_path.display(),
        config.root_dir.display()
    );
    let compile_commands = parse_compile_database(&config.input_path)?;

    let (refined_commands, summary) = refine_with_summary(&config.root_dir, compile_commands)?;
    log::info!(
        "Expanded {} unified source(s) into {} compile command(s)",
        summary.unified_commands,
        summary.synthesized_commands
    );
    log::info!(
        "{} compile command(s) in, {} out",
        summary.input_commands,
        summary.output_commands()
    );

    write_compile_database(&config.output_path, &refined_commands)?;
    log::info!("Refined database written to '{}'", config.output_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::compilation_database::CompileCommand;

    #[test]
    fn run_writes_refined_database() {
        let tmp_dir = tempfile::tempdir().unwrap();
        let root = tmp_dir.path();
        fs::write(
            root.join("UnifiedSource1.cpp"),
            "#include \"x.cpp\"\n#include \"y.cpp\"\n",
        )
        .unwrap();
        let input_path = root.join("raw_compile_commands.json");
        write_compile_database(
            &input_path,
            &[
                CompileCommand::new("/d", "cc a.cpp", "a.cpp"),
                CompileCommand::new("/d", "cc UnifiedSource1.cpp", "UnifiedSource1.cpp"),
            ],
        )
        .unwrap();

        let config = RefineConfig::new(input_path, root.to_owned(), None);
        run(&config).expect("Refinement failed");

        let refined = parse_compile_database(&root.join("compile_commands.json")).unwrap();
        let files: Vec<String> = refined.iter().map(|cmd| cmd.file.clone()).collect();
        assert_eq!(
            files,
            ["a.cpp", "x.cpp", "y.cpp"]
                .iter()
                .map(|file| root.join(file).to_string_lossy().into_owned())
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn run_writes_nothing_on_failure() {
        let tmp_dir = tempfile::tempdir().unwrap();
        let root = tmp_dir.path();
        let input_path = root.join("raw_compile_commands.json");
        write_compile_database(
            &input_path,
            &[CompileCommand::new(
                "/d",
                "cc UnifiedSource1.cpp",
                "UnifiedSource1.cpp",
            )],
        )
        .unwrap();

        let config = RefineConfig::new(input_path, root.to_owned(), None);
        assert!(run(&config).is_err());
        assert!(!config.output_path.exists());
    }

    #[test]
    fn run_missing_input() {
        let tmp_dir = tempfile::tempdir().unwrap();
        let config = RefineConfig::new(
            tmp_dir.path().join("missing.json"),
            tmp_dir.path().to_owned(),
            None,
        );
        assert!(run(&config).is_err());
    }
}
