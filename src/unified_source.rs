use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{bail, Context, Result};
use regex::Regex;

use crate::compilation_database::{CompileCommand, CompileCommands};
use crate::path_resolution::{resolve, resolve_to_string};

/// Matches local include directives (i.e., `#include "some/file.cpp"`) and
/// captures the included path.
/// Note: the match is purely textual, so commented-out or disabled directives
/// are picked up as well.
static LOCAL_INCLUDE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"#include "([^"\r\n]*)""#).unwrap());

/// Expand a compile command into the compile commands of the original source
/// files it covers.
///
/// Commands targeting a regular source file are passed through with their
/// `file` resolved under `base_dir`. Commands targeting a unified source
/// yield one command per local include found in the unified file, in the
/// order they appear. Included unified sources are expanded in place, and an
/// include cycle between unified sources is an error.
pub fn unpack(base_dir: &Path, compile_command: CompileCommand) -> Result<CompileCommands> {
    let mut expanding = vec![];
    unpack_nested(base_dir, compile_command, &mut expanding)
}

/// `expanding` holds the unified sources currently being expanded, outermost
/// first.
fn unpack_nested(
    base_dir: &Path,
    mut compile_command: CompileCommand,
    expanding: &mut Vec<PathBuf>,
) -> Result<CompileCommands> {
    if !compile_command.is_unified() {
        if !compile_command.is_recognized_extension() {
            log::warn!(
                "'{}' doesn't look like a C-family source file",
                compile_command.file
            );
        }
        compile_command.file = resolve_to_string(base_dir, &compile_command.file);
        return Ok(vec![compile_command]);
    }

    let unified_file_path = resolve(base_dir, &compile_command.file);
    if expanding.contains(&unified_file_path) {
        bail!(
            "Include cycle: '{}' includes '{}', which is already being expanded",
            expanding
                .last()
                .map(|path| path.display().to_string())
                .unwrap_or_default(),
            unified_file_path.display()
        );
    }

    let unified_source = fs::read(&unified_file_path).with_context(|| {
        format!(
            "Failed to read unified source '{}'",
            unified_file_path.display()
        )
    })?;
    let unified_source = String::from_utf8_lossy(&unified_source);

    expanding.push(unified_file_path.clone());
    let mut compile_commands = CompileCommands::new();
    for included_path in extract_local_includes(&unified_source) {
        if included_path.is_empty() {
            log::warn!(
                "Ignoring empty include directive in '{}'",
                unified_file_path.display()
            );
            continue;
        }

        let included_command =
            synthesize_compile_command(base_dir, &compile_command, included_path);
        if included_command.is_unified() {
            let included_file = included_command.file.clone();
            let nested_commands = unpack_nested(base_dir, included_command, expanding)
                .with_context(|| {
                    format!(
                        "Failed to expand '{}' included from '{}'",
                        included_file,
                        unified_file_path.display()
                    )
                })?;
            compile_commands.extend(nested_commands);
        } else {
            compile_commands.push(included_command);
        }
    }
    expanding.pop();

    log::debug!(
        "'{}' expanded into {} compile command(s)",
        compile_command.file,
        compile_commands.len()
    );

    Ok(compile_commands)
}

/// Return the paths of every local include found in `source`, in order of
/// appearance.
pub fn extract_local_includes(source: &str) -> impl Iterator<Item = &str> {
    LOCAL_INCLUDE_REGEX
        .captures_iter(source)
        .filter_map(|captures| captures.get(1))
        .map(|included_path| included_path.as_str())
}

/// Build the compile command of a file included by `unified_command`'s file
fn synthesize_compile_command(
    base_dir: &Path,
    unified_command: &CompileCommand,
    included_path: &str,
) -> CompileCommand {
    let file = resolve_to_string(base_dir, included_path);
    // Note: this is a plain substring replacement, any other occurrence of the
    // unified file's path in the command is rewritten too
    let command = replace_file_reference(&unified_command.command, &unified_command.file, &file);

    let compile_command = CompileCommand::new(unified_command.directory.clone(), command, file);
    if !compile_command.is_recognized_extension() {
        log::warn!(
            "'{}' (included from '{}') doesn't look like a C-family source file",
            compile_command.file,
            unified_command.file
        );
    }

    compile_command
}

fn replace_file_reference<'a>(command: &'a str, from: &str, to: &str) -> Cow<'a, str> {
    if from.is_empty() || !command.contains(from) {
        Cow::Borrowed(command)
    } else {
        Cow::Owned(command.replace(from, to))
    }
}
