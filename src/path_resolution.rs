use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};

/// Resolve `reference` against `base_dir` and normalize the result.
///
/// Absolute references are kept as-is (apart from normalization). Resolution
/// is purely lexical: symbolic links aren't followed and the target doesn't
/// need to exist.
pub fn resolve<P: AsRef<Path>>(base_dir: &Path, reference: P) -> PathBuf {
    let reference = reference.as_ref();
    if reference.is_absolute() {
        normalize(reference)
    } else {
        normalize(&base_dir.join(reference))
    }
}

/// Same as `resolve`, but returns the string form stored in compile commands.
pub fn resolve_to_string<P: AsRef<Path>>(base_dir: &Path, reference: P) -> String {
    resolve(base_dir, reference).to_string_lossy().into_owned()
}

/// Turn `path` into a normalized absolute path, using the current working
/// directory for relative paths.
pub fn make_absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(normalize(path))
    } else {
        let current_dir =
            std::env::current_dir().context("Failed to get the current working directory")?;
        Ok(resolve(&current_dir, path))
    }
}

/// Eliminate `.` and `..` components without touching the file system.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                normalized.push(component);
            }
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                // `..` can't go above the root
                Some(Component::RootDir | Component::Prefix(_)) => {}
                // Relative path escaping its start, keep the `..`
                _ => normalized.push(component),
            },
        }
    }

    normalized
}
