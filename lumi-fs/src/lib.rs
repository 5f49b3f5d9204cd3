//! Shared filesystem helpers built on `cap-std` and `camino`.
#![forbid(unsafe_code)]

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// Open a UTF-8 file path for reading using ambient authority.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Create or truncate a UTF-8 file path for writing using ambient authority.
pub fn create_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.create(name.as_str())
}

/// Resolve an ambient directory for the given path and return it with the file name.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = path.parent().unwrap_or_else(|| Utf8Path::new("."));
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path has no file name component"))?
        .to_string();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Ensure the parent directory for `path` exists, handling absolute paths safely for cap-std.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() {
        return Ok(());
    }

    let (base, relative) = split_base(parent);
    if relative.as_str().is_empty() {
        return Ok(());
    }
    let dir = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    dir.create_dir_all(&relative)?;
    Ok(())
}

/// Return whether a path exists and is a regular file using capability-based IO.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Split a parent path into an ambient base directory and a relative suffix.
fn split_base(parent: &Utf8Path) -> (Utf8PathBuf, Utf8PathBuf) {
    let mut components = parent.components();
    match components.next() {
        // Unix-style absolute path.
        Some(Utf8Component::RootDir) => (
            Utf8PathBuf::from("/"),
            components.as_path().to_owned(),
        ),
        // Windows absolute path with a drive or UNC prefix.
        Some(Utf8Component::Prefix(prefix)) => {
            let mut base = Utf8PathBuf::from(prefix.as_str());
            if components.clone().next() == Some(Utf8Component::RootDir) {
                components.next();
                base.push(std::path::MAIN_SEPARATOR.to_string());
            }
            (base, components.as_path().to_owned())
        }
        // Relative path: resolve from the current directory.
        _ => (Utf8PathBuf::from("."), parent.to_owned()),
    }
}
