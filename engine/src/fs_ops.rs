//! Filesystem operations module.
//!
//! Low-level helpers for the transfer engine:
//! - Ensuring destination directories exist
//! - Moving a single file (rename, with a copy+delete fallback that keeps
//!   the modification time)
//! - Collecting sources from a dropped folder

use std::fs;
use std::io;
use std::path::Path;

use crate::model::SourceFile;

/// Ensure a directory exists, creating it (and parents) if necessary.
///
/// Fails if the path exists but is not a directory.
pub fn ensure_dir_exists(dir: &Path) -> io::Result<()> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} exists but is not a directory", dir.display()),
        )),
        Err(e) if e.kind() == io::ErrorKind::NotFound => fs::create_dir_all(dir),
        Err(e) => Err(e),
    }
}

/// Move a file to `dst`.
///
/// Tries a plain rename first. When that is refused (typically a move across
/// filesystems) the file is copied, the source mtime is carried over, and the
/// source is removed.
pub fn move_file(src: &Path, dst: &Path) -> io::Result<()> {
    match fs::rename(src, dst) {
        Ok(()) => Ok(()),
        Err(rename_err) => {
            if !src.exists() {
                return Err(rename_err);
            }
            let mtime = fs::metadata(src).and_then(|m| m.modified()).ok();
            fs::copy(src, dst)?;
            if let Some(mtime) = mtime {
                let _ = filetime::set_file_mtime(dst, filetime::FileTime::from_system_time(mtime));
            }
            fs::remove_file(src)?;
            Ok(())
        }
    }
}

/// Collect every file under `folder`, recursively, as transfer sources.
///
/// Entries are name-sorted within each directory so batches are stable
/// across runs.
pub fn collect_sources(folder: &Path) -> io::Result<Vec<SourceFile>> {
    fn recurse(dir: &Path, out: &mut Vec<SourceFile>) -> io::Result<()> {
        let mut entries = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
        entries.sort_by_key(|entry| entry.file_name());
        for entry in entries {
            let path = entry.path();
            if entry.metadata()?.is_dir() {
                recurse(&path, out)?;
            } else {
                out.push(SourceFile::new(path));
            }
        }
        Ok(())
    }

    let mut sources = Vec::new();
    recurse(folder, &mut sources)?;
    Ok(sources)
}
