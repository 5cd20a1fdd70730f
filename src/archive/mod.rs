//! APK Set archive access
//!
//! An APK Set is either a zip archive or an already-extracted directory, in
//! both cases carrying a `toc.json` at its root next to the artifact entries
//! the table of contents references. This module owns all physical access:
//! reading the table of contents, resolving entries of a directory set, and
//! copying matched entries out of a zip. Each copy is independent and
//! idempotent; re-extracting to the same destination overwrites
//! deterministically.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use zip::ZipArchive;

use crate::error::{ApkSetError, Result, archive};
use crate::model::TableOfContents;
use crate::progress::ProgressDisplay;

/// Name of the table of contents entry at the archive root
const TOC_ENTRY: &str = "toc.json";

/// An opened APK Set, zip or directory form
#[derive(Debug)]
pub struct ApkSet {
    path: PathBuf,
    directory: bool,
}

impl ApkSet {
    /// Open an APK Set at the given path
    pub fn open(path: &Path) -> Result<ApkSet> {
        if !path.exists() {
            return Err(archive::read_failed(
                path.display().to_string(),
                "no such file or directory",
            ));
        }
        Ok(ApkSet {
            path: path.to_path_buf(),
            directory: path.is_dir(),
        })
    }

    /// Whether this APK Set is an extracted directory rather than a zip
    pub fn is_directory(&self) -> bool {
        self.directory
    }

    /// Read and validate the table of contents
    pub fn read_toc(&self) -> Result<TableOfContents> {
        let content = if self.directory {
            let toc_path = self.path.join(TOC_ENTRY);
            if !toc_path.exists() {
                return Err(archive::toc_not_found(self.path.display().to_string()));
            }
            std::fs::read_to_string(&toc_path)
                .map_err(|e| archive::read_failed(toc_path.display().to_string(), e.to_string()))?
        } else {
            let mut zip = self.open_zip()?;
            let mut entry = match zip.by_name(TOC_ENTRY) {
                Ok(entry) => entry,
                Err(zip::result::ZipError::FileNotFound) => {
                    return Err(archive::toc_not_found(self.path.display().to_string()));
                }
                Err(e) => {
                    return Err(archive::read_failed(
                        self.path.display().to_string(),
                        e.to_string(),
                    ));
                }
            };
            let mut content = String::new();
            entry
                .read_to_string(&mut content)
                .map_err(|e| archive::read_failed(self.path.display().to_string(), e.to_string()))?;
            content
        };
        TableOfContents::from_json(TOC_ENTRY, &content)
    }

    /// Resolve entries of a directory APK Set to absolute on-disk paths
    ///
    /// No copying happens; every referenced entry must exist.
    pub fn resolve_entries(&self, entries: &[String]) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::with_capacity(entries.len());
        for entry in entries {
            let path = self.path.join(entry);
            if !path.is_file() {
                return Err(archive::entry_missing(entry));
            }
            paths.push(path);
        }
        Ok(paths)
    }

    /// Extract the given entries into the output directory
    ///
    /// Each entry lands under its file name (the last path segment). Returns
    /// the written paths in entry order.
    pub fn extract_entries(&self, entries: &[String], output_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut zip = self.open_zip()?;
        let progress = ProgressDisplay::new(entries.len() as u64);

        let mut extracted = Vec::with_capacity(entries.len());
        for entry in entries {
            progress.update(entry);
            match extract_one(&mut zip, entry, output_dir) {
                Ok(path) => extracted.push(path),
                Err(e) => {
                    progress.abandon();
                    return Err(e);
                }
            }
        }
        progress.finish();
        Ok(extracted)
    }

    fn open_zip(&self) -> Result<ZipArchive<File>> {
        let file = File::open(&self.path)
            .map_err(|e| archive::read_failed(self.path.display().to_string(), e.to_string()))?;
        ZipArchive::new(file)
            .map_err(|e| archive::read_failed(self.path.display().to_string(), e.to_string()))
    }
}

fn extract_one(zip: &mut ZipArchive<File>, entry: &str, output_dir: &Path) -> Result<PathBuf> {
    let mut source = match zip.by_name(entry) {
        Ok(source) => source,
        Err(zip::result::ZipError::FileNotFound) => {
            return Err(archive::entry_missing(entry));
        }
        Err(e) => return Err(archive::extract_failed(entry, e.to_string())),
    };

    let file_name = entry.rsplit('/').next().unwrap_or(entry);
    let destination = output_dir.join(file_name);
    let mut target =
        File::create(&destination).map_err(|e| archive::extract_failed(entry, e.to_string()))?;
    std::io::copy(&mut source, &mut target)
        .map_err(|e| archive::extract_failed(entry, e.to_string()))?;
    Ok(destination)
}

/// Create the temporary directory used when no output directory is given
///
/// The directory is not cleaned up on exit; its path is reported to the user.
pub fn create_output_temp_dir() -> Result<PathBuf> {
    let temp = tempfile::Builder::new()
        .prefix("apkset-extracted-")
        .tempdir()
        .map_err(|e| ApkSetError::IoError {
            message: format!("Unable to create a temporary directory for extracted artifacts: {e}"),
        })?;
    Ok(temp.keep())
}
