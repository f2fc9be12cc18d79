// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The rooted file store (C3, spec §4.3): binary artifacts referenced by a
//! [`gst_core::TaskState`]'s filename fields, addressed by bare filename
//! under a single configured root directory.

use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// A directory-rooted blob store. Every filename is validated to reject
/// path separators and `..` components before touching the filesystem, so
/// callers cannot escape `root` via a crafted filename.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

fn validate_filename(filename: &str) -> Result<(), StoreError> {
    if filename.is_empty()
        || filename.contains('/')
        || filename.contains('\\')
        || filename == "."
        || filename == ".."
    {
        return Err(StoreError::InvalidFilename(filename.to_string()));
    }
    Ok(())
}

impl FileStore {
    /// `root` must already exist and be a directory.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(StoreError::InvalidRoot(root.display().to_string()));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, filename: &str) -> Result<PathBuf, StoreError> {
        validate_filename(filename)?;
        Ok(self.root.join(filename))
    }

    pub fn is_file_exist(&self, filename: &str) -> Result<bool, StoreError> {
        Ok(self.path_for(filename)?.is_file())
    }

    /// Exclusive create — fails with [`StoreError::FileConflict`] if
    /// `filename` already exists.
    pub fn save_binary_data(&self, filename: &str, data: &[u8]) -> Result<(), StoreError> {
        use std::fs::OpenOptions;
        use std::io::Write;

        let path = self.path_for(filename)?;
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::AlreadyExists {
                    StoreError::FileConflict(filename.to_string())
                } else {
                    StoreError::Io(e)
                }
            })?;
        file.write_all(data)?;
        Ok(())
    }

    pub fn get_binary_data_from_file(&self, filename: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.path_for(filename)?;
        if !path.is_file() {
            return Err(StoreError::FileNotFound(filename.to_string()));
        }
        Ok(std::fs::read(path)?)
    }

    /// No-op if the file is already absent.
    pub fn remove_file(&self, filename: &str) -> Result<(), StoreError> {
        let path = self.path_for(filename)?;
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    pub fn remove_files(&self, filenames: &[&str]) -> Result<(), StoreError> {
        for filename in filenames {
            self.remove_file(filename)?;
        }
        Ok(())
    }

    /// Bare filenames of every regular file directly under `root`;
    /// subdirectories are skipped.
    pub fn all_filenames(&self) -> Result<Vec<String>, StoreError> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                if let Some(name) = entry.file_name().to_str() {
                    names.push(name.to_string());
                }
            }
        }
        Ok(names)
    }
}

#[cfg(test)]
#[path = "file_store_tests.rs"]
mod tests;
