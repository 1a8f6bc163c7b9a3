//! File system access for the commit message file

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read and overwrite whole text files
pub trait FileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// The real file system
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}

/// In-memory file system for tests, with optional injected failures
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: RefCell<HashMap<PathBuf, String>>,
    read_error: Option<String>,
    write_error: Option<String>,
    writes: RefCell<usize>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a file system holding a single file
    pub fn with_file(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        let fs = Self::new();
        fs.files.borrow_mut().insert(path.into(), contents.into());
        fs
    }

    /// Make every read fail with `message`
    pub fn fail_reads(mut self, message: impl Into<String>) -> Self {
        self.read_error = Some(message.into());
        self
    }

    /// Make every write fail with `message`
    pub fn fail_writes(mut self, message: impl Into<String>) -> Self {
        self.write_error = Some(message.into());
        self
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    /// Number of successful writes
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        if let Some(message) = &self.read_error {
            return Err(io::Error::new(io::ErrorKind::Other, message.clone()));
        }

        self.files.borrow().get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("No such file: {}", path.display()),
            )
        })
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        if let Some(message) = &self.write_error {
            return Err(io::Error::new(io::ErrorKind::Other, message.clone()));
        }

        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_os_file_system_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("COMMIT_EDITMSG");

        OsFileSystem.write(&path, "ABC-1 | hello\n").unwrap();
        assert_eq!(OsFileSystem.read_to_string(&path).unwrap(), "ABC-1 | hello\n");
    }

    #[test]
    fn test_os_file_system_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = OsFileSystem
            .read_to_string(&dir.path().join("missing"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_memory_file_system_records_writes() {
        let fs = MemoryFileSystem::with_file("/tmp/msg", "hello");
        assert_eq!(fs.read_to_string(Path::new("/tmp/msg")).unwrap(), "hello");

        fs.write(Path::new("/tmp/msg"), "bye").unwrap();
        assert_eq!(fs.contents("/tmp/msg"), Some("bye".to_string()));
        assert_eq!(fs.write_count(), 1);
    }

    #[test]
    fn test_memory_file_system_injected_failures() {
        let fs = MemoryFileSystem::with_file("/tmp/msg", "hello")
            .fail_reads("boom")
            .fail_writes("disk full");

        let read_err = fs.read_to_string(Path::new("/tmp/msg")).unwrap_err();
        assert_eq!(read_err.to_string(), "boom");
        let write_err = fs.write(Path::new("/tmp/msg"), "x").unwrap_err();
        assert_eq!(write_err.to_string(), "disk full");
        assert_eq!(fs.write_count(), 0);
    }
}
