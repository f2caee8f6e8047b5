//! File-system access for the renderers
//!
//! Every read, write and delete the pipeline performs goes through the
//! `Workspace` trait, so rendering can run against the real disk (CLI) or
//! an in-memory map (tests, dry runs) without changing the renderers.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::utils::error::WorkspaceError;

/// Trait for reading and writing the pipeline's files
///
/// Implementations:
/// - `StdWorkspace`: Uses std::fs for real file system access (CLI)
/// - `MemoryWorkspace`: In-memory file storage (testing)
pub trait Workspace {
    /// Read a file's contents
    fn read_file(&self, path: &Path) -> Result<String, WorkspaceError>;

    /// Create or truncate a file and write `contents` to it
    fn write_file(&mut self, path: &Path, contents: &str) -> Result<(), WorkspaceError>;

    /// Remove a file; returns whether it existed
    fn remove_file(&mut self, path: &Path) -> Result<bool, WorkspaceError>;

    /// Check if a file exists
    fn file_exists(&self, path: &Path) -> bool;
}

/// Standard filesystem workspace (for CLI usage)
#[derive(Debug, Default, Clone, Copy)]
pub struct StdWorkspace;

impl StdWorkspace {
    pub fn new() -> Self {
        Self
    }
}

impl Workspace for StdWorkspace {
    fn read_file(&self, path: &Path) -> Result<String, WorkspaceError> {
        std::fs::read_to_string(path).map_err(|e| WorkspaceError::from_io(path, e))
    }

    fn write_file(&mut self, path: &Path, contents: &str) -> Result<(), WorkspaceError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| WorkspaceError::from_io(parent, e))?;
        }
        std::fs::write(path, contents).map_err(|e| WorkspaceError::from_io(path, e))
    }

    fn remove_file(&mut self, path: &Path) -> Result<bool, WorkspaceError> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(WorkspaceError::from_io(path, e)),
        }
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// Memory-based workspace (for testing)
#[derive(Debug, Default, Clone)]
pub struct MemoryWorkspace {
    files: BTreeMap<PathBuf, String>,
    /// Paths that reject writes, to simulate read-only destinations
    read_only: Vec<PathBuf>,
}

impl MemoryWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to the in-memory storage
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: &str) {
        self.files
            .insert(path.as_ref().to_path_buf(), content.to_string());
    }

    /// Make writes to `path` fail with a permission error
    pub fn deny_writes(&mut self, path: impl AsRef<Path>) {
        self.read_only.push(path.as_ref().to_path_buf());
    }

    /// Contents of a stored file
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }
}

impl Workspace for MemoryWorkspace {
    fn read_file(&self, path: &Path) -> Result<String, WorkspaceError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| WorkspaceError::NotFound(path.to_path_buf()))
    }

    fn write_file(&mut self, path: &Path, contents: &str) -> Result<(), WorkspaceError> {
        if self.read_only.iter().any(|p| p == path) {
            return Err(WorkspaceError::Io {
                path: path.to_path_buf(),
                message: "permission denied".to_string(),
            });
        }
        self.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn remove_file(&mut self, path: &Path) -> Result<bool, WorkspaceError> {
        Ok(self.files.remove(path).is_some())
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_workspace_roundtrip() {
        let mut ws = MemoryWorkspace::new();
        ws.write_file(Path::new("out/a.tex"), "hello").unwrap();

        assert!(ws.file_exists(Path::new("out/a.tex")));
        assert_eq!(ws.read_file(Path::new("out/a.tex")).unwrap(), "hello");
        assert_eq!(ws.get("out/a.tex"), Some("hello"));
    }

    #[test]
    fn test_memory_workspace_missing_file() {
        let ws = MemoryWorkspace::new();
        let err = ws.read_file(Path::new("nope.tex")).unwrap_err();
        assert_eq!(err, WorkspaceError::NotFound(PathBuf::from("nope.tex")));
    }

    #[test]
    fn test_memory_workspace_remove() {
        let mut ws = MemoryWorkspace::new();
        ws.add_file("a.pdf", "%PDF");
        assert!(ws.remove_file(Path::new("a.pdf")).unwrap());
        assert!(!ws.remove_file(Path::new("a.pdf")).unwrap());
        assert!(!ws.file_exists(Path::new("a.pdf")));
    }

    #[test]
    fn test_memory_workspace_denied_write() {
        let mut ws = MemoryWorkspace::new();
        ws.deny_writes("locked.csv");
        let err = ws.write_file(Path::new("locked.csv"), "x").unwrap_err();
        assert!(matches!(err, WorkspaceError::Io { .. }));
        assert!(ws.get("locked.csv").is_none());
    }
}
