use std::path::PathBuf;

/// A transient view of one filesystem item during traversal.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    /// Entry name, lossy UTF-8.
    pub name: String,
    /// Full path to the entry.
    pub path: PathBuf,
    /// Whether the entry is a directory.
    pub is_dir: bool,
    /// Size in bytes; zero for directories.
    pub size: u64,
}
