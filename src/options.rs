use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// Directory names pruned by default (exact match, not path).
pub const DEFAULT_EXCLUDED_FOLDERS: &[&str] = &[
    "node_modules",
    ".git",
    "target",
    "dist",
    "build",
    "coverage",
    "__pycache__",
    ".idea",
    ".vscode",
    "vendor",
];

/// File names skipped by default (exact match).
pub const DEFAULT_EXCLUDED_FILES: &[&str] = &[
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "Cargo.lock",
    ".DS_Store",
    "Thumbs.db",
    "project-structure.md",
];

/// Extensions treated as binary without opening the file (lowercase).
pub const DEFAULT_BINARY_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "ico", "webp", "tiff", "pdf", "zip", "tar", "gz", "bz2",
    "xz", "rar", "7z", "exe", "dll", "so", "dylib", "bin", "dat", "db", "sqlite", "mp3", "mp4",
    "avi", "mov", "mkv", "wav", "flac", "ogg", "ttf", "otf", "woff", "woff2", "eot", "class",
    "jar", "pyc", "o", "a", "wasm",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryDetection {
    /// A zero byte anywhere in the raw bytes marks the file binary.
    Simple,
    /// Heuristic inspection via `content_inspector`.
    Accurate,
    /// Never classify by content; only `binary_extensions` applies.
    None,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreedocOptions {
    pub root: PathBuf,
    pub excluded_folders: HashSet<String>,
    pub excluded_files: HashSet<String>,
    pub binary_extensions: HashSet<String>,
    pub max_depth: Option<usize>,
    pub max_file_size: u64,
    pub include_hidden: bool,
    pub binary_detection: BinaryDetection,
}
impl Default for TreedocOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            excluded_folders: to_set(DEFAULT_EXCLUDED_FOLDERS),
            excluded_files: to_set(DEFAULT_EXCLUDED_FILES),
            binary_extensions: to_set(DEFAULT_BINARY_EXTENSIONS),
            max_depth: None,
            max_file_size: 1024 * 1024,
            include_hidden: false,
            binary_detection: BinaryDetection::Simple,
        }
    }
}
fn to_set(names: &[&str]) -> HashSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}
#[derive(Debug, Default)]
pub struct TreedocBuilder {
    options: TreedocOptions,
}
impl TreedocBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: TreedocOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    /// Adds folder names to the default exclusion set.
    pub fn exclude_folders(mut self, names: impl IntoIterator<Item = String>) -> Self {
        self.options.excluded_folders.extend(names);
        self
    }
    /// Adds file names to the default exclusion set.
    pub fn exclude_files(mut self, names: impl IntoIterator<Item = String>) -> Self {
        self.options.excluded_files.extend(names);
        self
    }
    /// Replaces the binary extension set (stored lowercase).
    pub fn binary_extensions(mut self, extensions: impl IntoIterator<Item = String>) -> Self {
        self.options.binary_extensions = extensions.into_iter().map(|e| e.to_lowercase()).collect();
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn max_file_size(mut self, bytes: u64) -> Self {
        self.options.max_file_size = bytes;
        self
    }
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.options.include_hidden = yes;
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn build(self) -> TreedocOptions {
        self.options
    }
}
