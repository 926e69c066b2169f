use crate::options::{BinaryDetection, TreedocOptions};
use crate::types::DirectoryEntry;
use std::fs;
use std::io;
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;

/// Classification of a file once the name-level filters have let it through.
#[derive(Debug)]
pub(crate) enum FileClass {
    Text { content: String, line_count: usize },
    Binary,
    Oversized { size: u64 },
    Unreadable,
}

/// Lists the entries of `dir` with the hidden and excluded-name rules applied,
/// in filesystem order. Both renderers go through here so the tree diagram and
/// the content outline describe the same shape.
pub(crate) fn list_entries(
    dir: &Path,
    options: &TreedocOptions,
) -> io::Result<Vec<DirectoryEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !options.include_hidden && name.starts_with('.') {
            continue;
        }
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if is_dir && options.excluded_folders.contains(&name) {
            #[cfg(feature = "logging")]
            tracing::debug!("Excluded folder: {}", name);
            continue;
        }
        if !is_dir && options.excluded_files.contains(&name) {
            continue;
        }
        let size = if is_dir {
            0
        } else {
            entry.metadata().map(|m| m.len()).unwrap_or(0)
        };
        entries.push(DirectoryEntry {
            name,
            path: entry.path(),
            is_dir,
            size,
        });
    }
    Ok(entries)
}

/// Classifies a file for the content outline.
///
/// Extension matches never open the file. The content sniff and the embedding
/// share one full read; any read error turns into [`FileClass::Unreadable`]
/// rather than aborting the traversal.
pub(crate) fn classify_file(entry: &DirectoryEntry, options: &TreedocOptions) -> FileClass {
    if let Some(ext) = extension_of(&entry.path) {
        if options.binary_extensions.contains(&ext) {
            return FileClass::Binary;
        }
    }
    let bytes = match fs::read(&entry.path) {
        Ok(bytes) => bytes,
        Err(_e) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Unreadable file {}: {}", entry.path.display(), _e);
            return FileClass::Unreadable;
        }
    };
    let is_binary = match options.binary_detection {
        BinaryDetection::Simple => bytes.contains(&0),
        BinaryDetection::Accurate => content_inspector::inspect(&bytes).is_binary(),
        BinaryDetection::None => false,
    };
    if is_binary {
        #[cfg(feature = "logging")]
        tracing::debug!("Binary file detected: {}", entry.path.display());
        return FileClass::Binary;
    }
    if entry.size > options.max_file_size {
        return FileClass::Oversized { size: entry.size };
    }
    let content = String::from_utf8_lossy(&bytes).into_owned();
    // split('\n') on "hi\n" yields ["hi", ""]: a trailing newline counts as
    // one extra line, and that exact rule is part of the output format.
    let line_count = content.split('\n').count();
    FileClass::Text {
        content,
        line_count,
    }
}

/// Lowercased extension, if any.
pub(crate) fn extension_of(path: &Path) -> Option<String> {
    path.extension().map(|e| e.to_string_lossy().to_lowercase())
}
