use crate::content::render_content;
use crate::document::assemble_document;
use crate::error::TreedocError;
use crate::options::TreedocOptions;
use crate::tree::render_tree;
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;

/// Generates the full Markdown document for `options.root`.
///
/// Read failures inside the tree are absorbed into the document as inline
/// annotations; only a root that is not a directory surfaces as an error.
pub fn generate(options: &TreedocOptions) -> Result<String, TreedocError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Generating document for root: {}", options.root.display());
    if !options.root.is_dir() {
        return Err(TreedocError::InvalidPath(format!(
            "{} is not a directory",
            options.root.display()
        )));
    }
    let root_name = root_name(&options.root);
    let tree = render_tree(&options.root, options, "");
    let content = render_content(&options.root, options, 0);
    Ok(assemble_document(&root_name, &tree, &content))
}

/// Display name of the root directory. `.` and friends are resolved so the
/// title names the actual directory.
fn root_name(root: &Path) -> String {
    let resolved = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    resolved
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| resolved.display().to_string())
}
