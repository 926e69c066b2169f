//! Document assembly and the final write step.
//!
//! Combines the title, timestamp, tree diagram and content outline into one
//! Markdown string. No filtering logic lives here.

use crate::TreedocError;
use chrono::Local;
use std::fs;
use std::path::Path;

/// Assembles the final Markdown document. Pure string concatenation.
pub(crate) fn assemble_document(root_name: &str, tree: &str, content: &str) -> String {
    let timestamp = Local::now().format("%d/%m/%Y %H:%M:%S");
    let mut out = String::with_capacity(tree.len() + content.len() + 256);
    out.push_str(&format!("# Structure du projet {}\n\n", root_name));
    out.push_str(&format!("*Généré le {}*\n\n", timestamp));
    out.push_str("## Vue arborescente\n\n");
    out.push_str(&format!("```\n{}/\n", root_name));
    out.push_str(tree);
    out.push_str("```\n\n");
    out.push_str("## Structure détaillée avec contenu\n\n");
    out.push_str(&format!("- 📁 **{}/**\n", root_name));
    out.push_str(content);
    out
}

/// Writes the document to `path`, UTF-8, overwriting any existing file.
pub fn write_document(document: &str, path: impl AsRef<Path>) -> Result<(), TreedocError> {
    fs::write(&path, document).map_err(|e| TreedocError::io(path.as_ref(), e))?;
    Ok(())
}
