//! Internal module rendering the connector-based tree diagram.

use crate::filter::list_entries;
use crate::options::TreedocOptions;
use std::path::Path;

/// Renders the tree diagram of `dir`, one line per filtered entry.
///
/// The tree view always shows the full depth: `max_depth` only limits the
/// content outline. A listing failure yields an inline `Erreur:` line at the
/// failing position; lines already rendered stand.
pub(crate) fn render_tree(dir: &Path, options: &TreedocOptions, prefix: &str) -> String {
    let mut out = String::new();
    let entries = match list_entries(dir, options) {
        Ok(entries) => entries,
        Err(e) => {
            out.push_str(&format!("{}Erreur: {}\n", prefix, e));
            return out;
        }
    };
    let count = entries.len();
    for (i, entry) in entries.iter().enumerate() {
        let last = i + 1 == count;
        let connector = if last { "└── " } else { "├── " };
        if entry.is_dir {
            out.push_str(&format!("{}{}📁 {}/\n", prefix, connector, entry.name));
            let extension = if last { "    " } else { "│   " };
            out.push_str(&render_tree(
                &entry.path,
                options,
                &format!("{}{}", prefix, extension),
            ));
        } else {
            out.push_str(&format!("{}{}📄 {}\n", prefix, connector, entry.name));
        }
    }
    out
}
