//! Internal module rendering the nested content outline.

use crate::filter::{FileClass, classify_file, extension_of, list_entries};
use crate::options::TreedocOptions;
use std::path::Path;

/// Renders the content outline of `dir` at `depth`.
///
/// Every structural line is prefixed with `depth` two-space units. When
/// `max_depth` is set, a call past the limit returns empty and prunes the
/// whole subtree.
pub(crate) fn render_content(dir: &Path, options: &TreedocOptions, depth: usize) -> String {
    if let Some(limit) = options.max_depth {
        if depth > limit {
            return String::new();
        }
    }
    let indent = "  ".repeat(depth);
    let mut out = String::new();
    let entries = match list_entries(dir, options) {
        Ok(entries) => entries,
        Err(e) => {
            out.push_str(&format!("{}- Erreur: {}\n", indent, e));
            return out;
        }
    };
    for entry in &entries {
        if entry.is_dir {
            out.push_str(&format!("{}- 📁 **{}/**\n", indent, entry.name));
            out.push_str(&render_content(&entry.path, options, depth + 1));
            continue;
        }
        match classify_file(entry, options) {
            FileClass::Binary => {
                out.push_str(&format!("{}- 📄 **{}** (fichier binaire)\n", indent, entry.name));
            }
            FileClass::Oversized { size } => {
                out.push_str(&format!(
                    "{}- 📄 **{}** (fichier trop volumineux : {:.2} KB)\n",
                    indent,
                    entry.name,
                    size as f64 / 1024.0
                ));
            }
            FileClass::Unreadable => {
                out.push_str(&format!(
                    "{}- 📄 **{}** (contenu illisible)\n",
                    indent, entry.name
                ));
            }
            FileClass::Text {
                content,
                line_count,
            } => {
                let lang = language_for(&entry.path);
                out.push_str(&format!(
                    "{}- 📄 **{}** ({} lignes)\n\n",
                    indent, entry.name, line_count
                ));
                out.push_str(&format!(
                    "{}<details>\n{}<summary>Voir le contenu</summary>\n\n",
                    indent, indent
                ));
                out.push_str(&format!("{}```{}\n", indent, lang));
                out.push_str(&content);
                if !content.ends_with('\n') {
                    out.push('\n');
                }
                out.push_str(&format!("{}```\n\n{}</details>\n\n", indent, indent));
            }
        }
    }
    out
}

/// Maps a file's extension to a fence language tag; unknown extensions fall
/// back to plain `text`.
fn language_for(path: &Path) -> &'static str {
    let ext = extension_of(path).unwrap_or_default();
    match ext.as_str() {
        "rs" => "rust", "toml" => "toml", "json" => "json", "md" | "markdown" => "markdown",
        "html" | "htm" => "html", "css" => "css", "scss" | "sass" => "scss",
        "js" | "mjs" | "cjs" => "javascript", "jsx" => "jsx", "ts" | "mts" => "typescript",
        "tsx" => "tsx", "vue" => "vue", "svelte" => "svelte",
        "py" => "python", "sh" | "bash" | "zsh" => "bash", "yml" | "yaml" => "yaml",
        "xml" => "xml", "sql" => "sql", "ini" | "cfg" | "conf" => "ini",
        "c" => "c", "cpp" | "cc" | "cxx" => "cpp", "h" => "c", "hpp" => "cpp",
        "go" => "go", "rb" => "ruby", "php" => "php", "swift" => "swift",
        "kt" | "kts" => "kotlin", "scala" => "scala", "dart" => "dart",
        "java" => "java", "cs" => "csharp", "lua" => "lua", "r" => "r",
        "ex" | "exs" => "elixir", "hs" => "haskell", "clj" => "clojure",
        "dockerfile" => "dockerfile", "graphql" | "gql" => "graphql",
        _ => "text",
    }
}
