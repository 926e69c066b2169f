use std::fs;
use tempfile::tempdir;
use treedoc::{BinaryDetection, TreedocBuilder, generate};

#[test]
fn test_basic_document() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hi\n").unwrap();
    let options = TreedocBuilder::new(dir.path()).build();
    let doc = generate(&options).unwrap();
    assert!(doc.contains("# Structure du projet"));
    assert!(doc.contains("## Vue arborescente"));
    assert!(doc.contains("## Structure détaillée avec contenu"));
    assert!(doc.contains("└── 📄 a.txt"));
    assert!(doc.contains("- 📄 **a.txt** (2 lignes)"));
    assert!(doc.contains("<summary>Voir le contenu</summary>"));
    assert!(doc.contains("```text\nhi\n```"));
}

#[test]
fn test_hidden_entries_skipped() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hi\n").unwrap();
    fs::create_dir(dir.path().join(".hidden")).unwrap();
    fs::write(dir.path().join(".hidden/secret.txt"), "secret").unwrap();
    fs::write(dir.path().join(".env"), "KEY=1").unwrap();
    let options = TreedocBuilder::new(dir.path()).build();
    let doc = generate(&options).unwrap();
    assert!(doc.contains("a.txt"));
    assert!(!doc.contains(".hidden"));
    assert!(!doc.contains("secret"));
    assert!(!doc.contains(".env"));
}

#[test]
fn test_include_hidden() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".env"), "KEY=1").unwrap();
    let options = TreedocBuilder::new(dir.path()).include_hidden(true).build();
    let doc = generate(&options).unwrap();
    assert!(doc.contains("- 📄 **.env**"));
}

#[test]
fn test_excluded_folder_pruned() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("node_modules")).unwrap();
    fs::write(dir.path().join("node_modules/lib.js"), "x").unwrap();
    fs::write(dir.path().join("a.txt"), "hi\n").unwrap();
    let options = TreedocBuilder::new(dir.path()).build();
    let doc = generate(&options).unwrap();
    assert!(!doc.contains("node_modules"));
    assert!(!doc.contains("lib.js"));
}

#[test]
fn test_exclude_folders_appended_to_defaults() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("private")).unwrap();
    fs::write(dir.path().join("private/key.txt"), "k").unwrap();
    fs::create_dir(dir.path().join("node_modules")).unwrap();
    fs::write(dir.path().join("node_modules/lib.js"), "x").unwrap();
    let options = TreedocBuilder::new(dir.path())
        .exclude_folders(vec!["private".to_string()])
        .build();
    let doc = generate(&options).unwrap();
    assert!(!doc.contains("private"));
    assert!(!doc.contains("node_modules"));
}

#[test]
fn test_excluded_file_by_name() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("package-lock.json"), "{}").unwrap();
    fs::write(dir.path().join("a.txt"), "hi\n").unwrap();
    let options = TreedocBuilder::new(dir.path()).build();
    let doc = generate(&options).unwrap();
    assert!(!doc.contains("package-lock.json"));
}

#[test]
fn test_binary_extension_never_embedded() {
    // Plain text behind a binary extension: the extension alone decides.
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("image.png"), "not really an image").unwrap();
    let options = TreedocBuilder::new(dir.path()).build();
    let doc = generate(&options).unwrap();
    assert!(doc.contains("- 📄 **image.png** (fichier binaire)"));
    assert!(!doc.contains("not really an image"));
}

#[test]
fn test_binary_content_sniff() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("blob.xyz"), [1u8, 2, 0, 3]).unwrap();
    let options = TreedocBuilder::new(dir.path())
        .binary_detection(BinaryDetection::Simple)
        .build();
    let doc = generate(&options).unwrap();
    assert!(doc.contains("- 📄 **blob.xyz** (fichier binaire)"));
}

#[test]
fn test_binary_detection_none() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("blob.xyz"), [1u8, 2, 0, 3]).unwrap();
    let options = TreedocBuilder::new(dir.path())
        .binary_detection(BinaryDetection::None)
        .build();
    let doc = generate(&options).unwrap();
    assert!(!doc.contains("fichier binaire"));
    assert!(doc.contains("- 📄 **blob.xyz** (1 lignes)"));
}

#[test]
fn test_oversized_file_annotated() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("big.txt"), "A".repeat(5000)).unwrap();
    let options = TreedocBuilder::new(dir.path()).max_file_size(100).build();
    let doc = generate(&options).unwrap();
    assert!(doc.contains("- 📄 **big.txt** (fichier trop volumineux : 4.88 KB)"));
    assert!(!doc.contains("<details>"));
}

#[test]
fn test_line_count_is_newlines_plus_one() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("x.txt"), "a\nb\nc").unwrap();
    fs::write(dir.path().join("y.txt"), "a\nb\nc\n").unwrap();
    let options = TreedocBuilder::new(dir.path()).build();
    let doc = generate(&options).unwrap();
    assert!(doc.contains("- 📄 **x.txt** (3 lignes)"));
    assert!(doc.contains("- 📄 **y.txt** (4 lignes)"));
}

#[test]
fn test_max_depth_limits_content_but_not_tree() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/inner.txt"), "deep\n").unwrap();
    fs::write(dir.path().join("a.txt"), "hi\n").unwrap();
    let options = TreedocBuilder::new(dir.path()).max_depth(0).build();
    let doc = generate(&options).unwrap();
    // Content outline stops at the root's immediate children.
    assert!(doc.contains("- 📁 **sub/**"));
    assert!(doc.contains("- 📄 **a.txt**"));
    assert!(!doc.contains("**inner.txt**"));
    // The tree diagram still shows the full depth.
    assert!(doc.contains("📄 inner.txt"));
}

#[test]
fn test_unknown_extension_falls_back_to_text() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("notes.zzz"), "plain\n").unwrap();
    let options = TreedocBuilder::new(dir.path()).build();
    let doc = generate(&options).unwrap();
    assert!(doc.contains("```text\nplain\n```"));
}

#[test]
fn test_language_tag_from_extension() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("main.rs"), "fn main() {}\n").unwrap();
    let options = TreedocBuilder::new(dir.path()).build();
    let doc = generate(&options).unwrap();
    assert!(doc.contains("```rust\nfn main() {}\n```"));
}

#[test]
fn test_idempotent_modulo_timestamp() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/inner.txt"), "deep\n").unwrap();
    fs::write(dir.path().join("a.txt"), "hi\n").unwrap();
    let options = TreedocBuilder::new(dir.path()).build();
    let strip = |doc: &str| {
        doc.lines()
            .filter(|l| !l.starts_with("*Généré le"))
            .collect::<Vec<_>>()
            .join("\n")
    };
    let first = generate(&options).unwrap();
    let second = generate(&options).unwrap();
    assert_eq!(strip(&first), strip(&second));
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_annotated() {
    // A dangling symlink passes the name filters but fails the content read.
    let dir = tempdir().unwrap();
    std::os::unix::fs::symlink(dir.path().join("missing"), dir.path().join("ghost.txt")).unwrap();
    fs::write(dir.path().join("a.txt"), "hi\n").unwrap();
    let options = TreedocBuilder::new(dir.path()).build();
    let doc = generate(&options).unwrap();
    assert!(doc.contains("- 📄 **ghost.txt** (contenu illisible)"));
    assert!(doc.contains("- 📄 **a.txt** (2 lignes)"));
}

#[cfg(unix)]
#[test]
fn test_unlistable_directory_annotated() {
    use std::os::unix::fs::PermissionsExt;
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("locked")).unwrap();
    fs::write(dir.path().join("locked/inner.txt"), "deep\n").unwrap();
    fs::write(dir.path().join("a.txt"), "hi\n").unwrap();
    fs::set_permissions(dir.path().join("locked"), fs::Permissions::from_mode(0o000)).unwrap();
    // Root can list the directory regardless of its mode; nothing to assert then.
    if fs::read_dir(dir.path().join("locked")).is_err() {
        let options = TreedocBuilder::new(dir.path()).build();
        let doc = generate(&options).unwrap();
        assert!(doc.contains("Erreur:"));
        assert!(doc.contains("- Erreur:"));
        assert!(!doc.contains("inner.txt"));
        // Siblings already rendered stand.
        assert!(doc.contains("- 📄 **a.txt** (2 lignes)"));
    }
    fs::set_permissions(dir.path().join("locked"), fs::Permissions::from_mode(0o755)).unwrap();
}

#[test]
fn test_invalid_root() {
    let dir = tempdir().unwrap();
    let options = TreedocBuilder::new(dir.path().join("missing")).build();
    assert!(generate(&options).is_err());
}
