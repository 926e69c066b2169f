//! # Treedoc
//!
//! `treedoc` walks a directory tree and produces a single Markdown document describing it:
//! a visual tree diagram plus, for each included text file, its content embedded in a
//! collapsible, language-tagged code block. Excluded, binary, oversized or unreadable
//! files get a one-line annotation instead.
//!
//! Traversal is synchronous depth-first recursion; the whole document is built in memory
//! and written once. Read failures never abort a run: they become inline annotations in
//! the document.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use treedoc::{TreedocBuilder, BinaryDetection, generate, write_document};
//!
//! let options = TreedocBuilder::new(".")
//!     .include_hidden(false)
//!     .max_depth(3)
//!     .max_file_size(512 * 1024)
//!     .binary_detection(BinaryDetection::Simple)
//!     .build();
//!
//! let document = generate(&options).expect("Failed to generate document");
//! write_document(&document, "project-structure.md").expect("Failed to write document");
//! ```

mod content;
mod document;
mod engine;
mod error;
mod filter;
mod options;
mod tree;
mod types;

pub use document::write_document;
pub use engine::generate;
pub use error::TreedocError;
pub use options::{
    BinaryDetection, DEFAULT_BINARY_EXTENSIONS, DEFAULT_EXCLUDED_FILES, DEFAULT_EXCLUDED_FOLDERS,
    TreedocBuilder, TreedocOptions,
};
