//! Command-line interface for treedoc.
//!
//! Parses the flags, builds the traversal options, generates the Markdown
//! document and writes it to the output file.

use clap::Parser;
use std::path::PathBuf;
use std::process::exit;
use treedoc::{BinaryDetection, TreedocBuilder, TreedocOptions, generate, write_document};

/// treedoc — directory-to-Markdown snapshot tool
#[derive(Parser)]
#[command(name = "treedoc", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Output file
    #[arg(short, long, default_value = "project-structure.md")]
    output: PathBuf,

    /// Max depth of the content outline; negative means unlimited
    #[arg(short, long, default_value_t = -1, allow_negative_numbers = true)]
    depth: i64,

    /// Folder names to exclude, added to the defaults (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    exclude: Vec<String>,

    /// Max embedded file size in KB (larger files are annotated instead)
    #[arg(short = 's', long = "max-size")]
    max_size: Option<u64>,

    /// Include hidden entries (names starting with a dot)
    #[arg(long)]
    include_hidden: bool,

    /// Binary detection strategy
    #[arg(long, default_value = "simple", value_parser = parse_binary_detection)]
    binary_detection: BinaryDetection,
}

/// Parse string into BinaryDetection enum.
fn parse_binary_detection(s: &str) -> Result<BinaryDetection, String> {
    match s {
        "simple" => Ok(BinaryDetection::Simple),
        "accurate" => Ok(BinaryDetection::Accurate),
        "none" => Ok(BinaryDetection::None),
        _ => Err(format!("invalid binary detection method: {}", s)),
    }
}

impl Cli {
    fn into_options(self) -> (TreedocOptions, PathBuf) {
        let mut builder = TreedocBuilder::new(self.root)
            .exclude_folders(self.exclude)
            .include_hidden(self.include_hidden)
            .binary_detection(self.binary_detection);

        builder = if self.depth >= 0 {
            builder.max_depth(self.depth as usize)
        } else {
            builder.no_limit_depth()
        };
        if let Some(kb) = self.max_size {
            builder = builder.max_file_size(kb * 1024);
        }

        (builder.build(), self.output)
    }
}

fn main() {
    let cli = Cli::parse();
    let (options, output) = cli.into_options();

    let document = match generate(&options) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };
    if let Err(e) = write_document(&document, &output) {
        eprintln!("Error: {}", e);
        exit(1);
    }
    println!("Structure du projet générée dans {}", output.display());
}
