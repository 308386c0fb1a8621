//! File and directory conversion.
//!
//! Each sheet is converted independently: it is parsed and rendered in
//! memory, and the output file is only written once rendering succeeded.
//! A directory batch keeps going when a sheet fails and reports the failure.
//!
//! # Example
//!
//! ```no_run
//! use unulyz::convert::{convert_directory, ConvertOptions};
//! use std::path::Path;
//!
//! fn main() -> unulyz::Result<()> {
//!     let report = convert_directory(Path::new("sheets"), None, &ConvertOptions::default())?;
//!     for failure in &report.failed {
//!         eprintln!("{}: {}", failure.input.display(), failure.error);
//!     }
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::detect::SheetFormat;
use crate::error::{Error, Result};
use crate::parser::{ParseOptions, SheetParser};
use crate::render::{self, RenderOptions, RenderStats};

/// Options for conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Parsing options
    pub parse: ParseOptions,

    /// Rendering options
    pub render: RenderOptions,

    /// Convert directory entries in parallel
    pub parallel: bool,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set parsing options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse = options;
        self
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Enable or disable parallel batch conversion.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// A successfully converted sheet.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Source file
    pub input: PathBuf,

    /// Written Markdown file
    pub output: PathBuf,

    /// Rendering statistics
    pub stats: RenderStats,
}

/// A sheet that could not be converted.
#[derive(Debug)]
pub struct ConvertFailure {
    /// Source file
    pub input: PathBuf,

    /// First error encountered
    pub error: Error,
}

/// Outcome of a directory conversion.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Converted sheets, in input order
    pub converted: Vec<ConvertResult>,

    /// Failed sheets, in input order
    pub failed: Vec<ConvertFailure>,
}

impl BatchReport {
    /// Total number of inputs.
    pub fn total(&self) -> usize {
        self.converted.len() + self.failed.len()
    }

    /// Check if every input converted.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Derive the Markdown output path for an input file.
///
/// The file stem is kept and the extension replaced by `.md`; the file is
/// placed in `output_dir` when given, next to the input otherwise.
pub fn output_path_for(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    let mut file_name = stem.to_os_string();
    file_name.push(".md");

    match output_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

/// Convert one sheet to a Markdown file.
pub fn convert_file(input: &Path, output: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
    let sheet = SheetParser::with_options(options.parse.clone()).parse_file(input)?;
    let result = render::render_sheet_with_stats(&sheet, &options.render)?;

    log::info!("Saving {}", output.display());
    render::write_markdown_file(&result.document, output, &options.render)?;

    Ok(ConvertResult {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        stats: result.stats,
    })
}

/// List convertible files in a directory (not recursive).
///
/// Archives come first, then XML files, each group sorted by name.
pub fn find_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut archives = Vec::new();
    let mut xml = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some(e) if e == SheetFormat::Ulyz.extension() => archives.push(path),
            Some(e) if e == SheetFormat::Xml.extension() => xml.push(path),
            _ => {}
        }
    }

    archives.sort();
    xml.sort();
    archives.extend(xml);
    Ok(archives)
}

/// Convert every sheet in a directory.
///
/// Only directory listing and output directory creation errors are returned
/// as `Err`; per-sheet errors are collected in the report.
pub fn convert_directory(
    dir: &Path,
    output_dir: Option<&Path>,
    options: &ConvertOptions,
) -> Result<BatchReport> {
    let inputs = find_inputs(dir)?;
    log::info!("Found {} sheet(s) in {}", inputs.len(), dir.display());

    if let Some(out) = output_dir {
        std::fs::create_dir_all(out)?;
    }

    let convert_one = |input: &PathBuf| {
        let output = output_path_for(input, output_dir);
        (input.clone(), convert_file(input, &output, options))
    };

    let outcomes: Vec<(PathBuf, Result<ConvertResult>)> = if options.parallel {
        inputs.par_iter().map(convert_one).collect()
    } else {
        inputs.iter().map(convert_one).collect()
    };

    let mut report = BatchReport::default();
    for (input, outcome) in outcomes {
        match outcome {
            Ok(result) => report.converted.push(result),
            Err(error) => {
                log::warn!("Failed to convert {}: {}", input.display(), error);
                report.failed.push(ConvertFailure { input, error });
            }
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_next_to_input() {
        assert_eq!(
            output_path_for(Path::new("notes/Draft.ulyz"), None),
            PathBuf::from("notes/Draft.md")
        );
    }

    #[test]
    fn test_output_path_in_dir() {
        assert_eq!(
            output_path_for(Path::new("notes/Content.xml"), Some(Path::new("out"))),
            PathBuf::from("out/Content.md")
        );
    }

    #[test]
    fn test_convert_options_builder() {
        let options = ConvertOptions::new()
            .with_parse_options(ParseOptions::new().markdown_xl_only())
            .with_render_options(RenderOptions::new().with_frontmatter(false))
            .with_parallel(true);

        assert!(options.parse.markup_identifier.is_some());
        assert!(!options.render.include_frontmatter);
        assert!(options.parallel);
    }

    #[test]
    fn test_batch_report_counts() {
        let mut report = BatchReport::default();
        assert!(report.is_success());
        report.failed.push(ConvertFailure {
            input: PathBuf::from("x.xml"),
            error: Error::ContentNotFound,
        });
        assert_eq!(report.total(), 1);
        assert!(!report.is_success());
    }
}
