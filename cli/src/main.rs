//! unulyz CLI - Ulysses sheet conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unulyz::convert::{self, BatchReport, ConvertFailure, ConvertOptions};
use unulyz::{JsonFormat, ParseOptions, RenderOptions, SheetParser};

#[derive(Parser)]
#[command(name = "unulyz")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert Ulysses sheets (.ulyz, Content.xml) to Markdown", long_about = None)]
struct Cli {
    /// Input sheet file or directory
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output file (for a file input) or directory (for a directory input)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Require this markup identifier (e.g. "markdownl")
    #[arg(long, global = true, value_name = "ID", env = "UNULYZ_MARKUP")]
    markup: Option<String>,

    /// Do not write keyword front matter
    #[arg(long, global = true)]
    no_frontmatter: bool,

    /// Convert directory entries in parallel
    #[arg(long)]
    parallel: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a sheet to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input sheet file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Convert a sheet to JSON
    Json {
        /// Input sheet file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show sheet information
    Info {
        /// Input sheet file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print rendering statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

struct Settings {
    parse: ParseOptions,
    render: RenderOptions,
}

impl Settings {
    fn from_cli(markup: Option<String>, no_frontmatter: bool) -> Self {
        let mut parse = ParseOptions::new();
        if let Some(id) = markup {
            parse = parse.with_markup_identifier(id);
        }
        Self {
            parse,
            render: RenderOptions::new().with_frontmatter(!no_frontmatter),
        }
    }

    fn parser(&self) -> SheetParser {
        SheetParser::with_options(self.parse.clone())
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let settings = Settings::from_cli(cli.markup, cli.no_frontmatter);

    let result = match cli.command {
        Some(Commands::Markdown { input, output }) => {
            cmd_markdown(&settings, &input, output.as_deref())
        }
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&settings, &input, output.as_deref(), compact),
        Some(Commands::Info { input, json }) => cmd_info(&settings, &input, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&settings, &input, cli.output.as_deref(), cli.parallel)
            } else {
                println!("{}", "Usage: unulyz <INPUT> [OUTPUT]".yellow());
                println!("       unulyz --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(
    settings: &Settings,
    input: &Path,
    output: Option<&Path>,
    parallel: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = ConvertOptions::new()
        .with_parse_options(settings.parse.clone())
        .with_render_options(settings.render.clone())
        .with_parallel(parallel);

    if !input.is_dir() {
        let output = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| convert::output_path_for(input, None));
        convert::convert_file(input, &output, &options)?;
        println!("{} {}", "Saved to".green(), output.display());
        return Ok(());
    }

    let report = if parallel {
        let spinner = ProgressBar::new_spinner();
        spinner.set_message(format!("Converting {}...", input.display()));
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        let report = convert::convert_directory(input, output, &options)?;
        spinner.finish_and_clear();
        report
    } else {
        convert_with_progress(input, output, &options)?
    };

    print_report(&report);

    if report.is_success() {
        Ok(())
    } else {
        Err(format!("{} of {} sheet(s) failed", report.failed.len(), report.total()).into())
    }
}

fn convert_with_progress(
    dir: &Path,
    output_dir: Option<&Path>,
    options: &ConvertOptions,
) -> Result<BatchReport, Box<dyn std::error::Error>> {
    let inputs = convert::find_inputs(dir)?;
    if let Some(out) = output_dir {
        fs::create_dir_all(out)?;
    }

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut report = BatchReport::default();
    for input in inputs {
        pb.set_message(file_label(&input));
        let output = convert::output_path_for(&input, output_dir);
        match convert::convert_file(&input, &output, options) {
            Ok(result) => report.converted.push(result),
            Err(error) => report.failed.push(ConvertFailure { input, error }),
        }
        pb.inc(1);
    }
    pb.finish_with_message("Done!");

    Ok(report)
}

fn print_report(report: &BatchReport) {
    if !report.converted.is_empty() {
        println!("\n{}", "Converted:".green().bold());
        for result in &report.converted {
            println!("  {} {}", "├─".dimmed(), result.output.display());
        }
    }

    for failure in &report.failed {
        eprintln!(
            "{} {}: {}",
            "Failed".red().bold(),
            failure.input.display(),
            failure.error
        );
    }

    println!(
        "\n{} {} converted, {} failed",
        "Done!".green().bold(),
        report.converted.len(),
        report.failed.len()
    );
}

fn cmd_markdown(
    settings: &Settings,
    input: &Path,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let sheet = settings.parser().parse_file(input)?;
    let doc = unulyz::render::render_sheet(&sheet, &settings.render)?;

    if let Some(path) = output {
        unulyz::render::write_markdown_file(&doc, path, &settings.render)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        print!("{}", unulyz::render::to_markdown(&doc, &settings.render));
    }

    Ok(())
}

fn cmd_json(
    settings: &Settings,
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let sheet = settings.parser().parse_file(input)?;
    let doc = unulyz::render::render_sheet(&sheet, &settings.render)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = unulyz::render::to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(
    settings: &Settings,
    input: &Path,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let sheet = settings.parser().parse_file(input)?;
    let result = unulyz::render::render_sheet_with_stats(&sheet, &settings.render)?;
    let stats = &result.stats;

    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    println!("{}", "Sheet Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!(
        "{}: {}",
        "Markup".bold(),
        sheet.markup.identifier.as_deref().unwrap_or("(none)")
    );

    let keywords = &result.document.front_matter.tags;
    if keywords.is_empty() {
        println!("{}: {}", "Keywords".bold(), "(none)".dimmed());
    } else {
        println!("{}: {}", "Keywords".bold(), keywords.join(", "));
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Tag definitions".bold(), stats.tag_definition_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Tag groups".bold(), stats.tag_group_count);
    println!("{}: {}", "Inline elements".bold(), stats.element_count);
    println!(
        "{}: {}",
        "Transliterated chars".bold(),
        stats.transliterated_char_count
    );

    if stats.all_resolved() {
        println!("{}: {}", "Unresolved tags".bold(), "0".green());
    } else {
        let kinds: Vec<&str> = stats.unresolved_kinds.iter().map(String::as_str).collect();
        println!(
            "{}: {} ({})",
            "Unresolved tags".bold(),
            stats.unresolved_tag_count.to_string().yellow(),
            kinds.join(", ")
        );
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unulyz".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Ulysses sheet to Markdown converter");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/unulyz".dimmed());
    println!("License: MIT");
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
