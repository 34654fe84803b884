//! resumekit CLI - resume template tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde_json::json;

use resumekit::{
    check_extension, parse_file_with_options, validate_content, BuilderSession, BuilderTemplate,
    Column, ContentKind, Element, ElementType, JsonFormat, Palette, ParseOptions,
    RenderOptions, TemplateType,
};

#[derive(Parser)]
#[command(name = "resumekit")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Import, edit and generate resume templates", long_about = None)]
struct Cli {
    /// Input template file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output HTML file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse template HTML into the JSON element model
    Parse {
        /// Input HTML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Fail on content without a resume container
        #[arg(long)]
        strict: bool,

        /// Keep only inline styles
        #[arg(long)]
        no_default_styles: bool,
    },

    /// Generate HTML from a JSON element model
    #[command(alias = "gen")]
    Generate {
        /// Input JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Document title for unnamed templates
        #[arg(long, env = "RESUMEKIT_TITLE")]
        title: Option<String>,

        /// Omit data-type markers on sections
        #[arg(long)]
        no_markers: bool,
    },

    /// Parse template HTML and generate it again
    Roundtrip {
        /// Input HTML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show template information
    Info {
        /// Input template file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Check that a file is an acceptable template upload
    Validate {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },

    /// Scaffold a new template from palette defaults
    New {
        /// Template name
        #[arg(value_name = "NAME")]
        name: String,

        /// Page layout
        #[arg(short, long, value_enum, default_value = "single")]
        layout: Layout,

        /// Element types to insert, in order (all built-ins if omitted)
        #[arg(short = 'e', long = "element", value_name = "TYPE")]
        elements: Vec<String>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Write the JSON model instead of HTML
        #[arg(long)]
        json: bool,
    },

    /// Parse every HTML file in a directory into JSON models
    Batch {
        /// Input directory
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Layout {
    /// One container
    Single,
    /// Sidebar plus main content
    TwoColumn,
}

impl From<Layout> for TemplateType {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::Single => TemplateType::Single,
            Layout::TwoColumn => TemplateType::TwoColumn,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Parse {
            input,
            output,
            compact,
            strict,
            no_default_styles,
        }) => cmd_parse(&input, output.as_deref(), compact, strict, no_default_styles),
        Some(Commands::Generate {
            input,
            output,
            title,
            no_markers,
        }) => cmd_generate(&input, output.as_deref(), title, no_markers),
        Some(Commands::Roundtrip { input, output }) => cmd_roundtrip(&input, output.as_deref()),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Validate { input, json }) => cmd_validate(&input, json),
        Some(Commands::New {
            name,
            layout,
            elements,
            output,
            json,
        }) => cmd_new(&name, layout, &elements, output.as_deref(), json),
        Some(Commands::Batch { input, output }) => cmd_batch(&input, output.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: round trip if input is provided
            if let Some(input) = cli.input {
                cmd_roundtrip(&input, cli.output.as_deref())
            } else {
                println!("{}", "Usage: resumekit <FILE> [OUTPUT]".yellow());
                println!("       resumekit --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn cmd_parse(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    strict: bool,
    no_default_styles: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = ParseOptions::new().with_default_styles(!no_default_styles);
    if strict {
        options = options.strict();
    }

    let template = parse_file_with_options(input, &options)?;
    let json = resumekit::render::to_json(&template, json_format(compact))?;
    write_output(output, &json)
}

fn cmd_generate(
    input: &Path,
    output: Option<&Path>,
    title: Option<String>,
    no_markers: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let template = resumekit::parse_file(input)?;

    let mut render_options = RenderOptions::new().with_type_markers(!no_markers);
    if let Some(title) = title {
        render_options = render_options.with_fallback_title(title);
    }

    let html = resumekit::render::to_html(&template, &render_options);
    write_output(output, &html)
}

fn cmd_roundtrip(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let template = resumekit::parse_file(input)?;
    log::info!(
        "Parsed {} elements ({} layout)",
        template.len(),
        template.template_type
    );
    let html = resumekit::generate_html(&template);
    write_output(output, &html)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let template = resumekit::parse_file(input)?;

    println!("{}", "Template Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!(
        "{}: {}",
        "Name".bold(),
        if template.name.is_empty() {
            "(unnamed)"
        } else {
            template.name.as_str()
        }
    );
    println!("{}: {}", "Layout".bold(), template.template_type);
    println!("{}: {}", "Elements".bold(), template.len());

    if template.template_type.is_two_column() {
        println!(
            "{}: {}",
            "Sidebar".bold(),
            template.column_elements(Column::Left).count()
        );
        println!(
            "{}: {}",
            "Main".bold(),
            template.column_elements(Column::Right).count()
        );
    }

    if template.is_empty() {
        return Ok(());
    }

    println!();
    println!("{}", "Elements".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let last = template.len() - 1;
    for (i, element) in template.elements.iter().enumerate() {
        let branch = if i == last { "└─" } else { "├─" };
        let line = element_line(element, template.template_type.is_two_column());
        println!("  {} {}", branch.dimmed(), line);
    }

    Ok(())
}

fn element_line(element: &Element, two_column: bool) -> String {
    let mut line = Palette::label(&element.element_type).bold().to_string();
    if two_column {
        line.push_str(&format!(" [{}]", element.column.as_str()));
    }
    if !element.list_items.is_empty() {
        line.push_str(&format!(" ({} items)", element.list_items.len()));
    }
    line
}

fn validate_file(input: &Path) -> resumekit::Result<ContentKind> {
    check_extension(input)?;
    let content = fs::read_to_string(input)?;
    validate_content(&content)
}

fn validation_report(input: &Path, result: &resumekit::Result<ContentKind>) -> serde_json::Value {
    match result {
        Ok(kind) => json!({
            "file": input.display().to_string(),
            "valid": true,
            "contentType": kind.to_string(),
        }),
        Err(e) => json!({
            "file": input.display().to_string(),
            "valid": false,
            "error": e.to_string(),
        }),
    }
}

fn cmd_validate(input: &Path, as_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let result = validate_file(input);

    if as_json {
        let report = validation_report(input, &result);
        println!("{}", serde_json::to_string_pretty(&report)?);
        if result.is_err() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let kind = result?;
    println!(
        "{} {} ({} content)",
        "Valid".green().bold(),
        input.display(),
        kind
    );
    Ok(())
}

fn scaffold(name: &str, layout: Layout, elements: &[String]) -> BuilderTemplate {
    let mut session = BuilderSession::new(name, layout.into());

    let types: Vec<ElementType> = if elements.is_empty() {
        session.palette().entries()
    } else {
        elements.iter().map(|e| ElementType::parse(e)).collect()
    };

    for element_type in types {
        session.insert_from_palette(element_type);
    }

    session.into_template()
}

fn cmd_new(
    name: &str,
    layout: Layout,
    elements: &[String],
    output: Option<&Path>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let template = scaffold(name, layout, elements);

    let content = if json {
        resumekit::render::to_json(&template, JsonFormat::Pretty)?
    } else {
        resumekit::generate_html(&template)
    };
    write_output(output, &content)
}

fn collect_html_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case("html"))
        })
        .collect();
    files.sort();
    Ok(files)
}

fn cmd_batch(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_name().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_models", stem))
    });
    fs::create_dir_all(&output_dir)?;

    let files = collect_html_files(input)?;
    if files.is_empty() {
        println!("{}", "No HTML files found".yellow());
        return Ok(());
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message("Parsing templates...");

    let options = ParseOptions::new().sequential();
    let results: Vec<(PathBuf, Result<usize, String>)> = files
        .par_iter()
        .map(|path| {
            let result = parse_file_with_options(path, &options)
                .and_then(|template| {
                    let json = resumekit::render::to_json(&template, JsonFormat::Pretty)?;
                    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
                    fs::write(output_dir.join(format!("{}.json", stem)), json)?;
                    Ok(template.len())
                })
                .map_err(|e| e.to_string());
            pb.inc(1);
            (path.clone(), result)
        })
        .collect();

    pb.finish_with_message("Done!");

    let mut failed = 0;
    println!("\n{}", "Results:".green().bold());
    for (path, result) in &results {
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        match result {
            Ok(count) => println!("  {} {} ({} elements)", "✓".green(), name, count),
            Err(e) => {
                failed += 1;
                println!("  {} {}: {}", "✗".red(), name, e);
            }
        }
    }
    println!(
        "\n{} {} parsed, {} failed -> {}",
        "Done!".green().bold(),
        results.len() - failed,
        failed,
        output_dir.display()
    );

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "resumekit".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Resume template builder");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/resumekit".dimmed());
    println!("License: MIT");
}
