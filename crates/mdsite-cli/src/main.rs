use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mdsite::{Site, SiteOptions, DEFAULT_CONFIG_FILE};

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(version, about = "Generate a static HTML site from Markdown files")]
struct Cli {
    /// Options file (defaults to ./mdsite.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the Markdown sources
    #[arg(long)]
    content: Option<PathBuf>,

    /// Directory copied verbatim into the output
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(long)]
    template: Option<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log every converted page and copied file
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the HTML fragment for a single Markdown file
    Convert {
        /// Input Markdown file
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(Command::Convert { input }) = &cli.command {
        return convert(input);
    }

    let site = Site::new(resolve_options(&cli)?);
    let report = site.build().context("site build failed")?;

    println!(
        "Generated {} pages, copied {} static files into {}",
        report.pages,
        report.static_files,
        site.options().output_dir.display()
    );
    Ok(())
}

fn convert(input: &Path) -> Result<()> {
    let markdown = fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let html = mdsite::markdown_to_html(&markdown)
        .with_context(|| format!("converting {}", input.display()))?;
    println!("{}", html);
    Ok(())
}

/// Options file first, then command-line overrides
fn resolve_options(cli: &Cli) -> Result<SiteOptions> {
    let mut options = match &cli.config {
        Some(path) => SiteOptions::from_file(path)?,
        None => SiteOptions::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?,
    };

    if let Some(content) = &cli.content {
        options.content_dir = content.clone();
    }
    if let Some(static_dir) = &cli.static_dir {
        options.static_dir = static_dir.clone();
    }
    if let Some(template) = &cli.template {
        options.template = template.clone();
    }
    if let Some(output) = &cli.output {
        options.output_dir = output.clone();
    }

    log::debug!("resolved options: {:?}", options);
    Ok(options)
}
