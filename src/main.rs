use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

use sitegen::Config;
use sitegen::site::{copy_dir, generate_pages_recursive};

#[derive(Parser)]
#[command(name = "sitegen")]
#[command(about = "Build a static HTML site from Markdown files")]
struct Cli {
    /// Prefix for root-relative links (e.g. "/repo/" when hosted in a subdirectory)
    base_path: Option<String>,

    /// Config file
    #[arg(short, long, default_value = "sitegen.toml")]
    config: PathBuf,

    /// Directory copied verbatim into the output
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Directory of Markdown sources
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(long)]
    template: Option<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// More output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load(&cli.config)?;
    if let Some(base_path) = cli.base_path {
        config.base_path = base_path;
    }
    let paths = &mut config.paths;
    if let Some(dir) = cli.static_dir {
        paths.static_dir = dir;
    }
    if let Some(dir) = cli.content_dir {
        paths.content_dir = dir;
    }
    if let Some(template) = cli.template {
        paths.template = template;
    }
    if let Some(dir) = cli.output_dir {
        paths.output_dir = dir;
    }

    let copied = copy_dir(&paths.static_dir, &paths.output_dir)
        .context("copying static files")?;
    let pages = generate_pages_recursive(
        &paths.content_dir,
        &paths.template,
        &paths.output_dir,
        &config.base_path,
    )
    .context("generating pages")?;

    println!(
        "Built {} page(s) and copied {} static file(s) into {}",
        pages,
        copied,
        paths.output_dir.display()
    );
    Ok(())
}
