use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use markpage_renderer::site::build_site;
use markpage_renderer::{Renderer, SiteConfig, Template};

#[derive(Parser)]
#[command(name = "markpage-cli")]
#[command(about = "Convert markdown documents into HTML pages")]
struct Cli {
    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render one markdown file (or stdin) to stdout
    Render(RenderArgs),
    /// Build a site from a content directory
    Build(BuildArgs),
}

#[derive(Args)]
struct RenderArgs {
    /// Input markdown file; reads stdin when absent
    input: Option<PathBuf>,

    /// Print the HTML fragment without the page template
    #[arg(long)]
    raw: bool,

    /// Sanitize the generated HTML
    #[arg(long)]
    sanitized: bool,

    /// Page template with {{ Title }} and {{ Content }} placeholders
    #[arg(long)]
    template: Option<PathBuf>,

    /// Prefix for root-relative href/src URLs
    #[arg(long)]
    base_path: Option<String>,
}

#[derive(Args)]
struct BuildArgs {
    /// Site config file
    #[arg(short, long, default_value = SiteConfig::FILE_NAME)]
    config: PathBuf,

    /// Prefix for root-relative href/src URLs (overrides the config)
    #[arg(long)]
    base_path: Option<String>,

    /// Output directory (overrides the config)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(err) = run(cli.command) {
        eprintln!("error: {:#}", err);
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Render(args) => render(args),
        Command::Build(args) => build(args),
    }
}

fn render(args: RenderArgs) -> Result<()> {
    let source = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    let template = match &args.template {
        Some(path) => Template::from_file(path)?,
        None => Template::default(),
    };
    let mut renderer = Renderer::new(template).with_sanitized(args.sanitized);
    if let Some(base_path) = args.base_path {
        renderer = renderer.with_base_path(base_path);
    }

    let html = if args.raw {
        renderer.render_fragment(&source)?
    } else {
        renderer.render_page(&source)?
    };
    print!("{}", html);
    Ok(())
}

fn build(args: BuildArgs) -> Result<()> {
    let mut config = SiteConfig::load(&args.config)?;
    if let Some(base_path) = args.base_path {
        config.base_path = base_path;
    }
    if let Some(output) = args.output {
        config.output_dir = output;
    }
    log::debug!("site config: {:?}", config);

    let report = build_site(&config)
        .with_context(|| format!("failed to build site into {}", config.output_dir.display()))?;
    println!(
        "Built {} page(s) into {} ({} skipped)",
        report.generated.len(),
        config.output_dir.display(),
        report.skipped.len()
    );
    Ok(())
}
