mod site;

use anyhow::{Context, Result};
use catcolors_codegen::{CategoryColors, Config};
use catcolors_model::{Color, DisplayMode, OptionStore};
use clap::{Parser, Subcommand};
use site::Site;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "catcolors")]
#[command(about = "Job category colors: settings schema and stylesheet generator")]
#[command(version)]
struct Cli {
    /// Render configuration (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the settings section as JSON
    Schema {
        /// Site file with terms and stored options
        path: PathBuf,
    },

    /// Print the page-head stylesheet
    Css {
        /// Site file with terms and stored options
        path: PathBuf,

        /// Override the stored display mode (background or text)
        #[arg(long)]
        mode: Option<String>,

        /// Print bare CSS without the <style> element
        #[arg(long)]
        bare: bool,
    },

    /// Check a site file for invalid modes and colors
    Check {
        /// Site file with terms and stored options
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    debug!(?config, "loaded config");
    let colors = CategoryColors::new(config);

    match cli.command {
        Command::Schema { path } => cmd_schema(&colors, &path),
        Command::Css { path, mode, bare } => cmd_css(&colors, &path, mode.as_deref(), bare),
        Command::Check { path } => cmd_check(&colors, &path),
    }
}

fn cmd_schema(colors: &CategoryColors, path: &Path) -> Result<()> {
    let site = Site::load(path)?;
    let provider = site.provider(&colors.config().taxonomy);

    let section = colors.settings_section(&provider);
    info!(fields = section.fields.len(), "built settings schema");
    println!("{}", serde_json::to_string_pretty(&section)?);
    Ok(())
}

fn cmd_css(colors: &CategoryColors, path: &Path, mode: Option<&str>, bare: bool) -> Result<()> {
    let site = Site::load(path)?;
    let provider = site.provider(&colors.config().taxonomy);

    let mode = match mode {
        Some(mode) => mode.parse::<DisplayMode>()?,
        None => colors
            .stored_mode(&site.options)
            .context("reading the stored display mode")?,
    };

    let css = colors.stylesheet_with_mode(&provider, &site.options, mode);
    if bare {
        print!("{css}");
    } else {
        print!(
            "{}",
            catcolors_codegen::html::style_tag(&colors.config().style_id, &css)
        );
    }
    Ok(())
}

fn cmd_check(colors: &CategoryColors, path: &Path) -> Result<()> {
    let site = Site::load(path)?;
    let provider = site.provider(&colors.config().taxonomy);
    let keys = colors.config().keys();
    let mut problems = Vec::new();

    if let Err(e) = colors.stored_mode(&site.options) {
        problems.push(e.to_string());
    }

    for term in colors.terms(&provider) {
        if keys.collides_with_fixed_key(&term.slug) {
            problems.push(format!(
                "category {:?} shares its option key with a fixed setting",
                term.slug.as_str()
            ));
        }
        let Some(value) = site.options.get(&keys.color_key(&term.slug)) else {
            continue;
        };
        if value.trim().is_empty() {
            continue;
        }
        if let Err(e) = Color::parse(&value) {
            problems.push(format!("category {:?}: {e}", term.slug.as_str()));
        }
    }

    if !problems.is_empty() {
        for problem in &problems {
            eprintln!("  {problem}");
        }
        anyhow::bail!("{} problem(s) in {}", problems.len(), path.display());
    }

    eprintln!("OK: {}", path.display());
    Ok(())
}
