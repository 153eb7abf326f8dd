use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use styled_scaffold::app::App;
use styled_scaffold::render::TerminalRenderer;
use styled_scaffold::theme::{load_options, scaffold_options, scaffold_overrides};
use styled_scaffold::{create_root, AdaptiveTheme, ColorMode, Document, ThemeProvider, ThemeSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Full HTML page with the style sheet inlined
    Html,
    /// Terminal preview with colors
    Term,
    /// Terminal preview without colors
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Light,
    Dark,
    /// Follow the OS setting
    Auto,
}

/// Command-line arguments accepted by the `styled-scaffold` binary.
#[derive(Parser, Debug)]
#[command(
    name = "styled-scaffold",
    version,
    about = "Render the themed counter scaffold as HTML or a terminal preview"
)]
struct Cli {
    #[arg(
        long,
        value_name = "N",
        default_value_t = 0,
        help = "Click the first counter button N times before rendering"
    )]
    clicks: u64,
    #[arg(long, value_enum, default_value_t = OutputFormat::Html, help = "Output format")]
    format: OutputFormat,
    #[arg(
        long,
        value_name = "FILE",
        help = "YAML theme options (default: the scaffold theme)"
    )]
    theme: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = ModeArg::Auto, help = "Palette mode")]
    mode: ModeArg,
    #[arg(
        long,
        value_name = "ID",
        default_value = "root",
        help = "Container to mount into; the page only has `root`"
    )]
    container: String,
    #[arg(
        long,
        value_name = "COLUMNS",
        default_value_t = 100,
        help = "Width of the terminal preview"
    )]
    width: usize,
    #[arg(short, long, help = "Log debug output to stderr")]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    install_tracing(cli.verbose);

    let provider = ThemeProvider::new(theme_source(&cli)?);
    let document = Document::with_container("root").title("Vite + React + TS");
    let mut mounted = create_root(document, &cli.container)?.render(&provider, App::new());

    if cli.clicks > 0 {
        let button = mounted
            .screen()
            .get_all_by_role("button")?
            .first()
            .map(|found| found.path().clone())
            .context("the view has no counter button")?;
        for _ in 0..cli.clicks {
            mounted.click(&button);
        }
        info!(count = mounted.component().count(), "simulated clicks");
    }

    let output = match cli.format {
        OutputFormat::Html => mounted.to_page()?,
        OutputFormat::Term => TerminalRenderer::new(cli.width).render(mounted.tree()),
        OutputFormat::Text => TerminalRenderer::new(cli.width)
            .with_color(false)
            .render(mounted.tree()),
    };
    println!("{}", output);
    Ok(())
}

fn theme_source(cli: &Cli) -> Result<ThemeSource> {
    let adaptive = match &cli.theme {
        Some(path) => {
            debug!(path = %path.display(), "loading theme options");
            AdaptiveTheme::from_options(load_options(path)?)
        }
        None => AdaptiveTheme::from_options(scaffold_options()).map(scaffold_overrides),
    };
    Ok(match cli.mode {
        ModeArg::Light => adaptive.variant(ColorMode::Light).clone().into(),
        ModeArg::Dark => adaptive.variant(ColorMode::Dark).clone().into(),
        ModeArg::Auto => adaptive.into(),
    })
}

fn install_tracing(verbose: bool) {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if verbose {
        if let Ok(directive) = "styled_scaffold=debug".parse() {
            filter = filter.add_directive(directive);
        }
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
