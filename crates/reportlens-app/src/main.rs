// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Reportlens — renders scan reports with the findings paragraph highlighted
// and merges each one with the case's front and back scans.
//
// Entry point. Parses the command line, initialises logging, resolves the
// configuration, loads the font once, and dispatches to a subcommand.

mod batch;
mod settings;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use reportlens_core::BatchConfig;
use reportlens_core::error::Result;
use reportlens_render::{ReportRenderer, load_or_fallback, save_png};
use tracing_subscriber::EnvFilter;

use batch::BatchRunner;
use settings::Overrides;

/// Render highlighted scan reports and merge them with scan images
#[derive(Parser)]
#[command(name = "reportlens")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Options shared by all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// JSON configuration file
    #[arg(long, global = true, env = "REPORTLENS_CONFIG")]
    config: Option<PathBuf>,

    /// TrueType/OpenType font used for report text
    #[arg(long, global = true, env = "REPORTLENS_FONT")]
    font: Option<PathBuf>,

    /// Report canvas width in pixels
    #[arg(long, global = true)]
    width: Option<u32>,

    /// Font size in pixels
    #[arg(long, global = true)]
    font_size: Option<f32>,

    /// Line height in pixels
    #[arg(long, global = true)]
    line_height: Option<u32>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge every case's report with its front and back scans
    Merge(MergeArgs),

    /// Render a single report to a PNG
    Render(RenderArgs),

    /// Print the effective configuration as JSON
    Config,
}

#[derive(Args, Debug)]
struct MergeArgs {
    /// Directory of `<case>_front` / `<case>_back` images
    #[arg(long)]
    images: Option<PathBuf>,

    /// Directory of `<case>.txt` reports
    #[arg(long)]
    reports: Option<PathBuf>,

    /// Directory for merged images
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Report file to render
    report: PathBuf,

    /// Output PNG path
    #[arg(long, short)]
    output: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.global);

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "reportlens failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(opts: &GlobalOpts) {
    let default_level = match (opts.quiet, opts.verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn dispatch(cli: Cli) -> Result<()> {
    let global = cli.global;
    let mut overrides = Overrides {
        font_path: global.font,
        canvas_width: global.width,
        font_size: global.font_size,
        line_height: global.line_height,
        ..Overrides::default()
    };
    if let Commands::Merge(args) = &cli.command {
        overrides.image_dir = args.images.clone();
        overrides.report_dir = args.reports.clone();
        overrides.output_dir = args.output.clone();
    }
    let config = settings::resolve(global.config.as_deref(), overrides)?;

    match cli.command {
        Commands::Merge(_) => merge(&config),
        Commands::Render(args) => render_one(&config, &args),
        Commands::Config => {
            println!("{}", config.to_json()?);
            Ok(())
        }
    }
}

fn build_renderer(config: &BatchConfig) -> Result<ReportRenderer> {
    let face = load_or_fallback(config.font_path.as_deref(), config.render.font_size);
    ReportRenderer::new(face, config.render.clone())
}

fn merge(config: &BatchConfig) -> Result<()> {
    tracing::info!("reportlens starting");
    let renderer = build_renderer(config)?;
    let summary = BatchRunner::new(config, &renderer).run()?;

    println!(
        "{} of {} cases merged into {}",
        summary.written.len(),
        summary.total(),
        config.output_dir.display()
    );
    for skipped in &summary.skipped {
        println!("  skipped {}: {}", skipped.case, skipped.reason);
    }
    Ok(())
}

fn render_one(config: &BatchConfig, args: &RenderArgs) -> Result<()> {
    let renderer = build_renderer(config)?;
    let rendered = renderer.render_file(&args.report)?;
    save_png(&rendered.image, &args.output)?;

    match rendered.span {
        Some(span) => println!(
            "{}: highlighted chars {}..{} ({} glyphs)",
            args.output.display(),
            span.start,
            span.end,
            rendered.highlighted_glyphs
        ),
        None => println!("{}: no highlight anchors found", args.output.display()),
    }
    Ok(())
}
