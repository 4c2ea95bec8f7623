use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paint_grid::{build_grid, GradientKind, GridRequest, GridResult, Rgb};
use pixelpaint::assets::AssetLoader;
use pixelpaint::models::AppConfig;
use pixelpaint::services::{ExportReport, Exporter, InputCollector};

#[derive(Parser)]
#[command(name = "pixelpaint")]
#[command(about = "Paint-by-number gradient art: dithered color grids exported as PNG")]
struct Cli {
    /// Config file (overrides PIXELPAINT_CONFIG and the built-in defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a grid from command-line parameters
    Generate {
        /// Number of grid rows
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        rows: u32,

        /// Number of grid columns
        #[arg(short = 'c', long, value_parser = clap::value_parser!(u32).range(1..))]
        cols: u32,

        /// Color stops as comma-separated hex RGB (e.g. "#000000,#FFFFFF")
        #[arg(long, value_delimiter = ',', required = true)]
        colors: Vec<Rgb>,

        /// horizontal, vertical, diagonal, radial (or 1-4)
        #[arg(short, long)]
        gradient: Option<GradientKind>,

        /// Palette entries generated per pair of color stops
        #[arg(short, long)]
        subdivisions: Option<usize>,

        /// Pixel size of one cell
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        cell_size: Option<u32>,

        /// Directory for the exported files
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
    /// Ask for every parameter on the terminal
    Interactive {
        /// Directory for the exported files
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with prompts
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixelpaint=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(io::stderr),
        )
        .init();

    let loader = AssetLoader::from_cli(cli.config);
    let mut config = AppConfig::load_from_assets(&loader);

    let command = cli
        .command
        .unwrap_or(Commands::Interactive { out_dir: None });

    let request = match command {
        Commands::Generate {
            rows,
            cols,
            colors,
            gradient,
            subdivisions,
            cell_size,
            out_dir,
        } => {
            if let Some(px) = cell_size {
                config.render.cell_size = px;
            }
            if let Some(dir) = out_dir {
                config.output.dir = dir;
            }
            GridRequest::new(
                rows as usize,
                cols as usize,
                gradient.unwrap_or(config.defaults.gradient),
                colors,
                subdivisions.unwrap_or(config.defaults.subdivisions),
            )
        }
        Commands::Interactive { out_dir } => {
            if let Some(dir) = out_dir {
                config.output.dir = dir;
            }
            let stdin = io::stdin();
            InputCollector::new(stdin.lock(), io::stdout()).collect()?
        }
    };

    run(&config, &request)
}

/// Build the grid, export it and print a summary
fn run(config: &AppConfig, request: &GridRequest) -> anyhow::Result<()> {
    let result = build_grid(request)?;
    tracing::info!(
        rows = request.rows,
        cols = request.cols,
        gradient = %request.gradient,
        palette = result.palette.len(),
        colors = result.legend.len(),
        "Built grid"
    );

    let exporter = Exporter::new(config)?;
    let report = exporter.export(&result)?;

    print_summary(&result, &report);
    Ok(())
}

fn print_summary(result: &GridResult, report: &ExportReport) {
    println!("\nColor legend:");
    for entry in &result.legend {
        println!("  {:>3}  {}", entry.label, entry.color);
    }

    println!("\nWrote:");
    for path in report.paths() {
        println!("  {}", path.display());
    }
}
