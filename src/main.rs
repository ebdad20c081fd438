//! ncc-disparity CLI: compute and display the disparity map of a stereo pair.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use ncc_disparity::prelude::*;

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser, Debug)]
#[command(name = "ncc-disparity")]
#[command(about = "Compute a block matching disparity map of a rectified stereo pair")]
#[command(version)]
struct Cli {
    /// Path to the left image.
    #[arg(short, long)]
    left: PathBuf,

    /// Path to the right image.
    #[arg(short, long)]
    right: PathBuf,

    /// Minimum disparity.
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    mindisp: i32,

    /// Number of disparities.
    #[arg(short, long, default_value_t = 64)]
    numdisp: usize,

    /// Block size (should be an odd number).
    #[arg(short, long, default_value_t = 21)]
    blocksize: usize,

    /// Value stored for each matched pixel.
    #[arg(long, value_enum, default_value_t = OutputArg::Index)]
    output: OutputArg,

    /// Number of worker threads (defaults to one per core).
    #[arg(long)]
    threads: Option<usize>,

    /// Write a plot of the per-row disparity range to this PNG.
    #[cfg(feature = "statistics")]
    #[arg(long)]
    stats_plot: Option<PathBuf>
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputArg {
    /// Index of the best window in the search strip.
    Index,
    /// Pixel shift of the best window.
    Disparity
}

impl From<OutputArg> for Output {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Index => Output::Index,
            OutputArg::Disparity => Output::Disparity
        }
    }
}

impl Cli {
    fn params(&self) -> Params {
        Params {
            min_disparity: self.mindisp,
            num_disparities: self.numdisp,
            block_size: self.blocksize,
            output: self.output.into()
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(parse_exit_status(err.kind()));
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Exit status for a failed parse: 0 for help and version output, 1 for anything else.
fn parse_exit_status(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    tracing::info!(
        "Loading images: {} {}",
        cli.left.display(),
        cli.right.display()
    );
    let frame = StereoFrame::open(&cli.left, &cli.right)?;
    tracing::info!("Image size: {}x{}", frame.width(), frame.height());

    let mut disp = BlockMatching::new(cli.params())?;
    let disp_map = disp.compute(&frame)?;

    tracing::info!("Matched {} pixels", disp_map.written());

    #[cfg(feature = "statistics")]
    {
        if let Some(path) = &cli.stats_plot {
            ncc_disparity::statistics::plot_row_ranges(&disp_map, path)?;
            tracing::info!("Statistics plot written to {}", path.display());
        }
    }

    show(&disp_map)
}

#[cfg(feature = "viewer")]
fn show(disp_map: &DisparityMap) -> CliResult<()> {
    ncc_disparity::viewer::show("disparity_map", &disp_map.to_jet())?;
    Ok(())
}

#[cfg(not(feature = "viewer"))]
fn show(disp_map: &DisparityMap) -> CliResult<()> {
    tracing::warn!(
        "Built without the `viewer` feature, not displaying the {}x{} map",
        disp_map.width(),
        disp_map.height()
    );
    Ok(())
}
