//! Command-line interface for decomposing a mask file into subdomains

use crate::algorithm::executor::{Decomposition, DecompositionRequest, decompose};
use crate::algorithm::search::{SilentObserver, SizeRange};
use crate::io::configuration::{DEFAULT_MAX_TILE_EXTENT, DEFAULT_MIN_TILE_EXTENT};
use crate::io::decomposition::write_decomposition;
use crate::io::error::{Result, invalid_parameter};
use crate::io::mask::load_mask;
use crate::io::progress::SearchProgress;
use crate::spatial::tiles::TileSize;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "subdiv")]
#[command(
    author,
    version,
    about = "Split a land-sea mask into rectangular subdomains for parallel runs"
)]
/// Command-line arguments for the decomposition tool
pub struct Cli {
    /// Mask file: one line per row, one digit per cell, wet when > 0
    #[arg(value_name = "MASK")]
    pub mask: PathBuf,

    /// Subdomain file to write
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Tile width (fixes the width when searching with --ncpus)
    #[arg(long)]
    pub nx: Option<usize>,

    /// Tile height (fixes the height when searching with --ncpus)
    #[arg(long)]
    pub ny: Option<usize>,

    /// Required number of subdomains; enables the tile size search
    #[arg(long)]
    pub ncpus: Option<usize>,

    /// Smallest tile width to search
    #[arg(long)]
    pub min_nx: Option<usize>,

    /// Largest tile width to search
    #[arg(long)]
    pub max_nx: Option<usize>,

    /// Smallest tile height to search
    #[arg(long)]
    pub min_ny: Option<usize>,

    /// Largest tile height to search
    #[arg(long)]
    pub max_ny: Option<usize>,

    /// Only search square tiles
    #[arg(long)]
    pub square: bool,

    /// Suppress progress and summary output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress and the summary should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Translate the arguments into a decomposition request
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Neither --ncpus nor both --nx and --ny are given
    /// - --nx (or --ny) is combined with its own range bounds
    /// - A size or count is zero, or a range is inverted
    pub fn request(&self) -> Result<DecompositionRequest> {
        if self.ncpus.is_none() && self.nx.is_none() && self.ny.is_none() {
            return Err(invalid_parameter(
                "ncpus",
                &"none",
                &"provide either --ncpus, or --nx and --ny",
            ));
        }
        if self.nx.is_some() && (self.min_nx.is_some() || self.max_nx.is_some()) {
            return Err(invalid_parameter(
                "nx",
                &self.nx.unwrap_or_default(),
                &"--min-nx and --max-nx cannot be combined with --nx",
            ));
        }
        if self.ny.is_some() && (self.min_ny.is_some() || self.max_ny.is_some()) {
            return Err(invalid_parameter(
                "ny",
                &self.ny.unwrap_or_default(),
                &"--min-ny and --max-ny cannot be combined with --ny",
            ));
        }

        let Some(processors) = self.ncpus else {
            let (Some(nx), Some(ny)) = (self.nx, self.ny) else {
                return Err(invalid_parameter(
                    if self.nx.is_none() { "nx" } else { "ny" },
                    &"none",
                    &"without --ncpus both --nx and --ny are required",
                ));
            };
            return Ok(DecompositionRequest::MinimalCount {
                size: TileSize::new(nx, ny)?,
            });
        };

        let nx_range = self.nx.map_or_else(
            || {
                self.min_nx.unwrap_or(DEFAULT_MIN_TILE_EXTENT)
                    ..=self.max_nx.unwrap_or(DEFAULT_MAX_TILE_EXTENT)
            },
            |nx| nx..=nx,
        );
        let ny_range = self.ny.map_or_else(
            || {
                self.min_ny.unwrap_or(DEFAULT_MIN_TILE_EXTENT)
                    ..=self.max_ny.unwrap_or(DEFAULT_MAX_TILE_EXTENT)
            },
            |ny| ny..=ny,
        );

        Ok(DecompositionRequest::ProcessorCount {
            processors,
            sizes: SizeRange::new(nx_range, ny_range, self.square)?,
        })
    }
}

/// Runs one decomposition from the command line
pub struct DecompositionRunner {
    cli: Cli,
}

impl DecompositionRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Validate, load, search, and write the subdomain file
    ///
    /// Argument errors are reported before the mask is read, and nothing is
    /// written unless a placement was found.
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, mask loading, the search, or
    /// writing the output fails
    pub fn run(&self) -> Result<Decomposition> {
        let start_time = Instant::now();
        let request = self.cli.request()?;
        let mask = load_mask(&self.cli.mask)?;

        let decomposition = if self.cli.should_show_progress() {
            Self::announce(&request);
            decompose(&mask, &request, &mut SearchProgress::new())?
        } else {
            decompose(&mask, &request, &mut SilentObserver)?
        };

        write_decomposition(&self.cli.output, &decomposition)?;

        if self.cli.should_show_progress() {
            Self::report(&decomposition, start_time);
        }
        Ok(decomposition)
    }

    // Allow print for user feedback before a long search
    #[allow(clippy::print_stdout)]
    fn announce(request: &DecompositionRequest) {
        match request {
            DecompositionRequest::MinimalCount { .. } => {
                println!("Trying {}...", request.describe());
            }
            DecompositionRequest::ProcessorCount { processors, .. } => {
                println!(
                    "Searching {} for {processors} subdomains...",
                    request.describe()
                );
            }
        }
    }

    // Allow print for the run summary shown to the user
    #[allow(clippy::print_stdout)]
    fn report(decomposition: &Decomposition, start_time: Instant) {
        let size = decomposition.size();
        let offset = decomposition.placement.offset;
        println!(
            "Best solution has a subdomain size of {} x {} at offset ({}, {})",
            size.nx, size.ny, offset.ioffset, offset.joffset
        );
        println!(
            "Best solution has a maximum of {} wet points (out of {}) per subdomain",
            decomposition.placement.max_load(),
            size.area()
        );
        if let Some(summary) = decomposition.load_summary() {
            println!("{summary}");
        }

        println!("Subdomain ids:");
        for row in decomposition.ids.ids().rows() {
            let line = row
                .iter()
                .map(|id| format!("{id:>4}"))
                .collect::<Vec<_>>()
                .join("");
            println!("{line}");
        }
        println!("Done in {:.2?}", start_time.elapsed());
    }
}
