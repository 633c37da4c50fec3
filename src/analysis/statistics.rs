//! Load-balance summary of a chosen placement

use num_traits::ToPrimitive;
use std::fmt;

/// Per-subdomain wet-point statistics
#[derive(Debug, Clone, PartialEq)]
pub struct LoadSummary {
    /// Number of subdomains
    pub subdomains: usize,
    /// Total wet points across all subdomains
    pub total: usize,
    /// Fewest wet points in a subdomain
    pub min: usize,
    /// Most wet points in a subdomain
    pub max: usize,
    /// Mean wet points per subdomain
    pub mean: f64,
    /// Cells in an unclipped tile
    pub capacity: usize,
}

impl LoadSummary {
    /// Summarise wet counts for tiles holding at most `capacity` cells
    ///
    /// Returns `None` when there are no subdomains.
    pub fn from_counts(wet_counts: &[usize], capacity: usize) -> Option<Self> {
        let min = wet_counts.iter().copied().min()?;
        let max = wet_counts.iter().copied().max()?;
        let total: usize = wet_counts.iter().sum();
        let mean = total.to_f64().unwrap_or(0.0) / wet_counts.len().to_f64().unwrap_or(1.0);

        Some(Self {
            subdomains: wet_counts.len(),
            total,
            min,
            max,
            mean,
            capacity,
        })
    }

    /// Relative excess of the busiest subdomain over the mean, `max / mean - 1`
    pub fn imbalance(&self) -> f64 {
        if self.mean == 0.0 {
            return 0.0;
        }
        self.max.to_f64().unwrap_or(0.0) / self.mean - 1.0
    }

    /// Fraction of the busiest tile's cells that are wet
    pub fn peak_fill(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.max.to_f64().unwrap_or(0.0) / self.capacity.to_f64().unwrap_or(1.0)
    }
}

impl fmt::Display for LoadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} subdomains, {} wet points, min {} / mean {:.1} / max {} per subdomain (imbalance {:.1}%)",
            self.subdomains,
            self.total,
            self.min,
            self.mean,
            self.max,
            self.imbalance() * 100.0
        )
    }
}
