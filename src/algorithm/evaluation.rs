use crate::io::error::Result;
use crate::spatial::MaskGrid;
use crate::spatial::tiles::{Offset, TileLayout, TileSize};

/// Wet-cell count of every non-empty tile in row-major tile order
///
/// Tiles that are entirely dry (or clipped away) do not appear, so the length
/// of the result is the number of subdomains this placement produces and the
/// sum of the result is always `mask.total_wet()`.
///
/// # Errors
///
/// Returns an error if the offset lies outside `[1 - n, 0]` for the size
pub fn evaluate_tiling(mask: &MaskGrid, size: TileSize, offset: Offset) -> Result<Vec<usize>> {
    let layout = TileLayout::new(size, offset, mask.height(), mask.width())?;
    Ok(evaluate_layout(mask, &layout))
}

/// Wet counts for an already validated layout
pub fn evaluate_layout(mask: &MaskGrid, layout: &TileLayout) -> Vec<usize> {
    layout
        .positions()
        .filter_map(|position| {
            let (rows, cols) = layout.cell_span(&position);
            let count = mask.wet_count(rows, cols);
            (count > 0).then_some(count)
        })
        .collect()
}
