use ndarray::Array2;

use crate::io::configuration::NO_SUBDOMAIN;
use crate::io::error::Result;
use crate::spatial::MaskGrid;
use crate::spatial::tiles::{Offset, TileLayout, TileSize};

/// Subdomain id of every tile slot in a layout
///
/// Non-empty tiles carry dense ids `0..count` in row-major tile order; empty
/// tiles hold [`NO_SUBDOMAIN`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubdomainIds {
    layout: TileLayout,
    ids: Array2<i64>,
    count: usize,
}

impl SubdomainIds {
    /// Layout the ids were assigned on
    pub const fn layout(&self) -> &TileLayout {
        &self.layout
    }

    /// Id array indexed by `[jsub, isub]`
    pub const fn ids(&self) -> &Array2<i64> {
        &self.ids
    }

    /// Number of numbered (non-empty) tiles
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Id at a tile position, [`NO_SUBDOMAIN`] outside the array
    pub fn get(&self, jsub: i64, isub: i64) -> i64 {
        if jsub < 0 || isub < 0 {
            return NO_SUBDOMAIN;
        }
        self.ids
            .get([jsub as usize, isub as usize])
            .copied()
            .unwrap_or(NO_SUBDOMAIN)
    }
}

/// Assign consecutive ids to the non-empty tiles of a placement
///
/// # Errors
///
/// Returns an error if the offset lies outside `[1 - n, 0]` for the size
pub fn number_subdomains(mask: &MaskGrid, size: TileSize, offset: Offset) -> Result<SubdomainIds> {
    let layout = TileLayout::new(size, offset, mask.height(), mask.width())?;
    let mut ids = Array2::from_elem((layout.tile_rows(), layout.tile_cols()), NO_SUBDOMAIN);
    let mut count = 0;

    for position in layout.positions() {
        let (rows, cols) = layout.cell_span(&position);
        if mask.wet_count(rows, cols) > 0 {
            if let Some(slot) = ids.get_mut([position.jsub, position.isub]) {
                *slot = count as i64;
                count += 1;
            }
        }
    }

    Ok(SubdomainIds {
        layout,
        ids,
        count,
    })
}
