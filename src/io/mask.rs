//! Text mask parsing: one line per grid row, one digit per cell

use std::path::Path;

use crate::io::error::{Result, WithPath, malformed_mask};
use crate::spatial::MaskGrid;

/// Read a mask file; a cell is wet when its digit is greater than zero
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content is malformed
pub fn load_mask(path: &Path) -> Result<MaskGrid> {
    let text = std::fs::read_to_string(path).with_path(path, "read mask")?;
    parse_mask(&text)
}

/// Parse mask text into a grid
///
/// # Errors
///
/// Returns an error if:
/// - The text contains no rows
/// - A cell is not a decimal digit
/// - Rows differ in length
pub fn parse_mask(text: &str) -> Result<MaskGrid> {
    let mut width = None;
    let mut height = 0;
    let mut cells = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;

        let row_start = cells.len();
        for (col, ch) in line.chars().enumerate() {
            let digit = ch.to_digit(10).ok_or_else(|| {
                malformed_mask(
                    line_number,
                    &format!("column {}: '{ch}' is not a digit", col + 1),
                )
            })?;
            cells.push(digit > 0);
        }

        let row_width = cells.len() - row_start;
        match width {
            None => width = Some(row_width),
            Some(expected) if expected != row_width => {
                return Err(malformed_mask(
                    line_number,
                    &format!("row has {row_width} cells, expected {expected}"),
                ));
            }
            Some(_) => {}
        }
        height += 1;
    }

    let width = width.ok_or_else(|| malformed_mask(0, &"mask contains no rows"))?;
    MaskGrid::from_cells(height, width, &cells)
}
