//! Subdomain file writing and reading
//!
//! Layout, one record per line:
//!
//! ```text
//! <n>
//! <nx> <ny> <width> <height>
//! <id> <x> <y> <w> <nw> <n> <ne> <e> <se> <s> <sw> 1
//! ```
//!
//! Subdomain records follow row-major tile order. Absent neighbors are `-1`.

use std::fmt::Write as _;
use std::path::Path;

use crate::algorithm::executor::Decomposition;
use crate::io::configuration::{NEIGHBOR_COUNT, SUBDOMAIN_RECORD_FLAG};
use crate::io::error::{Result, WithPath, malformed_decomposition};

/// Render a decomposition in the subdomain file layout
pub fn render_decomposition(decomposition: &Decomposition) -> String {
    let size = decomposition.size();
    let (height, width) = decomposition.grid_dimensions();

    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "{}", decomposition.subdomains.len());
    let _ = writeln!(out, "{} {} {width} {height}", size.nx, size.ny);

    for subdomain in &decomposition.subdomains {
        let _ = write!(out, "{} {} {}", subdomain.id, subdomain.x, subdomain.y);
        for neighbor in subdomain.neighbors {
            let _ = write!(out, " {neighbor}");
        }
        let _ = writeln!(out, " {SUBDOMAIN_RECORD_FLAG}");
    }
    out
}

/// Write a decomposition to `path`
///
/// The text is rendered before the file is created, and a failed write
/// removes the file again so no partial output is left behind.
///
/// # Errors
///
/// Returns an error if the file cannot be written
pub fn write_decomposition(path: &Path, decomposition: &Decomposition) -> Result<()> {
    let text = render_decomposition(decomposition);
    if let Err(source) = std::fs::write(path, text) {
        let _ = std::fs::remove_file(path);
        return Err(source).with_path(path, "write decomposition");
    }
    Ok(())
}

/// One subdomain record read back from a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubdomainRecord {
    /// Subdomain id
    pub id: i64,
    /// Grid column of the tile's left edge
    pub x: i64,
    /// Flipped vertical coordinate
    pub y: i64,
    /// Neighbor ids in record order
    pub neighbors: [i64; NEIGHBOR_COUNT],
    /// Trailing flag
    pub flag: i64,
}

/// Parsed subdomain file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecompositionFile {
    /// Tile width
    pub nx: usize,
    /// Tile height
    pub ny: usize,
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Subdomain records in file order
    pub records: Vec<SubdomainRecord>,
}

/// Read a subdomain file from disk
///
/// # Errors
///
/// Returns an error if the file cannot be read or is malformed
pub fn read_decomposition(path: &Path) -> Result<DecompositionFile> {
    let text = std::fs::read_to_string(path).with_path(path, "read decomposition")?;
    parse_decomposition(&text)
}

fn parse_fields<T: std::str::FromStr>(line_number: usize, line: &str) -> Result<Vec<T>> {
    line.split_whitespace()
        .map(|field| {
            field.parse::<T>().map_err(|_parse_error| {
                malformed_decomposition(line_number, &format!("'{field}' is not a valid number"))
            })
        })
        .collect()
}

/// Parse subdomain file text
///
/// # Errors
///
/// Returns an error if:
/// - The count or size line is missing or has the wrong number of fields
/// - A field is not an integer
/// - The number of records differs from the declared count
pub fn parse_decomposition(text: &str) -> Result<DecompositionFile> {
    let mut lines = text.lines().enumerate().map(|(index, line)| (index + 1, line));

    let (count_line, count_text) = lines
        .next()
        .ok_or_else(|| malformed_decomposition(1, &"missing subdomain count"))?;
    let count = match parse_fields::<usize>(count_line, count_text)?.as_slice() {
        [count] => *count,
        fields => {
            return Err(malformed_decomposition(
                count_line,
                &format!("expected 1 field, found {}", fields.len()),
            ));
        }
    };

    let (size_line, size_text) = lines
        .next()
        .ok_or_else(|| malformed_decomposition(2, &"missing tile size line"))?;
    let (nx, ny, width, height) = match parse_fields::<usize>(size_line, size_text)?.as_slice() {
        [nx, ny, width, height] => (*nx, *ny, *width, *height),
        fields => {
            return Err(malformed_decomposition(
                size_line,
                &format!("expected 4 fields, found {}", fields.len()),
            ));
        }
    };

    let mut records = Vec::with_capacity(count);
    for (line_number, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields = parse_fields::<i64>(line_number, line)?;
        let record = match fields.as_slice() {
            [id, x, y, neighbors @ .., flag] => <[i64; NEIGHBOR_COUNT]>::try_from(neighbors)
                .ok()
                .map(|neighbors| SubdomainRecord {
                    id: *id,
                    x: *x,
                    y: *y,
                    neighbors,
                    flag: *flag,
                }),
            _ => None,
        }
        .ok_or_else(|| {
            malformed_decomposition(
                line_number,
                &format!(
                    "expected {} fields, found {}",
                    NEIGHBOR_COUNT + 4,
                    fields.len()
                ),
            )
        })?;
        records.push(record);
    }

    if records.len() != count {
        return Err(malformed_decomposition(
            count_line,
            &format!("declared {count} subdomains, found {}", records.len()),
        ));
    }

    Ok(DecompositionFile {
        nx,
        ny,
        width,
        height,
        records,
    })
}
