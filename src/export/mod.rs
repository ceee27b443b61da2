//! # Tabular Export
//!
//! Writes single spectra and line scans as plain delimited text, the format
//! read back by spreadsheet and plotting tools.
//!
//! ```text
//! single spectrum        line scan (transpose = false)
//!   x0  I0                 0    x0    x1    ...
//!   x1  I1                 y0   I00   I01   ...
//!   ...                    y1   I10   I11   ...
//! ```
//!
//! With `transpose` the line-scan table is flipped so each spectrum becomes a
//! column; the corner cell stays 0.

mod error;


use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::spectrum::Spectrum;

pub use error::ExportError;

/// Formatting options for [`write_delimited`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Field separator (default: tab)
    pub delimiter: u8,
    /// Digits after the decimal point (default: 5)
    pub decimals: usize,
    /// Include axis values as first column / first row (default: true)
    pub axes: bool,
    /// One spectrum per column instead of per row (default: false)
    pub transpose: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            decimals: 5,
            axes: true,
            transpose: false,
        }
    }
}

/// Arrange the data (and optionally the axes) as a table of rows.
///
/// A single spectrum without axes becomes one value per row.
pub fn to_table(
    spectrum: &Spectrum,
    axes: bool,
    transpose: bool,
) -> Result<Vec<Vec<f64>>, ExportError> {
    let signal = spectrum.signal_axis().samples();
    let data = spectrum.rows();
    match spectrum.navigation_axes() {
        [] => {
            let values = data.first().map(|row| row.to_vec()).unwrap_or_default();
            Ok(if axes {
                signal.iter().zip(&values).map(|(&x, &y)| vec![x, y]).collect()
            } else {
                values.into_iter().map(|y| vec![y]).collect()
            })
        }
        [navigation] => {
            let nav = navigation.samples();
            let mut table: Vec<Vec<f64>> = Vec::with_capacity(nav.len() + 1);
            if axes {
                table.push(std::iter::once(0.0).chain(signal.iter().copied()).collect());
            }
            for (y, row) in nav.iter().zip(&data) {
                let mut line = Vec::with_capacity(signal.len() + 1);
                if axes {
                    line.push(*y);
                }
                line.extend(row.iter().copied());
                table.push(line);
            }
            Ok(if transpose { transposed(&table) } else { table })
        }
        more => Err(ExportError::TooManyDimensions(more.len() + 1)),
    }
}

fn transposed(table: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let columns = table.first().map_or(0, Vec::len);
    (0..columns)
        .map(|c| table.iter().map(|row| row[c]).collect())
        .collect()
}

/// Write the table of [`to_table`] as delimited text
pub fn write_delimited<W: Write>(
    spectrum: &Spectrum,
    writer: W,
    options: &ExportOptions,
) -> Result<(), ExportError> {
    let table = to_table(spectrum, options.axes, options.transpose)?;
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(false)
        .from_writer(writer);

    for row in &table {
        csv_writer.write_record(row.iter().map(|v| format!("{:.*}", options.decimals, v)))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the table of [`to_table`] to a file
pub fn write_delimited_file<P: AsRef<Path>>(
    spectrum: &Spectrum,
    path: P,
    options: &ExportOptions,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_delimited(spectrum, BufWriter::new(file), options)?;
    info!("Wrote {} to {}", spectrum.metadata.title, path.display());
    Ok(())
}
