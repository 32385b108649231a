//! CSV import of prepared (load, solar) series and cadence resampling.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::sim::types::IntervalSample;

/// Import failure with a human-readable cause.
#[derive(Debug)]
pub struct ImportError {
    /// Description of what went wrong, including the row where applicable.
    pub message: String,
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "import error: {}", self.message)
    }
}

impl std::error::Error for ImportError {}

/// One input row; columns are matched by header name, extra columns (such as
/// a timestamp) are ignored.
#[derive(Debug, Deserialize)]
struct SeriesRow {
    load_kwh: f32,
    solar_kwh: f32,
}

/// Reads a prepared interval series from a CSV file.
///
/// The file must carry a header row with `load_kwh` and `solar_kwh` columns.
/// Rows are taken in file order, which must be chronological.
///
/// # Errors
///
/// Returns an [`ImportError`] if the file cannot be opened, the header is
/// missing the required columns, or a row fails to parse.
pub fn read_series_csv(path: &Path) -> Result<Vec<IntervalSample>, ImportError> {
    let file = File::open(path).map_err(|e| ImportError {
        message: format!("cannot open \"{}\": {e}", path.display()),
    })?;
    read_series(file)
}

/// Reads a prepared interval series from any reader.
///
/// # Errors
///
/// Returns an [`ImportError`] on malformed CSV or non-numeric values.
pub fn read_series(reader: impl Read) -> Result<Vec<IntervalSample>, ImportError> {
    let mut rdr = csv::ReaderBuilder::new().from_reader(reader);
    let mut series = Vec::new();

    for (i, result) in rdr.deserialize::<SeriesRow>().enumerate() {
        let row = result.map_err(|e| ImportError {
            message: format!("row {}: {e}", i + 1),
        })?;
        series.push(IntervalSample::new(row.load_kwh, row.solar_kwh));
    }

    Ok(series)
}

/// Linearly upsamples a per-interval energy series by an integer factor.
///
/// Each source value is split across `factor` finer intervals, ramping
/// linearly toward the next source value; the final source interval is held
/// flat. With `factor == 1` the input is returned unchanged. This mirrors
/// resampling an hourly weather series to a 15-minute cadence.
pub fn resample_linear(values: &[f32], factor: usize) -> Vec<f32> {
    assert!(factor > 0, "resample factor must be > 0");
    if factor == 1 || values.is_empty() {
        return values.to_vec();
    }

    let n = values.len();
    let mut out = Vec::with_capacity(n * factor);
    for i in 0..n {
        let current = values[i];
        let next = values[(i + 1).min(n - 1)];
        for j in 0..factor {
            let frac = j as f32 / factor as f32;
            let v = current + (next - current) * frac;
            out.push(v / factor as f32);
        }
    }
    out
}

/// Upsamples both columns of an interval series by an integer factor.
pub fn resample_series(series: &[IntervalSample], factor: usize) -> Vec<IntervalSample> {
    let load: Vec<f32> = series.iter().map(|s| s.load_kwh).collect();
    let solar: Vec<f32> = series.iter().map(|s| s.solar_kwh).collect();

    let load = resample_linear(&load, factor);
    let solar = resample_linear(&solar, factor);

    load.into_iter()
        .zip(solar)
        .map(|(l, s)| IntervalSample::new(l, s))
        .collect()
}
