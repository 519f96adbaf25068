//! Chart file lookup and output naming.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::pipeline::{ChartOptions, Mode};
use crate::render::OutputFormat;

/// Find a chart: the path as given if it exists, otherwise inside `input_dir`.
pub fn resolve_input(chart: &Path, input_dir: &Path) -> Result<PathBuf> {
    if chart.exists() {
        return Ok(chart.to_path_buf());
    }
    let candidate = input_dir.join(chart);
    if candidate.exists() {
        return Ok(candidate);
    }
    Err(Error::io(
        io::Error::new(
            io::ErrorKind::NotFound,
            format!(
                "chart '{}' not found (looked in current dir and '{}')",
                chart.display(),
                input_dir.display()
            ),
        ),
        chart.to_path_buf(),
    ))
}

/// File name suffix describing how the chart was rendered.
pub fn output_suffix(options: &ChartOptions) -> String {
    match options.mode {
        Mode::Transpose { target } => format!("_{}", target.name().to_uppercase()),
        Mode::Nashville => "_Nashville".to_string(),
        Mode::Original if options.lyrics_only => "_Lyrics".to_string(),
        Mode::Original => String::new(),
    }
}

/// Where to write the rendered chart.
///
/// A bare relative file name passed as `explicit` is placed inside
/// `output_dir`; any other explicit path is used as-is. Without one, the name
/// is derived from the input stem, the mode suffix and the format extension.
pub fn output_path(
    input: &Path,
    explicit: Option<&Path>,
    output_dir: &Path,
    options: &ChartOptions,
    format: OutputFormat,
) -> PathBuf {
    if let Some(path) = explicit {
        let bare = path.is_relative()
            && path.parent().is_none_or(|parent| parent.as_os_str().is_empty());
        return if bare { output_dir.join(path) } else { path.to_path_buf() };
    }

    let stem = input.file_stem().map_or_else(
        || "chart".to_string(),
        |s| s.to_string_lossy().into_owned(),
    );
    output_dir.join(format!("{stem}{}.{}", output_suffix(options), format.extension()))
}
